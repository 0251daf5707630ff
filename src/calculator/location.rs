//! The time step loop of a single location.

use crate::errors::Result;
use crate::input::{LocationDependentInput, TimeDependentInput};
use crate::observability::{
    increment_processed, set_current_location, set_current_time_step, set_phase,
    CalculationPhase,
};
use crate::output::TimeDependentOutput;
use crate::profile::ProfileData;
use rayon::prelude::*;
use tracing::debug;

/// Calculate every time step of the location at `index`, in time order.
///
/// The damage at the start of the first step is the initial damage of the
/// location; every later step starts at the damage the previous step ended
/// with. Failing does not stop the loop.
///
/// With `time_steps_in_parallel` the steps of a stateless location are
/// calculated concurrently from zero damage and rebased in time order
/// afterwards. The result is identical to the sequential loop. Stateful
/// locations always run sequentially.
pub fn calculate_location(
    index: usize,
    location: &dyn LocationDependentInput,
    time_steps: &[TimeDependentInput],
    profile: &ProfileData,
    time_steps_in_parallel: bool,
) -> Result<Vec<TimeDependentOutput>> {
    let _phase = set_phase(CalculationPhase::Calculation);
    let _location = set_current_location(index);

    let outputs = if time_steps_in_parallel && !location.is_calculate_stateful() {
        calculate_steps_in_parallel(index, location, time_steps, profile)?
    } else {
        calculate_steps_sequentially(location, time_steps, profile)?
    };

    increment_processed();
    debug!(
        location = index,
        mechanism = %location.mechanism(),
        steps = outputs.len(),
        damage = outputs.last().map_or(location.initial_damage(), TimeDependentOutput::damage),
        failed = outputs.iter().any(|o| o.time_of_failure().is_some()),
        "Location calculated"
    );
    Ok(outputs)
}

fn calculate_steps_sequentially(
    location: &dyn LocationDependentInput,
    time_steps: &[TimeDependentInput],
    profile: &ProfileData,
) -> Result<Vec<TimeDependentOutput>> {
    let mut outputs = Vec::with_capacity(time_steps.len());
    let mut damage = location.initial_damage();

    for (step_index, step) in time_steps.iter().enumerate() {
        let _step = set_current_time_step(step_index);
        let output = location.calculate(damage, step, profile)?;
        damage = output.damage();
        outputs.push(output);
    }

    Ok(outputs)
}

fn calculate_steps_in_parallel(
    index: usize,
    location: &dyn LocationDependentInput,
    time_steps: &[TimeDependentInput],
    profile: &ProfileData,
) -> Result<Vec<TimeDependentOutput>> {
    let mut outputs = time_steps
        .par_iter()
        .enumerate()
        .map(|(step_index, step)| {
            let _phase = set_phase(CalculationPhase::Calculation);
            let _location = set_current_location(index);
            let _step = set_current_time_step(step_index);
            location.calculate(0.0, step, profile)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut damage = location.initial_damage();
    for (output, step) in outputs.iter_mut().zip(time_steps) {
        output.rebase(damage, location.failure_number(), step);
        damage = output.damage();
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::helpers::{dike_profile, hourly_time_steps};
    use crate::testkit::mock_location::MockLocation;

    fn initialized(location: MockLocation) -> MockLocation {
        let mut location = location;
        location.initialize(&dike_profile()).unwrap();
        location
    }

    #[test]
    fn test_outputs_are_aligned_with_time_steps() {
        let location = initialized(MockLocation::constant(10.0, 0.1));
        let steps = hourly_time_steps(7);
        let outputs = calculate_location(0, &location, &steps, &dike_profile(), false).unwrap();
        assert_eq!(outputs.len(), steps.len());
    }

    #[test]
    fn test_parallel_steps_match_sequential_bit_for_bit() {
        let location = initialized(MockLocation::constant(10.0, 0.137).with_initial_damage(0.3));
        let steps = hourly_time_steps(12);
        let profile = dike_profile();

        let sequential = calculate_location(0, &location, &steps, &profile, false).unwrap();
        let parallel = calculate_location(0, &location, &steps, &profile, true).unwrap();

        for (s, p) in sequential.iter().zip(&parallel) {
            assert_eq!(s.damage().to_bits(), p.damage().to_bits());
            assert_eq!(s.time_of_failure(), p.time_of_failure());
        }
    }

    #[test]
    fn test_stateful_location_chains_damage() {
        let location = initialized(MockLocation::stateful(10.0, 0.5));
        let steps = hourly_time_steps(2);
        let outputs = calculate_location(0, &location, &steps, &dike_profile(), true).unwrap();

        // 0.5 * (1 + 0) then 0.5 * (1 + 0.5)
        assert!((outputs[0].increment_damage() - 0.5).abs() < 1e-12);
        assert!((outputs[1].increment_damage() - 0.75).abs() < 1e-12);
    }
}
