//! The calculation engine.
//!
//! A calculation runs in four phases, each finished for every location
//! before the next one starts:
//!
//! 1. validation of the profile, the time steps and every location;
//! 2. initialization of every location against the profile;
//! 3. the time step loop of every location;
//! 4. assembly of the location outputs.
//!
//! Locations never see each other, so phases 2 to 4 can fan out over
//! locations. Within a location the damage at the start of a step is the
//! damage at the end of the previous one; for locations whose increment
//! does not depend on that damage the steps themselves can also fan out,
//! after which the damages are chained in time order.

mod location;

use crate::config::CalculatorSettings;
use crate::errors::{CalculationError, Result};
use crate::input::{CalculationInput, LocationDependentInput, TimeDependentInput};
use crate::observability::{set_phase, track_progress, CalculationPhase, LocationProgress};
use crate::output::{CalculationOutput, LocationDependentOutput, TimeDependentOutput};
use crate::profile::ProfileData;
use crate::result::{DataResult, Event};
use crate::validation;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};

pub use location::calculate_location;

/// Runs calculations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Validate and calculate `input`.
    ///
    /// Validation problems come back as `Ok(DataResult::Failure)` with every
    /// event that was found. `Err` is reserved for defects, such as a
    /// mechanism building an output without a required field; the first
    /// defect aborts the whole run.
    pub fn calculate(
        input: CalculationInput,
        settings: &CalculatorSettings,
    ) -> Result<DataResult<CalculationOutput>> {
        let span = info_span!(
            "calculation_run",
            locations = input.locations().len(),
            time_steps = input.time_steps().len(),
            locations_in_parallel = settings.calculate_locations_in_parallel,
            time_steps_in_parallel = settings.calculate_time_steps_in_parallel,
        );
        let _guard = span.enter();

        info!(
            locations = input.locations().len(),
            time_steps = input.time_steps().len(),
            "Starting calculation"
        );

        let events = {
            let _span = info_span!("validation").entered();
            let _phase = set_phase(CalculationPhase::Validation);
            let report = validation::validate_calculation_input(&input);
            debug!(
                errors = report.error_count(),
                warnings = report.warning_count(),
                "Input validated"
            );
            let failed = report.has_errors();
            let events: Vec<Event> = report.into_issues().into_iter().map(Event::from).collect();
            if failed {
                info!(events = events.len(), "Validation failed, nothing calculated");
                return Ok(DataResult::Failure { events });
            }
            events
        };

        let (profile, mut locations, time_steps) = input.into_parts();

        {
            let _span = info_span!("initialization").entered();
            initialize_locations(&mut locations, &profile, settings)?;
        }

        let outputs = {
            let _span = info_span!("calculation").entered();
            warn_for_forced_sequential_steps(&locations, settings);
            calculate_locations(&locations, &time_steps, &profile, settings)?
        };

        let items = {
            let _span = info_span!("output_assembly").entered();
            assemble_outputs(&locations, outputs, settings)
        };

        info!(locations = items.len(), "Calculation finished");
        Ok(DataResult::Success {
            data: CalculationOutput::new(items),
            events,
        })
    }
}

fn initialize_location(
    index: usize,
    location: &mut Box<dyn LocationDependentInput>,
    profile: &ProfileData,
) -> Result<()> {
    let _phase = set_phase(CalculationPhase::Initialization);
    let _location = crate::observability::set_current_location(index);
    location
        .initialize(profile)
        .map_err(|e| CalculationError::initialization(index, e.to_string()))?;
    debug!(location = index, z = location.common().z, "Location initialized");
    Ok(())
}

fn initialize_locations(
    locations: &mut [Box<dyn LocationDependentInput>],
    profile: &ProfileData,
    settings: &CalculatorSettings,
) -> Result<()> {
    if settings.calculate_locations_in_parallel {
        locations
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(index, location)| initialize_location(index, location, profile))
    } else {
        locations
            .iter_mut()
            .enumerate()
            .try_for_each(|(index, location)| initialize_location(index, location, profile))
    }
}

/// Stateful locations ignore the time step setting. Reported once per run.
fn warn_for_forced_sequential_steps(
    locations: &[Box<dyn LocationDependentInput>],
    settings: &CalculatorSettings,
) {
    if !settings.calculate_time_steps_in_parallel {
        return;
    }
    let stateful = locations
        .iter()
        .filter(|location| location.is_calculate_stateful())
        .count();
    if stateful > 0 {
        warn!(
            stateful_locations = stateful,
            "Time steps of locations whose damage increment depends on the damage at the start \
             of a step are calculated sequentially"
        );
    }
}

fn calculate_locations(
    locations: &[Box<dyn LocationDependentInput>],
    time_steps: &[TimeDependentInput],
    profile: &ProfileData,
    settings: &CalculatorSettings,
) -> Result<Vec<Vec<TimeDependentOutput>>> {
    let progress = Arc::new(LocationProgress::new(locations.len()));
    let _progress = track_progress(&progress);
    let time_steps_in_parallel = settings.calculate_time_steps_in_parallel;

    if settings.calculate_locations_in_parallel {
        locations
            .par_iter()
            .enumerate()
            .map(|(index, location)| {
                let _progress = track_progress(&progress);
                calculate_location(
                    index,
                    location.as_ref(),
                    time_steps,
                    profile,
                    time_steps_in_parallel,
                )
            })
            .collect()
    } else {
        locations
            .iter()
            .enumerate()
            .map(|(index, location)| {
                calculate_location(
                    index,
                    location.as_ref(),
                    time_steps,
                    profile,
                    time_steps_in_parallel,
                )
            })
            .collect()
    }
}

fn assemble_outputs(
    locations: &[Box<dyn LocationDependentInput>],
    outputs: Vec<Vec<TimeDependentOutput>>,
    settings: &CalculatorSettings,
) -> Vec<LocationDependentOutput> {
    let _phase = set_phase(CalculationPhase::OutputAssembly);
    if settings.calculate_locations_in_parallel {
        locations
            .par_iter()
            .zip(outputs.into_par_iter())
            .map(|(location, items)| location.location_dependent_output(items))
            .collect()
    } else {
        locations
            .iter()
            .zip(outputs)
            .map(|(location, items)| location.location_dependent_output(items))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GrassWaveImpactLocationConstructionProperties;
    use crate::mechanisms::TopLayerType;
    use crate::testkit::helpers::{dike_profile, dike_profile_builder, hourly_time_steps};
    use crate::testkit::mock_location::MockLocation;
    use crate::{assert_result_err, assert_result_ok};

    fn input(locations: Vec<MockLocation>, steps: usize) -> CalculationInput {
        CalculationInput::new(
            dike_profile(),
            locations
                .into_iter()
                .map(|l| Box::new(l) as Box<dyn LocationDependentInput>)
                .collect(),
            hourly_time_steps(steps),
        )
    }

    #[test]
    fn test_validation_failure_calculates_nothing() {
        let input = CalculationInput::new(ProfileData::new(vec![], vec![], None), vec![], vec![]);
        let result = assert_result_ok!(Calculator::calculate(
            input,
            &CalculatorSettings::sequential()
        ));

        assert!(!result.successful());
        assert_eq!(result.events().len(), 5);
    }

    #[test]
    fn test_location_error_is_reported_as_event() {
        let input = input(
            vec![
                MockLocation::constant(10.0, 0.1),
                MockLocation::constant(20.0, 0.1).with_validation_error("bad coefficient"),
            ],
            2,
        );
        let result = assert_result_ok!(Calculator::calculate(
            input,
            &CalculatorSettings::sequential()
        ));
        assert_eq!(
            result.events()[0].message,
            "Location 1 (X = 20): bad coefficient"
        );
    }

    #[test]
    fn test_damage_accumulates_from_initial_damage() {
        let input = input(vec![MockLocation::constant(10.0, 0.25).with_initial_damage(0.1)], 4);
        let result = assert_result_ok!(Calculator::calculate(
            input,
            &CalculatorSettings::sequential()
        ));
        let output = &result.data().unwrap().location_dependent_output_items()[0];
        let damages: Vec<f64> = output
            .time_dependent_output_items()
            .iter()
            .map(TimeDependentOutput::damage)
            .collect();

        assert_eq!(damages.len(), 4);
        assert!((damages[3] - 1.1).abs() < 1e-12);
        assert!((output.z() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculation_continues_after_failure() {
        let input = input(vec![MockLocation::constant(10.0, 0.5)], 3);
        let result = assert_result_ok!(Calculator::calculate(
            input,
            &CalculatorSettings::sequential()
        ));
        let items = result.data().unwrap().location_dependent_output_items()[0]
            .time_dependent_output_items()
            .to_vec();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].time_of_failure(), None);
        assert_eq!(items[1].time_of_failure(), Some(7200));
        assert_eq!(items[2].time_of_failure(), None);
        assert!((items[2].damage() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_time_step_parallelism_rebases_stateless_locations() {
        let settings = CalculatorSettings::new(false, true);
        let sequential = assert_result_ok!(Calculator::calculate(
            input(vec![MockLocation::constant(10.0, 0.3).with_initial_damage(0.2)], 6),
            &CalculatorSettings::sequential()
        ));
        let parallel = assert_result_ok!(Calculator::calculate(
            input(vec![MockLocation::constant(10.0, 0.3).with_initial_damage(0.2)], 6),
            &settings
        ));

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_stateful_location_ignores_time_step_parallelism() {
        let sequential = assert_result_ok!(Calculator::calculate(
            input(vec![MockLocation::stateful(10.0, 0.1)], 5),
            &CalculatorSettings::sequential()
        ));
        let parallel = assert_result_ok!(Calculator::calculate(
            input(vec![MockLocation::stateful(10.0, 0.1)], 5),
            &CalculatorSettings::parallel()
        ));

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_missing_output_field_aborts_the_run() {
        let input = input(
            vec![
                MockLocation::constant(10.0, 0.1),
                MockLocation::constant(20.0, 0.1).without_increment_damage(),
            ],
            2,
        );
        let error = assert_result_err!(Calculator::calculate(
            input,
            &CalculatorSettings::sequential()
        ));
        assert!(matches!(
            error,
            CalculationError::InvalidTimeDependentOutput {
                field: "increment_damage"
            }
        ));
        assert!(error.is_defect());
    }

    #[test]
    fn test_initialization_error_names_the_location() {
        let input = input(
            vec![
                MockLocation::constant(10.0, 0.1),
                MockLocation::constant(20.0, 0.1).failing_initialization(),
            ],
            1,
        );
        let error = assert_result_err!(Calculator::calculate(
            input,
            &CalculatorSettings::parallel()
        ));
        assert!(matches!(
            error,
            CalculationError::Initialization { location: 1, .. }
        ));
    }

    #[test]
    fn test_time_step_spanning_most_of_the_i64_range() {
        let mut builder = dike_profile_builder();
        builder
            .add_time_step(i64::MIN / 2 - 10, i64::MAX / 2 + 10, 5.0, 1.0, 4.0, 0.0)
            .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
                20.0,
                TopLayerType::ClosedSod,
            ));
        let input = builder.build().into_result().unwrap();

        let result = assert_result_ok!(Calculator::calculate(
            input,
            &CalculatorSettings::parallel()
        ));
        let output = &result.data().unwrap().location_dependent_output_items()[0];
        assert_eq!(output.time_dependent_output_items().len(), 1);
    }
}
