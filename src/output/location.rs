use super::time_step::TimeDependentOutput;
use crate::input::TimeDependentInput;
use crate::mechanisms::asphalt_wave_impact::AsphaltWaveImpactLocationDependentOutput;
use crate::mechanisms::grass_wave_impact::GrassWaveImpactLocationDependentOutput;
use crate::mechanisms::grass_wave_overtopping::GrassWaveOvertoppingLocationDependentOutput;
use crate::mechanisms::grass_wave_runup::GrassWaveRunupLocationDependentOutput;
use crate::mechanisms::natural_stone_wave_impact::NaturalStoneWaveImpactLocationDependentOutput;
use serde::Serialize;

/// Mechanism-specific values derived for a location during initialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mechanism", rename_all = "snake_case")]
pub enum LocationDependentOutputDetails {
    AsphaltWaveImpact(AsphaltWaveImpactLocationDependentOutput),
    GrassWaveImpact(GrassWaveImpactLocationDependentOutput),
    GrassWaveRunup(GrassWaveRunupLocationDependentOutput),
    GrassWaveOvertopping(GrassWaveOvertoppingLocationDependentOutput),
    NaturalStoneWaveImpact(NaturalStoneWaveImpactLocationDependentOutput),
}

/// All time step results of one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDependentOutput {
    time_dependent_output_items: Vec<TimeDependentOutput>,
    z: f64,
    details: LocationDependentOutputDetails,
}

impl LocationDependentOutput {
    pub fn new(
        time_dependent_output_items: Vec<TimeDependentOutput>,
        z: f64,
        details: LocationDependentOutputDetails,
    ) -> Self {
        Self {
            time_dependent_output_items,
            z,
            details,
        }
    }

    /// Outputs index-aligned with the time steps of the calculation.
    pub fn time_dependent_output_items(&self) -> &[TimeDependentOutput] {
        &self.time_dependent_output_items
    }

    /// Height of the location on the profile.
    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn details(&self) -> &LocationDependentOutputDetails {
        &self.details
    }

    /// Cumulative damage at the end of every time step, starting from
    /// `initial_damage`. NaN and infinite increments are skipped.
    pub fn cumulative_damages(&self, initial_damage: f64) -> Vec<f64> {
        cumulative_damages(
            initial_damage,
            self.time_dependent_output_items
                .iter()
                .map(TimeDependentOutput::increment_damage),
        )
    }

    /// Interpolated moment at which the cumulative damage first reaches
    /// `failure_number`, or `None` if it never does.
    pub fn time_of_failure(
        &self,
        initial_damage: f64,
        failure_number: f64,
        time_steps: &[TimeDependentInput],
    ) -> Option<f64> {
        time_of_failure(
            initial_damage,
            failure_number,
            &self
                .time_dependent_output_items
                .iter()
                .map(TimeDependentOutput::increment_damage)
                .collect::<Vec<_>>(),
            time_steps,
        )
    }

    /// Whether the failure number is reached in any time step.
    pub fn failed(&self, initial_damage: f64, failure_number: f64) -> bool {
        self.cumulative_damages(initial_damage)
            .last()
            .is_some_and(|&damage| damage >= failure_number)
            && initial_damage < failure_number
    }
}

/// Running sum of `initial_damage` and the finite `increments`.
pub fn cumulative_damages(
    initial_damage: f64,
    increments: impl IntoIterator<Item = f64>,
) -> Vec<f64> {
    increments
        .into_iter()
        .scan(initial_damage, |damage, increment| {
            if increment.is_finite() {
                *damage += increment;
            }
            Some(*damage)
        })
        .collect()
}

/// First crossing of `failure_number`, interpolated linearly within the
/// step in which it happens.
pub fn time_of_failure(
    initial_damage: f64,
    failure_number: f64,
    increments: &[f64],
    time_steps: &[TimeDependentInput],
) -> Option<f64> {
    let mut damage_at_start = initial_damage;

    for (&increment, step) in increments.iter().zip(time_steps) {
        if !increment.is_finite() {
            continue;
        }

        let damage = damage_at_start + increment;
        if damage_at_start < failure_number && damage >= failure_number {
            let fraction = (failure_number - damage_at_start) / increment;
            return Some(step.begin_time as f64 + fraction * step.increment_time());
        }
        damage_at_start = damage;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(bounds: &[(i64, i64)]) -> Vec<TimeDependentInput> {
        bounds
            .iter()
            .map(|&(begin, end)| TimeDependentInput::new(begin, end, 1.0, 1.0, 4.0, 0.0))
            .collect()
    }

    #[test]
    fn test_cumulative_damages_skip_nan() {
        let damages = cumulative_damages(0.5, [0.125, f64::NAN, 0.25]);
        assert_eq!(damages, vec![0.625, 0.625, 0.875]);
    }

    #[test]
    fn test_cumulative_damages_skip_infinity() {
        let damages = cumulative_damages(0.0, [f64::INFINITY, 1.0, f64::NEG_INFINITY]);
        assert_eq!(damages, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_time_of_failure_single_step() {
        let time = time_of_failure(0.0, 1.0, &[2.0], &steps(&[(0, 100)]));
        assert_eq!(time, Some(50.0));
    }

    #[test]
    fn test_time_of_failure_in_later_step() {
        let time = time_of_failure(
            0.0,
            1.0,
            &[0.5, f64::NAN, 1.0],
            &steps(&[(0, 10), (10, 20), (20, 30)]),
        );
        assert_eq!(time, Some(25.0));
    }

    #[test]
    fn test_time_of_failure_never_reached() {
        let time = time_of_failure(0.0, 1.0, &[0.2, 0.3], &steps(&[(0, 10), (10, 20)]));
        assert_eq!(time, None);
    }

    #[test]
    fn test_time_of_failure_already_failed_at_start() {
        let time = time_of_failure(1.0, 1.0, &[0.2], &steps(&[(0, 10)]));
        assert_eq!(time, None);
    }
}
