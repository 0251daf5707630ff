use crate::errors::{CalculationError, Result};
use crate::input::TimeDependentInput;
use crate::mechanisms::asphalt_wave_impact::AsphaltWaveImpactTimeDependentOutput;
use crate::mechanisms::common;
use crate::mechanisms::grass_wave_impact::GrassWaveImpactTimeDependentOutput;
use crate::mechanisms::grass_wave_overtopping::GrassWaveOvertoppingTimeDependentOutput;
use crate::mechanisms::grass_wave_runup::GrassWaveRunupTimeDependentOutput;
use crate::mechanisms::natural_stone_wave_impact::NaturalStoneWaveImpactTimeDependentOutput;
use serde::Serialize;

/// Unwrap a construction property the output type requires.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or_else(|| CalculationError::missing_output_field(field))
}

/// Fields shared by every time dependent output, as set by a mechanism.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeDependentOutputConstructionProperties {
    pub increment_damage: Option<f64>,
    pub damage: Option<f64>,
    pub time_of_failure: Option<i64>,
}

impl TimeDependentOutputConstructionProperties {
    /// Properties for a step that started at `damage_at_start`, with damage
    /// and time of failure derived from `increment_damage`.
    pub fn from_increment(
        increment_damage: f64,
        damage_at_start: f64,
        failure_number: f64,
        step: &TimeDependentInput,
    ) -> Self {
        let damage = common::damage(increment_damage, damage_at_start);
        let time_of_failure = common::failure_revetment(damage_at_start, damage, failure_number)
            .then(|| {
                common::time_of_failure(
                    step.begin_time,
                    step.end_time,
                    damage_at_start,
                    increment_damage,
                    failure_number,
                )
            });

        Self {
            increment_damage: Some(increment_damage),
            damage: Some(damage),
            time_of_failure,
        }
    }
}

/// Mechanism-specific diagnostics of a time step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mechanism", rename_all = "snake_case")]
pub enum TimeDependentOutputDetails {
    AsphaltWaveImpact(AsphaltWaveImpactTimeDependentOutput),
    GrassWaveImpact(GrassWaveImpactTimeDependentOutput),
    GrassWaveRunup(GrassWaveRunupTimeDependentOutput),
    GrassWaveOvertopping(GrassWaveOvertoppingTimeDependentOutput),
    NaturalStoneWaveImpact(NaturalStoneWaveImpactTimeDependentOutput),
}

/// Result of one location for one time step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeDependentOutput {
    increment_damage: f64,
    damage: f64,
    time_of_failure: Option<i64>,
    details: TimeDependentOutputDetails,
}

impl TimeDependentOutput {
    /// Build an output, failing with
    /// [`CalculationError::InvalidTimeDependentOutput`] when a required
    /// property is unset.
    pub fn new(
        properties: TimeDependentOutputConstructionProperties,
        details: TimeDependentOutputDetails,
    ) -> Result<Self> {
        Ok(Self {
            increment_damage: required(properties.increment_damage, "increment_damage")?,
            damage: required(properties.damage, "damage")?,
            time_of_failure: properties.time_of_failure,
            details,
        })
    }

    /// Damage accrued in this step. NaN or infinite when the mechanism
    /// determined that no load applies.
    pub fn increment_damage(&self) -> f64 {
        self.increment_damage
    }

    /// Cumulative damage at the end of this step.
    pub fn damage(&self) -> f64 {
        self.damage
    }

    /// Failure moment (seconds, rounded up) when the failure number was
    /// first reached in this step.
    pub fn time_of_failure(&self) -> Option<i64> {
        self.time_of_failure
    }

    pub fn details(&self) -> &TimeDependentOutputDetails {
        &self.details
    }

    /// Recompute damage and time of failure for a different damage at the
    /// start of the step. Only meaningful for outputs of stateless
    /// locations, whose increment does not depend on that damage.
    pub(crate) fn rebase(
        &mut self,
        damage_at_start: f64,
        failure_number: f64,
        step: &TimeDependentInput,
    ) {
        let properties = TimeDependentOutputConstructionProperties::from_increment(
            self.increment_damage,
            damage_at_start,
            failure_number,
            step,
        );
        self.damage = properties.damage.unwrap_or(damage_at_start);
        self.time_of_failure = properties.time_of_failure;
    }
}
