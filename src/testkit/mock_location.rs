//! A scripted location for exercising the calculator without a physical
//! mechanism behind it.
//!
//! The increment of a step is `rate` per hour of step duration. A stateful
//! mock multiplies that by `1 + damage_at_start`, so its result differs
//! when the damage is not chained correctly.

use crate::errors::{GeometryError, Result};
use crate::input::{FailureMechanism, LocationCommon, LocationDependentInput, TimeDependentInput};
use crate::mechanisms::grass_wave_impact::{
    GrassWaveImpactLocationDependentOutput,
    GrassWaveImpactTimeDependentOutputConstructionProperties,
};
use crate::output::{
    LocationDependentOutput, LocationDependentOutputDetails, TimeDependentOutput,
    TimeDependentOutputConstructionProperties, TimeDependentOutputDetails,
};
use crate::profile::ProfileData;
use crate::validation::{rules, ValidationReport};

const HOUR: f64 = 3600.0;

#[derive(Debug, Clone)]
pub struct MockLocation {
    common: LocationCommon,
    rate: f64,
    stateful: bool,
    initialized: bool,
    fail_initialization: bool,
    omit_increment_damage: bool,
    validation_error: Option<String>,
}

impl MockLocation {
    /// A stateless location accruing `rate` damage per hour.
    pub fn constant(x: f64, rate: f64) -> Self {
        Self {
            common: LocationCommon::new(x, 0.0, 1.0),
            rate,
            stateful: false,
            initialized: false,
            fail_initialization: false,
            omit_increment_damage: false,
            validation_error: None,
        }
    }

    /// A location whose increment grows with the damage at the start of
    /// the step.
    pub fn stateful(x: f64, rate: f64) -> Self {
        Self {
            stateful: true,
            ..Self::constant(x, rate)
        }
    }

    pub fn with_initial_damage(mut self, initial_damage: f64) -> Self {
        self.common.initial_damage = initial_damage;
        self
    }

    pub fn with_failure_number(mut self, failure_number: f64) -> Self {
        self.common.failure_number = failure_number;
        self
    }

    pub fn with_validation_error(mut self, message: impl Into<String>) -> Self {
        self.validation_error = Some(message.into());
        self
    }

    pub fn failing_initialization(mut self) -> Self {
        self.fail_initialization = true;
        self
    }

    /// Leave the increment damage of every output unset.
    pub fn without_increment_damage(mut self) -> Self {
        self.omit_increment_damage = true;
        self
    }

    fn increment(&self, damage_at_start: f64, time_step: &TimeDependentInput) -> f64 {
        let hours = time_step.increment_time() / HOUR;
        if self.stateful {
            self.rate * (1.0 + damage_at_start) * hours
        } else {
            self.rate * hours
        }
    }
}

impl LocationDependentInput for MockLocation {
    fn common(&self) -> &LocationCommon {
        &self.common
    }

    fn mechanism(&self) -> FailureMechanism {
        FailureMechanism::GrassWaveImpact
    }

    fn validate(
        &self,
        _time_steps: &[TimeDependentInput],
        profile: &ProfileData,
        report: &mut ValidationReport,
    ) {
        self.common.validate(report);
        rules::on_outer_slope(report, self.common.x, profile);
        if let Some(message) = &self.validation_error {
            report.error(message.clone());
        }
    }

    fn initialize(&mut self, profile: &ProfileData) -> std::result::Result<(), GeometryError> {
        if self.fail_initialization {
            return Err(GeometryError::new("scripted initialization failure"));
        }
        self.common.initialize(profile)?;
        self.initialized = true;
        Ok(())
    }

    fn is_calculate_stateful(&self) -> bool {
        self.stateful
    }

    fn calculate(
        &self,
        damage_at_start: f64,
        time_step: &TimeDependentInput,
        _profile: &ProfileData,
    ) -> Result<TimeDependentOutput> {
        assert!(self.initialized, "calculate called before initialize");

        let increment = self.increment(damage_at_start, time_step);
        let mut properties = TimeDependentOutputConstructionProperties::from_increment(
            increment,
            damage_at_start,
            self.common.failure_number,
            time_step,
        );
        if self.omit_increment_damage {
            properties.increment_damage = None;
        }

        let details = GrassWaveImpactTimeDependentOutputConstructionProperties {
            loading_revetment: Some(false),
            ..Default::default()
        };
        TimeDependentOutput::new(
            properties,
            TimeDependentOutputDetails::GrassWaveImpact(details.build()?),
        )
    }

    fn location_dependent_output(
        &self,
        time_dependent_output_items: Vec<TimeDependentOutput>,
    ) -> LocationDependentOutput {
        LocationDependentOutput::new(
            time_dependent_output_items,
            self.common.z,
            LocationDependentOutputDetails::GrassWaveImpact(
                GrassWaveImpactLocationDependentOutput {
                    minimum_wave_height: 0.0,
                    maximum_wave_height: 0.0,
                },
            ),
        )
    }
}
