use super::TimeDependentInput;
use crate::errors::GeometryError;
use crate::output::{LocationDependentOutput, TimeDependentOutput};
use crate::profile::ProfileData;
use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure mechanism of a location, used for labelling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureMechanism {
    AsphaltWaveImpact,
    GrassWaveImpact,
    GrassWaveRunupRayleighDiscrete,
    GrassWaveRunupBattjesGroenendijkAnalytical,
    GrassWaveOvertoppingRayleighDiscrete,
    GrassWaveOvertoppingRayleighAnalytical,
    NaturalStoneWaveImpact,
}

impl FailureMechanism {
    /// Overtopping locations lie on the crest or inner slope instead of the
    /// outer slope.
    pub fn is_overtopping(&self) -> bool {
        matches!(
            self,
            Self::GrassWaveOvertoppingRayleighDiscrete
                | Self::GrassWaveOvertoppingRayleighAnalytical
        )
    }
}

impl fmt::Display for FailureMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AsphaltWaveImpact => "asphalt wave impact",
            Self::GrassWaveImpact => "grass wave impact",
            Self::GrassWaveRunupRayleighDiscrete => "grass wave runup (Rayleigh discrete)",
            Self::GrassWaveRunupBattjesGroenendijkAnalytical => {
                "grass wave runup (Battjes-Groenendijk analytical)"
            }
            Self::GrassWaveOvertoppingRayleighDiscrete => {
                "grass wave overtopping (Rayleigh discrete)"
            }
            Self::GrassWaveOvertoppingRayleighAnalytical => {
                "grass wave overtopping (Rayleigh analytical)"
            }
            Self::NaturalStoneWaveImpact => "natural stone wave impact",
        };
        f.write_str(name)
    }
}

/// Properties every location has, regardless of its mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCommon {
    pub x: f64,
    /// Height on the profile; NaN until the location is initialized.
    pub z: f64,
    pub initial_damage: f64,
    pub failure_number: f64,
}

impl LocationCommon {
    pub fn new(x: f64, initial_damage: f64, failure_number: f64) -> Self {
        Self {
            x,
            z: f64::NAN,
            initial_damage,
            failure_number,
        }
    }

    pub fn validate(&self, report: &mut ValidationReport) {
        report.require(
            self.initial_damage.is_finite() && self.initial_damage >= 0.0,
            "InitialDamage must be equal to or larger than 0.",
        );
        report.require(
            self.failure_number.is_finite() && self.failure_number >= self.initial_damage,
            "FailureNumber must be equal to or larger than InitialDamage.",
        );
    }

    /// Derive `z` from the profile.
    pub fn initialize(&mut self, profile: &ProfileData) -> Result<(), GeometryError> {
        self.z = profile
            .vertical_height(self.x)
            .ok_or_else(|| GeometryError::new(format!("no profile segment at x = {}", self.x)))?;
        Ok(())
    }
}

/// A revetment location assessed by one failure mechanism.
///
/// The calculator drives every location through the same life cycle and
/// never inspects which mechanism it is running:
///
/// 1. [`validate`](Self::validate) against the time steps and profile;
/// 2. [`initialize`](Self::initialize) exactly once, deriving every
///    geometry- and coefficient-dependent constant;
/// 3. [`calculate`](Self::calculate) once per time step in time order,
///    with the damage carried into that step passed explicitly;
/// 4. [`location_dependent_output`](Self::location_dependent_output) with
///    the collected step outputs.
///
/// `calculate` takes `&self`: no state survives between steps other than
/// what the calculator passes in. A location whose increment does not
/// depend on `damage_at_start` reports `is_calculate_stateful() == false`
/// and may have its steps evaluated concurrently.
pub trait LocationDependentInput: Send + Sync + fmt::Debug {
    fn common(&self) -> &LocationCommon;

    fn mechanism(&self) -> FailureMechanism;

    fn x(&self) -> f64 {
        self.common().x
    }

    fn initial_damage(&self) -> f64 {
        self.common().initial_damage
    }

    fn failure_number(&self) -> f64 {
        self.common().failure_number
    }

    /// Push every problem with this location's coefficients into `report`.
    fn validate(
        &self,
        time_steps: &[TimeDependentInput],
        profile: &ProfileData,
        report: &mut ValidationReport,
    );

    fn initialize(&mut self, profile: &ProfileData) -> Result<(), GeometryError>;

    /// Whether the increment of a step depends on the damage at its start.
    fn is_calculate_stateful(&self) -> bool;

    fn calculate(
        &self,
        damage_at_start: f64,
        time_step: &TimeDependentInput,
        profile: &ProfileData,
    ) -> crate::errors::Result<TimeDependentOutput>;

    fn location_dependent_output(
        &self,
        time_dependent_output_items: Vec<TimeDependentOutput>,
    ) -> LocationDependentOutput;
}
