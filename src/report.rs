//! Projection of a calculation result for presentation.
//!
//! The report carries as much of the output as the chosen [`OutputLevel`]
//! asks for: whether and when each location failed, then the damage
//! development, then every mechanism diagnostic.

use crate::input::{CalculationInput, FailureMechanism, TimeDependentInput};
use crate::output::{CalculationOutput, LocationDependentOutputDetails, TimeDependentOutput};
use crate::result::{DataResult, Event};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputLevel {
    /// Failed flag and time of failure.
    Failure,
    /// Adds damage per time step.
    #[default]
    Damage,
    /// Adds mechanism diagnostics.
    Physics,
}

/// What a report needs to know about a location besides its output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDescription {
    pub x: f64,
    pub mechanism: FailureMechanism,
    pub initial_damage: f64,
    pub failure_number: f64,
}

/// Input facts captured before the input is consumed by a calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    locations: Vec<LocationDescription>,
    time_steps: Vec<TimeDependentInput>,
}

impl ReportContext {
    pub fn from_input(input: &CalculationInput) -> Self {
        Self {
            locations: input
                .locations()
                .iter()
                .map(|location| LocationDescription {
                    x: location.x(),
                    mechanism: location.mechanism(),
                    initial_damage: location.initial_damage(),
                    failure_number: location.failure_number(),
                })
                .collect(),
            time_steps: input.time_steps().to_vec(),
        }
    }

    pub fn report(
        &self,
        result: &DataResult<CalculationOutput>,
        level: OutputLevel,
    ) -> CalculationReport {
        let locations = result
            .data()
            .map(|output| {
                output
                    .location_dependent_output_items()
                    .iter()
                    .zip(&self.locations)
                    .enumerate()
                    .map(|(index, (output, description))| {
                        let time_of_failure = output.time_of_failure(
                            description.initial_damage,
                            description.failure_number,
                            &self.time_steps,
                        );
                        let damage = (level >= OutputLevel::Damage).then(|| DamageReport {
                            increment_damages: output
                                .time_dependent_output_items()
                                .iter()
                                .map(TimeDependentOutput::increment_damage)
                                .collect(),
                            cumulative_damages: output
                                .cumulative_damages(description.initial_damage),
                        });
                        let physics = (level >= OutputLevel::Physics).then(|| PhysicsReport {
                            location: output.details().clone(),
                            time_steps: output.time_dependent_output_items().to_vec(),
                        });

                        LocationReport {
                            index,
                            description: description.clone(),
                            z: output.z(),
                            failed: time_of_failure.is_some(),
                            time_of_failure,
                            damage,
                            physics,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        CalculationReport {
            successful: result.successful(),
            output_level: level,
            events: result.events().to_vec(),
            locations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    pub successful: bool,
    pub output_level: OutputLevel,
    pub events: Vec<Event>,
    pub locations: Vec<LocationReport>,
}

impl CalculationReport {
    pub fn failed_locations(&self) -> usize {
        self.locations.iter().filter(|l| l.failed).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationReport {
    pub index: usize,
    #[serde(flatten)]
    pub description: LocationDescription,
    pub z: f64,
    pub failed: bool,
    /// Interpolated moment of failure in seconds.
    pub time_of_failure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<DamageReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics: Option<PhysicsReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageReport {
    pub increment_damages: Vec<f64>,
    pub cumulative_damages: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicsReport {
    pub location: LocationDependentOutputDetails,
    pub time_steps: Vec<TimeDependentOutput>,
}
