//! Calculation input: profile, locations and time steps.

mod location;
mod time_step;

pub use location::{FailureMechanism, LocationCommon, LocationDependentInput};
pub use time_step::TimeDependentInput;

use crate::profile::ProfileData;

/// Everything a calculation needs.
///
/// Produced by [`CalculationInputBuilder`](crate::builder::CalculationInputBuilder).
/// The profile and time steps are shared read-only by all workers during a
/// calculation; each location is owned by exactly one worker.
#[derive(Debug)]
pub struct CalculationInput {
    profile_data: ProfileData,
    locations: Vec<Box<dyn LocationDependentInput>>,
    time_steps: Vec<TimeDependentInput>,
}

impl CalculationInput {
    pub fn new(
        profile_data: ProfileData,
        locations: Vec<Box<dyn LocationDependentInput>>,
        time_steps: Vec<TimeDependentInput>,
    ) -> Self {
        Self {
            profile_data,
            locations,
            time_steps,
        }
    }

    pub fn profile_data(&self) -> &ProfileData {
        &self.profile_data
    }

    pub fn locations(&self) -> &[Box<dyn LocationDependentInput>] {
        &self.locations
    }

    pub fn time_steps(&self) -> &[TimeDependentInput] {
        &self.time_steps
    }

    /// Split into parts so the locations can be moved into workers.
    pub fn into_parts(
        self,
    ) -> (
        ProfileData,
        Vec<Box<dyn LocationDependentInput>>,
        Vec<TimeDependentInput>,
    ) {
        (self.profile_data, self.locations, self.time_steps)
    }
}
