//! Calculation results per location and per time step.

mod location;
mod time_step;

pub use location::{
    cumulative_damages, time_of_failure, LocationDependentOutput, LocationDependentOutputDetails,
};
pub(crate) use time_step::required;
pub use time_step::{
    TimeDependentOutput, TimeDependentOutputConstructionProperties, TimeDependentOutputDetails,
};

use serde::Serialize;

/// Output of a calculation, index-aligned with the location inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutput {
    location_dependent_output_items: Vec<LocationDependentOutput>,
}

impl CalculationOutput {
    pub fn new(location_dependent_output_items: Vec<LocationDependentOutput>) -> Self {
        Self {
            location_dependent_output_items,
        }
    }

    pub fn location_dependent_output_items(&self) -> &[LocationDependentOutput] {
        &self.location_dependent_output_items
    }

    pub fn into_location_dependent_output_items(self) -> Vec<LocationDependentOutput> {
        self.location_dependent_output_items
    }
}
