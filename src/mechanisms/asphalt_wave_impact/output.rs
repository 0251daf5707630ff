use crate::errors::Result;
use crate::output::required;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsphaltWaveImpactTimeDependentOutputConstructionProperties {
    pub maximum_peak_stress: Option<f64>,
    pub average_number_of_waves: Option<f64>,
}

impl AsphaltWaveImpactTimeDependentOutputConstructionProperties {
    pub fn build(self) -> Result<AsphaltWaveImpactTimeDependentOutput> {
        Ok(AsphaltWaveImpactTimeDependentOutput {
            maximum_peak_stress: required(self.maximum_peak_stress, "maximum_peak_stress")?,
            average_number_of_waves: required(
                self.average_number_of_waves,
                "average_number_of_waves",
            )?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsphaltWaveImpactTimeDependentOutput {
    pub maximum_peak_stress: f64,
    pub average_number_of_waves: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsphaltWaveImpactLocationDependentOutput {
    pub outer_slope: f64,
    pub log_failure_tension: f64,
    pub computational_thickness: f64,
    pub equivalent_elastic_modulus: f64,
    pub stiffness_relation: f64,
}
