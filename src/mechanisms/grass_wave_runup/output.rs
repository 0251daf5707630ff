use crate::errors::Result;
use crate::output::required;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrassWaveRunupTimeDependentOutputConstructionProperties {
    pub vertical_distance_water_level_elevation: Option<f64>,
    pub representative_wave_runup_2p: Option<f64>,
    pub cumulative_overload: Option<f64>,
    pub average_number_of_waves: Option<f64>,
    pub wave_angle_impact: Option<f64>,
}

impl GrassWaveRunupTimeDependentOutputConstructionProperties {
    pub fn build(self) -> Result<GrassWaveRunupTimeDependentOutput> {
        Ok(GrassWaveRunupTimeDependentOutput {
            vertical_distance_water_level_elevation: required(
                self.vertical_distance_water_level_elevation,
                "vertical_distance_water_level_elevation",
            )?,
            representative_wave_runup_2p: self.representative_wave_runup_2p,
            cumulative_overload: self.cumulative_overload,
            average_number_of_waves: self.average_number_of_waves,
            wave_angle_impact: self.wave_angle_impact,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrassWaveRunupTimeDependentOutput {
    pub vertical_distance_water_level_elevation: f64,
    pub representative_wave_runup_2p: Option<f64>,
    pub cumulative_overload: Option<f64>,
    pub average_number_of_waves: Option<f64>,
    pub wave_angle_impact: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrassWaveRunupLocationDependentOutput {
    pub outer_slope: f64,
}
