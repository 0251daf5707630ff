use crate::errors::Result;
use crate::output::required;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NaturalStoneWaveImpactTimeDependentOutputConstructionProperties {
    pub loading_revetment: Option<bool>,
    pub surf_similarity_parameter: Option<f64>,
    pub wave_steepness_deep_water: Option<f64>,
    pub upper_limit_loading: Option<f64>,
    pub lower_limit_loading: Option<f64>,
    pub depth_maximum_wave_load: Option<f64>,
    pub distance_maximum_wave_elevation: Option<f64>,
    pub normative_width_of_wave_impact: Option<f64>,
    pub slope_upper_level: Option<f64>,
    pub slope_upper_position: Option<f64>,
    pub slope_lower_level: Option<f64>,
    pub slope_lower_position: Option<f64>,
    pub hydraulic_load: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub reference_time_degradation: Option<f64>,
    pub reference_degradation: Option<f64>,
}

impl NaturalStoneWaveImpactTimeDependentOutputConstructionProperties {
    /// The degradation chain is required only when the revetment is loaded;
    /// the loading zone geometry is reported whenever it was derived.
    pub fn build(self) -> Result<NaturalStoneWaveImpactTimeDependentOutput> {
        let loading_revetment = required(self.loading_revetment, "loading_revetment")?;
        let (hydraulic_load, wave_angle_impact, reference_time_degradation, reference_degradation) =
            if loading_revetment {
                (
                    Some(required(self.hydraulic_load, "hydraulic_load")?),
                    Some(required(self.wave_angle_impact, "wave_angle_impact")?),
                    Some(required(
                        self.reference_time_degradation,
                        "reference_time_degradation",
                    )?),
                    Some(required(self.reference_degradation, "reference_degradation")?),
                )
            } else {
                (None, None, None, None)
            };

        Ok(NaturalStoneWaveImpactTimeDependentOutput {
            loading_revetment,
            surf_similarity_parameter: self.surf_similarity_parameter,
            wave_steepness_deep_water: self.wave_steepness_deep_water,
            upper_limit_loading: self.upper_limit_loading,
            lower_limit_loading: self.lower_limit_loading,
            depth_maximum_wave_load: self.depth_maximum_wave_load,
            distance_maximum_wave_elevation: self.distance_maximum_wave_elevation,
            normative_width_of_wave_impact: self.normative_width_of_wave_impact,
            slope_upper_level: self.slope_upper_level,
            slope_upper_position: self.slope_upper_position,
            slope_lower_level: self.slope_lower_level,
            slope_lower_position: self.slope_lower_position,
            hydraulic_load,
            wave_angle_impact,
            reference_time_degradation,
            reference_degradation,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NaturalStoneWaveImpactTimeDependentOutput {
    pub loading_revetment: bool,
    pub surf_similarity_parameter: Option<f64>,
    pub wave_steepness_deep_water: Option<f64>,
    pub upper_limit_loading: Option<f64>,
    pub lower_limit_loading: Option<f64>,
    pub depth_maximum_wave_load: Option<f64>,
    pub distance_maximum_wave_elevation: Option<f64>,
    pub normative_width_of_wave_impact: Option<f64>,
    pub slope_upper_level: Option<f64>,
    pub slope_upper_position: Option<f64>,
    pub slope_lower_level: Option<f64>,
    pub slope_lower_position: Option<f64>,
    pub hydraulic_load: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub reference_time_degradation: Option<f64>,
    pub reference_degradation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NaturalStoneWaveImpactLocationDependentOutput {
    pub resistance: f64,
}
