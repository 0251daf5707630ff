use crate::errors::Result;
use crate::output::required;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrassWaveImpactTimeDependentOutputConstructionProperties {
    pub loading_revetment: Option<bool>,
    pub upper_limit_loading: Option<f64>,
    pub lower_limit_loading: Option<f64>,
    pub minimum_wave_height: Option<f64>,
    pub maximum_wave_height: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub wave_height_impact: Option<f64>,
}

impl GrassWaveImpactTimeDependentOutputConstructionProperties {
    /// The wave height diagnostics are required only when the revetment
    /// is loaded.
    pub fn build(self) -> Result<GrassWaveImpactTimeDependentOutput> {
        let loading_revetment = required(self.loading_revetment, "loading_revetment")?;
        if !loading_revetment {
            return Ok(GrassWaveImpactTimeDependentOutput {
                loading_revetment,
                upper_limit_loading: self.upper_limit_loading,
                lower_limit_loading: self.lower_limit_loading,
                ..GrassWaveImpactTimeDependentOutput::unloaded()
            });
        }

        Ok(GrassWaveImpactTimeDependentOutput {
            loading_revetment,
            upper_limit_loading: Some(required(self.upper_limit_loading, "upper_limit_loading")?),
            lower_limit_loading: Some(required(self.lower_limit_loading, "lower_limit_loading")?),
            minimum_wave_height: Some(required(self.minimum_wave_height, "minimum_wave_height")?),
            maximum_wave_height: Some(required(self.maximum_wave_height, "maximum_wave_height")?),
            wave_angle_impact: Some(required(self.wave_angle_impact, "wave_angle_impact")?),
            wave_height_impact: Some(required(self.wave_height_impact, "wave_height_impact")?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrassWaveImpactTimeDependentOutput {
    pub loading_revetment: bool,
    pub upper_limit_loading: Option<f64>,
    pub lower_limit_loading: Option<f64>,
    pub minimum_wave_height: Option<f64>,
    pub maximum_wave_height: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub wave_height_impact: Option<f64>,
}

impl GrassWaveImpactTimeDependentOutput {
    fn unloaded() -> Self {
        Self {
            loading_revetment: false,
            upper_limit_loading: None,
            lower_limit_loading: None,
            minimum_wave_height: None,
            maximum_wave_height: None,
            wave_angle_impact: None,
            wave_height_impact: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrassWaveImpactLocationDependentOutput {
    pub minimum_wave_height: f64,
    pub maximum_wave_height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalculationError;

    #[test]
    fn test_unloaded_output_needs_only_loading_flag() {
        let output = GrassWaveImpactTimeDependentOutputConstructionProperties {
            loading_revetment: Some(false),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert!(!output.loading_revetment);
        assert_eq!(output.wave_height_impact, None);
    }

    #[test]
    fn test_loaded_output_requires_wave_heights() {
        let result = GrassWaveImpactTimeDependentOutputConstructionProperties {
            loading_revetment: Some(true),
            upper_limit_loading: Some(5.0),
            lower_limit_loading: Some(4.5),
            minimum_wave_height: Some(0.25),
            maximum_wave_height: Some(1.25),
            wave_angle_impact: Some(1.0),
            wave_height_impact: None,
        }
        .build();
        assert!(matches!(
            result,
            Err(CalculationError::InvalidTimeDependentOutput {
                field: "wave_height_impact"
            })
        ));
    }

    #[test]
    fn test_loading_flag_is_required() {
        let result = GrassWaveImpactTimeDependentOutputConstructionProperties::default().build();
        assert!(matches!(
            result,
            Err(CalculationError::InvalidTimeDependentOutput {
                field: "loading_revetment"
            })
        ));
    }
}
