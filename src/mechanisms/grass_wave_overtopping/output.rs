use crate::errors::Result;
use crate::output::required;
use serde::Serialize;

/// Unset diagnostics of a grass wave overtopping time step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrassWaveOvertoppingTimeDependentOutputConstructionProperties {
    pub vertical_distance_water_level_elevation: Option<f64>,
    pub representative_wave_runup_2p: Option<f64>,
    pub cumulative_overload: Option<f64>,
    pub average_number_of_waves: Option<f64>,
}

impl GrassWaveOvertoppingTimeDependentOutputConstructionProperties {
    pub fn build(self) -> Result<GrassWaveOvertoppingTimeDependentOutput> {
        Ok(GrassWaveOvertoppingTimeDependentOutput {
            vertical_distance_water_level_elevation: required(
                self.vertical_distance_water_level_elevation,
                "vertical_distance_water_level_elevation",
            )?,
            representative_wave_runup_2p: self.representative_wave_runup_2p,
            cumulative_overload: self.cumulative_overload,
            average_number_of_waves: self.average_number_of_waves,
        })
    }
}

/// Diagnostics of a grass wave overtopping time step. The runup values are
/// absent when the water level reached the dike height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrassWaveOvertoppingTimeDependentOutput {
    pub vertical_distance_water_level_elevation: f64,
    pub representative_wave_runup_2p: Option<f64>,
    pub cumulative_overload: Option<f64>,
    pub average_number_of_waves: Option<f64>,
}

/// Values derived for a grass wave overtopping location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrassWaveOvertoppingLocationDependentOutput {
    pub dike_height: f64,
    pub outer_slope: f64,
    pub representative_roughness: f64,
    pub acceleration_alpha_a: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalculationError;

    #[test]
    fn test_vertical_distance_is_required() {
        let result = GrassWaveOvertoppingTimeDependentOutputConstructionProperties {
            cumulative_overload: Some(12.0),
            ..Default::default()
        }
        .build();
        assert!(matches!(
            result,
            Err(CalculationError::InvalidTimeDependentOutput {
                field: "vertical_distance_water_level_elevation"
            })
        ));
    }

    #[test]
    fn test_runup_values_are_optional() {
        let output = GrassWaveOvertoppingTimeDependentOutputConstructionProperties {
            vertical_distance_water_level_elevation: Some(-0.5),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(output.cumulative_overload, None);
    }
}
