//! Grass cover erosion on the outer slope by breaking waves.

pub mod functions;
mod output;

pub use output::{
    GrassWaveImpactLocationDependentOutput, GrassWaveImpactTimeDependentOutput,
    GrassWaveImpactTimeDependentOutputConstructionProperties,
};

use super::{common, GrassTopLayerType};
use crate::errors::{GeometryError, Result};
use crate::input::{FailureMechanism, LocationCommon, LocationDependentInput, TimeDependentInput};
use crate::output::{
    LocationDependentOutput, LocationDependentOutputDetails, TimeDependentOutput,
    TimeDependentOutputConstructionProperties, TimeDependentOutputDetails,
};
use crate::profile::ProfileData;
use crate::validation::{rules, ValidationReport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveImpactCoefficients {
    pub time_line_agwi: f64,
    pub time_line_bgwi: f64,
    pub time_line_cgwi: f64,
    pub minimum_wave_height_temax: f64,
    pub maximum_wave_height_temin: f64,
    pub wave_angle_impact_nwa: f64,
    pub wave_angle_impact_qwa: f64,
    pub wave_angle_impact_rwa: f64,
    pub upper_limit_loading_aul: f64,
    pub lower_limit_loading_all: f64,
}

impl GrassWaveImpactCoefficients {
    pub fn for_top_layer(top_layer: GrassTopLayerType) -> Self {
        let (time_line_agwi, time_line_bgwi, time_line_cgwi) = match top_layer {
            GrassTopLayerType::ClosedSod => (1.0, -0.000009722, 0.25),
            GrassTopLayerType::OpenSod => (0.8, -0.00001944, 0.25),
        };

        Self {
            time_line_agwi,
            time_line_bgwi,
            time_line_cgwi,
            minimum_wave_height_temax: 3_600_000.0,
            maximum_wave_height_temin: 3.6,
            wave_angle_impact_nwa: 2.0 / 3.0,
            wave_angle_impact_qwa: 0.35,
            wave_angle_impact_rwa: 10.0,
            upper_limit_loading_aul: 0.0,
            lower_limit_loading_all: 0.5,
        }
    }

    fn validate(&self, report: &mut ValidationReport) {
        rules::positive(report, "TimeLineAgwi", self.time_line_agwi);
        rules::negative(report, "TimeLineBgwi", self.time_line_bgwi);
        rules::non_negative(report, "TimeLineCgwi", self.time_line_cgwi);
        rules::positive(report, "MinimumWaveHeightTemax", self.minimum_wave_height_temax);
        rules::positive(report, "MaximumWaveHeightTemin", self.maximum_wave_height_temin);
        report.require(
            self.minimum_wave_height_temax > self.maximum_wave_height_temin,
            "MinimumWaveHeightTemax must be larger than MaximumWaveHeightTemin.",
        );
        rules::positive(report, "WaveAngleImpactNwa", self.wave_angle_impact_nwa);
        rules::probability(report, "WaveAngleImpactQwa", self.wave_angle_impact_qwa);
        rules::positive(report, "WaveAngleImpactRwa", self.wave_angle_impact_rwa);
        rules::finite(report, "UpperLimitLoadingAul", self.upper_limit_loading_aul);
        report.require(
            self.lower_limit_loading_all > self.upper_limit_loading_aul,
            "LowerLimitLoadingAll must be larger than UpperLimitLoadingAul.",
        );
    }
}

/// A grass location on the outer slope loaded by wave impacts.
#[derive(Debug, Clone, PartialEq)]
pub struct GrassWaveImpactLocationDependentInput {
    common: LocationCommon,
    top_layer: GrassTopLayerType,
    coefficients: GrassWaveImpactCoefficients,
    minimum_wave_height: f64,
    maximum_wave_height: f64,
}

impl GrassWaveImpactLocationDependentInput {
    pub fn new(
        common: LocationCommon,
        top_layer: GrassTopLayerType,
        coefficients: GrassWaveImpactCoefficients,
    ) -> Self {
        Self {
            common,
            top_layer,
            coefficients,
            minimum_wave_height: f64::NAN,
            maximum_wave_height: f64::NAN,
        }
    }

    pub fn top_layer(&self) -> GrassTopLayerType {
        self.top_layer
    }

    pub fn coefficients(&self) -> &GrassWaveImpactCoefficients {
        &self.coefficients
    }
}

impl LocationDependentInput for GrassWaveImpactLocationDependentInput {
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
        rules::on_outer_slope(report, self.x(), profile);
        self.coefficients.validate(report);
    }

    fn initialize(&mut self, profile: &ProfileData) -> std::result::Result<(), GeometryError> {
        self.common.initialize(profile)?;
        let c = &self.coefficients;
        self.minimum_wave_height = functions::minimum_wave_height(
            c.time_line_agwi,
            c.time_line_bgwi,
            c.time_line_cgwi,
            c.minimum_wave_height_temax,
        );
        self.maximum_wave_height = functions::maximum_wave_height(
            c.time_line_agwi,
            c.time_line_bgwi,
            c.time_line_cgwi,
            c.maximum_wave_height_temin,
        );
        Ok(())
    }

    fn is_calculate_stateful(&self) -> bool {
        false
    }

    fn calculate(
        &self,
        damage_at_start: f64,
        time_step: &TimeDependentInput,
        profile: &ProfileData,
    ) -> Result<TimeDependentOutput> {
        let c = &self.coefficients;
        let upper_limit_loading = functions::upper_limit_loading(
            time_step.water_level,
            time_step.wave_height_hm0,
            c.upper_limit_loading_aul,
        );
        let lower_limit_loading = functions::lower_limit_loading(
            time_step.water_level,
            time_step.wave_height_hm0,
            c.lower_limit_loading_all,
        );
        let loading_revetment =
            functions::loading_revetment(lower_limit_loading, upper_limit_loading, self.common.z);

        let mut details = GrassWaveImpactTimeDependentOutputConstructionProperties {
            loading_revetment: Some(loading_revetment),
            upper_limit_loading: Some(upper_limit_loading),
            lower_limit_loading: Some(lower_limit_loading),
            ..Default::default()
        };

        let increment_damage = if loading_revetment {
            let wave_angle =
                common::wave_angle(time_step.wave_direction, profile.dike_orientation());
            let wave_angle_impact = functions::wave_angle_impact(
                wave_angle,
                c.wave_angle_impact_nwa,
                c.wave_angle_impact_qwa,
                c.wave_angle_impact_rwa,
            );
            let wave_height_impact = functions::wave_height_impact(
                self.minimum_wave_height,
                self.maximum_wave_height,
                wave_angle_impact,
                time_step.wave_height_hm0,
            );
            let failure_duration = functions::time_line_duration(
                wave_height_impact,
                c.time_line_agwi,
                c.time_line_bgwi,
                c.time_line_cgwi,
            );

            details.minimum_wave_height = Some(self.minimum_wave_height);
            details.maximum_wave_height = Some(self.maximum_wave_height);
            details.wave_angle_impact = Some(wave_angle_impact);
            details.wave_height_impact = Some(wave_height_impact);
            functions::increment_damage(time_step.increment_time(), failure_duration)
        } else {
            0.0
        };

        TimeDependentOutput::new(
            TimeDependentOutputConstructionProperties::from_increment(
                increment_damage,
                damage_at_start,
                self.failure_number(),
                time_step,
            ),
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
                    minimum_wave_height: self.minimum_wave_height,
                    maximum_wave_height: self.maximum_wave_height,
                },
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::helpers::{dike_profile, hourly_time_steps};

    fn location(x: f64) -> GrassWaveImpactLocationDependentInput {
        GrassWaveImpactLocationDependentInput::new(
            LocationCommon::new(x, 0.0, 1.0),
            GrassTopLayerType::ClosedSod,
            GrassWaveImpactCoefficients::for_top_layer(GrassTopLayerType::ClosedSod),
        )
    }

    #[test]
    fn test_open_sod_defaults() {
        let coefficients = GrassWaveImpactCoefficients::for_top_layer(GrassTopLayerType::OpenSod);
        assert_eq!(coefficients.time_line_agwi, 0.8);
        assert_eq!(coefficients.time_line_bgwi, -0.00001944);
    }

    #[test]
    fn test_location_in_loading_zone_is_damaged() {
        let profile = dike_profile();
        // z = 4.8 at x = 21
        let mut location = location(21.0);
        location.initialize(&profile).unwrap();

        let step = hourly_time_steps(1)[0];
        let output = location.calculate(0.0, &step, &profile).unwrap();

        // Perpendicular waves: the impact wave height equals Hm0.
        let duration = functions::time_line_duration(1.0, 1.0, -0.000009722, 0.25);
        assert!((output.increment_damage() - 3600.0 / duration).abs() < 1e-12);
        match output.details() {
            TimeDependentOutputDetails::GrassWaveImpact(details) => {
                assert!(details.loading_revetment);
                assert_eq!(details.wave_angle_impact, Some(1.0));
            }
            other => panic!("unexpected details {other:?}"),
        }
    }

    #[test]
    fn test_location_above_water_is_not_loaded() {
        let profile = dike_profile();
        let mut location = location(25.0);
        location.initialize(&profile).unwrap();

        let output = location
            .calculate(0.3, &hourly_time_steps(1)[0], &profile)
            .unwrap();
        assert_eq!(output.increment_damage(), 0.0);
        assert_eq!(output.damage(), 0.3);
    }

    #[test]
    fn test_validate_rejects_position_on_crest() {
        let mut report = ValidationReport::new();
        location(32.0).validate(&hourly_time_steps(1), &dike_profile(), &mut report);
        assert_eq!(report.error_count(), 1);
    }
}
