//! Degradation of placed natural stone on the outer slope by wave impacts.
//!
//! This is the only stateful mechanism: the increment of a step is derived
//! from the damage at its start, so the steps of a location must be
//! calculated in time order.

pub mod functions;
mod output;

pub use output::{
    NaturalStoneWaveImpactLocationDependentOutput, NaturalStoneWaveImpactTimeDependentOutput,
    NaturalStoneWaveImpactTimeDependentOutputConstructionProperties,
};

use self::functions::{HydraulicLoadCoefficients, LimitLoadingCoefficients};
use super::common;
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
pub struct NaturalStoneWaveImpactCoefficients {
    pub relative_density: f64,
    pub thickness_top_layer: f64,
    pub hydraulic_load_xib: f64,
    pub hydraulic_load_plunging: HydraulicLoadCoefficients,
    pub hydraulic_load_surging: HydraulicLoadCoefficients,
    pub slope_upper_level_aus: f64,
    pub slope_lower_level_als: f64,
    pub upper_limit_loading: LimitLoadingCoefficients,
    pub lower_limit_loading: LimitLoadingCoefficients,
    pub distance_maximum_wave_elevation_asmax: f64,
    pub distance_maximum_wave_elevation_bsmax: f64,
    pub normative_width_of_wave_impact_awi: f64,
    pub normative_width_of_wave_impact_bwi: f64,
    pub wave_angle_impact_betamax: f64,
}

impl NaturalStoneWaveImpactCoefficients {
    pub fn new(thickness_top_layer: f64) -> Self {
        Self {
            relative_density: 1.65,
            thickness_top_layer,
            hydraulic_load_xib: 2.9,
            hydraulic_load_plunging: HydraulicLoadCoefficients {
                a: 4.0,
                b: 0.0,
                c: 0.0,
                n: -0.9,
            },
            hydraulic_load_surging: HydraulicLoadCoefficients {
                a: 0.8,
                b: 0.0,
                c: 0.0,
                n: 0.6,
            },
            slope_upper_level_aus: 0.05,
            slope_lower_level_als: 1.5,
            upper_limit_loading: LimitLoadingCoefficients {
                a: 0.1,
                b: 0.6,
                c: 4.0,
            },
            lower_limit_loading: LimitLoadingCoefficients {
                a: 0.1,
                b: 0.2,
                c: 4.0,
            },
            distance_maximum_wave_elevation_asmax: 0.42,
            distance_maximum_wave_elevation_bsmax: 0.9,
            normative_width_of_wave_impact_awi: 0.96,
            normative_width_of_wave_impact_bwi: 0.11,
            wave_angle_impact_betamax: 78.0,
        }
    }

    fn validate(&self, report: &mut ValidationReport) {
        rules::positive(report, "RelativeDensity", self.relative_density);
        rules::positive(report, "ThicknessTopLayer", self.thickness_top_layer);
        rules::positive(report, "HydraulicLoadXib", self.hydraulic_load_xib);
        for (name, c) in [
            ("HydraulicLoadAp", &self.hydraulic_load_plunging),
            ("HydraulicLoadAs", &self.hydraulic_load_surging),
        ] {
            report.require(
                c.a.is_finite() && c.b.is_finite() && c.c.is_finite() && c.n.is_finite(),
                format!("{name} and its companion coefficients must be finite."),
            );
        }
        rules::positive(report, "SlopeUpperLevelAus", self.slope_upper_level_aus);
        rules::positive(report, "SlopeLowerLevelAls", self.slope_lower_level_als);
        rules::non_negative(report, "UpperLimitLoadingAul", self.upper_limit_loading.a);
        rules::non_negative(report, "UpperLimitLoadingBul", self.upper_limit_loading.b);
        rules::positive(report, "UpperLimitLoadingCul", self.upper_limit_loading.c);
        rules::non_negative(report, "LowerLimitLoadingAll", self.lower_limit_loading.a);
        rules::non_negative(report, "LowerLimitLoadingBll", self.lower_limit_loading.b);
        rules::positive(report, "LowerLimitLoadingCll", self.lower_limit_loading.c);
        rules::positive(
            report,
            "DistanceMaximumWaveElevationAsmax",
            self.distance_maximum_wave_elevation_asmax,
        );
        rules::finite(
            report,
            "DistanceMaximumWaveElevationBsmax",
            self.distance_maximum_wave_elevation_bsmax,
        );
        rules::positive(
            report,
            "NormativeWidthOfWaveImpactAwi",
            self.normative_width_of_wave_impact_awi,
        );
        rules::non_negative(
            report,
            "NormativeWidthOfWaveImpactBwi",
            self.normative_width_of_wave_impact_bwi,
        );
        rules::in_open_range(
            report,
            "WaveAngleImpactBetamax",
            self.wave_angle_impact_betamax,
            0.0,
            90.0,
        );
    }
}

/// A natural stone location on the outer slope.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalStoneWaveImpactLocationDependentInput {
    common: LocationCommon,
    coefficients: NaturalStoneWaveImpactCoefficients,
    resistance: f64,
    outer_toe_height: f64,
    outer_crest_height: f64,
    local_slope: f64,
}

impl NaturalStoneWaveImpactLocationDependentInput {
    pub fn new(common: LocationCommon, coefficients: NaturalStoneWaveImpactCoefficients) -> Self {
        Self {
            common,
            coefficients,
            resistance: f64::NAN,
            outer_toe_height: f64::NAN,
            outer_crest_height: f64::NAN,
            local_slope: f64::NAN,
        }
    }

    pub fn coefficients(&self) -> &NaturalStoneWaveImpactCoefficients {
        &self.coefficients
    }

    /// Tangent of the slope between the two levels, falling back to the
    /// slope at the location when the levels coincide.
    fn slope_between(&self, lower: (f64, Option<f64>), upper: (f64, Option<f64>)) -> f64 {
        match (lower, upper) {
            ((z_lower, Some(x_lower)), (z_upper, Some(x_upper))) if x_upper > x_lower => {
                (z_upper - z_lower) / (x_upper - x_lower)
            }
            _ => self.local_slope,
        }
    }
}

impl LocationDependentInput for NaturalStoneWaveImpactLocationDependentInput {
    fn common(&self) -> &LocationCommon {
        &self.common
    }

    fn mechanism(&self) -> FailureMechanism {
        FailureMechanism::NaturalStoneWaveImpact
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
        self.local_slope = profile
            .outer_slope_at(self.x())
            .ok_or_else(|| GeometryError::new(format!("no outer slope at x = {}", self.x())))?;
        self.outer_toe_height = profile
            .outer_toe_height()
            .ok_or_else(|| GeometryError::new("the profile has no outer toe"))?;
        self.outer_crest_height = profile
            .outer_dike_height()
            .ok_or_else(|| GeometryError::new("the profile has no outer crest"))?;
        self.resistance = functions::resistance(
            self.coefficients.relative_density,
            self.coefficients.thickness_top_layer,
        );
        Ok(())
    }

    fn is_calculate_stateful(&self) -> bool {
        true
    }

    fn calculate(
        &self,
        damage_at_start: f64,
        time_step: &TimeDependentInput,
        profile: &ProfileData,
    ) -> Result<TimeDependentOutput> {
        let c = &self.coefficients;
        let hm0 = time_step.wave_height_hm0;
        let tm10 = time_step.wave_period_tm10;

        let slope_upper_level = functions::slope_upper_level(
            self.outer_toe_height,
            self.outer_crest_height,
            time_step.water_level,
            hm0,
            c.slope_upper_level_aus,
        );
        let slope_lower_level = functions::slope_lower_level(
            self.outer_toe_height,
            self.outer_crest_height,
            time_step.water_level,
            hm0,
            c.slope_lower_level_als,
        );
        let slope_upper_position = profile.horizontal_position(slope_upper_level);
        let slope_lower_position = profile.horizontal_position(slope_lower_level);
        let slope = self.slope_between(
            (slope_lower_level, slope_lower_position),
            (slope_upper_level, slope_upper_position),
        );

        let wave_steepness_deep_water = common::wave_steepness_deep_water(hm0, tm10);
        let surf_similarity_parameter = common::surf_similarity_parameter(slope, hm0, tm10);
        let distance_maximum_wave_elevation = functions::distance_maximum_wave_elevation(
            hm0,
            wave_steepness_deep_water,
            c.distance_maximum_wave_elevation_asmax,
            c.distance_maximum_wave_elevation_bsmax,
        );
        let normative_width_of_wave_impact = functions::normative_width_of_wave_impact(
            surf_similarity_parameter,
            hm0,
            c.normative_width_of_wave_impact_awi,
            c.normative_width_of_wave_impact_bwi,
        );
        let depth_maximum_wave_load = functions::depth_maximum_wave_load(
            distance_maximum_wave_elevation,
            normative_width_of_wave_impact,
            slope,
        );
        let upper_limit_loading = functions::upper_limit_loading(
            time_step.water_level,
            hm0,
            depth_maximum_wave_load,
            surf_similarity_parameter,
            &c.upper_limit_loading,
        );
        let lower_limit_loading = functions::lower_limit_loading(
            time_step.water_level,
            hm0,
            depth_maximum_wave_load,
            surf_similarity_parameter,
            &c.lower_limit_loading,
        );
        let loading_revetment = hm0 > 0.0
            && lower_limit_loading <= self.common.z
            && self.common.z <= upper_limit_loading;

        let mut details = NaturalStoneWaveImpactTimeDependentOutputConstructionProperties {
            loading_revetment: Some(loading_revetment),
            surf_similarity_parameter: Some(surf_similarity_parameter),
            wave_steepness_deep_water: Some(wave_steepness_deep_water),
            upper_limit_loading: Some(upper_limit_loading),
            lower_limit_loading: Some(lower_limit_loading),
            depth_maximum_wave_load: Some(depth_maximum_wave_load),
            distance_maximum_wave_elevation: Some(distance_maximum_wave_elevation),
            normative_width_of_wave_impact: Some(normative_width_of_wave_impact),
            slope_upper_level: Some(slope_upper_level),
            slope_upper_position,
            slope_lower_level: Some(slope_lower_level),
            slope_lower_position,
            ..Default::default()
        };

        let increment_damage = if loading_revetment {
            let hydraulic_load = functions::hydraulic_load(
                surf_similarity_parameter,
                hm0,
                c.hydraulic_load_xib,
                &c.hydraulic_load_plunging,
                &c.hydraulic_load_surging,
            );
            let wave_angle =
                common::wave_angle(time_step.wave_direction, profile.dike_orientation());
            let wave_angle_impact =
                functions::wave_angle_impact(wave_angle, c.wave_angle_impact_betamax);
            let reference_degradation = functions::reference_degradation(
                damage_at_start,
                hydraulic_load,
                self.resistance,
                wave_angle_impact,
            );
            let reference_time_degradation =
                functions::reference_time_degradation(reference_degradation, tm10);
            let increment_degradation = functions::increment_degradation(
                reference_time_degradation,
                time_step.increment_time(),
                tm10,
                reference_degradation,
            );

            details.hydraulic_load = Some(hydraulic_load);
            details.wave_angle_impact = Some(wave_angle_impact);
            details.reference_degradation = Some(reference_degradation);
            details.reference_time_degradation = Some(reference_time_degradation);
            functions::increment_damage(
                hydraulic_load,
                self.resistance,
                increment_degradation,
                wave_angle_impact,
            )
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
            TimeDependentOutputDetails::NaturalStoneWaveImpact(details.build()?),
        )
    }

    fn location_dependent_output(
        &self,
        time_dependent_output_items: Vec<TimeDependentOutput>,
    ) -> LocationDependentOutput {
        LocationDependentOutput::new(
            time_dependent_output_items,
            self.common.z,
            LocationDependentOutputDetails::NaturalStoneWaveImpact(
                NaturalStoneWaveImpactLocationDependentOutput {
                    resistance: self.resistance,
                },
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::helpers::{dike_profile, hourly_time_steps};

    fn initialized(x: f64) -> NaturalStoneWaveImpactLocationDependentInput {
        let mut location = NaturalStoneWaveImpactLocationDependentInput::new(
            LocationCommon::new(x, 0.0, 1.0),
            NaturalStoneWaveImpactCoefficients::new(0.3),
        );
        location.initialize(&dike_profile()).unwrap();
        location
    }

    #[test]
    fn test_is_stateful() {
        assert!(initialized(20.0).is_calculate_stateful());
    }

    #[test]
    fn test_resistance() {
        let location = initialized(20.0);
        assert!((location.resistance - 1.65 * 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_location_near_water_level_is_loaded() {
        let profile = dike_profile();
        // z = 4.5 at x = 20, just below the water level of 5.0
        let location = initialized(20.0);
        let output = location
            .calculate(0.0, &hourly_time_steps(1)[0], &profile)
            .unwrap();

        assert!(output.increment_damage() > 0.0);
        match output.details() {
            TimeDependentOutputDetails::NaturalStoneWaveImpact(details) => {
                assert!(details.loading_revetment);
                assert_eq!(details.reference_degradation, Some(0.0));
                // Both slope levels lie on the single outer slope segment.
                assert!((details.slope_upper_level.unwrap() - 5.05).abs() < 1e-12);
                assert!((details.slope_lower_level.unwrap() - 3.5).abs() < 1e-12);
            }
            other => panic!("unexpected details {other:?}"),
        }
    }

    #[test]
    fn test_location_far_above_water_is_not_loaded() {
        let profile = dike_profile();
        let location = initialized(28.0);
        let output = location
            .calculate(0.2, &hourly_time_steps(1)[0], &profile)
            .unwrap();
        assert_eq!(output.increment_damage(), 0.0);
        assert_eq!(output.damage(), 0.2);
    }

    #[test]
    fn test_increment_depends_on_damage_at_start() {
        let profile = dike_profile();
        let location = initialized(20.0);
        let steps = hourly_time_steps(2);

        let first = location.calculate(0.0, &steps[0], &profile).unwrap();
        let second = location
            .calculate(first.damage(), &steps[1], &profile)
            .unwrap();
        let combined = location
            .calculate(0.0, &TimeDependentInput::new(0, 7200, 5.0, 1.0, 4.0, 0.0), &profile)
            .unwrap();

        assert!(second.increment_damage() < first.increment_damage());
        assert!((second.damage() - combined.damage()).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_position_on_crest() {
        let location = NaturalStoneWaveImpactLocationDependentInput::new(
            LocationCommon::new(32.0, 0.0, 1.0),
            NaturalStoneWaveImpactCoefficients::new(0.3),
        );
        let mut report = ValidationReport::new();
        location.validate(&hourly_time_steps(1), &dike_profile(), &mut report);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_default_coefficients_are_valid() {
        let mut report = ValidationReport::new();
        NaturalStoneWaveImpactCoefficients::new(0.3).validate(&mut report);
        assert!(report.is_empty(), "{:?}", report.issues());
    }
}
