//! Grass cover erosion on the crest and inner slope by overtopping waves.

mod output;

pub use output::{
    GrassWaveOvertoppingLocationDependentOutput, GrassWaveOvertoppingTimeDependentOutput,
    GrassWaveOvertoppingTimeDependentOutputConstructionProperties,
};

use super::common::{self, RepresentativeWaveRunupCoefficients};
use super::grass_overload::{self, OverloadCoefficients};
use super::GrassTopLayerType;
use crate::errors::{GeometryError, Result};
use crate::input::{FailureMechanism, LocationCommon, LocationDependentInput, TimeDependentInput};
use crate::output::{
    LocationDependentOutput, LocationDependentOutputDetails, TimeDependentOutput,
    TimeDependentOutputConstructionProperties, TimeDependentOutputDetails,
};
use crate::profile::ProfileData;
use crate::validation::{rules, ValidationReport};
use serde::{Deserialize, Serialize};

/// How the runup distribution of a time step is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OvertoppingDistribution {
    /// Sum over a fixed number of representative waves.
    RayleighDiscrete { fixed_number_of_waves: usize },
    /// Closed-form expectation.
    RayleighAnalytical,
}

impl OvertoppingDistribution {
    pub const DEFAULT_FIXED_NUMBER_OF_WAVES: usize = 10_000;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveOvertoppingCoefficients {
    pub critical_cumulative_overload: f64,
    pub critical_front_velocity: f64,
    pub increased_load_transition_alpha_m: f64,
    pub reduced_strength_transition_alpha_s: f64,
    pub average_number_of_waves_ctm: f64,
    pub front_velocity_cwo: f64,
    pub acceleration_alpha_a_for_crest: f64,
    pub acceleration_alpha_a_for_inner_slope: f64,
    /// Defaults to the height of the outer crest.
    pub dike_height: Option<f64>,
    pub representative_wave_runup: RepresentativeWaveRunupCoefficients,
    pub wave_angle_impact_abeta: f64,
    pub wave_angle_impact_betamax: f64,
}

impl GrassWaveOvertoppingCoefficients {
    pub fn for_top_layer(top_layer: GrassTopLayerType) -> Self {
        let (critical_cumulative_overload, critical_front_velocity) = match top_layer {
            GrassTopLayerType::ClosedSod => (7000.0, 6.6),
            GrassTopLayerType::OpenSod => (3500.0, 4.3),
        };

        Self {
            critical_cumulative_overload,
            critical_front_velocity,
            increased_load_transition_alpha_m: 1.0,
            reduced_strength_transition_alpha_s: 1.0,
            average_number_of_waves_ctm: 0.92,
            front_velocity_cwo: 1.45,
            acceleration_alpha_a_for_crest: 1.0,
            acceleration_alpha_a_for_inner_slope: 1.4,
            dike_height: None,
            representative_wave_runup: RepresentativeWaveRunupCoefficients::default(),
            wave_angle_impact_abeta: 0.0022,
            wave_angle_impact_betamax: 80.0,
        }
    }

    fn validate(&self, report: &mut ValidationReport) {
        rules::positive(report, "CriticalCumulativeOverload", self.critical_cumulative_overload);
        rules::non_negative(report, "CriticalFrontVelocity", self.critical_front_velocity);
        rules::non_negative(
            report,
            "IncreasedLoadTransitionAlphaM",
            self.increased_load_transition_alpha_m,
        );
        rules::non_negative(
            report,
            "ReducedStrengthTransitionAlphaS",
            self.reduced_strength_transition_alpha_s,
        );
        rules::positive(report, "AverageNumberOfWavesCtm", self.average_number_of_waves_ctm);
        rules::positive(report, "FrontVelocityCwo", self.front_velocity_cwo);
        rules::non_negative(
            report,
            "AccelerationAlphaAForCrest",
            self.acceleration_alpha_a_for_crest,
        );
        rules::non_negative(
            report,
            "AccelerationAlphaAForInnerSlope",
            self.acceleration_alpha_a_for_inner_slope,
        );
        if let Some(dike_height) = self.dike_height {
            rules::finite(report, "DikeHeight", dike_height);
        }
        self.representative_wave_runup.validate(report);
        rules::non_negative(report, "WaveAngleImpactAbeta", self.wave_angle_impact_abeta);
        rules::in_range(
            report,
            "WaveAngleImpactBetamax",
            self.wave_angle_impact_betamax,
            0.0,
            90.0,
        );
    }
}

/// A grass location on the crest or inner slope loaded by overtopping.
#[derive(Debug, Clone, PartialEq)]
pub struct GrassWaveOvertoppingLocationDependentInput {
    common: LocationCommon,
    top_layer: GrassTopLayerType,
    distribution: OvertoppingDistribution,
    coefficients: GrassWaveOvertoppingCoefficients,
    dike_height: f64,
    outer_slope: f64,
    representative_roughness: f64,
    acceleration_alpha_a: f64,
}

impl GrassWaveOvertoppingLocationDependentInput {
    pub fn new(
        common: LocationCommon,
        top_layer: GrassTopLayerType,
        distribution: OvertoppingDistribution,
        coefficients: GrassWaveOvertoppingCoefficients,
    ) -> Self {
        Self {
            common,
            top_layer,
            distribution,
            coefficients,
            dike_height: f64::NAN,
            outer_slope: f64::NAN,
            representative_roughness: f64::NAN,
            acceleration_alpha_a: f64::NAN,
        }
    }

    pub fn top_layer(&self) -> GrassTopLayerType {
        self.top_layer
    }

    pub fn coefficients(&self) -> &GrassWaveOvertoppingCoefficients {
        &self.coefficients
    }

    fn overload_coefficients(&self) -> OverloadCoefficients {
        OverloadCoefficients {
            critical_front_velocity: self.coefficients.critical_front_velocity,
            increased_load_transition_alpha_m: self.coefficients.increased_load_transition_alpha_m,
            reduced_strength_transition_alpha_s: self
                .coefficients
                .reduced_strength_transition_alpha_s,
            front_velocity_coefficient: self.coefficients.front_velocity_cwo
                * self.acceleration_alpha_a,
        }
    }
}

impl LocationDependentInput for GrassWaveOvertoppingLocationDependentInput {
    fn common(&self) -> &LocationCommon {
        &self.common
    }

    fn mechanism(&self) -> FailureMechanism {
        match self.distribution {
            OvertoppingDistribution::RayleighDiscrete { .. } => {
                FailureMechanism::GrassWaveOvertoppingRayleighDiscrete
            }
            OvertoppingDistribution::RayleighAnalytical => {
                FailureMechanism::GrassWaveOvertoppingRayleighAnalytical
            }
        }
    }

    fn validate(
        &self,
        time_steps: &[TimeDependentInput],
        profile: &ProfileData,
        report: &mut ValidationReport,
    ) {
        self.common.validate(report);
        rules::on_crest_or_inner_slope(report, self.x(), profile);
        self.coefficients.validate(report);
        if let OvertoppingDistribution::RayleighDiscrete {
            fixed_number_of_waves,
        } = self.distribution
        {
            report.require(
                fixed_number_of_waves > 0,
                "FixedNumberOfWaves must be larger than 0.",
            );
        }

        let dike_height = self
            .coefficients
            .dike_height
            .or_else(|| profile.outer_dike_height());
        if let Some(dike_height) = dike_height {
            for (index, step) in time_steps.iter().enumerate() {
                if step.water_level >= dike_height {
                    report.warning(format!(
                        "The water level ({}) in time step {index} is at or above the dike \
                         height ({dike_height}); no overtopping load is calculated.",
                        step.water_level
                    ));
                }
            }
        }
    }

    fn initialize(&mut self, profile: &ProfileData) -> std::result::Result<(), GeometryError> {
        self.common.initialize(profile)?;
        self.dike_height = self
            .coefficients
            .dike_height
            .or_else(|| profile.outer_dike_height())
            .ok_or_else(|| GeometryError::new("no dike height at the outer crest"))?;
        self.outer_slope = profile
            .outer_slope()
            .ok_or_else(|| GeometryError::new("no outer slope between OuterToe and OuterCrest"))?;
        self.representative_roughness = profile
            .representative_roughness()
            .ok_or_else(|| GeometryError::new("no roughness on the outer slope"))?;
        self.acceleration_alpha_a = if profile.is_on_inner_slope(self.x()) {
            self.coefficients.acceleration_alpha_a_for_inner_slope
        } else {
            self.coefficients.acceleration_alpha_a_for_crest
        };
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
        let mut details = GrassWaveOvertoppingTimeDependentOutputConstructionProperties {
            vertical_distance_water_level_elevation: Some(
                common::vertical_distance_water_level_elevation(
                    self.common.z,
                    time_step.water_level,
                ),
            ),
            ..Default::default()
        };

        let increment_damage = if time_step.water_level >= self.dike_height {
            f64::NAN
        } else {
            let average_number_of_waves = common::average_number_of_waves(
                time_step.increment_time(),
                time_step.wave_period_tm10,
                self.coefficients.average_number_of_waves_ctm,
            );
            let surf_similarity = common::surf_similarity_parameter(
                self.outer_slope,
                time_step.wave_height_hm0,
                time_step.wave_period_tm10,
            );
            let wave_angle =
                common::wave_angle(time_step.wave_direction, profile.dike_orientation());
            let wave_angle_impact = common::wave_angle_impact_runup(
                wave_angle,
                self.coefficients.wave_angle_impact_abeta,
                self.coefficients.wave_angle_impact_betamax,
            );
            let runup_2p = common::representative_wave_runup_2p(
                surf_similarity,
                wave_angle_impact,
                time_step.wave_height_hm0,
                self.representative_roughness,
                &self.coefficients.representative_wave_runup,
            );

            let threshold = self.dike_height - time_step.water_level;
            let coefficients = self.overload_coefficients();
            let cumulative_overload = match self.distribution {
                OvertoppingDistribution::RayleighDiscrete {
                    fixed_number_of_waves,
                } => grass_overload::cumulative_overload_rayleigh_discrete(
                    &coefficients,
                    runup_2p,
                    threshold,
                    average_number_of_waves,
                    fixed_number_of_waves,
                ),
                OvertoppingDistribution::RayleighAnalytical => {
                    grass_overload::cumulative_overload_rayleigh_analytical(
                        &coefficients,
                        runup_2p,
                        threshold,
                        average_number_of_waves,
                    )
                }
            };

            details.representative_wave_runup_2p = Some(runup_2p);
            details.cumulative_overload = Some(cumulative_overload);
            details.average_number_of_waves = Some(average_number_of_waves);
            cumulative_overload / self.coefficients.critical_cumulative_overload
        };

        TimeDependentOutput::new(
            TimeDependentOutputConstructionProperties::from_increment(
                increment_damage,
                damage_at_start,
                self.failure_number(),
                time_step,
            ),
            TimeDependentOutputDetails::GrassWaveOvertopping(details.build()?),
        )
    }

    fn location_dependent_output(
        &self,
        time_dependent_output_items: Vec<TimeDependentOutput>,
    ) -> LocationDependentOutput {
        LocationDependentOutput::new(
            time_dependent_output_items,
            self.common.z,
            LocationDependentOutputDetails::GrassWaveOvertopping(
                GrassWaveOvertoppingLocationDependentOutput {
                    dike_height: self.dike_height,
                    outer_slope: self.outer_slope,
                    representative_roughness: self.representative_roughness,
                    acceleration_alpha_a: self.acceleration_alpha_a,
                },
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::helpers::{dike_profile, hourly_time_steps};

    fn location(
        x: f64,
        distribution: OvertoppingDistribution,
    ) -> GrassWaveOvertoppingLocationDependentInput {
        GrassWaveOvertoppingLocationDependentInput::new(
            LocationCommon::new(x, 0.0, 1.0),
            GrassTopLayerType::OpenSod,
            distribution,
            GrassWaveOvertoppingCoefficients::for_top_layer(GrassTopLayerType::OpenSod),
        )
    }

    fn discrete() -> OvertoppingDistribution {
        OvertoppingDistribution::RayleighDiscrete {
            fixed_number_of_waves: OvertoppingDistribution::DEFAULT_FIXED_NUMBER_OF_WAVES,
        }
    }

    #[test]
    fn test_defaults_per_top_layer() {
        let closed = GrassWaveOvertoppingCoefficients::for_top_layer(GrassTopLayerType::ClosedSod);
        let open = GrassWaveOvertoppingCoefficients::for_top_layer(GrassTopLayerType::OpenSod);
        assert_eq!(closed.critical_cumulative_overload, 7000.0);
        assert_eq!(closed.critical_front_velocity, 6.6);
        assert_eq!(open.critical_cumulative_overload, 3500.0);
        assert_eq!(open.critical_front_velocity, 4.3);
    }

    #[test]
    fn test_initialize_selects_acceleration_by_position() {
        let profile = dike_profile();

        let mut crest = location(32.0, discrete());
        crest.initialize(&profile).unwrap();
        assert_eq!(crest.acceleration_alpha_a, 1.0);
        assert_eq!(crest.dike_height, 7.5);

        let mut inner = location(40.0, discrete());
        inner.initialize(&profile).unwrap();
        assert_eq!(inner.acceleration_alpha_a, 1.4);
        assert_eq!(inner.common().z, 6.0);
    }

    #[test]
    fn test_position_outside_crest_and_inner_slope_is_rejected() {
        let profile = dike_profile();
        let mut report = ValidationReport::new();
        location(20.0, discrete()).validate(&hourly_time_steps(1), &profile, &mut report);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_water_level_above_dike_height_warns_and_yields_nan() {
        let profile = dike_profile();
        let step = TimeDependentInput::new(0, 3600, 8.0, 1.0, 4.0, 0.0);

        let mut report = ValidationReport::new();
        let location = location(40.0, discrete());
        location.validate(&[step], &profile, &mut report);
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 1);

        let mut location = location;
        location.initialize(&profile).unwrap();
        let output = location.calculate(0.2, &step, &profile).unwrap();
        assert!(output.increment_damage().is_nan());
        assert_eq!(output.damage(), 0.2);
    }

    #[test]
    fn test_high_water_damages_inner_slope() {
        let profile = dike_profile();
        let step = TimeDependentInput::new(0, 3600, 6.5, 2.0, 6.0, 0.0);

        let mut discrete_location = location(40.0, discrete());
        discrete_location.initialize(&profile).unwrap();
        let discrete_output = discrete_location.calculate(0.0, &step, &profile).unwrap();

        let mut analytical_location = location(40.0, OvertoppingDistribution::RayleighAnalytical);
        analytical_location.initialize(&profile).unwrap();
        let analytical_output = analytical_location.calculate(0.0, &step, &profile).unwrap();

        assert!(discrete_output.increment_damage() > 0.0);
        let relative = (discrete_output.increment_damage() - analytical_output.increment_damage())
            .abs()
            / analytical_output.increment_damage();
        assert!(relative < 0.02, "relative difference {relative}");
    }

    #[test]
    fn test_is_stateless() {
        assert!(!location(40.0, discrete()).is_calculate_stateful());
        assert_eq!(
            location(40.0, OvertoppingDistribution::RayleighAnalytical).mechanism(),
            FailureMechanism::GrassWaveOvertoppingRayleighAnalytical
        );
    }
}
