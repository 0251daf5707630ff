//! Grass cover erosion on the outer slope by running up waves.
//!
//! Two variants share the coefficients and differ in how the runup of the
//! waves in a time step is distributed:
//!
//! - Rayleigh discrete: runup heights follow a Rayleigh distribution,
//!   sampled at a fixed number of equally probable waves.
//! - Battjes-Groenendijk analytical: wave heights follow the composite
//!   Weibull distribution of a shallow foreshore, runup is proportional to
//!   wave height, and the cumulative overload is integrated in closed form.

mod output;

pub use output::{
    GrassWaveRunupLocationDependentOutput, GrassWaveRunupTimeDependentOutput,
    GrassWaveRunupTimeDependentOutputConstructionProperties,
};

use super::common::{self, RepresentativeWaveRunupCoefficients};
use super::distribution::BattjesGroenendijk;
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

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunupDistribution {
    RayleighDiscrete { fixed_number_of_waves: usize },
    BattjesGroenendijkAnalytical,
}

impl RunupDistribution {
    pub const DEFAULT_FIXED_NUMBER_OF_WAVES: usize = 10_000;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveRunupCoefficients {
    pub critical_cumulative_overload: f64,
    pub critical_front_velocity: f64,
    pub increased_load_transition_alpha_m: f64,
    pub reduced_strength_transition_alpha_s: f64,
    pub average_number_of_waves_ctm: f64,
    pub front_velocity_cu: f64,
    pub representative_wave_runup: RepresentativeWaveRunupCoefficients,
    pub representative_wave_runup_gamma_f: f64,
    pub wave_angle_impact_abeta: f64,
    pub wave_angle_impact_betamax: f64,
}

impl GrassWaveRunupCoefficients {
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
            front_velocity_cu: 1.1,
            representative_wave_runup: RepresentativeWaveRunupCoefficients::default(),
            representative_wave_runup_gamma_f: 1.0,
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
        rules::positive(report, "FrontVelocityCu", self.front_velocity_cu);
        self.representative_wave_runup.validate(report);
        rules::in_range(
            report,
            "RepresentativeWaveRunup2PGammaf",
            self.representative_wave_runup_gamma_f,
            0.5,
            1.0,
        );
        rules::non_negative(report, "WaveAngleImpactAbeta", self.wave_angle_impact_abeta);
        rules::in_range(
            report,
            "WaveAngleImpactBetamax",
            self.wave_angle_impact_betamax,
            0.0,
            90.0,
        );
    }

    fn overload(&self) -> OverloadCoefficients {
        OverloadCoefficients {
            critical_front_velocity: self.critical_front_velocity,
            increased_load_transition_alpha_m: self.increased_load_transition_alpha_m,
            reduced_strength_transition_alpha_s: self.reduced_strength_transition_alpha_s,
            front_velocity_coefficient: self.front_velocity_cu,
        }
    }
}

/// A grass location on the outer slope loaded by wave runup.
#[derive(Debug, Clone, PartialEq)]
pub struct GrassWaveRunupLocationDependentInput {
    common: LocationCommon,
    top_layer: GrassTopLayerType,
    distribution: RunupDistribution,
    coefficients: GrassWaveRunupCoefficients,
    outer_slope: f64,
}

impl GrassWaveRunupLocationDependentInput {
    pub fn new(
        common: LocationCommon,
        top_layer: GrassTopLayerType,
        distribution: RunupDistribution,
        coefficients: GrassWaveRunupCoefficients,
    ) -> Self {
        Self {
            common,
            top_layer,
            distribution,
            coefficients,
            outer_slope: f64::NAN,
        }
    }

    pub fn top_layer(&self) -> GrassTopLayerType {
        self.top_layer
    }

    pub fn coefficients(&self) -> &GrassWaveRunupCoefficients {
        &self.coefficients
    }

    fn cumulative_overload(
        &self,
        time_step: &TimeDependentInput,
        profile: &ProfileData,
        representative_wave_runup_2p: f64,
        average_number_of_waves: f64,
    ) -> Option<f64> {
        let coefficients = self.coefficients.overload();
        let threshold = common::vertical_distance_water_level_elevation(
            self.common.z,
            time_step.water_level,
        );

        match self.distribution {
            RunupDistribution::RayleighDiscrete {
                fixed_number_of_waves,
            } => Some(grass_overload::cumulative_overload_rayleigh_discrete(
                &coefficients,
                representative_wave_runup_2p,
                threshold,
                average_number_of_waves,
                fixed_number_of_waves,
            )),
            RunupDistribution::BattjesGroenendijkAnalytical => {
                let foreshore = profile.foreshore()?;
                let wave_heights = BattjesGroenendijk::new(
                    time_step.wave_height_hm0,
                    foreshore.water_depth(time_step.water_level),
                    foreshore.slope,
                )?;
                Some(grass_overload::cumulative_overload_battjes_groenendijk(
                    &coefficients,
                    &wave_heights,
                    representative_wave_runup_2p,
                    threshold,
                    average_number_of_waves,
                ))
            }
        }
    }
}

impl LocationDependentInput for GrassWaveRunupLocationDependentInput {
    fn common(&self) -> &LocationCommon {
        &self.common
    }

    fn mechanism(&self) -> FailureMechanism {
        match self.distribution {
            RunupDistribution::RayleighDiscrete { .. } => {
                FailureMechanism::GrassWaveRunupRayleighDiscrete
            }
            RunupDistribution::BattjesGroenendijkAnalytical => {
                FailureMechanism::GrassWaveRunupBattjesGroenendijkAnalytical
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
        rules::on_outer_slope(report, self.x(), profile);
        self.coefficients.validate(report);

        match self.distribution {
            RunupDistribution::RayleighDiscrete {
                fixed_number_of_waves,
            } => report.require(
                fixed_number_of_waves > 0,
                "FixedNumberOfWaves must be larger than 0.",
            ),
            RunupDistribution::BattjesGroenendijkAnalytical => match profile.foreshore() {
                None => report.error(
                    "A foreshore is required for the Battjes-Groenendijk wave height distribution.",
                ),
                Some(foreshore) => {
                    rules::positive(report, "ForeshoreSlope", foreshore.slope);
                    for (index, step) in time_steps.iter().enumerate() {
                        if foreshore.water_depth(step.water_level) <= 0.0 {
                            report.warning(format!(
                                "The foreshore is dry in time step {index}; no runup load is \
                                 calculated."
                            ));
                        }
                    }
                }
            },
        }
    }

    fn initialize(&mut self, profile: &ProfileData) -> std::result::Result<(), GeometryError> {
        self.common.initialize(profile)?;
        self.outer_slope = profile
            .outer_slope_at(self.x())
            .ok_or_else(|| GeometryError::new(format!("no outer slope at x = {}", self.x())))?;
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
        let average_number_of_waves = common::average_number_of_waves(
            time_step.increment_time(),
            time_step.wave_period_tm10,
            c.average_number_of_waves_ctm,
        );
        let surf_similarity = common::surf_similarity_parameter(
            self.outer_slope,
            time_step.wave_height_hm0,
            time_step.wave_period_tm10,
        );
        let wave_angle = common::wave_angle(time_step.wave_direction, profile.dike_orientation());
        let wave_angle_impact = common::wave_angle_impact_runup(
            wave_angle,
            c.wave_angle_impact_abeta,
            c.wave_angle_impact_betamax,
        );
        let runup_2p = common::representative_wave_runup_2p(
            surf_similarity,
            wave_angle_impact,
            time_step.wave_height_hm0,
            c.representative_wave_runup_gamma_f,
            &c.representative_wave_runup,
        );

        let cumulative_overload =
            self.cumulative_overload(time_step, profile, runup_2p, average_number_of_waves);
        let increment_damage = cumulative_overload
            .map_or(f64::NAN, |overload| overload / c.critical_cumulative_overload);

        let details = GrassWaveRunupTimeDependentOutputConstructionProperties {
            vertical_distance_water_level_elevation: Some(
                common::vertical_distance_water_level_elevation(
                    self.common.z,
                    time_step.water_level,
                ),
            ),
            representative_wave_runup_2p: Some(runup_2p),
            cumulative_overload,
            average_number_of_waves: Some(average_number_of_waves),
            wave_angle_impact: Some(wave_angle_impact),
        };

        TimeDependentOutput::new(
            TimeDependentOutputConstructionProperties::from_increment(
                increment_damage,
                damage_at_start,
                self.failure_number(),
                time_step,
            ),
            TimeDependentOutputDetails::GrassWaveRunup(details.build()?),
        )
    }

    fn location_dependent_output(
        &self,
        time_dependent_output_items: Vec<TimeDependentOutput>,
    ) -> LocationDependentOutput {
        LocationDependentOutput::new(
            time_dependent_output_items,
            self.common.z,
            LocationDependentOutputDetails::GrassWaveRunup(
                GrassWaveRunupLocationDependentOutput {
                    outer_slope: self.outer_slope,
                },
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Foreshore;
    use crate::testkit::helpers::{dike_profile, hourly_time_steps};

    fn location(distribution: RunupDistribution) -> GrassWaveRunupLocationDependentInput {
        GrassWaveRunupLocationDependentInput::new(
            LocationCommon::new(25.0, 0.0, 1.0),
            GrassTopLayerType::OpenSod,
            distribution,
            GrassWaveRunupCoefficients::for_top_layer(GrassTopLayerType::OpenSod),
        )
    }

    fn discrete() -> RunupDistribution {
        RunupDistribution::RayleighDiscrete {
            fixed_number_of_waves: RunupDistribution::DEFAULT_FIXED_NUMBER_OF_WAVES,
        }
    }

    fn storm_step() -> TimeDependentInput {
        TimeDependentInput::new(0, 3600, 5.0, 2.0, 6.0, 0.0)
    }

    #[test]
    fn test_battjes_groenendijk_requires_foreshore() {
        let mut report = ValidationReport::new();
        location(RunupDistribution::BattjesGroenendijkAnalytical).validate(
            &hourly_time_steps(1),
            &dike_profile(),
            &mut report,
        );
        assert_eq!(report.error_count(), 1);
        assert!(report.issues()[0].message.contains("foreshore"));
    }

    #[test]
    fn test_rayleigh_discrete_runup_damages_slope() {
        let profile = dike_profile();
        let mut location = location(discrete());
        location.initialize(&profile).unwrap();
        assert!((location.outer_slope - 0.3).abs() < 1e-12);

        let output = location.calculate(0.0, &storm_step(), &profile).unwrap();
        assert!(output.increment_damage() > 0.0);
        match output.details() {
            TimeDependentOutputDetails::GrassWaveRunup(details) => {
                assert!((details.vertical_distance_water_level_elevation - 1.0).abs() < 1e-12);
                assert!(details.representative_wave_runup_2p.unwrap() > 1.0);
            }
            other => panic!("unexpected details {other:?}"),
        }
    }

    #[test]
    fn test_battjes_groenendijk_on_deep_foreshore_is_close_to_rayleigh() {
        let profile = dike_profile();
        let deep = ProfileData::new(
            profile.segments().to_vec(),
            profile.characteristic_points().to_vec(),
            Some(Foreshore::new(0.004, -40.0)),
        );

        let mut rayleigh = location(discrete());
        rayleigh.initialize(&deep).unwrap();
        let mut battjes_groenendijk = location(RunupDistribution::BattjesGroenendijkAnalytical);
        battjes_groenendijk.initialize(&deep).unwrap();

        let expected = rayleigh.calculate(0.0, &storm_step(), &deep).unwrap();
        let actual = battjes_groenendijk.calculate(0.0, &storm_step(), &deep).unwrap();
        assert!(actual.increment_damage() > 0.0);
        let ratio = actual.increment_damage() / expected.increment_damage();
        assert!((0.7..1.3).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_dry_foreshore_yields_nan_increment() {
        let profile = dike_profile();
        let dry = ProfileData::new(
            profile.segments().to_vec(),
            profile.characteristic_points().to_vec(),
            Some(Foreshore::new(0.004, 6.0)),
        );
        let mut location = location(RunupDistribution::BattjesGroenendijkAnalytical);
        location.initialize(&dry).unwrap();

        let output = location.calculate(0.1, &storm_step(), &dry).unwrap();
        assert!(output.increment_damage().is_nan());
        assert_eq!(output.damage(), 0.1);
    }
}
