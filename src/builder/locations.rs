//! Construction properties of locations.
//!
//! Every coefficient a caller may override is an `Option`; unset values
//! take the defaults of the location's top layer when the location is
//! built. Building checks the top layer against the mechanism; all other
//! rules run when the assembled input is validated.

use crate::effects::{validate_with, CalculationValidation};
use crate::input::{FailureMechanism, LocationCommon, LocationDependentInput};
use crate::mechanisms::asphalt_wave_impact::functions::Factor;
use crate::mechanisms::asphalt_wave_impact::{
    AsphaltLayer, AsphaltWaveImpactCoefficients, AsphaltWaveImpactLocationDependentInput,
};
use crate::mechanisms::common::RepresentativeWaveRunupCoefficients;
use crate::mechanisms::grass_wave_impact::{
    GrassWaveImpactCoefficients, GrassWaveImpactLocationDependentInput,
};
use crate::mechanisms::grass_wave_overtopping::{
    GrassWaveOvertoppingCoefficients, GrassWaveOvertoppingLocationDependentInput,
    OvertoppingDistribution,
};
use crate::mechanisms::grass_wave_runup::{
    GrassWaveRunupCoefficients, GrassWaveRunupLocationDependentInput, RunupDistribution,
};
use crate::mechanisms::natural_stone_wave_impact::functions::{
    HydraulicLoadCoefficients, LimitLoadingCoefficients,
};
use crate::mechanisms::natural_stone_wave_impact::{
    NaturalStoneWaveImpactCoefficients, NaturalStoneWaveImpactLocationDependentInput,
};
use crate::mechanisms::{GrassTopLayerType, TopLayerType};
use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_DAMAGE: f64 = 0.0;
pub const DEFAULT_FAILURE_NUMBER: f64 = 1.0;

/// Properties every location has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonConstructionProperties {
    pub x: f64,
    pub top_layer_type: TopLayerType,
    #[serde(default)]
    pub initial_damage: Option<f64>,
    #[serde(default)]
    pub failure_number: Option<f64>,
}

impl CommonConstructionProperties {
    pub fn new(x: f64, top_layer_type: TopLayerType) -> Self {
        Self {
            x,
            top_layer_type,
            initial_damage: None,
            failure_number: None,
        }
    }

    fn location_common(&self) -> LocationCommon {
        LocationCommon::new(
            self.x,
            self.initial_damage.unwrap_or(DEFAULT_INITIAL_DAMAGE),
            self.failure_number.unwrap_or(DEFAULT_FAILURE_NUMBER),
        )
    }

    fn require_top_layer(
        &self,
        mechanism: FailureMechanism,
        valid: &[TopLayerType],
        report: &mut ValidationReport,
    ) {
        report.require(
            valid.contains(&self.top_layer_type),
            format!(
                "The top layer type {} is not valid for {mechanism}.",
                self.top_layer_type
            ),
        );
    }

    /// The grass top layer, or an error in `report` when it is not grass.
    fn grass_top_layer(
        &self,
        mechanism: FailureMechanism,
        report: &mut ValidationReport,
    ) -> GrassTopLayerType {
        self.require_top_layer(
            mechanism,
            &[TopLayerType::ClosedSod, TopLayerType::OpenSod],
            report,
        );
        self.top_layer_type
            .grass()
            .unwrap_or(GrassTopLayerType::ClosedSod)
    }
}

fn apply(target: &mut f64, value: Option<f64>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsphaltWaveImpactLocationConstructionProperties {
    #[serde(flatten)]
    pub common: CommonConstructionProperties,
    pub failure_tension: f64,
    pub soil_elasticity: f64,
    pub thickness_upper_layer: f64,
    pub elastic_modulus_upper_layer: f64,
    #[serde(default)]
    pub thickness_sub_layer: Option<f64>,
    #[serde(default)]
    pub elastic_modulus_sub_layer: Option<f64>,
    #[serde(default)]
    pub density_of_water: Option<f64>,
    #[serde(default)]
    pub stiffness_relation_nu: Option<f64>,
    #[serde(default)]
    pub fatigue_alpha: Option<f64>,
    #[serde(default)]
    pub fatigue_beta: Option<f64>,
    #[serde(default)]
    pub impact_number_c: Option<f64>,
    #[serde(default)]
    pub average_number_of_waves_ctm: Option<f64>,
    #[serde(default)]
    pub width_factors: Option<Vec<Factor>>,
    #[serde(default)]
    pub depth_factors: Option<Vec<Factor>>,
    #[serde(default)]
    pub impact_factors: Option<Vec<Factor>>,
}

impl AsphaltWaveImpactLocationConstructionProperties {
    pub fn new(
        x: f64,
        top_layer_type: TopLayerType,
        failure_tension: f64,
        soil_elasticity: f64,
        thickness_upper_layer: f64,
        elastic_modulus_upper_layer: f64,
    ) -> Self {
        Self {
            common: CommonConstructionProperties::new(x, top_layer_type),
            failure_tension,
            soil_elasticity,
            thickness_upper_layer,
            elastic_modulus_upper_layer,
            thickness_sub_layer: None,
            elastic_modulus_sub_layer: None,
            density_of_water: None,
            stiffness_relation_nu: None,
            fatigue_alpha: None,
            fatigue_beta: None,
            impact_number_c: None,
            average_number_of_waves_ctm: None,
            width_factors: None,
            depth_factors: None,
            impact_factors: None,
        }
    }

    fn build(self) -> CalculationValidation<Box<dyn LocationDependentInput>> {
        let mut report = ValidationReport::new();
        self.common.require_top_layer(
            FailureMechanism::AsphaltWaveImpact,
            &[TopLayerType::HydraulicAsphaltConcrete],
            &mut report,
        );

        let mut coefficients = AsphaltWaveImpactCoefficients::new(
            self.failure_tension,
            self.soil_elasticity,
            AsphaltLayer {
                thickness: self.thickness_upper_layer,
                elastic_modulus: self.elastic_modulus_upper_layer,
            },
        );
        match (self.thickness_sub_layer, self.elastic_modulus_sub_layer) {
            (Some(thickness), Some(elastic_modulus)) => {
                coefficients.sub_layer = Some(AsphaltLayer {
                    thickness,
                    elastic_modulus,
                });
            }
            (None, None) => {}
            _ => report.error(
                "ThicknessSubLayer and ElasticModulusSubLayer must be given together.",
            ),
        }
        apply(&mut coefficients.density_of_water, self.density_of_water);
        apply(&mut coefficients.stiffness_relation_nu, self.stiffness_relation_nu);
        apply(&mut coefficients.fatigue_alpha, self.fatigue_alpha);
        apply(&mut coefficients.fatigue_beta, self.fatigue_beta);
        apply(&mut coefficients.impact_number_c, self.impact_number_c);
        apply(
            &mut coefficients.average_number_of_waves_ctm,
            self.average_number_of_waves_ctm,
        );
        if let Some(factors) = self.width_factors {
            coefficients.width_factors = factors;
        }
        if let Some(factors) = self.depth_factors {
            coefficients.depth_factors = factors;
        }
        if let Some(factors) = self.impact_factors {
            coefficients.impact_factors = factors;
        }

        let location = AsphaltWaveImpactLocationDependentInput::new(
            self.common.location_common(),
            coefficients,
        );
        validate_with(report, Box::new(location) as Box<dyn LocationDependentInput>)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveImpactLocationConstructionProperties {
    #[serde(flatten)]
    pub common: CommonConstructionProperties,
    #[serde(default)]
    pub time_line_agwi: Option<f64>,
    #[serde(default)]
    pub time_line_bgwi: Option<f64>,
    #[serde(default)]
    pub time_line_cgwi: Option<f64>,
    #[serde(default)]
    pub minimum_wave_height_temax: Option<f64>,
    #[serde(default)]
    pub maximum_wave_height_temin: Option<f64>,
    #[serde(default)]
    pub wave_angle_impact_nwa: Option<f64>,
    #[serde(default)]
    pub wave_angle_impact_qwa: Option<f64>,
    #[serde(default)]
    pub wave_angle_impact_rwa: Option<f64>,
    #[serde(default)]
    pub upper_limit_loading_aul: Option<f64>,
    #[serde(default)]
    pub lower_limit_loading_all: Option<f64>,
}

impl GrassWaveImpactLocationConstructionProperties {
    pub fn new(x: f64, top_layer_type: TopLayerType) -> Self {
        Self {
            common: CommonConstructionProperties::new(x, top_layer_type),
            time_line_agwi: None,
            time_line_bgwi: None,
            time_line_cgwi: None,
            minimum_wave_height_temax: None,
            maximum_wave_height_temin: None,
            wave_angle_impact_nwa: None,
            wave_angle_impact_qwa: None,
            wave_angle_impact_rwa: None,
            upper_limit_loading_aul: None,
            lower_limit_loading_all: None,
        }
    }

    fn build(self) -> CalculationValidation<Box<dyn LocationDependentInput>> {
        let mut report = ValidationReport::new();
        let top_layer = self
            .common
            .grass_top_layer(FailureMechanism::GrassWaveImpact, &mut report);

        let mut c = GrassWaveImpactCoefficients::for_top_layer(top_layer);
        apply(&mut c.time_line_agwi, self.time_line_agwi);
        apply(&mut c.time_line_bgwi, self.time_line_bgwi);
        apply(&mut c.time_line_cgwi, self.time_line_cgwi);
        apply(&mut c.minimum_wave_height_temax, self.minimum_wave_height_temax);
        apply(&mut c.maximum_wave_height_temin, self.maximum_wave_height_temin);
        apply(&mut c.wave_angle_impact_nwa, self.wave_angle_impact_nwa);
        apply(&mut c.wave_angle_impact_qwa, self.wave_angle_impact_qwa);
        apply(&mut c.wave_angle_impact_rwa, self.wave_angle_impact_rwa);
        apply(&mut c.upper_limit_loading_aul, self.upper_limit_loading_aul);
        apply(&mut c.lower_limit_loading_all, self.lower_limit_loading_all);

        let location =
            GrassWaveImpactLocationDependentInput::new(self.common.location_common(), top_layer, c);
        validate_with(report, Box::new(location) as Box<dyn LocationDependentInput>)
    }
}

/// Overrides of the 2% runup coefficients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeWaveRunupConstructionProperties {
    #[serde(default)]
    pub representative_wave_runup_2p_a: Option<f64>,
    #[serde(default)]
    pub representative_wave_runup_2p_b: Option<f64>,
    #[serde(default)]
    pub representative_wave_runup_2p_c: Option<f64>,
    #[serde(default)]
    pub representative_wave_runup_2p_gamma_b: Option<f64>,
}

impl RepresentativeWaveRunupConstructionProperties {
    fn apply_to(&self, c: &mut RepresentativeWaveRunupCoefficients) {
        apply(&mut c.a, self.representative_wave_runup_2p_a);
        apply(&mut c.b, self.representative_wave_runup_2p_b);
        apply(&mut c.c, self.representative_wave_runup_2p_c);
        apply(&mut c.gamma_b, self.representative_wave_runup_2p_gamma_b);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveRunupLocationConstructionProperties {
    #[serde(flatten)]
    pub common: CommonConstructionProperties,
    #[serde(flatten)]
    pub representative_wave_runup: RepresentativeWaveRunupConstructionProperties,
    #[serde(default)]
    pub critical_cumulative_overload: Option<f64>,
    #[serde(default)]
    pub critical_front_velocity: Option<f64>,
    #[serde(default)]
    pub increased_load_transition_alpha_m: Option<f64>,
    #[serde(default)]
    pub reduced_strength_transition_alpha_s: Option<f64>,
    #[serde(default)]
    pub average_number_of_waves_ctm: Option<f64>,
    #[serde(default)]
    pub fixed_number_of_waves: Option<usize>,
    #[serde(default)]
    pub front_velocity_cu: Option<f64>,
    #[serde(default)]
    pub representative_wave_runup_gamma_f: Option<f64>,
    #[serde(default)]
    pub wave_angle_impact_abeta: Option<f64>,
    #[serde(default)]
    pub wave_angle_impact_betamax: Option<f64>,
}

impl GrassWaveRunupLocationConstructionProperties {
    pub fn new(x: f64, top_layer_type: TopLayerType) -> Self {
        Self {
            common: CommonConstructionProperties::new(x, top_layer_type),
            representative_wave_runup: RepresentativeWaveRunupConstructionProperties::default(),
            critical_cumulative_overload: None,
            critical_front_velocity: None,
            increased_load_transition_alpha_m: None,
            reduced_strength_transition_alpha_s: None,
            average_number_of_waves_ctm: None,
            fixed_number_of_waves: None,
            front_velocity_cu: None,
            representative_wave_runup_gamma_f: None,
            wave_angle_impact_abeta: None,
            wave_angle_impact_betamax: None,
        }
    }

    fn build(
        self,
        mechanism: FailureMechanism,
    ) -> CalculationValidation<Box<dyn LocationDependentInput>> {
        let mut report = ValidationReport::new();
        let top_layer = self.common.grass_top_layer(mechanism, &mut report);

        let distribution = if mechanism == FailureMechanism::GrassWaveRunupRayleighDiscrete {
            RunupDistribution::RayleighDiscrete {
                fixed_number_of_waves: self
                    .fixed_number_of_waves
                    .unwrap_or(RunupDistribution::DEFAULT_FIXED_NUMBER_OF_WAVES),
            }
        } else {
            if self.fixed_number_of_waves.is_some() {
                report.warning(format!(
                    "FixedNumberOfWaves is not used by {mechanism} and is ignored."
                ));
            }
            RunupDistribution::BattjesGroenendijkAnalytical
        };

        let mut c = GrassWaveRunupCoefficients::for_top_layer(top_layer);
        apply(&mut c.critical_cumulative_overload, self.critical_cumulative_overload);
        apply(&mut c.critical_front_velocity, self.critical_front_velocity);
        apply(
            &mut c.increased_load_transition_alpha_m,
            self.increased_load_transition_alpha_m,
        );
        apply(
            &mut c.reduced_strength_transition_alpha_s,
            self.reduced_strength_transition_alpha_s,
        );
        apply(&mut c.average_number_of_waves_ctm, self.average_number_of_waves_ctm);
        apply(&mut c.front_velocity_cu, self.front_velocity_cu);
        apply(
            &mut c.representative_wave_runup_gamma_f,
            self.representative_wave_runup_gamma_f,
        );
        apply(&mut c.wave_angle_impact_abeta, self.wave_angle_impact_abeta);
        apply(&mut c.wave_angle_impact_betamax, self.wave_angle_impact_betamax);
        self.representative_wave_runup
            .apply_to(&mut c.representative_wave_runup);

        let location = GrassWaveRunupLocationDependentInput::new(
            self.common.location_common(),
            top_layer,
            distribution,
            c,
        );
        validate_with(report, Box::new(location) as Box<dyn LocationDependentInput>)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveOvertoppingLocationConstructionProperties {
    #[serde(flatten)]
    pub common: CommonConstructionProperties,
    #[serde(flatten)]
    pub representative_wave_runup: RepresentativeWaveRunupConstructionProperties,
    #[serde(default)]
    pub critical_cumulative_overload: Option<f64>,
    #[serde(default)]
    pub critical_front_velocity: Option<f64>,
    #[serde(default)]
    pub increased_load_transition_alpha_m: Option<f64>,
    #[serde(default)]
    pub reduced_strength_transition_alpha_s: Option<f64>,
    #[serde(default)]
    pub average_number_of_waves_ctm: Option<f64>,
    #[serde(default)]
    pub fixed_number_of_waves: Option<usize>,
    #[serde(default)]
    pub front_velocity_cwo: Option<f64>,
    #[serde(default)]
    pub acceleration_alpha_a_for_crest: Option<f64>,
    #[serde(default)]
    pub acceleration_alpha_a_for_inner_slope: Option<f64>,
    #[serde(default)]
    pub dike_height: Option<f64>,
    #[serde(default)]
    pub wave_angle_impact_abeta: Option<f64>,
    #[serde(default)]
    pub wave_angle_impact_betamax: Option<f64>,
}

impl GrassWaveOvertoppingLocationConstructionProperties {
    pub fn new(x: f64, top_layer_type: TopLayerType) -> Self {
        Self {
            common: CommonConstructionProperties::new(x, top_layer_type),
            representative_wave_runup: RepresentativeWaveRunupConstructionProperties::default(),
            critical_cumulative_overload: None,
            critical_front_velocity: None,
            increased_load_transition_alpha_m: None,
            reduced_strength_transition_alpha_s: None,
            average_number_of_waves_ctm: None,
            fixed_number_of_waves: None,
            front_velocity_cwo: None,
            acceleration_alpha_a_for_crest: None,
            acceleration_alpha_a_for_inner_slope: None,
            dike_height: None,
            wave_angle_impact_abeta: None,
            wave_angle_impact_betamax: None,
        }
    }

    fn build(
        self,
        mechanism: FailureMechanism,
    ) -> CalculationValidation<Box<dyn LocationDependentInput>> {
        let mut report = ValidationReport::new();
        let top_layer = self.common.grass_top_layer(mechanism, &mut report);

        let distribution = if mechanism == FailureMechanism::GrassWaveOvertoppingRayleighDiscrete
        {
            OvertoppingDistribution::RayleighDiscrete {
                fixed_number_of_waves: self
                    .fixed_number_of_waves
                    .unwrap_or(OvertoppingDistribution::DEFAULT_FIXED_NUMBER_OF_WAVES),
            }
        } else {
            if self.fixed_number_of_waves.is_some() {
                report.warning(format!(
                    "FixedNumberOfWaves is not used by {mechanism} and is ignored."
                ));
            }
            OvertoppingDistribution::RayleighAnalytical
        };

        let mut c = GrassWaveOvertoppingCoefficients::for_top_layer(top_layer);
        apply(&mut c.critical_cumulative_overload, self.critical_cumulative_overload);
        apply(&mut c.critical_front_velocity, self.critical_front_velocity);
        apply(
            &mut c.increased_load_transition_alpha_m,
            self.increased_load_transition_alpha_m,
        );
        apply(
            &mut c.reduced_strength_transition_alpha_s,
            self.reduced_strength_transition_alpha_s,
        );
        apply(&mut c.average_number_of_waves_ctm, self.average_number_of_waves_ctm);
        apply(&mut c.front_velocity_cwo, self.front_velocity_cwo);
        apply(
            &mut c.acceleration_alpha_a_for_crest,
            self.acceleration_alpha_a_for_crest,
        );
        apply(
            &mut c.acceleration_alpha_a_for_inner_slope,
            self.acceleration_alpha_a_for_inner_slope,
        );
        if self.dike_height.is_some() {
            c.dike_height = self.dike_height;
        }
        apply(&mut c.wave_angle_impact_abeta, self.wave_angle_impact_abeta);
        apply(&mut c.wave_angle_impact_betamax, self.wave_angle_impact_betamax);
        self.representative_wave_runup
            .apply_to(&mut c.representative_wave_runup);

        let location = GrassWaveOvertoppingLocationDependentInput::new(
            self.common.location_common(),
            top_layer,
            distribution,
            c,
        );
        validate_with(report, Box::new(location) as Box<dyn LocationDependentInput>)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalStoneWaveImpactLocationConstructionProperties {
    #[serde(flatten)]
    pub common: CommonConstructionProperties,
    pub thickness_top_layer: f64,
    #[serde(default)]
    pub relative_density: Option<f64>,
    #[serde(default)]
    pub hydraulic_load_xib: Option<f64>,
    #[serde(default)]
    pub hydraulic_load_plunging: Option<HydraulicLoadCoefficients>,
    #[serde(default)]
    pub hydraulic_load_surging: Option<HydraulicLoadCoefficients>,
    #[serde(default)]
    pub slope_upper_level_aus: Option<f64>,
    #[serde(default)]
    pub slope_lower_level_als: Option<f64>,
    #[serde(default)]
    pub upper_limit_loading: Option<LimitLoadingCoefficients>,
    #[serde(default)]
    pub lower_limit_loading: Option<LimitLoadingCoefficients>,
    #[serde(default)]
    pub distance_maximum_wave_elevation_asmax: Option<f64>,
    #[serde(default)]
    pub distance_maximum_wave_elevation_bsmax: Option<f64>,
    #[serde(default)]
    pub normative_width_of_wave_impact_awi: Option<f64>,
    #[serde(default)]
    pub normative_width_of_wave_impact_bwi: Option<f64>,
    #[serde(default)]
    pub wave_angle_impact_betamax: Option<f64>,
}

impl NaturalStoneWaveImpactLocationConstructionProperties {
    pub fn new(x: f64, top_layer_type: TopLayerType, thickness_top_layer: f64) -> Self {
        Self {
            common: CommonConstructionProperties::new(x, top_layer_type),
            thickness_top_layer,
            relative_density: None,
            hydraulic_load_xib: None,
            hydraulic_load_plunging: None,
            hydraulic_load_surging: None,
            slope_upper_level_aus: None,
            slope_lower_level_als: None,
            upper_limit_loading: None,
            lower_limit_loading: None,
            distance_maximum_wave_elevation_asmax: None,
            distance_maximum_wave_elevation_bsmax: None,
            normative_width_of_wave_impact_awi: None,
            normative_width_of_wave_impact_bwi: None,
            wave_angle_impact_betamax: None,
        }
    }

    fn build(self) -> CalculationValidation<Box<dyn LocationDependentInput>> {
        let mut report = ValidationReport::new();
        self.common.require_top_layer(
            FailureMechanism::NaturalStoneWaveImpact,
            &[TopLayerType::NordicStone],
            &mut report,
        );

        let mut c = NaturalStoneWaveImpactCoefficients::new(self.thickness_top_layer);
        apply(&mut c.relative_density, self.relative_density);
        apply(&mut c.hydraulic_load_xib, self.hydraulic_load_xib);
        if let Some(plunging) = self.hydraulic_load_plunging {
            c.hydraulic_load_plunging = plunging;
        }
        if let Some(surging) = self.hydraulic_load_surging {
            c.hydraulic_load_surging = surging;
        }
        apply(&mut c.slope_upper_level_aus, self.slope_upper_level_aus);
        apply(&mut c.slope_lower_level_als, self.slope_lower_level_als);
        if let Some(upper) = self.upper_limit_loading {
            c.upper_limit_loading = upper;
        }
        if let Some(lower) = self.lower_limit_loading {
            c.lower_limit_loading = lower;
        }
        apply(
            &mut c.distance_maximum_wave_elevation_asmax,
            self.distance_maximum_wave_elevation_asmax,
        );
        apply(
            &mut c.distance_maximum_wave_elevation_bsmax,
            self.distance_maximum_wave_elevation_bsmax,
        );
        apply(
            &mut c.normative_width_of_wave_impact_awi,
            self.normative_width_of_wave_impact_awi,
        );
        apply(
            &mut c.normative_width_of_wave_impact_bwi,
            self.normative_width_of_wave_impact_bwi,
        );
        apply(&mut c.wave_angle_impact_betamax, self.wave_angle_impact_betamax);

        let location =
            NaturalStoneWaveImpactLocationDependentInput::new(self.common.location_common(), c);
        validate_with(report, Box::new(location) as Box<dyn LocationDependentInput>)
    }
}

/// Construction properties of one location, tagged with its mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mechanism", rename_all = "snake_case")]
pub enum LocationConstructionProperties {
    AsphaltWaveImpact(AsphaltWaveImpactLocationConstructionProperties),
    GrassWaveImpact(GrassWaveImpactLocationConstructionProperties),
    GrassWaveRunupRayleighDiscrete(GrassWaveRunupLocationConstructionProperties),
    GrassWaveRunupBattjesGroenendijkAnalytical(GrassWaveRunupLocationConstructionProperties),
    GrassWaveOvertoppingRayleighDiscrete(GrassWaveOvertoppingLocationConstructionProperties),
    GrassWaveOvertoppingRayleighAnalytical(GrassWaveOvertoppingLocationConstructionProperties),
    NaturalStoneWaveImpact(NaturalStoneWaveImpactLocationConstructionProperties),
}

impl LocationConstructionProperties {
    pub fn x(&self) -> f64 {
        match self {
            Self::AsphaltWaveImpact(p) => p.common.x,
            Self::GrassWaveImpact(p) => p.common.x,
            Self::GrassWaveRunupRayleighDiscrete(p)
            | Self::GrassWaveRunupBattjesGroenendijkAnalytical(p) => p.common.x,
            Self::GrassWaveOvertoppingRayleighDiscrete(p)
            | Self::GrassWaveOvertoppingRayleighAnalytical(p) => p.common.x,
            Self::NaturalStoneWaveImpact(p) => p.common.x,
        }
    }

    pub fn is_overtopping(&self) -> bool {
        matches!(
            self,
            Self::GrassWaveOvertoppingRayleighDiscrete(_)
                | Self::GrassWaveOvertoppingRayleighAnalytical(_)
        )
    }

    /// Resolve defaults and construct the location.
    pub fn build(self) -> CalculationValidation<Box<dyn LocationDependentInput>> {
        match self {
            Self::AsphaltWaveImpact(p) => p.build(),
            Self::GrassWaveImpact(p) => p.build(),
            Self::GrassWaveRunupRayleighDiscrete(p) => {
                p.build(FailureMechanism::GrassWaveRunupRayleighDiscrete)
            }
            Self::GrassWaveRunupBattjesGroenendijkAnalytical(p) => {
                p.build(FailureMechanism::GrassWaveRunupBattjesGroenendijkAnalytical)
            }
            Self::GrassWaveOvertoppingRayleighDiscrete(p) => {
                p.build(FailureMechanism::GrassWaveOvertoppingRayleighDiscrete)
            }
            Self::GrassWaveOvertoppingRayleighAnalytical(p) => {
                p.build(FailureMechanism::GrassWaveOvertoppingRayleighAnalytical)
            }
            Self::NaturalStoneWaveImpact(p) => p.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::into_data_result;

    #[test]
    fn test_defaults_are_applied() {
        let properties = LocationConstructionProperties::GrassWaveImpact(
            GrassWaveImpactLocationConstructionProperties::new(20.0, TopLayerType::OpenSod),
        );
        let location = into_data_result(properties.build())
            .into_result()
            .unwrap();
        assert_eq!(location.initial_damage(), DEFAULT_INITIAL_DAMAGE);
        assert_eq!(location.failure_number(), DEFAULT_FAILURE_NUMBER);
        assert_eq!(location.mechanism(), FailureMechanism::GrassWaveImpact);
    }

    #[test]
    fn test_wrong_top_layer_is_rejected() {
        let properties = LocationConstructionProperties::NaturalStoneWaveImpact(
            NaturalStoneWaveImpactLocationConstructionProperties::new(
                20.0,
                TopLayerType::ClosedSod,
                0.3,
            ),
        );
        let issues = crate::assert_validation_error_count!(properties.build(), 1);
        assert_eq!(
            issues[0].message,
            "The top layer type ClosedSod is not valid for natural stone wave impact."
        );
    }

    #[test]
    fn test_half_a_sub_layer_is_rejected() {
        let mut properties = AsphaltWaveImpactLocationConstructionProperties::new(
            20.0,
            TopLayerType::HydraulicAsphaltConcrete,
            1.6,
            55.0,
            0.3,
            18_000.0,
        );
        properties.thickness_sub_layer = Some(0.1);
        let properties = LocationConstructionProperties::AsphaltWaveImpact(properties);
        let result = into_data_result(properties.build());
        assert!(!result.successful());
    }

    #[test]
    fn test_fixed_number_of_waves_on_analytical_variant_warns() {
        let mut properties =
            GrassWaveOvertoppingLocationConstructionProperties::new(40.0, TopLayerType::OpenSod);
        properties.fixed_number_of_waves = Some(500);
        let result = into_data_result(
            LocationConstructionProperties::GrassWaveOvertoppingRayleighAnalytical(properties)
                .build(),
        );
        assert!(result.successful());
        assert_eq!(result.events().len(), 1);
    }

    #[test]
    fn test_deserialize_tagged_properties() {
        let json = r#"{
            "mechanism": "grass_wave_overtopping_rayleigh_discrete",
            "x": 40.0,
            "top_layer_type": "OpenSod",
            "failure_number": 1.0,
            "representative_wave_runup_2p_gamma_b": 0.9
        }"#;
        let properties: LocationConstructionProperties = serde_json::from_str(json).unwrap();
        match properties {
            LocationConstructionProperties::GrassWaveOvertoppingRayleighDiscrete(p) => {
                assert_eq!(p.common.x, 40.0);
                assert_eq!(p.common.failure_number, Some(1.0));
                assert_eq!(
                    p.representative_wave_runup.representative_wave_runup_2p_gamma_b,
                    Some(0.9)
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
