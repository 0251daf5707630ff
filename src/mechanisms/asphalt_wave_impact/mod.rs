//! Fatigue of hydraulic asphalt concrete by wave impacts.

pub mod functions;
mod output;

pub use output::{
    AsphaltWaveImpactLocationDependentOutput, AsphaltWaveImpactTimeDependentOutput,
    AsphaltWaveImpactTimeDependentOutputConstructionProperties,
};

use self::functions::{Factor, FactorTables, ImpactLoad, LayerResponse};
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

pub const DEFAULT_WIDTH_FACTORS: [Factor; 10] = [
    (0.1, 0.0392),
    (0.2, 0.5339),
    (0.3, 0.2613),
    (0.4, 0.0947),
    (0.5, 0.0371),
    (0.6, 0.0178),
    (0.7, 0.0080),
    (0.8, 0.0036),
    (0.9, 0.0022),
    (1.0, 0.0022),
];

pub const DEFAULT_DEPTH_FACTORS: [Factor; 17] = [
    (-1.0, 0.012),
    (-0.875, 0.022),
    (-0.75, 0.035),
    (-0.625, 0.05),
    (-0.5, 0.065),
    (-0.375, 0.078),
    (-0.25, 0.088),
    (-0.125, 0.096),
    (0.0, 0.108),
    (0.125, 0.096),
    (0.25, 0.088),
    (0.375, 0.078),
    (0.5, 0.065),
    (0.625, 0.05),
    (0.75, 0.035),
    (0.875, 0.022),
    (1.0, 0.012),
];

pub const DEFAULT_IMPACT_FACTORS: [Factor; 11] = [
    (2.0, 0.039),
    (2.4, 0.1),
    (2.8, 0.18),
    (3.2, 0.235),
    (3.6, 0.2),
    (4.0, 0.13),
    (4.4, 0.08),
    (4.8, 0.02),
    (5.2, 0.01),
    (5.6, 0.005),
    (6.0, 0.001),
];

/// Thickness (m) and elastic modulus (MPa) of an asphalt layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsphaltLayer {
    pub thickness: f64,
    pub elastic_modulus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsphaltWaveImpactCoefficients {
    /// MPa
    pub failure_tension: f64,
    /// MPa/m
    pub soil_elasticity: f64,
    pub upper_layer: AsphaltLayer,
    pub sub_layer: Option<AsphaltLayer>,
    pub density_of_water: f64,
    pub stiffness_relation_nu: f64,
    pub fatigue_alpha: f64,
    pub fatigue_beta: f64,
    pub impact_number_c: f64,
    pub average_number_of_waves_ctm: f64,
    pub width_factors: Vec<Factor>,
    pub depth_factors: Vec<Factor>,
    pub impact_factors: Vec<Factor>,
}

impl AsphaltWaveImpactCoefficients {
    /// Coefficients with defaults for everything but the layer properties.
    pub fn new(failure_tension: f64, soil_elasticity: f64, upper_layer: AsphaltLayer) -> Self {
        Self {
            failure_tension,
            soil_elasticity,
            upper_layer,
            sub_layer: None,
            density_of_water: 1025.0,
            stiffness_relation_nu: 0.35,
            fatigue_alpha: 0.42,
            fatigue_beta: 4.76,
            impact_number_c: 1.0,
            average_number_of_waves_ctm: 1.0,
            width_factors: DEFAULT_WIDTH_FACTORS.to_vec(),
            depth_factors: DEFAULT_DEPTH_FACTORS.to_vec(),
            impact_factors: DEFAULT_IMPACT_FACTORS.to_vec(),
        }
    }

    fn validate(&self, report: &mut ValidationReport) {
        rules::positive(report, "FailureTension", self.failure_tension);
        rules::positive(report, "SoilElasticity", self.soil_elasticity);
        rules::positive(report, "ThicknessUpperLayer", self.upper_layer.thickness);
        rules::positive(report, "ElasticModulusUpperLayer", self.upper_layer.elastic_modulus);
        if let Some(sub_layer) = &self.sub_layer {
            rules::positive(report, "ThicknessSubLayer", sub_layer.thickness);
            rules::positive(report, "ElasticModulusSubLayer", sub_layer.elastic_modulus);
        }
        rules::in_range(report, "DensityOfWater", self.density_of_water, 950.0, 1050.0);
        rules::in_open_range(report, "StiffnessRelationNu", self.stiffness_relation_nu, 0.0, 1.0);
        rules::positive(report, "FatigueAlpha", self.fatigue_alpha);
        rules::positive(report, "FatigueBeta", self.fatigue_beta);
        rules::positive(report, "ImpactNumberC", self.impact_number_c);
        rules::positive(report, "AverageNumberOfWavesCtm", self.average_number_of_waves_ctm);
        rules::factor_table(report, "WidthFactors", &self.width_factors);
        rules::factor_table(report, "DepthFactors", &self.depth_factors);
        rules::factor_table(report, "ImpactFactors", &self.impact_factors);
    }
}

/// An asphalt location on the outer slope.
#[derive(Debug, Clone, PartialEq)]
pub struct AsphaltWaveImpactLocationDependentInput {
    common: LocationCommon,
    coefficients: AsphaltWaveImpactCoefficients,
    outer_slope: f64,
    log_failure_tension: f64,
    computational_thickness: f64,
    equivalent_elastic_modulus: f64,
    stiffness_relation: f64,
}

impl AsphaltWaveImpactLocationDependentInput {
    pub fn new(common: LocationCommon, coefficients: AsphaltWaveImpactCoefficients) -> Self {
        Self {
            common,
            coefficients,
            outer_slope: f64::NAN,
            log_failure_tension: f64::NAN,
            computational_thickness: f64::NAN,
            equivalent_elastic_modulus: f64::NAN,
            stiffness_relation: f64::NAN,
        }
    }

    pub fn coefficients(&self) -> &AsphaltWaveImpactCoefficients {
        &self.coefficients
    }
}

impl LocationDependentInput for AsphaltWaveImpactLocationDependentInput {
    fn common(&self) -> &LocationCommon {
        &self.common
    }

    fn mechanism(&self) -> FailureMechanism {
        FailureMechanism::AsphaltWaveImpact
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
        self.outer_slope = profile
            .outer_slope_at(self.x())
            .ok_or_else(|| GeometryError::new(format!("no outer slope at x = {}", self.x())))?;

        let c = &self.coefficients;
        let sub_layer = c.sub_layer.map(|l| (l.thickness, l.elastic_modulus));
        self.log_failure_tension = functions::log_failure_tension(c.failure_tension);
        self.computational_thickness = functions::computational_thickness(
            c.upper_layer.thickness,
            c.upper_layer.elastic_modulus,
            sub_layer,
        );
        self.equivalent_elastic_modulus = c
            .sub_layer
            .map_or(c.upper_layer.elastic_modulus, |l| l.elastic_modulus);
        self.stiffness_relation = functions::stiffness_relation(
            self.computational_thickness,
            self.equivalent_elastic_modulus,
            c.soil_elasticity,
            c.stiffness_relation_nu,
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
        _profile: &ProfileData,
    ) -> Result<TimeDependentOutput> {
        let c = &self.coefficients;
        let average_number_of_waves = common::average_number_of_waves(
            time_step.increment_time(),
            time_step.wave_period_tm10,
            c.average_number_of_waves_ctm,
        );
        let maximum_peak_stress =
            functions::maximum_peak_stress(time_step.wave_height_hm0, c.density_of_water);

        let layer = LayerResponse {
            z: self.common.z,
            sine_of_slope: functions::sine_of_slope(self.outer_slope),
            log_failure_tension: self.log_failure_tension,
            computational_thickness: self.computational_thickness,
            stiffness_relation: self.stiffness_relation,
        };
        let load = ImpactLoad {
            water_level: time_step.water_level,
            wave_height_hm0: time_step.wave_height_hm0,
            maximum_peak_stress,
            impact_number_c: c.impact_number_c,
        };
        let tables = FactorTables {
            width_factors: &c.width_factors,
            depth_factors: &c.depth_factors,
            impact_factors: &c.impact_factors,
        };
        let increment_damage = average_number_of_waves
            * functions::fatigue_per_wave(&layer, &load, tables, c.fatigue_alpha, c.fatigue_beta);

        let details = AsphaltWaveImpactTimeDependentOutputConstructionProperties {
            maximum_peak_stress: Some(maximum_peak_stress),
            average_number_of_waves: Some(average_number_of_waves),
        };

        TimeDependentOutput::new(
            TimeDependentOutputConstructionProperties::from_increment(
                increment_damage,
                damage_at_start,
                self.failure_number(),
                time_step,
            ),
            TimeDependentOutputDetails::AsphaltWaveImpact(details.build()?),
        )
    }

    fn location_dependent_output(
        &self,
        time_dependent_output_items: Vec<TimeDependentOutput>,
    ) -> LocationDependentOutput {
        LocationDependentOutput::new(
            time_dependent_output_items,
            self.common.z,
            LocationDependentOutputDetails::AsphaltWaveImpact(
                AsphaltWaveImpactLocationDependentOutput {
                    outer_slope: self.outer_slope,
                    log_failure_tension: self.log_failure_tension,
                    computational_thickness: self.computational_thickness,
                    equivalent_elastic_modulus: self.equivalent_elastic_modulus,
                    stiffness_relation: self.stiffness_relation,
                },
            ),
        )
    }
}
