//! Functions shared by all failure mechanisms.

use crate::validation::{rules, ValidationReport};
use std::f64::consts::PI;

/// Gravitational acceleration (m/s²).
pub const GRAVITATIONAL_ACCELERATION: f64 = 9.81;

/// Cumulative damage after a step. Non-finite increments signal "no load"
/// and leave the damage unchanged.
pub fn damage(increment_damage: f64, damage_at_start: f64) -> f64 {
    if increment_damage.is_finite() {
        damage_at_start + increment_damage
    } else {
        damage_at_start
    }
}

/// Whether the failure number is crossed during the step.
pub fn failure_revetment(damage_at_start: f64, damage: f64, failure_number: f64) -> bool {
    damage_at_start < failure_number && damage >= failure_number
}

/// Failure moment within a step, rounded up to whole seconds.
pub fn time_of_failure(
    begin_time: i64,
    end_time: i64,
    damage_at_start: f64,
    increment_damage: f64,
    failure_number: f64,
) -> i64 {
    let duration = end_time as f64 - begin_time as f64;
    let fraction = (failure_number - damage_at_start) / increment_damage;
    (begin_time as f64 + fraction * duration).ceil() as i64
}

/// Number of waves arriving during `increment_time`.
pub fn average_number_of_waves(increment_time: f64, wave_period_tm10: f64, ctm: f64) -> f64 {
    increment_time / (ctm * wave_period_tm10)
}

pub fn wave_steepness_deep_water(wave_height_hm0: f64, wave_period_tm10: f64) -> f64 {
    wave_height_hm0 / (GRAVITATIONAL_ACCELERATION / (2.0 * PI) * wave_period_tm10.powi(2))
}

/// Iribarren number of the slope for the given wave conditions.
pub fn surf_similarity_parameter(
    outer_slope: f64,
    wave_height_hm0: f64,
    wave_period_tm10: f64,
) -> f64 {
    outer_slope / wave_steepness_deep_water(wave_height_hm0, wave_period_tm10).sqrt()
}

/// Angle between the wave direction and the dike normal, in (-180, 180].
pub fn wave_angle(wave_direction: f64, dike_orientation: f64) -> f64 {
    let angle = (wave_direction - dike_orientation).rem_euclid(360.0);
    if angle > 180.0 {
        angle - 360.0
    } else {
        angle
    }
}

/// Height of a location above the water level.
pub fn vertical_distance_water_level_elevation(z: f64, water_level: f64) -> f64 {
    z - water_level
}

/// Coefficients of the 2% wave runup formula.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RepresentativeWaveRunupCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub gamma_b: f64,
}

impl Default for RepresentativeWaveRunupCoefficients {
    fn default() -> Self {
        Self {
            a: 1.65,
            b: 4.0,
            c: 1.5,
            gamma_b: 1.0,
        }
    }
}

impl RepresentativeWaveRunupCoefficients {
    pub fn validate(&self, report: &mut ValidationReport) {
        rules::positive(report, "RepresentativeWaveRunup2PA", self.a);
        rules::positive(report, "RepresentativeWaveRunup2PB", self.b);
        rules::positive(report, "RepresentativeWaveRunup2PC", self.c);
        rules::in_range(report, "RepresentativeWaveRunup2PGammab", self.gamma_b, 0.6, 1.0);
    }
}

/// Wave runup height exceeded by 2% of the waves.
pub fn representative_wave_runup_2p(
    surf_similarity_parameter: f64,
    wave_angle_impact: f64,
    wave_height_hm0: f64,
    gamma_f: f64,
    coefficients: &RepresentativeWaveRunupCoefficients,
) -> f64 {
    let breaking = coefficients.a
        * coefficients.gamma_b
        * gamma_f
        * wave_angle_impact
        * surf_similarity_parameter;
    let non_breaking = gamma_f
        * wave_angle_impact
        * (coefficients.b - coefficients.c / surf_similarity_parameter.sqrt());
    wave_height_hm0 * breaking.min(non_breaking)
}

/// Runup reduction for oblique waves.
pub fn wave_angle_impact_runup(wave_angle: f64, abeta: f64, betamax: f64) -> f64 {
    1.0 - abeta * wave_angle.abs().min(betamax)
}
