//! Degradation of a placed natural stone revetment by wave impacts.
//!
//! Degradation grows with the tenth root of the loading time, so the
//! increment of a step depends on how much degradation has accumulated
//! before it: the accumulated damage is converted into an equivalent
//! reference time under the current load, and the step extends that time.

use serde::{Deserialize, Serialize};

/// Coefficients of `Hm0 / (A·ξ^N + B·ξ + C)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydraulicLoadCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub n: f64,
}

/// Coefficients of a loading limit: `A·Hm0` next to the depth of the
/// maximum wave load, or `B·Hm0·min(ξ, C)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitLoadingCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

pub fn resistance(relative_density: f64, thickness_top_layer: f64) -> f64 {
    relative_density * thickness_top_layer
}

/// Plunging waves (ξ ≤ Xib) use the plunging coefficients.
pub fn hydraulic_load(
    surf_similarity_parameter: f64,
    wave_height_hm0: f64,
    xib: f64,
    plunging: &HydraulicLoadCoefficients,
    surging: &HydraulicLoadCoefficients,
) -> f64 {
    let c = if surf_similarity_parameter <= xib {
        plunging
    } else {
        surging
    };
    wave_height_hm0
        / (c.a * surf_similarity_parameter.powf(c.n) + c.b * surf_similarity_parameter + c.c)
}

pub fn slope_upper_level(
    outer_toe_height: f64,
    outer_crest_height: f64,
    water_level: f64,
    wave_height_hm0: f64,
    aus: f64,
) -> f64 {
    (water_level + aus * wave_height_hm0).clamp(outer_toe_height, outer_crest_height)
}

pub fn slope_lower_level(
    outer_toe_height: f64,
    outer_crest_height: f64,
    water_level: f64,
    wave_height_hm0: f64,
    als: f64,
) -> f64 {
    (water_level - als * wave_height_hm0).clamp(outer_toe_height, outer_crest_height)
}

/// Horizontal distance between the still water line and the point of
/// maximum wave load.
pub fn distance_maximum_wave_elevation(
    wave_height_hm0: f64,
    wave_steepness_deep_water: f64,
    asmax: f64,
    bsmax: f64,
) -> f64 {
    wave_height_hm0 * (asmax / wave_steepness_deep_water.sqrt() - bsmax)
}

pub fn normative_width_of_wave_impact(
    surf_similarity_parameter: f64,
    wave_height_hm0: f64,
    awi: f64,
    bwi: f64,
) -> f64 {
    ((awi - bwi * surf_similarity_parameter) * wave_height_hm0).max(0.0)
}

/// Depth below the water level of the maximum wave load.
pub fn depth_maximum_wave_load(
    distance_maximum_wave_elevation: f64,
    normative_width_of_wave_impact: f64,
    slope: f64,
) -> f64 {
    let angle = slope.atan();
    (distance_maximum_wave_elevation - 0.5 * normative_width_of_wave_impact * angle.cos())
        * slope
}

pub fn upper_limit_loading(
    water_level: f64,
    wave_height_hm0: f64,
    depth_maximum_wave_load: f64,
    surf_similarity_parameter: f64,
    coefficients: &LimitLoadingCoefficients,
) -> f64 {
    water_level - 2.0 * depth_maximum_wave_load
        + (depth_maximum_wave_load + coefficients.a * wave_height_hm0).max(
            coefficients.b * wave_height_hm0 * surf_similarity_parameter.min(coefficients.c),
        )
}

pub fn lower_limit_loading(
    water_level: f64,
    wave_height_hm0: f64,
    depth_maximum_wave_load: f64,
    surf_similarity_parameter: f64,
    coefficients: &LimitLoadingCoefficients,
) -> f64 {
    water_level
        - 2.0 * depth_maximum_wave_load
        - (depth_maximum_wave_load + coefficients.a * wave_height_hm0).max(
            coefficients.b * wave_height_hm0 * surf_similarity_parameter.min(coefficients.c),
        )
}

pub fn wave_angle_impact(wave_angle: f64, betamax: f64) -> f64 {
    wave_angle
        .abs()
        .min(betamax)
        .to_radians()
        .cos()
        .powf(2.0 / 3.0)
}

/// Degradation equivalent to `damage_at_start` under the current load.
pub fn reference_degradation(
    damage_at_start: f64,
    hydraulic_load: f64,
    resistance: f64,
    wave_angle_impact: f64,
) -> f64 {
    damage_at_start * resistance / hydraulic_load / wave_angle_impact
}

/// Loading time after which `reference_degradation` is reached.
pub fn reference_time_degradation(reference_degradation: f64, wave_period_tm10: f64) -> f64 {
    1000.0 * wave_period_tm10 * reference_degradation.powi(10)
}

pub fn increment_degradation(
    reference_time_degradation: f64,
    increment_time: f64,
    wave_period_tm10: f64,
    reference_degradation: f64,
) -> f64 {
    ((reference_time_degradation + increment_time) / (1000.0 * wave_period_tm10)).powf(0.1)
        - reference_degradation
}

pub fn increment_damage(
    hydraulic_load: f64,
    resistance: f64,
    increment_degradation: f64,
    wave_angle_impact: f64,
) -> f64 {
    hydraulic_load / resistance * increment_degradation * wave_angle_impact
}
