//! Fatigue of an asphalt layer under wave impacts.
//!
//! The layer is modelled as an infinite beam on an elastic foundation
//! (Hetényi). A wave impact is a strip load on the slope; its position,
//! width and pressure are drawn from the depth, width and impact factor
//! tables. Each combination contributes Miner fatigue according to the
//! bending stress it causes at the location.

use crate::mechanisms::common::GRAVITATIONAL_ACCELERATION;

/// A value with the probability that it occurs.
pub type Factor = (f64, f64);

pub fn log_failure_tension(failure_tension: f64) -> f64 {
    failure_tension.log10()
}

/// Thickness of a single layer equivalent in stiffness to the upper layer
/// on top of the sub layer.
pub fn computational_thickness(
    thickness_upper_layer: f64,
    elastic_modulus_upper_layer: f64,
    sub_layer: Option<(f64, f64)>,
) -> f64 {
    match sub_layer {
        Some((thickness_sub_layer, elastic_modulus_sub_layer)) => {
            thickness_upper_layer * (elastic_modulus_upper_layer / elastic_modulus_sub_layer).cbrt()
                + thickness_sub_layer
        }
        None => thickness_upper_layer,
    }
}

/// Characteristic wave number β of the beam on an elastic foundation (1/m).
pub fn stiffness_relation(
    computational_thickness: f64,
    equivalent_elastic_modulus: f64,
    soil_elasticity: f64,
    stiffness_relation_nu: f64,
) -> f64 {
    (3.0 * soil_elasticity * (1.0 - stiffness_relation_nu.powi(2))
        / (equivalent_elastic_modulus * computational_thickness.powi(3)))
    .powf(0.25)
}

/// Peak pressure of a wave in MPa.
pub fn maximum_peak_stress(wave_height_hm0: f64, density_of_water: f64) -> f64 {
    density_of_water * GRAVITATIONAL_ACCELERATION * wave_height_hm0 / 1.0e6
}

/// Sine of the slope angle for a slope given as tangent.
pub fn sine_of_slope(outer_slope: f64) -> f64 {
    outer_slope / (1.0 + outer_slope.powi(2)).sqrt()
}

/// `∫₀ˢ e^(−β|t|)(cos βt − sin β|t|) dt · β`, odd in `s`.
fn moment_influence(stiffness_relation: f64, distance: f64) -> f64 {
    let x = stiffness_relation * distance.abs();
    distance.signum() * (-x).exp() * x.sin()
}

/// Bending stress at the location for a strip load of `pressure` between
/// `strip_start` and `strip_end`, measured along the slope from the
/// location. Positive in tension at the underside of the layer.
pub fn bending_stress(
    strip_start: f64,
    strip_end: f64,
    pressure: f64,
    stiffness_relation: f64,
    computational_thickness: f64,
) -> f64 {
    let moment = pressure / (4.0 * stiffness_relation.powi(2))
        * (moment_influence(stiffness_relation, strip_end)
            - moment_influence(stiffness_relation, strip_start));
    6.0 * moment / computational_thickness.powi(2)
}

/// Miner fatigue of a single load cycle with the given bending stress.
pub fn fatigue(
    bending_stress: f64,
    log_failure_tension: f64,
    fatigue_alpha: f64,
    fatigue_beta: f64,
) -> f64 {
    if bending_stress <= 0.0 {
        return 0.0;
    }
    let margin = (log_failure_tension - bending_stress.log10()).max(0.0);
    10f64.powf(-fatigue_beta * margin.powf(fatigue_alpha))
}

/// Geometry and material of the layer at a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerResponse {
    pub z: f64,
    pub sine_of_slope: f64,
    pub log_failure_tension: f64,
    pub computational_thickness: f64,
    pub stiffness_relation: f64,
}

/// Wave loading of one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactLoad {
    pub water_level: f64,
    pub wave_height_hm0: f64,
    pub maximum_peak_stress: f64,
    pub impact_number_c: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct FactorTables<'a> {
    pub width_factors: &'a [Factor],
    pub depth_factors: &'a [Factor],
    pub impact_factors: &'a [Factor],
}

/// Expected fatigue of a single wave.
pub fn fatigue_per_wave(
    layer: &LayerResponse,
    load: &ImpactLoad,
    tables: FactorTables<'_>,
    fatigue_alpha: f64,
    fatigue_beta: f64,
) -> f64 {
    let mut total = 0.0;
    for &(depth_factor, depth_probability) in tables.depth_factors {
        let load_height = load.water_level + depth_factor * load.wave_height_hm0;
        let center = (load_height - layer.z) / layer.sine_of_slope;

        for &(width_factor, width_probability) in tables.width_factors {
            let half_width = 0.5 * width_factor * load.wave_height_hm0;

            for &(impact_factor, impact_probability) in tables.impact_factors {
                let pressure = load.impact_number_c * impact_factor * load.maximum_peak_stress;
                let stress = bending_stress(
                    center - half_width,
                    center + half_width,
                    pressure,
                    layer.stiffness_relation,
                    layer.computational_thickness,
                );
                total += depth_probability
                    * width_probability
                    * impact_probability
                    * fatigue(stress, layer.log_failure_tension, fatigue_alpha, fatigue_beta);
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computational_thickness_without_sub_layer() {
        assert_eq!(computational_thickness(0.3, 18_000.0, None), 0.3);
    }

    #[test]
    fn test_computational_thickness_with_sub_layer() {
        let thickness = computational_thickness(0.2, 8000.0, Some((0.1, 1000.0)));
        assert!((thickness - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_maximum_peak_stress() {
        assert!((maximum_peak_stress(1.0, 1025.0) - 0.01005525).abs() < 1e-12);
    }

    #[test]
    fn test_fatigue_saturates_at_failure_tension() {
        assert_eq!(fatigue(2.0, 2f64.log10(), 0.42, 4.76), 1.0);
        assert_eq!(fatigue(3.0, 2f64.log10(), 0.42, 4.76), 1.0);
        assert_eq!(fatigue(0.0, 2f64.log10(), 0.42, 4.76), 0.0);
        assert!(fatigue(0.5, 2f64.log10(), 0.42, 4.76) < 1.0);
    }

    #[test]
    fn test_bending_stress_is_largest_under_the_load() {
        let under = bending_stress(-0.5, 0.5, 0.1, 1.0, 0.3);
        let beside = bending_stress(1.5, 2.5, 0.1, 1.0, 0.3);
        assert!(under > 0.0);
        assert!(under > beside.abs());
    }

    #[test]
    fn test_bending_stress_is_symmetric() {
        let left = bending_stress(-2.0, -1.0, 0.1, 1.0, 0.3);
        let right = bending_stress(1.0, 2.0, 0.1, 1.0, 0.3);
        assert!((left - right).abs() < 1e-15);
    }
}
