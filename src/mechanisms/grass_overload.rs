//! Cumulative overload of grass cover by wave fronts.
//!
//! Shared by the runup and the overtopping mechanisms. A wave front with
//! velocity `u` overloads the grass by `max(0, αM·u² − αS·uc²)`; the
//! increment damage of a step is the cumulative overload of all its waves
//! divided by the critical cumulative overload.

use super::common::GRAVITATIONAL_ACCELERATION;
use super::distribution::{self, BattjesGroenendijk};

/// Load and strength coefficients of the overload formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverloadCoefficients {
    pub critical_front_velocity: f64,
    pub increased_load_transition_alpha_m: f64,
    pub reduced_strength_transition_alpha_s: f64,
    /// Multiplies `sqrt(g·(R − threshold))` to give the front velocity.
    pub front_velocity_coefficient: f64,
}

impl OverloadCoefficients {
    fn critical_load(&self) -> f64 {
        self.reduced_strength_transition_alpha_s * self.critical_front_velocity.powi(2)
    }

    /// Front velocity of a wave running up to `runup` past `threshold`.
    pub fn front_velocity(&self, runup: f64, threshold: f64) -> f64 {
        self.front_velocity_coefficient
            * (GRAVITATIONAL_ACCELERATION * (runup - threshold).max(0.0)).sqrt()
    }

    pub fn overload(&self, front_velocity: f64) -> f64 {
        (self.increased_load_transition_alpha_m * front_velocity.powi(2) - self.critical_load())
            .max(0.0)
    }

    /// Overload grows linearly with runup beyond this height.
    fn overload_runup(&self, threshold: f64) -> f64 {
        threshold + self.critical_load() / self.overload_per_metre_runup()
    }

    fn overload_per_metre_runup(&self) -> f64 {
        self.increased_load_transition_alpha_m
            * self.front_velocity_coefficient.powi(2)
            * GRAVITATIONAL_ACCELERATION
    }
}

/// Cumulative overload with Rayleigh distributed runup, represented by
/// `fixed_number_of_waves` discrete waves and scaled to
/// `average_number_of_waves`.
pub fn cumulative_overload_rayleigh_discrete(
    coefficients: &OverloadCoefficients,
    representative_wave_runup_2p: f64,
    threshold: f64,
    average_number_of_waves: f64,
    fixed_number_of_waves: usize,
) -> f64 {
    let total: f64 =
        distribution::rayleigh_discrete_runups(representative_wave_runup_2p, fixed_number_of_waves)
            .map(|runup| coefficients.overload(coefficients.front_velocity(runup, threshold)))
            .sum();
    average_number_of_waves / fixed_number_of_waves as f64 * total
}

/// Cumulative overload with Rayleigh distributed runup, integrated in
/// closed form.
pub fn cumulative_overload_rayleigh_analytical(
    coefficients: &OverloadCoefficients,
    representative_wave_runup_2p: f64,
    threshold: f64,
    average_number_of_waves: f64,
) -> f64 {
    if coefficients.overload_per_metre_runup() <= 0.0 {
        return 0.0;
    }
    let excess = distribution::rayleigh_mean_excess(
        representative_wave_runup_2p,
        coefficients.overload_runup(threshold),
    );
    average_number_of_waves * coefficients.overload_per_metre_runup() * excess
}

/// Cumulative overload with runup proportional to wave height, the wave
/// heights following the Battjes-Groenendijk distribution.
pub fn cumulative_overload_battjes_groenendijk(
    coefficients: &OverloadCoefficients,
    wave_heights: &BattjesGroenendijk,
    representative_wave_runup_2p: f64,
    threshold: f64,
    average_number_of_waves: f64,
) -> f64 {
    let wave_height_2p = wave_heights.height_with_exceedance(0.02);
    if coefficients.overload_per_metre_runup() <= 0.0 || wave_height_2p <= 0.0 {
        return 0.0;
    }
    let runup_per_wave_height = representative_wave_runup_2p / wave_height_2p;
    if runup_per_wave_height <= 0.0 {
        return 0.0;
    }
    let excess = runup_per_wave_height
        * wave_heights.mean_excess(coefficients.overload_runup(threshold) / runup_per_wave_height);
    average_number_of_waves * coefficients.overload_per_metre_runup() * excess
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coefficients() -> OverloadCoefficients {
        OverloadCoefficients {
            critical_front_velocity: 4.3,
            increased_load_transition_alpha_m: 1.0,
            reduced_strength_transition_alpha_s: 1.0,
            front_velocity_coefficient: 1.1,
        }
    }

    #[test]
    fn test_front_velocity_below_threshold_is_zero() {
        assert_eq!(coefficients().front_velocity(1.0, 2.0), 0.0);
    }

    #[test]
    fn test_overload_is_never_negative() {
        let coefficients = coefficients();
        assert_eq!(coefficients.overload(1.0), 0.0);
        let overload = coefficients.overload(5.0);
        assert!((overload - (25.0 - 4.3 * 4.3)).abs() < 1e-12);
    }

    #[test]
    fn test_discrete_converges_to_analytical() {
        let coefficients = coefficients();
        let discrete =
            cumulative_overload_rayleigh_discrete(&coefficients, 3.0, 0.5, 1000.0, 10_000);
        let analytical = cumulative_overload_rayleigh_analytical(&coefficients, 3.0, 0.5, 1000.0);
        assert!(analytical > 0.0);
        assert!(
            (discrete - analytical).abs() / analytical < 0.02,
            "discrete {discrete}, analytical {analytical}"
        );
    }

    #[test]
    fn test_no_overload_when_runup_stays_low() {
        let coefficients = coefficients();
        let overload =
            cumulative_overload_rayleigh_discrete(&coefficients, 0.5, 10.0, 1000.0, 10_000);
        assert_eq!(overload, 0.0);
    }

    #[test]
    fn test_battjes_groenendijk_overload_is_positive() {
        let coefficients = coefficients();
        let wave_heights = BattjesGroenendijk::new(2.0, 4.0, 0.004).unwrap();
        let overload = cumulative_overload_battjes_groenendijk(
            &coefficients,
            &wave_heights,
            3.0,
            0.5,
            1000.0,
        );
        assert!(overload > 0.0);
    }
}
