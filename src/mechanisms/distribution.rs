//! Wave height and wave runup distributions.
//!
//! Cumulative overload of grass revetments is the expectation of an
//! overload that grows linearly with the runup height above a threshold.
//! For a distribution with exceedance probability `P(X > x)` that
//! expectation reduces to the mean excess `∫ₐ^∞ P(X > x) dx`, which is
//! evaluated here in closed form with the upper incomplete gamma function.

use std::f64::consts::PI;

/// ln(1 / 0.02): the 2% exceedance level used for representative runup.
pub const LN_TWO_PERCENT_INVERSE: f64 = 3.912_023_005_428_146;

const SHAPE_BELOW_TRANSITION: f64 = 2.0;
const SHAPE_ABOVE_TRANSITION: f64 = 3.6;

/// Natural logarithm of the gamma function (Lanczos approximation, g = 7).
pub fn ln_gamma(x: f64) -> f64 {
    const COEFFICIENTS: [f64; 9] = [
        0.999_999_999_999_809_9,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_1,
        -176.615_029_162_140_6,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_572e-6,
        1.505_632_735_149_311_6e-7,
    ];

    if x < 0.5 {
        // Reflection formula
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let t = x + 7.5;
    let series = COEFFICIENTS
        .iter()
        .enumerate()
        .skip(1)
        .fold(COEFFICIENTS[0], |sum, (i, &c)| sum + c / (x + i as f64));

    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + series.ln()
}

/// Upper incomplete gamma function Γ(s, x) for s > 0, x ≥ 0.
pub fn upper_incomplete_gamma(s: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return ln_gamma(s).exp();
    }
    if x < s + 1.0 {
        (ln_gamma(s).exp()) * (1.0 - regularized_lower_gamma_series(s, x))
    } else {
        upper_gamma_continued_fraction(s, x)
    }
}

/// P(s, x) by its power series.
fn regularized_lower_gamma_series(s: f64, x: f64) -> f64 {
    let mut term = 1.0 / s;
    let mut sum = term;
    let mut n = s;
    for _ in 0..500 {
        n += 1.0;
        term *= x / n;
        sum += term;
        if term.abs() < sum.abs() * 1e-15 {
            break;
        }
    }
    sum * (-x + s * x.ln() - ln_gamma(s)).exp()
}

/// Γ(s, x) by Lentz's continued fraction.
fn upper_gamma_continued_fraction(s: f64, x: f64) -> f64 {
    const TINY: f64 = 1e-300;
    let mut b = x + 1.0 - s;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..500 {
        let an = -(i as f64) * (i as f64 - s);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < 1e-15 {
            break;
        }
    }
    (-x + s * x.ln()).exp() * h
}

/// `∫ₐᵇ exp(-(x / scale)^shape) dx` for 0 ≤ a ≤ b (b may be infinite).
pub fn weibull_exceedance_integral(scale: f64, shape: f64, a: f64, b: f64) -> f64 {
    let s = 1.0 / shape;
    let upper = |x: f64| {
        if x.is_infinite() {
            0.0
        } else {
            upper_incomplete_gamma(s, (x / scale).powf(shape))
        }
    };
    scale / shape * (upper(a) - upper(b))
}

/// Runup heights of a Rayleigh distribution with 2% runup `runup_2p`,
/// represented by `number_of_waves` equally probable waves.
pub fn rayleigh_discrete_runups(
    runup_2p: f64,
    number_of_waves: usize,
) -> impl Iterator<Item = f64> {
    let count = number_of_waves as f64;
    (1..=number_of_waves).map(move |k| {
        let exceedance = 1.0 - k as f64 / (count + 1.0);
        runup_2p * (exceedance.ln() / -LN_TWO_PERCENT_INVERSE).sqrt()
    })
}

/// `E[max(0, R - threshold)]` for a Rayleigh runup distribution.
pub fn rayleigh_mean_excess(runup_2p: f64, threshold: f64) -> f64 {
    let scale = runup_2p / LN_TWO_PERCENT_INVERSE.sqrt();
    if threshold >= 0.0 {
        weibull_exceedance_integral(scale, SHAPE_BELOW_TRANSITION, threshold, f64::INFINITY)
    } else {
        -threshold + weibull_exceedance_integral(scale, SHAPE_BELOW_TRANSITION, 0.0, f64::INFINITY)
    }
}

/// Composite Weibull wave height distribution on a shallow foreshore
/// (Battjes & Groenendijk, 2000).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BattjesGroenendijk {
    /// Scale of the Rayleigh part below the transition height.
    pub h1: f64,
    /// Scale of the steeper part above the transition height.
    pub h2: f64,
    pub transition_height: f64,
}

impl BattjesGroenendijk {
    /// Fit the distribution to a spectral wave height on a foreshore with
    /// the given slope and water depth. Returns `None` without water depth.
    pub fn new(wave_height_hm0: f64, water_depth: f64, foreshore_slope: f64) -> Option<Self> {
        if water_depth <= 0.0 || wave_height_hm0 <= 0.0 {
            return None;
        }

        let root_mean_square =
            (0.6725 + 0.2025 * wave_height_hm0 / water_depth) * wave_height_hm0;
        let transition_height = (0.35 + 5.8 * foreshore_slope) * water_depth;
        let target = root_mean_square.powi(2);

        // The second moment decreases monotonically with the exceedance
        // exponent u = (Htr / H1)² at the transition.
        let rayleigh_exponent = (transition_height / root_mean_square).powi(2);
        let (mut low, mut high) = (1e-9_f64.ln(), (4.0 * rayleigh_exponent).max(700.0).ln());
        for _ in 0..200 {
            let middle = 0.5 * (low + high);
            let moment = Self::from_transition_exponent(transition_height, middle.exp())
                .second_moment();
            if moment > target {
                low = middle;
            } else {
                high = middle;
            }
        }

        Some(Self::from_transition_exponent(
            transition_height,
            (0.5 * (low + high)).exp(),
        ))
    }

    fn from_transition_exponent(transition_height: f64, u: f64) -> Self {
        Self {
            h1: transition_height / u.sqrt(),
            h2: transition_height / u.powf(1.0 / SHAPE_ABOVE_TRANSITION),
            transition_height,
        }
    }

    fn second_moment(&self) -> f64 {
        let below = self.h1.powi(2)
            * (1.0 - (-(self.transition_height / self.h1).powi(2)).exp());
        let s = 2.0 / SHAPE_ABOVE_TRANSITION;
        let transition_exponent =
            (self.transition_height / self.h2).powf(SHAPE_ABOVE_TRANSITION);
        let above = 2.0 * self.h2.powi(2) / SHAPE_ABOVE_TRANSITION
            * upper_incomplete_gamma(s, transition_exponent);
        below + above
    }

    pub fn exceedance(&self, height: f64) -> f64 {
        if height < 0.0 {
            1.0
        } else if height < self.transition_height {
            (-(height / self.h1).powi(2)).exp()
        } else {
            (-(height / self.h2).powf(SHAPE_ABOVE_TRANSITION)).exp()
        }
    }

    /// Wave height exceeded with the given probability.
    pub fn height_with_exceedance(&self, probability: f64) -> f64 {
        let log = -probability.ln();
        let below = self.h1 * log.sqrt();
        if below < self.transition_height {
            below
        } else {
            self.h2 * log.powf(1.0 / SHAPE_ABOVE_TRANSITION)
        }
    }

    /// `E[max(0, H - threshold)]`.
    pub fn mean_excess(&self, threshold: f64) -> f64 {
        if threshold < 0.0 {
            return -threshold + self.mean_excess(0.0);
        }

        let above_start = threshold.max(self.transition_height);
        let above = weibull_exceedance_integral(
            self.h2,
            SHAPE_ABOVE_TRANSITION,
            above_start,
            f64::INFINITY,
        );
        let below = if threshold < self.transition_height {
            weibull_exceedance_integral(
                self.h1,
                SHAPE_BELOW_TRANSITION,
                threshold,
                self.transition_height,
            )
        } else {
            0.0
        };
        below + above
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_ln_gamma_known_values() {
        assert!(close(ln_gamma(1.0), 0.0, 1e-12));
        assert!(close(ln_gamma(5.0), 24.0_f64.ln(), 1e-10));
        assert!(close(ln_gamma(0.5), PI.sqrt().ln(), 1e-10));
    }

    #[test]
    fn test_upper_incomplete_gamma_exponential_case() {
        // Γ(1, x) = e^-x
        for x in [0.1, 1.0, 3.0, 10.0] {
            assert!(close(upper_incomplete_gamma(1.0, x), (-x).exp(), 1e-10), "x = {x}");
        }
    }

    #[test]
    fn test_upper_incomplete_gamma_half() {
        // Γ(1/2, x) = √π erfc(√x); erfc(1) = 0.157299207...
        let value = upper_incomplete_gamma(0.5, 1.0);
        assert!(close(value, PI.sqrt() * 0.157_299_207_050_285_1, 1e-9));
    }

    #[test]
    fn test_rayleigh_mean_excess_at_zero_is_mean() {
        // ∫₀^∞ exp(-(r / σ)²) dr = σ√π / 2
        let runup_2p = 2.0;
        let scale = runup_2p / LN_TWO_PERCENT_INVERSE.sqrt();
        let expected = scale * PI.sqrt() / 2.0;
        assert!(close(rayleigh_mean_excess(runup_2p, 0.0), expected, 1e-9));
    }

    #[test]
    fn test_rayleigh_mean_excess_negative_threshold() {
        let at_zero = rayleigh_mean_excess(2.0, 0.0);
        assert!(close(rayleigh_mean_excess(2.0, -0.5), at_zero + 0.5, 1e-12));
    }

    #[test]
    fn test_rayleigh_discrete_runups_are_increasing() {
        let runups: Vec<_> = rayleigh_discrete_runups(2.0, 100).collect();
        assert_eq!(runups.len(), 100);
        assert!(runups.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_battjes_groenendijk_matches_root_mean_square() {
        let distribution = BattjesGroenendijk::new(2.0, 4.0, 0.004).unwrap();
        let expected = ((0.6725 + 0.2025 * 0.5) * 2.0_f64).powi(2);
        assert!(close(distribution.second_moment(), expected, 1e-6));
    }

    #[test]
    fn test_battjes_groenendijk_is_continuous_at_transition() {
        let distribution = BattjesGroenendijk::new(2.0, 4.0, 0.004).unwrap();
        let htr = distribution.transition_height;
        let below = (-(htr / distribution.h1).powi(2)).exp();
        let above = distribution.exceedance(htr);
        assert!(close(below, above, 1e-9));
    }

    #[test]
    fn test_battjes_groenendijk_requires_water_depth() {
        assert!(BattjesGroenendijk::new(2.0, 0.0, 0.004).is_none());
    }

    #[test]
    fn test_mean_excess_decreases_with_threshold() {
        let distribution = BattjesGroenendijk::new(2.0, 4.0, 0.004).unwrap();
        let a = distribution.mean_excess(0.5);
        let b = distribution.mean_excess(1.5);
        let c = distribution.mean_excess(3.0);
        assert!(a > b && b > c && c >= 0.0);
    }
}
