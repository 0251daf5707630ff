//! Grass wave impact physics.
//!
//! The time line `h(t) = A·e^(B·t) + C` gives the wave height that makes
//! the grass fail after an impact duration `t`.

/// Wave height on the time line at duration `time`.
pub fn time_line_wave_height(time: f64, a: f64, b: f64, c: f64) -> f64 {
    a * (b * time).exp() + c
}

/// Impact duration after which a wave of `wave_height` makes the grass fail.
pub fn time_line_duration(wave_height: f64, a: f64, b: f64, c: f64) -> f64 {
    ((wave_height - c) / a).ln() / b
}

pub fn minimum_wave_height(a: f64, b: f64, c: f64, te_max: f64) -> f64 {
    time_line_wave_height(te_max, a, b, c)
}

pub fn maximum_wave_height(a: f64, b: f64, c: f64, te_min: f64) -> f64 {
    time_line_wave_height(te_min, a, b, c)
}

pub fn upper_limit_loading(water_level: f64, wave_height_hm0: f64, aul: f64) -> f64 {
    water_level - aul * wave_height_hm0
}

pub fn lower_limit_loading(water_level: f64, wave_height_hm0: f64, all: f64) -> f64 {
    water_level - all * wave_height_hm0
}

pub fn loading_revetment(lower_limit: f64, upper_limit: f64, z: f64) -> bool {
    z >= lower_limit && z <= upper_limit
}

/// Reduction of the impact for oblique waves. Beyond 90 degrees the
/// impact fades linearly to zero over `rwa` degrees.
pub fn wave_angle_impact(wave_angle: f64, nwa: f64, qwa: f64, rwa: f64) -> f64 {
    let angle = wave_angle.abs();
    if angle <= 90.0 {
        angle.to_radians().cos().powf(nwa).max(qwa)
    } else {
        (qwa * (90.0 + rwa - angle) / rwa).max(0.0)
    }
}

/// Representative wave height, kept within the time line.
pub fn wave_height_impact(
    minimum_wave_height: f64,
    maximum_wave_height: f64,
    wave_angle_impact: f64,
    wave_height_hm0: f64,
) -> f64 {
    (wave_angle_impact * wave_height_hm0).clamp(minimum_wave_height, maximum_wave_height)
}

pub fn increment_damage(increment_time: f64, failure_duration: f64) -> f64 {
    increment_time / failure_duration
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: f64 = 1.0;
    const B: f64 = -0.000009722;
    const C: f64 = 0.25;

    #[test]
    fn test_time_line_is_invertible() {
        let height = time_line_wave_height(7200.0, A, B, C);
        assert!((time_line_duration(height, A, B, C) - 7200.0).abs() < 1e-6);
    }

    #[test]
    fn test_wave_height_range_of_closed_sod() {
        let minimum = minimum_wave_height(A, B, C, 3_600_000.0);
        let maximum = maximum_wave_height(A, B, C, 3.6);
        assert!((minimum - 0.25).abs() < 1e-12);
        assert!((maximum - 1.249965).abs() < 1e-6);
    }

    #[test]
    fn test_loading_zone() {
        let upper = upper_limit_loading(5.0, 1.0, 0.0);
        let lower = lower_limit_loading(5.0, 1.0, 0.5);
        assert!(loading_revetment(lower, upper, 4.75));
        assert!(!loading_revetment(lower, upper, 5.1));
        assert!(!loading_revetment(lower, upper, 4.4));
    }

    #[test]
    fn test_wave_angle_impact() {
        assert_eq!(wave_angle_impact(0.0, 2.0 / 3.0, 0.35, 10.0), 1.0);
        assert_eq!(wave_angle_impact(89.0, 2.0 / 3.0, 0.35, 10.0), 0.35);
        assert!((wave_angle_impact(95.0, 2.0 / 3.0, 0.35, 10.0) - 0.175).abs() < 1e-12);
        assert_eq!(wave_angle_impact(-120.0, 2.0 / 3.0, 0.35, 10.0), 0.0);
    }

    #[test]
    fn test_wave_height_impact_is_clamped() {
        assert_eq!(wave_height_impact(0.25, 1.25, 1.0, 2.0), 1.25);
        assert_eq!(wave_height_impact(0.25, 1.25, 0.35, 0.1), 0.25);
        assert_eq!(wave_height_impact(0.25, 1.25, 1.0, 0.8), 0.8);
    }
}
