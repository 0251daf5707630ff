use serde::{Deserialize, Serialize};

/// Hydraulic loading during one time step.
///
/// Times are in seconds; the step covers `[begin_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDependentInput {
    pub begin_time: i64,
    pub end_time: i64,
    pub water_level: f64,
    pub wave_height_hm0: f64,
    pub wave_period_tm10: f64,
    /// Wave direction in degrees (nautical convention, 0 to 360).
    pub wave_direction: f64,
}

impl TimeDependentInput {
    pub fn new(
        begin_time: i64,
        end_time: i64,
        water_level: f64,
        wave_height_hm0: f64,
        wave_period_tm10: f64,
        wave_direction: f64,
    ) -> Self {
        Self {
            begin_time,
            end_time,
            water_level,
            wave_height_hm0,
            wave_period_tm10,
            wave_direction,
        }
    }

    /// Duration of the step in seconds.
    pub fn increment_time(&self) -> f64 {
        self.end_time as f64 - self.begin_time as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_time() {
        let step = TimeDependentInput::new(-1800, 3600, 5.0, 1.0, 4.0, 0.0);
        assert_eq!(step.increment_time(), 5400.0);
    }

    #[test]
    fn test_increment_time_beyond_the_i64_range() {
        let (begin, end) = (i64::MIN / 2 - 10, i64::MAX / 2 + 10);
        let step = TimeDependentInput::new(begin, end, 5.0, 1.0, 4.0, 0.0);
        assert!(step.increment_time().is_finite());
        assert!(step.increment_time() > i64::MAX as f64);
    }
}
