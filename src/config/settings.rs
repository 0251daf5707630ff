use serde::{Deserialize, Serialize};

/// Parallelism of a calculation.
///
/// The two axes are independent and every combination produces the same
/// output. Time-step parallelism only applies to locations whose
/// increment does not depend on the damage at the start of a step; other
/// locations are calculated sequentially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorSettings {
    /// Calculate locations concurrently (default: false)
    #[serde(default)]
    pub calculate_locations_in_parallel: bool,

    /// Calculate the time steps of a location concurrently (default: false)
    #[serde(default)]
    pub calculate_time_steps_in_parallel: bool,
}

impl CalculatorSettings {
    pub fn new(
        calculate_locations_in_parallel: bool,
        calculate_time_steps_in_parallel: bool,
    ) -> Self {
        Self {
            calculate_locations_in_parallel,
            calculate_time_steps_in_parallel,
        }
    }

    /// Everything on the calling thread.
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Both axes parallel.
    pub fn parallel() -> Self {
        Self::new(true, true)
    }

    /// The four combinations of the two axes.
    pub fn all_combinations() -> [Self; 4] {
        [
            Self::new(false, false),
            Self::new(true, false),
            Self::new(false, true),
            Self::new(true, true),
        ]
    }

    pub fn is_sequential(&self) -> bool {
        !self.calculate_locations_in_parallel && !self.calculate_time_steps_in_parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        assert!(CalculatorSettings::default().is_sequential());
        assert_eq!(CalculatorSettings::default(), CalculatorSettings::sequential());
    }

    #[test]
    fn test_all_combinations_are_distinct() {
        let combinations = CalculatorSettings::all_combinations();
        for (i, a) in combinations.iter().enumerate() {
            for b in &combinations[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
