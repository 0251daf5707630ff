//! Calculator settings.
//!
//! Settings are plain serde data. They can be constructed in code, parsed
//! from a TOML string, or loaded from a file:
//!
//! ```toml
//! calculate_locations_in_parallel = true
//! calculate_time_steps_in_parallel = false
//! ```

mod loader;
mod settings;

pub use loader::{load, parse_settings};
pub use settings::CalculatorSettings;
