//! Test support shared by unit tests, integration tests and benchmarks.
//!
//! - **[`helpers`]**: the reference dike profile and time series
//! - **[`mock_location`]**: a scripted location for driving the calculator
//! - **Assertion macros**: `Result` and `DataResult` assertions, exported at
//!   the crate root

pub mod assertions;
pub mod helpers;
pub mod mock_location;

pub use helpers::{
    add_time_steps, dike_profile, dike_profile_builder, hourly_time_steps, storm_builder,
    storm_time_steps, DIKE_CHARACTERISTIC_POINTS, DIKE_POINTS,
};
pub use mock_location::MockLocation;
