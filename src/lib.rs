//! Time-stepped cumulative damage calculation for dike revetments.
//!
//! A calculation takes a dike cross-section, a series of hydraulic time
//! steps and a set of revetment locations, each assessed by one failure
//! mechanism. For every location the damage is accumulated step by step
//! and the moment the failure number is reached is reported.
//!
//! ```rust
//! use dike_revetment::builder::GrassWaveImpactLocationConstructionProperties;
//! use dike_revetment::calculator::Calculator;
//! use dike_revetment::config::CalculatorSettings;
//! use dike_revetment::mechanisms::TopLayerType;
//! use dike_revetment::testkit::{add_time_steps, dike_profile_builder, hourly_time_steps};
//!
//! let mut builder = dike_profile_builder();
//! add_time_steps(&mut builder, &hourly_time_steps(4));
//! builder.add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
//!     20.0,
//!     TopLayerType::ClosedSod,
//! ));
//!
//! let input = builder.build().into_result().unwrap();
//! let result = Calculator::calculate(input, &CalculatorSettings::default()).unwrap();
//! let location = &result.data().unwrap().location_dependent_output_items()[0];
//! assert_eq!(location.time_dependent_output_items().len(), 4);
//! ```

pub mod builder;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod effects;
pub mod errors;
pub mod input;
pub mod io;
pub mod mechanisms;
pub mod observability;
pub mod output;
pub mod profile;
pub mod report;
pub mod result;
pub mod testkit;
pub mod validation;

pub use crate::builder::{CalculationInputBuilder, LocationConstructionProperties};
pub use crate::calculator::Calculator;
pub use crate::config::CalculatorSettings;
pub use crate::errors::{CalculationError, GeometryError};
pub use crate::input::{
    CalculationInput, FailureMechanism, LocationDependentInput, TimeDependentInput,
};
pub use crate::output::{CalculationOutput, LocationDependentOutput, TimeDependentOutput};
pub use crate::profile::{CharacteristicPointType, ProfileData};
pub use crate::result::{DataResult, Event, EventType};
