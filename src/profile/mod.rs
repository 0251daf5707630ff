//! Dike cross-section geometry.
//!
//! A profile is a piecewise-linear chain of [`ProfileSegment`]s with named
//! [`CharacteristicPoint`]s on segment boundaries and an optional
//! [`Foreshore`].

mod characteristic_point;
mod profile_data;
mod segment;

pub use characteristic_point::{CharacteristicPoint, CharacteristicPointType, Foreshore};
pub use profile_data::ProfileData;
pub use segment::{ProfilePoint, ProfileSegment, DEFAULT_ROUGHNESS_COEFFICIENT};

/// Tolerance used when comparing profile coordinates.
pub const PROFILE_TOLERANCE: f64 = 1e-6;
