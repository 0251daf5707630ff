//! Failure mechanisms.
//!
//! Each mechanism module provides a location input implementing
//! [`LocationDependentInput`](crate::input::LocationDependentInput), its
//! physics as free functions, and the diagnostics it reports per time step
//! and per location.

pub mod asphalt_wave_impact;
pub mod common;
pub mod distribution;
pub mod grass_overload;
pub mod grass_wave_impact;
pub mod grass_wave_overtopping;
pub mod grass_wave_runup;
pub mod natural_stone_wave_impact;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of top layer at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopLayerType {
    HydraulicAsphaltConcrete,
    ClosedSod,
    OpenSod,
    NordicStone,
}

impl TopLayerType {
    /// The grass variant of this top layer, if it is one.
    pub fn grass(self) -> Option<GrassTopLayerType> {
        match self {
            Self::ClosedSod => Some(GrassTopLayerType::ClosedSod),
            Self::OpenSod => Some(GrassTopLayerType::OpenSod),
            Self::HydraulicAsphaltConcrete | Self::NordicStone => None,
        }
    }
}

impl fmt::Display for TopLayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HydraulicAsphaltConcrete => "HydraulicAsphaltConcrete",
            Self::ClosedSod => "ClosedSod",
            Self::OpenSod => "OpenSod",
            Self::NordicStone => "NordicStone",
        };
        f.write_str(name)
    }
}

/// Grass sod quality; selects the default coefficients of grass mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrassTopLayerType {
    ClosedSod,
    OpenSod,
}

impl From<GrassTopLayerType> for TopLayerType {
    fn from(value: GrassTopLayerType) -> Self {
        match value {
            GrassTopLayerType::ClosedSod => Self::ClosedSod,
            GrassTopLayerType::OpenSod => Self::OpenSod,
        }
    }
}
