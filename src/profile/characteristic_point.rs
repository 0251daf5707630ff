use serde::{Deserialize, Serialize};
use std::fmt;

/// Named landmark on the dike cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacteristicPointType {
    OuterToe,
    CrestOuterBerm,
    NotchOuterBerm,
    OuterCrest,
    InnerCrest,
    InnerToe,
}

impl CharacteristicPointType {
    pub const ALL: [CharacteristicPointType; 6] = [
        Self::OuterToe,
        Self::CrestOuterBerm,
        Self::NotchOuterBerm,
        Self::OuterCrest,
        Self::InnerCrest,
        Self::InnerToe,
    ];
}

impl fmt::Display for CharacteristicPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OuterToe => "OuterToe",
            Self::CrestOuterBerm => "CrestOuterBerm",
            Self::NotchOuterBerm => "NotchOuterBerm",
            Self::OuterCrest => "OuterCrest",
            Self::InnerCrest => "InnerCrest",
            Self::InnerToe => "InnerToe",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicPoint {
    pub x: f64,
    pub point_type: CharacteristicPointType,
}

impl CharacteristicPoint {
    pub fn new(x: f64, point_type: CharacteristicPointType) -> Self {
        Self { x, point_type }
    }
}

/// Shallow foreshore in front of the dike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Foreshore {
    /// Tangent of the foreshore slope.
    pub slope: f64,
    pub bottom_z: f64,
}

impl Foreshore {
    pub fn new(slope: f64, bottom_z: f64) -> Self {
        Self { slope, bottom_z }
    }

    /// Water depth above the foreshore bottom.
    pub fn water_depth(&self, water_level: f64) -> f64 {
        water_level - self.bottom_z
    }
}
