use serde::{Deserialize, Serialize};

/// Roughness applied to a segment when the caller does not specify one.
pub const DEFAULT_ROUGHNESS_COEFFICIENT: f64 = 1.0;

/// A point of the dike cross-section (horizontal position `x`, height `z`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: f64,
    pub z: f64,
}

impl ProfilePoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Both coordinates equal within `tolerance`.
    pub fn coincides_with(&self, other: &ProfilePoint, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.z - other.z).abs() <= tolerance
    }
}

/// Straight piece of the dike cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSegment {
    pub start: ProfilePoint,
    pub end: ProfilePoint,
    pub roughness_coefficient: f64,
}

impl ProfileSegment {
    pub fn new(start: ProfilePoint, end: ProfilePoint, roughness_coefficient: f64) -> Self {
        Self {
            start,
            end,
            roughness_coefficient,
        }
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.start.x && x <= self.end.x
    }

    pub fn horizontal_length(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Tangent of the segment's angle with the horizontal.
    pub fn slope(&self) -> f64 {
        (self.end.z - self.start.z) / self.horizontal_length()
    }

    /// Height at `x` by linear interpolation; `x` must lie on the segment.
    pub fn height_at(&self, x: f64) -> f64 {
        let length = self.horizontal_length();
        if length == 0.0 {
            return self.start.z;
        }
        self.start.z + (x - self.start.x) / length * (self.end.z - self.start.z)
    }

    /// Horizontal position at which the segment reaches height `z`, if it
    /// does so.
    pub fn position_at_height(&self, z: f64) -> Option<f64> {
        let (low, high) = if self.start.z <= self.end.z {
            (self.start.z, self.end.z)
        } else {
            (self.end.z, self.start.z)
        };
        if z < low || z > high {
            return None;
        }
        if self.end.z == self.start.z {
            return Some(self.start.x);
        }
        let fraction = (z - self.start.z) / (self.end.z - self.start.z);
        Some(self.start.x + fraction * self.horizontal_length())
    }
}
