//! JSON description of a calculation.
//!
//! A document mirrors the builder: it lists the profile segments,
//! characteristic points, optional foreshore and orientation, the time
//! steps and one construction properties object per location. Nothing is
//! validated while reading; [`InputDocument::into_builder`] hands
//! everything to [`CalculationInputBuilder`] whose `build` reports every
//! problem at once.
//!
//! ```json
//! {
//!   "segments": [{ "start_x": 0, "start_z": 0, "end_x": 25, "end_z": 7.5 }],
//!   "characteristic_points": [
//!     { "x": 0, "point_type": "OuterToe" },
//!     { "x": 25, "point_type": "OuterCrest" }
//!   ],
//!   "time_steps": [{ "begin_time": 0, "end_time": 3600, "water_level": 5,
//!                    "wave_height_hm0": 1, "wave_period_tm10": 4,
//!                    "wave_direction": 0 }],
//!   "locations": [{ "mechanism": "grass_wave_impact", "x": 15,
//!                   "top_layer_type": "ClosedSod" }]
//! }
//! ```

use crate::builder::{CalculationInputBuilder, LocationConstructionProperties};
use crate::errors::{CalculationError, Result};
use crate::input::TimeDependentInput;
use crate::profile::CharacteristicPointType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentDocument {
    pub start_x: f64,
    pub start_z: f64,
    pub end_x: f64,
    pub end_z: f64,
    #[serde(default)]
    pub roughness_coefficient: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacteristicPointDocument {
    pub x: f64,
    pub point_type: CharacteristicPointType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForeshoreDocument {
    pub slope: f64,
    pub bottom_z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDocument {
    pub segments: Vec<SegmentDocument>,
    #[serde(default)]
    pub characteristic_points: Vec<CharacteristicPointDocument>,
    #[serde(default)]
    pub foreshore: Option<ForeshoreDocument>,
    #[serde(default)]
    pub dike_orientation: Option<f64>,
    pub time_steps: Vec<TimeDependentInput>,
    pub locations: Vec<LocationConstructionProperties>,
}

impl InputDocument {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load everything into a builder, in document order.
    pub fn into_builder(self) -> CalculationInputBuilder {
        let mut builder = CalculationInputBuilder::new();

        for segment in &self.segments {
            builder.add_dike_profile_segment(
                segment.start_x,
                segment.start_z,
                segment.end_x,
                segment.end_z,
                segment.roughness_coefficient,
            );
        }
        for point in &self.characteristic_points {
            builder.add_dike_profile_point(point.x, point.point_type);
        }
        if let Some(foreshore) = self.foreshore {
            builder.add_foreshore(foreshore.slope, foreshore.bottom_z);
        }
        if let Some(orientation) = self.dike_orientation {
            builder.set_dike_orientation(orientation);
        }
        for step in &self.time_steps {
            builder.add_time_step(
                step.begin_time,
                step.end_time,
                step.water_level,
                step.wave_height_hm0,
                step.wave_period_tm10,
                step.wave_direction,
            );
        }
        for location in self.locations {
            builder.add_location(location);
        }

        builder
    }
}

/// Read an [`InputDocument`] from a JSON file.
pub fn read_document(path: &Path) -> Result<InputDocument> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalculationError::file_system("Failed to read input document", path, e))?;
    let document = InputDocument::from_json_str(&contents)?;
    tracing::debug!(
        path = %path.display(),
        segments = document.segments.len(),
        time_steps = document.time_steps.len(),
        locations = document.locations.len(),
        "Read input document"
    );
    Ok(document)
}
