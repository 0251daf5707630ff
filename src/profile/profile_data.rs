use super::characteristic_point::{CharacteristicPoint, CharacteristicPointType, Foreshore};
use super::segment::ProfileSegment;
use super::PROFILE_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Static geometry of a dike cross-section.
///
/// Built once by the builder and shared read-only by every location and
/// every time step of a calculation. Construction does not validate; see
/// [`crate::validation::profile`] for the structural rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    segments: Vec<ProfileSegment>,
    characteristic_points: Vec<CharacteristicPoint>,
    foreshore: Option<Foreshore>,
    /// Orientation of the dike normal in degrees (nautical convention).
    #[serde(default)]
    dike_orientation: f64,
}

impl ProfileData {
    pub fn new(
        segments: Vec<ProfileSegment>,
        characteristic_points: Vec<CharacteristicPoint>,
        foreshore: Option<Foreshore>,
    ) -> Self {
        Self {
            segments,
            characteristic_points,
            foreshore,
            dike_orientation: 0.0,
        }
    }

    pub fn with_dike_orientation(mut self, dike_orientation: f64) -> Self {
        self.dike_orientation = dike_orientation;
        self
    }

    pub fn dike_orientation(&self) -> f64 {
        self.dike_orientation
    }

    pub fn segments(&self) -> &[ProfileSegment] {
        &self.segments
    }

    pub fn characteristic_points(&self) -> &[CharacteristicPoint] {
        &self.characteristic_points
    }

    pub fn foreshore(&self) -> Option<&Foreshore> {
        self.foreshore.as_ref()
    }

    /// Horizontal position of the first characteristic point of the given type.
    pub fn characteristic_point(&self, point_type: CharacteristicPointType) -> Option<f64> {
        self.characteristic_points
            .iter()
            .find(|p| p.point_type == point_type)
            .map(|p| p.x)
    }

    /// First segment containing `x`.
    pub fn segment_at(&self, x: f64) -> Option<&ProfileSegment> {
        self.segments.iter().find(|s| s.contains_x(x))
    }

    /// Height of the profile at `x`.
    pub fn vertical_height(&self, x: f64) -> Option<f64> {
        self.segment_at(x).map(|s| s.height_at(x))
    }

    pub fn roughness_at(&self, x: f64) -> Option<f64> {
        self.segment_at(x).map(|s| s.roughness_coefficient)
    }

    /// Tangent of the slope of the segment containing `x`.
    pub fn outer_slope_at(&self, x: f64) -> Option<f64> {
        self.segment_at(x).map(ProfileSegment::slope)
    }

    /// Horizontal position at which the outer slope (OuterToe to OuterCrest)
    /// reaches height `z`.
    pub fn horizontal_position(&self, z: f64) -> Option<f64> {
        self.outer_slope_segments()?
            .iter()
            .find_map(|s| s.position_at_height(z))
    }

    /// Average tangent of the outer slope between OuterToe and OuterCrest.
    pub fn outer_slope(&self) -> Option<f64> {
        let toe = self.characteristic_point(CharacteristicPointType::OuterToe)?;
        let crest = self.characteristic_point(CharacteristicPointType::OuterCrest)?;
        let z_toe = self.vertical_height(toe)?;
        let z_crest = self.vertical_height(crest)?;
        Some((z_crest - z_toe) / (crest - toe))
    }

    /// Height of the profile at OuterCrest.
    pub fn outer_dike_height(&self) -> Option<f64> {
        self.characteristic_point(CharacteristicPointType::OuterCrest)
            .and_then(|x| self.vertical_height(x))
    }

    /// Height of the profile at OuterToe.
    pub fn outer_toe_height(&self) -> Option<f64> {
        self.characteristic_point(CharacteristicPointType::OuterToe)
            .and_then(|x| self.vertical_height(x))
    }

    /// Slope-length weighted roughness of the outer slope.
    pub fn representative_roughness(&self) -> Option<f64> {
        let segments = self.outer_slope_segments()?;
        let (weighted, total) = segments.iter().fold((0.0, 0.0), |(weighted, total), s| {
            let length = s.horizontal_length().hypot(s.end.z - s.start.z);
            (weighted + length * s.roughness_coefficient, total + length)
        });
        (total > 0.0).then(|| weighted / total)
    }

    /// Whether `x` lies landward of the inner crest.
    pub fn is_on_inner_slope(&self, x: f64) -> bool {
        self.characteristic_point(CharacteristicPointType::InnerCrest)
            .is_some_and(|inner_crest| x > inner_crest)
    }

    fn outer_slope_segments(&self) -> Option<&[ProfileSegment]> {
        let toe = self.characteristic_point(CharacteristicPointType::OuterToe)?;
        let crest = self.characteristic_point(CharacteristicPointType::OuterCrest)?;
        let first = self
            .segments
            .iter()
            .position(|s| s.start.x >= toe - PROFILE_TOLERANCE)?;
        let last = self
            .segments
            .iter()
            .rposition(|s| s.end.x <= crest + PROFILE_TOLERANCE)?;
        (first <= last).then(|| &self.segments[first..=last])
    }
}
