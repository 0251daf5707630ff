//! Structural rules for the dike profile.

use super::ValidationReport;
use crate::profile::{CharacteristicPointType, ProfileData, PROFILE_TOLERANCE};

/// Range of the segment roughness coefficient.
pub const ROUGHNESS_COEFFICIENT_RANGE: (f64, f64) = (0.5, 1.0);

/// Validate segments, characteristic points and foreshore.
///
/// `requires_inner_points` is set when an overtopping location needs the
/// inner crest and inner toe.
pub fn validate_profile(
    profile: &ProfileData,
    requires_inner_points: bool,
    report: &mut ValidationReport,
) {
    validate_segments(profile, report);
    validate_characteristic_points(profile, requires_inner_points, report);

    if let Some(foreshore) = profile.foreshore() {
        report.require(
            foreshore.slope.is_finite() && foreshore.slope > 0.0 && foreshore.slope <= 1.0,
            "The foreshore slope must be in range (0, 1].",
        );
        report.require(
            foreshore.bottom_z.is_finite(),
            "The foreshore bottom level must be a finite number.",
        );
    }
    report.require(
        profile.dike_orientation().is_finite()
            && (0.0..=360.0).contains(&profile.dike_orientation()),
        "DikeOrientation must be in range {0, 360}.",
    );
}

fn validate_segments(profile: &ProfileData, report: &mut ValidationReport) {
    let segments = profile.segments();
    if segments.is_empty() {
        report.error("At least 1 profile segment is required.");
        return;
    }

    for (index, segment) in segments.iter().enumerate() {
        if !(segment.end.x > segment.start.x) {
            report.error(format!(
                "Profile segment {index} must have an end X ({}) larger than its start X ({}).",
                segment.end.x, segment.start.x
            ));
        }
        let (lower, upper) = ROUGHNESS_COEFFICIENT_RANGE;
        if !(segment.roughness_coefficient >= lower && segment.roughness_coefficient <= upper) {
            report.error(format!(
                "The roughness coefficient of profile segment {index} must be in range \
                 {{{lower}, {upper}}}."
            ));
        }
    }

    for (index, pair) in segments.windows(2).enumerate() {
        if !pair[0].end.coincides_with(&pair[1].start, PROFILE_TOLERANCE) {
            report.error(format!(
                "Profile segment {} must start where profile segment {index} ends.",
                index + 1
            ));
        }
    }
}

fn validate_characteristic_points(
    profile: &ProfileData,
    requires_inner_points: bool,
    report: &mut ValidationReport,
) {
    let points = profile.characteristic_points();

    for point_type in CharacteristicPointType::ALL {
        let count = points.iter().filter(|p| p.point_type == point_type).count();
        if count > 1 {
            report.error(format!(
                "The characteristic point {point_type} is defined {count} times."
            ));
        }
    }

    let mut required = vec![
        CharacteristicPointType::OuterToe,
        CharacteristicPointType::OuterCrest,
    ];
    if requires_inner_points {
        required.push(CharacteristicPointType::InnerCrest);
        required.push(CharacteristicPointType::InnerToe);
    }
    for point_type in required {
        if profile.characteristic_point(point_type).is_none() {
            report.error(format!("The characteristic point {point_type} is required."));
        }
    }

    let segments = profile.segments();
    for point in points {
        let on_boundary = segments.iter().any(|s| {
            (s.start.x - point.x).abs() <= PROFILE_TOLERANCE
                || (s.end.x - point.x).abs() <= PROFILE_TOLERANCE
        });
        if !on_boundary {
            report.error(format!(
                "The characteristic point {} (X = {}) must be on a profile segment boundary.",
                point.point_type, point.x
            ));
        }
    }

    let order: Vec<f64> = CharacteristicPointType::ALL
        .iter()
        .filter_map(|t| profile.characteristic_point(*t))
        .collect();
    if order.windows(2).any(|pair| pair[1] < pair[0]) {
        report.error("The characteristic points must be ordered from outer toe to inner toe.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CharacteristicPoint, Foreshore, ProfilePoint, ProfileSegment};
    use crate::testkit::helpers::dike_profile;

    fn segment(x1: f64, z1: f64, x2: f64, z2: f64) -> ProfileSegment {
        ProfileSegment::new(ProfilePoint::new(x1, z1), ProfilePoint::new(x2, z2), 1.0)
    }

    fn messages(report: &ValidationReport) -> Vec<&str> {
        report.issues().iter().map(|i| i.message.as_str()).collect()
    }

    #[test]
    fn test_reference_profile_is_valid() {
        let mut report = ValidationReport::new();
        validate_profile(&dike_profile(), true, &mut report);
        assert!(report.is_empty(), "{:?}", report.issues());
    }

    #[test]
    fn test_empty_profile_reports_segments_and_points() {
        let profile = ProfileData::new(vec![], vec![], None);
        let mut report = ValidationReport::new();
        validate_profile(&profile, false, &mut report);
        assert_eq!(
            messages(&report),
            vec![
                "At least 1 profile segment is required.",
                "The characteristic point OuterToe is required.",
                "The characteristic point OuterCrest is required.",
            ]
        );
    }

    #[test]
    fn test_gap_between_segments() {
        let profile = ProfileData::new(
            vec![segment(0.0, 0.0, 10.0, 3.0), segment(10.5, 3.0, 20.0, 3.0)],
            vec![
                CharacteristicPoint::new(0.0, CharacteristicPointType::OuterToe),
                CharacteristicPoint::new(10.0, CharacteristicPointType::OuterCrest),
            ],
            None,
        );
        let mut report = ValidationReport::new();
        validate_profile(&profile, false, &mut report);
        assert_eq!(
            messages(&report),
            vec!["Profile segment 1 must start where profile segment 0 ends."]
        );
    }

    #[test]
    fn test_inner_points_required_for_overtopping() {
        let profile = ProfileData::new(
            vec![segment(0.0, 0.0, 10.0, 3.0)],
            vec![
                CharacteristicPoint::new(0.0, CharacteristicPointType::OuterToe),
                CharacteristicPoint::new(10.0, CharacteristicPointType::OuterCrest),
            ],
            None,
        );
        let mut report = ValidationReport::new();
        validate_profile(&profile, true, &mut report);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_point_off_boundary_and_duplicate() {
        let profile = ProfileData::new(
            vec![segment(0.0, 0.0, 10.0, 3.0)],
            vec![
                CharacteristicPoint::new(0.0, CharacteristicPointType::OuterToe),
                CharacteristicPoint::new(0.0, CharacteristicPointType::OuterToe),
                CharacteristicPoint::new(7.0, CharacteristicPointType::OuterCrest),
            ],
            None,
        );
        let mut report = ValidationReport::new();
        validate_profile(&profile, false, &mut report);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_foreshore_slope_range() {
        let profile = dike_profile();
        let profile = ProfileData::new(
            profile.segments().to_vec(),
            profile.characteristic_points().to_vec(),
            Some(Foreshore::new(0.0, -2.0)),
        );
        let mut report = ValidationReport::new();
        validate_profile(&profile, false, &mut report);
        assert_eq!(
            messages(&report),
            vec!["The foreshore slope must be in range (0, 1]."]
        );
    }
}
