//! Reusable range rules for location coefficients.
//!
//! Every rule pushes at most one error into the report and returns
//! nothing, so callers can chain them without branching.

use super::ValidationReport;
use crate::profile::{CharacteristicPointType, ProfileData};

pub fn positive(report: &mut ValidationReport, name: &str, value: f64) {
    report.require(
        value.is_finite() && value > 0.0,
        format!("{name} must be larger than 0."),
    );
}

pub fn non_negative(report: &mut ValidationReport, name: &str, value: f64) {
    report.require(
        value.is_finite() && value >= 0.0,
        format!("{name} must be equal to or larger than 0."),
    );
}

pub fn negative(report: &mut ValidationReport, name: &str, value: f64) {
    report.require(
        value.is_finite() && value < 0.0,
        format!("{name} must be smaller than 0."),
    );
}

pub fn finite(report: &mut ValidationReport, name: &str, value: f64) {
    report.require(value.is_finite(), format!("{name} must be a finite number."));
}

/// `lower <= value <= upper`
pub fn in_range(report: &mut ValidationReport, name: &str, value: f64, lower: f64, upper: f64) {
    report.require(
        value >= lower && value <= upper,
        format!("{name} must be in range {{{lower}, {upper}}}."),
    );
}

/// `lower < value < upper`
pub fn in_open_range(
    report: &mut ValidationReport,
    name: &str,
    value: f64,
    lower: f64,
    upper: f64,
) {
    report.require(
        value > lower && value < upper,
        format!("{name} must be in range ({lower}, {upper})."),
    );
}

pub fn probability(report: &mut ValidationReport, name: &str, value: f64) {
    in_range(report, name, value, 0.0, 1.0);
}

/// A (value, probability) table: non-empty, each probability in [0, 1].
/// Probabilities that do not add up to one only produce a warning.
pub fn factor_table(report: &mut ValidationReport, name: &str, factors: &[(f64, f64)]) {
    if factors.is_empty() {
        report.error(format!("{name} must contain at least one factor."));
        return;
    }

    for (value, probability) in factors {
        finite(report, &format!("{name} value"), *value);
        self::probability(report, &format!("{name} probability"), *probability);
    }

    let total: f64 = factors.iter().map(|(_, p)| p).sum();
    if (total - 1.0).abs() > 1e-6 {
        report.warning(format!(
            "The probabilities of {name} add up to {total} instead of 1."
        ));
    }
}

/// X strictly between OuterToe and OuterCrest.
pub fn on_outer_slope(report: &mut ValidationReport, x: f64, profile: &ProfileData) {
    let toe = profile.characteristic_point(CharacteristicPointType::OuterToe);
    let crest = profile.characteristic_point(CharacteristicPointType::OuterCrest);
    if let (Some(toe), Some(crest)) = (toe, crest) {
        report.require(
            x > toe && x < crest,
            format!("X must be in range ({toe}, {crest}) between OuterToe and OuterCrest."),
        );
    }
}

/// X between OuterCrest and InnerToe, both inclusive.
pub fn on_crest_or_inner_slope(report: &mut ValidationReport, x: f64, profile: &ProfileData) {
    let crest = profile.characteristic_point(CharacteristicPointType::OuterCrest);
    let inner_toe = profile.characteristic_point(CharacteristicPointType::InnerToe);
    if let (Some(crest), Some(inner_toe)) = (crest, inner_toe) {
        report.require(
            x >= crest && x <= inner_toe,
            format!("X must be in range {{{crest}, {inner_toe}}} between OuterCrest and InnerToe."),
        );
    }
}
