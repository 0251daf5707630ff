//! Structured validation with exhaustive issue collection.
//!
//! Validation never stops at the first problem. Every rule pushes its
//! findings into a [`ValidationReport`] that is handed by `&mut` through the
//! validation chain; the caller decides afterwards whether the collected
//! issues abort the operation (any [`Severity::Error`]) or travel along with
//! a successful result (only warnings).
//!
//! ```rust
//! use dike_revetment::validation::{Severity, ValidationReport};
//!
//! let mut report = ValidationReport::new();
//! report.warning("Water level exceeds the dike height");
//! report.error("FailureNumber must be equal to or larger than InitialDamage.");
//!
//! assert!(report.has_errors());
//! assert_eq!(report.issues().len(), 2);
//! assert_eq!(report.issues()[0].severity, Severity::Warning);
//! ```

pub mod profile;
pub mod rules;
pub mod time_steps;

use crate::input::{CalculationInput, LocationDependentInput, TimeDependentInput};
use crate::profile::ProfileData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informative; the calculation proceeds.
    Warning,
    /// The calculation is aborted.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Accumulator for validation issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ValidationIssue::error(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(ValidationIssue::warning(message));
    }

    /// Push an error when `condition` does not hold.
    pub fn require(&mut self, condition: bool, message: impl Into<String>) {
        if !condition {
            self.error(message);
        }
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.issues.extend(issues);
    }

    /// Move all issues of `other` into this report.
    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

impl FromIterator<ValidationIssue> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

/// Prefix an issue with the index and X of the location it belongs to.
pub fn prefix_location(issue: ValidationIssue, index: usize, x: f64) -> ValidationIssue {
    ValidationIssue {
        message: format!("Location {index} (X = {x}): {}", issue.message),
        ..issue
    }
}

/// Validate the profile and the time steps. `requires_inner_points` is set
/// when an overtopping location is present.
pub fn validate_profile_and_time_steps(
    profile_data: &ProfileData,
    time_steps: &[TimeDependentInput],
    requires_inner_points: bool,
    report: &mut ValidationReport,
) {
    profile::validate_profile(profile_data, requires_inner_points, report);
    time_steps::validate_time_steps(time_steps, report);
}

/// Validate every location, prefixing its issues with its index and X.
pub fn validate_locations(
    locations: &[Box<dyn LocationDependentInput>],
    time_steps: &[TimeDependentInput],
    profile: &ProfileData,
    report: &mut ValidationReport,
) {
    if locations.is_empty() {
        report.error("At least 1 location is required.");
        return;
    }

    for (index, location) in locations.iter().enumerate() {
        let mut location_report = ValidationReport::new();
        location.validate(time_steps, profile, &mut location_report);
        report.extend(
            location_report
                .into_issues()
                .into_iter()
                .map(|issue| prefix_location(issue, index, location.x())),
        );
    }
}

/// Validate a complete calculation input: profile, time steps and every
/// location.
pub fn validate_calculation_input(input: &CalculationInput) -> ValidationReport {
    let mut report = ValidationReport::new();
    let requires_inner_points = input
        .locations()
        .iter()
        .any(|l| l.mechanism().is_overtopping());

    validate_profile_and_time_steps(
        input.profile_data(),
        input.time_steps(),
        requires_inner_points,
        &mut report,
    );
    validate_locations(
        input.locations(),
        input.time_steps(),
        input.profile_data(),
        &mut report,
    );
    report
}
