//! Bridge between [`ValidationReport`] and stillwater's [`Validation`].
//!
//! The builder assembles its input from independent pieces (profile, time
//! steps, one location per construction properties object). Each piece is
//! turned into a [`CalculationValidation`]; combining them accumulates every
//! issue instead of stopping at the first failing piece. Warnings ride
//! along in [`Validated`] on the success side, so a successful combination
//! still reports them.
//!
//! ```rust
//! use dike_revetment::effects::{combine_validations, into_data_result, validate_with};
//! use dike_revetment::validation::ValidationReport;
//!
//! let mut first = ValidationReport::new();
//! first.error("ThicknessTopLayer must be larger than 0.");
//! let mut second = ValidationReport::new();
//! second.error("X must be in range (5, 30) between OuterToe and OuterCrest.");
//!
//! let combined = combine_validations(vec![validate_with(first, 1), validate_with(second, 2)]);
//! assert_eq!(into_data_result(combined).events().len(), 2);
//! ```

use crate::result::DataResult;
use crate::validation::{ValidationIssue, ValidationReport};
use stillwater::{NonEmptyVec, Validation};

/// Issues that made a validation fail. Warnings found alongside the
/// errors are kept in order.
pub type Issues = NonEmptyVec<ValidationIssue>;

/// A value that passed validation, with the warnings raised for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    pub value: T,
    pub warnings: Vec<ValidationIssue>,
}

impl<T> Validated<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }
}

pub type CalculationValidation<T> = Validation<Validated<T>, Issues>;

pub fn validation_success<T>(value: T) -> CalculationValidation<T> {
    Validation::Success(Validated::new(value))
}

pub fn validation_failure<T>(issue: ValidationIssue) -> CalculationValidation<T> {
    Validation::Failure(NonEmptyVec::new(issue, Vec::new()))
}

/// `value` with the warnings of `report`, or a failure carrying every
/// issue of `report` when it holds an error.
pub fn validate_with<T>(report: ValidationReport, value: T) -> CalculationValidation<T> {
    let failed = report.has_errors();
    let issues = report.into_issues();
    match (failed, NonEmptyVec::from_vec(issues.clone())) {
        (true, Some(issues)) => Validation::Failure(issues),
        _ => Validation::Success(Validated {
            value,
            warnings: issues,
        }),
    }
}

/// Combine validations, accumulating the issues of all failures.
///
/// The warnings of successful parts are carried into the failure too, so
/// no finding is lost when any part fails.
pub fn combine_validations<T>(
    validations: Vec<CalculationValidation<T>>,
) -> CalculationValidation<Vec<T>> {
    let mut values = Vec::with_capacity(validations.len());
    let mut issues = Vec::new();
    let mut failed = false;

    for validation in validations {
        match validation {
            Validation::Success(validated) => {
                values.push(validated.value);
                issues.extend(validated.warnings);
            }
            Validation::Failure(errors) => {
                failed = true;
                issues.extend(errors);
            }
        }
    }

    match (failed, NonEmptyVec::from_vec(issues.clone())) {
        (true, Some(issues)) => Validation::Failure(issues),
        _ => Validation::Success(Validated {
            value: values,
            warnings: issues,
        }),
    }
}

pub fn validation_map<T, U, F>(
    validation: CalculationValidation<T>,
    f: F,
) -> CalculationValidation<U>
where
    F: FnOnce(T) -> U,
{
    match validation {
        Validation::Success(validated) => Validation::Success(Validated {
            value: f(validated.value),
            warnings: validated.warnings,
        }),
        Validation::Failure(issues) => Validation::Failure(issues),
    }
}

/// Add the issues of `report` to `validation`; an error in `report` turns
/// a success into a failure.
pub fn with_report<T>(
    validation: CalculationValidation<T>,
    report: ValidationReport,
) -> CalculationValidation<T> {
    match validation {
        Validation::Success(validated) => {
            let mut merged: ValidationReport = validated.warnings.into_iter().collect();
            merged.merge(report);
            validate_with(merged, validated.value)
        }
        Validation::Failure(issues) => {
            let mut all = issues.clone().into_vec();
            all.extend(report.into_issues());
            Validation::Failure(NonEmptyVec::from_vec(all).unwrap_or(issues))
        }
    }
}

/// Apply `f` to every issue, warnings and errors alike.
pub fn map_issues<T, F>(validation: CalculationValidation<T>, f: F) -> CalculationValidation<T>
where
    F: Fn(ValidationIssue) -> ValidationIssue,
{
    match validation {
        Validation::Success(validated) => Validation::Success(Validated {
            value: validated.value,
            warnings: validated.warnings.into_iter().map(&f).collect(),
        }),
        Validation::Failure(issues) => {
            let mapped: Vec<_> = issues.into_iter().map(&f).collect();
            Validation::Failure(
                NonEmptyVec::from_vec(mapped).expect("mapping keeps the number of issues"),
            )
        }
    }
}

pub fn into_data_result<T>(validation: CalculationValidation<T>) -> DataResult<T> {
    match validation {
        Validation::Success(validated) => DataResult::Success {
            data: validated.value,
            events: validated.warnings.into_iter().map(Into::into).collect(),
        },
        Validation::Failure(issues) => DataResult::Failure {
            events: issues.into_iter().map(Into::into).collect(),
        },
    }
}
