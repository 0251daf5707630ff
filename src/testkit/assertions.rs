//! Assertion macros for calculation results.
//!
//! - [`crate::assert_result_ok!`] - Assert Result is Ok and extract value
//! - [`crate::assert_result_err!`] - Assert Result is Err and extract error
//! - [`crate::assert_contains_error!`] - Assert error message contains pattern
//! - [`crate::assert_data_success!`] - Assert a `DataResult` succeeded and extract the data
//! - [`crate::assert_data_failure!`] - Assert a `DataResult` failed and extract the messages
//! - [`crate::assert_validation_error_count!`] - Assert a validation failed with N issues
//!
//! # Example
//!
//! ```rust
//! use dike_revetment::{assert_data_failure, assert_result_ok};
//! use dike_revetment::builder::CalculationInputBuilder;
//!
//! let messages = assert_data_failure!(CalculationInputBuilder::new().build());
//! assert_eq!(messages[0], "At least 1 profile segment is required.");
//!
//! let result: Result<i32, String> = Ok(42);
//! assert_eq!(assert_result_ok!(result), 42);
//! ```

/// Assert that a Result is Ok and extract the value.
#[macro_export]
macro_rules! assert_result_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "{}: Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a Result is Err and extract the error.
#[macro_export]
macro_rules! assert_result_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
}

/// Assert that an error's Display output contains a pattern.
#[macro_export]
macro_rules! assert_contains_error {
    ($result:expr, $pattern:expr) => {{
        let err = $crate::assert_result_err!($result);
        let err_str = err.to_string();
        assert!(
            err_str.contains($pattern),
            "Error '{}' does not contain '{}'\n  at {}:{}:{}",
            err_str,
            $pattern,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}

/// Assert that a `DataResult` is a success and extract its data.
///
/// The events of a failure are printed one per line.
#[macro_export]
macro_rules! assert_data_success {
    ($result:expr) => {
        match $result {
            $crate::result::DataResult::Success { data, .. } => data,
            $crate::result::DataResult::Failure { events } => panic!(
                "Expected success, got {} events:\n{}\n  at {}:{}:{}",
                events.len(),
                events
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"),
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a `DataResult` is a failure and extract its event messages.
#[macro_export]
macro_rules! assert_data_failure {
    ($result:expr) => {
        match $result {
            $crate::result::DataResult::Success { .. } => panic!(
                "Expected failure, got success\n  at {}:{}:{}",
                file!(),
                line!(),
                column!()
            ),
            $crate::result::DataResult::Failure { events } => events
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<String>>(),
        }
    };
}

/// Assert that a validation failed with exactly `count` issues and extract
/// them.
#[macro_export]
macro_rules! assert_validation_error_count {
    ($validation:expr, $count:expr) => {
        match $validation {
            stillwater::Validation::Success(value) => panic!(
                "Expected {} validation issues, got success with: {:?}\n  at {}:{}:{}",
                $count,
                value,
                file!(),
                line!(),
                column!()
            ),
            stillwater::Validation::Failure(issues) => {
                let issues = issues.into_vec();
                assert_eq!(
                    issues.len(),
                    $count,
                    "Expected {} issues, got {}: {:?}\n  at {}:{}:{}",
                    $count,
                    issues.len(),
                    issues,
                    file!(),
                    line!(),
                    column!()
                );
                issues
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::effects::{validate_with, CalculationValidation};
    use crate::result::{DataResult, Event, EventType};
    use crate::validation::ValidationReport;

    #[test]
    fn test_assert_result_ok_success() {
        let result: Result<i32, String> = Ok(42);
        let value = assert_result_ok!(result);
        assert_eq!(value, 42);
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Err")]
    fn test_assert_result_ok_failure() {
        let result: Result<i32, String> = Err("error".to_string());
        let _ = assert_result_ok!(result);
    }

    #[test]
    fn test_assert_result_ok_with_message() {
        let result: Result<i32, String> = Ok(42);
        let value = assert_result_ok!(result, "location {}", 3);
        assert_eq!(value, 42);
    }

    #[test]
    #[should_panic(expected = "Expected Err, got Ok")]
    fn test_assert_result_err_failure() {
        let result: Result<i32, String> = Ok(42);
        let _ = assert_result_err!(result);
    }

    #[test]
    #[should_panic(expected = "does not contain")]
    fn test_assert_contains_error_pattern_mismatch() {
        let result: Result<i32, String> = Err("Settings error: bad value".to_string());
        assert_contains_error!(result, "not found");
    }

    #[test]
    fn test_assert_data_success() {
        let result = DataResult::Success {
            data: 7,
            events: vec![],
        };
        assert_eq!(assert_data_success!(result), 7);
    }

    #[test]
    #[should_panic(expected = "error: no time steps")]
    fn test_assert_data_success_prints_events() {
        let result: DataResult<i32> = DataResult::Failure {
            events: vec![Event::new("no time steps", EventType::Error)],
        };
        let _ = assert_data_success!(result);
    }

    #[test]
    fn test_assert_data_failure() {
        let result: DataResult<i32> = DataResult::Failure {
            events: vec![Event::new("no time steps", EventType::Error)],
        };
        assert_eq!(assert_data_failure!(result), vec!["no time steps"]);
    }

    #[test]
    fn test_assert_validation_error_count() {
        let mut report = ValidationReport::new();
        report.error("first");
        report.warning("second");
        let validation: CalculationValidation<()> = validate_with(report, ());
        let issues = assert_validation_error_count!(validation, 2);
        assert_eq!(issues[1].message, "second");
    }
}
