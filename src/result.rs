//! Success/failure envelope carrying diagnostic events.

use crate::validation::{Severity, ValidationIssue, ValidationReport};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventType {
    Warning,
    Error,
}

impl From<Severity> for EventType {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Self::Warning,
            Severity::Error => Self::Error,
        }
    }
}

/// A diagnostic message produced while building or running a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub message: String,
    pub event_type: EventType,
}

impl Event {
    pub fn new(message: impl Into<String>, event_type: EventType) -> Self {
        Self {
            message: message.into(),
            event_type,
        }
    }
}

impl From<ValidationIssue> for Event {
    fn from(issue: ValidationIssue) -> Self {
        Self::new(issue.message, issue.severity.into())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.event_type {
            EventType::Warning => "warning",
            EventType::Error => "error",
        };
        write!(f, "{label}: {}", self.message)
    }
}

/// Either data with the warnings gathered on the way, or only the events
/// explaining why no data was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DataResult<T> {
    Success { data: T, events: Vec<Event> },
    Failure { events: Vec<Event> },
}

impl<T> DataResult<T> {
    /// Success when `report` holds no errors, failure otherwise. Every
    /// issue of the report becomes an event either way.
    pub fn from_report(report: ValidationReport, data: impl FnOnce() -> T) -> Self {
        let failed = report.has_errors();
        let events = report.into_issues().into_iter().map(Event::from).collect();
        if failed {
            Self::Failure { events }
        } else {
            Self::Success {
                data: data(),
                events,
            }
        }
    }

    pub fn successful(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn events(&self) -> &[Event] {
        match self {
            Self::Success { events, .. } | Self::Failure { events } => events,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataResult<U> {
        match self {
            Self::Success { data, events } => DataResult::Success {
                data: f(data),
                events,
            },
            Self::Failure { events } => DataResult::Failure { events },
        }
    }

    /// Split into data (when successful) and the events.
    pub fn into_parts(self) -> (Option<T>, Vec<Event>) {
        match self {
            Self::Success { data, events } => (Some(data), events),
            Self::Failure { events } => (None, events),
        }
    }

    /// The data, or all events when the result is a failure.
    pub fn into_result(self) -> std::result::Result<T, Vec<Event>> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { events } => Err(events),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_warnings_travel_with_success() {
        let mut report = ValidationReport::new();
        report.warning("high water");
        let result = DataResult::from_report(report, || 42);

        assert!(result.successful());
        assert_eq!(result.data(), Some(&42));
        assert_eq!(
            result.events(),
            &[Event::new("high water", EventType::Warning)]
        );
    }

    #[test]
    fn test_error_turns_into_failure_with_all_events() {
        let mut report = ValidationReport::new();
        report.warning("first");
        report.error("second");
        let result: DataResult<i32> = DataResult::from_report(report, || unreachable!());

        assert!(!result.successful());
        let events = result.into_result().unwrap_err();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].event_type, EventType::Error);
    }

    #[test]
    fn test_map_keeps_events() {
        let result = DataResult::Success {
            data: 2,
            events: vec![Event::new("note", EventType::Warning)],
        }
        .map(|n| n * 21);
        assert_eq!(result.data(), Some(&42));
        assert_eq!(result.events().len(), 1);
    }
}
