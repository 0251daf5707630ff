//! Error types for the calculation kernel.
//!
//! Validation problems are never reported through this type: they are
//! collected as [`ValidationIssue`](crate::validation::ValidationIssue)s and
//! returned inside a [`DataResult`](crate::result::DataResult). The variants
//! here represent defects (a mechanism producing an incomplete output, or a
//! location being initialized on geometry that validation should have
//! rejected) and failures of the ambient layers (settings, I/O).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for calculation operations
#[derive(Debug, Error)]
pub enum CalculationError {
    /// A mechanism built a time dependent output without a field its
    /// variant requires.
    #[error("Invalid time dependent output: required field '{field}' is not set")]
    InvalidTimeDependentOutput { field: &'static str },

    /// Initialization of a location failed on the given profile.
    #[error("Initialization of location {location} failed: {message}")]
    Initialization { location: usize, message: String },

    /// Settings could not be interpreted
    #[error("Settings error: {0}")]
    Settings(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CalculationError {
    /// Create an error for a missing required output field
    pub fn missing_output_field(field: &'static str) -> Self {
        Self::InvalidTimeDependentOutput { field }
    }

    /// Create an initialization error for the location at `location`
    pub fn initialization(location: usize, message: impl Into<String>) -> Self {
        Self::Initialization {
            location,
            message: message.into(),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Whether this error signals a defect in a mechanism implementation
    /// rather than a problem with the surrounding environment.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            Self::InvalidTimeDependentOutput { .. } | Self::Initialization { .. }
        )
    }
}

/// A location could not be placed on the profile during initialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GeometryError {
    message: String,
}

impl GeometryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, CalculationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_output_field_message() {
        let err = CalculationError::missing_output_field("maximum_peak_stress");
        assert_eq!(
            err.to_string(),
            "Invalid time dependent output: required field 'maximum_peak_stress' is not set"
        );
        assert!(err.is_defect());
    }

    #[test]
    fn test_initialization_message() {
        let err = CalculationError::initialization(3, "no profile segment at x = 12");
        assert!(err.to_string().contains("location 3"));
        assert!(err.is_defect());
    }

    #[test]
    fn test_settings_error_is_not_defect() {
        let err = CalculationError::Settings("bad".to_string());
        assert!(!err.is_defect());
    }

    #[test]
    fn test_file_system_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CalculationError::file_system("Failed to read settings", "settings.toml", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
