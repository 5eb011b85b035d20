//! Custom error types for the grocery budget planner
//!
//! Errors in this module end a session. Problems with a single line of input
//! are [`EntryError`](crate::models::EntryError)s and only cause a re-prompt.

use thiserror::Error;

/// The main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console or file I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input ended while a prompt was waiting for a line
    #[error("Input ended while waiting for {field}")]
    EndOfInput { field: &'static str },

    /// A retry loop hit the configured attempt limit
    #[error("Gave up on {field} after {attempts} invalid attempts")]
    TooManyAttempts { field: &'static str, attempts: u32 },
}

impl PlannerError {
    /// Check if input ran out before the session finished
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput { .. })
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for PlannerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<crate::models::EntryError> for PlannerError {
    fn from(err: crate::models::EntryError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
