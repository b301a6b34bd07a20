//! Error types for the control crate.

use thiserror::Error;

/// Result type for control-character operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur while handling control-character configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// A service string advice did not contain exactly six characters.
    #[error("invalid service string {value:?}: expected six control characters, optionally prefixed with \"UNA\"")]
    InvalidServiceString {
        /// The string that failed to parse.
        value: String,
    },
}

impl ControlError {
    /// Create an invalid service string error.
    pub fn invalid_service_string(value: impl Into<String>) -> Self {
        Self::InvalidServiceString {
            value: value.into(),
        }
    }
}
