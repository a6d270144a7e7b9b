//! Error types for the pathway library.

use thiserror::Error;

/// Comprehensive error type for all pathway operations.
#[derive(Error, Debug)]
pub enum PathwayError {
    /// Invalid learner profile input
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A plan request is already outstanding
    #[error("A plan request is already in flight")]
    RequestInFlight,
    /// Network or protocol failure talking to the plan service
    #[error("{source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PathwayError {
        PathwayError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PathwayError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for pathway operations
pub type Result<T> = std::result::Result<T, PathwayError>;
