use std::fmt;
use thiserror::Error;

/// The base error type for all PluView errors.
///
/// Each crate can extend this by implementing `From<SpecificError> for PluviewError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluviewError {
    /// Input failed a validation rule (bad email, incomplete draft)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred while reading or writing a preference store
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl PluviewError {
    /// Whether the error is caused by user input rather than the environment.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, PluviewError::ValidationError(_))
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, PluviewError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, PluviewError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, PluviewError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| PluviewError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, PluviewError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| PluviewError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<serde_json::Error> for PluviewError {
    fn from(err: serde_json::Error) -> Self {
        PluviewError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PluviewError {
    fn from(err: std::io::Error) -> Self {
        PluviewError::StorageError(err.to_string())
    }
}

impl From<pluview_config::ConfigError> for PluviewError {
    fn from(err: pluview_config::ConfigError) -> Self {
        PluviewError::ConfigError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> PluviewError {
    PluviewError::ValidationError(message.to_string())
}

pub fn parse_error<T: fmt::Display>(message: T) -> PluviewError {
    PluviewError::ParseError(message.to_string())
}

pub fn storage_error<T: fmt::Display>(message: T) -> PluviewError {
    PluviewError::StorageError(message.to_string())
}
