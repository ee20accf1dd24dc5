//! Core error types for carat

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for carat operations
#[derive(Error, Debug)]
pub enum CaratError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A supplied value does not satisfy the declared parameter type
    #[error("Parameter '{parameter}' requires {expected}")]
    InvalidArgument { parameter: String, expected: String },

    /// A keyword argument that the callee does not declare
    #[error("Unexpected keyword argument '{0}'")]
    UnexpectedArgument(String),

    #[error("Parameter '{0}' was given both positionally and by keyword")]
    DuplicateArgument(String),

    #[error("Missing required argument '{0}'")]
    MissingArgument(String),

    #[error("Takes {expected} positional argument(s) but {got} were given")]
    TooManyPositional { expected: usize, got: usize },

    #[error("Database not found at {}, run makedb first", .0.display())]
    MissingDatabase(PathBuf),

    #[error("{value} is not a valid {kind}")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("Not found: {0}")]
    NotFound(String),

    /// The external executable could not be started
    #[error("Execution error: {0}")]
    Execution(String),

    /// The external executable exited without a status code
    #[error("{0} was terminated by a signal")]
    Terminated(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for carat operations
pub type CaratResult<T> = Result<T, CaratError>;

impl CaratError {
    /// Shorthand for an [`CaratError::InvalidArgument`]
    pub fn invalid_argument(parameter: impl Into<String>, expected: impl Into<String>) -> Self {
        CaratError::InvalidArgument {
            parameter: parameter.into(),
            expected: expected.into(),
        }
    }

    /// True for every error raised while checking call-site arguments
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            CaratError::InvalidArgument { .. }
                | CaratError::UnexpectedArgument(_)
                | CaratError::DuplicateArgument(_)
                | CaratError::MissingArgument(_)
                | CaratError::TooManyPositional { .. }
                | CaratError::InvalidEnumValue { .. }
        )
    }
}

impl From<serde_json::Error> for CaratError {
    fn from(err: serde_json::Error) -> Self {
        CaratError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for CaratError {
    fn from(err: anyhow::Error) -> Self {
        CaratError::Other(err.to_string())
    }
}
