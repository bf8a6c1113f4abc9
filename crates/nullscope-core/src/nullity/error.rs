//! Errors raised by the nullity operations.

use thiserror::Error;

use crate::data::DataError;

/// Result type for nullity operations
pub type NullityResult<T> = Result<T, NullityError>;

/// Errors that can occur while sorting, filtering or profiling by nullity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NullityError {
    #[error("invalid {parameter}: {message}")]
    InvalidArgument {
        parameter: &'static str,
        message: String,
    },

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("failed to parse nullity config: {0}")]
    Config(String),
}

impl NullityError {
    pub(crate) fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        NullityError::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for NullityError {
    fn from(err: toml::de::Error) -> Self {
        NullityError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for NullityError {
    fn from(err: serde_json::Error) -> Self {
        NullityError::Config(err.to_string())
    }
}
