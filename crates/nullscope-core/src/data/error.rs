//! Error types for data operations

use std::fmt;

/// Result type for data operations
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur during data operations
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// Arrow error (from arrow-rs)
    Arrow(String),
    /// Column not found in DataFrame
    ColumnNotFound(String),
    /// Invalid column index
    InvalidColumnIndex(usize),
    /// Invalid operation for the data type
    InvalidOperation(String),
    /// Schema mismatch
    SchemaMismatch(String),
    /// Index out of bounds
    OutOfBounds { index: usize, length: usize },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Arrow(msg) => write!(f, "Arrow error: {msg}"),
            DataError::ColumnNotFound(name) => write!(f, "column not found: {name}"),
            DataError::InvalidColumnIndex(idx) => write!(f, "invalid column index: {idx}"),
            DataError::InvalidOperation(msg) => write!(f, "invalid operation: {msg}"),
            DataError::SchemaMismatch(msg) => write!(f, "schema mismatch: {msg}"),
            DataError::OutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds for length {length}")
            }
        }
    }
}

impl std::error::Error for DataError {}

impl From<arrow::error::ArrowError> for DataError {
    fn from(err: arrow::error::ArrowError) -> Self {
        DataError::Arrow(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::ColumnNotFound("age".to_string());
        assert_eq!(err.to_string(), "column not found: age");

        let err = DataError::OutOfBounds {
            index: 7,
            length: 4,
        };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 4");
    }

    #[test]
    fn test_from_arrow_error() {
        let err: DataError = arrow::error::ArrowError::ComputeError("boom".to_string()).into();
        assert!(matches!(err, DataError::Arrow(ref msg) if msg.contains("boom")));
    }
}
