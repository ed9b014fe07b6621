//! Error types for bcubed.

use thiserror::Error;

/// Result type for bcubed operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bcubed operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Label sequences are empty, differ in length, or do not cover the same positions.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A score is undefined (division by zero).
    #[error("Numeric error: {0}")]
    Numeric(String),
}

impl Error {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a numeric error.
    #[must_use]
    pub fn numeric(msg: impl Into<String>) -> Self {
        Self::Numeric(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("gold has 3 labels, hypothesis has 2");
        assert_eq!(
            err.to_string(),
            "Invalid argument: gold has 3 labels, hypothesis has 2"
        );

        let err = Error::numeric("precision + recall is zero");
        assert!(err.to_string().starts_with("Numeric error:"));
    }
}
