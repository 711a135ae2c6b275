//! Custom error types for sealbox
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for sealbox operations
#[derive(Error, Debug)]
pub enum SealboxError {
    /// Envelope text is not valid base64
    #[error("Invalid envelope encoding: {0}")]
    Encoding(String),

    /// Envelope decodes to fewer bytes than the fixed layout requires
    #[error("Invalid envelope: expected at least {expected_min} bytes, got {actual}")]
    TooShort {
        expected_min: usize,
        actual: usize,
    },

    /// AEAD verification failed during open. A wrong password and tampered
    /// data are indistinguishable here on purpose.
    #[error("Authentication failed: wrong password or corrupted data")]
    WrongPasswordOrCorrupted,

    /// Password or plaintext was empty or blank
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// Internal cipher or key-derivation failure
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV parsing or writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A named column is missing from the input's header row
    #[error("Column not found: {name} (available: {available})")]
    ColumnNotFound {
        name: String,
        available: String,
    },
}

impl SealboxError {
    /// Check if this is a format error (undecodable or truncated envelope)
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Encoding(_) | Self::TooShort { .. })
    }

    /// Check if this is an authentication failure
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::WrongPasswordOrCorrupted)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SealboxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for SealboxError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for SealboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for sealbox operations
pub type SealboxResult<T> = Result<T, SealboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_display() {
        let err = SealboxError::TooShort {
            expected_min: 61,
            actual: 40,
        };
        assert_eq!(
            err.to_string(),
            "Invalid envelope: expected at least 61 bytes, got 40"
        );
        assert!(err.is_format());
    }

    #[test]
    fn test_auth_failure_display() {
        let err = SealboxError::WrongPasswordOrCorrupted;
        assert_eq!(
            err.to_string(),
            "Authentication failed: wrong password or corrupted data"
        );
        assert!(err.is_auth_failure());
        assert!(!err.is_format());
    }

    #[test]
    fn test_empty_input_display() {
        let err = SealboxError::EmptyInput("Password");
        assert_eq!(err.to_string(), "Password must not be empty");
    }

    #[test]
    fn test_column_not_found_display() {
        let err = SealboxError::ColumnNotFound {
            name: "token".into(),
            available: "email, password".into(),
        };
        assert_eq!(
            err.to_string(),
            "Column not found: token (available: email, password)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SealboxError = io_err.into();
        assert!(matches!(err, SealboxError::Io(_)));
    }
}
