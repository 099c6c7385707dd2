//! Error types for seed-data loading.

use thiserror::Error;

/// Errors produced while loading or writing seed fixtures.
///
/// The store layer itself has no error type; fixture I/O is the one place
/// in the workspace where failures are typed.
#[derive(Error, Debug)]
pub enum SeedError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// A fixture parsed but violates a store invariant
    #[error("Invalid seed data: {0}")]
    Invalid(String),
}

impl SeedError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Invalid error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SeedError>`.
pub type Result<T> = std::result::Result<T, SeedError>;
