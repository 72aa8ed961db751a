//! Error types for dataset decoding.

use thiserror::Error;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading organization data.
///
/// These cover only the supplier boundary (reading and decoding a dataset).
/// The derivation pipeline itself never errors: missing or malformed field
/// data is modeled as `Option::None`, not as a `DataError`.
#[derive(Debug, Error)]
pub enum DataError {
    /// JSON decoding error
    #[error("JSON decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
