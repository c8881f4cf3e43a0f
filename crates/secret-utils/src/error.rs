//! Error types for the secret-utils crate.

use thiserror::Error;

/// Result type alias for secret-utils operations.
pub type Result<T> = std::result::Result<T, SecretError>;

/// Errors that can occur during secret-utils operations.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The operating system's entropy source was unavailable or failed.
    #[error("random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),

    /// A numeric range was malformed (`min` greater than `max`).
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound that was requested
        min: i64,
        /// Upper bound that was requested
        max: i64,
    },

    /// A digest algorithm name not known to this crate.
    #[error("unsupported digest algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    /// An encoding name not known to this crate.
    #[error("unsupported encoding: {0:?}")]
    UnsupportedEncoding(String),
}
