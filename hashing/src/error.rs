//! Error handling for hashing operations

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// A requested hash size lies outside the algorithm's envelope
    #[error("Hash size {size} out of range: expected {min}..={max}")]
    HashSizeOutOfRange {
        /// The rejected size
        size: usize,
        /// Smallest size the algorithm accepts
        min: usize,
        /// Largest size the algorithm accepts
        max: usize,
    },

    /// A caller-supplied output buffer has a length outside the envelope
    #[error("Invalid output buffer length {len}: expected {min}..={max}")]
    InvalidBufferSize {
        /// Length of the rejected buffer
        len: usize,
        /// Smallest size the algorithm accepts
        min: usize,
        /// Largest size the algorithm accepts
        max: usize,
    },

    /// The computed hash does not match the expected hash
    #[error("Hash verification failed")]
    VerificationFailed,

    /// The named algorithm is not known
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Invalid configuration parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The configuration document could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl HashError {
    /// Create an `invalid_parameters` error
    #[must_use]
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
