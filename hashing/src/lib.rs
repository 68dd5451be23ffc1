//! Size-checked cryptographic hashing
//!
//! Every algorithm declares a `[min, default, max]` output-size envelope.
//! Hashing and verification validate the requested size against that
//! envelope before the digest primitive runs:
//!
//! ```
//! use cryypt_hashing::{Hash, HashError};
//!
//! let digest = Hash::sha256().hash(b"data");
//! assert_eq!(digest.len(), 32);
//! assert!(Hash::sha256().verify(b"data", digest.as_bytes()).is_ok());
//!
//! let long = Hash::blake2b().hash_with_size(b"data", 64)?;
//! assert_eq!(long.len(), 64);
//! assert!(Hash::blake2b().hash_with_size(b"data", 65).is_err());
//! # Ok::<(), HashError>(())
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod hash_result;

// Re-export error types
pub use error::{HashError, Result};

pub use api::{
    AlgorithmId, AlgorithmKind, Hash, HashAlgorithm, HashSize, Shape, constant_time_eq, shared,
};
pub use config::{AlgorithmHandle, HashConfig};
pub use hash_result::HashResult;
