//! BLAKE2b with a configurable digest length
//!
//! Each output length is a distinct BLAKE2b instance (the length is part of
//! the parameter block), so a 32-byte hash is not a prefix of a 64-byte one.

use super::super::hooks::HashCore;
use super::super::{AlgorithmId, HashAlgorithm, HashSize};
use crate::Result;
use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;

/// Smallest BLAKE2b digest in bytes
pub const BLAKE2B_MIN_SIZE: usize = 1;

/// Largest BLAKE2b digest in bytes
pub const BLAKE2B_MAX_SIZE: usize = 64;

const BLAKE2B_SIZE: HashSize = HashSize::new(BLAKE2B_MIN_SIZE, 32, BLAKE2B_MAX_SIZE);

#[derive(Debug)]
struct Blake2bCore;

impl HashCore for Blake2bCore {
    fn hash_core(&self, data: &[u8], out: &mut [u8]) {
        let Ok(mut hasher) = Blake2bVar::new(out.len()) else {
            unreachable!("BLAKE2b output length {} outside 1..=64", out.len());
        };
        hasher.update(data);
        if hasher.finalize_variable(out).is_err() {
            unreachable!("BLAKE2b output buffer length changed during hashing");
        }
    }
}

impl HashAlgorithm {
    /// BLAKE2b producing 32 bytes by default and accepting 1 to 64
    #[must_use]
    pub fn blake2b() -> Self {
        Self::new(AlgorithmId::Blake2b, BLAKE2B_SIZE, Blake2bCore)
    }

    /// BLAKE2b producing `hash_size` bytes by default.
    ///
    /// # Errors
    ///
    /// Returns `HashError::HashSizeOutOfRange` unless `1 <= hash_size <= 64`.
    pub fn blake2b_with_size(hash_size: usize) -> Result<Self> {
        Self::blake2b().with_default_hash_size(hash_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashError;

    #[test]
    fn test_blake2b_envelope() {
        let blake2b = HashAlgorithm::blake2b();
        assert_eq!(blake2b.min_hash_size(), 1);
        assert_eq!(blake2b.default_hash_size(), 32);
        assert_eq!(blake2b.max_hash_size(), 64);
        assert_eq!(blake2b.hash(b"data").len(), 32);
    }

    #[test]
    fn test_blake2b_bounds() {
        let blake2b = HashAlgorithm::blake2b();
        assert_eq!(blake2b.hash_with_size(b"data", 64).map(|h| h.len()).ok(), Some(64));
        assert_eq!(blake2b.hash_with_size(b"data", 1).map(|h| h.len()).ok(), Some(1));
        assert!(matches!(
            blake2b.hash_with_size(b"data", 0),
            Err(HashError::HashSizeOutOfRange { size: 0, .. })
        ));
        assert!(matches!(
            blake2b.hash_with_size(b"data", 65),
            Err(HashError::HashSizeOutOfRange { size: 65, .. })
        ));
    }

    #[test]
    fn test_output_length_is_a_parameter() {
        let blake2b = HashAlgorithm::blake2b();
        let short = blake2b.hash_with_size(b"data", 32).expect("valid size");
        let long = blake2b.hash_with_size(b"data", 64).expect("valid size");
        assert_ne!(short.as_bytes(), &long.as_bytes()[..32]);
    }

    #[test]
    fn test_blake2b_with_size() {
        let blake2b = HashAlgorithm::blake2b_with_size(64).expect("64 is valid");
        let expected = HashAlgorithm::blake2b()
            .hash_with_size(b"data", 64)
            .expect("valid size");
        assert_eq!(blake2b.hash(b"data"), expected);
        assert!(HashAlgorithm::blake2b_with_size(0).is_err());
        assert!(HashAlgorithm::blake2b_with_size(65).is_err());
    }
}
