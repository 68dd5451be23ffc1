//! Entry point for the shared hash algorithms

use super::registry::{shared, AlgorithmKind};
use super::HashAlgorithm;

/// Entry point for hash operations
///
/// Parameterless algorithms return their process-wide shared instance.
pub struct Hash;

impl Hash {
    /// Shared BLAKE2b (1 to 64 bytes, 32 by default)
    #[must_use]
    pub fn blake2b() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Blake2b)
    }

    /// Shared SHA-256
    #[must_use]
    pub fn sha256() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Sha256)
    }

    /// Shared SHA-384
    #[must_use]
    pub fn sha384() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Sha384)
    }

    /// Shared SHA-512
    #[must_use]
    pub fn sha512() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Sha512)
    }

    /// Shared SHA3-256
    #[must_use]
    pub fn sha3_256() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Sha3_256)
    }

    /// Shared SHA3-384
    #[must_use]
    pub fn sha3_384() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Sha3_384)
    }

    /// Shared SHA3-512
    #[must_use]
    pub fn sha3_512() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Sha3_512)
    }

    /// Shared SHAKE128
    #[must_use]
    pub fn shake128() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Shake128)
    }

    /// Shared SHAKE256
    #[must_use]
    pub fn shake256() -> &'static HashAlgorithm {
        shared(AlgorithmKind::Shake256)
    }

    /// New cSHAKE128 instance for a function name and customization string
    #[must_use]
    pub fn cshake128(function_name: &[u8], customization: &[u8]) -> HashAlgorithm {
        HashAlgorithm::cshake128(function_name, customization)
    }

    /// New cSHAKE256 instance for a function name and customization string
    #[must_use]
    pub fn cshake256(function_name: &[u8], customization: &[u8]) -> HashAlgorithm {
        HashAlgorithm::cshake256(function_name, customization)
    }
}
