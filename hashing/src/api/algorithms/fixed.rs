//! Fixed-size SHA-2 and SHA-3 digests

use super::super::hooks::{constant_time_eq, HashCore};
use super::super::{AlgorithmId, HashAlgorithm, HashSize};
use digest::Digest;
use std::fmt;
use std::marker::PhantomData;

/// Hooks for any digest with a single output size
pub(crate) struct FixedDigest<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> FixedDigest<D> {
    const fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for FixedDigest<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FixedDigest")
    }
}

impl<D: Digest + 'static> HashCore for FixedDigest<D> {
    fn hash_core(&self, data: &[u8], out: &mut [u8]) {
        out.copy_from_slice(&D::digest(data));
    }

    // The digest lands in a stack array, no scratch buffer needed.
    fn try_verify_core(&self, data: &[u8], expected: &[u8]) -> bool {
        constant_time_eq(&D::digest(data), expected)
    }
}

fn fixed<D: Digest + 'static>(id: AlgorithmId) -> HashAlgorithm {
    let size = HashSize::fixed(<D as Digest>::output_size());
    HashAlgorithm::new(id, size, FixedDigest::<D>::new())
}

impl HashAlgorithm {
    /// SHA-256, 32 bytes
    #[must_use]
    pub fn sha256() -> Self {
        fixed::<sha2::Sha256>(AlgorithmId::Sha256)
    }

    /// SHA-384, 48 bytes
    #[must_use]
    pub fn sha384() -> Self {
        fixed::<sha2::Sha384>(AlgorithmId::Sha384)
    }

    /// SHA-512, 64 bytes
    #[must_use]
    pub fn sha512() -> Self {
        fixed::<sha2::Sha512>(AlgorithmId::Sha512)
    }

    /// SHA3-256, 32 bytes
    #[must_use]
    pub fn sha3_256() -> Self {
        fixed::<sha3::Sha3_256>(AlgorithmId::Sha3_256)
    }

    /// SHA3-384, 48 bytes
    #[must_use]
    pub fn sha3_384() -> Self {
        fixed::<sha3::Sha3_384>(AlgorithmId::Sha3_384)
    }

    /// SHA3-512, 64 bytes
    #[must_use]
    pub fn sha3_512() -> Self {
        fixed::<sha3::Sha3_512>(AlgorithmId::Sha3_512)
    }
}
