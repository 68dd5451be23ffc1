//! The hash algorithm contract
//!
//! [`HashAlgorithm`] checks every requested or supplied size against the
//! algorithm's [`HashSize`] envelope and only then hands off to the digest
//! hooks. No hook ever sees a length outside the envelope.

use super::hooks::HashCore;
use super::{AlgorithmId, HashSize};
use crate::{HashError, HashResult, Result};
use std::fmt;
use tracing::{debug, trace};

/// A hash algorithm with a bounded set of output sizes
pub struct HashAlgorithm {
    id: AlgorithmId,
    size: HashSize,
    core: Box<dyn HashCore>,
}

impl HashAlgorithm {
    pub(crate) fn new(id: AlgorithmId, size: HashSize, core: impl HashCore + 'static) -> Self {
        Self {
            id,
            size,
            core: Box::new(core),
        }
    }

    /// Same algorithm producing `hash_size` bytes by default.
    ///
    /// # Errors
    ///
    /// Returns `HashError::HashSizeOutOfRange` if `hash_size` is outside the
    /// algorithm's envelope.
    pub fn with_default_hash_size(self, hash_size: usize) -> Result<Self> {
        let size = self.size.with_default(hash_size)?;
        Ok(Self { size, ..self })
    }

    /// Which algorithm this is
    #[must_use]
    pub fn id(&self) -> AlgorithmId {
        self.id
    }

    /// The `[min, default, max]` envelope
    #[must_use]
    pub fn hash_size(&self) -> HashSize {
        self.size
    }

    /// Smallest accepted hash size in bytes
    #[must_use]
    pub fn min_hash_size(&self) -> usize {
        self.size.min()
    }

    /// Hash size used by [`hash`](Self::hash)
    #[must_use]
    pub fn default_hash_size(&self) -> usize {
        self.size.default()
    }

    /// Largest accepted hash size in bytes
    #[must_use]
    pub fn max_hash_size(&self) -> usize {
        self.size.max()
    }

    /// Hash `data` to the default size
    #[must_use]
    pub fn hash(&self, data: &[u8]) -> HashResult {
        let mut out = vec![0u8; self.size.default()];
        self.core.hash_core(data, &mut out);
        HashResult::new(out)
    }

    /// Hash `data` to exactly `hash_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns `HashError::HashSizeOutOfRange` if `hash_size` is outside
    /// `[min_hash_size, max_hash_size]`.
    pub fn hash_with_size(&self, data: &[u8], hash_size: usize) -> Result<HashResult> {
        self.size.check(hash_size).inspect_err(|_| {
            trace!(algorithm = %self.id, hash_size, "Rejected hash size");
        })?;
        let mut out = vec![0u8; hash_size];
        self.core.hash_core(data, &mut out);
        Ok(HashResult::new(out))
    }

    /// Hash `data` into `out`, producing `out.len()` bytes.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidBufferSize` if `out.len()` is outside
    /// `[min_hash_size, max_hash_size]`. `out` is left untouched.
    pub fn hash_into(&self, data: &[u8], out: &mut [u8]) -> Result<()> {
        self.size.check_buffer(out.len()).inspect_err(|_| {
            trace!(algorithm = %self.id, len = out.len(), "Rejected output buffer");
        })?;
        self.core.hash_core(data, out);
        Ok(())
    }

    /// Whether `expected` is the hash of `data`.
    ///
    /// An `expected` whose length is outside the envelope can never match and
    /// yields `false`.
    #[must_use]
    pub fn try_verify(&self, data: &[u8], expected: &[u8]) -> bool {
        self.size.contains(expected.len()) && self.core.try_verify_core(data, expected)
    }

    /// Check that `expected` is the hash of `data`.
    ///
    /// # Errors
    ///
    /// Returns `HashError::HashSizeOutOfRange` if `expected.len()` is outside
    /// the envelope, or `HashError::VerificationFailed` if the hashes differ.
    pub fn verify(&self, data: &[u8], expected: &[u8]) -> Result<()> {
        self.size.check(expected.len())?;
        if self.core.try_verify_core(data, expected) {
            Ok(())
        } else {
            debug!(algorithm = %self.id, hash_size = expected.len(), "Hash verification failed");
            Err(HashError::VerificationFailed)
        }
    }
}

impl fmt::Debug for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashAlgorithm")
            .field("id", &self.id)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
