//! Hash size envelopes
//!
//! Every algorithm accepts output sizes within a fixed `[min, max]` range and
//! produces `default` bytes when the caller does not ask for a size.

use crate::{HashError, Result};

/// The `[min, default, max]` triple bounding valid output lengths
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashSize {
    min: usize,
    default: usize,
    max: usize,
}

impl HashSize {
    /// Create an envelope.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < default` and `min <= default <= max`. Envelopes are
    /// fixed per algorithm, so a violation is a defect in the algorithm itself.
    #[must_use]
    pub const fn new(min: usize, default: usize, max: usize) -> Self {
        assert!(default > 0, "default hash size must be positive");
        assert!(min <= default, "minimum hash size exceeds default");
        assert!(default <= max, "default hash size exceeds maximum");
        Self { min, default, max }
    }

    /// Envelope of an algorithm with a single output size
    #[must_use]
    pub const fn fixed(size: usize) -> Self {
        Self::new(size, size, size)
    }

    /// Smallest accepted size in bytes
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Size produced when none is requested
    #[must_use]
    pub const fn default(&self) -> usize {
        self.default
    }

    /// Largest accepted size in bytes
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Whether only one output size is accepted
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Whether `size` lies within `[min, max]`
    #[must_use]
    pub const fn contains(&self, size: usize) -> bool {
        self.min <= size && size <= self.max
    }

    /// Check a requested hash size.
    ///
    /// # Errors
    ///
    /// Returns `HashError::HashSizeOutOfRange` if `size` is outside `[min, max]`.
    pub fn check(&self, size: usize) -> Result<()> {
        if self.contains(size) {
            Ok(())
        } else {
            Err(HashError::HashSizeOutOfRange {
                size,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Check the length of a caller-supplied output buffer.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidBufferSize` if `len` is outside `[min, max]`.
    pub fn check_buffer(&self, len: usize) -> Result<()> {
        if self.contains(len) {
            Ok(())
        } else {
            Err(HashError::InvalidBufferSize {
                len,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Same bounds with a different default size.
    ///
    /// # Errors
    ///
    /// Returns `HashError::HashSizeOutOfRange` if `default` is zero or outside
    /// `[min, max]`.
    pub fn with_default(self, default: usize) -> Result<Self> {
        if default == 0 || !self.contains(default) {
            return Err(HashError::HashSizeOutOfRange {
                size: default,
                min: self.min.max(1),
                max: self.max,
            });
        }
        Ok(Self { default, ..self })
    }
}
