//! Digest primitive hooks implemented by every concrete algorithm

use std::fmt::Debug;
use zeroize::Zeroizing;

/// Per-algorithm digest computation and comparison.
///
/// Callers go through [`HashAlgorithm`](super::HashAlgorithm), which has
/// already checked every length against the algorithm's envelope before a
/// hook runs.
pub(crate) trait HashCore: Debug + Send + Sync {
    /// Fill `out` with `out.len()` bytes of digest over `data`
    fn hash_core(&self, data: &[u8], out: &mut [u8]);

    /// Whether the `expected.len()`-byte digest of `data` equals `expected`
    fn try_verify_core(&self, data: &[u8], expected: &[u8]) -> bool {
        let mut actual = Zeroizing::new(vec![0u8; expected.len()]);
        self.hash_core(data, &mut actual);
        constant_time_eq(&actual, expected)
    }
}

/// Constant-time comparison of two byte strings
#[must_use]
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Counting;

    impl HashCore for Counting {
        fn hash_core(&self, data: &[u8], out: &mut [u8]) {
            for (i, byte) in out.iter_mut().enumerate() {
                *byte = data.len().wrapping_add(i) as u8;
            }
        }
    }

    #[test]
    fn test_default_try_verify_core() {
        let mut expected = [0u8; 4];
        Counting.hash_core(b"abc", &mut expected);
        assert_eq!(expected, [3, 4, 5, 6]);
        assert!(Counting.try_verify_core(b"abc", &expected));
        assert!(!Counting.try_verify_core(b"abcd", &expected));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"same", b"same"));
        assert!(!constant_time_eq(b"same", b"diff"));
        assert!(!constant_time_eq(b"short", b"longer"));
    }
}
