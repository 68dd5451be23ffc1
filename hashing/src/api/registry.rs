//! Process-wide shared algorithm instances
//!
//! Each [`AlgorithmKind`] owns one lazily published slot. Threads racing on
//! first use may each build a candidate; the first compare-and-set wins and
//! the others drop theirs. After publication a lookup is a single atomic load.

use super::{AlgorithmId, HashAlgorithm};
use once_cell::race::OnceBox;
use tracing::debug;

/// Algorithms with a process-wide shared instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// BLAKE2b, 32-byte default
    Blake2b,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
    /// SHAKE128, 32-byte default
    Shake128,
    /// SHAKE256, 64-byte default
    Shake256,
}

const KIND_COUNT: usize = 9;

static SLOTS: [OnceBox<HashAlgorithm>; KIND_COUNT] = [const { OnceBox::new() }; KIND_COUNT];

impl AlgorithmKind {
    /// Every registry-backed algorithm
    pub const ALL: [AlgorithmKind; KIND_COUNT] = [
        Self::Blake2b,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Shake128,
        Self::Shake256,
    ];

    /// Identity of the algorithm behind this slot
    #[must_use]
    pub const fn id(self) -> AlgorithmId {
        match self {
            Self::Blake2b => AlgorithmId::Blake2b,
            Self::Sha256 => AlgorithmId::Sha256,
            Self::Sha384 => AlgorithmId::Sha384,
            Self::Sha512 => AlgorithmId::Sha512,
            Self::Sha3_256 => AlgorithmId::Sha3_256,
            Self::Sha3_384 => AlgorithmId::Sha3_384,
            Self::Sha3_512 => AlgorithmId::Sha3_512,
            Self::Shake128 => AlgorithmId::Shake128,
            Self::Shake256 => AlgorithmId::Shake256,
        }
    }

    /// Registry slot for an algorithm, if it has one
    #[must_use]
    pub const fn from_id(id: AlgorithmId) -> Option<Self> {
        match id {
            AlgorithmId::Blake2b => Some(Self::Blake2b),
            AlgorithmId::Sha256 => Some(Self::Sha256),
            AlgorithmId::Sha384 => Some(Self::Sha384),
            AlgorithmId::Sha512 => Some(Self::Sha512),
            AlgorithmId::Sha3_256 => Some(Self::Sha3_256),
            AlgorithmId::Sha3_384 => Some(Self::Sha3_384),
            AlgorithmId::Sha3_512 => Some(Self::Sha3_512),
            AlgorithmId::Shake128 => Some(Self::Shake128),
            AlgorithmId::Shake256 => Some(Self::Shake256),
            AlgorithmId::CShake128 | AlgorithmId::CShake256 => None,
        }
    }

    /// Build a new, unshared instance
    #[must_use]
    pub fn construct(self) -> HashAlgorithm {
        match self {
            Self::Blake2b => HashAlgorithm::blake2b(),
            Self::Sha256 => HashAlgorithm::sha256(),
            Self::Sha384 => HashAlgorithm::sha384(),
            Self::Sha512 => HashAlgorithm::sha512(),
            Self::Sha3_256 => HashAlgorithm::sha3_256(),
            Self::Sha3_384 => HashAlgorithm::sha3_384(),
            Self::Sha3_512 => HashAlgorithm::sha3_512(),
            Self::Shake128 => HashAlgorithm::shake128(),
            Self::Shake256 => HashAlgorithm::shake256(),
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// The process-wide instance for `kind`, built on first use
#[must_use]
pub fn shared(kind: AlgorithmKind) -> &'static HashAlgorithm {
    SLOTS[kind.slot()].get_or_init(|| {
        debug!(algorithm = %kind.id(), "Constructing shared hash algorithm");
        Box::new(kind.construct())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_distinct_and_stable() {
        for kind in AlgorithmKind::ALL {
            let first = shared(kind);
            assert!(std::ptr::eq(first, shared(kind)));
            assert_eq!(first.id(), kind.id());
        }
        assert!(!std::ptr::eq(
            shared(AlgorithmKind::Sha256),
            shared(AlgorithmKind::Sha3_256)
        ));
    }

    #[test]
    fn test_id_mapping() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(AlgorithmKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(AlgorithmKind::from_id(AlgorithmId::CShake128), None);
        assert_eq!(AlgorithmKind::from_id(AlgorithmId::CShake256), None);
    }

    #[test]
    fn test_construct_is_unshared() {
        let owned = AlgorithmKind::Blake2b.construct();
        assert!(!std::ptr::eq(&owned, shared(AlgorithmKind::Blake2b)));
        assert_eq!(owned.hash(b"x"), shared(AlgorithmKind::Blake2b).hash(b"x"));
    }
}
