//! Algorithm identities and their canonical names

use crate::HashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a hash algorithm family
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmId {
    /// BLAKE2b with configurable digest length
    #[default]
    #[serde(rename = "blake2b")]
    Blake2b,
    /// SHA-256
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA-384
    #[serde(rename = "sha384")]
    Sha384,
    /// SHA-512
    #[serde(rename = "sha512")]
    Sha512,
    /// SHA3-256
    #[serde(rename = "sha3-256", alias = "sha3_256")]
    Sha3_256,
    /// SHA3-384
    #[serde(rename = "sha3-384", alias = "sha3_384")]
    Sha3_384,
    /// SHA3-512
    #[serde(rename = "sha3-512", alias = "sha3_512")]
    Sha3_512,
    /// SHAKE128 extendable-output function
    #[serde(rename = "shake128")]
    Shake128,
    /// SHAKE256 extendable-output function
    #[serde(rename = "shake256")]
    Shake256,
    /// Customizable SHAKE128
    #[serde(rename = "cshake128")]
    CShake128,
    /// Customizable SHAKE256
    #[serde(rename = "cshake256")]
    CShake256,
}

/// Output-size shape of an algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Exactly one output size
    Fixed,
    /// A range of output sizes
    Variable,
}

impl AlgorithmId {
    /// Every known algorithm
    pub const ALL: [AlgorithmId; 11] = [
        Self::Blake2b,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Shake128,
        Self::Shake256,
        Self::CShake128,
        Self::CShake256,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blake2b => "blake2b",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
            Self::Shake128 => "shake128",
            Self::Shake256 => "shake256",
            Self::CShake128 => "cshake128",
            Self::CShake256 => "cshake256",
        }
    }

    /// Whether the algorithm produces one or many output sizes
    #[must_use]
    pub const fn shape(self) -> Shape {
        match self {
            Self::Sha256
            | Self::Sha384
            | Self::Sha512
            | Self::Sha3_256
            | Self::Sha3_384
            | Self::Sha3_512 => Shape::Fixed,
            Self::Blake2b
            | Self::Shake128
            | Self::Shake256
            | Self::CShake128
            | Self::CShake256 => Shape::Variable,
        }
    }

    /// Whether the algorithm takes a function name and customization string
    #[must_use]
    pub const fn is_customizable(self) -> bool {
        matches!(self, Self::CShake128 | Self::CShake256)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|id| id.name() == normalized)
            .ok_or_else(|| HashError::UnsupportedAlgorithm(s.to_string()))
    }
}
