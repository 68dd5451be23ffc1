//! Configuration for selecting and parameterizing a hash algorithm

use crate::api::{shared, AlgorithmId, AlgorithmKind, HashAlgorithm};
use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use tracing::debug;

/// Hash algorithm selection, typically read from a JSON document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashConfig {
    /// Algorithm name, e.g. `"blake2b"` or `"sha3-256"`
    #[serde(default)]
    pub algorithm: AlgorithmId,
    /// Default output size in bytes (must lie within the algorithm's envelope)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_size: Option<usize>,
    /// Hex-encoded cSHAKE function name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    /// Hex-encoded cSHAKE customization string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<String>,
}

/// An algorithm built from configuration: the shared instance when the
/// configuration asks for nothing beyond the defaults, an owned one otherwise
#[derive(Debug)]
pub enum AlgorithmHandle {
    /// The process-wide instance
    Shared(&'static HashAlgorithm),
    /// A dedicated instance
    Owned(HashAlgorithm),
}

impl AlgorithmHandle {
    /// Whether this is the process-wide instance
    #[must_use]
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }
}

impl Deref for AlgorithmHandle {
    type Target = HashAlgorithm;

    fn deref(&self) -> &HashAlgorithm {
        match self {
            Self::Shared(algorithm) => algorithm,
            Self::Owned(algorithm) => algorithm,
        }
    }
}

impl HashConfig {
    /// Configuration for `algorithm` with its defaults
    #[must_use]
    pub fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Config` if the document is malformed, names an
    /// unknown algorithm, or carries unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Config` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build the configured algorithm.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if cSHAKE parameters are given
    /// for another algorithm or are not valid hex, and
    /// `HashError::HashSizeOutOfRange` if `hash_size` is outside the
    /// algorithm's envelope.
    pub fn build(&self) -> Result<AlgorithmHandle> {
        let function_name = decode_hex("function_name", self.function_name.as_deref())?;
        let customization = decode_hex("customization", self.customization.as_deref())?;
        let has_parameters = function_name.is_some() || customization.is_some();

        if has_parameters && !self.algorithm.is_customizable() {
            return Err(HashError::invalid_parameters(format!(
                "{} does not take a function name or customization string",
                self.algorithm
            )));
        }

        let algorithm = if let Some(kind) = AlgorithmKind::from_id(self.algorithm) {
            let base = shared(kind);
            if self.hash_size.map_or(true, |size| size == base.default_hash_size()) {
                return Ok(AlgorithmHandle::Shared(base));
            }
            kind.construct()
        } else {
            let function_name = function_name.unwrap_or_default();
            let customization = customization.unwrap_or_default();
            if self.algorithm == AlgorithmId::CShake128 {
                HashAlgorithm::cshake128(&function_name, &customization)
            } else {
                HashAlgorithm::cshake256(&function_name, &customization)
            }
        };

        let algorithm = match self.hash_size {
            Some(size) => algorithm.with_default_hash_size(size)?,
            None => algorithm,
        };
        debug!(
            algorithm = %algorithm.id(),
            hash_size = algorithm.default_hash_size(),
            "Built configured hash algorithm"
        );
        Ok(AlgorithmHandle::Owned(algorithm))
    }
}

fn decode_hex(field: &str, value: Option<&str>) -> Result<Option<Vec<u8>>> {
    value
        .map(|hex_value| {
            hex::decode(hex_value)
                .map_err(|e| HashError::invalid_parameters(format!("{field} is not valid hex: {e}")))
        })
        .transpose()
}
