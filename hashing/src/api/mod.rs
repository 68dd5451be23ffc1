//! Size-checked hashing API
//!
//! Usage: `Hash::sha256().hash(data)` or `Hash::blake2b().hash_with_size(data, 64)?`

pub mod algorithm;
pub mod algorithm_id;
pub mod algorithms;
pub mod hash_entry;
mod hooks;
pub mod registry;
pub mod size;

pub use algorithm::HashAlgorithm;
pub use algorithm_id::{AlgorithmId, Shape};
pub use algorithms::{BLAKE2B_MAX_SIZE, BLAKE2B_MIN_SIZE, MAX_XOF_SIZE};
pub use hash_entry::Hash;
pub use hooks::constant_time_eq;
pub use registry::{shared, AlgorithmKind};
pub use size::HashSize;
