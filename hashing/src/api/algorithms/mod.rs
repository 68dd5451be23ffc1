//! Concrete hash algorithms
//!
//! Each module fixes an algorithm's size envelope and wires the digest hooks
//! to a RustCrypto primitive.

pub mod blake2b;
pub mod fixed;
pub mod shake;

pub use blake2b::{BLAKE2B_MAX_SIZE, BLAKE2B_MIN_SIZE};
pub use shake::MAX_XOF_SIZE;
