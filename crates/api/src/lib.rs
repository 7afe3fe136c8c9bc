//! Public API traits and types for the ecies-hkdf library
//!
//! This crate provides the public API surface shared by every ecies-hkdf
//! crate: the error taxonomy, the algorithm identifiers carried in key
//! records, and the capability traits the hybrid scheme is built from.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ValidationError};
pub use types::{CurveType, HashType, PointFormat};

pub use traits::{Aead, HybridDecrypt, HybridEncrypt};
