//! Capability traits for the hybrid encryption scheme

pub mod aead;
pub mod hybrid;

pub use aead::Aead;
pub use hybrid::{HybridDecrypt, HybridEncrypt};
