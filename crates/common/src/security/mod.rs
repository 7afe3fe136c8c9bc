//! Security primitives and memory safety utilities
//!
//! This module provides foundational types for handling sensitive
//! cryptographic material: private scalars, shared secrets and derived keys.

pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, SecretVec};
