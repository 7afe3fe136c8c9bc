//! Common implementations and shared functionality for the ecies-hkdf library
//!
//! This crate provides the secret containers every other crate stores key
//! material in.

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecretVec};
