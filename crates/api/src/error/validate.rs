//! Validation utilities for cryptographic operations

use super::types::{Error, Result};

/// Validate an exact key length
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum envelope length
pub fn min_ciphertext_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::MalformedCiphertext { context });
    }
    Ok(())
}

/// Validate that a derivation length is within the bound of the hash
pub fn derivation_length(context: &'static str, requested: usize, max: usize) -> Result<()> {
    if requested == 0 || requested > max {
        return Err(Error::Derivation { context });
    }
    Ok(())
}
