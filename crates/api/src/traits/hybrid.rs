//! Trait definitions for hybrid public-key encryption.

use crate::error::Result;

/// Sender side of a hybrid encryption scheme.
pub trait HybridEncrypt: Send + Sync {
    /// Encrypts `plaintext` to the recipient this instance was built for.
    ///
    /// # Arguments
    /// * `plaintext` - The message to encrypt.
    /// * `context_info` - Application context bound into the key derivation.
    ///   Decryption only succeeds with the identical byte string.
    ///
    /// # Returns
    /// The complete envelope.
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}

/// Recipient side of a hybrid encryption scheme.
pub trait HybridDecrypt: Send + Sync {
    /// Decrypts an envelope produced by the matching [`HybridEncrypt`].
    ///
    /// # Arguments
    /// * `ciphertext` - The complete envelope.
    /// * `context_info` - The context string used at encryption time.
    ///
    /// # Returns
    /// The plaintext, or a single opaque failure.
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}
