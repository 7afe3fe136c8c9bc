//! Trait definition for keyed AEAD instances.

use crate::error::Result;

/// An AEAD primitive already bound to its key.
///
/// Implementations choose their own nonces and embed them in the ciphertext,
/// so `seal` output is self-contained and `open` needs nothing else.
pub trait Aead: Send + Sync {
    /// Encrypts and authenticates `plaintext`, authenticating
    /// `associated_data` as well.
    fn seal(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;

    /// Verifies and decrypts a ciphertext produced by [`Aead::seal`].
    ///
    /// Any authentication failure is reported as
    /// [`Error::DecryptionFailed`](crate::Error::DecryptionFailed).
    fn open(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;
}
