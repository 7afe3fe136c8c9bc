// File: crates/hybrid/src/kem/mod.rs

//! Key-encapsulation half of the scheme
//!
//! The sender side generates an ephemeral key pair, serializes its public
//! point as the KEM header and derives the symmetric key from the
//! Diffie-Hellman secret. The recipient side parses that header, repeats the
//! agreement with its long-term scalar and derives the same key.
//!
//! Derivation is HKDF with IKM = `kem_header ‖ shared_secret`, the
//! recipient's salt and the caller's context info.

use crate::error::derivation;
use ecies_hkdf_api::error::validate;
use ecies_hkdf_api::{HashType, Result};
use ecies_hkdf_common::SecretVec;
use hkdf::Hkdf;
use sha2::{Sha224, Sha256, Sha384, Sha512};

mod recipient;
mod sender;

pub use recipient::RecipientKem;
pub use sender::{KemKey, SenderKem};

/// Symmetric key derived by the KEM; wiped on drop
pub struct SymmetricKey(SecretVec);

impl SymmetricKey {
    pub fn new(bytes: SecretVec) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SymmetricKey {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl core::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SymmetricKey(len={}, [REDACTED])", self.len())
    }
}

/// HKDF-extract-then-expand over `kem_bytes ‖ shared_secret`.
///
/// Fails with [`Error::Derivation`](ecies_hkdf_api::Error::Derivation) when
/// `key_size` is zero or above 255 hash blocks.
pub fn derive_symmetric_key(
    hash: HashType,
    kem_bytes: &[u8],
    shared_secret: &SecretVec,
    salt: &[u8],
    info: &[u8],
    key_size: usize,
) -> Result<SymmetricKey> {
    validate::derivation_length("HKDF output length", key_size, hash.max_hkdf_output())?;

    let mut ikm = SecretVec::new(Vec::with_capacity(kem_bytes.len() + shared_secret.len()));
    ikm.extend_from_slice(kem_bytes);
    ikm.extend_from_slice(shared_secret.as_slice());

    let mut okm = SecretVec::zeroed(key_size);
    let ikm = ikm.as_slice();
    match hash {
        HashType::Sha224 => Hkdf::<Sha224>::new(Some(salt), ikm).expand(info, okm.as_mut_slice()),
        HashType::Sha256 => Hkdf::<Sha256>::new(Some(salt), ikm).expand(info, okm.as_mut_slice()),
        HashType::Sha384 => Hkdf::<Sha384>::new(Some(salt), ikm).expand(info, okm.as_mut_slice()),
        HashType::Sha512 => Hkdf::<Sha512>::new(Some(salt), ikm).expand(info, okm.as_mut_slice()),
    }
    .map_err(derivation("HKDF expand"))?;

    Ok(SymmetricKey(okm))
}
