//! Data-encapsulation mechanism selection
//!
//! A [`DemParams`] descriptor is resolved once, at primitive construction,
//! into a [`DemHandle`]. The handle reports the symmetric key length the KEM
//! must derive and turns each freshly derived key into a keyed [`Aead`].
//!
//! Supported descriptors:
//!
//! | Descriptor          | Key length                      | DEM ciphertext               |
//! |---------------------|---------------------------------|------------------------------|
//! | `AesGcm`            | 16 or 32                        | iv(12) ‖ ct ‖ tag(16)        |
//! | `ChaCha20Poly1305`  | 32                              | nonce(12) ‖ ct ‖ tag(16)     |
//! | `XChaCha20Poly1305` | 32                              | nonce(24) ‖ ct ‖ tag(16)     |
//! | `AesCtrHmac`        | aes_key_size + hmac_key_size    | iv ‖ ct ‖ truncated tag      |

use crate::kem::SymmetricKey;
use ecies_hkdf_api::error::validate;
use ecies_hkdf_api::{Aead, Error, HashType, Result};
use ecies_hkdf_params::utils::symmetric::{
    AES128_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, AES_CTR_MIN_IV_SIZE, CHACHA20_KEY_SIZE,
    HMAC_MIN_KEY_SIZE, HMAC_MIN_TAG_SIZE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod ctr_hmac;
mod random_nonce;

use aes_gcm::{Aes128Gcm, Aes256Gcm};
use chacha20poly1305::{ChaCha20Poly1305, XChaCha20Poly1305};
use ctr_hmac::AesCtrHmac;
use random_nonce::RandomNonceAead;

/// Symmetric algorithm descriptor carried in the key parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DemParams {
    /// AES-GCM with a 12-byte random IV and a 16-byte tag
    AesGcm { key_size: usize },
    /// ChaCha20-Poly1305 (RFC 8439)
    ChaCha20Poly1305,
    /// XChaCha20-Poly1305 with a 24-byte random nonce
    XChaCha20Poly1305,
    /// AES-CTR encrypt-then-HMAC
    AesCtrHmac {
        aes_key_size: usize,
        iv_size: usize,
        hmac_key_size: usize,
        hmac_hash: HashType,
        tag_size: usize,
    },
}

type AeadBuilder = fn(&DemParams, &[u8]) -> Result<Box<dyn Aead>>;

/// A resolved DEM: required key length plus a factory for keyed AEADs
#[derive(Clone)]
pub struct DemHandle {
    params: DemParams,
    name: &'static str,
    key_size: usize,
    build: AeadBuilder,
}

impl DemHandle {
    /// Looks the descriptor up among the supported algorithms.
    ///
    /// Any descriptor outside the table, including a supported algorithm with
    /// out-of-range sizes, is [`Error::UnsupportedDem`].
    pub fn resolve(params: &DemParams) -> Result<Self> {
        let (name, key_size, build): (&'static str, Option<usize>, AeadBuilder) = match params {
            DemParams::AesGcm { key_size } => ("AES-GCM", aes_gcm_key_size(*key_size), build_aes_gcm),
            DemParams::ChaCha20Poly1305 => (
                "ChaCha20-Poly1305",
                Some(CHACHA20_KEY_SIZE),
                build_chacha20_poly1305,
            ),
            DemParams::XChaCha20Poly1305 => (
                "XChaCha20-Poly1305",
                Some(CHACHA20_KEY_SIZE),
                build_xchacha20_poly1305,
            ),
            DemParams::AesCtrHmac {
                aes_key_size,
                iv_size,
                hmac_key_size,
                hmac_hash,
                tag_size,
            } => (
                "AES-CTR-HMAC",
                aes_ctr_hmac_key_size(*aes_key_size, *iv_size, *hmac_key_size, *hmac_hash, *tag_size),
                build_aes_ctr_hmac,
            ),
        };
        let key_size = key_size.ok_or(Error::UnsupportedDem { context: name })?;
        Ok(Self {
            params: params.clone(),
            name,
            key_size,
            build,
        })
    }

    /// Number of symmetric key bytes the KEM must derive.
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &DemParams {
        &self.params
    }

    /// Binds a derived key to a fresh AEAD instance.
    pub fn build_aead(&self, key: &SymmetricKey) -> Result<Box<dyn Aead>> {
        validate::key_length(self.name, key.len(), self.key_size)?;
        (self.build)(&self.params, key.as_slice())
    }
}

impl core::fmt::Debug for DemHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DemHandle")
            .field("name", &self.name)
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}

fn aes_gcm_key_size(key_size: usize) -> Option<usize> {
    matches!(key_size, AES128_KEY_SIZE | AES256_KEY_SIZE).then_some(key_size)
}

fn aes_ctr_hmac_key_size(
    aes_key_size: usize,
    iv_size: usize,
    hmac_key_size: usize,
    hmac_hash: HashType,
    tag_size: usize,
) -> Option<usize> {
    let supported = matches!(aes_key_size, AES128_KEY_SIZE | AES256_KEY_SIZE)
        && (AES_CTR_MIN_IV_SIZE..=AES_BLOCK_SIZE).contains(&iv_size)
        && hmac_key_size >= HMAC_MIN_KEY_SIZE
        && (HMAC_MIN_TAG_SIZE..=hmac_hash.output_size()).contains(&tag_size);
    aes_key_size
        .checked_add(hmac_key_size)
        .filter(|_| supported)
}

fn build_aes_gcm(_: &DemParams, key: &[u8]) -> Result<Box<dyn Aead>> {
    if key.len() == AES128_KEY_SIZE {
        Ok(Box::new(RandomNonceAead::<Aes128Gcm>::new("AES-128-GCM", key)?))
    } else {
        Ok(Box::new(RandomNonceAead::<Aes256Gcm>::new("AES-256-GCM", key)?))
    }
}

fn build_chacha20_poly1305(_: &DemParams, key: &[u8]) -> Result<Box<dyn Aead>> {
    Ok(Box::new(RandomNonceAead::<ChaCha20Poly1305>::new(
        "ChaCha20-Poly1305",
        key,
    )?))
}

fn build_xchacha20_poly1305(_: &DemParams, key: &[u8]) -> Result<Box<dyn Aead>> {
    Ok(Box::new(RandomNonceAead::<XChaCha20Poly1305>::new(
        "XChaCha20-Poly1305",
        key,
    )?))
}

fn build_aes_ctr_hmac(params: &DemParams, key: &[u8]) -> Result<Box<dyn Aead>> {
    match params {
        DemParams::AesCtrHmac {
            aes_key_size,
            iv_size,
            hmac_hash,
            tag_size,
            ..
        } => Ok(Box::new(AesCtrHmac::new(
            key,
            *aes_key_size,
            *iv_size,
            *hmac_hash,
            *tag_size,
        )?)),
        _ => Err(Error::UnsupportedDem {
            context: "AES-CTR-HMAC",
        }),
    }
}
