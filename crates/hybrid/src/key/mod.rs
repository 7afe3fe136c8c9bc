//! Key records as handed over by a key source
//!
//! These are already-decoded structured fields; no persisted format is parsed
//! here. [`validate`] holds the structural checks applied before a record is
//! used.

use crate::dem::DemParams;
use crate::ec::EcPrivateKey;
use ecies_hkdf_api::{CurveType, HashType, PointFormat};
use ecies_hkdf_common::SecretVec;
use rand::{CryptoRng, RngCore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod validate;

pub use validate::{validate_private_key, validate_public_key};

/// Parameters of the asymmetric half
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KemParams {
    pub curve: CurveType,
    pub hkdf_hash: HashType,
    /// May be empty, which is equivalent to HKDF's all-zero default salt
    pub hkdf_salt: Vec<u8>,
}

/// Complete scheme parameters carried by a public key
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EciesParams {
    pub kem_params: KemParams,
    pub dem_params: DemParams,
    pub point_format: PointFormat,
}

/// Recipient public key record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EciesPublicKey {
    pub params: Option<EciesParams>,
    /// Big-endian affine x-coordinate, or the raw X25519 public value
    pub x: Vec<u8>,
    /// Big-endian affine y-coordinate; empty for X25519
    pub y: Vec<u8>,
}

impl EciesPublicKey {
    pub fn params(&self) -> Option<&EciesParams> {
        self.params.as_ref()
    }
}

/// Recipient private key record
#[derive(Debug, Clone)]
pub struct EciesPrivateKey {
    pub public_key: Option<EciesPublicKey>,
    /// Big-endian scalar for NIST curves, raw 32 bytes for X25519
    pub key_value: SecretVec,
}

impl EciesPrivateKey {
    /// Generates a consistent record for `params`: a fresh private scalar
    /// together with the coordinates of its public point.
    pub fn generate<R: RngCore + CryptoRng>(params: EciesParams, rng: &mut R) -> Self {
        let secret = EcPrivateKey::generate(params.kem_params.curve, rng);
        let (x, y) = secret.public_key().coordinates();
        Self {
            public_key: Some(EciesPublicKey {
                params: Some(params),
                x,
                y,
            }),
            key_value: secret.to_bytes(),
        }
    }

    pub fn public_key(&self) -> Option<&EciesPublicKey> {
        self.public_key.as_ref()
    }

    pub fn params(&self) -> Option<&EciesParams> {
        self.public_key.as_ref().and_then(EciesPublicKey::params)
    }
}
