//! Sender side: fresh ephemeral key per encapsulation.

use super::{derive_symmetric_key, SymmetricKey};
use crate::ec::{EcPublicKey, EphemeralKeyPair};
use ecies_hkdf_api::{CurveType, HashType, PointFormat, Result};
use rand::{CryptoRng, RngCore};

/// Result of one encapsulation
#[derive(Debug)]
pub struct KemKey {
    /// Serialized ephemeral public point; the envelope header
    pub kem_bytes: Vec<u8>,
    pub symmetric_key: SymmetricKey,
}

/// Recipient public point the sender encapsulates to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SenderKem {
    recipient: EcPublicKey,
}

impl SenderKem {
    pub fn new(recipient: EcPublicKey) -> Self {
        Self { recipient }
    }

    pub fn curve(&self) -> CurveType {
        self.recipient.curve()
    }

    /// Generates an ephemeral key pair, serializes its public half in
    /// `point_format` and derives `key_size` bytes from the agreement.
    ///
    /// The ephemeral scalar is consumed by the agreement and never leaves
    /// this call.
    pub fn generate_encapsulation<R: RngCore + CryptoRng>(
        &self,
        hkdf_hash: HashType,
        hkdf_salt: &[u8],
        context_info: &[u8],
        key_size: usize,
        point_format: PointFormat,
        rng: &mut R,
    ) -> Result<KemKey> {
        let ephemeral = EphemeralKeyPair::generate(self.curve(), rng);
        let kem_bytes = ephemeral.public_key().encode(point_format)?;
        let shared_secret = ephemeral.agree(&self.recipient)?;
        let symmetric_key = derive_symmetric_key(
            hkdf_hash,
            &kem_bytes,
            &shared_secret,
            hkdf_salt,
            context_info,
            key_size,
        )?;
        Ok(KemKey {
            kem_bytes,
            symmetric_key,
        })
    }
}
