//! Recipient side: recover the symmetric key from a KEM header.

use super::{derive_symmetric_key, SymmetricKey};
use crate::ec::{EcPrivateKey, EcPublicKey};
use ecies_hkdf_api::{CurveType, HashType, PointFormat, Result};

/// Long-term recipient scalar bound to its curve
#[derive(Clone, Debug)]
pub struct RecipientKem {
    private_key: EcPrivateKey,
}

impl RecipientKem {
    /// Parses the private key bytes for `curve`.
    pub fn new(curve: CurveType, key_value: &[u8]) -> Result<Self> {
        Ok(Self {
            private_key: EcPrivateKey::from_bytes(curve, key_value)?,
        })
    }

    pub fn from_private_key(private_key: EcPrivateKey) -> Self {
        Self { private_key }
    }

    pub fn curve(&self) -> CurveType {
        self.private_key.curve()
    }

    /// Decodes `kem_bytes` as an ephemeral point, performs the agreement and
    /// derives `key_size` bytes.
    pub fn recover_shared_key(
        &self,
        kem_bytes: &[u8],
        hkdf_hash: HashType,
        hkdf_salt: &[u8],
        context_info: &[u8],
        key_size: usize,
        point_format: PointFormat,
    ) -> Result<SymmetricKey> {
        let ephemeral = EcPublicKey::decode(self.curve(), point_format, kem_bytes)?;
        let shared_secret = self.private_key.agree(&ephemeral)?;
        derive_symmetric_key(
            hkdf_hash,
            kem_bytes,
            &shared_secret,
            hkdf_salt,
            context_info,
            key_size,
        )
    }
}
