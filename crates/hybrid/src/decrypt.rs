//! Recipient primitive: decrypt envelopes addressed to a private key.

use crate::dem::DemHandle;
use crate::ec;
use crate::kem::RecipientKem;
use crate::key::{validate_private_key, EciesParams, EciesPrivateKey};
use crate::EMPTY_ASSOCIATED_DATA;
use ecies_hkdf_api::error::validate;
use ecies_hkdf_api::{Error, HybridDecrypt, Result, ValidationError};
use tracing::debug;

/// ECIES-AEAD-HKDF decryption with one recipient private key.
#[derive(Debug, Clone)]
pub struct EciesHybridDecrypt {
    params: EciesParams,
    kem: RecipientKem,
    dem: DemHandle,
    header_size: usize,
}

impl EciesHybridDecrypt {
    /// Validates the recipient record once and resolves everything `decrypt`
    /// needs.
    ///
    /// # Errors
    /// * `Validation` for a structurally incomplete record
    /// * `InvalidKey` if the private key bytes are not a valid scalar
    /// * `UnsupportedFormat` for a format the curve cannot encode
    /// * `UnsupportedDem` for an unknown symmetric descriptor
    /// * `Derivation` if the DEM key is longer than HKDF can produce
    pub fn new(recipient: &EciesPrivateKey) -> Result<Self> {
        validate_private_key(recipient)?;
        let params = recipient
            .params()
            .ok_or(ValidationError::MissingPublicKey)?
            .clone();
        let curve = params.kem_params.curve;

        let header_size = ec::encoding_size(curve, params.point_format)?;
        let kem = RecipientKem::new(curve, recipient.key_value.as_slice())?;
        let dem = DemHandle::resolve(&params.dem_params)?;
        validate::derivation_length(
            "DEM key length",
            dem.key_size(),
            params.kem_params.hkdf_hash.max_hkdf_output(),
        )?;

        debug!(
            curve = %curve,
            point_format = %params.point_format,
            hkdf_hash = %params.kem_params.hkdf_hash,
            dem = dem.name(),
            header_size,
            "hybrid decrypt primitive ready"
        );

        Ok(Self {
            params,
            kem,
            dem,
            header_size,
        })
    }

    pub fn params(&self) -> &EciesParams {
        &self.params
    }

    /// Length of the KEM header that prefixes every envelope.
    pub fn header_size(&self) -> usize {
        self.header_size
    }

    fn open(&self, kem_bytes: &[u8], dem_ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        let kem_params = &self.params.kem_params;
        let symmetric_key = self.kem.recover_shared_key(
            kem_bytes,
            kem_params.hkdf_hash,
            &kem_params.hkdf_salt,
            context_info,
            self.dem.key_size(),
            self.params.point_format,
        )?;
        let aead = self.dem.build_aead(&symmetric_key)?;
        drop(symmetric_key);
        aead.open(dem_ciphertext, EMPTY_ASSOCIATED_DATA)
    }
}

impl HybridDecrypt for EciesHybridDecrypt {
    /// Splits off the KEM header and opens the remainder.
    ///
    /// A ciphertext shorter than the header is `MalformedCiphertext`. Past
    /// that check every failure (bad point, small-order point, wrong context,
    /// tampering) is the same `DecryptionFailed`.
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        validate::min_ciphertext_length(
            "ciphertext shorter than the KEM header",
            ciphertext.len(),
            self.header_size,
        )?;
        let (kem_bytes, dem_ciphertext) = ciphertext.split_at(self.header_size);
        self.open(kem_bytes, dem_ciphertext, context_info)
            .map_err(|_| {
                debug!(len = ciphertext.len(), "hybrid decryption rejected envelope");
                Error::DecryptionFailed
            })
    }
}
