//! Sender primitive: encrypt to a recipient public key.

use crate::dem::DemHandle;
use crate::ec::{self, EcPublicKey};
use crate::kem::{KemKey, SenderKem};
use crate::key::{validate_public_key, EciesParams, EciesPublicKey};
use crate::EMPTY_ASSOCIATED_DATA;
use ecies_hkdf_api::error::validate;
use ecies_hkdf_api::{HybridEncrypt, Result, ValidationError};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// ECIES-AEAD-HKDF encryption to one recipient public key.
///
/// All parameters are checked at construction; `encrypt` only fails if the
/// DEM rejects a plaintext.
#[derive(Debug, Clone)]
pub struct EciesHybridEncrypt {
    params: EciesParams,
    kem: SenderKem,
    dem: DemHandle,
}

impl EciesHybridEncrypt {
    /// Validates the recipient record and resolves its curve, point format
    /// and DEM.
    ///
    /// # Errors
    /// * `Validation` for a structurally incomplete record
    /// * `InvalidPoint` if the coordinates are not a point on the curve
    /// * `UnsupportedFormat` for a format the curve cannot encode
    /// * `UnsupportedDem` for an unknown symmetric descriptor
    /// * `Derivation` if the DEM key is longer than HKDF can produce
    pub fn new(recipient: &EciesPublicKey) -> Result<Self> {
        validate_public_key(recipient)?;
        let params = recipient
            .params()
            .ok_or(ValidationError::MissingPublicKey)?
            .clone();
        let curve = params.kem_params.curve;

        ec::encoding_size(curve, params.point_format)?;
        let point = EcPublicKey::from_coordinates(curve, &recipient.x, &recipient.y)?;
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
            "hybrid encrypt primitive ready"
        );

        Ok(Self {
            params,
            kem: SenderKem::new(point),
            dem,
        })
    }

    pub fn params(&self) -> &EciesParams {
        &self.params
    }

    /// [`HybridEncrypt::encrypt`] with a caller-supplied randomness source for
    /// the ephemeral key. DEM nonces still come from the OS.
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        context_info: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let kem_params = &self.params.kem_params;
        let KemKey {
            kem_bytes,
            symmetric_key,
        } = self.kem.generate_encapsulation(
            kem_params.hkdf_hash,
            &kem_params.hkdf_salt,
            context_info,
            self.dem.key_size(),
            self.params.point_format,
            rng,
        )?;

        let aead = self.dem.build_aead(&symmetric_key)?;
        drop(symmetric_key);
        let dem_ciphertext = aead.seal(plaintext, EMPTY_ASSOCIATED_DATA)?;

        let mut envelope = Vec::with_capacity(kem_bytes.len() + dem_ciphertext.len());
        envelope.extend_from_slice(&kem_bytes);
        envelope.extend_from_slice(&dem_ciphertext);
        Ok(envelope)
    }
}

impl HybridEncrypt for EciesHybridEncrypt {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_with_rng(plaintext, context_info, &mut OsRng)
    }
}
