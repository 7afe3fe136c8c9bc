//! RustCrypto AEADs with a random nonce prepended to the ciphertext

use crate::error::{open_failed, seal_failed};
use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{Aead as _, AeadCore, KeyInit, Nonce, Payload};
use ecies_hkdf_api::{Aead, Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;

/// Output layout: nonce ‖ ciphertext ‖ tag
pub(super) struct RandomNonceAead<C> {
    name: &'static str,
    cipher: C,
}

impl<C: KeyInit> RandomNonceAead<C> {
    pub(super) fn new(name: &'static str, key: &[u8]) -> Result<Self> {
        let cipher = C::new_from_slice(key).map_err(|_| Error::InvalidKeyLength {
            context: name,
            expected: C::KeySize::USIZE,
            actual: key.len(),
        })?;
        Ok(Self { name, cipher })
    }
}

impl<C> Aead for RandomNonceAead<C>
where
    C: aes_gcm::aead::Aead + AeadCore + Send + Sync,
{
    fn seal(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let mut nonce = Nonce::<C>::default();
        OsRng.fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(
                &nonce,
                Payload {
                    msg: plaintext,
                    aad: associated_data,
                },
            )
            .map_err(seal_failed(self.name))?;

        let mut out = Vec::with_capacity(nonce.len() + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn open(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let nonce_size = C::NonceSize::USIZE;
        if ciphertext.len() < nonce_size + C::TagSize::USIZE {
            return Err(Error::DecryptionFailed);
        }
        let (nonce, body) = ciphertext.split_at(nonce_size);
        self.cipher
            .decrypt(
                Nonce::<C>::from_slice(nonce),
                Payload {
                    msg: body,
                    aad: associated_data,
                },
            )
            .map_err(open_failed)
    }
}
