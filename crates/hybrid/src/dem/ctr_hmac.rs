//! AES-CTR encrypt-then-HMAC
//!
//! Key = aes_key ‖ hmac_key. The counter block is the IV right-padded with
//! zeros to the AES block size and incremented as a 128-bit big-endian
//! integer. The tag covers `aad ‖ iv ‖ ciphertext ‖ be64(8·|aad|)` and is
//! truncated to `tag_size`.

use crate::error::open_failed;
use ctr::cipher::{KeyIvInit, StreamCipher};
use ecies_hkdf_api::{Aead, Error, HashType, Result};
use ecies_hkdf_params::utils::symmetric::{AES128_KEY_SIZE, AES_BLOCK_SIZE};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;
type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;

const CONTEXT: &str = "AES-CTR-HMAC";

pub(super) struct AesCtrHmac {
    aes_key: Zeroizing<Vec<u8>>,
    hmac_key: Zeroizing<Vec<u8>>,
    iv_size: usize,
    hmac_hash: HashType,
    tag_size: usize,
}

impl AesCtrHmac {
    /// Splits `key` into its AES and HMAC halves. Sizes were checked when the
    /// descriptor was resolved.
    pub(super) fn new(
        key: &[u8],
        aes_key_size: usize,
        iv_size: usize,
        hmac_hash: HashType,
        tag_size: usize,
    ) -> Result<Self> {
        if key.len() <= aes_key_size {
            return Err(Error::InvalidKeyLength {
                context: CONTEXT,
                expected: aes_key_size + 1,
                actual: key.len(),
            });
        }
        let (aes_key, hmac_key) = key.split_at(aes_key_size);
        Ok(Self {
            aes_key: Zeroizing::new(aes_key.to_vec()),
            hmac_key: Zeroizing::new(hmac_key.to_vec()),
            iv_size,
            hmac_hash,
            tag_size,
        })
    }

    fn apply_keystream(&self, iv: &[u8], buf: &mut [u8]) -> Result<()> {
        let mut counter = [0u8; AES_BLOCK_SIZE];
        counter[..iv.len()].copy_from_slice(iv);

        let invalid = |_| Error::InvalidKeyLength {
            context: CONTEXT,
            expected: self.aes_key.len(),
            actual: self.aes_key.len(),
        };
        if self.aes_key.len() == AES128_KEY_SIZE {
            Aes128Ctr::new_from_slices(&self.aes_key, &counter)
                .map_err(invalid)?
                .apply_keystream(buf);
        } else {
            Aes256Ctr::new_from_slices(&self.aes_key, &counter)
                .map_err(invalid)?
                .apply_keystream(buf);
        }
        Ok(())
    }

    fn tag(&self, associated_data: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let aad_bits = (associated_data.len() as u64).wrapping_mul(8).to_be_bytes();
        let parts: [&[u8]; 4] = [associated_data, iv, ciphertext, &aad_bits];
        let mut full = match self.hmac_hash {
            HashType::Sha224 => mac::<Hmac<Sha224>>(&self.hmac_key, &parts)?,
            HashType::Sha256 => mac::<Hmac<Sha256>>(&self.hmac_key, &parts)?,
            HashType::Sha384 => mac::<Hmac<Sha384>>(&self.hmac_key, &parts)?,
            HashType::Sha512 => mac::<Hmac<Sha512>>(&self.hmac_key, &parts)?,
        };
        full.truncate(self.tag_size);
        Ok(full)
    }
}

fn mac<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| Error::InvalidKeyLength {
        context: CONTEXT,
        expected: key.len(),
        actual: key.len(),
    })?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().to_vec())
}

impl Aead for AesCtrHmac {
    fn seal(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.iv_size];
        OsRng.fill_bytes(&mut out);
        out.extend_from_slice(plaintext);

        let (iv, body) = out.split_at_mut(self.iv_size);
        self.apply_keystream(iv, body)?;

        let tag = self.tag(associated_data, &out[..self.iv_size], &out[self.iv_size..])?;
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn open(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < self.iv_size + self.tag_size {
            return Err(Error::DecryptionFailed);
        }
        let (iv, rest) = ciphertext.split_at(self.iv_size);
        let (body, tag) = rest.split_at(rest.len() - self.tag_size);

        let expected = self.tag(associated_data, iv, body).map_err(open_failed)?;
        if !bool::from(expected.as_slice().ct_eq(tag)) {
            return Err(Error::DecryptionFailed);
        }

        let mut plaintext = body.to_vec();
        self.apply_keystream(iv, &mut plaintext).map_err(open_failed)?;
        Ok(plaintext)
    }
}
