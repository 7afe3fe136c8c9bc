//! ECIES-AEAD-HKDF hybrid encryption
//!
//! An elliptic-curve KEM with HKDF key derivation composed with an
//! algorithm-agile AEAD DEM. The envelope format is
//!
//! ```text
//! kem_header (fixed length for curve and point format) ‖ DEM ciphertext
//! ```
//!
//! where the header is the sender's ephemeral public point and the DEM
//! ciphertext carries its own nonce and tag.
//!
//! ```
//! use ecies_hkdf_api::{CurveType, HashType, HybridDecrypt, HybridEncrypt, PointFormat};
//! use ecies_hkdf_hybrid::{
//!     DemParams, EciesHybridDecrypt, EciesHybridEncrypt, EciesParams, EciesPrivateKey, KemParams,
//! };
//! use rand::rngs::OsRng;
//!
//! # fn main() -> ecies_hkdf_api::Result<()> {
//! let params = EciesParams {
//!     kem_params: KemParams {
//!         curve: CurveType::NistP256,
//!         hkdf_hash: HashType::Sha256,
//!         hkdf_salt: Vec::new(),
//!     },
//!     dem_params: DemParams::AesGcm { key_size: 16 },
//!     point_format: PointFormat::Uncompressed,
//! };
//! let private_key = EciesPrivateKey::generate(params, &mut OsRng);
//! let public_key = private_key.public_key().cloned().unwrap();
//!
//! let sender = EciesHybridEncrypt::new(&public_key)?;
//! let recipient = EciesHybridDecrypt::new(&private_key)?;
//!
//! let ciphertext = sender.encrypt(b"hello", b"app-v1")?;
//! assert_eq!(recipient.decrypt(&ciphertext, b"app-v1")?, b"hello");
//! assert!(recipient.decrypt(&ciphertext, b"app-v2").is_err());
//! # Ok(())
//! # }
//! ```

pub mod dem;
pub mod ec;
pub mod kem;
pub mod key;

mod decrypt;
mod encrypt;
mod error;

pub use decrypt::EciesHybridDecrypt;
pub use dem::{DemHandle, DemParams};
pub use ec::{EcPrivateKey, EcPublicKey, EphemeralKeyPair};
pub use encrypt::EciesHybridEncrypt;
pub use kem::{KemKey, RecipientKem, SenderKem, SymmetricKey};
pub use key::{
    validate_private_key, validate_public_key, EciesParams, EciesPrivateKey, EciesPublicKey,
    KemParams,
};

/// The DEM is always run with empty associated data; the context info is
/// bound through the key derivation instead.
pub(crate) const EMPTY_ASSOCIATED_DATA: &[u8] = &[];
