//! # ecies-hkdf
//!
//! ECIES-AEAD-HKDF hybrid public-key encryption: an elliptic-curve KEM with
//! HKDF key derivation composed with an algorithm-agile AEAD DEM.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecies-hkdf = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` on parameter and public key
//!   records. Private key records are never serializable.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecies-hkdf-api`]: Error taxonomy, algorithm identifiers and the
//!   `HybridEncrypt`/`HybridDecrypt`/`Aead` traits
//! - [`ecies-hkdf-common`]: Zeroizing secret containers
//! - [`ecies-hkdf-params`]: Curve, hash and cipher size constants
//! - [`ecies-hkdf-hybrid`]: Point codec, KEM, DEM selection and the
//!   encrypt/decrypt primitives
//!
//! ## Example
//!
//! ```
//! use ecies_hkdf::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> Result<()> {
//! let params = EciesParams {
//!     kem_params: KemParams {
//!         curve: CurveType::Curve25519,
//!         hkdf_hash: HashType::Sha256,
//!         hkdf_salt: b"salt".to_vec(),
//!     },
//!     dem_params: DemParams::ChaCha20Poly1305,
//!     point_format: PointFormat::Compressed,
//! };
//! let private_key = EciesPrivateKey::generate(params, &mut OsRng);
//! let public_key = private_key.public_key().cloned().unwrap();
//!
//! let ciphertext = EciesHybridEncrypt::new(&public_key)?.encrypt(b"hi", b"ctx")?;
//! let plaintext = EciesHybridDecrypt::new(&private_key)?.decrypt(&ciphertext, b"ctx")?;
//! assert_eq!(plaintext, b"hi");
//! # Ok(())
//! # }
//! ```

pub use ecies_hkdf_api as api;
pub use ecies_hkdf_common as common;
pub use ecies_hkdf_hybrid as hybrid;
pub use ecies_hkdf_params as params;

/// Common imports for ecies-hkdf users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result, ValidationError};

    // Core traits
    pub use crate::api::{Aead, HybridDecrypt, HybridEncrypt};

    // Algorithm identifiers
    pub use crate::api::{CurveType, HashType, PointFormat};

    // Key records and primitives
    pub use crate::hybrid::{
        DemParams, EciesHybridDecrypt, EciesHybridEncrypt, EciesParams, EciesPrivateKey,
        EciesPublicKey, KemParams,
    };

    // Security types
    pub use crate::common::SecretVec;
}
