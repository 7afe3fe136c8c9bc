//! Elliptic curve point codec and engine adapter
//!
//! Wraps the RustCrypto NIST curves and `x25519-dalek` behind a closed set of
//! key handles keyed by [`CurveType`], and fixes the byte length of every
//! (curve, point format) pair. That length is the only thing that splits an
//! envelope into KEM header and DEM ciphertext.

use ecies_hkdf_api::{CurveType, Error, PointFormat, Result};
use ecies_hkdf_params::traditional::ecdh::X25519_PUBLIC_KEY_SIZE;

pub mod point;
pub mod scalar;

pub use point::EcPublicKey;
pub use scalar::{EcPrivateKey, EphemeralKeyPair};

/// Returns the encoded size in bytes of a point on `curve` in `format`.
///
/// X25519 public values exist in a single 32-byte form, which is addressed
/// as [`PointFormat::Compressed`]; every other format is rejected for it.
pub fn encoding_size(curve: CurveType, format: PointFormat) -> Result<usize> {
    let field_size = curve.field_size();
    match (curve, format) {
        (CurveType::Curve25519, PointFormat::Compressed) => Ok(X25519_PUBLIC_KEY_SIZE),
        (CurveType::Curve25519, _) => Err(Error::UnsupportedFormat {
            context: "X25519 points only have the compressed encoding",
        }),
        (_, PointFormat::Uncompressed) => Ok(1 + 2 * field_size),
        (_, PointFormat::Compressed) => Ok(1 + field_size),
        (_, PointFormat::LegacyUncompressed) => Ok(2 * field_size),
    }
}

/// Copies a big-endian integer into `out`, left-padding with zeros.
///
/// Redundant leading zero bytes in `bytes` (as written by signed big-integer
/// encoders) are skipped. Returns `false` if the value does not fit.
pub(crate) fn left_pad_be(bytes: &[u8], out: &mut [u8]) -> bool {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    if significant.len() > out.len() {
        return false;
    }
    let offset = out.len() - significant.len();
    out[..offset].fill(0);
    out[offset..].copy_from_slice(significant);
    true
}
