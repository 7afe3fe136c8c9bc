//! Public points and their fixed-width encodings.

use super::{encoding_size, left_pad_be};
use crate::error::invalid_point;
use ecies_hkdf_api::{CurveType, Error, PointFormat, Result};
use ecies_hkdf_params::traditional::ecdh::{
    SEC1_TAG_COMPRESSED_EVEN, SEC1_TAG_COMPRESSED_ODD, SEC1_TAG_UNCOMPRESSED,
    X25519_PUBLIC_KEY_SIZE,
};
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey};

/// A validated public point on one of the supported curves.
///
/// NIST points are guaranteed on-curve and not the identity by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EcPublicKey {
    NistP256(PublicKey<p256::NistP256>),
    NistP384(PublicKey<p384::NistP384>),
    NistP521(PublicKey<p521::NistP521>),
    X25519(x25519_dalek::PublicKey),
}

impl EcPublicKey {
    /// The curve this point lives on
    pub fn curve(&self) -> CurveType {
        match self {
            Self::NistP256(_) => CurveType::NistP256,
            Self::NistP384(_) => CurveType::NistP384,
            Self::NistP521(_) => CurveType::NistP521,
            Self::X25519(_) => CurveType::Curve25519,
        }
    }

    /// Decodes a point from exactly [`encoding_size`] bytes.
    ///
    /// # Errors
    /// * `UnsupportedFormat` if the format is not defined for the curve
    /// * `InvalidPoint` if the length, tag byte, curve equation or identity
    ///   check fails
    pub fn decode(curve: CurveType, format: PointFormat, bytes: &[u8]) -> Result<Self> {
        let expected = encoding_size(curve, format)?;
        if bytes.len() != expected {
            return Err(Error::InvalidPoint {
                context: "encoded point has the wrong length",
            });
        }
        let tag_ok = match format {
            PointFormat::Uncompressed => bytes[0] == SEC1_TAG_UNCOMPRESSED,
            PointFormat::Compressed if curve.has_y_coordinate() => {
                bytes[0] == SEC1_TAG_COMPRESSED_EVEN || bytes[0] == SEC1_TAG_COMPRESSED_ODD
            }
            PointFormat::Compressed | PointFormat::LegacyUncompressed => true,
        };
        if !tag_ok {
            return Err(Error::InvalidPoint {
                context: "SEC1 tag does not match the point format",
            });
        }

        match curve {
            CurveType::NistP256 => decode_nist(bytes, format).map(Self::NistP256),
            CurveType::NistP384 => decode_nist(bytes, format).map(Self::NistP384),
            CurveType::NistP521 => decode_nist(bytes, format).map(Self::NistP521),
            CurveType::Curve25519 => {
                let mut raw = [0u8; X25519_PUBLIC_KEY_SIZE];
                raw.copy_from_slice(bytes);
                Ok(Self::X25519(x25519_dalek::PublicKey::from(raw)))
            }
        }
    }

    /// Encodes the point in `format`.
    ///
    /// The output length always equals [`encoding_size`] for the pair.
    pub fn encode(&self, format: PointFormat) -> Result<Vec<u8>> {
        match self {
            Self::NistP256(pk) => Ok(encode_nist(pk, format)),
            Self::NistP384(pk) => Ok(encode_nist(pk, format)),
            Self::NistP521(pk) => Ok(encode_nist(pk, format)),
            Self::X25519(pk) => {
                encoding_size(CurveType::Curve25519, format)?;
                Ok(pk.as_bytes().to_vec())
            }
        }
    }

    /// Builds a point from the affine coordinates stored in a key record.
    ///
    /// Coordinates are big-endian and may carry redundant leading zeros.
    /// For X25519 `x` is the raw 32-byte public value and `y` must be empty.
    pub fn from_coordinates(curve: CurveType, x: &[u8], y: &[u8]) -> Result<Self> {
        if !curve.has_y_coordinate() {
            if !y.is_empty() || x.len() != X25519_PUBLIC_KEY_SIZE {
                return Err(Error::InvalidPoint {
                    context: "X25519 public value must be exactly 32 bytes",
                });
            }
            return Self::decode(curve, PointFormat::Compressed, x);
        }

        let n = curve.field_size();
        let mut sec1 = vec![0u8; 1 + 2 * n];
        sec1[0] = SEC1_TAG_UNCOMPRESSED;
        if !left_pad_be(x, &mut sec1[1..1 + n]) || !left_pad_be(y, &mut sec1[1 + n..]) {
            return Err(Error::InvalidPoint {
                context: "coordinate is larger than the field",
            });
        }
        Self::decode(curve, PointFormat::Uncompressed, &sec1)
    }

    /// Returns the affine coordinates as fixed-width big-endian bytes.
    ///
    /// The y-coordinate is empty for X25519.
    pub fn coordinates(&self) -> (Vec<u8>, Vec<u8>) {
        let sec1 = match self {
            Self::NistP256(pk) => encode_nist(pk, PointFormat::Uncompressed),
            Self::NistP384(pk) => encode_nist(pk, PointFormat::Uncompressed),
            Self::NistP521(pk) => encode_nist(pk, PointFormat::Uncompressed),
            Self::X25519(pk) => return (pk.as_bytes().to_vec(), Vec::new()),
        };
        let n = self.curve().field_size();
        (sec1[1..1 + n].to_vec(), sec1[1 + n..].to_vec())
    }
}

fn decode_nist<C>(bytes: &[u8], format: PointFormat) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    match format {
        PointFormat::Uncompressed | PointFormat::Compressed => {
            PublicKey::<C>::from_sec1_bytes(bytes).map_err(invalid_point("point is not on the curve"))
        }
        PointFormat::LegacyUncompressed => {
            let mut tagged = Vec::with_capacity(bytes.len() + 1);
            tagged.push(SEC1_TAG_UNCOMPRESSED);
            tagged.extend_from_slice(bytes);
            PublicKey::<C>::from_sec1_bytes(&tagged).map_err(invalid_point("point is not on the curve"))
        }
    }
}

fn encode_nist<C>(pk: &PublicKey<C>, format: PointFormat) -> Vec<u8>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    match format {
        PointFormat::Uncompressed => pk.to_encoded_point(false).as_bytes().to_vec(),
        PointFormat::Compressed => pk.to_encoded_point(true).as_bytes().to_vec(),
        PointFormat::LegacyUncompressed => pk.to_encoded_point(false).as_bytes()[1..].to_vec(),
    }
}
