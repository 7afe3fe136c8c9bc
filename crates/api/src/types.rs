//! Algorithm identifiers carried in key records
//!
//! These are closed enumerations: adding a curve, format or hash is a
//! compile-time checked change to every exhaustive match below and in the
//! hybrid crate.

use crate::error::Error;
use core::fmt;
use core::str::FromStr;
use ecies_hkdf_params::traditional::ecdh::{
    CURVE25519_FIELD_SIZE, P256_FIELD_SIZE, P384_FIELD_SIZE, P521_FIELD_SIZE,
};
use ecies_hkdf_params::utils::hash::{
    HKDF_MAX_BLOCKS, SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Elliptic curve used by the KEM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CurveType {
    /// NIST P-256 (secp256r1)
    NistP256,
    /// NIST P-384 (secp384r1)
    NistP384,
    /// NIST P-521 (secp521r1)
    NistP521,
    /// Curve25519 in its Montgomery (X25519) form
    Curve25519,
}

impl CurveType {
    /// Size in bytes of a field element (and of a coordinate)
    pub const fn field_size(self) -> usize {
        match self {
            Self::NistP256 => P256_FIELD_SIZE,
            Self::NistP384 => P384_FIELD_SIZE,
            Self::NistP521 => P521_FIELD_SIZE,
            Self::Curve25519 => CURVE25519_FIELD_SIZE,
        }
    }

    /// Whether public keys on this curve carry a y-coordinate.
    ///
    /// X25519 public keys are the u-coordinate alone.
    pub const fn has_y_coordinate(self) -> bool {
        match self {
            Self::NistP256 | Self::NistP384 | Self::NistP521 => true,
            Self::Curve25519 => false,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NistP256 => "NIST_P256",
            Self::NistP384 => "NIST_P384",
            Self::NistP521 => "NIST_P521",
            Self::Curve25519 => "CURVE25519",
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NIST_P256" => Ok(Self::NistP256),
            "NIST_P384" => Ok(Self::NistP384),
            "NIST_P521" => Ok(Self::NistP521),
            "CURVE25519" => Ok(Self::Curve25519),
            _ => Err(Error::UnsupportedCurve {
                context: "CurveType::from_str",
            }),
        }
    }
}

/// Encoding convention for curve points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PointFormat {
    /// SEC1 uncompressed: `0x04 || x || y`
    Uncompressed,
    /// SEC1 compressed: `0x02/0x03 || x`. The only format for X25519, where
    /// it denotes the raw 32-byte public value.
    Compressed,
    /// `x || y` without the SEC1 tag byte. Kept for compatibility with
    /// peers that still emit it; do not use for new keys.
    LegacyUncompressed,
}

impl PointFormat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uncompressed => "UNCOMPRESSED",
            Self::Compressed => "COMPRESSED",
            Self::LegacyUncompressed => "LEGACY_UNCOMPRESSED",
        }
    }
}

impl fmt::Display for PointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNCOMPRESSED" => Ok(Self::Uncompressed),
            "COMPRESSED" => Ok(Self::Compressed),
            "LEGACY_UNCOMPRESSED" => Ok(Self::LegacyUncompressed),
            _ => Err(Error::UnsupportedFormat {
                context: "PointFormat::from_str",
            }),
        }
    }
}

/// Hash function driving HKDF (and HMAC in AES-CTR-HMAC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum HashType {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashType {
    /// Digest size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha224 => SHA224_OUTPUT_SIZE,
            Self::Sha256 => SHA256_OUTPUT_SIZE,
            Self::Sha384 => SHA384_OUTPUT_SIZE,
            Self::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }

    /// Largest output HKDF-Expand can produce with this hash (RFC 5869)
    pub const fn max_hkdf_output(self) -> usize {
        HKDF_MAX_BLOCKS * self.output_size()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHA224" => Ok(Self::Sha224),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(Error::UnsupportedHash {
                context: "HashType::from_str",
            }),
        }
    }
}
