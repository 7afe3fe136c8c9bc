//! Private scalars, ephemeral key pairs and Diffie-Hellman agreement.

use super::{left_pad_be, EcPublicKey};
use crate::error::invalid_key;
use core::fmt;
use ecies_hkdf_api::{CurveType, Error, Result};
use ecies_hkdf_common::{SecretBuffer, SecretVec};
use ecies_hkdf_params::traditional::ecdh::X25519_PRIVATE_KEY_SIZE;
use elliptic_curve::{Curve, CurveArithmetic, PublicKey, SecretKey};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// A private key on one of the supported curves.
///
/// Every variant zeroizes its scalar on drop.
#[derive(Clone)]
pub enum EcPrivateKey {
    NistP256(SecretKey<p256::NistP256>),
    NistP384(SecretKey<p384::NistP384>),
    NistP521(SecretKey<p521::NistP521>),
    X25519(x25519_dalek::StaticSecret),
}

impl EcPrivateKey {
    /// Generates a fresh uniformly random private key.
    pub fn generate<R: RngCore + CryptoRng>(curve: CurveType, rng: &mut R) -> Self {
        match curve {
            CurveType::NistP256 => Self::NistP256(SecretKey::random(rng)),
            CurveType::NistP384 => Self::NistP384(SecretKey::random(rng)),
            CurveType::NistP521 => Self::NistP521(SecretKey::random(rng)),
            CurveType::Curve25519 => {
                Self::X25519(x25519_dalek::StaticSecret::random_from_rng(&mut *rng))
            }
        }
    }

    /// Parses a stored private key.
    ///
    /// NIST scalars are big-endian and may carry redundant leading zeros; the
    /// value must lie in `[1, n-1]`. X25519 keys are the raw 32 bytes.
    pub fn from_bytes(curve: CurveType, bytes: &[u8]) -> Result<Self> {
        match curve {
            CurveType::NistP256 => nist_secret(curve, bytes).map(Self::NistP256),
            CurveType::NistP384 => nist_secret(curve, bytes).map(Self::NistP384),
            CurveType::NistP521 => nist_secret(curve, bytes).map(Self::NistP521),
            CurveType::Curve25519 => {
                let raw = SecretBuffer::<X25519_PRIVATE_KEY_SIZE>::from_slice(bytes).ok_or(
                    Error::InvalidKey {
                        context: "X25519 private key must be exactly 32 bytes",
                    },
                )?;
                let raw = Zeroizing::new(raw.to_array());
                Ok(Self::X25519(x25519_dalek::StaticSecret::from(*raw)))
            }
        }
    }

    /// Serializes the private key in the form [`EcPrivateKey::from_bytes`]
    /// accepts.
    pub fn to_bytes(&self) -> SecretVec {
        match self {
            Self::NistP256(sk) => nist_bytes(sk),
            Self::NistP384(sk) => nist_bytes(sk),
            Self::NistP521(sk) => nist_bytes(sk),
            Self::X25519(sk) => {
                let raw = Zeroizing::new(sk.to_bytes());
                SecretVec::from_slice(raw.as_slice())
            }
        }
    }

    pub fn curve(&self) -> CurveType {
        match self {
            Self::NistP256(_) => CurveType::NistP256,
            Self::NistP384(_) => CurveType::NistP384,
            Self::NistP521(_) => CurveType::NistP521,
            Self::X25519(_) => CurveType::Curve25519,
        }
    }

    /// The public point matching this private key
    pub fn public_key(&self) -> EcPublicKey {
        match self {
            Self::NistP256(sk) => EcPublicKey::NistP256(sk.public_key()),
            Self::NistP384(sk) => EcPublicKey::NistP384(sk.public_key()),
            Self::NistP521(sk) => EcPublicKey::NistP521(sk.public_key()),
            Self::X25519(sk) => EcPublicKey::X25519(x25519_dalek::PublicKey::from(sk)),
        }
    }

    /// Multiplies `peer` by this scalar and returns the shared secret: the
    /// big-endian x-coordinate for NIST curves, the 32-byte X25519 output
    /// otherwise.
    ///
    /// # Errors
    /// * `CurveOperation` if the point is on a different curve
    /// * `KemComputation` if X25519 produced the all-zero output (the peer
    ///   sent a small-order point)
    pub fn agree(&self, peer: &EcPublicKey) -> Result<SecretVec> {
        match (self, peer) {
            (Self::NistP256(sk), EcPublicKey::NistP256(pk)) => Ok(nist_agree(sk, pk)),
            (Self::NistP384(sk), EcPublicKey::NistP384(pk)) => Ok(nist_agree(sk, pk)),
            (Self::NistP521(sk), EcPublicKey::NistP521(pk)) => Ok(nist_agree(sk, pk)),
            (Self::X25519(sk), EcPublicKey::X25519(pk)) => {
                let shared = sk.diffie_hellman(pk);
                if !shared.was_contributory() {
                    return Err(Error::KemComputation {
                        context: "X25519 shared secret is all zero",
                    });
                }
                Ok(SecretVec::from_slice(shared.as_bytes()))
            }
            _ => Err(Error::CurveOperation {
                context: "private key and peer point are on different curves",
            }),
        }
    }
}

impl fmt::Debug for EcPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcPrivateKey({}, [REDACTED])", self.curve())
    }
}

/// A single-use key pair for the sender side of the KEM.
///
/// [`EphemeralKeyPair::agree`] takes `self` by value, so the scalar cannot
/// be used for a second agreement; it is zeroized when the call returns.
pub struct EphemeralKeyPair {
    secret: EcPrivateKey,
    public: EcPublicKey,
}

impl EphemeralKeyPair {
    pub fn generate<R: RngCore + CryptoRng>(curve: CurveType, rng: &mut R) -> Self {
        let secret = EcPrivateKey::generate(curve, rng);
        let public = secret.public_key();
        Self { secret, public }
    }

    pub fn public_key(&self) -> &EcPublicKey {
        &self.public
    }

    /// Performs the agreement and destroys the ephemeral scalar.
    pub fn agree(self, peer: &EcPublicKey) -> Result<SecretVec> {
        self.secret.agree(peer)
    }
}

impl fmt::Debug for EphemeralKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EphemeralKeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

fn nist_secret<C: Curve>(curve: CurveType, bytes: &[u8]) -> Result<SecretKey<C>> {
    let mut scalar = Zeroizing::new(vec![0u8; curve.field_size()]);
    if !left_pad_be(bytes, scalar.as_mut_slice()) {
        return Err(Error::InvalidKey {
            context: "private key is larger than the curve order",
        });
    }
    SecretKey::<C>::from_slice(scalar.as_slice())
        .map_err(invalid_key("private key is not a valid scalar"))
}

fn nist_bytes<C: Curve>(secret: &SecretKey<C>) -> SecretVec {
    let mut raw = secret.to_bytes();
    let bytes = SecretVec::from_slice(raw.as_slice());
    raw.as_mut_slice().zeroize();
    bytes
}

// A non-zero scalar times a validated point on a prime-order curve is never
// the identity, so no degenerate-output check is needed here.
fn nist_agree<C: CurveArithmetic>(secret: &SecretKey<C>, peer: &PublicKey<C>) -> SecretVec {
    let shared = elliptic_curve::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
    SecretVec::from_slice(shared.raw_secret_bytes())
}
