//! Error type definitions for hybrid encryption operations

use thiserror::Error as ThisError;

/// Structural problems found in a key record before any secret is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    /// The public key record, its parameters, the x-coordinate, the private
    /// key bytes, or a required y-coordinate is absent
    #[error("missing required fields")]
    MissingPublicKey,

    /// A field that must be absent for the curve (the y-coordinate of an
    /// x-only curve) is present
    #[error("has unexpected field")]
    UnexpectedField,
}

/// Primary error type for hybrid encryption operations
///
/// Every variant carries at most a static context string. Secret bytes never
/// end up in an error.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Malformed key record
    #[error("Invalid key record: {0}")]
    Validation(#[from] ValidationError),

    /// Curve identifier not handled by this library
    #[error("Unsupported curve: {context}")]
    UnsupportedCurve { context: &'static str },

    /// Point format not defined for the curve
    #[error("Unsupported point format: {context}")]
    UnsupportedFormat { context: &'static str },

    /// Hash function not handled by this library
    #[error("Unsupported hash: {context}")]
    UnsupportedHash { context: &'static str },

    /// DEM descriptor that does not resolve to an AEAD
    #[error("Unsupported DEM: {context}")]
    UnsupportedDem { context: &'static str },

    /// Envelope shorter than the KEM header
    #[error("Malformed ciphertext: {context}")]
    MalformedCiphertext { context: &'static str },

    /// Bytes that do not encode a valid, non-identity point on the curve
    #[error("Invalid point: {context}")]
    InvalidPoint { context: &'static str },

    /// Private scalar that is out of range for the curve
    #[error("Invalid key: {context}")]
    InvalidKey { context: &'static str },

    /// Key agreement produced a degenerate shared secret
    #[error("KEM computation failed: {context}")]
    KemComputation { context: &'static str },

    /// Failure reported by the elliptic curve engine
    #[error("Curve operation failed: {context}")]
    CurveOperation { context: &'static str },

    /// Requested derivation length exceeds what the HKDF hash can produce
    #[error("Key derivation failed: {context}")]
    Derivation { context: &'static str },

    /// Symmetric key does not match what the DEM requires
    #[error("{context}: invalid key length (expected {expected}, got {actual})")]
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// AEAD sealing failed
    #[error("Encryption failed: {context}")]
    EncryptionFailed { context: &'static str },

    /// Opaque decryption failure. Deliberately carries no detail.
    #[error("Decryption failed")]
    DecryptionFailed,
}

impl Error {
    /// True for failures caused by the key record or algorithm selection,
    /// which surface at construction time before any secret is used.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::UnsupportedCurve { .. }
                | Self::UnsupportedFormat { .. }
                | Self::UnsupportedHash { .. }
                | Self::UnsupportedDem { .. }
                | Self::InvalidKey { .. }
        )
    }
}

/// Result type for hybrid encryption operations
pub type Result<T> = core::result::Result<T, Error>;
