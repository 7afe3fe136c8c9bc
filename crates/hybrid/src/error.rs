//! Conversions from the primitive crates' error types into the api taxonomy.
//!
//! The primitive crates report opaque unit errors; these helpers attach the
//! static context string of the failing operation.

use ecies_hkdf_api::Error;

/// Maps a point parsing failure to [`Error::InvalidPoint`].
pub(crate) fn invalid_point(context: &'static str) -> impl FnOnce(elliptic_curve::Error) -> Error {
    move |_| Error::InvalidPoint { context }
}

/// Maps a scalar parsing failure to [`Error::InvalidKey`].
pub(crate) fn invalid_key(context: &'static str) -> impl FnOnce(elliptic_curve::Error) -> Error {
    move |_| Error::InvalidKey { context }
}

/// Maps an HKDF length failure to [`Error::Derivation`].
pub(crate) fn derivation(context: &'static str) -> impl FnOnce(hkdf::InvalidLength) -> Error {
    move |_| Error::Derivation { context }
}

/// Maps an AEAD sealing failure to [`Error::EncryptionFailed`].
pub(crate) fn seal_failed<E>(context: &'static str) -> impl FnOnce(E) -> Error {
    move |_| Error::EncryptionFailed { context }
}

/// Collapses any AEAD-layer failure (bad key, AAD, tag or tampering) into the
/// single opaque decryption failure.
pub(crate) fn open_failed<E>(_: E) -> Error {
    Error::DecryptionFailed
}
