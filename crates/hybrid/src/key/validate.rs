//! Structural validation of key records
//!
//! Only field presence is checked here. Whether the scalar and coordinates
//! are valid for the curve is decided by the EC engine when the record is
//! turned into a KEM.

use super::{EciesParams, EciesPrivateKey, EciesPublicKey};
use ecies_hkdf_api::{Result, ValidationError};

/// Checks a recipient private key record.
///
/// Rules, in order:
/// 1. the public key record, its parameters, the x-coordinate and the private
///    key bytes must all be present (`MissingPublicKey`)
/// 2. for an x-only curve the y-coordinate must be absent (`UnexpectedField`)
/// 3. otherwise the y-coordinate must be present (`MissingPublicKey`)
pub fn validate_private_key(key: &EciesPrivateKey) -> Result<()> {
    let public = key.public_key().ok_or(ValidationError::MissingPublicKey)?;
    let params = public.params().ok_or(ValidationError::MissingPublicKey)?;
    if public.x.is_empty() || key.key_value.is_empty() {
        return Err(ValidationError::MissingPublicKey.into());
    }
    check_y_coordinate(params, &public.y)
}

/// Checks a recipient public key record with the same rules, minus the
/// private key bytes.
pub fn validate_public_key(key: &EciesPublicKey) -> Result<()> {
    let params = key.params().ok_or(ValidationError::MissingPublicKey)?;
    if key.x.is_empty() {
        return Err(ValidationError::MissingPublicKey.into());
    }
    check_y_coordinate(params, &key.y)
}

fn check_y_coordinate(params: &EciesParams, y: &[u8]) -> Result<()> {
    match (params.kem_params.curve.has_y_coordinate(), y.is_empty()) {
        (false, false) => Err(ValidationError::UnexpectedField.into()),
        (true, true) => Err(ValidationError::MissingPublicKey.into()),
        _ => Ok(()),
    }
}
