//! Envelopes assembled from the KEM and DEM layers directly must be
//! indistinguishable from ones produced by the encrypt primitive.

use ecies_hkdf::hybrid::{DemHandle, EcPrivateKey, EcPublicKey, RecipientKem, SenderKem};
use ecies_hkdf::prelude::*;
use ecies_hkdf_tests::fixtures::{params, Recipient};
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_manual_envelope_decrypts() -> Result<()> {
    let recipient = Recipient::generate(params(
        CurveType::NistP521,
        PointFormat::LegacyUncompressed,
        DemParams::AesGcm { key_size: 32 },
    ));
    let record = recipient.private_key.public_key().unwrap();
    let p = record.params().unwrap();

    let point = EcPublicKey::from_coordinates(p.kem_params.curve, &record.x, &record.y)?;
    let dem = DemHandle::resolve(&p.dem_params)?;
    let kem_key = SenderKem::new(point).generate_encapsulation(
        p.kem_params.hkdf_hash,
        &p.kem_params.hkdf_salt,
        b"manual",
        dem.key_size(),
        p.point_format,
        &mut OsRng,
    )?;
    let dem_ciphertext = dem.build_aead(&kem_key.symmetric_key)?.seal(b"assembled", &[])?;

    let mut envelope = kem_key.kem_bytes.clone();
    envelope.extend_from_slice(&dem_ciphertext);
    assert_eq!(recipient.decrypter.decrypt(&envelope, b"manual")?, b"assembled");
    Ok(())
}

#[test]
fn test_primitive_envelope_opens_manually() -> Result<()> {
    let recipient = Recipient::generate(params(
        CurveType::Curve25519,
        PointFormat::Compressed,
        DemParams::XChaCha20Poly1305,
    ));
    let envelope = recipient.sender.encrypt(b"from the primitive", b"ctx")?;

    let p = recipient.private_key.params().unwrap();
    let kem = RecipientKem::new(p.kem_params.curve, recipient.private_key.key_value.as_slice())?;
    let dem = DemHandle::resolve(&p.dem_params)?;
    let (header, body) = envelope.split_at(32);
    let key = kem.recover_shared_key(
        header,
        p.kem_params.hkdf_hash,
        &p.kem_params.hkdf_salt,
        b"ctx",
        dem.key_size(),
        p.point_format,
    )?;
    assert_eq!(dem.build_aead(&key)?.open(body, &[])?, b"from the primitive");
    Ok(())
}

// RFC 7748 section 6.1: the KEM sees the same shared secret on both sides
#[test]
fn test_rfc7748_key_agreement() -> Result<()> {
    let alice = EcPrivateKey::from_bytes(
        CurveType::Curve25519,
        &hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a").unwrap(),
    )?;
    let bob = EcPrivateKey::from_bytes(
        CurveType::Curve25519,
        &hex::decode("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb").unwrap(),
    )?;
    assert_eq!(
        hex::encode(bob.public_key().encode(PointFormat::Compressed)?),
        "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f"
    );
    assert_eq!(
        hex::encode(alice.public_key().encode(PointFormat::Compressed)?),
        "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a"
    );
    let shared = hex::decode("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
        .unwrap();

    assert_eq!(
        alice.agree(&bob.public_key())?.as_slice(),
        shared.as_slice()
    );
    assert_eq!(
        bob.agree(&alice.public_key())?.as_slice(),
        shared.as_slice()
    );
    Ok(())
}

#[test]
fn test_seeded_ephemeral_is_reproducible() -> Result<()> {
    let recipient = Recipient::generate(params(
        CurveType::NistP256,
        PointFormat::Compressed,
        DemParams::ChaCha20Poly1305,
    ));
    let first = recipient
        .sender
        .encrypt_with_rng(b"m", b"", &mut ChaCha20Rng::seed_from_u64(99))?;
    let second = recipient
        .sender
        .encrypt_with_rng(b"m", b"", &mut ChaCha20Rng::seed_from_u64(99))?;
    assert_eq!(first[..33], second[..33]);
    assert_eq!(recipient.decrypter.decrypt(&first, b"")?, b"m");
    assert_eq!(recipient.decrypter.decrypt(&second, b"")?, b"m");
    Ok(())
}
