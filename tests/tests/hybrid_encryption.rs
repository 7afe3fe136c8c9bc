//! End-to-end tests for the hybrid encrypt/decrypt primitives

use ecies_hkdf::hybrid::EcPublicKey;
use ecies_hkdf::prelude::*;
use ecies_hkdf_tests::fixtures::{all_params, formats, params, Recipient, CURVES};
use rand::rngs::OsRng;

#[test]
fn test_round_trip_all_combinations() -> Result<()> {
    let plaintexts: [&[u8]; 3] = [b"", b"x", &[0xA5; 1000]];
    for params in all_params() {
        let recipient = Recipient::generate(params.clone());
        for plaintext in plaintexts {
            let ciphertext = recipient.sender.encrypt(plaintext, b"context info")?;
            let decrypted = recipient.decrypter.decrypt(&ciphertext, b"context info")?;
            assert_eq!(decrypted, plaintext, "{:?}", params);
        }
    }
    Ok(())
}

#[test]
fn test_p256_aes128_gcm_hello() -> Result<()> {
    let recipient = Recipient::generate(params(
        CurveType::NistP256,
        PointFormat::Uncompressed,
        DemParams::AesGcm { key_size: 16 },
    ));

    let ciphertext = recipient.sender.encrypt(b"hello", b"app-v1")?;
    assert_eq!(ciphertext.len(), 65 + 12 + 5 + 16);
    assert_eq!(recipient.decrypter.decrypt(&ciphertext, b"app-v1")?, b"hello");
    assert_eq!(
        recipient.decrypter.decrypt(&ciphertext, b"app-v2"),
        Err(Error::DecryptionFailed)
    );
    Ok(())
}

#[test]
fn test_empty_and_nonempty_context_info_differ() -> Result<()> {
    let recipient = Recipient::generate(params(
        CurveType::Curve25519,
        PointFormat::Compressed,
        DemParams::XChaCha20Poly1305,
    ));
    let ciphertext = recipient.sender.encrypt(b"payload", b"")?;
    assert_eq!(recipient.decrypter.decrypt(&ciphertext, b"")?, b"payload");
    assert_eq!(
        recipient.decrypter.decrypt(&ciphertext, b"\0"),
        Err(Error::DecryptionFailed)
    );
    Ok(())
}

#[test]
fn test_header_length_is_fixed_per_curve_and_format() -> Result<()> {
    let expected = [
        (CurveType::NistP256, PointFormat::Uncompressed, 65),
        (CurveType::NistP256, PointFormat::Compressed, 33),
        (CurveType::NistP256, PointFormat::LegacyUncompressed, 64),
        (CurveType::NistP384, PointFormat::Uncompressed, 97),
        (CurveType::NistP384, PointFormat::Compressed, 49),
        (CurveType::NistP384, PointFormat::LegacyUncompressed, 96),
        (CurveType::NistP521, PointFormat::Uncompressed, 133),
        (CurveType::NistP521, PointFormat::Compressed, 67),
        (CurveType::NistP521, PointFormat::LegacyUncompressed, 132),
        (CurveType::Curve25519, PointFormat::Compressed, 32),
    ];
    for (curve, format, header_size) in expected {
        let recipient = Recipient::generate(params(curve, format, DemParams::ChaCha20Poly1305));
        assert_eq!(recipient.decrypter.header_size(), header_size);

        let ciphertext = recipient.sender.encrypt(b"abc", b"")?;
        // nonce 12, body 3, tag 16
        assert_eq!(ciphertext.len(), header_size + 31);

        // The header is a valid encoding of a point on the recipient's curve
        EcPublicKey::decode(curve, format, &ciphertext[..header_size])?;
    }
    Ok(())
}

#[test]
fn test_any_modified_byte_is_rejected() -> Result<()> {
    for curve in CURVES {
        for format in formats(curve) {
            let recipient =
                Recipient::generate(params(curve, format, DemParams::AesGcm { key_size: 16 }));
            let ciphertext = recipient.sender.encrypt(b"tamper me", b"ctx")?;

            for i in 0..ciphertext.len() {
                for mask in [0x01u8, 0x80] {
                    let mut tampered = ciphertext.clone();
                    tampered[i] ^= mask;
                    assert_eq!(
                        recipient.decrypter.decrypt(&tampered, b"ctx"),
                        Err(Error::DecryptionFailed),
                        "{} {} byte {} mask {:#x}",
                        curve,
                        format,
                        i,
                        mask
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_truncation() -> Result<()> {
    let recipient = Recipient::generate(params(
        CurveType::NistP384,
        PointFormat::Compressed,
        DemParams::AesGcm { key_size: 32 },
    ));
    let ciphertext = recipient.sender.encrypt(b"truncate me", b"")?;
    let header_size = recipient.decrypter.header_size();

    for len in 0..ciphertext.len() {
        let result = recipient.decrypter.decrypt(&ciphertext[..len], b"");
        if len < header_size {
            assert!(
                matches!(result, Err(Error::MalformedCiphertext { .. })),
                "length {}",
                len
            );
        } else {
            assert_eq!(result, Err(Error::DecryptionFailed), "length {}", len);
        }
    }

    let mut extended = ciphertext.clone();
    extended.push(0);
    assert_eq!(
        recipient.decrypter.decrypt(&extended, b""),
        Err(Error::DecryptionFailed)
    );
    Ok(())
}

#[test]
fn test_ephemeral_keys_are_never_reused() -> Result<()> {
    for curve in CURVES {
        let recipient = Recipient::generate(params(
            curve,
            PointFormat::Compressed,
            DemParams::ChaCha20Poly1305,
        ));
        let header_size = recipient.decrypter.header_size();

        let mut headers = Vec::new();
        for _ in 0..32 {
            let ciphertext = recipient.sender.encrypt(b"same message", b"same context")?;
            headers.push(ciphertext[..header_size].to_vec());
        }
        headers.sort();
        headers.dedup();
        assert_eq!(headers.len(), 32, "{}", curve);
    }
    Ok(())
}

#[test]
fn test_wrong_recipient_fails() -> Result<()> {
    let p = params(
        CurveType::NistP256,
        PointFormat::Compressed,
        DemParams::AesGcm { key_size: 16 },
    );
    let alice = Recipient::generate(p.clone());
    let bob = Recipient::generate(p);

    let ciphertext = alice.sender.encrypt(b"for alice", b"")?;
    assert_eq!(
        bob.decrypter.decrypt(&ciphertext, b""),
        Err(Error::DecryptionFailed)
    );
    Ok(())
}

#[test]
fn test_salt_must_match() -> Result<()> {
    let mut p = params(
        CurveType::Curve25519,
        PointFormat::Compressed,
        DemParams::AesGcm { key_size: 32 },
    );
    p.kem_params.hkdf_salt = b"salt one".to_vec();
    let recipient = Recipient::generate(p);
    let ciphertext = recipient.sender.encrypt(b"salted", b"")?;

    let mut other = recipient.private_key.clone();
    if let Some(params) = other
        .public_key
        .as_mut()
        .and_then(|public| public.params.as_mut())
    {
        params.kem_params.hkdf_salt = b"salt two".to_vec();
    }
    assert_eq!(
        EciesHybridDecrypt::new(&other)?.decrypt(&ciphertext, b""),
        Err(Error::DecryptionFailed)
    );
    Ok(())
}

#[test]
fn test_validation_errors() {
    let x25519 = Recipient::generate(params(
        CurveType::Curve25519,
        PointFormat::Compressed,
        DemParams::ChaCha20Poly1305,
    ));

    let mut no_public = x25519.private_key.clone();
    no_public.public_key = None;
    assert!(matches!(
        EciesHybridDecrypt::new(&no_public),
        Err(Error::Validation(ValidationError::MissingPublicKey))
    ));

    let mut with_y = x25519.private_key.clone();
    if let Some(public) = with_y.public_key.as_mut() {
        public.y = vec![0u8; 32];
    }
    assert!(matches!(
        EciesHybridDecrypt::new(&with_y),
        Err(Error::Validation(ValidationError::UnexpectedField))
    ));

    let p256 = Recipient::generate(params(
        CurveType::NistP256,
        PointFormat::Uncompressed,
        DemParams::ChaCha20Poly1305,
    ));
    let mut without_y = p256.private_key.clone();
    if let Some(public) = without_y.public_key.as_mut() {
        public.y.clear();
    }
    assert!(matches!(
        EciesHybridDecrypt::new(&without_y),
        Err(Error::Validation(ValidationError::MissingPublicKey))
    ));
    assert!(matches!(
        EciesHybridEncrypt::new(without_y.public_key().unwrap()),
        Err(Error::Validation(ValidationError::MissingPublicKey))
    ));
}

#[test]
fn test_configuration_errors_are_classified() {
    let private_key = EciesPrivateKey::generate(
        params(
            CurveType::NistP256,
            PointFormat::Compressed,
            DemParams::AesGcm { key_size: 20 },
        ),
        &mut OsRng,
    );
    let err = EciesHybridDecrypt::new(&private_key).unwrap_err();
    assert!(matches!(err, Error::UnsupportedDem { .. }));
    assert!(err.is_configuration());
    assert!(!Error::DecryptionFailed.is_configuration());
}

#[test]
fn test_identifiers_parse_from_names() {
    assert_eq!("NIST_P384".parse::<CurveType>(), Ok(CurveType::NistP384));
    assert_eq!("SHA512".parse::<HashType>(), Ok(HashType::Sha512));
    assert_eq!("COMPRESSED".parse::<PointFormat>(), Ok(PointFormat::Compressed));
    assert!(matches!(
        "SECP256K1".parse::<CurveType>(),
        Err(Error::UnsupportedCurve { .. })
    ));
    assert!(matches!(
        "SHA1".parse::<HashType>(),
        Err(Error::UnsupportedHash { .. })
    ));
    assert!(matches!(
        "HYBRID".parse::<PointFormat>(),
        Err(Error::UnsupportedFormat { .. })
    ));
}
