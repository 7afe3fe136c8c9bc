//! Property-based tests for the envelope format

use ecies_hkdf::prelude::*;
use ecies_hkdf_tests::fixtures::{params, Recipient};
use proptest::prelude::*;
use std::sync::OnceLock;

fn x25519_recipient() -> &'static Recipient {
    static RECIPIENT: OnceLock<Recipient> = OnceLock::new();
    RECIPIENT.get_or_init(|| {
        Recipient::generate(params(
            CurveType::Curve25519,
            PointFormat::Compressed,
            DemParams::ChaCha20Poly1305,
        ))
    })
}

fn p256_recipient() -> &'static Recipient {
    static RECIPIENT: OnceLock<Recipient> = OnceLock::new();
    RECIPIENT.get_or_init(|| {
        Recipient::generate(params(
            CurveType::NistP256,
            PointFormat::Compressed,
            DemParams::AesCtrHmac {
                aes_key_size: 16,
                iv_size: 12,
                hmac_key_size: 32,
                hmac_hash: HashType::Sha256,
                tag_size: 16,
            },
        ))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip(
        plaintext in prop::collection::vec(any::<u8>(), 0..512),
        context_info in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        for recipient in [x25519_recipient(), p256_recipient()] {
            let ciphertext = recipient.sender.encrypt(&plaintext, &context_info).unwrap();
            let decrypted = recipient.decrypter.decrypt(&ciphertext, &context_info).unwrap();
            prop_assert_eq!(decrypted, plaintext.clone());
        }
    }

    #[test]
    fn context_info_is_bound(
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        a in prop::collection::vec(any::<u8>(), 0..32),
        b in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        prop_assume!(a != b);
        let recipient = x25519_recipient();
        let ciphertext = recipient.sender.encrypt(&plaintext, &a).unwrap();
        prop_assert_eq!(
            recipient.decrypter.decrypt(&ciphertext, &b),
            Err(Error::DecryptionFailed)
        );
    }

    #[test]
    fn bit_flip_is_rejected(
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let recipient = p256_recipient();
        let mut ciphertext = recipient.sender.encrypt(&plaintext, b"").unwrap();
        let i = position.index(ciphertext.len());
        ciphertext[i] ^= 1 << bit;
        prop_assert_eq!(
            recipient.decrypter.decrypt(&ciphertext, b""),
            Err(Error::DecryptionFailed)
        );
    }

    #[test]
    fn arbitrary_input_never_panics(garbage in prop::collection::vec(any::<u8>(), 0..256)) {
        for recipient in [x25519_recipient(), p256_recipient()] {
            let result = recipient.decrypter.decrypt(&garbage, b"");
            if garbage.len() < recipient.decrypter.header_size() {
                prop_assert!(
                    matches!(result, Err(Error::MalformedCiphertext { .. })),
                    "expected MalformedCiphertext"
                );
            } else {
                prop_assert_eq!(result, Err(Error::DecryptionFailed));
            }
        }
    }
}
