//! Parameter grids and key material used across the integration tests

use ecies_hkdf_api::{CurveType, HashType, PointFormat};
use ecies_hkdf_hybrid::{
    DemParams, EciesHybridDecrypt, EciesHybridEncrypt, EciesParams, EciesPrivateKey, KemParams,
};
use rand::rngs::OsRng;

pub const CURVES: [CurveType; 4] = [
    CurveType::NistP256,
    CurveType::NistP384,
    CurveType::NistP521,
    CurveType::Curve25519,
];

pub const HASHES: [HashType; 4] = [
    HashType::Sha224,
    HashType::Sha256,
    HashType::Sha384,
    HashType::Sha512,
];

/// Point formats the curve can encode
pub fn formats(curve: CurveType) -> Vec<PointFormat> {
    if curve.has_y_coordinate() {
        vec![
            PointFormat::Uncompressed,
            PointFormat::Compressed,
            PointFormat::LegacyUncompressed,
        ]
    } else {
        vec![PointFormat::Compressed]
    }
}

/// One descriptor per supported DEM family
pub fn dems() -> Vec<DemParams> {
    vec![
        DemParams::AesGcm { key_size: 16 },
        DemParams::AesGcm { key_size: 32 },
        DemParams::ChaCha20Poly1305,
        DemParams::XChaCha20Poly1305,
        DemParams::AesCtrHmac {
            aes_key_size: 16,
            iv_size: 16,
            hmac_key_size: 32,
            hmac_hash: HashType::Sha256,
            tag_size: 16,
        },
    ]
}

/// Every (curve, format, hash, DEM) combination the library supports
pub fn all_params() -> Vec<EciesParams> {
    let mut out = Vec::new();
    for curve in CURVES {
        for point_format in formats(curve) {
            for hkdf_hash in HASHES {
                for dem_params in dems() {
                    out.push(EciesParams {
                        kem_params: KemParams {
                            curve,
                            hkdf_hash,
                            hkdf_salt: b"fixture salt".to_vec(),
                        },
                        dem_params,
                        point_format,
                    });
                }
            }
        }
    }
    out
}

pub fn params(curve: CurveType, point_format: PointFormat, dem_params: DemParams) -> EciesParams {
    EciesParams {
        kem_params: KemParams {
            curve,
            hkdf_hash: HashType::Sha256,
            hkdf_salt: Vec::new(),
        },
        dem_params,
        point_format,
    }
}

/// A fresh recipient key and the two primitives built from it
pub struct Recipient {
    pub private_key: EciesPrivateKey,
    pub sender: EciesHybridEncrypt,
    pub decrypter: EciesHybridDecrypt,
}

impl Recipient {
    pub fn generate(params: EciesParams) -> Self {
        let private_key = EciesPrivateKey::generate(params, &mut OsRng);
        let public_key = private_key
            .public_key()
            .expect("generated keys carry their public half");
        let sender = EciesHybridEncrypt::new(public_key).expect("generated public key is valid");
        let decrypter = EciesHybridDecrypt::new(&private_key).expect("generated private key is valid");
        Self {
            private_key,
            sender,
            decrypter,
        }
    }
}
