//! Constants for Elliptic Curve Diffie-Hellman

/// Field element size of NIST P-256 in bytes
pub const P256_FIELD_SIZE: usize = 32;

/// Field element size of NIST P-384 in bytes
pub const P384_FIELD_SIZE: usize = 48;

/// Field element size of NIST P-521 in bytes (521 bits rounded up)
pub const P521_FIELD_SIZE: usize = 66;

/// Field element size of Curve25519 in bytes
pub const CURVE25519_FIELD_SIZE: usize = 32;

/// Size of an X25519 public value in bytes
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of an X25519 private scalar in bytes
pub const X25519_PRIVATE_KEY_SIZE: usize = 32;

/// SEC1 tag byte of an uncompressed point
pub const SEC1_TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC1 tag byte of a compressed point with even y
pub const SEC1_TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 tag byte of a compressed point with odd y
pub const SEC1_TAG_COMPRESSED_ODD: u8 = 0x03;
