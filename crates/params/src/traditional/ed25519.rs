//! Constants for the Ed25519 signature algorithm (RFC 8032)

/// Size of the secret seed in bytes
pub const ED25519_SEED_SIZE: usize = 32;

/// Size of the expanded secret key (SHA-512 of the seed) in bytes
pub const ED25519_EXPANDED_KEY_SIZE: usize = 64;

/// Size of a compressed public key in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of a signature (R || s) in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Order of the prime-order subgroup,
/// L = 2^252 + 27742317777372353535851937790883648493, little-endian
pub const ED25519_GROUP_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];
