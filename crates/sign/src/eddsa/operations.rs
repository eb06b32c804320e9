//! Ed25519 operations (RFC 8032 §5.1)
//!
//! This module provides the high-level operations used by the Ed25519
//! signature scheme implementation: key expansion, public key derivation,
//! signing and verification over raw fixed-size byte arrays.

use super::point::{CompressedEdwardsY, EdwardsPoint};
use super::scalar::Scalar;
use edcrypt_internal::constant_time::ct_eq_choice;
use edcrypt_params::traditional::ed25519::{
    ED25519_EXPANDED_KEY_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SEED_SIZE,
    ED25519_SIGNATURE_SIZE,
};
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret scalar and nonce prefix derived from 64 bytes of key material
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct ExpandedSecretKey {
    pub(crate) scalar: Scalar,
    pub(crate) prefix: [u8; 32],
}

/// SHA-512 over the concatenation of `parts`
fn sha512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Expand a 32-byte seed into 64 bytes of key material
pub(crate) fn hash_seed(seed: &[u8; ED25519_SEED_SIZE]) -> [u8; ED25519_EXPANDED_KEY_SIZE] {
    sha512(&[seed])
}

/// Split 64 bytes of key material into the clamped scalar and the prefix
///
/// Clamping clears the three low bits (cofactor) and bit 255, and sets
/// bit 254.
pub(crate) fn expand(material: &[u8; ED25519_EXPANDED_KEY_SIZE]) -> ExpandedSecretKey {
    let mut scalar_bytes = [0u8; 32];
    let mut prefix = [0u8; 32];
    scalar_bytes.copy_from_slice(&material[..32]);
    prefix.copy_from_slice(&material[32..]);

    scalar_bytes[0] &= 248;
    scalar_bytes[31] &= 127;
    scalar_bytes[31] |= 64;

    let expanded = ExpandedSecretKey {
        scalar: Scalar::from_bits(scalar_bytes),
        prefix,
    };
    scalar_bytes.zeroize();
    prefix.zeroize();
    expanded
}

/// A = [a]B, compressed
pub(crate) fn derive_public_key(expanded: &ExpandedSecretKey) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
    EdwardsPoint::mul_base(&expanded.scalar).compress().to_bytes()
}

/// k = SHA-512(R || A || M) mod L
fn challenge(r: &[u8; 32], public_key: &[u8; ED25519_PUBLIC_KEY_SIZE], message: &[u8]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(&sha512(&[r, public_key, message]))
}

/// Deterministic signature over `message`
///
/// 1. r = SHA-512(prefix || M) mod L
/// 2. R = [r]B
/// 3. k = SHA-512(R || A || M) mod L
/// 4. s = (r + k·a) mod L
pub(crate) fn sign(
    expanded: &ExpandedSecretKey,
    public_key: &[u8; ED25519_PUBLIC_KEY_SIZE],
    message: &[u8],
) -> [u8; ED25519_SIGNATURE_SIZE] {
    let mut nonce_hash = sha512(&[&expanded.prefix, message]);
    let mut r = Scalar::from_bytes_mod_order_wide(&nonce_hash);
    nonce_hash.zeroize();

    let big_r = EdwardsPoint::mul_base(&r).compress();
    let k = challenge(big_r.as_bytes(), public_key, message);
    let s = Scalar::mul_add(&k, &expanded.scalar, &r);
    r.zeroize();

    let mut signature = [0u8; ED25519_SIGNATURE_SIZE];
    signature[..32].copy_from_slice(big_r.as_bytes());
    signature[32..].copy_from_slice(&s.to_bytes());
    signature
}

/// Check [s]B = R + [k]A
///
/// The scalar range check, the public key decoding, the small-order check on
/// the public key and the group equation are all evaluated before the
/// results are combined. A public key of order dividing 8 is rejected.
pub(crate) fn verify(
    message: &[u8],
    signature: &[u8; ED25519_SIGNATURE_SIZE],
    public_key: &[u8; ED25519_PUBLIC_KEY_SIZE],
) -> bool {
    let mut r_bytes = [0u8; 32];
    let mut s_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&signature[..32]);
    s_bytes.copy_from_slice(&signature[32..]);

    let s_canonical = Scalar::is_canonical(&s_bytes);
    let (key_valid, a) = CompressedEdwardsY(*public_key).decompress_ct();
    let small_order = a.double().double().double().ct_eq(&EdwardsPoint::identity());

    let k = challenge(&r_bytes, public_key, message);
    let s = Scalar::from_bits(s_bytes);

    // [s]B - [k]A must encode to R
    let check = EdwardsPoint::mul_base(&s).add(&a.neg().scalar_mult(&k));
    let equation = ct_eq_choice(check.compress().as_bytes(), r_bytes);

    let valid = s_canonical & key_valid & !small_order & equation;

    #[cfg(feature = "trace")]
    if !bool::from(valid) {
        trace_event!(
            debug,
            scalar_canonical = bool::from(s_canonical),
            public_key_valid = bool::from(key_valid),
            public_key_small_order = bool::from(small_order),
            equation_holds = bool::from(equation),
            "Ed25519 signature rejected"
        );
    }

    valid.into()
}
