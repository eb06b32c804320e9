//! EdDSA (Edwards-curve Digital Signature Algorithm) implementation
//!
//! This module provides Ed25519 as specified in RFC 8032.
//!
//! # Features
//!
//! - Key pairs derived from a 32-byte seed or from 64 bytes of hash output
//! - Deterministic signature generation
//! - Strict verification: canonical `s`, decodable public key
//! - Constant-time field, scalar and group arithmetic
//! - Secret key material zeroized on drop
//!
//! # Example
//!
//! ```
//! use edcrypt_sign::eddsa::Ed25519;
//!
//! # fn main() -> edcrypt_api::Result<()> {
//! let keypair = Ed25519::keypair_from_seed(&[7u8; 32])?;
//!
//! let message = b"Hello, Ed25519!";
//! let signature = Ed25519::sign_with(message, &keypair);
//!
//! assert!(Ed25519::verify_with(message, &signature, keypair.public_key()));
//! # Ok(())
//! # }
//! ```

mod constants;
mod ed25519;
mod field;
mod operations;
mod point;
mod scalar;


// Re-export Ed25519 types
pub use ed25519::{
    Ed25519, Ed25519KeyPair, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature, SigningKey,
};

// The curve arithmetic modules are internal and not exported.
