//! # edcrypt
//!
//! A software-only Ed25519 signature engine: key derivation from a seed or a
//! hash, deterministic signing and strict verification.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edcrypt = "0.3"
//! ```
//!
//! ```
//! use edcrypt::prelude::*;
//! use edcrypt::sign::Ed25519;
//!
//! # fn main() -> edcrypt::prelude::Result<()> {
//! let keypair = Ed25519::keypair_from_seed(&[1u8; 32])?;
//! let signature = Ed25519::sign_with(b"message", &keypair);
//! assert!(Ed25519::verify(b"message", &signature, keypair.public_key()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: Serde support for public keys and signatures (hex when
//!   human-readable)
//! - `trace`: `tracing` events for key derivation, signing and rejected
//!   signatures; secret material is never recorded
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edcrypt-api`]: Traits and the error type
//! - [`edcrypt-internal`]: Constant-time helpers
//! - [`edcrypt-params`]: Ed25519 sizes and constants
//! - [`edcrypt-sign`]: The Ed25519 engine

#![cfg_attr(not(feature = "std"), no_std)]

pub use edcrypt_api as api;
pub use edcrypt_internal as internal;
pub use edcrypt_params as params;
pub use edcrypt_sign as sign;

/// Common imports for edcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Serialize, SerializeSecret, Signature, SignatureDerive};

    // Re-export the scheme and its key types
    pub use crate::sign::{
        Ed25519, Ed25519KeyPair, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature,
        SigningKey,
    };

    // Randomness and key hygiene
    pub use rand::{CryptoRng, RngCore};
    pub use zeroize::{Zeroize, Zeroizing};
}
