//! Digital Signature Schemes
//!
//! This crate implements the Ed25519 signature engine: key derivation from a
//! 32-byte seed or a 64-byte hash, deterministic signing, and strict
//! verification, all on top of constant-time field and group arithmetic.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Emit a `tracing` event when the `trace` feature is enabled.
///
/// Arguments are not evaluated otherwise, so call sites must only pass
/// values that are computed anyway.
#[cfg(feature = "trace")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!(target: "edcrypt::sign", $($arg)+)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub mod eddsa;

// Re-exports from the EdDSA module
pub use eddsa::{
    Ed25519, Ed25519KeyPair, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature, SigningKey,
};
