//! Public API traits and types for the edcrypt library
//!
//! This crate provides the public API surface for the edcrypt signature
//! engine: the scheme-agnostic signature traits, byte serialization traits
//! and the error type shared by every crate in the workspace.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Serialize, SerializeSecret, Signature, SignatureDerive};

// Re-export trait modules for direct access
pub use traits::{serialize, signature};
