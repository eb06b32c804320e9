//! Trait definitions shared by signature schemes

pub mod serialize;
pub mod signature;

pub use serialize::{Serialize, SerializeSecret};
pub use signature::{Signature, SignatureDerive};
