//! Constants for traditional signature algorithms

pub mod ed25519;
