//! Digital signature traits for edcrypt
//!
//! This module defines the traits that signature algorithms implement.
//! The design prioritizes security by not requiring mutable access to secret keys.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// Randomness is never taken from process-wide state: key generation draws
/// from the generator the caller passes in.
///
/// Verification returns a plain `bool`. A forged, corrupted or otherwise
/// malformed signature is a normal outcome, not an error.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomGenerationError`](crate::Error::RandomGenerationError)
    /// if the generator fails to produce seed material.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    ///
    /// Implementations should be deterministic when the scheme allows it and
    /// must not leak information about the secret key through timing.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool;
}

/// Optional trait for signature algorithms that support key derivation
///
/// This trait is for algorithms that can derive keys from seed material
/// in a deterministic way.
pub trait SignatureDerive: Signature {
    /// Exact seed size in bytes
    const SEED_SIZE: usize;

    /// Derive a key pair from seed material
    ///
    /// Same seed must always produce the same key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed does not have exactly [`Self::SEED_SIZE`] bytes
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Derive the public key from a secret key
    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;
}
