//! Ed25519 signature scheme implementation
//!
//! Key derivation, deterministic signing and strict verification as
//! specified in RFC 8032, over the constant-time curve arithmetic in the
//! sibling modules.

use super::operations::{self, ExpandedSecretKey};
use alloc::string::String;
use alloc::vec::Vec;
use edcrypt_api::error::validation;
use edcrypt_api::{
    Error as ApiError, Result as ApiResult, Serialize as SerializeTrait, SerializeSecret,
    Signature as SignatureTrait, SignatureDerive,
};
use edcrypt_internal::constant_time::ct_eq;
use edcrypt_params::traditional::ed25519::{
    ED25519_EXPANDED_KEY_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SEED_SIZE,
    ED25519_SIGNATURE_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Ed25519 signature scheme
///
/// # Security Considerations
///
/// - Always use a cryptographically secure RNG for key generation
/// - Verify public key authenticity through secure channels
/// - Never reuse seeds across different applications or purposes
pub struct Ed25519;

/// Implements the shared surface of the public byte-encoded types: fixed
/// size access, hex encoding, constant-time equality and serde support.
macro_rules! impl_public_bytes {
    ($name:ident, $size:expr, $context:literal) => {
        impl $name {
            /// Borrow the encoded bytes
            pub fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            /// Copy out the encoded bytes
            pub fn to_array(&self) -> [u8; $size] {
                self.0
            }

            /// Lower-case hex encoding
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }

            /// Parse from hex (either case)
            pub fn from_hex(encoded: &str) -> ApiResult<Self> {
                validation::length($context, encoded.len(), 2 * $size)?;
                let mut bytes = [0u8; $size];
                hex::decode_to_slice(encoded, &mut bytes)
                    .map_err(|_| ApiError::InvalidParameter { context: $context })?;
                Ok(Self(bytes))
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                ct_eq(self.0, other.0)
            }
        }

        impl Eq for $name {}

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                for byte in self.0.iter() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl SerializeTrait for $name {
            fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
                validation::length($context, bytes.len(), $size)?;
                let mut out = [0u8; $size];
                out.copy_from_slice(bytes);
                Ok(Self(out))
            }

            fn to_bytes(&self) -> Vec<u8> {
                self.0.to_vec()
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&self.to_hex())
                } else {
                    serializer.serialize_bytes(&self.0)
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                if deserializer.is_human_readable() {
                    let encoded = <String as serde::Deserialize>::deserialize(deserializer)?;
                    Self::from_hex(&encoded).map_err(serde::de::Error::custom)
                } else {
                    let bytes = <Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
                    <Self as SerializeTrait>::from_bytes(&bytes).map_err(serde::de::Error::custom)
                }
            }
        }
    };
}

/// Ed25519 public key (32 bytes, compressed point)
///
/// Parsing never checks that the bytes decode to a curve point; an invalid
/// key simply fails every verification.
#[derive(Clone, Copy)]
pub struct Ed25519PublicKey(pub [u8; ED25519_PUBLIC_KEY_SIZE]);

impl_public_bytes!(Ed25519PublicKey, ED25519_PUBLIC_KEY_SIZE, "Ed25519 public key");

/// Ed25519 signature (64 bytes: R || s)
#[derive(Clone, Copy)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

impl_public_bytes!(Ed25519Signature, ED25519_SIGNATURE_SIZE, "Ed25519 signature");

impl Ed25519Signature {
    /// The encoded commitment point R
    pub fn r_bytes(&self) -> &[u8] {
        &self.0[..32]
    }

    /// The encoded response scalar s
    pub fn s_bytes(&self) -> &[u8] {
        &self.0[32..]
    }
}

#[derive(Clone)]
enum SecretMaterial {
    /// 32-byte seed, expanded with SHA-512 on use
    Seed([u8; ED25519_SEED_SIZE]),
    /// 64 bytes used directly as the expanded key
    Expanded([u8; ED25519_EXPANDED_KEY_SIZE]),
}

/// Ed25519 secret key
///
/// Holds either the 32-byte seed or 64 bytes of expanded key material,
/// exactly as supplied. Both forms sign identically when the expanded form
/// is the SHA-512 of the seed.
///
/// The material is zeroized on drop and never printed.
#[derive(Clone)]
pub struct Ed25519SecretKey {
    material: SecretMaterial,
}

impl Ed25519SecretKey {
    /// Secret key from a 32-byte seed
    pub fn from_seed(seed: &[u8; ED25519_SEED_SIZE]) -> Self {
        Self {
            material: SecretMaterial::Seed(*seed),
        }
    }

    /// Secret key from 64 bytes of expanded key material
    pub fn from_expanded(material: &[u8; ED25519_EXPANDED_KEY_SIZE]) -> Self {
        Self {
            material: SecretMaterial::Expanded(*material),
        }
    }

    /// Whether this key holds a seed rather than expanded material
    pub fn is_seed(&self) -> bool {
        matches!(self.material, SecretMaterial::Seed(_))
    }

    /// Derive the matching public key
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(operations::derive_public_key(&self.expand()))
    }

    pub(crate) fn expand(&self) -> ExpandedSecretKey {
        match &self.material {
            SecretMaterial::Seed(seed) => {
                let material = Zeroizing::new(operations::hash_seed(seed));
                operations::expand(&material)
            }
            SecretMaterial::Expanded(material) => operations::expand(material),
        }
    }
}

impl Zeroize for Ed25519SecretKey {
    fn zeroize(&mut self) {
        match &mut self.material {
            SecretMaterial::Seed(seed) => seed.zeroize(),
            SecretMaterial::Expanded(material) => material.zeroize(),
        }
    }
}

impl Drop for Ed25519SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// Implement Debug without exposing key material
impl core::fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519SecretKey")
            .field("form", &if self.is_seed() { "seed" } else { "expanded" })
            .field("material", &"[REDACTED]")
            .finish()
    }
}

impl SerializeSecret for Ed25519SecretKey {
    /// Accepts a 32-byte seed or 64 bytes of expanded key material
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        match bytes.len() {
            ED25519_SEED_SIZE => {
                let mut seed = Zeroizing::new([0u8; ED25519_SEED_SIZE]);
                seed.copy_from_slice(bytes);
                Ok(Self::from_seed(&seed))
            }
            ED25519_EXPANDED_KEY_SIZE => {
                let mut material = Zeroizing::new([0u8; ED25519_EXPANDED_KEY_SIZE]);
                material.copy_from_slice(bytes);
                Ok(Self::from_expanded(&material))
            }
            actual => Err(ApiError::InvalidLength {
                context: "Ed25519 private key",
                // Report the nearest accepted size
                expected: if actual > ED25519_SEED_SIZE {
                    ED25519_EXPANDED_KEY_SIZE
                } else {
                    ED25519_SEED_SIZE
                },
                actual,
            }),
        }
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        match &self.material {
            SecretMaterial::Seed(seed) => Zeroizing::new(seed.to_vec()),
            SecretMaterial::Expanded(material) => Zeroizing::new(material.to_vec()),
        }
    }
}

/// Ed25519 key pair
///
/// Only constructed by derivation, so the stored public key always matches
/// the secret key.
#[derive(Clone)]
pub struct Ed25519KeyPair {
    public: Ed25519PublicKey,
    secret: Ed25519SecretKey,
}

impl Ed25519KeyPair {
    /// Build a key pair by deriving the public half from `secret`
    pub fn from_secret(secret: Ed25519SecretKey) -> Self {
        let public = secret.public_key();
        Self { public, secret }
    }

    /// The public key
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public
    }

    /// The secret key
    pub fn secret_key(&self) -> &Ed25519SecretKey {
        &self.secret
    }
}

impl core::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("public", &self.public)
            .field("secret", &self.secret)
            .finish()
    }
}

/// Key accepted by [`Ed25519::sign_with`]
///
/// A key pair carries its public key, so signing with one skips the extra
/// base point multiplication needed to recover it from a bare secret key.
#[derive(Clone, Copy, Debug)]
pub enum SigningKey<'a> {
    Secret(&'a Ed25519SecretKey),
    KeyPair(&'a Ed25519KeyPair),
}

impl<'a> From<&'a Ed25519SecretKey> for SigningKey<'a> {
    fn from(secret: &'a Ed25519SecretKey) -> Self {
        SigningKey::Secret(secret)
    }
}

impl<'a> From<&'a Ed25519KeyPair> for SigningKey<'a> {
    fn from(pair: &'a Ed25519KeyPair) -> Self {
        SigningKey::KeyPair(pair)
    }
}

impl Ed25519 {
    /// Derive a key pair from a 32-byte seed
    ///
    /// The seed is kept as the private key; SHA-512 of the seed gives the
    /// clamped secret scalar (first half) and the nonce prefix (second half).
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidLength`] unless `seed` is exactly 32 bytes.
    pub fn keypair_from_seed(seed: &[u8]) -> ApiResult<Ed25519KeyPair> {
        validation::length("Ed25519 seed", seed.len(), ED25519_SEED_SIZE)?;
        let mut bytes = Zeroizing::new([0u8; ED25519_SEED_SIZE]);
        bytes.copy_from_slice(seed);

        trace_event!(debug, "deriving Ed25519 key pair from seed");
        Ok(Ed25519KeyPair::from_secret(Ed25519SecretKey::from_seed(&bytes)))
    }

    /// Derive a key pair from 64 bytes of hash output
    ///
    /// The hash is kept as the private key and used directly as the expanded
    /// key, with the same clamping as the seed path. Passing SHA-512 of a
    /// seed yields the same key pair behavior as [`Ed25519::keypair_from_seed`].
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidLength`] unless `hash` is exactly 64 bytes.
    pub fn keypair_from_hash(hash: &[u8]) -> ApiResult<Ed25519KeyPair> {
        validation::length("Ed25519 hash", hash.len(), ED25519_EXPANDED_KEY_SIZE)?;
        let mut bytes = Zeroizing::new([0u8; ED25519_EXPANDED_KEY_SIZE]);
        bytes.copy_from_slice(hash);

        trace_event!(debug, "deriving Ed25519 key pair from hash");
        Ok(Ed25519KeyPair::from_secret(Ed25519SecretKey::from_expanded(&bytes)))
    }

    /// Sign `message` deterministically
    ///
    /// The signing process follows RFC 8032:
    /// 1. r = SHA-512(prefix || message) mod L
    /// 2. R = [r]B
    /// 3. k = SHA-512(R || A || message) mod L
    /// 4. s = (r + k*a) mod L
    /// 5. Return (R, s)
    pub fn sign_with<'a>(message: &[u8], key: impl Into<SigningKey<'a>>) -> Ed25519Signature {
        let signature = match key.into() {
            SigningKey::Secret(secret) => {
                trace_event!(
                    trace,
                    message_len = message.len(),
                    seed = secret.is_seed(),
                    "Ed25519 sign with secret key"
                );
                let expanded = secret.expand();
                let public = operations::derive_public_key(&expanded);
                operations::sign(&expanded, &public, message)
            }
            SigningKey::KeyPair(pair) => {
                trace_event!(
                    trace,
                    message_len = message.len(),
                    seed = pair.secret.is_seed(),
                    "Ed25519 sign with key pair"
                );
                let expanded = pair.secret.expand();
                operations::sign(&expanded, &pair.public.0, message)
            }
        };
        Ed25519Signature(signature)
    }

    /// Sign with a raw private key: a 32-byte seed or a 64-byte expanded key
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidLength`] for any other key length.
    pub fn sign_bytes(message: &[u8], private_key: &[u8]) -> ApiResult<Ed25519Signature> {
        let secret = <Ed25519SecretKey as SerializeSecret>::from_bytes(private_key)?;
        Ok(Self::sign_with(message, &secret))
    }

    /// Verify `signature` over `message` under `public_key`
    ///
    /// Rejects a non-canonical `s` (s >= L) and a public key that does not
    /// decode to a curve point. All checks run to completion before the
    /// result is formed.
    pub fn verify_with(
        message: &[u8],
        signature: &Ed25519Signature,
        public_key: &Ed25519PublicKey,
    ) -> bool {
        operations::verify(message, &signature.0, &public_key.0)
    }

    /// Verify raw signature and public key buffers
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidLength`] when the signature is not 64 bytes or the
    /// public key is not 32 bytes. A well-sized but invalid signature is
    /// `Ok(false)`.
    pub fn verify_bytes(message: &[u8], signature: &[u8], public_key: &[u8]) -> ApiResult<bool> {
        let signature = <Ed25519Signature as SerializeTrait>::from_bytes(signature)?;
        let public_key = <Ed25519PublicKey as SerializeTrait>::from_bytes(public_key)?;
        Ok(Self::verify_with(message, &signature, &public_key))
    }

    /// Produce the attached form `signature || message`
    pub fn sign_attached<'a>(message: &[u8], key: impl Into<SigningKey<'a>>) -> Vec<u8> {
        let signature = Self::sign_with(message, key);
        let mut signed = Vec::with_capacity(ED25519_SIGNATURE_SIZE + message.len());
        signed.extend_from_slice(&signature.0);
        signed.extend_from_slice(message);
        signed
    }

    /// Check an attached signature and return the message it covers
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidLength`] when `signed_message` is shorter than a
    /// signature, [`ApiError::InvalidSignature`] when verification fails.
    pub fn open(signed_message: &[u8], public_key: &Ed25519PublicKey) -> ApiResult<Vec<u8>> {
        validation::min_length("Ed25519 signed message", signed_message.len(), ED25519_SIGNATURE_SIZE)?;

        let (signature, message) = signed_message.split_at(ED25519_SIGNATURE_SIZE);
        let mut sig = [0u8; ED25519_SIGNATURE_SIZE];
        sig.copy_from_slice(signature);

        if !Self::verify_with(message, &Ed25519Signature(sig), public_key) {
            return Err(ApiError::InvalidSignature {
                context: "Ed25519 open",
            });
        }
        Ok(message.to_vec())
    }
}

impl SignatureTrait for Ed25519 {
    type PublicKey = Ed25519PublicKey;
    type SecretKey = Ed25519SecretKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = Ed25519KeyPair;

    fn name() -> &'static str {
        "Ed25519"
    }

    /// Generate a key pair from a fresh 32-byte seed drawn from `rng`
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed = Zeroizing::new([0u8; ED25519_SEED_SIZE]);
        rng.try_fill_bytes(&mut seed[..])
            .map_err(|_| ApiError::RandomGenerationError {
                context: "Ed25519 keypair",
            })?;
        Self::keypair_from_seed(&seed[..])
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        Ok(Self::sign_with(message, secret_key))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool {
        Self::verify_with(message, signature, public_key)
    }
}

impl SignatureDerive for Ed25519 {
    const SEED_SIZE: usize = ED25519_SEED_SIZE;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        Self::keypair_from_seed(seed)
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        Ok(secret_key.public_key())
    }
}
