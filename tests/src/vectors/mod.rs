//! Known-answer test vectors
//!
//! Vectors are stored as JSON next to their loader and embedded at compile
//! time, so the tests do not depend on the working directory.


use thiserror::Error;

/// Failure while loading or checking a test vector
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("malformed vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("{field}: expected {expected} bytes, got {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("crypto operation failed: {0}")]
    Crypto(#[from] edcrypt::api::Error),

    #[error("{vector}: {field} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        vector: String,
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("{0}: signature was rejected")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;
