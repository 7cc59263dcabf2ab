//! Cryptographic error types.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
///
/// Authentication failure during decryption is deliberately absent:
/// a tampered or wrong-key envelope is an expected operational outcome
/// and is reported as `Ok(None)` by [`crate::cipher::decrypt`].
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The requested digest algorithm is not in the supported set.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Invalid key material (wrong length or malformed encoding).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed.
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}
