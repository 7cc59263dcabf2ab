//! Generic string hashing with optional pepper.
//!
//! Thin wrapper over the SHA-2 family. Algorithm names are resolved
//! case-insensitively against a fixed registry; output is always the
//! lowercase hex digest.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::error::CryptoError;

/// Digest algorithms supported by [`hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-224 (28-byte digest).
    Sha224,
    /// SHA-256 (32-byte digest).
    Sha256,
    /// SHA-384 (48-byte digest).
    Sha384,
    /// SHA-512 (64-byte digest).
    Sha512,
}

impl HashAlgorithm {
    /// All supported algorithms, in registry order.
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Canonical lowercase name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    /// Resolves an algorithm name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hashes `input` with the named algorithm, returning the lowercase hex digest.
///
/// When `pepper` is present it is prepended to `input` before hashing,
/// so `hash("abc", "sha256", Some("X")) == hash("Xabc", "sha256", None)`.
/// The pepper is an explicit parameter; callers that keep one in
/// application configuration pass it in themselves.
///
/// # Errors
///
/// Returns [`CryptoError::UnsupportedAlgorithm`] if `algorithm` is not
/// one of the registry names (case-insensitive).
pub fn hash(input: &str, algorithm: &str, pepper: Option<&str>) -> Result<String, CryptoError> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(hash_with(input, algorithm, pepper))
}

/// Same as [`hash`] but with a pre-resolved [`HashAlgorithm`], so it
/// cannot fail.
pub fn hash_with(input: &str, algorithm: HashAlgorithm, pepper: Option<&str>) -> String {
    let digest = match pepper {
        Some(pepper) => {
            let mut data = Vec::with_capacity(pepper.len() + input.len());
            data.extend_from_slice(pepper.as_bytes());
            data.extend_from_slice(input.as_bytes());
            algorithm.digest(&data)
        }
        None => algorithm.digest(input.as_bytes()),
    };
    hex::encode(digest)
}
