//! Secure key types with automatic memory zeroization.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::KEY_SIZE;
use crate::error::CryptoError;
use crate::random::generate_key;

/// A 256-bit symmetric encryption key with automatic zeroization.
///
/// The raw 32 bytes are what [`crate::cipher::encrypt`] and
/// [`crate::cipher::decrypt`] take as key material; [`Self::to_hex`]
/// exists only as a 64-character serialization for storage or
/// transport, and [`Self::from_hex`] is its exact inverse. The hex
/// string itself is never a valid key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: [u8; KEY_SIZE],
}

impl SymmetricKey {
    /// Generates a new random symmetric key from the OS CSPRNG.
    pub fn generate() -> Self {
        let key = generate_key();
        Self { bytes: *key }
    }

    /// Creates a symmetric key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKey(format!(
                "expected {} bytes, got {}",
                KEY_SIZE,
                bytes.len()
            )));
        }

        let mut key_bytes = [0u8; KEY_SIZE];
        key_bytes.copy_from_slice(bytes);

        Ok(Self { bytes: key_bytes })
    }

    /// Decodes a key from its 64-character hex serialization.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid hex or does not
    /// decode to exactly 32 bytes.
    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let bytes =
            hex::decode(encoded).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Returns the key as a 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Returns the raw key bytes.
    ///
    /// Use with caution - the returned slice is not zeroized automatically.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
