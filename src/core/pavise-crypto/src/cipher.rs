//! AES-256-CBC authenticated encryption (encrypt-then-MAC).
//!
//! CBC has no built-in integrity, so every envelope carries an
//! HMAC-SHA256 tag computed over the raw ciphertext and verified in
//! constant time before any decryption is attempted.
//!
//! Envelope layout, base64-encoded as a whole:
//! `IV (16 bytes) || HMAC tag (32 bytes) || ciphertext (variable)`

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

use crate::compare::constant_time_eq;
use crate::error::CryptoError;
use crate::random::generate_iv;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Size of an AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a CBC initialization vector in bytes.
pub const IV_SIZE: usize = 16;

/// Size of an HMAC-SHA256 authentication tag in bytes.
pub const TAG_SIZE: usize = 32;

fn check_key(key: &[u8]) -> Result<(), CryptoError> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKey(format!(
            "expected {} bytes, got {}",
            KEY_SIZE,
            key.len()
        )));
    }
    Ok(())
}

fn authentication_tag(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
    mac.update(ciphertext);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Encrypts `plaintext` under a 32-byte key.
///
/// A random IV is generated per call, the plaintext is encrypted with
/// AES-256-CBC (PKCS#7 padding), and an HMAC-SHA256 tag over the raw
/// ciphertext is computed with the same key. Returns the base64-encoded
/// envelope `IV || tag || ciphertext`.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKey`] if `key` is not exactly 32 bytes.
pub fn encrypt(plaintext: &str, key: &[u8]) -> Result<String, CryptoError> {
    check_key(key)?;

    let iv = generate_iv();
    let ciphertext = Aes256CbcEnc::new_from_slices(key, &iv)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let tag = authentication_tag(key, &ciphertext)?;

    let mut envelope = Vec::with_capacity(IV_SIZE + TAG_SIZE + ciphertext.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&tag);
    envelope.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(envelope))
}

/// Decrypts an envelope produced by [`encrypt`].
///
/// Returns `Ok(None)` for anything that amounts to tampering or a
/// wrong key: undecodable base64, an envelope too short to hold an IV
/// and tag, or an authentication tag mismatch. The tag check uses
/// [`constant_time_eq`]. A padding or UTF-8 failure after a valid tag
/// should not happen; it is handled defensively as `Ok(None)` rather
/// than a panic.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKey`] if `key` is not exactly 32 bytes.
pub fn decrypt(envelope: &str, key: &[u8]) -> Result<Option<String>, CryptoError> {
    check_key(key)?;

    let Ok(raw) = BASE64.decode(envelope) else {
        debug!("decrypt rejected: envelope is not valid base64");
        return Ok(None);
    };

    if raw.len() < IV_SIZE + TAG_SIZE {
        debug!(len = raw.len(), "decrypt rejected: envelope too short");
        return Ok(None);
    }

    let (iv, rest) = raw.split_at(IV_SIZE);
    let (tag, ciphertext) = rest.split_at(TAG_SIZE);

    let expected = authentication_tag(key, ciphertext)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;
    if !constant_time_eq(&expected, tag) {
        debug!("decrypt rejected: authentication tag mismatch");
        return Ok(None);
    }

    let cipher = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;
    let plaintext = match cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext) {
        Ok(plaintext) => Zeroizing::new(plaintext),
        Err(_) => {
            debug!("decrypt rejected: padding check failed after valid tag");
            return Ok(None);
        }
    };

    match std::str::from_utf8(&plaintext) {
        Ok(s) => Ok(Some(s.to_string())),
        Err(_) => {
            debug!("decrypt rejected: recovered plaintext is not UTF-8");
            Ok(None)
        }
    }
}
