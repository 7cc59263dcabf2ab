//! Adaptive password hashing.
//!
//! Argon2id with the provider's default parameters and a random
//! per-password salt. Output is a self-describing PHC string, so cost
//! parameters can be raised in a future release without breaking
//! verification of existing hashes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::CryptoError;

/// Hashes `password` with Argon2id and a fresh random salt.
///
/// The returned PHC string embeds the algorithm, parameters, and salt,
/// and is the only input [`verify_password`] needs besides the
/// candidate password.
///
/// # Errors
///
/// Returns [`CryptoError::EncryptionFailed`] if the hasher rejects the
/// input; this does not happen for ordinary UTF-8 passwords.
pub fn hash_password(password: &str) -> Result<String, CryptoError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies `password` against a PHC hash produced by [`hash_password`].
///
/// Returns `false` for a non-matching password and for a malformed
/// hash string; a corrupt stored hash is an authentication failure,
/// not a caller error. The underlying comparison is constant-time.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
