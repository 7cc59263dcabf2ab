//! Cryptographically secure random generation.
//!
//! Uses the operating system's CSPRNG for all random number generation.
//! Nothing in this crate ever draws from a statistical-quality
//! generator such as `thread_rng`.

use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

use crate::cipher::{IV_SIZE, KEY_SIZE};

/// Conventional length of a [`random_hex`] token.
pub const DEFAULT_TOKEN_LEN: usize = 18;

/// Generates a cryptographically secure random 256-bit key.
///
/// The key is wrapped in `Zeroizing` to ensure it is cleared from
/// memory when dropped.
pub fn generate_key() -> Zeroizing<[u8; KEY_SIZE]> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    OsRng.fill_bytes(&mut *key);
    key
}

/// Generates a cryptographically secure random IV for AES-CBC.
pub fn generate_iv() -> [u8; IV_SIZE] {
    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Generates cryptographically secure random bytes.
pub fn generate_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generates a random lowercase-hex token of exactly `length` characters.
///
/// Draws `ceil(length / 2)` random bytes, hex-encodes them, and
/// truncates to `length`, so odd lengths work too. Character set is
/// `[0-9a-f]`. [`DEFAULT_TOKEN_LEN`] is the conventional length for
/// session-token style usage.
pub fn random_hex(length: usize) -> String {
    let bytes = generate_bytes(length.div_ceil(2));
    let mut token = hex::encode(bytes);
    token.truncate(length);
    token
}
