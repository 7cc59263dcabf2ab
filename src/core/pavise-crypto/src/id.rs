//! Random identifier generation.

use rand::{rngs::OsRng, Rng};
use uuid::Uuid;

/// Alphabet for [`uid`]: `A-Z`, `a-z`, `0-9`.
const UID_ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Conventional length of the random portion of a [`uid`].
pub const DEFAULT_UID_LEN: usize = 15;

/// Generates `prefix` followed by `length` random alphanumeric characters.
///
/// Each character is a uniform CSPRNG draw over the 62-character
/// alphabet. Collision probability follows the birthday bound for the
/// chosen length; this is a best-effort low-collision identifier, not
/// a uniqueness guarantee.
pub fn uid(length: usize, prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + length);
    out.push_str(prefix);
    for _ in 0..length {
        let index = OsRng.gen_range(0..UID_ALPHABET.len());
        out.push(UID_ALPHABET[index] as char);
    }
    out
}

/// Generates a random version-4 UUID in its standard textual form.
///
/// Lowercase hex with hyphens at positions 8, 13, 18 and 23; the
/// version nibble is `4` and the variant nibble is one of `8`, `9`,
/// `a`, `b`. All other nibbles come from the CSPRNG.
pub fn uuid_v4() -> String {
    Uuid::new_v4().to_string()
}
