//! Constant-time comparison.

use subtle::ConstantTimeEq;

/// Compares two byte slices in constant time.
///
/// Scans the full length of both buffers regardless of where the first
/// mismatch occurs; only the lengths are observable through timing.
/// Slices of different lengths compare unequal immediately, which is
/// fine because length is not a secret here.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Constant-time comparison of two optional strings.
///
/// `None` on either side returns `false` immediately; the short-circuit
/// is allowed to run in variable time since no secret is involved.
pub fn compare(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => constant_time_eq(a.as_bytes(), b.as_bytes()),
        _ => false,
    }
}
