//! # Pavise Crypto
//!
//! Good-defaults cryptographic utilities for application code.
//!
//! Every operation is a stateless free function (or a method on a
//! stateless key type), safe for unrestricted concurrent use:
//!
//! - Generic string hashing with optional pepper ([`hash()`])
//! - Adaptive password hashing and verification ([`hash_password`],
//!   [`verify_password`])
//! - Constant-time comparison ([`compare()`], [`constant_time_eq`])
//! - AES-256-CBC + HMAC-SHA256 authenticated encryption ([`encrypt`],
//!   [`decrypt`], [`SymmetricKey`])
//! - CSPRNG-backed tokens and identifiers ([`random_hex`], [`uid`],
//!   [`uuid_v4`])
//!
//! No cryptographic algorithm is implemented here; each function
//! validates its inputs, composes vetted RustCrypto primitives, and
//! formats the result.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cipher;
pub mod compare;
pub mod error;
pub mod hash;
pub mod id;
pub mod keys;
pub mod password;
pub mod random;

pub use cipher::{decrypt, encrypt, IV_SIZE, KEY_SIZE, TAG_SIZE};
pub use compare::{compare, constant_time_eq};
pub use error::CryptoError;
pub use hash::{hash, hash_with, HashAlgorithm};
pub use id::{uid, uuid_v4, DEFAULT_UID_LEN};
pub use keys::SymmetricKey;
pub use password::{hash_password, verify_password};
pub use random::{generate_bytes, random_hex, DEFAULT_TOKEN_LEN};
