//! Secret-handling utilities.
//!
//! This crate provides:
//! - Salted shadow (digest) creation and verification for password-style
//!   secret storage
//! - Cryptographically secure random bytes, strings, tokens, and integers
//! - A clearly separated weak generator for display identifiers
//! - Single-shot digest helpers (SHA-1, SHA-256, SHA-512, deprecated MD5)
//!
//! # Example
//!
//! ```rust
//! use secret_utils::{create_shadow, verify_secret};
//!
//! let record = create_shadow(b"correct horse battery staple")?;
//! assert!(verify_secret(&record.salt, b"correct horse battery staple", &record.digest)?);
//! # Ok::<(), secret_utils::SecretError>(())
//! ```
//!
//! Callers own persistence of the returned salt, digest, and algorithm; this
//! crate stores nothing.

#![warn(missing_docs)]

mod digest;
mod encoding;
mod error;
mod random;
mod shadow;

pub use digest::{digest, md5, sha1, sha256, sha512};
pub use encoding::Encoding;
pub use error::{Result, SecretError};
pub use random::{
    secure_random_bytes, secure_random_bytes_with, secure_random_int, secure_random_int_with,
    secure_random_string, secure_random_string_with, url_safe_token, weak_alphanumeric,
    weak_alphanumeric_with, DEFAULT_TOKEN_BYTES,
};
pub use shadow::{
    create_shadow, create_shadow_with, verify_secret, verify_secret_with, ShadowRecord,
    DEFAULT_ALGORITHM,
};
