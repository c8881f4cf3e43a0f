//! Secure and weak random value generation.
//!
//! Two clearly separated capabilities live here:
//!
//! - the `secure_*` functions and [`url_safe_token`] draw from the operating
//!   system's cryptographically secure source ([`OsRng`]) and are suitable for
//!   salts, tokens, and keys;
//! - [`weak_alphanumeric`] uses a fast non-cryptographic generator and is
//!   suitable ONLY for human-facing display identifiers.
//!
//! Every secure function has a `*_with` variant taking an explicit RNG so
//! tests can inject a seeded generator.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::{OsRng, SmallRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};

use crate::{Encoding, Result, SecretError};

/// Default byte length for generated tokens and salts.
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// The 62-character alphabet used by [`weak_alphanumeric`].
const ALPHANUMERIC: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate `len` bytes from the OS cryptographic random source.
///
/// Fails with [`SecretError::RandomSource`] if the entropy source is
/// unavailable; no partially filled buffer is ever returned.
pub fn secure_random_bytes(len: usize) -> Result<Vec<u8>> {
    secure_random_bytes_with(&mut OsRng, len)
}

/// Generate `len` bytes from the provided cryptographically secure RNG.
pub fn secure_random_bytes_with<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    rng.try_fill_bytes(&mut buf)?;
    Ok(buf)
}

/// Generate `len` random bytes and encode them as text.
///
/// Callers who want raw bytes use [`secure_random_bytes`]; callers who want
/// text pick an [`Encoding`] here.
pub fn secure_random_string(len: usize, encoding: Encoding) -> Result<String> {
    secure_random_string_with(&mut OsRng, len, encoding)
}

/// Generate an encoded random string from the provided secure RNG.
pub fn secure_random_string_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    len: usize,
    encoding: Encoding,
) -> Result<String> {
    let bytes = secure_random_bytes_with(rng, len)?;
    Ok(encoding.encode(&bytes))
}

/// Generate a URL-safe token from `len` random bytes.
///
/// The output is URL-safe base64: no `+`, `/`, or `=` characters. This is the
/// default salt generator for [`create_shadow`](crate::create_shadow).
pub fn url_safe_token(len: usize) -> Result<String> {
    secure_random_string(len, Encoding::UrlSafeBase64)
}

/// Generate a `len`-character alphanumeric identifier from a
/// NON-cryptographic generator.
///
/// Each character is chosen independently and uniformly from `[A-Za-z0-9]`.
/// Unsuitable for secrets, tokens, or anything security-relevant; intended
/// only for human-facing display identifiers.
pub fn weak_alphanumeric(len: usize) -> String {
    weak_alphanumeric_with(&mut SmallRng::from_entropy(), len)
}

/// Generate an alphanumeric identifier from the provided (weak) RNG.
pub fn weak_alphanumeric_with<R: Rng>(rng: &mut R, len: usize) -> String {
    let index = Uniform::from(0..ALPHANUMERIC.len());
    (0..len)
        .map(|_| ALPHANUMERIC[index.sample(rng)] as char)
        .collect()
}

/// Return an integer uniformly distributed in `[min, max]` inclusive, from
/// the OS cryptographic random source.
///
/// Fails with [`SecretError::InvalidRange`] if `min > max`.
pub fn secure_random_int(min: i64, max: i64) -> Result<i64> {
    secure_random_int_with(&mut OsRng, min, max)
}

/// Uniform inclusive-range integer from the provided secure RNG.
pub fn secure_random_int_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64> {
    if min > max {
        return Err(SecretError::InvalidRange { min, max });
    }
    Ok(Uniform::new_inclusive(min, max).sample(rng))
}
