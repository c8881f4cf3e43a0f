//! Salted shadow creation and verification.
//!
//! A shadow is the salted digest of a secret, safe to store in place of the
//! plaintext. Creation feeds `salt || secret` through one streaming digest
//! context and returns the salt, the hex digest, and the algorithm name so
//! the caller can persist all three and verify later.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::digest::digest_parts;
use crate::random::{url_safe_token, DEFAULT_TOKEN_BYTES};
use crate::Result;

/// Digest algorithm used when the caller does not pick one.
///
/// Historical versions of this utility disagreed between SHA-256 and MD5; the
/// default here is explicitly SHA-256. MD5 remains available only as an
/// explicit, deprecated opt-in via [`create_shadow_with`].
pub const DEFAULT_ALGORITHM: &str = "sha256";

/// A verifiable snapshot of a secret at creation time.
///
/// Immutable once created and owned entirely by the caller; this crate never
/// stores it. `digest` is the hex digest of `salt` bytes followed by the
/// secret bytes under `algorithm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowRecord {
    /// Salt mixed in front of the secret before digesting.
    pub salt: String,
    /// Hex-encoded digest of `salt || secret`.
    pub digest: String,
    /// Name of the digest algorithm used.
    pub algorithm: String,
}

impl ShadowRecord {
    /// Check `secret` against this record using its own salt and algorithm.
    pub fn verify(&self, secret: &[u8]) -> Result<bool> {
        verify_secret_with(&self.salt, secret, &self.digest, &self.algorithm)
    }
}

/// Create a shadow of `secret` with the default algorithm and a fresh salt.
///
/// The salt is a URL-safe token from 32 random bytes. Fails only if the OS
/// entropy source is unavailable.
pub fn create_shadow(secret: &[u8]) -> Result<ShadowRecord> {
    let salt = url_safe_token(DEFAULT_TOKEN_BYTES)?;
    create_shadow_with(secret, DEFAULT_ALGORITHM, Some(&salt))
}

/// Create a shadow of `secret` with an explicit algorithm and optional salt.
///
/// A supplied salt is used verbatim, even when empty; when `salt` is `None` a
/// fresh URL-safe token is generated. Unknown algorithm names fail with
/// [`SecretError::UnsupportedAlgorithm`](crate::SecretError::UnsupportedAlgorithm).
pub fn create_shadow_with(
    secret: &[u8],
    algorithm: &str,
    salt: Option<&str>,
) -> Result<ShadowRecord> {
    let salt = match salt {
        Some(salt) => salt.to_string(),
        None => url_safe_token(DEFAULT_TOKEN_BYTES)?,
    };
    let digest = digest_parts(algorithm, &[salt.as_bytes(), secret])?;

    Ok(ShadowRecord {
        salt,
        digest,
        algorithm: algorithm.to_string(),
    })
}

/// Verify `secret` against a stored digest using the default algorithm.
pub fn verify_secret(salt: &str, secret: &[u8], expected_digest: &str) -> Result<bool> {
    verify_secret_with(salt, secret, expected_digest, DEFAULT_ALGORITHM)
}

/// Verify `secret` against a stored digest under the named algorithm.
///
/// Recomputes the digest of `salt || secret` and compares it to
/// `expected_digest` in constant time, so the comparison leaks nothing about
/// where the first mismatching character sits.
pub fn verify_secret_with(
    salt: &str,
    secret: &[u8],
    expected_digest: &str,
    algorithm: &str,
) -> Result<bool> {
    let computed = digest_parts(algorithm, &[salt.as_bytes(), secret])?;
    Ok(constant_time_eq(
        computed.as_bytes(),
        expected_digest.as_bytes(),
    ))
}

/// Constant-time equality; the length check is not secret-dependent since
/// digests have a fixed length per algorithm.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_verify_round_trip() {
        let record = create_shadow(b"hunter2").unwrap();
        assert!(verify_secret(&record.salt, b"hunter2", &record.digest).unwrap());
    }

    #[test]
    fn test_wrong_secret_fails() {
        let record = create_shadow(b"hunter2").unwrap();
        assert!(!verify_secret(&record.salt, b"hunter3", &record.digest).unwrap());
    }

    #[test]
    fn test_tampered_digest_fails() {
        let record = create_shadow(b"hunter2").unwrap();

        // Flip one bit of the first hex nibble
        let mut tampered = record.digest.clone().into_bytes();
        tampered[0] ^= 0x01;
        let tampered = String::from_utf8(tampered).unwrap();
        assert_ne!(tampered, record.digest);

        assert!(!verify_secret(&record.salt, b"hunter2", &tampered).unwrap());
    }

    #[test]
    fn test_default_algorithm_is_recorded() {
        let record = create_shadow(b"secret").unwrap();
        assert_eq!(record.algorithm, DEFAULT_ALGORITHM);
        assert_eq!(record.digest.len(), 64);
    }

    #[test]
    fn test_fresh_salts_differ() {
        let a = create_shadow(b"same secret").unwrap();
        let b = create_shadow(b"same secret").unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn test_explicit_salt_is_reproducible() {
        let a = create_shadow_with(b"secret", "sha256", Some("fixed-salt")).unwrap();
        let b = create_shadow_with(b"secret", "sha256", Some("fixed-salt")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_secrets_different_digests() {
        let a = create_shadow_with(b"one", "sha256", Some("salt")).unwrap();
        let b = create_shadow_with(b"two", "sha256", Some("salt")).unwrap();
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn test_empty_salt_is_plain_digest() {
        let record = create_shadow_with(b"secret", "sha256", Some("")).unwrap();
        assert_eq!(record.digest, crate::sha256(b"secret"));
    }

    #[test]
    fn test_salt_then_secret_ordering() {
        let record = create_shadow_with(b"secret", "sha256", Some("salt")).unwrap();
        assert_eq!(record.digest, crate::sha256(b"saltsecret"));
    }

    #[test]
    fn test_md5_opt_in_still_works() {
        let record = create_shadow_with(b"legacy", "md5", Some("s")).unwrap();
        assert_eq!(record.digest.len(), 32);
        assert!(record.verify(b"legacy").unwrap());
    }

    #[test]
    fn test_unknown_algorithm_errors() {
        assert!(create_shadow_with(b"secret", "crc32", Some("salt")).is_err());
        assert!(verify_secret_with("salt", b"secret", "00", "crc32").is_err());
    }

    #[test]
    fn test_record_verify_matches_free_function() {
        let record = create_shadow_with(b"pw", "sha1", None).unwrap();
        assert_eq!(
            record.verify(b"pw").unwrap(),
            verify_secret_with(&record.salt, b"pw", &record.digest, "sha1").unwrap()
        );
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = create_shadow(b"secret").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: ShadowRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
