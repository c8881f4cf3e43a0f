//! Digest computation for caller-selected algorithms.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use tracing::warn;

use crate::{Result, SecretError};

/// Hex digest of `parts` fed into one streaming context, in order.
fn hash_parts<D: Digest>(parts: &[&[u8]]) -> String {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

fn warn_md5() {
    warn!("md5 is cryptographically broken and deprecated, use sha256 where possible");
}

/// Digest `parts` under the named algorithm, as a single stream.
///
/// Shared by [`digest`] and the shadow protocol, which feeds salt and secret
/// through one context.
pub(crate) fn digest_parts(algorithm: &str, parts: &[&[u8]]) -> Result<String> {
    match algorithm.to_ascii_lowercase().as_str() {
        "sha1" | "sha-1" => Ok(hash_parts::<Sha1>(parts)),
        "sha256" | "sha-256" => Ok(hash_parts::<Sha256>(parts)),
        "sha512" | "sha-512" => Ok(hash_parts::<Sha512>(parts)),
        "md5" => {
            warn_md5();
            Ok(hash_parts::<Md5>(parts))
        }
        _ => Err(SecretError::UnsupportedAlgorithm(algorithm.to_string())),
    }
}

/// Compute the hex digest of `data` under the named algorithm.
///
/// Algorithm names are matched ASCII case-insensitively; `sha1`, `sha256`,
/// `sha512`, and `md5` (deprecated) are supported. Unknown names fail fast
/// with [`SecretError::UnsupportedAlgorithm`].
pub fn digest(algorithm: &str, data: &[u8]) -> Result<String> {
    digest_parts(algorithm, &[data])
}

/// SHA-1 hex digest of `data`.
pub fn sha1(data: &[u8]) -> String {
    hash_parts::<Sha1>(&[data])
}

/// SHA-256 hex digest of `data`.
pub fn sha256(data: &[u8]) -> String {
    hash_parts::<Sha256>(&[data])
}

/// SHA-512 hex digest of `data`.
pub fn sha512(data: &[u8]) -> String {
    hash_parts::<Sha512>(&[data])
}

/// MD5 hex digest of `data`.
///
/// Deprecated: MD5 is cryptographically broken. Each call emits a warning
/// through `tracing`; execution is never blocked.
pub fn md5(data: &[u8]) -> String {
    warn_md5();
    hash_parts::<Md5>(&[data])
}
