//! Text encodings for random byte output.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::SecretError;

/// Supported text encodings for [`secure_random_string`](crate::secure_random_string).
///
/// `UrlSafeBase64` substitutes `+` → `-` and `/` → `_` and strips `=` padding,
/// making the output safe to embed in URLs and filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hexadecimal, two characters per byte.
    Hex,
    /// Standard base64 with padding.
    Base64,
    /// URL-safe base64 without padding.
    UrlSafeBase64,
}

impl Encoding {
    /// Encode `bytes` under this encoding.
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::UrlSafeBase64 => URL_SAFE_NO_PAD.encode(bytes),
        }
    }
}

impl FromStr for Encoding {
    type Err = SecretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "base64url" | "urlsafe-base64" | "url-safe-base64" => Ok(Encoding::UrlSafeBase64),
            _ => Err(SecretError::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::UrlSafeBase64 => "base64url",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_encoding() {
        assert_eq!(Encoding::Hex.encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }

    #[test]
    fn test_base64_encoding() {
        assert_eq!(Encoding::Base64.encode(b"hello"), "aGVsbG8=");
    }

    #[test]
    fn test_url_safe_has_no_padding_or_specials() {
        // 0xfb 0xef 0xff encodes to "++//" territory in standard base64
        let encoded = Encoding::UrlSafeBase64.encode(&[0xfb, 0xef, 0xff, 0x01]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("hex".parse::<Encoding>().unwrap(), Encoding::Hex);
        assert_eq!("BASE64".parse::<Encoding>().unwrap(), Encoding::Base64);
        assert_eq!(
            "base64url".parse::<Encoding>().unwrap(),
            Encoding::UrlSafeBase64
        );
        assert!("rot13".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for enc in [Encoding::Hex, Encoding::Base64, Encoding::UrlSafeBase64] {
            assert_eq!(enc.to_string().parse::<Encoding>().unwrap(), enc);
        }
    }
}
