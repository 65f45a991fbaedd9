//! Base64 and URL encoding/decoding functions

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;

/// Base64-encode text with the standard alphabet and padding.
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode standard-alphabet base64, tolerating missing padding.
///
/// The decoded bytes must be valid UTF-8; binary payloads are out of scope
/// for a text tool.
pub fn base64_decode(input: &str) -> Result<String, String> {
    let trimmed = input.trim().trim_end_matches('=');

    let bytes = STANDARD_NO_PAD
        .decode(trimmed)
        .map_err(|e| format!("Invalid base64: {e}"))?;

    String::from_utf8(bytes).map_err(|_| "Decoded data is not valid UTF-8".to_string())
}

/// Percent-encode text for use in a URL component.
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decode percent-encoded text.
pub fn url_decode(input: &str) -> Result<String, String> {
    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| format!("Invalid percent-encoding: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encode() {
        assert_eq!(base64_encode("hello world"), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_base64_decode() {
        assert_eq!(base64_decode("aGVsbG8gd29ybGQ=").unwrap(), "hello world");
    }

    #[test]
    fn test_base64_decode_without_padding() {
        assert_eq!(base64_decode("aGVsbG8").unwrap(), "hello");
    }

    #[test]
    fn test_base64_decode_invalid() {
        assert!(base64_decode("not base64!!").is_err());
    }

    #[test]
    fn test_base64_decode_non_utf8() {
        // 0xFF 0xFE is not valid UTF-8.
        let encoded = STANDARD.encode([0xFF, 0xFE]);
        let result = base64_decode(&encoded);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("UTF-8"));
    }

    #[test]
    fn test_base64_empty_round_trip() {
        assert_eq!(base64_decode(&base64_encode("")).unwrap(), "");
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("a b&c=d"), "a%20b%26c%3Dd");
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("a%20b%26c%3Dd").unwrap(), "a b&c=d");
    }

    #[test]
    fn test_url_decode_plus_is_literal() {
        // Component decoding: '+' is not a space.
        assert_eq!(url_decode("a+b").unwrap(), "a+b");
    }

    #[test]
    fn test_url_encode_unicode() {
        assert_eq!(url_decode(&url_encode("café ☕")).unwrap(), "café ☕");
    }
}
