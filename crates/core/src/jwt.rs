//! Unverified JWT decoding functions
//!
//! Decodes the header and payload segments of a JWT without checking the
//! signature. This mirrors what a debugging tool needs: inspecting claims,
//! not authenticating them.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum JwtError {
    #[error("Invalid JWT: expected 3 dot-separated segments, found {0}")]
    MalformedToken(usize),

    #[error("Invalid base64url in {segment}: {message}")]
    InvalidBase64 { segment: &'static str, message: String },

    #[error("Invalid JSON in {segment}: {message}")]
    InvalidJson { segment: &'static str, message: String },
}

/// Decoded token with claim timestamps rendered for humans.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedJwt {
    pub header: serde_json::Value,
    pub payload: serde_json::Value,
    /// Raw (still-encoded) signature segment.
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<String>,
    /// Whether `exp` is in the past relative to the caller-supplied clock.
    /// `None` when the token carries no `exp` claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}

/// Convert a unix-seconds claim to a formatted UTC string.
pub fn format_claim_timestamp(timestamp: i64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

fn decode_segment(segment: &str, name: &'static str) -> Result<serde_json::Value, JwtError> {
    // Tolerate tokens that carry padding despite the base64url spec.
    let trimmed = segment.trim_end_matches('=');

    let bytes = URL_SAFE_NO_PAD
        .decode(trimmed)
        .map_err(|e| JwtError::InvalidBase64 {
            segment: name,
            message: e.to_string(),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| JwtError::InvalidJson {
        segment: name,
        message: e.to_string(),
    })
}

fn claim_seconds(payload: &serde_json::Value, claim: &str) -> Option<i64> {
    payload.get(claim).and_then(|v| v.as_i64())
}

/// Decode a JWT without verifying its signature.
///
/// `now` is unix seconds and only feeds the `expired` flag, keeping the
/// function deterministic.
pub fn decode_jwt(token: &str, now: i64) -> Result<DecodedJwt, JwtError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(JwtError::MalformedToken(segments.len()));
    }

    let header = decode_segment(segments[0], "header")?;
    let payload = decode_segment(segments[1], "payload")?;

    let exp = claim_seconds(&payload, "exp");

    Ok(DecodedJwt {
        issued_at: claim_seconds(&payload, "iat").and_then(format_claim_timestamp),
        expires_at: exp.and_then(format_claim_timestamp),
        not_before: claim_seconds(&payload, "nbf").and_then(format_claim_timestamp),
        expired: exp.map(|exp| exp < now),
        signature: segments[2].to_string(),
        header,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_segment(json: &str) -> String {
        URL_SAFE_NO_PAD.encode(json.as_bytes())
    }

    fn build_token(header: &str, payload: &str) -> String {
        format!(
            "{}.{}.fake-signature",
            encode_segment(header),
            encode_segment(payload)
        )
    }

    #[test]
    fn test_decode_jwt_basic() {
        let token = build_token(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"sub":"1234567890","name":"John Doe"}"#,
        );

        let decoded = decode_jwt(&token, 0).unwrap();

        assert_eq!(decoded.header["alg"], "HS256");
        assert_eq!(decoded.payload["name"], "John Doe");
        assert_eq!(decoded.signature, "fake-signature");
        assert!(decoded.expired.is_none());
    }

    #[test]
    fn test_decode_jwt_expired_token() {
        let token = build_token(r#"{"alg":"none"}"#, r#"{"exp":1000}"#);

        let decoded = decode_jwt(&token, 2000).unwrap();

        assert_eq!(decoded.expired, Some(true));
        assert!(decoded.expires_at.is_some());
    }

    #[test]
    fn test_decode_jwt_live_token() {
        let token = build_token(r#"{"alg":"none"}"#, r#"{"exp":2000}"#);

        let decoded = decode_jwt(&token, 1000).unwrap();

        assert_eq!(decoded.expired, Some(false));
    }

    #[test]
    fn test_decode_jwt_timestamp_claims() {
        let token = build_token(
            r#"{"alg":"none"}"#,
            r#"{"iat":1516239022,"exp":1516242622,"nbf":1516239022}"#,
        );

        let decoded = decode_jwt(&token, 0).unwrap();

        assert_eq!(
            decoded.issued_at.as_deref(),
            Some("2018-01-18 01:30:22 UTC")
        );
        assert!(decoded.expires_at.is_some());
        assert!(decoded.not_before.is_some());
    }

    #[test]
    fn test_decode_jwt_wrong_segment_count() {
        let result = decode_jwt("only.two", 0);

        assert_eq!(result.unwrap_err(), JwtError::MalformedToken(2));
    }

    #[test]
    fn test_decode_jwt_bad_base64() {
        let result = decode_jwt("!!!.???.sig", 0);

        assert!(matches!(
            result.unwrap_err(),
            JwtError::InvalidBase64 { segment: "header", .. }
        ));
    }

    #[test]
    fn test_decode_jwt_bad_json_payload() {
        let token = format!(
            "{}.{}.sig",
            encode_segment(r#"{"alg":"none"}"#),
            encode_segment("not json")
        );

        let result = decode_jwt(&token, 0);

        assert!(matches!(
            result.unwrap_err(),
            JwtError::InvalidJson { segment: "payload", .. }
        ));
    }

    #[test]
    fn test_decode_jwt_tolerates_padding() {
        let padded = format!(
            "{}==.{}.sig",
            encode_segment(r#"{"alg":"none"}"#),
            encode_segment(r#"{"sub":"x"}"#)
        );

        let decoded = decode_jwt(&padded, 0).unwrap();

        assert_eq!(decoded.payload["sub"], "x");
    }

    #[test]
    fn test_decode_jwt_surrounding_whitespace() {
        let token = format!("  {}  ", build_token(r#"{"alg":"none"}"#, r#"{"a":1}"#));

        assert!(decode_jwt(&token, 0).is_ok());
    }

    #[test]
    fn test_format_claim_timestamp() {
        assert_eq!(
            format_claim_timestamp(0).as_deref(),
            Some("1970-01-01 00:00:00 UTC")
        );
    }
}
