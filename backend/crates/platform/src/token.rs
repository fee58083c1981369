//! Signed, time-limited tokens
//!
//! Compact HS256 JSON Web Tokens. The claim object is flattened next to the
//! registered `iat`/`exp` fields. Expiry is checked against a caller-supplied
//! clock so that it can be tested without sleeping.

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::crypto::random_bytes;

/// Token codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No signing secret was configured
    #[error("token signing secret is missing or empty")]
    MissingSecret,

    /// Tag does not match, the header is not HS256, or the token is not a JWT
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Signature is fine but the claims are not what we issue
    #[error("token payload is malformed")]
    Malformed,

    /// Current time is past `exp`
    #[error("token has expired")]
    Expired,

    /// Claim could not be serialized
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            JwtErrorKind::Json(_) | JwtErrorKind::MissingRequiredClaim(_) => TokenError::Malformed,
            _ => TokenError::InvalidSignature,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope<C> {
    #[serde(flatten)]
    claim: C,
    iat: i64,
    exp: i64,
}

/// Issues and verifies signed, time-limited tokens
///
/// The key is zeroized on drop and never printed.
pub struct TokenCodec {
    key: Zeroizing<Vec<u8>>,
}

impl TokenCodec {
    /// Build a codec from the server secret
    ///
    /// An empty secret is a configuration error; there is no fallback key.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, TokenError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(Self {
            key: Zeroizing::new(secret.to_vec()),
        })
    }

    /// Codec with a fresh random 256-bit key (development and tests)
    pub fn random() -> Self {
        Self {
            key: Zeroizing::new(random_bytes(32)),
        }
    }

    /// Sign `claim` with an expiry of now + `ttl`
    pub fn issue<C: Serialize>(&self, claim: &C, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(claim, ttl, Utc::now().timestamp())
    }

    /// Sign `claim` as if issued at `issued_at` (unix seconds)
    pub fn issue_at<C: Serialize>(
        &self,
        claim: &C,
        ttl: Duration,
        issued_at: i64,
    ) -> Result<String, TokenError> {
        let ttl = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let envelope = Envelope {
            claim,
            iat: issued_at,
            exp: issued_at.saturating_add(ttl),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &envelope,
            &EncodingKey::from_secret(&self.key),
        )
        .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify `token` against the current time and return its claim
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify `token` as of `now` (unix seconds)
    ///
    /// Only HS256 headers are accepted. The signature is checked before the
    /// expiry, so a forged token never reports `Expired`.
    pub fn verify_at<C: DeserializeOwned>(&self, token: &str, now: i64) -> Result<C, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        // `exp` is still required; it is compared against `now` below
        validation.validate_exp = false;

        let envelope =
            decode::<Envelope<C>>(token, &DecodingKey::from_secret(&self.key), &validation)?
                .claims;

        if now > envelope.exp {
            return Err(TokenError::Expired);
        }

        Ok(envelope.claim)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{from_base64url, to_base64url};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Subject {
        id: String,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Claim {
        user: Subject,
    }

    fn claim(id: &str) -> Claim {
        Claim {
            user: Subject { id: id.to_string() },
        }
    }

    const TTL: Duration = Duration::from_secs(360_000);

    #[test]
    fn test_rejects_empty_secret() {
        assert_eq!(TokenCodec::new("").unwrap_err(), TokenError::MissingSecret);
    }

    #[test]
    fn test_issue_then_verify() {
        let codec = TokenCodec::new("s3cret").unwrap();
        let token = codec.issue(&claim("u1"), TTL).unwrap();

        assert_eq!(token.split('.').count(), 3);
        let decoded: Claim = codec.verify(&token).unwrap();
        assert_eq!(decoded, claim("u1"));
    }

    #[test]
    fn test_payload_shape() {
        let codec = TokenCodec::new("s3cret").unwrap();
        let token = codec.issue_at(&claim("u1"), TTL, 1_000).unwrap();
        let payload = token.split('.').nth(1).unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&from_base64url(payload).unwrap()).unwrap();

        assert_eq!(json["user"]["id"], "u1");
        assert_eq!(json["iat"], 1_000);
        assert_eq!(json["exp"], 361_000);
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = TokenCodec::new("s3cret").unwrap();
        let token = codec.issue_at(&claim("u1"), TTL, 1_000).unwrap();

        assert!(codec.verify_at::<Claim>(&token, 361_000).is_ok());
        assert_eq!(
            codec.verify_at::<Claim>(&token, 361_001).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_other_secret_is_invalid_signature() {
        let issuer = TokenCodec::new("s3cret").unwrap();
        let other = TokenCodec::new("different").unwrap();
        let token = issuer.issue(&claim("u1"), TTL).unwrap();

        assert_eq!(
            other.verify::<Claim>(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let issuer = TokenCodec::new("s3cret").unwrap();
        let other = TokenCodec::new("different").unwrap();
        let token = issuer.issue_at(&claim("u1"), TTL, 0).unwrap();

        // Both expired and forged: forgery wins
        assert_eq!(
            other.verify_at::<Claim>(&token, 10_000_000).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_tampered_payload_is_invalid_signature() {
        let codec = TokenCodec::new("s3cret").unwrap();
        let token = codec.issue(&claim("u1"), TTL).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let forged_payload = to_base64url(
            serde_json::to_string(&serde_json::json!({
                "user": {"id": "admin"},
                "iat": 0,
                "exp": i64::MAX
            }))
            .unwrap()
            .as_bytes(),
        );
        let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert_eq!(
            codec.verify::<Claim>(&forged).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_garbage_is_invalid_signature() {
        let codec = TokenCodec::new("s3cret").unwrap();
        for garbage in ["", "null", "a.b", "a.b.c.d", "!!.??.**"] {
            assert_eq!(
                codec.verify::<Claim>(garbage).unwrap_err(),
                TokenError::InvalidSignature,
                "input {garbage:?}"
            );
        }
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let codec = TokenCodec::new("s3cret").unwrap();
        let envelope = Envelope {
            claim: claim("u1"),
            iat: 0,
            exp: i64::MAX,
        };
        let hs512 = encode(
            &Header::new(Algorithm::HS512),
            &envelope,
            &EncodingKey::from_secret(b"s3cret"),
        )
        .unwrap();

        assert_eq!(
            codec.verify::<Claim>(&hs512).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_header_names_hs256() {
        let codec = TokenCodec::new("s3cret").unwrap();
        let token = codec.issue(&claim("u1"), TTL).unwrap();
        let header = jsonwebtoken::decode_header(&token).unwrap();

        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn test_debug_hides_key() {
        let codec = TokenCodec::new("s3cret").unwrap();
        assert!(!format!("{:?}", codec).contains("s3cret"));
    }
}
