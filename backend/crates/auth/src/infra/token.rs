//! Session Credential Codec
//!
//! Wire format of the opaque session credential:
//! `base64url(payload_json) . base64url(hmac_sha256(payload_b64))`.
//! The value is opaque to every other layer; only this codec knows its
//! shape, so the format can change without touching callers.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::domain::entity::session::SessionCredential;
use crate::domain::repository::VerifyError;
use crate::domain::value_object::subject_id::SubjectId;

type HmacSha256 = Hmac<Sha256>;

/// Signed payload carried inside a session credential
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CredentialPayload {
    /// Session id for logging and correlation
    pub sid: Uuid,
    /// Subject identifier
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Mints and verifies session credentials with a shared HMAC secret
#[derive(Clone)]
pub(crate) struct CredentialCodec {
    secret: [u8; 32],
}

impl CredentialCodec {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Sign a payload into an opaque credential
    pub fn mint(
        &self,
        sub: &SubjectId,
        name: Option<String>,
        email: Option<String>,
        ttl: std::time::Duration,
    ) -> SessionCredential {
        let now = Utc::now();
        let exp = now + ChronoDuration::seconds(ttl.as_secs() as i64);

        let payload = CredentialPayload {
            sid: Uuid::new_v4(),
            sub: sub.as_str().to_string(),
            name,
            email,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        // Serializing a struct of plain fields cannot fail
        let json = serde_json::to_vec(&payload).unwrap_or_default();
        let encoded = URL_SAFE_NO_PAD.encode(&json);
        let sig = self.sign(encoded.as_bytes());

        SessionCredential::new(format!("{}.{}", encoded, URL_SAFE_NO_PAD.encode(sig)))
    }

    /// Verify signature and expiry, returning the embedded payload
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<CredentialPayload, VerifyError> {
        let (encoded, sig_b64) = token.split_once('.').ok_or(VerifyError::Malformed)?;

        let sig = URL_SAFE_NO_PAD
            .decode(sig_b64)
            .map_err(|_| VerifyError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(encoded.as_bytes());
        mac.verify_slice(&sig).map_err(|_| VerifyError::Malformed)?;

        let json = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| VerifyError::Malformed)?;
        let payload: CredentialPayload =
            serde_json::from_slice(&json).map_err(|_| VerifyError::Malformed)?;

        if payload.exp < now.timestamp() {
            return Err(VerifyError::Expired);
        }

        Ok(payload)
    }

    fn sign(&self, data: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(data);
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn codec() -> CredentialCodec {
        CredentialCodec::new([7u8; 32])
    }

    fn sub() -> SubjectId {
        SubjectId::new("user-1").unwrap()
    }

    #[test]
    fn test_mint_then_decode() {
        let codec = codec();
        let credential = codec.mint(
            &sub(),
            Some("Ada".to_string()),
            Some("ada@x.com".to_string()),
            Duration::from_secs(3600),
        );

        let payload = codec.decode(credential.as_str(), Utc::now()).unwrap();
        assert_eq!(payload.sub, "user-1");
        assert_eq!(payload.name.as_deref(), Some("Ada"));
        assert_eq!(payload.email.as_deref(), Some("ada@x.com"));
        assert!(payload.exp > payload.iat);
    }

    #[test]
    fn test_tampered_payload_is_malformed() {
        let codec = codec();
        let credential = codec.mint(&sub(), None, None, Duration::from_secs(3600));

        let (encoded, sig) = credential.as_str().split_once('.').unwrap();
        let mut bytes = URL_SAFE_NO_PAD.decode(encoded).unwrap();
        let json = String::from_utf8(bytes.clone()).unwrap();
        let forged = json.replace("user-1", "user-2");
        bytes = forged.into_bytes();
        let tampered = format!("{}.{}", URL_SAFE_NO_PAD.encode(&bytes), sig);

        assert!(matches!(
            codec.decode(&tampered, Utc::now()),
            Err(VerifyError::Malformed)
        ));
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let credential = codec().mint(&sub(), None, None, Duration::from_secs(3600));
        let other = CredentialCodec::new([9u8; 32]);

        assert!(matches!(
            other.decode(credential.as_str(), Utc::now()),
            Err(VerifyError::Malformed)
        ));
    }

    #[test]
    fn test_expired_credential() {
        let codec = codec();
        let credential = codec.mint(&sub(), None, None, Duration::from_secs(0));

        let later = Utc::now() + ChronoDuration::seconds(5);
        assert!(matches!(
            codec.decode(credential.as_str(), later),
            Err(VerifyError::Expired)
        ));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let codec = codec();
        for garbage in ["", "no-dot-here", "a.b", "!!!.???"] {
            assert!(matches!(
                codec.decode(garbage, Utc::now()),
                Err(VerifyError::Malformed)
            ));
        }
    }
}
