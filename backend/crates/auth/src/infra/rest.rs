//! Identity Provider REST Adapter
//!
//! Implements the credential verifier contract against the provider's
//! account-lookup REST surface. Identity tokens are verified remotely;
//! the session credential itself is minted and checked locally via the
//! HMAC codec, with a remote revocation check on demand.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::application::config::ProviderConfig;
use crate::domain::entity::session::{SessionClaims, SessionCredential};
use crate::domain::repository::{IdentityProvider, VerifyError};
use crate::domain::value_object::subject_id::SubjectId;
use crate::infra::token::CredentialCodec;

/// Account record returned by the provider's lookup endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountInfo {
    local_id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    /// Sessions issued before this instant have been revoked
    #[serde(default)]
    valid_since: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountInfo>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// Identity provider client backed by the accounts:lookup REST endpoint
pub struct RestIdentityProvider {
    http: reqwest::Client,
    api_base: String,
    project_id: String,
    codec: CredentialCodec,
}

impl RestIdentityProvider {
    pub fn new(config: &ProviderConfig, session_secret: [u8; 32]) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            codec: CredentialCodec::new(session_secret),
        }
    }

    fn lookup_url(&self) -> String {
        format!("{}/v1/accounts:lookup", self.api_base)
    }

    /// Call accounts:lookup with the given request body
    async fn lookup(&self, body: serde_json::Value) -> Result<LookupResponse, VerifyError> {
        let response = self
            .http
            .post(self.lookup_url())
            .header("X-Goog-Project-Id", &self.project_id)
            .json(&body)
            .send()
            .await
            .map_err(|e| VerifyError::Unavailable(e.to_string()))?;

        let status = response.status();

        if status.is_server_error() {
            return Err(VerifyError::Unavailable(format!(
                "provider returned {}",
                status
            )));
        }

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|b| b.error.message)
                .unwrap_or_default();

            return Err(if message.contains("TOKEN_EXPIRED") {
                VerifyError::Expired
            } else {
                VerifyError::Malformed
            });
        }

        response
            .json::<LookupResponse>()
            .await
            .map_err(|e| VerifyError::Unavailable(e.to_string()))
    }

    /// When the account has been invalidated after `issued_at`, the
    /// session is revoked
    fn is_revoked(account: &AccountInfo, issued_at: DateTime<Utc>) -> bool {
        account
            .valid_since
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .map(|valid_since| valid_since > issued_at.timestamp())
            .unwrap_or(false)
    }
}

impl IdentityProvider for RestIdentityProvider {
    async fn mint_session(
        &self,
        id_token: &str,
        ttl: std::time::Duration,
    ) -> Result<SessionCredential, VerifyError> {
        let response = self.lookup(json!({ "idToken": id_token })).await?;

        let account = response.users.into_iter().next().ok_or(VerifyError::Malformed)?;

        let sub = SubjectId::new(account.local_id).map_err(|_| VerifyError::Malformed)?;

        Ok(self
            .codec
            .mint(&sub, account.display_name, account.email, ttl))
    }

    async fn verify_session(
        &self,
        value: &str,
        check_revoked: bool,
    ) -> Result<SessionClaims, VerifyError> {
        let payload = self.codec.decode(value, Utc::now())?;

        let sub = SubjectId::new(&payload.sub).map_err(|_| VerifyError::Malformed)?;
        let issued_at = DateTime::from_timestamp(payload.iat, 0).ok_or(VerifyError::Malformed)?;

        if check_revoked {
            let response = self.lookup(json!({ "localId": [sub.as_str()] })).await?;

            match response.users.first() {
                Some(account) if Self::is_revoked(account, issued_at) => {
                    return Err(VerifyError::Revoked);
                }
                Some(_) => {}
                // Account deleted since the session was minted
                None => return Err(VerifyError::Revoked),
            }
        }

        Ok(SessionClaims {
            sid: payload.sid,
            sub,
            name: payload.name,
            email: payload.email,
            issued_at,
        })
    }
}
