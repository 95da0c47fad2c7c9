//! Session Management Use Case
//!
//! Exchanges a provider-issued identity token for a long-lived session
//! credential, encodes it for cookie transport, and revokes it again at
//! sign-out.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::SessionCredential;
use crate::domain::repository::{IdentityProvider, VerifyError};
use crate::error::{AuthError, AuthResult};

/// Session manager
///
/// The session TTL is fixed by configuration and deliberately
/// independent of the identity token's own (much shorter) lifetime.
pub struct CreateSessionUseCase<P> {
    provider: Option<Arc<P>>,
    config: Arc<AuthConfig>,
}

impl<P: IdentityProvider> CreateSessionUseCase<P> {
    pub fn new(provider: Option<Arc<P>>, config: Arc<AuthConfig>) -> Self {
        Self { provider, config }
    }

    /// Verify an identity token and mint a session credential
    ///
    /// Never mints without verification: a rejected token yields
    /// `InvalidToken`, an unreachable provider `ProviderUnavailable`,
    /// and a missing provider block `NotConfigured`.
    pub async fn execute(&self, id_token: &str) -> AuthResult<SessionCredential> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(AuthError::NotConfigured("identity provider"))?;

        provider
            .mint_session(id_token, self.config.session_ttl)
            .await
            .map_err(|e| match e {
                VerifyError::Unavailable(_) => {
                    tracing::warn!(error = %e, "Identity provider unreachable while minting session");
                    AuthError::ProviderUnavailable
                }
                other => AuthError::InvalidToken(other),
            })
    }

    /// Produce the Set-Cookie header value carrying a credential
    ///
    /// HttpOnly, Path=/, SameSite and Secure per config, Max-Age equal
    /// to the session TTL.
    pub fn encode_for_transport(&self, credential: &SessionCredential) -> String {
        self.config
            .session_cookie()
            .build_set_cookie(credential.as_str())
    }

    /// Produce the Set-Cookie header value clearing the session cookie
    ///
    /// Idempotent: clearing an absent or already-cleared cookie is the
    /// same header, and no server-side state is touched.
    pub fn revoke(&self) -> String {
        self.config.session_cookie().build_delete_cookie()
    }
}
