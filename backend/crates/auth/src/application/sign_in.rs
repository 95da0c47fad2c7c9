//! Sign-In Use Case
//!
//! Establishes a session from a fresh identity token and cross-checks
//! the submitted email against the verified token's claims. The token
//! is always verified through the provider; the submitted email is
//! untrusted input and never shortcuts verification.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::create_session::CreateSessionUseCase;
use crate::domain::entity::session::SessionCredential;
use crate::domain::repository::IdentityProvider;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign-in request
#[derive(Debug, Clone)]
pub struct SignInInput {
    pub email: String,
    pub id_token: String,
}

/// Sign-in result: the minted credential plus its transport encoding
#[derive(Debug)]
pub struct SignInOutput {
    pub credential: SessionCredential,
    pub set_cookie: String,
}

/// Sign-in service
pub struct SignInUseCase<P> {
    sessions: CreateSessionUseCase<P>,
    provider: Option<Arc<P>>,
}

impl<P: IdentityProvider> SignInUseCase<P> {
    pub fn new(provider: Option<Arc<P>>, config: Arc<AuthConfig>) -> Self {
        Self {
            sessions: CreateSessionUseCase::new(provider.clone(), config),
            provider,
        }
    }

    /// Verify the identity token, mint a session, and bind it to the
    /// submitted email
    ///
    /// Rejects the sign-in when the verified token's email claim is
    /// absent or differs from the submitted email.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let submitted = Email::new(input.email)?;

        let credential = self.sessions.execute(&input.id_token).await?;

        // The credential just minted is the ground truth for claims.
        let provider = self
            .provider
            .as_ref()
            .ok_or(AuthError::NotConfigured("identity provider"))?;
        let claims = provider
            .verify_session(credential.as_str(), false)
            .await
            .map_err(AuthError::InvalidToken)?;

        let claim_email = claims.email.as_deref().unwrap_or("");
        if !claim_email.eq_ignore_ascii_case(submitted.as_str()) {
            return Err(AuthError::EmailMismatch);
        }

        tracing::info!(sid = %claims.sid, sub = %claims.sub, "Session established");

        let set_cookie = self.sessions.encode_for_transport(&credential);

        Ok(SignInOutput {
            credential,
            set_cookie,
        })
    }

    /// Clear the session cookie
    pub fn sign_out(&self) -> String {
        self.sessions.revoke()
    }
}
