//! Identity Reconciliation Use Case
//!
//! Turns the raw session cookie value (or its absence) into the
//! canonical answer to "who is making this request". Every failure on
//! this path collapses to anonymous; errors never escape to callers.

use std::sync::Arc;

use crate::domain::entity::resolved_identity::ResolvedIdentity;
use crate::domain::repository::{IdentityProvider, ProfileLookup, ProfileStore, VerifyError};

/// Identity reconciler
pub struct ResolveIdentityUseCase<P, S> {
    provider: Option<Arc<P>>,
    store: Option<Arc<S>>,
}

impl<P: IdentityProvider, S: ProfileStore> ResolveIdentityUseCase<P, S> {
    pub fn new(provider: Option<Arc<P>>, store: Option<Arc<S>>) -> Self {
        Self { provider, store }
    }

    /// Resolve the identity behind a session cookie value
    ///
    /// Returns `None` for: no cookie, no configured provider, or any
    /// verification failure (malformed, expired, revoked, provider
    /// unreachable). With a verified credential, the profile store is
    /// authoritative when it answers; a missing or unreachable store
    /// falls back to the credential's own claims.
    pub async fn resolve(&self, cookie_value: Option<&str>) -> Option<ResolvedIdentity> {
        let value = cookie_value?;

        let Some(provider) = self.provider.as_ref() else {
            tracing::debug!("Session presented but no identity provider is configured");
            return None;
        };

        let claims = match provider.verify_session(value, true).await {
            Ok(claims) => claims,
            Err(VerifyError::Unavailable(reason)) => {
                tracing::warn!(%reason, "Identity provider unreachable during verification");
                return None;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Session credential rejected");
                return None;
            }
        };

        let Some(store) = self.store.as_ref() else {
            return Some(ResolvedIdentity::fallback(&claims));
        };

        match store.find_by_uid(&claims.sub).await {
            ProfileLookup::Found(profile) => Some(ResolvedIdentity::authoritative(profile)),
            ProfileLookup::Missing => Some(ResolvedIdentity::fallback(&claims)),
            ProfileLookup::Unavailable => {
                tracing::warn!(
                    sub = %claims.sub,
                    "Profile store unreachable, serving claim-derived identity"
                );
                Some(ResolvedIdentity::fallback(&claims))
            }
        }
    }

    /// Whether the cookie value denotes an authenticated request
    pub async fn is_authenticated(&self, cookie_value: Option<&str>) -> bool {
        self.resolve(cookie_value).await.is_some()
    }
}
