//! Resolved Identity
//!
//! The request-scoped result of reconciling a session credential.
//! The external shape is identical for both provenances; the
//! distinction matters to callers that persist trust decisions.

use derive_more::Display;

use crate::domain::entity::session::SessionClaims;
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::subject_id::SubjectId;

/// Where the identity fields came from
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Read from the persistent profile store
    #[display("authoritative")]
    Authoritative,
    /// Reconstructed from claims inside the verified credential
    #[display("fallback")]
    Fallback,
}

/// Canonical user identity for one request
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIdentity {
    pub id: SubjectId,
    pub name: String,
    pub email: String,
    pub provenance: Provenance,
}

impl ResolvedIdentity {
    /// Build from a stored profile record
    ///
    /// The store is the source of truth for fields; the id is the store
    /// key the record was fetched under, which the verified token bound
    /// us to.
    pub fn authoritative(profile: UserProfile) -> Self {
        Self {
            id: profile.uid,
            name: profile.name,
            email: profile.email.into_string(),
            provenance: Provenance::Authoritative,
        }
    }

    /// Build entirely from verified credential claims
    ///
    /// Name precedence: claim name, else email local-part, else "User".
    /// Empty claim strings count as absent.
    pub fn fallback(claims: &SessionClaims) -> Self {
        let email = claims.email.clone().filter(|e| !e.is_empty());

        let name = claims
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| {
                email
                    .as_ref()
                    .map(|e| e.split('@').next().unwrap_or(e).to_string())
            })
            .unwrap_or_else(|| "User".to_string());

        Self {
            id: claims.sub.clone(),
            name,
            email: email.unwrap_or_default(),
            provenance: Provenance::Fallback,
        }
    }
}
