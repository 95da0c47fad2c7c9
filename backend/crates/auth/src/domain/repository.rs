//! External Collaborator Contracts
//!
//! Interfaces for the identity provider and the profile store.
//! Implementations live in the infrastructure layer; provider-specific
//! error shapes are translated into these taxonomies at that boundary
//! and never cross into the core.

use std::time::Duration;

use thiserror::Error;

use crate::domain::entity::session::{SessionClaims, SessionCredential};
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::subject_id::SubjectId;

/// Why a credential or token failed verification
///
/// The categories must stay distinguishable: an unavailable provider is
/// handled differently from a tampered credential in every caller.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Token or credential is not in a shape the verifier recognizes
    #[error("credential is malformed")]
    Malformed,

    /// Credential was valid once but its validity window has passed
    #[error("credential has expired")]
    Expired,

    /// The underlying session was invalidated server-side
    #[error("session has been revoked")]
    Revoked,

    /// The provider could not be reached to complete verification
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Tri-state outcome of a profile read
///
/// `Missing` and `Unavailable` are deliberately separate: a missing
/// record triggers fallback identity construction, an unavailable
/// store is logged and also falls back on reads but hard-fails writes.
#[derive(Debug)]
pub enum ProfileLookup {
    Found(UserProfile),
    Missing,
    Unavailable,
}

/// Tri-state outcome of a profile creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileCreate {
    Created,
    /// A record for this uid already exists (pre-check or write race)
    AlreadyExists,
    Unavailable,
}

/// Credential verifier contract
///
/// Both operations are suspending network calls; callers apply their
/// own timeout policy and never retry (a verification failure cannot
/// change its outcome).
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Verify an identity token and mint a session credential with a
    /// fixed validity window, independent of the token's own expiry
    async fn mint_session(
        &self,
        id_token: &str,
        ttl: Duration,
    ) -> Result<SessionCredential, VerifyError>;

    /// Verify a session credential; with `check_revoked`, also reject
    /// sessions invalidated server-side rather than merely expired
    async fn verify_session(
        &self,
        value: &str,
        check_revoked: bool,
    ) -> Result<SessionClaims, VerifyError>;
}

/// Profile store contract
#[trait_variant::make(ProfileStore: Send)]
pub trait LocalProfileStore {
    /// Read the profile record keyed by subject id
    async fn find_by_uid(&self, uid: &SubjectId) -> ProfileLookup;

    /// Create the record unless one already exists for this uid
    async fn create_if_absent(&self, profile: &UserProfile) -> ProfileCreate;
}
