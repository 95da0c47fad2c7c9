//! Domain Layer
//!
//! Contains entities, value objects, and external collaborator contracts.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    resolved_identity::{Provenance, ResolvedIdentity},
    session::{SessionClaims, SessionCredential},
    user_profile::UserProfile,
};
pub use repository::{
    IdentityProvider, ProfileCreate, ProfileLookup, ProfileStore, VerifyError,
};
