//! Entities

pub mod resolved_identity;
pub mod session;
pub mod user_profile;

pub use resolved_identity::{Provenance, ResolvedIdentity};
pub use session::{SessionClaims, SessionCredential};
pub use user_profile::UserProfile;
