//! User Profile Entity
//!
//! The persisted profile record, keyed by provider-assigned subject id.
//! Created exactly once per uid by the registration service; re-creation
//! is rejected, never overwritten.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, subject_id::SubjectId};

/// User profile entity
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Provider-assigned subject identifier (store key)
    pub uid: SubjectId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: Email,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a new profile record
    pub fn new(uid: SubjectId, name: impl Into<String>, email: Email) -> Self {
        Self {
            uid,
            name: name.into(),
            email,
            created_at: Utc::now(),
        }
    }
}
