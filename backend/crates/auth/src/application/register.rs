//! Registration Use Case
//!
//! Creates the profile record for an already-provisioned provider
//! account. Keyed by subject id; re-registration is rejected, never
//! overwritten.

use std::sync::Arc;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::{ProfileCreate, ProfileLookup, ProfileStore};
use crate::domain::value_object::{email::Email, subject_id::SubjectId};
use crate::error::{AuthError, AuthResult};

/// Registration request
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub uid: String,
    pub name: String,
    pub email: String,
}

/// Registration service
pub struct RegisterUseCase<S> {
    store: Option<Arc<S>>,
}

impl<S: ProfileStore> RegisterUseCase<S> {
    pub fn new(store: Option<Arc<S>>) -> Self {
        Self { store }
    }

    /// Create a profile record unless one already exists for the uid
    ///
    /// The pre-check read keeps the common duplicate case cheap; the
    /// conditional write closes the race for concurrent registrations
    /// of the same uid, mapping a write-time conflict to the same
    /// `AlreadyExists` outcome as the pre-check.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        let store = self
            .store
            .as_ref()
            .ok_or(AuthError::NotConfigured("profile store"))?;

        let uid = SubjectId::new(input.uid)?;
        let email = Email::new(input.email)?;

        match store.find_by_uid(&uid).await {
            ProfileLookup::Found(_) => return Err(AuthError::AlreadyExists),
            ProfileLookup::Unavailable => return Err(AuthError::StoreUnavailable),
            ProfileLookup::Missing => {}
        }

        let profile = UserProfile::new(uid, input.name, email);

        match store.create_if_absent(&profile).await {
            ProfileCreate::Created => {
                tracing::info!(uid = %profile.uid, "User profile created");
                Ok(())
            }
            ProfileCreate::AlreadyExists => Err(AuthError::AlreadyExists),
            ProfileCreate::Unavailable => Err(AuthError::StoreUnavailable),
        }
    }
}
