//! Infrastructure Layer
//!
//! REST adapters for the external collaborators, plus the dependency
//! container the router is built from.

pub mod firestore;
pub mod rest;
pub(crate) mod token;

use std::sync::Arc;

use crate::application::config::{ProviderConfig, StoreConfig};
use firestore::RestProfileStore;
use rest::RestIdentityProvider;

/// Wired external collaborators
///
/// Either adapter may be absent when its configuration block is; the
/// application layer answers in degraded mode for whatever is missing
/// rather than refusing to start.
pub struct Dependencies {
    pub provider: Option<Arc<RestIdentityProvider>>,
    pub store: Option<Arc<RestProfileStore>>,
}

impl Dependencies {
    /// Wire adapters from whatever configuration is present
    pub fn from_config(
        provider_config: Option<&ProviderConfig>,
        store_config: Option<&StoreConfig>,
        session_secret: [u8; 32],
    ) -> Self {
        let provider = match provider_config {
            Some(config) => Some(Arc::new(RestIdentityProvider::new(config, session_secret))),
            None => {
                tracing::warn!(
                    "Identity provider not configured, running in unauthenticated-only mode"
                );
                None
            }
        };

        let store = match store_config {
            Some(config) => Some(Arc::new(RestProfileStore::new(config))),
            None => {
                tracing::warn!("Profile store not configured, registration is disabled");
                None
            }
        };

        Self { provider, store }
    }
}
