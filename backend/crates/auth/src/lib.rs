//! Auth (Authentication Gateway) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, external collaborator contracts
//! - `application/` - Use cases and application services
//! - `infra/` - REST adapters for the identity provider and profile store
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Exchange of short-lived identity tokens for long-lived sessions
//! - Opaque HMAC-signed session credentials carried in an HttpOnly cookie
//! - Identity reconciliation against the profile store with claim-based
//!   fallback when the store is unreachable
//! - Idempotent registration keyed by provider-assigned subject id
//!
//! ## Security Model
//! - Sessions are only ever minted from provider-verified identity tokens
//! - Session cookie is HttpOnly, SameSite=Lax, Secure in production
//! - Revocation checks reject sessions invalidated server-side
//! - An unreachable profile store degrades reads, never verification

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::Dependencies;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
