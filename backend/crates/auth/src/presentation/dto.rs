//! Request/Response DTOs
//!
//! HTTP action responses use a uniform `{ success, message }` envelope
//! with stable, user-facing message strings; clients branch on these
//! plus the status code.

use serde::{Deserialize, Serialize};

use crate::domain::entity::resolved_identity::ResolvedIdentity;

// Stable action messages
pub const MSG_SIGNUP_SUCCESS: &str = "Account created successfully. Please sign in.";
pub const MSG_USER_EXISTS: &str = "User already exists. Please sign in.";
pub const MSG_STORE_UNAVAILABLE: &str = "Profile store is unavailable. Please try again later.";
pub const MSG_SIGNUP_FAILED: &str = "Failed to create account. Please try again.";
pub const MSG_SIGNIN_SUCCESS: &str = "Signed in successfully.";
pub const MSG_SIGNIN_FAILED: &str = "Failed to log into account. Please try again.";
pub const MSG_PROVIDER_UNAVAILABLE: &str =
    "Authentication service is unavailable. Please try again later.";
pub const MSG_AUTH_NOT_CONFIGURED: &str = "Authentication is not configured on this server.";
pub const MSG_STORE_NOT_CONFIGURED: &str = "Registration is not available on this server.";

/// Sign-up request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Provider-assigned subject id of the already-provisioned account
    pub uid: String,
    pub name: String,
    pub email: String,
}

/// Sign-in request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    /// Short-lived identity token obtained from the provider
    pub id_token: String,
}

/// Uniform action response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// The authenticated user, as exposed to clients
///
/// Identical shape for authoritative and fallback identities; the
/// provenance distinction stays server-side.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<ResolvedIdentity> for CurrentUserResponse {
    fn from(identity: ResolvedIdentity) -> Self {
        Self {
            id: identity.id.into_string(),
            name: identity.name,
            email: identity.email,
        }
    }
}
