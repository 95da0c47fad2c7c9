//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Verification failures are deliberately absent from the read path:
//! an invalid session is a normal unauthenticated state and
//! `resolve` returns `None` instead of surfacing an error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::repository::VerifyError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required dependency was never initialized (missing configuration)
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Identity token rejected at session minting
    #[error("Identity token rejected")]
    InvalidToken(#[source] VerifyError),

    /// Submitted email does not match the verified token's email claim
    #[error("Email does not match the identity token")]
    EmailMismatch,

    /// Identity provider unreachable during a write-path operation
    #[error("Identity provider is unavailable")]
    ProviderUnavailable,

    /// Profile record already exists for this subject id
    #[error("User already exists")]
    AlreadyExists,

    /// Profile store unreachable during a write-path operation
    #[error("Profile store is unavailable")]
    StoreUnavailable,

    /// Input validation error
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::InvalidToken(_) | AuthError::EmailMismatch => StatusCode::UNAUTHORIZED,
            AuthError::ProviderUnavailable | AuthError::StoreUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AuthError::AlreadyExists => StatusCode::CONFLICT,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::NotConfigured(_)
            | AuthError::ProviderUnavailable
            | AuthError::StoreUnavailable => ErrorKind::ServiceUnavailable,
            AuthError::InvalidToken(_) | AuthError::EmailMismatch => ErrorKind::Unauthorized,
            AuthError::AlreadyExists => ErrorKind::Conflict,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::AlreadyExists => {
                AppError::new(self.kind(), self.to_string()).with_action("Please sign in")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::NotConfigured(dep) => {
                tracing::warn!(dependency = dep, "Operation attempted without configured dependency");
            }
            AuthError::ProviderUnavailable => {
                tracing::warn!("Identity provider unreachable");
            }
            AuthError::StoreUnavailable => {
                tracing::warn!("Profile store unreachable");
            }
            AuthError::EmailMismatch => {
                tracing::warn!("Sign-in email did not match token claims");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
