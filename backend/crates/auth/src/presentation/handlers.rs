//! Auth HTTP Handlers
//!
//! Action endpoints answer with the `{ success, message }` envelope and
//! a status code derived from the error taxonomy; they never leak
//! provider error shapes. `current_user` returns the resolved identity
//! or JSON `null` with 200; routes that must reject anonymous callers
//! use the session middleware instead.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::create_session::CreateSessionUseCase;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::resolve_identity::ResolveIdentityUseCase;
use crate::application::sign_in::{SignInInput, SignInUseCase};
use crate::domain::repository::{IdentityProvider, ProfileStore};
use crate::error::AuthError;
use crate::presentation::dto::{
    ActionResponse, CurrentUserResponse, MSG_AUTH_NOT_CONFIGURED, MSG_PROVIDER_UNAVAILABLE,
    MSG_SIGNIN_FAILED, MSG_SIGNIN_SUCCESS, MSG_SIGNUP_FAILED, MSG_SIGNUP_SUCCESS,
    MSG_STORE_NOT_CONFIGURED, MSG_STORE_UNAVAILABLE, MSG_USER_EXISTS, SignInRequest, SignUpRequest,
};

/// Shared handler state
pub struct AuthAppState<P, S> {
    pub provider: Option<Arc<P>>,
    pub store: Option<Arc<S>>,
    pub config: Arc<AuthConfig>,
}

impl<P, S> Clone for AuthAppState<P, S> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

impl<P, S> AuthAppState<P, S> {
    pub fn new(provider: Option<Arc<P>>, store: Option<Arc<S>>, config: Arc<AuthConfig>) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }
}

/// POST /signup
pub async fn sign_up<P, S>(
    State(state): State<AuthAppState<P, S>>,
    Json(request): Json<SignUpRequest>,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
    S: ProfileStore + Send + Sync + 'static,
{
    let register = RegisterUseCase::new(state.store.clone());

    let input = RegisterInput {
        uid: request.uid,
        name: request.name,
        email: request.email,
    };

    match register.execute(input).await {
        Ok(()) => (StatusCode::OK, Json(ActionResponse::ok(MSG_SIGNUP_SUCCESS))).into_response(),
        Err(e) => {
            let status = e.status_code();
            (status, Json(ActionResponse::failed(sign_up_message(&e)))).into_response()
        }
    }
}

/// POST /signin
pub async fn sign_in<P, S>(
    State(state): State<AuthAppState<P, S>>,
    Json(request): Json<SignInRequest>,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
    S: ProfileStore + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.provider.clone(), state.config.clone());

    let input = SignInInput {
        email: request.email,
        id_token: request.id_token,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let mut headers = HeaderMap::new();
            if let Ok(value) = output.set_cookie.parse() {
                headers.insert(header::SET_COOKIE, value);
            }
            (
                StatusCode::OK,
                headers,
                Json(ActionResponse::ok(MSG_SIGNIN_SUCCESS)),
            )
                .into_response()
        }
        Err(e) => {
            let status = e.status_code();
            (status, Json(ActionResponse::failed(sign_in_message(&e)))).into_response()
        }
    }
}

/// POST /signout
///
/// Idempotent: clears the cookie whether or not a session was present.
pub async fn sign_out<P, S>(State(state): State<AuthAppState<P, S>>) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
    S: ProfileStore + Send + Sync + 'static,
{
    let sessions = CreateSessionUseCase::<P>::new(state.provider.clone(), state.config.clone());

    let mut headers = HeaderMap::new();
    if let Ok(value) = sessions.revoke().parse() {
        headers.insert(header::SET_COOKIE, value);
    }

    (StatusCode::NO_CONTENT, headers).into_response()
}

/// GET /me
///
/// `null` is the body for an anonymous caller, with a 200: absence of
/// a session is a normal answer here, not a failure. Routes that
/// require a session use the middleware instead.
pub async fn current_user<P, S>(
    State(state): State<AuthAppState<P, S>>,
    headers: HeaderMap,
) -> Json<Option<CurrentUserResponse>>
where
    P: IdentityProvider + Send + Sync + 'static,
    S: ProfileStore + Send + Sync + 'static,
{
    let resolver = ResolveIdentityUseCase::new(state.provider.clone(), state.store.clone());

    let cookie = extract_cookie(&headers, &state.config.session_cookie_name);

    Json(
        resolver
            .resolve(cookie.as_deref())
            .await
            .map(CurrentUserResponse::from),
    )
}

/// Map registration errors to stable sign-up messages
pub(crate) fn sign_up_message(error: &AuthError) -> String {
    match error {
        AuthError::AlreadyExists => MSG_USER_EXISTS.to_string(),
        AuthError::StoreUnavailable => MSG_STORE_UNAVAILABLE.to_string(),
        AuthError::NotConfigured(_) => MSG_STORE_NOT_CONFIGURED.to_string(),
        AuthError::Validation(msg) => msg.clone(),
        _ => MSG_SIGNUP_FAILED.to_string(),
    }
}

/// Map sign-in errors to stable sign-in messages
pub(crate) fn sign_in_message(error: &AuthError) -> String {
    match error {
        AuthError::NotConfigured(_) => MSG_AUTH_NOT_CONFIGURED.to_string(),
        AuthError::ProviderUnavailable => MSG_PROVIDER_UNAVAILABLE.to_string(),
        AuthError::Validation(msg) => msg.clone(),
        _ => MSG_SIGNIN_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::VerifyError;

    #[test]
    fn test_sign_up_messages() {
        assert_eq!(sign_up_message(&AuthError::AlreadyExists), MSG_USER_EXISTS);
        assert_eq!(
            sign_up_message(&AuthError::StoreUnavailable),
            MSG_STORE_UNAVAILABLE
        );
        assert_eq!(
            sign_up_message(&AuthError::NotConfigured("profile store")),
            MSG_STORE_NOT_CONFIGURED
        );
        assert_eq!(
            sign_up_message(&AuthError::Internal("boom".into())),
            MSG_SIGNUP_FAILED
        );
        assert_eq!(
            sign_up_message(&AuthError::Validation("Invalid email format".into())),
            "Invalid email format"
        );
    }

    #[test]
    fn test_sign_in_messages() {
        assert_eq!(
            sign_in_message(&AuthError::InvalidToken(VerifyError::Malformed)),
            MSG_SIGNIN_FAILED
        );
        assert_eq!(sign_in_message(&AuthError::EmailMismatch), MSG_SIGNIN_FAILED);
        assert_eq!(
            sign_in_message(&AuthError::ProviderUnavailable),
            MSG_PROVIDER_UNAVAILABLE
        );
        assert_eq!(
            sign_in_message(&AuthError::NotConfigured("identity provider")),
            MSG_AUTH_NOT_CONFIGURED
        );
    }
}
