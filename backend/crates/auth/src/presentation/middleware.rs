//! Session Middleware
//!
//! Gate for routes that require an authenticated caller. Resolution
//! failures all look the same to the client: 401 with a hint header.

use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use platform::cookie::extract_cookie;

use crate::application::resolve_identity::ResolveIdentityUseCase;
use crate::domain::repository::{IdentityProvider, ProfileStore};
use crate::presentation::handlers::AuthAppState;

/// Reject requests without a resolvable session
///
/// On success the resolved identity is attached as a request extension
/// so downstream handlers don't resolve twice.
pub async fn require_session<P, S>(
    State(state): State<AuthAppState<P, S>>,
    mut request: Request,
    next: Next,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
    S: ProfileStore + Send + Sync + 'static,
{
    let resolver = ResolveIdentityUseCase::new(state.provider.clone(), state.store.clone());

    let cookie = extract_cookie(request.headers(), &state.config.session_cookie_name);

    match resolver.resolve(cookie.as_deref()).await {
        Some(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        None => {
            let mut response = StatusCode::UNAUTHORIZED.into_response();
            response
                .headers_mut()
                .insert("X-Auth-Required", HeaderValue::from_static("true"));
            response
        }
    }
}
