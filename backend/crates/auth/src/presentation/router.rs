//! Auth Router

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::application::config::AuthConfig;
use crate::domain::repository::{IdentityProvider, ProfileStore};
use crate::infra::Dependencies;
use crate::presentation::handlers::{self, AuthAppState};

/// Build the auth router from wired dependencies
pub fn auth_router(deps: Dependencies, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(AuthAppState::new(deps.provider, deps.store, config))
}

/// Router over any provider/store implementations (tests swap in mocks)
pub fn auth_router_generic<P, S>(state: AuthAppState<P, S>) -> Router
where
    P: IdentityProvider + Send + Sync + 'static,
    S: ProfileStore + Send + Sync + 'static,
{
    Router::new()
        .route("/signup", post(handlers::sign_up::<P, S>))
        .route("/signin", post(handlers::sign_in::<P, S>))
        .route("/signout", post(handlers::sign_out::<P, S>))
        .route("/me", get(handlers::current_user::<P, S>))
        .with_state(state)
}
