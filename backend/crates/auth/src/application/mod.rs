//! Application Layer
//!
//! Use cases orchestrating the domain contracts. Each use case holds
//! `Option<Arc<_>>` collaborators: a `None` dependency means the
//! corresponding configuration block was absent at startup and the
//! operation answers in degraded mode instead of panicking.

pub mod config;
pub mod create_session;
pub mod register;
pub mod resolve_identity;
pub mod sign_in;

pub use config::{AuthConfig, ProviderConfig, StoreConfig};
pub use create_session::CreateSessionUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use resolve_identity::ResolveIdentityUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
