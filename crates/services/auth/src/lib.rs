//! Auth feature: the authentication service and the route guard that depends on it.

mod error;
mod guard;
mod service;

pub use crate::error::{AuthError, AuthErrorExt};
pub use crate::guard::{AuthGuard, AuthGuardInner};
pub use crate::service::{AuthService, AuthServiceInner};
use reviewer_kernel::domain::config::AuthConfig;
use reviewer_kernel::domain::registry::InitializedService;

/// Initialize the auth service and its guard.
///
/// The guard holds a handle to the same service instance that is returned next to it.
///
/// # Errors
/// Returns [`AuthError::InvalidConfiguration`] for malformed routes.
pub fn init(config: &AuthConfig) -> Result<[InitializedService; 2], AuthError> {
    let service = AuthService::init(config)?;
    let guard = AuthGuard::init(&service);

    tracing::info!(login_route = %service.login_route(), "Auth service and guard initialized");

    Ok([InitializedService::new(guard), InitializedService::new(service)])
}
