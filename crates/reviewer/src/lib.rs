//! Facade crate for the reviewer services.
//! Re-exports domain/kernel primitives and owns the composition root.
//! Keep this crate thin: it wires the service crates together, it does not implement them.
//!
//! ## Usage
//! ```rust
//! use reviewer::domain::config::ReviewerConfig;
//! use reviewer::domain::registry::{ComponentToken, ServiceRegistry};
//! use reviewer::services::auth::AuthGuard;
//!
//! let services = reviewer::compose(&ReviewerConfig::default()).unwrap();
//! assert!(services.tokens().eq(ServiceRegistry::iter()));
//! assert_eq!(services.try_get::<AuthGuard>().unwrap().redirect_route(), "/login");
//! assert!(services.resolve(ComponentToken::LocalserverService).is_some());
//! ```

mod error;

pub use crate::error::{ComposeError, ComposeErrorExt};
pub use reviewer_domain as domain;
pub use reviewer_kernel as kernel;

use reviewer_domain::config::ReviewerConfig;
use reviewer_domain::registry::{ComponentToken, InitializedService, ServiceRegistry};
use reviewer_kernel::container::{ContainerError, ServiceContainer};
use tracing::{debug, info};

/// Service crates, one per manifest family.
pub mod services {
    pub use reviewer_auth as auth;
    pub use reviewer_difference as difference;
    pub use reviewer_encoding as encoding;
    pub use reviewer_firebase as firebase;
    pub use reviewer_highlight as highlight;
    pub use reviewer_localserver as localserver;
    pub use reviewer_notification as notification;
}

/// Builds every service from `config` and returns them wired and resolvable.
///
/// Construction follows dependencies (`AuthService` before the `AuthGuard` that holds it);
/// the returned container lists services in [`ServiceRegistry::list`] order.
///
/// # Errors
/// A service rejecting its configuration section, or a constructed set that does not match the
/// manifest.
pub fn compose(config: &ReviewerConfig) -> Result<ServiceContainer, ComposeError> {
    let [guard, auth] =
        services::auth::init(&config.auth).context(ComponentToken::AuthService.as_str())?;

    let constructed = [
        guard,
        auth,
        services::difference::init(),
        services::firebase::init(&config.firebase)
            .context(ComponentToken::FirebaseService.as_str())?,
        services::highlight::init(),
        services::notification::init(&config.notification)
            .context(ComponentToken::NotificationService.as_str())?,
        services::encoding::init(),
        services::localserver::init(&config.localserver)
            .context(ComponentToken::LocalserverService.as_str())?,
    ];

    let container = register_in_manifest_order(constructed)?;

    info!(services = container.len(), "Service graph composed");
    Ok(container)
}

/// Registers `constructed` in manifest order; the container's own checks reject repeats and
/// [`ServiceContainer::verify`] rejects gaps.
fn register_in_manifest_order<I>(constructed: I) -> Result<ServiceContainer, ContainerError>
where
    I: IntoIterator<Item = InitializedService>,
{
    let mut ordered: Vec<InitializedService> = constructed.into_iter().collect();
    ordered.sort_by_key(|service| ServiceRegistry::position(service.token));
    debug!(services = ordered.len(), "Registering services in manifest order");

    let container = ServiceContainer::builder().register_all(ordered)?.build();
    container.verify(ServiceRegistry::list())?;
    Ok(container)
}
