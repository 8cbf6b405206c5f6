//! Local server feature slice.

mod error;

pub use crate::error::{LocalserverError, LocalserverErrorExt};
use reviewer_kernel::domain::config::LocalserverConfig;
use reviewer_kernel::domain::registry::InitializedService;
use std::net::SocketAddr;

/// Local server client state.
#[reviewer_derive::reviewer_service(token = LocalserverService)]
pub struct LocalserverService {
    address: SocketAddr,
}

impl LocalserverService {
    /// # Errors
    /// [`LocalserverError::InvalidConfiguration`] when `port` is `0`.
    pub fn init(config: &LocalserverConfig) -> Result<Self, LocalserverError> {
        if config.port == 0 {
            return Err(LocalserverError::InvalidConfiguration {
                message: "port must be non-zero".into(),
                context: Some(config.address.to_string().into()),
            });
        }
        let address = SocketAddr::new(config.address, config.port);
        Ok(Self::new(LocalserverServiceInner { address }))
    }

    #[must_use]
    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// Base URL of the local server, e.g. `http://127.0.0.1:7000`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.address)
    }
}

/// Initialize the local server service.
///
/// # Errors
/// See [`LocalserverService::init`].
pub fn init(config: &LocalserverConfig) -> Result<InitializedService, LocalserverError> {
    let service = LocalserverService::init(config)?;

    tracing::info!(endpoint = %service.endpoint(), "Local server service initialized");

    Ok(InitializedService::new(service))
}
