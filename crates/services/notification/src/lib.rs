//! Notification feature slice.
mod error;

pub use crate::error::{NotificationError, NotificationErrorExt};
use reviewer_kernel::domain::config::NotificationConfig;
use reviewer_kernel::domain::registry::InitializedService;
use std::time::Duration;

/// Notification service inner state.
#[reviewer_derive::reviewer_service(token = NotificationService)]
pub struct NotificationService {
    duration: Duration,
}

impl NotificationService {
    /// # Errors
    /// [`NotificationError::InvalidConfiguration`] for a zero display duration.
    pub fn init(config: &NotificationConfig) -> Result<Self, NotificationError> {
        if config.duration_ms == 0 {
            return Err(NotificationError::InvalidConfiguration {
                message: "duration_ms must be greater than zero".into(),
                context: None,
            });
        }
        Ok(Self::new(NotificationServiceInner {
            duration: Duration::from_millis(config.duration_ms),
        }))
    }

    /// How long a notification stays visible.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Initialize the notification service.
///
/// # Errors
/// See [`NotificationService::init`].
pub fn init(config: &NotificationConfig) -> Result<InitializedService, NotificationError> {
    let service = NotificationService::init(config)?;

    tracing::info!(duration_ms = config.duration_ms, "Notification service initialized");

    Ok(InitializedService::new(service))
}
