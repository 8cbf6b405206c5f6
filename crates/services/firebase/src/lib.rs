//! Firebase feature slice: owns the project settings used to reach the remote backend.

mod error;

pub use crate::error::{FirebaseError, FirebaseErrorExt};
use reviewer_kernel::domain::config::FirebaseConfig;
use reviewer_kernel::domain::registry::InitializedService;

const SECURE_SCHEME: &str = "https://";

/// Firebase client state.
#[reviewer_derive::reviewer_service(token = FirebaseService)]
pub struct FirebaseService {
    config: FirebaseConfig,
}

impl FirebaseService {
    /// Validates the project settings and creates the service.
    ///
    /// # Errors
    /// [`FirebaseError::InvalidConfiguration`] for an empty project id or a database URL that is
    /// not served over `https`.
    pub fn init(config: &FirebaseConfig) -> Result<Self, FirebaseError> {
        if config.project_id.trim().is_empty() {
            return Err(FirebaseError::InvalidConfiguration {
                message: "project_id cannot be empty".into(),
                context: None,
            });
        }
        if !config.database_url.starts_with(SECURE_SCHEME) {
            return Err(FirebaseError::InvalidConfiguration {
                message: format!("database_url must use https, got {:?}", config.database_url)
                    .into(),
                context: None,
            });
        }

        Ok(Self::new(FirebaseServiceInner { config: config.clone() }))
    }

    #[must_use]
    pub fn config(&self) -> &FirebaseConfig {
        &self.config
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.config.project_id
    }
}

/// Initialize the Firebase service.
///
/// # Errors
/// See [`FirebaseService::init`].
pub fn init(config: &FirebaseConfig) -> Result<InitializedService, FirebaseError> {
    let service = FirebaseService::init(config)?;

    tracing::info!(project_id = %service.project_id(), "Firebase service initialized");

    Ok(InitializedService::new(service))
}
