use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration sections consumed by the composition root.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReviewerConfigInner {
    pub auth: AuthConfig,
    pub firebase: FirebaseConfig,
    pub localserver: LocalserverConfig,
    pub notification: NotificationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into services.
///
/// Deserializes through [`ReviewerConfigInner`] so every field sees the source's own value
/// conversions (environment strings stay strings, `"7100"` still fills a port).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "ReviewerConfigInner")]
pub struct ReviewerConfig {
    inner: Arc<ReviewerConfigInner>,
}

impl From<ReviewerConfigInner> for ReviewerConfig {
    fn from(inner: ReviewerConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for ReviewerConfig {
    type Target = ReviewerConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ReviewerConfig {
    fn deref_mut(&mut self) -> &mut ReviewerConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Routes used by the auth guard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub login_route: String,
    pub home_route: String,
}

/// Firebase project settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    pub project_id: String,
    pub api_key: String,
    pub auth_domain: String,
    pub database_url: String,
}

/// Address of the local server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalserverConfig {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
}

/// Logger settings; `directory` enables rolling files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub filter: Option<String>,
}

// --- Default ---

impl Default for AuthConfig {
    fn default() -> Self {
        Self { login_route: "/login".to_owned(), home_route: "/".to_owned() }
    }
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            project_id: "startupos-5f279".to_owned(),
            api_key: String::new(),
            auth_domain: "startupos-5f279.firebaseapp.com".to_owned(),
            database_url: "https://startupos-5f279.firebaseio.com".to_owned(),
        }
    }
}

impl Default for LocalserverConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 7000 }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
