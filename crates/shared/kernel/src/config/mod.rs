use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;

/// Prefix for environment overrides, e.g. `REVIEWER__LOCALSERVER__PORT`.
pub const ENV_PREFIX: &str = "REVIEWER";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[reviewer_derive::reviewer_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file with environment overrides on top.
///
/// Sources, lowest precedence first:
/// 1. **Defaults** of `T` (every config section is `#[serde(default)]`).
/// 2. **File**: when `path` is given the file must exist; the format follows its extension
///    (`reviewer.toml`), or any supported extension is probed for an extension-less stem.
/// 3. **Environment**: variables prefixed with `REVIEWER__`, nested with `__`
///    (`REVIEWER__FIREBASE__PROJECT_ID` maps to `firebase.project_id`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or the merged values
/// do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use reviewer_kernel::config::load_config;
/// use reviewer_kernel::domain::config::ReviewerConfig;
///
/// let cfg: ReviewerConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(!cfg.auth.login_route.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with(path.as_ref().map(AsRef::<Path>::as_ref), environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .convert_case(config::Case::Snake)
}

fn load_with<T>(path: Option<&Path>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ReviewerConfig;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn vars(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn environment_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("reviewer.toml");
        fs::write(&path, "[localserver]\nport = 7100\n\n[firebase]\nproject_id = \"from-file\"\n")?;

        let cfg: ReviewerConfig = load_with(
            Some(path.as_path()),
            vars(&[
                ("REVIEWER__LOCALSERVER__PORT", "7200"),
                ("REVIEWER__NOTIFICATION__DURATION_MS", "1500"),
            ]),
        )?;

        assert_eq!(cfg.localserver.port, 7200);
        assert_eq!(cfg.notification.duration_ms, 1500);
        assert_eq!(cfg.firebase.project_id, "from-file");
        Ok(())
    }

    #[test]
    fn numeric_looking_strings_survive_environment() -> Result<(), ConfigError> {
        let cfg: ReviewerConfig = load_with(
            None,
            vars(&[
                ("REVIEWER__FIREBASE__API_KEY", "00123"),
                ("REVIEWER__FIREBASE__PROJECT_ID", "42"),
                ("REVIEWER__LOCALSERVER__PORT", "7300"),
                ("REVIEWER__LOGGING__JSON", "true"),
            ]),
        )?;

        assert_eq!(cfg.firebase.api_key, "00123");
        assert_eq!(cfg.firebase.project_id, "42");
        assert_eq!(cfg.localserver.port, 7300);
        assert!(cfg.logging.json);
        Ok(())
    }

    #[test]
    fn unrelated_variables_are_ignored() -> Result<(), ConfigError> {
        let cfg: ReviewerConfig =
            load_with(None, vars(&[("REVIEWERX__LOCALSERVER__PORT", "1"), ("PORT", "2")]))?;
        assert_eq!(cfg.localserver.port, 7000);
        Ok(())
    }
}
