/// CLI settings: optional TOML file, then `REACHY_` environment variables
use anyhow::Context;
use reachy_mini_sdk::{
    ReachyMiniConfig, DEFAULT_BASE_URL, DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "reachy-mini.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    #[serde(default = "default_throw_on_error")]
    pub throw_on_error: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_delay_ms: default_retry_delay_ms(),
            throw_on_error: default_throw_on_error(),
        }
    }
}

impl Settings {
    /// Load settings from file and environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_SETTINGS_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (REACHY_BASE_URL, ...)
        settings = settings.add_source(config::Environment::with_prefix("REACHY").try_parsing(true));

        let loaded = settings
            .build()
            .context("Failed to read Reachy Mini settings")?;

        loaded
            .try_deserialize()
            .context("Invalid Reachy Mini settings")
    }

    /// Build the SDK configuration, letting `url` win over everything else.
    pub fn into_client_config(self, url: Option<String>) -> ReachyMiniConfig {
        ReachyMiniConfig::new(url.unwrap_or(self.base_url))
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_retry_count(self.retry_count)
            .with_retry_delay(Duration::from_millis(self.retry_delay_ms))
            .with_throw_on_error(self.throw_on_error)
    }
}

// Default values
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_retry_count() -> u32 {
    DEFAULT_RETRY_COUNT
}

fn default_retry_delay_ms() -> u64 {
    u64::try_from(DEFAULT_RETRY_DELAY.as_millis()).unwrap_or(u64::MAX)
}

fn default_throw_on_error() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_match_sdk() {
        let config = Settings::default().into_client_config(None);
        assert_eq!(config, ReachyMiniConfig::default());
    }

    #[test]
    fn test_load_from_file_with_partial_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robot.toml");
        fs::write(
            &path,
            "base_url = \"http://reachy-mini.local:8000\"\nretry_count = 0\n",
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();

        assert_eq!(settings.base_url, "http://reachy-mini.local:8000");
        assert_eq!(settings.retry_count, 0);
        // Unset keys fall back to defaults
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.retry_delay_ms, 1000);
        assert!(settings.throw_on_error);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robot.toml");
        fs::write(&path, "retry_count = \"many\"\n").unwrap();

        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn test_url_override_wins() {
        let settings = Settings {
            base_url: "http://from-file:8000".to_string(),
            timeout_secs: 5,
            retry_count: 1,
            retry_delay_ms: 250,
            throw_on_error: false,
        };

        let config = settings.into_client_config(Some("http://from-flag:9000".to_string()));

        assert_eq!(config.base_url, "http://from-flag:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry_count, 1);
        assert_eq!(config.retry_delay, Duration::from_millis(250));
        assert!(!config.throw_on_error);
    }
}
