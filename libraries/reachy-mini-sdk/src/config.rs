//! Client configuration.

use crate::error::{ReachyMiniError, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_RETRY_COUNT: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Configuration for connecting to a Reachy Mini daemon.
///
/// Immutable once handed to [`crate::ReachyMiniClient::new`]; every
/// endpoint group reads the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachyMiniConfig {
    /// Base URL of the daemon (e.g. "http://reachy-mini.local:8000")
    pub base_url: String,
    /// Upper bound for a single request attempt
    pub timeout: Duration,
    /// Return API errors to the caller instead of an empty value
    pub throw_on_error: bool,
    /// Extra attempts after a transport failure
    pub retry_count: u32,
    /// Fixed delay between attempts
    pub retry_delay: Duration,
}

impl Default for ReachyMiniConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            throw_on_error: true,
            retry_count: DEFAULT_RETRY_COUNT,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl ReachyMiniConfig {
    /// Create a config for the given URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_throw_on_error(mut self, throw_on_error: bool) -> Self {
        self.throw_on_error = throw_on_error;
        self
    }

    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ReachyMiniError::InvalidConfig(
                "base URL cannot be empty".into(),
            ));
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            ReachyMiniError::InvalidConfig(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ReachyMiniError::InvalidConfig(
                "base URL must start with http:// or https://".into(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ReachyMiniError::InvalidConfig(
                "timeout must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    /// Base URL without trailing slashes, ready for path concatenation.
    pub(crate) fn normalized_base_url(&self) -> String {
        self.base_url.trim().trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReachyMiniConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.throw_on_error);
        assert_eq!(config.retry_count, 3);
        assert_eq!(config.retry_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ReachyMiniConfig::new("http://reachy-mini.local:8000")
            .with_timeout(Duration::from_secs(5))
            .with_throw_on_error(false)
            .with_retry_count(0)
            .with_retry_delay(Duration::from_millis(250));

        assert_eq!(config.base_url, "http://reachy-mini.local:8000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.throw_on_error);
        assert_eq!(config.retry_count, 0);
        assert_eq!(config.retry_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_validation() {
        assert!(ReachyMiniConfig::default().validate().is_ok());
        assert!(ReachyMiniConfig::new("https://robot.example.com").validate().is_ok());

        assert!(ReachyMiniConfig::new("").validate().is_err());
        assert!(ReachyMiniConfig::new("not-a-url").validate().is_err());
        assert!(ReachyMiniConfig::new("ftp://example.com").validate().is_err());
        assert!(ReachyMiniConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_normalized_base_url() {
        let config = ReachyMiniConfig::new("http://localhost:8000///");
        assert_eq!(config.normalized_base_url(), "http://localhost:8000");
    }
}
