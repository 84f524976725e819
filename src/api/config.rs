//! Upstream API configuration with builder pattern and environment variable support.
//!
//! Configuration is resolved in order: explicit values → environment variables → defaults.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://kokkai.ndl.go.jp/api";
/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent sent with every upstream request.
const DEFAULT_USER_AGENT: &str = concat!("kokkai-mcp/", env!("CARGO_PKG_VERSION"));

/// Configuration for the upstream search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Request timeout, covering connect through body read.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl ApiConfig {
    /// Creates a new builder for `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Creates configuration from environment variables with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `KOKKAI_API_BASE_URL` is set
    /// to something that is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder().from_env().build()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Builder for [`ApiConfig`].
#[derive(Debug, Clone, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiConfigBuilder {
    /// Populates unset fields from environment variables.
    #[must_use]
    pub fn from_env(mut self) -> Self {
        if self.base_url.is_none() {
            self.base_url = std::env::var("KOKKAI_API_BASE_URL").ok();
        }
        if self.timeout.is_none() {
            self.timeout = std::env::var("KOKKAI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs);
        }
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Builds the [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the base URL does not parse
    /// or is not http(s).
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let defaults = ApiConfig::default();
        let base_url = match self.base_url {
            Some(raw) => validate_base_url(&raw)?,
            None => defaults.base_url,
        };

        Ok(ApiConfig {
            base_url,
            timeout: self.timeout.unwrap_or(defaults.timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        })
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() {
        return Err(invalid("base URL must not carry a query".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ApiConfig::builder()
            .build()
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.user_agent.starts_with("kokkai-mcp/"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::builder()
            .base_url("http://127.0.0.1:8080/api/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_scheme() {
        let result = ApiConfig::builder().base_url("ftp://example.com").build();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_not_a_url() {
        let result = ApiConfig::builder().base_url("kokkai api").build();
        assert!(result.is_err());
    }
}
