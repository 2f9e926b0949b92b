//! openFDA client configuration.

use url::Url;

/// Public openFDA endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.fda.gov";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after a transport failure.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for connecting to openFDA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFdaConfig {
    /// Base URL. Endpoint paths such as `device/udi.json` are appended.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after a transport failure. `0` disables retrying.
    pub max_retries: u32,
}

impl OpenFdaConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FDAREG_BASE_URL` (default: `https://api.fda.gov`)
    /// - `FDAREG_TIMEOUT_SECS` (default: 30)
    /// - `FDAREG_MAX_RETRIES` (default: 3)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("FDAREG_BASE_URL", DEFAULT_BASE_URL)?,
            timeout_secs: env_number("FDAREG_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            max_retries: env_number("FDAREG_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// Retries are disabled so that failure tests run quickly.
    pub fn local_mock(uri: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("mock", uri)?,
            timeout_secs: 5,
            max_retries: 0,
        })
    }
}

/// Parse a base URL, naming its source in the error.
pub fn parse_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(
            source.to_string(),
            format!("unsupported scheme {}", url.scheme()),
        ));
    }
    Ok(url)
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}

fn env_number<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(var.to_string(), raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(String, String),
}
