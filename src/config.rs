//! Host configuration parsed from environment variables.

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// Upstream analytics API used when `ANALYTICS_API_URL` is unset.
pub const DEFAULT_ANALYTICS_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid ANALYTICS_API_URL: {0}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL `/api/*` requests are forwarded to, without a trailing slash.
    pub analytics_api_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ANALYTICS_API_URL`: default `http://localhost:8000/api`
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let analytics_api_url = lookup("ANALYTICS_API_URL")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_ANALYTICS_API_URL.to_string());
        if !analytics_api_url.starts_with("http://") && !analytics_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidUpstream(analytics_api_url));
        }
        let analytics_api_url = analytics_api_url.trim_end_matches('/').to_string();

        Ok(Self { port, analytics_api_url })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
