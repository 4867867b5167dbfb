//! Shared host state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the proxy handler via the `State` extractor.
//! It holds one pooled `reqwest::Client` and the upstream base URL; nothing
//! per-request is kept between calls.

use std::sync::Arc;

use crate::config::HostConfig;

pub const UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream analytics API base, without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(http: reqwest::Client, upstream: &str) -> Self {
        Self { http, upstream: Arc::from(upstream.trim_end_matches('/')) }
    }

    /// Build state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(UPSTREAM_CONNECT_TIMEOUT_SECS))
            .timeout(std::time::Duration::from_secs(UPSTREAM_REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self::new(http, &config.analytics_api_url))
    }
}
