//! Build-time client configuration.
//!
//! DESIGN
//! ======
//! The browser bundle has no process environment, so settings are baked in
//! at compile time through `option_env!`. Debug builds default to generated
//! mock data against the local development API host; release builds default
//! to the same-origin `/api` path served by the `brics` host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used by release builds (same origin, proxied by the host).
pub const PRODUCTION_API_BASE: &str = "/api";
/// API base used by debug builds.
pub const DEVELOPMENT_API_BASE: &str = "http://localhost:8000/api";

/// Which `AnalyticsSource` implementation the app is composed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataMode {
    /// Generated in-memory data with simulated latency.
    Mock,
    /// The remote analytics API through the HTTP wrapper.
    Remote,
}

impl DataMode {
    /// Parse a `BRICS_DATA_SOURCE` value (`mock` or `remote`, any case).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" => Some(Self::Mock),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// Resolved client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub data_mode: DataMode,
}

impl ClientConfig {
    /// Settings baked into this build.
    pub fn from_build() -> Self {
        Self::resolve(
            option_env!("BRICS_API_BASE"),
            option_env!("BRICS_DATA_SOURCE"),
            !cfg!(debug_assertions),
        )
    }

    /// Combine explicit overrides with the production/development defaults.
    /// Unrecognized data-source values fall back to the default.
    pub fn resolve(api_base: Option<&str>, data_source: Option<&str>, production: bool) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(if production {
                PRODUCTION_API_BASE
            } else {
                DEVELOPMENT_API_BASE
            })
            .trim_end_matches('/')
            .to_owned();
        let data_mode = data_source.and_then(DataMode::parse).unwrap_or(if production {
            DataMode::Remote
        } else {
            DataMode::Mock
        });
        Self { api_base, data_mode }
    }
}
