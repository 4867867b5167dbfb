//! Composition root for the client's long-lived services.
//!
//! ARCHITECTURE
//! ============
//! This is the one place that knows about `DataMode`. It picks the
//! `AnalyticsSource`, wires the HTTP wrapper's unauthorized hook to the
//! session cell, and hands the app an explicitly owned session store. Tests
//! compose the same graph with in-memory storage and a stub transport.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::{ClientConfig, DataMode};
use crate::net::http::{FetchTransport, HttpClient, Transport};
use crate::net::mock::{MockDelays, MockSource};
use crate::net::remote::RemoteSource;
use crate::net::source::AnalyticsSource;
use crate::net::storage::{BrowserTokenStore, TokenStore};
use crate::state::session::{SessionCell, SessionStore};

/// Everything the views need from outside the reactive graph.
#[derive(Clone)]
pub struct AppServices {
    pub session: Arc<SessionStore>,
    pub analytics: Arc<dyn AnalyticsSource>,
}

impl AppServices {
    pub fn compose(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore>,
        transport: Arc<dyn Transport>,
        now: DateTime<Utc>,
        delays: MockDelays,
    ) -> Self {
        let cell = SessionCell::new();
        let analytics: Arc<dyn AnalyticsSource> = match config.data_mode {
            DataMode::Mock => Arc::new(MockSource::new(now, delays)),
            DataMode::Remote => {
                let hook_cell = cell.clone();
                let http = HttpClient::new(&config.api_base, tokens.clone(), transport)
                    .on_unauthorized(move || hook_cell.expire());
                Arc::new(RemoteSource::new(http))
            }
        };
        log::info!("analytics source: {:?} ({})", config.data_mode, config.api_base);
        let session = Arc::new(SessionStore::new(cell, analytics.clone(), tokens));
        Self { session, analytics }
    }

    /// Services backed by `localStorage` and `fetch`.
    pub fn for_browser(config: &ClientConfig) -> Self {
        let delays = if cfg!(feature = "hydrate") {
            MockDelays::browser()
        } else {
            MockDelays::none()
        };
        Self::compose(
            config,
            Arc::new(BrowserTokenStore),
            Arc::new(FetchTransport),
            Utc::now(),
            delays,
        )
    }
}
