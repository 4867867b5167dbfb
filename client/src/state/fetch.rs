//! Fetch-triggered view state shared by the page view-models.
//!
//! DESIGN
//! ======
//! Every fetch is tagged with a generation. Only the newest generation may
//! apply its result; anything older is logged and dropped. There is no
//! cancellation, so a slow superseded request simply resolves into nothing.
//!
//! The render phase is derived from the flags alone (see [`ViewPhase`]),
//! which keeps stale data off screen while a newer request is in flight.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::error::ApiError;

/// Tag identifying one fetch of a view-model.
pub type Generation = u64;

/// What a page should render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Failed,
    Ready,
    /// Settled without data.
    Empty,
}

/// Loading flag, error message, and last good data for one request kind.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
    generation: Generation,
    failure_message: &'static str,
}

impl<T> FetchState<T> {
    /// State for a view that fetches on mount; starts in the loading phase.
    pub fn new(failure_message: &'static str) -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
            generation: 0,
            failure_message,
        }
    }

    /// State for an on-demand fetch; starts settled and empty.
    pub fn idle(failure_message: &'static str) -> Self {
        Self {
            loading: false,
            ..Self::new(failure_message)
        }
    }

    /// Mark a new fetch in flight and return its tag.
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    /// Apply `result` if `generation` is still current. Returns whether it
    /// was applied. Failures keep the previous data.
    pub fn finish(&mut self, generation: Generation, result: Result<T, ApiError>) -> bool {
        if !self.is_current(generation) {
            log::debug!(
                "discarding stale result (generation {generation}, current {})",
                self.generation
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(err) => {
                log::error!("{}: {err}", self.failure_message);
                self.error = Some(self.failure_message.to_owned());
            }
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Drop data and any error without touching the generation.
    pub fn clear(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = false;
    }

    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            ViewPhase::Loading
        } else if self.error.is_some() {
            ViewPhase::Failed
        } else if self.data.is_some() {
            ViewPhase::Ready
        } else {
            ViewPhase::Empty
        }
    }

    pub fn failure_message(&self) -> &'static str {
        self.failure_message
    }
}
