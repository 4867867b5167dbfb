//! Session store: the authenticated identity shared across the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, navbar, sidebar and login page all read the session. Only
//! `initialize`, `login`, `logout` and `expire` mutate it.
//!
//! DESIGN
//! ======
//! `SessionCell` holds the state and its listeners. It is split from
//! `SessionStore` so the HTTP wrapper's unauthorized hook can expire the
//! session without owning the data source that owns the wrapper.
//! `SessionContext` mirrors the cell into an `RwSignal` for the views.
//!
//! ERROR HANDLING
//! ==============
//! A failed initial identity check degrades to signed out and clears the
//! token. Login errors propagate to the caller unchanged.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::error::ApiError;
use crate::net::source::AnalyticsSource;
use crate::net::storage::TokenStore;
use crate::net::types::{Credentials, User};

/// Snapshot of who is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub authenticated: bool,
    /// True until the first identity check resolves.
    pub loading: bool,
}

impl SessionState {
    pub fn pending() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::pending()
    }
}

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

/// Shared session state plus change listeners.
#[derive(Clone, Default)]
pub struct SessionCell {
    state: Arc<Mutex<SessionState>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl SessionCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Register `listener` for every subsequent change.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    /// Replace the state and notify listeners.
    pub fn publish(&self, next: SessionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next.clone();
        // Listeners run without the lock held so they may read the cell.
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in &listeners {
            listener(&next);
        }
    }

    /// Drop the identity after the API rejected our token.
    pub fn expire(&self) {
        log::warn!("session expired; signing out");
        self.publish(SessionState::signed_out());
    }
}

/// Owns session transitions against a data source and token store.
pub struct SessionStore {
    cell: SessionCell,
    source: Arc<dyn AnalyticsSource>,
    tokens: Arc<dyn TokenStore>,
    initialized: AtomicBool,
}

impl SessionStore {
    pub fn new(cell: SessionCell, source: Arc<dyn AnalyticsSource>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            cell,
            source,
            tokens,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        self.cell.snapshot()
    }

    pub fn cell(&self) -> &SessionCell {
        &self.cell
    }

    /// Resolve the pending state from the persisted token. Runs at most once;
    /// later calls return immediately.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }
        if self.tokens.load().is_none() {
            self.cell.publish(SessionState::signed_out());
            return;
        }
        match self.source.current_user().await {
            Ok(user) => self.cell.publish(SessionState::signed_in(user)),
            Err(err) => {
                log::warn!("session check failed: {err}");
                self.tokens.clear();
                self.cell.publish(SessionState::signed_out());
            }
        }
    }

    /// Exchange credentials for a token and sign in.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let auth = self.source.login(credentials).await?;
        self.tokens.save(&auth.token);
        self.cell.publish(SessionState::signed_in(auth.user.clone()));
        Ok(auth.user)
    }

    /// Forget the token and sign out. No network call.
    pub fn logout(&self) {
        self.tokens.clear();
        self.cell.publish(SessionState::signed_out());
    }
}

/// Reactive handle provided through Leptos context.
#[derive(Clone)]
pub struct SessionContext {
    pub store: Arc<SessionStore>,
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new(store: Arc<SessionStore>) -> Self {
        let state = RwSignal::new(store.state());
        store.cell().subscribe(move |next| {
            let _ = state.try_set(next.clone());
        });
        Self { store, state }
    }
}
