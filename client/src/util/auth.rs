//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and the login page apply the same rules, so the decision is
//! a pure function of the session snapshot and the components just render it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// What a guarded route renders for a session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Identity check still running; show a neutral indicator.
    Pending,
    Allow,
    Redirect(&'static str),
}

pub fn guard_outcome(state: &SessionState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Pending
    } else if state.authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(LOGIN_PATH)
    }
}

/// Where the login page should send an already signed-in user.
pub fn login_redirect(state: &SessionState) -> Option<&'static str> {
    (!state.loading && state.authenticated).then_some(HOME_PATH)
}
