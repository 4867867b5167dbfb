use super::*;
use crate::net::mock::demo_user;

#[test]
fn pending_session_waits() {
    assert_eq!(guard_outcome(&SessionState::pending()), GuardOutcome::Pending);
}

#[test]
fn signed_in_session_is_allowed() {
    assert_eq!(guard_outcome(&SessionState::signed_in(demo_user())), GuardOutcome::Allow);
}

#[test]
fn signed_out_session_redirects_to_login() {
    assert_eq!(
        guard_outcome(&SessionState::signed_out()),
        GuardOutcome::Redirect("/login")
    );
}

#[test]
fn loading_wins_over_stale_identity() {
    let state = SessionState {
        loading: true,
        ..SessionState::signed_in(demo_user())
    };
    assert_eq!(guard_outcome(&state), GuardOutcome::Pending);
}

#[test]
fn login_page_bounces_signed_in_users_home() {
    assert_eq!(login_redirect(&SessionState::signed_in(demo_user())), Some("/"));
    assert_eq!(login_redirect(&SessionState::signed_out()), None);
    assert_eq!(login_redirect(&SessionState::pending()), None);
}
