use super::*;
use crate::net::auth::{AuthReply, TransportError};
use crate::state::navigation::NavigationState;
use crate::state::session::{AuthFailure, Identity, SessionStore};

fn requested(path: &str) -> IntendedDestination {
    IntendedDestination::new(path, "")
}

fn login_redirect(path: &str) -> GuardDecision {
    GuardDecision::RedirectTo(Redirect { to: "/login", intended: requested(path), replace: true })
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn authenticated_session_is_allowed() {
    let session = Session::Authenticated(Identity { display_name: "User".to_owned(), email: "a@b.com".to_owned() });
    assert_eq!(evaluate(&session, requested("/profile")), GuardDecision::Allow);
}

#[test]
fn anonymous_session_redirects_with_intended_path() {
    assert_eq!(evaluate(&Session::Anonymous, requested("/booking/42")), login_redirect("/booking/42"));
}

#[test]
fn authenticating_session_is_treated_as_anonymous() {
    assert_eq!(evaluate(&Session::Authenticating, requested("/profile")), login_redirect("/profile"));
}

#[test]
fn failed_session_redirects() {
    let session = Session::Failed(AuthFailure::Transport(TransportError::TimedOut));
    assert_eq!(evaluate(&session, requested("/profile")), login_redirect("/profile"));
}

#[test]
fn redirect_keeps_query_and_replaces_history() {
    let decision = evaluate(&Session::Anonymous, IntendedDestination::new("/booking/42", "?guests=2"));
    let GuardDecision::RedirectTo(redirect) = decision else {
        panic!("expected redirect");
    };
    assert_eq!(redirect.intended.href(), "/booking/42?guests=2");
    assert!(redirect.replace);
    assert!(redirect.navigate_options().replace);
}

// =============================================================
// post_sign_in_target
// =============================================================

#[test]
fn target_defaults_to_landing_page() {
    assert_eq!(post_sign_in_target(None), "/discover");
}

#[test]
fn target_uses_remembered_destination() {
    let dest = IntendedDestination::new("/booking/42", "?guests=2");
    assert_eq!(post_sign_in_target(Some(&dest)), "/booking/42?guests=2");
}

#[test]
fn target_ignores_offsite_and_login_paths() {
    for path in ["//evil.example/x", "https://evil.example", "/\\evil.example", "/login", "relative"] {
        assert_eq!(post_sign_in_target(Some(&requested(path))), "/discover", "path {path:?}");
    }
}

// =============================================================
// Round trip: guard → sign-in → forward
// =============================================================

#[test]
fn anonymous_visit_round_trips_to_original_path() {
    let mut store = SessionStore::new();
    store.restore(None);
    let mut nav = NavigationState::default();

    let GuardDecision::RedirectTo(redirect) = evaluate(store.current(), requested("/booking/42")) else {
        panic!("expected redirect");
    };
    nav.remember(redirect.intended);

    let pending = store.begin_sign_in("a@b.com", "pw").unwrap();
    store.complete_sign_in(pending.attempt, Ok(AuthReply { status: Some("success".to_owned()), message: None }));
    assert!(store.current().is_authenticated());

    let target = post_sign_in_target(nav.take().as_ref());
    assert_eq!(target, "/booking/42");
    assert_eq!(evaluate(store.current(), requested(&target)), GuardDecision::Allow);
}

#[test]
fn later_redirect_overwrites_earlier_destination() {
    let mut nav = NavigationState::default();
    for path in ["/profile", "/booking-confirmation"] {
        if let GuardDecision::RedirectTo(redirect) = evaluate(&Session::Anonymous, requested(path)) {
            nav.remember(redirect.intended);
        }
    }
    assert_eq!(post_sign_in_target(nav.take().as_ref()), "/booking-confirmation");
}
