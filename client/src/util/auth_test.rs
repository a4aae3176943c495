use super::*;
use crate::net::types::Identity;

fn present() -> Session {
    Session::Present(Identity {
        uid: "u1".to_owned(),
        email: Some("alice@example.com".to_owned()),
        display_name: None,
        photo_url: None,
    })
}

const ALL_ROUTES: [AppRoute; 5] =
    [AppRoute::Login, AppRoute::Register, AppRoute::Home, AppRoute::Profile, AppRoute::Unknown];

#[test]
fn unknown_session_always_loads() {
    for route in ALL_ROUTES {
        assert_eq!(decide(&Session::Unknown, route), GateDecision::Loading);
    }
}

#[test]
fn absent_session_bounced_from_protected() {
    assert_eq!(decide(&Session::Absent, AppRoute::Home), GateDecision::Redirect("/login"));
    assert_eq!(decide(&Session::Absent, AppRoute::Profile), GateDecision::Redirect("/login"));
}

#[test]
fn absent_session_renders_public() {
    assert_eq!(decide(&Session::Absent, AppRoute::Login), GateDecision::Render);
    assert_eq!(decide(&Session::Absent, AppRoute::Register), GateDecision::Render);
}

#[test]
fn present_session_bounced_from_public() {
    assert_eq!(decide(&present(), AppRoute::Login), GateDecision::Redirect("/"));
    assert_eq!(decide(&present(), AppRoute::Register), GateDecision::Redirect("/"));
}

#[test]
fn present_session_renders_protected() {
    assert_eq!(decide(&present(), AppRoute::Home), GateDecision::Render);
    assert_eq!(decide(&present(), AppRoute::Profile), GateDecision::Render);
}

#[test]
fn catch_all_depends_on_session() {
    assert_eq!(decide(&Session::Absent, AppRoute::Unknown), GateDecision::Redirect("/login"));
    assert_eq!(decide(&present(), AppRoute::Unknown), GateDecision::Redirect("/"));
}

#[test]
fn decision_has_no_memory() {
    // Sign-out while on a protected page flips straight to the login redirect.
    assert_eq!(decide(&present(), AppRoute::Profile), GateDecision::Render);
    assert_eq!(decide(&Session::Absent, AppRoute::Profile), GateDecision::Redirect("/login"));
    assert_eq!(decide(&present(), AppRoute::Profile), GateDecision::Render);
}

// =============================================================
// Fallback
// =============================================================

#[test]
fn fallback_waits_for_session() {
    assert_eq!(fallback_decision(&Session::Unknown, "/nowhere"), GateDecision::Loading);
    assert_eq!(fallback_decision(&Session::Unknown, "/profile/"), GateDecision::Loading);
}

#[test]
fn fallback_unknown_path_follows_catch_all() {
    assert_eq!(fallback_decision(&Session::Absent, "/questionnaire"), GateDecision::Redirect("/login"));
    assert_eq!(fallback_decision(&present(), "/questionnaire"), GateDecision::Redirect("/"));
    assert_eq!(fallback_decision(&present(), "/login/extra"), GateDecision::Redirect("/"));
}

#[test]
fn fallback_trailing_slash_goes_to_canonical_route() {
    // The canonical route's own gate decides from there.
    assert_eq!(fallback_decision(&present(), "/profile/"), GateDecision::Redirect("/profile"));
    assert_eq!(fallback_decision(&Session::Absent, "/register/"), GateDecision::Redirect("/register"));
}

#[test]
fn fallback_empty_path_goes_home() {
    assert_eq!(fallback_decision(&Session::Absent, ""), GateDecision::Redirect("/"));
}
