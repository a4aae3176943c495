//! Auth gate decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page goes through the same decision so redirect behavior is
//! identical everywhere. The function holds no memory; the gate component
//! recomputes it on every session change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::{AppRoute, HOME_PATH, LOGIN_PATH, RouteAccess};
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still unresolved; show the spinner and do not navigate.
    Loading,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
    Render,
}

#[must_use]
pub fn decide(session: &Session, route: AppRoute) -> GateDecision {
    let signed_in = match session {
        Session::Unknown => return GateDecision::Loading,
        Session::Absent => false,
        Session::Present(_) => true,
    };
    match (route.access(), signed_in) {
        (RouteAccess::Protected, true) | (RouteAccess::Public, false) => GateDecision::Render,
        (RouteAccess::Protected | RouteAccess::CatchAll, false) => GateDecision::Redirect(LOGIN_PATH),
        (RouteAccess::Public | RouteAccess::CatchAll, true) => GateDecision::Redirect(HOME_PATH),
    }
}

/// Decision for a path that missed the route table.
///
/// A near-miss of a known route (a trailing slash) is sent to its canonical
/// path and gated there. Anything else follows the catch-all rule.
#[must_use]
pub fn fallback_decision(session: &Session, pathname: &str) -> GateDecision {
    if !session.is_resolved() {
        return GateDecision::Loading;
    }
    match AppRoute::from_path(pathname).path() {
        Some(canonical) if canonical != pathname => GateDecision::Redirect(canonical),
        _ => decide(session, AppRoute::Unknown),
    }
}
