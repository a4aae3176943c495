//! Route wrappers applying the auth gate decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `app` renders through `AuthGate`, and unknown paths through
//! `CatchAllRedirect`. The decision is recomputed whenever the session signal
//! changes and redirects replace the current history entry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading::LoadingSpinner;
use crate::routes::AppRoute;
use crate::state::session::Session;
use crate::util::auth::{GateDecision, decide, fallback_decision};

fn gate_memo(route: AppRoute) -> Memo<GateDecision> {
    let session = expect_context::<RwSignal<Session>>();
    Memo::new(move |_| decide(&session.get(), route))
}

fn redirect_view(path: &'static str) -> AnyView {
    let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
    view! { <Redirect path=path options=options/> }.into_any()
}

#[component]
pub fn AuthGate(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let decision = gate_memo(route);

    move || match decision.get() {
        GateDecision::Loading => view! { <LoadingSpinner/> }.into_any(),
        GateDecision::Redirect(path) => redirect_view(path),
        GateDecision::Render => children().into_any(),
    }
}

/// Fallback for paths outside the route table.
#[component]
pub fn CatchAllRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let pathname = use_location().pathname;
    let decision = Memo::new(move |_| fallback_decision(&session.get(), &pathname.get()));

    move || match decision.get() {
        GateDecision::Redirect(path) => redirect_view(path),
        GateDecision::Loading | GateDecision::Render => view! { <LoadingSpinner/> }.into_any(),
    }
}
