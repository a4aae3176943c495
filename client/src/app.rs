//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::{AuthGate, CatchAllRedirect};
use crate::components::toast_stack::ToastStack;
use crate::config::{BackendConfig, BackendMeta};
use crate::net::Backend;
use crate::pages::{
    auth_callback::AuthCallbackPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::routes::AppRoute;
use crate::state::{session::Session, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, backend: BackendConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <BackendMeta config=backend/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast and UI signals plus the backend handle, and
/// bridges the identity client's session channel into the session signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::Unknown);
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());
    let backend = Backend::firebase(backend_config());

    #[cfg(feature = "hydrate")]
    bridge_session(&backend, session);

    provide_context(session);
    provide_context(toasts);
    provide_context(ui);
    provide_context(backend);

    view! {
        <Stylesheet id="leptos" href="/pkg/menosense.css"/>
        <Title text="MenoSense"/>

        <Router>
            <ToastStack/>
            <Routes fallback=|| view! { <CatchAllRedirect/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <AuthGate route=AppRoute::Login><LoginPage/></AuthGate> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <AuthGate route=AppRoute::Register><RegisterPage/></AuthGate> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <AuthGate route=AppRoute::Home><HomePage/></AuthGate> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <AuthGate route=AppRoute::Profile><ProfilePage/></AuthGate> }
                />
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
            </Routes>
        </Router>
    }
}

fn backend_config() -> BackendConfig {
    #[cfg(feature = "hydrate")]
    {
        BackendConfig::from_document().unwrap_or_else(|e| {
            log::error!("backend not configured, staying signed out: {e}");
            BackendConfig::default()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        BackendConfig::default()
    }
}

/// Hold the app's single session subscription and resolve the persisted
/// session. The forwarding task is aborted when the root unmounts.
#[cfg(feature = "hydrate")]
fn bridge_session(backend: &Backend, session: RwSignal<Session>) {
    use futures::future::{AbortHandle, Abortable};

    use crate::state::session::forward_sessions;

    let rx = backend.identity.observe_session();
    let (handle, registration) = AbortHandle::new_pair();
    leptos::task::spawn_local(async move {
        let forward = forward_sessions(rx, move |next| session.set(next));
        if Abortable::new(forward, registration).await.is_err() {
            log::debug!("session bridge stopped");
        }
    });

    let identity = backend.identity.clone();
    leptos::task::spawn_local(async move {
        identity.restore_session().await;
    });

    on_cleanup(move || handle.abort());
}
