//! Collapsible side panel for the home shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Open/closed lives in `UiState` so the header toggle and this panel share
//! it. The panel owns the window listeners (resize, outside pointer-down) and
//! the body scroll lock; all three are released on unmount.

use leptos::prelude::*;

use crate::net::Backend;
use crate::routes::PROFILE_PATH;
use crate::state::session::Session;
use crate::state::ui::UiState;

pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/80";

#[component]
pub fn SidePanel(toggle_ref: NodeRef<leptos::html::Button>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<Session>>();
    let backend = expect_context::<Backend>();
    let panel_ref = NodeRef::<leptos::html::Aside>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let width = RwSignal::new(browser::viewport_width());

        let resize = window_event_listener(leptos::ev::resize, move |_| {
            let Some(w) = browser::viewport_width() else {
                return;
            };
            width.set(Some(w));
            ui.update(|s| s.on_resize(w));
        });

        let pointer = window_event_listener(leptos::ev::mousedown, move |ev| {
            if !ui.get_untracked().side_panel_open {
                return;
            }
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            let in_panel = panel_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
            let in_toggle = toggle_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
            if in_panel || in_toggle {
                return;
            }
            if let Some(w) = browser::viewport_width() {
                ui.update(|s| s.on_outside_pointer_down(w));
            }
        });

        Effect::new(move || {
            let locked = width.get().is_some_and(|w| ui.get().scroll_locked(w));
            browser::set_scroll_lock(locked);
        });

        on_cleanup(move || {
            resize.remove();
            pointer.remove();
            browser::set_scroll_lock(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = toggle_ref;

    let close = move |_| ui.update(UiState::close_side_panel);

    let on_logout = move |_| {
        ui.update(UiState::close_side_panel);
        #[cfg(feature = "hydrate")]
        {
            let identity = backend.identity.clone();
            leptos::task::spawn_local(async move {
                identity.sign_out().await;
                log::info!("signed out");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &backend;
    };

    let avatar = move || {
        session
            .get()
            .identity()
            .and_then(|id| id.photo_url.clone())
            .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_owned())
    };
    let email = move || {
        session
            .get()
            .identity()
            .map_or_else(|| "Guest User".to_owned(), |id| id.email_label().to_owned())
    };

    view! {
        <Show when=move || ui.get().side_panel_open>
            <div class="side-panel__overlay" on:click=close></div>
        </Show>
        <aside
            node_ref=panel_ref
            class="side-panel"
            class:side-panel--open=move || ui.get().side_panel_open
        >
            <div class="side-panel__user">
                <img class="side-panel__avatar" src=avatar alt="Profile"/>
                <p class="side-panel__email">{email}</p>
            </div>
            <nav class="side-panel__nav">
                <a class="side-panel__link" href=PROFILE_PATH on:click=close>
                    "View Profile"
                </a>
                <button class="side-panel__logout" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </aside>
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    pub fn viewport_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    pub fn set_scroll_lock(locked: bool) {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            log::warn!("could not update body scroll lock");
        }
    }
}
