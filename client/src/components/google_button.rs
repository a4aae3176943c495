//! "Continue with Google" button shared by the login and registration pages.

#[cfg(test)]
#[path = "google_button_test.rs"]
mod google_button_test;

use leptos::prelude::*;

use crate::net::Backend;
use crate::services::federated::{FederatedIntent, federated_sign_in};
use crate::state::toast::ToastState;

#[component]
pub fn GoogleButton(intent: FederatedIntent, busy: RwSignal<bool>) -> impl IntoView {
    let backend = expect_context::<Backend>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        let backend = backend.clone();
        leptos::task::spawn_local(run_google_sign_in(backend, intent, busy, toasts));
    };

    let label = match intent {
        FederatedIntent::SignIn => "Sign in with Google",
        FederatedIntent::SignUp => "Sign up with Google",
    };

    view! {
        <button type="button" class="auth-button auth-button--google" on:click=on_click disabled=move || busy.get()>
            {label}
        </button>
    }
}

/// Popup flow behind the button. `busy` stays set until the popup settles so
/// the page's other submit buttons stay disabled meanwhile.
pub(crate) async fn run_google_sign_in(
    backend: Backend,
    intent: FederatedIntent,
    busy: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    busy.set(true);
    let loading = toasts.try_update(|t| t.loading(intent.loading_message()));
    let outcome = federated_sign_in(backend.identity.as_ref(), backend.profiles.as_ref(), intent).await;
    toasts.update(|t| {
        if let Some(id) = loading {
            t.dismiss(id);
        }
        if let Some(feedback) = &outcome {
            t.feedback(feedback);
        }
    });
    busy.set(false);
}
