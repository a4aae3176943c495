//! Landing page inside the federated sign-in popup.
//!
//! Ungated: it runs in the popup window, which has no session of its own.

use leptos::prelude::*;

use crate::net::popup;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    Effect::new(move |_| popup::report_to_opener());

    view! {
        <div class="loading">
            <span class="loading__label">"Completing sign-in..."</span>
        </div>
    }
}
