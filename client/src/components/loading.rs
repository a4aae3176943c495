//! Full-page spinner shown while the session is unresolved.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <div class="loading__spinner"></div>
            <span class="loading__label">"Loading..."</span>
        </div>
    }
}
