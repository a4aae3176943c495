//! Toast notification stack.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <ToastItem toast=toast toasts=toasts/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        if toast.kind.auto_closes() {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::toast::AUTO_CLOSE_MS).await;
                toasts.update(|s| {
                    s.dismiss(id);
                });
            });
        }
    }

    let on_click = move |_| {
        toasts.update(|s| {
            s.dismiss(id);
        });
    };

    view! {
        <div class=toast.kind.css_class() role="alert" on:click=on_click>
            {toast.text}
        </div>
    }
}
