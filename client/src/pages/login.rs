//! Login page: email/password, password reset and Google sign-in.

use leptos::prelude::*;

use crate::components::google_button::GoogleButton;
use crate::net::Backend;
use crate::routes::REGISTER_PATH;
use crate::services::federated::FederatedIntent;
use crate::services::login::{request_password_reset, sign_in};
use crate::state::toast::ToastState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_backend = backend.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let identity = submit_backend.identity.clone();
        let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
        leptos::task::spawn_local(async move {
            let feedback = sign_in(identity.as_ref(), &email_value, &password_value).await;
            if feedback.is_success() {
                email.set(String::new());
                password.set(String::new());
            }
            toasts.update(|t| {
                t.feedback(&feedback);
            });
            busy.set(false);
        });
    };

    let on_forgot = move |_| {
        let identity = backend.identity.clone();
        let email_value = email.get_untracked();
        leptos::task::spawn_local(async move {
            let feedback = request_password_reset(identity.as_ref(), &email_value).await;
            toasts.update(|t| {
                t.feedback(&feedback);
            });
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button type="button" class="auth-link auth-link--forgot" on:click=on_forgot>
                        "Forgot Password?"
                    </button>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <div class="auth-divider">"or"</div>
                <GoogleButton intent=FederatedIntent::SignIn busy=busy/>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
