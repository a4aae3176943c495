//! Registration page.

use leptos::prelude::*;

use crate::components::google_button::GoogleButton;
use crate::net::Backend;
use crate::routes::LOGIN_PATH;
use crate::services::federated::FederatedIntent;
use crate::services::register::{RegistrationForm, register};
use crate::state::toast::ToastState;
use crate::util::time::now_rfc3339;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(RegistrationForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let backend = backend.clone();
        let input = form.get_untracked();
        leptos::task::spawn_local(async move {
            let feedback =
                register(backend.identity.as_ref(), backend.profiles.as_ref(), &input, &now_rfc3339()).await;
            if feedback.is_success() {
                form.set(RegistrationForm::default());
            }
            toasts.update(|t| {
                t.feedback(&feedback);
            });
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join MenoSense"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <div class="auth-divider">"or"</div>
                <GoogleButton intent=FederatedIntent::SignUp busy=busy/>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}
