//! Profile page for the signed-in identity.

use leptos::prelude::*;

use crate::components::side_panel::PLACEHOLDER_AVATAR;
use crate::routes::HOME_PATH;
use crate::state::session::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let identity = move || session.get().identity().cloned();

    let avatar = move || {
        identity()
            .and_then(|id| id.photo_url)
            .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_owned())
    };
    let name = move || identity().and_then(|id| id.display_name).unwrap_or_else(|| "Not set".to_owned());
    let email = move || identity().map_or_else(|| "Guest User".to_owned(), |id| id.email_label().to_owned());
    let uid = move || identity().map(|id| id.uid).unwrap_or_default();

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <img class="profile-card__avatar" src=avatar alt="Profile"/>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Name"</span>
                    <span class="profile-card__value">{name}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Email"</span>
                    <span class="profile-card__value">{email}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"User ID"</span>
                    <span class="profile-card__value profile-card__value--mono">{uid}</span>
                </div>
                <a class="auth-button" href=HOME_PATH>"Back to Home"</a>
            </div>
        </div>
    }
}
