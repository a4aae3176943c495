//! Authenticated landing page: header, side panel and feature tiles.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::side_panel::SidePanel;
use crate::routes::{MENOCYCLE_PATH, QUESTIONNAIRE_PATH};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let on_connect = move |_| {
        toasts.update(|t| {
            t.success("Device Connected!");
        });
    };
    let to_questionnaire = {
        let navigate = navigate.clone();
        move |_| navigate(QUESTIONNAIRE_PATH, NavigateOptions::default())
    };
    let to_menocycle = move |_| navigate(MENOCYCLE_PATH, NavigateOptions::default());

    view! {
        <div class="home">
            <header class="home__header">
                <button
                    node_ref=toggle_ref
                    class="home__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ui.update(UiState::toggle_side_panel)
                >
                    {move || ui.get().menu_icon()}
                </button>
                <h1 class="home__logo">"MenoSense"</h1>
            </header>
            <SidePanel toggle_ref=toggle_ref/>
            <main class="home__content">
                <button class="home__tile" on:click=on_connect>
                    <h2>"Connect Your Device"</h2>
                    <p>"Pair your wearable to start tracking."</p>
                </button>
                <button class="home__tile" on:click=to_questionnaire>
                    <h2>"Answer Questionnaire"</h2>
                    <p>"Tell us how you have been feeling."</p>
                </button>
                <button class="home__tile" on:click=to_menocycle>
                    <h2>"Know More About MenoCycle"</h2>
                    <p>"Learn what each stage means for you."</p>
                </button>
            </main>
        </div>
    }
}
