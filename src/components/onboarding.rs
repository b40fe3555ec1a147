//! Onboarding Modal
//!
//! First-run prompt for the user's name. Shown by the onboarding check when
//! setup is incomplete.

use leptos::*;

use super::form_data::form_value;
use crate::state::{use_actions, GlobalState};

#[component]
pub fn OnboardingModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let actions = use_actions();

    let open = state.onboarding_open;
    let busy = state.onboarding_busy;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = event_target::<web_sys::HtmlFormElement>(&ev);
        let name = form_value(&form, "name").unwrap_or_default();

        let actions = actions.clone();
        spawn_local(async move {
            actions.submit_onboarding(&name).await;
        });
    };

    view! {
        <div
            id="onboarding-modal"
            class=move || if open.get() { "modal-overlay" } else { "modal-overlay hidden" }
        >
            <div class="modal">
                <h2>"👋 Welcome to GlucoVision"</h2>
                <p class="muted">"Tell us your name to personalise your dashboard."</p>

                <form id="onboarding-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="onboarding-name">"Your name"</label>
                        <input id="onboarding-name" type="text" name="name" required=true />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Get Started" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
