//! Settings Page
//!
//! Name, sugar limit and report preferences. The backend has no endpoint to
//! read settings back, so the form starts from the defaults and every save
//! replaces all stored values.

use leptos::*;

use crate::api::SettingsPayload;
use crate::components::form_data::form_entries;
use crate::state::{use_actions, GlobalState};

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let actions = use_actions();
    let saving = state.saving_settings;
    let default_limit = actions.default_sugar_limit();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = event_target::<web_sys::HtmlFormElement>(&ev);
        let payload = SettingsPayload::from_form_entries(form_entries(&form));

        let actions = actions.clone();
        spawn_local(async move {
            actions.submit_settings(payload).await;
        });
    };

    view! {
        <div class="page settings">
            <div class="page-header">
                <h1>"Settings"</h1>
                <p class="muted">"Personalise your GlucoVision dashboard"</p>
            </div>

            <p class="muted settings-note">
                "Saving replaces all of your settings, so fill in every field."
            </p>

            <section class="card">
                <form id="settings-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="settings-name">"Name"</label>
                        <input
                            id="settings-name"
                            type="text"
                            name="name"
                            prop:value=move || state.user_name.get().unwrap_or_default()
                        />
                    </div>

                    <div class="form-group">
                        <label for="settings-sugar-limit">"Daily sugar limit (g)"</label>
                        <input
                            id="settings-sugar-limit"
                            type="number"
                            name="sugar_limit"
                            min="0"
                            step="0.5"
                            value=default_limit.to_string()
                        />
                    </div>

                    <fieldset class="form-group">
                        <legend>"Reports"</legend>
                        <label class="checkbox">
                            <input type="checkbox" name="weekly" />
                            " Weekly summary"
                        </label>
                        <label class="checkbox">
                            <input type="checkbox" name="monthly" />
                            " Monthly summary"
                        </label>
                    </fieldset>

                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Settings" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
