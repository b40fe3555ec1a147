//! Meal Entry Component
//!
//! Four free-text meal fields and the analyze button.

use leptos::*;

use crate::api::MealInput;
use crate::state::{use_actions, GlobalState};

/// Meal entry form
#[component]
pub fn MealForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let actions = use_actions();

    let breakfast = create_rw_signal(String::new());
    let lunch = create_rw_signal(String::new());
    let snacks = create_rw_signal(String::new());
    let dinner = create_rw_signal(String::new());

    let analyzing = state.analyzing;

    let on_analyze = move |_| {
        let meals = MealInput {
            breakfast: breakfast.get(),
            lunch: lunch.get(),
            snacks: snacks.get(),
            dinner: dinner.get(),
        };

        let actions = actions.clone();
        spawn_local(async move {
            actions.submit_analysis(meals).await;
        });
    };

    view! {
        <section class="card meal-form">
            <h2>"What did you eat today?"</h2>

            <div class="meal-grid">
                <MealField id="breakfast" label="🌅 Breakfast" placeholder="e.g. 2 idli, sambar, coffee" value=breakfast />
                <MealField id="lunch" label="☀️ Lunch" placeholder="e.g. rice, dal, curd" value=lunch />
                <MealField id="snacks" label="🍪 Snacks" placeholder="e.g. banana, biscuits" value=snacks />
                <MealField id="dinner" label="🌙 Dinner" placeholder="e.g. 2 chapati, paneer curry" value=dinner />
            </div>

            <button
                id="analyze-btn"
                type="button"
                class="btn btn-primary"
                on:click=on_analyze
                disabled=move || analyzing.get()
            >
                {move || if analyzing.get() {
                    view! {
                        <span class="loader">"⚙️"</span>
                        <span>" Analyzing..."</span>
                    }.into_view()
                } else {
                    view! { <span>"🔍 Analyze Meals"</span> }.into_view()
                }}
            </button>
        </section>
    }
}

#[component]
fn MealField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <textarea
                id=id
                name=id
                rows="2"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
