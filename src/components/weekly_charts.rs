//! Weekly Charts Component
//!
//! Hosts the four chart canvases. Mounting it loads the weekly stats;
//! unmounting destroys the chart instances.

use leptos::*;

use crate::charts::ChartSlot;
use crate::state::{use_actions, GlobalState};

#[component]
pub fn WeeklyCharts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let actions = use_actions();
    let sugar_ref = create_node_ref::<html::Canvas>();

    // Load once the sugar canvas is in the document
    let actions_for_load = actions.clone();
    create_effect(move |loaded: Option<bool>| {
        if loaded == Some(true) {
            return true;
        }
        if sugar_ref.get().is_none() {
            return false;
        }

        let actions = actions_for_load.clone();
        spawn_local(async move {
            actions.load_dashboard().await;
        });
        true
    });

    on_cleanup(move || actions.clear_charts());

    let weekly_context = state.weekly_context;

    view! {
        <section class="card weekly-charts">
            <div class="section-header">
                <h2>"📈 Your Week"</h2>
                <span class="muted">{move || state.refresh_caption()}</span>
            </div>

            <p id="weekly-context" class="weekly-context">
                {move || weekly_context.get().unwrap_or_default()}
            </p>

            <div class="chart-grid">
                {ChartSlot::ALL.into_iter().map(|slot| {
                    let canvas = if slot == ChartSlot::Sugar {
                        view! { <canvas id=slot.canvas_id() node_ref=sugar_ref /> }
                    } else {
                        view! { <canvas id=slot.canvas_id() /> }
                    };

                    view! {
                        <div class="chart-card">
                            <h3>{slot.title()}</h3>
                            {canvas}
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
