//! Weekly Analysis Page

use leptos::*;

use crate::components::WeeklyCharts;

#[component]
pub fn WeeklyAnalysis() -> impl IntoView {
    view! {
        <div class="page weekly-analysis">
            <div class="page-header">
                <h1>"Weekly Analysis"</h1>
                <p class="muted">"Sugar, carbs and fiber over your last seven logged days"</p>
            </div>

            <WeeklyCharts />
        </div>
    }
}
