//! Dashboard Page
//!
//! Meal entry, the latest analysis and the weekly charts.

use leptos::*;

use crate::components::{MealForm, Results, WeeklyCharts};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="page dashboard">
            <div class="page-header">
                <h1>"Daily Meal Analysis"</h1>
                <p class="muted">"Log your meals to see nutrients and glycaemic risk"</p>
            </div>

            <MealForm />
            <Results />
            <WeeklyCharts />
        </div>
    }
}
