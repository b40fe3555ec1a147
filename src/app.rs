//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, OnboardingModal};
use crate::config::UiConfig;
use crate::pages::{Dashboard, Settings, WeeklyAnalysis};
use crate::state::global::{provide_global_state, use_actions};

/// Root application component
#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    provide_global_state(config);

    // First-run check happens once per page load, whatever the route
    let actions = use_actions();
    spawn_local(async move {
        actions.check_onboarding().await;
    });

    view! {
        <Router>
            <div class="app">
                <Nav />

                <main class="container">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/weekly-analysis" view=WeeklyAnalysis />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <OnboardingModal />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <div class="not-found-icon">"🔍"</div>
            <h1>"Page Not Found"</h1>
            <p class="muted">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-primary">
                "Go to Dashboard"
            </A>
        </div>
    }
}
