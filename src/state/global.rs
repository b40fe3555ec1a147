//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::rc::Rc;

use crate::actions::Actions;
use crate::api::HttpBackend;
use crate::charts::{ChartJsSurface, ChartRenderer};
use crate::components::results::ResultView;
use crate::config::UiConfig;
use crate::state::page::BrowserPage;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Latest analysis, `None` until the first one
    pub result: RwSignal<Option<ResultView>>,
    /// Analysis request in flight
    pub analyzing: RwSignal<bool>,
    /// Settings save in flight
    pub saving_settings: RwSignal<bool>,
    /// Onboarding save in flight
    pub onboarding_busy: RwSignal<bool>,
    /// Whether the first-run modal is shown
    pub onboarding_open: RwSignal<bool>,
    /// Narrative summary of the week from the backend
    pub weekly_context: RwSignal<Option<String>>,
    /// When the weekly charts were last rebuilt (ms since epoch)
    pub last_refresh: RwSignal<Option<i64>>,
    /// Name remembered locally after onboarding
    pub user_name: RwSignal<Option<String>>,
}

/// Actions wired to the browser
pub type AppActions = Actions<HttpBackend, BrowserPage, ChartJsSurface>;

/// Provide global state and actions to the component tree
pub fn provide_global_state(config: UiConfig) {
    let state = GlobalState {
        result: create_rw_signal(None),
        analyzing: create_rw_signal(false),
        saving_settings: create_rw_signal(false),
        onboarding_busy: create_rw_signal(false),
        onboarding_open: create_rw_signal(false),
        weekly_context: create_rw_signal(None),
        last_refresh: create_rw_signal(None),
        user_name: create_rw_signal(None),
    };

    let page = BrowserPage::new(state, &config.user_name_key);
    state.user_name.set(page.stored_name());

    let charts = ChartRenderer::new(ChartJsSurface::new(), config.recommended_sugar_limit);
    let actions: Rc<AppActions> = Rc::new(Actions::new(
        HttpBackend::new(&config),
        page,
        charts,
        config,
    ));

    provide_context(state);
    provide_context(actions);
}

/// Fetch the shared actions from context
pub fn use_actions() -> Rc<AppActions> {
    use_context::<Rc<AppActions>>().expect("Actions not found")
}

impl GlobalState {
    /// "Updated HH:MM" caption for the chart sections
    pub fn refresh_caption(&self) -> Option<String> {
        self.last_refresh
            .get()
            .and_then(chrono::DateTime::from_timestamp_millis)
            .map(|dt| format!("Updated {}", dt.with_timezone(&chrono::Local).format("%H:%M")))
    }
}
