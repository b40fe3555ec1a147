//! Host Page
//!
//! Everything the actions need from the page they run in: alerts, reloads,
//! local persistence and the reactive view state. [`BrowserPage`] is the
//! real implementation.

use gloo_timers::callback::Timeout;
use leptos::*;

use super::global::GlobalState;
use crate::api::WeeklyStats;
use crate::components::results::ResultView;

/// Element scrolled into view after a result is shown
pub const RISK_BANNER_ID: &str = "risk-card";

/// Controls that are disabled while their request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Analyze,
    SaveSettings,
    Onboarding,
}

/// The page the dashboard runs in
pub trait Page {
    /// Blocking user-visible message
    fn alert(&self, message: &str);

    fn reload(&self);

    /// Name saved after onboarding, if any
    fn stored_user_name(&self) -> Option<String>;

    fn remember_user_name(&self, name: &str);

    fn set_busy(&self, control: Control, busy: bool);

    /// Reveal the results section with a new result
    fn show_result(&self, view: ResultView);

    fn set_onboarding_visible(&self, visible: bool);

    /// Weekly stats arrived and the charts are about to be rebuilt
    fn dashboard_refreshed(&self, stats: &WeeklyStats);
}

/// Browser implementation over `web_sys` and the global signals
#[derive(Clone)]
pub struct BrowserPage {
    state: GlobalState,
    user_name_key: String,
}

impl BrowserPage {
    pub fn new(state: GlobalState, user_name_key: &str) -> Self {
        Self {
            state,
            user_name_key: user_name_key.to_string(),
        }
    }

    /// Read the stored user name without going through the trait
    pub fn stored_name(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage
            .get_item(&self.user_name_key)
            .ok()?
            .filter(|name| !name.is_empty())
    }
}

impl Page for BrowserPage {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Reload failed: {:?}", e);
            }
        }
    }

    fn stored_user_name(&self) -> Option<String> {
        self.stored_name()
    }

    fn remember_user_name(&self, name: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(&self.user_name_key, name);
            }
        }
        self.state.user_name.set(Some(name.to_string()));
    }

    fn set_busy(&self, control: Control, busy: bool) {
        let signal = match control {
            Control::Analyze => self.state.analyzing,
            Control::SaveSettings => self.state.saving_settings,
            Control::Onboarding => self.state.onboarding_busy,
        };
        signal.set(busy);
    }

    fn show_result(&self, view: ResultView) {
        self.state.result.set(Some(view));

        // Let the results section render before scrolling to it
        Timeout::new(0, scroll_to_risk_banner).forget();
    }

    fn set_onboarding_visible(&self, visible: bool) {
        self.state.onboarding_open.set(visible);
    }

    fn dashboard_refreshed(&self, stats: &WeeklyStats) {
        if let Some(context) = stats.context.as_deref().filter(|c| !c.is_empty()) {
            self.state.weekly_context.set(Some(context.to_string()));
        }
        self.state
            .last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }
}

fn scroll_to_risk_banner() {
    let banner = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RISK_BANNER_ID));

    if let Some(banner) = banner {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        banner.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
