//! User Actions
//!
//! The analysis, settings and onboarding flows plus the dashboard refresh.
//! Every action surfaces its own failures to the user and leaves the page in
//! its pre-action state; nothing is retried.

use std::cell::RefCell;

use crate::api::{AnalysisResult, Backend, MealInput, SettingsPayload};
use crate::charts::{ChartRenderer, ChartSurface};
use crate::components::results::ResultView;
use crate::config::UiConfig;
use crate::state::page::{Control, Page};

pub const EMPTY_MEALS_MESSAGE: &str = "Please enter at least one meal.";
pub const SETTINGS_SAVED_MESSAGE: &str = "Settings saved!";
pub const SETTINGS_FAILED_MESSAGE: &str = "Failed to save settings";
pub const SETUP_FAILED_MESSAGE: &str = "Setup failed.";

/// Dashboard actions over a backend, a host page and a chart surface
pub struct Actions<B, P, S: ChartSurface> {
    backend: B,
    page: P,
    charts: RefCell<ChartRenderer<S>>,
    config: UiConfig,
}

impl<B, P, S> Actions<B, P, S>
where
    B: Backend,
    P: Page,
    S: ChartSurface,
{
    pub fn new(backend: B, page: P, charts: ChartRenderer<S>, config: UiConfig) -> Self {
        Self {
            backend,
            page,
            charts: RefCell::new(charts),
            config,
        }
    }

    /// Sugar limit used for first-run setup and as the settings form default
    pub fn default_sugar_limit(&self) -> f64 {
        self.config.default_sugar_limit
    }

    /// Analyse a day of meals and show the result.
    ///
    /// Returns the result on success; failures have already been reported.
    pub async fn submit_analysis(&self, meals: MealInput) -> Option<AnalysisResult> {
        if meals.is_blank() {
            self.page.alert(EMPTY_MEALS_MESSAGE);
            return None;
        }

        self.page.set_busy(Control::Analyze, true);

        let outcome = match self.backend.analyze(&meals.trimmed()).await {
            Ok(result) => {
                self.render_result(&result);
                self.load_dashboard().await;
                Some(result)
            }
            Err(e) => {
                tracing::warn!("Analysis failed: {}", e);
                self.page.alert(&format!("Analysis failed: {}", e));
                None
            }
        };

        self.page.set_busy(Control::Analyze, false);
        outcome
    }

    /// Show a result and report any meal tokens the backend did not know
    pub fn render_result(&self, result: &AnalysisResult) {
        let view = ResultView::from_result(result);
        let unmatched = view.unmatched_alert();

        self.page.show_result(view);

        if let Some(message) = unmatched {
            self.page.alert(&message);
        }
    }

    /// Save the settings form; reloads the page on success
    pub async fn submit_settings(&self, payload: SettingsPayload) -> bool {
        self.page.set_busy(Control::SaveSettings, true);

        let saved = match self.backend.save_settings(&payload).await {
            Ok(()) => {
                tracing::info!("Settings saved");
                self.page.alert(SETTINGS_SAVED_MESSAGE);
                self.page.reload();
                true
            }
            Err(e) => {
                tracing::warn!("Saving settings failed: {}", e);
                self.page.alert(SETTINGS_FAILED_MESSAGE);
                false
            }
        };

        self.page.set_busy(Control::SaveSettings, false);
        saved
    }

    /// First-run setup: save the name with the default sugar limit.
    ///
    /// On failure the modal stays open and nothing is stored, so the user can
    /// simply try again.
    pub async fn submit_onboarding(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        self.page.set_busy(Control::Onboarding, true);

        let payload = SettingsPayload::onboarding(name, self.config.default_sugar_limit);
        let done = match self.backend.save_settings(&payload).await {
            Ok(()) => {
                self.page.set_onboarding_visible(false);
                self.page.remember_user_name(name);
                self.page.alert(&format!("Welcome, {}!", name));
                self.page.reload();
                true
            }
            Err(e) => {
                tracing::warn!("Onboarding failed: {}", e);
                self.page.alert(SETUP_FAILED_MESSAGE);
                false
            }
        };

        self.page.set_busy(Control::Onboarding, false);
        done
    }

    /// Show the onboarding modal when this browser has no stored name and
    /// the server reports setup as incomplete.
    ///
    /// A stored name short-circuits the server check entirely.
    pub async fn check_onboarding(&self) {
        if self.page.stored_user_name().is_some() {
            return;
        }

        match self.backend.setup_status().await {
            Ok(status) if !status.setup_complete => self.page.set_onboarding_visible(true),
            Ok(_) => {}
            Err(e) => tracing::warn!("Onboarding status check failed: {}", e),
        }
    }

    /// Refresh the weekly charts if this page has them
    pub async fn load_dashboard(&self) {
        if !self.charts.borrow().dashboard_present() {
            tracing::debug!("No dashboard on this page");
            return;
        }
        self.refresh_dashboard().await;
    }

    /// Fetch weekly stats and rebuild every chart
    pub async fn refresh_dashboard(&self) {
        match self.backend.weekly_stats().await {
            Ok(stats) => {
                self.page.dashboard_refreshed(&stats);
                self.charts.borrow_mut().refresh(&stats);
                tracing::debug!("Dashboard refreshed with {} days", stats.dates.len());
            }
            Err(e) => tracing::error!("Failed to update dashboard: {}", e),
        }
    }

    /// Tear down the charts, e.g. when their canvases leave the page
    pub fn clear_charts(&self) {
        self.charts.borrow_mut().clear();
    }
}
