//! Weekly Charts
//!
//! [`ChartRenderer`] owns the four dashboard chart instances. Every refresh
//! is a full teardown and rebuild: old instances are destroyed before new
//! ones are created, so at most four are ever alive.

pub mod chartjs;
pub mod config;

use thiserror::Error;

use crate::api::WeeklyStats;
use config::ChartConfig;

pub use chartjs::ChartJsSurface;

/// Chart errors
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to serialize chart config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Chart construction failed: {0}")]
    Construct(String),
}

/// The fixed chart positions on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    Sugar,
    Carbs,
    FiberCarb,
    Risk,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::Sugar,
        ChartSlot::Carbs,
        ChartSlot::FiberCarb,
        ChartSlot::Risk,
    ];

    /// Id of the `<canvas>` the chart is drawn into
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartSlot::Sugar => "chart-sugar",
            ChartSlot::Carbs => "chart-carbs",
            ChartSlot::FiberCarb => "chart-fiber-carb",
            ChartSlot::Risk => "chart-risk",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartSlot::Sugar => "Sugar Intake",
            ChartSlot::Carbs => "Carbohydrates",
            ChartSlot::FiberCarb => "Fiber vs Carbs",
            ChartSlot::Risk => "Risk Summary",
        }
    }

    fn index(&self) -> usize {
        match self {
            ChartSlot::Sugar => 0,
            ChartSlot::Carbs => 1,
            ChartSlot::FiberCarb => 2,
            ChartSlot::Risk => 3,
        }
    }

    pub fn config(&self, stats: &WeeklyStats, recommended_limit: f64) -> ChartConfig {
        match self {
            ChartSlot::Sugar => config::sugar_chart(stats, recommended_limit),
            ChartSlot::Carbs => config::carbs_chart(stats),
            ChartSlot::FiberCarb => config::fiber_carb_chart(stats),
            ChartSlot::Risk => config::risk_chart(stats),
        }
    }
}

/// Where chart instances come from.
///
/// The browser implementation drives Chart.js; tests use an in-memory one.
pub trait ChartSurface {
    type Handle;

    /// Whether the canvas for `canvas_id` is in the document
    fn has_canvas(&self, canvas_id: &str) -> bool;

    /// Create a chart; `Ok(None)` when the canvas is missing
    fn create(
        &mut self,
        canvas_id: &str,
        config: &ChartConfig,
    ) -> Result<Option<Self::Handle>, ChartError>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owns the live chart instances, one per [`ChartSlot`]
pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    instances: [Option<S::Handle>; 4],
    recommended_limit: f64,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S, recommended_limit: f64) -> Self {
        Self {
            surface,
            instances: [None, None, None, None],
            recommended_limit,
        }
    }

    /// The sugar canvas doubles as the "dashboard is on this page" signal
    pub fn dashboard_present(&self) -> bool {
        self.surface.has_canvas(ChartSlot::Sugar.canvas_id())
    }

    /// Destroy every instance, then rebuild from `stats`
    pub fn refresh(&mut self, stats: &WeeklyStats) {
        for slot in ChartSlot::ALL {
            self.destroy_slot(slot);

            let config = slot.config(stats, self.recommended_limit);
            match self.surface.create(slot.canvas_id(), &config) {
                Ok(Some(handle)) => self.instances[slot.index()] = Some(handle),
                Ok(None) => {
                    tracing::debug!("No canvas for {}, skipping chart", slot.canvas_id());
                }
                Err(e) => {
                    tracing::error!("Failed to render {}: {}", slot.canvas_id(), e);
                }
            }
        }
    }

    /// Destroy every live instance
    pub fn clear(&mut self) {
        for slot in ChartSlot::ALL {
            self.destroy_slot(slot);
        }
    }

    #[cfg(test)]
    pub(crate) fn live_count(&self) -> usize {
        self.instances.iter().filter(|i| i.is_some()).count()
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    fn destroy_slot(&mut self, slot: ChartSlot) {
        if let Some(handle) = self.instances[slot.index()].take() {
            self.surface.destroy(handle);
        }
    }
}
