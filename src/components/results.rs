//! Analysis Results
//!
//! [`ResultView`] is the display model for one analysis response: formatted
//! totals, the risk banner, and the normalized suggestion lists. The
//! [`Results`] component renders it into the results section.

use leptos::*;

use crate::api::{AnalysisResult, RiskLevel};
use crate::state::global::GlobalState;

/// Shown when the server has no suggestions for an entry
pub const NO_SUGGESTIONS: &str = "No specific suggestions for this entry.";

/// One nutrient display slot
#[derive(Debug, Clone, PartialEq)]
pub struct TotalSlot {
    /// Element id of the value
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Everything the results section shows for one response
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub totals: Vec<TotalSlot>,
    pub risk: RiskLevel,
    pub description: String,
    pub suggestions: Vec<String>,
    pub analysis: Vec<String>,
    pub unmatched: Vec<String>,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let t = &result.totals;
        let totals = [
            ("cal-val", "Calories (kcal)", t.total_calories),
            ("carb-val", "Carbs (g)", t.total_carbs),
            ("sugar-val", "Sugar (g)", t.total_sugar),
            ("prot-val", "Protein (g)", t.total_protein),
            ("fat-val", "Fat (g)", t.total_fat),
            ("fib-val", "Fiber (g)", t.total_fiber),
        ]
        .into_iter()
        .map(|(id, label, value)| TotalSlot {
            id,
            label,
            value: format_total(value),
        })
        .collect();

        let description = result
            .risk_reason
            .as_deref()
            .filter(|reason| !reason.is_empty())
            .unwrap_or(result.risk_level.as_str())
            .to_string();

        let suggestions = result.suggestions();

        Self {
            totals,
            risk: result.risk(),
            description,
            suggestions: suggestions.suggestions,
            analysis: suggestions.analysis,
            unmatched: result.unmatched.clone(),
        }
    }

    /// Full class attribute of the risk banner: the base class plus exactly
    /// one risk modifier
    pub fn risk_class(&self) -> String {
        let modifier = match self.risk {
            RiskLevel::Safe => "risk-safe",
            RiskLevel::Moderate => "risk-moderate",
            RiskLevel::High => "risk-high",
        };
        format!("risk-banner {}", modifier)
    }

    pub fn risk_title(&self) -> &'static str {
        match self.risk {
            RiskLevel::Safe => "✅ Glycaemic Risk: Low/Safe",
            RiskLevel::Moderate => "⚠️ Glycaemic Risk: Moderate",
            RiskLevel::High => "🚨 Glycaemic Risk: High",
        }
    }

    /// List items for the suggestion list, with a placeholder when empty
    pub fn suggestion_items(&self) -> Vec<String> {
        if self.suggestions.is_empty() {
            vec![NO_SUGGESTIONS.to_string()]
        } else {
            self.suggestions.clone()
        }
    }

    pub fn analysis_visible(&self) -> bool {
        !self.analysis.is_empty()
    }

    /// Alert text listing unmatched meal tokens, if any
    pub fn unmatched_alert(&self) -> Option<String> {
        if self.unmatched.is_empty() {
            None
        } else {
            Some(format!("Could not match: {}", self.unmatched.join(", ")))
        }
    }
}

/// Numbers are shown with two decimals; missing values as a dash
pub fn format_total(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Results section; hidden until the first analysis arrives
#[component]
pub fn Results() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let result = state.result;

    view! {
        <section
            id="results-section"
            class=move || {
                if result.with(Option::is_some) { "results-section" } else { "results-section hidden" }
            }
        >
            {move || result.get().map(|current| view! { <ResultBody current=current /> })}
        </section>
    }
}

#[component]
fn ResultBody(current: ResultView) -> impl IntoView {
    let analysis_display = if current.analysis_visible() { "block" } else { "none" };

    view! {
        <div class="macro-grid">
            {current.totals.iter().cloned().map(|slot| view! {
                <div class="macro-card">
                    <span class="macro-label">{slot.label}</span>
                    <span id=slot.id class="macro-value">{slot.value}</span>
                </div>
            }).collect_view()}
        </div>

        <div id="risk-card" class=current.risk_class()>
            <h3 id="risk-title">{current.risk_title()}</h3>
            <p id="risk-desc">{current.description.clone()}</p>
        </div>

        <div class="card suggestions-card">
            <h4>"💡 Suggestions"</h4>
            <ul id="sug-list" class="suggestions-list">
                {current.suggestion_items().into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>

            <div id="ai-analysis-container" class="analysis-container" style:display=analysis_display>
                <h4 class="analysis-title">"📊 AI Risk Analysis"</h4>
                <ul id="ai-analysis-list" class="suggestions-list">
                    {current.analysis.iter().cloned().map(|item| view! {
                        <li class="analysis-item">{item}</li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
