//! Data Transfer Objects
//!
//! Request and response types for the GlucoVision backend.
//! These types are serialized/deserialized to/from JSON.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================
// ANALYSIS DTOs
// ============================================

/// Free-text meal entries for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealInput {
    pub breakfast: String,
    pub lunch: String,
    pub snacks: String,
    pub dinner: String,
}

impl MealInput {
    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            breakfast: self.breakfast.trim().to_string(),
            lunch: self.lunch.trim().to_string(),
            snacks: self.snacks.trim().to_string(),
            dinner: self.dinner.trim().to_string(),
        }
    }

    /// True when no meal has any text
    pub fn is_blank(&self) -> bool {
        [&self.breakfast, &self.lunch, &self.snacks, &self.dinner]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

/// Nutrient totals for an analysed day
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Totals {
    pub total_calories: Option<f64>,
    pub total_carbs: Option<f64>,
    pub total_sugar: Option<f64>,
    pub total_protein: Option<f64>,
    pub total_fat: Option<f64>,
    pub total_fiber: Option<f64>,
}

/// Response of `POST /analyze`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub totals: Totals,
    /// Raw risk label as sent by the server
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub risk_reason: Option<String>,
    /// Unreadable suggestions are dropped rather than failing the response
    #[serde(default, deserialize_with = "lenient_suggestions")]
    pub suggestions: Option<SuggestionsPayload>,
    /// Meal tokens the backend could not map to a food
    #[serde(default)]
    pub unmatched: Vec<String>,
}

impl AnalysisResult {
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_label(&self.risk_level)
    }

    /// Suggestions in canonical form, whichever shape the server sent
    pub fn suggestions(&self) -> Suggestions {
        self.suggestions.clone().map(Suggestions::from).unwrap_or_default()
    }
}

/// Glycaemic risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Safe,
    Moderate,
    High,
}

impl RiskLevel {
    /// Map a server label; anything unrecognized is treated as high risk
    pub fn from_label(label: &str) -> Self {
        match label {
            "Safe" => RiskLevel::Safe,
            "Moderate" => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

/// Suggestions as they arrive on the wire.
///
/// Older backends send a bare list; newer ones split advice from the
/// reasoning behind the risk level. The lists are written by a language
/// model, so entries that are not strings are kept as compact JSON and a
/// lone string counts as a one-item list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SuggestionsPayload {
    Legacy(#[serde(deserialize_with = "lenient_list")] Vec<String>),
    Structured {
        #[serde(default, deserialize_with = "lenient_list")]
        suggestions: Vec<String>,
        #[serde(default, deserialize_with = "lenient_list")]
        analysis: Vec<String>,
    },
}

fn lenient_suggestions<'de, D>(deserializer: D) -> Result<Option<SuggestionsPayload>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match SuggestionsPayload::deserialize(value) {
        Ok(payload) => Ok(Some(payload)),
        Err(e) => {
            tracing::warn!("Ignoring unreadable suggestions: {}", e);
            Ok(None)
        }
    }
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.into_iter().map(display_line).collect()),
        Value::Object(_) => Err(D::Error::custom("expected a list of suggestions")),
        scalar => Ok(vec![display_line(scalar)]),
    }
}

fn display_line(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Canonical suggestion lists used for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
    pub analysis: Vec<String>,
}

impl From<SuggestionsPayload> for Suggestions {
    fn from(payload: SuggestionsPayload) -> Self {
        match payload {
            SuggestionsPayload::Legacy(suggestions) => Self {
                suggestions,
                analysis: Vec::new(),
            },
            SuggestionsPayload::Structured {
                suggestions,
                analysis,
            } => Self {
                suggestions,
                analysis,
            },
        }
    }
}

// ============================================
// SETTINGS DTOs
// ============================================

/// Body of `POST /api/settings`.
///
/// Form fields are forwarded verbatim; only the report checkboxes are
/// converted to booleans.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SettingsPayload(Map<String, Value>);

impl SettingsPayload {
    /// Checkbox fields that are always sent as booleans
    pub const CHECKBOXES: [&'static str; 2] = ["weekly", "monthly"];

    /// Build from form entries as produced by `FormData`.
    ///
    /// An unchecked checkbox is absent from the entries, so it becomes `false`.
    pub fn from_form_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Map::new();
        for (key, value) in entries {
            fields.insert(key.into(), Value::String(value.into()));
        }

        for checkbox in Self::CHECKBOXES {
            let checked = fields.get(checkbox).and_then(Value::as_str) == Some("on");
            fields.insert(checkbox.to_string(), Value::Bool(checked));
        }

        Self(fields)
    }

    /// First-run settings: a name and the default sugar limit
    pub fn onboarding(name: &str, sugar_limit: f64) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields.insert("sugar_limit".to_string(), Value::from(sugar_limit));
        Self(fields)
    }
}

/// Response of `GET /api/settings/status`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetupStatus {
    #[serde(default)]
    pub setup_complete: bool,
}

// ============================================
// STATS DTOs
// ============================================

/// Response of `GET /api/stats/weekly`: parallel per-day series
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeeklyStats {
    pub dates: Vec<String>,
    pub sugar: Vec<f64>,
    pub carbs: Vec<f64>,
    pub fiber: Vec<f64>,
    pub risk_counts: RiskCounts,
    pub context: Option<String>,
}

/// Number of logged days per risk level
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskCounts {
    #[serde(rename = "Safe")]
    pub safe: u32,
    #[serde(rename = "Moderate")]
    pub moderate: u32,
    #[serde(rename = "High")]
    pub high: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_suggestions_normalize() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "risk_level": "Safe",
            "suggestions": ["a", "b"],
        }))
        .unwrap();

        let suggestions = result.suggestions();
        assert_eq!(suggestions.suggestions, vec!["a", "b"]);
        assert!(suggestions.analysis.is_empty());
    }

    #[test]
    fn test_structured_suggestions_normalize() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "suggestions": { "suggestions": ["a"], "analysis": ["x"] },
        }))
        .unwrap();

        let suggestions = result.suggestions();
        assert_eq!(suggestions.suggestions, vec!["a"]);
        assert_eq!(suggestions.analysis, vec!["x"]);
    }

    #[test]
    fn test_partial_structured_and_missing_suggestions() {
        let partial: AnalysisResult =
            serde_json::from_value(json!({ "suggestions": { "analysis": ["x"] } })).unwrap();
        assert!(partial.suggestions().suggestions.is_empty());
        assert_eq!(partial.suggestions().analysis, vec!["x"]);

        let missing: AnalysisResult =
            serde_json::from_value(json!({ "suggestions": null })).unwrap();
        assert_eq!(missing.suggestions(), Suggestions::default());
    }

    #[test]
    fn test_full_analysis_response() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "totals": {
                "total_calories": 1830.5,
                "total_carbs": 210,
                "total_sugar": 44.25,
                "total_protein": 80,
                "total_fat": 60,
                "total_fiber": 18
            },
            "risk_level": "Moderate",
            "risk_reason": "Sugar between 40g and 65g.",
            "suggestions": [],
            "unmatched": ["milk", "soda"]
        }))
        .unwrap();

        assert_eq!(result.risk(), RiskLevel::Moderate);
        assert_eq!(result.totals.total_carbs, Some(210.0));
        assert_eq!(result.unmatched, vec!["milk", "soda"]);
    }

    #[test]
    fn test_only_current_unmatched_field_is_read() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "total_calories": 400,
            "unmatched_items": ["kale chips"]
        }))
        .unwrap();
        assert!(result.unmatched.is_empty());
        assert_eq!(result.totals, Totals::default());
    }

    #[test]
    fn test_non_string_entries_are_kept() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "risk_level": "High",
            "suggestions": {
                "suggestions": ["Walk", 2],
                "analysis": [{ "reason": "High GI" }]
            }
        }))
        .unwrap();

        let suggestions = result.suggestions();
        assert_eq!(suggestions.suggestions, vec!["Walk", "2"]);
        assert_eq!(suggestions.analysis, vec![r#"{"reason":"High GI"}"#]);
    }

    #[test]
    fn test_bare_string_is_one_suggestion() {
        let result: AnalysisResult =
            serde_json::from_value(json!({ "suggestions": "Eat more fiber" })).unwrap();
        assert_eq!(result.suggestions().suggestions, vec!["Eat more fiber"]);

        let nested: AnalysisResult = serde_json::from_value(json!({
            "suggestions": { "suggestions": "Eat more fiber", "analysis": null }
        }))
        .unwrap();
        assert_eq!(nested.suggestions().suggestions, vec!["Eat more fiber"]);
        assert!(nested.suggestions().analysis.is_empty());
    }

    #[test]
    fn test_unreadable_suggestions_keep_the_rest() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "totals": { "total_sugar": 70 },
            "risk_level": "High",
            "suggestions": { "suggestions": { "walk": true } }
        }))
        .unwrap();

        assert_eq!(result.suggestions(), Suggestions::default());
        assert_eq!(result.totals.total_sugar, Some(70.0));
        assert_eq!(result.risk(), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_fallback_is_high() {
        assert_eq!(RiskLevel::from_label("Safe"), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_label("Moderate"), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_label("High"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label("safe"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label(""), RiskLevel::High);
    }

    #[test]
    fn test_settings_checkbox_conversion() {
        let payload = SettingsPayload::from_form_entries(vec![
            ("name", "Asha"),
            ("sugar_limit", "30"),
            ("monthly", "on"),
        ]);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Asha",
                "sugar_limit": "30",
                "weekly": false,
                "monthly": true
            })
        );
    }

    #[test]
    fn test_onboarding_payload() {
        let payload = SettingsPayload::onboarding("Asha", 25.0);
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body, json!({ "name": "Asha", "sugar_limit": 25.0 }));
        assert_eq!(payload.0.get("name").and_then(Value::as_str), Some("Asha"));
    }

    #[test]
    fn test_meal_input_blank_and_trim() {
        let meals = MealInput {
            breakfast: "  oats ".into(),
            lunch: " ".into(),
            ..Default::default()
        };
        assert!(!meals.is_blank());
        assert_eq!(meals.trimmed().breakfast, "oats");
        assert!(MealInput::default().is_blank());
    }

    #[test]
    fn test_weekly_stats_missing_risk_keys() {
        let stats: WeeklyStats = serde_json::from_value(json!({
            "dates": ["01/03", "02/03"],
            "sugar": [30, 52.5],
            "carbs": [180, 240],
            "fiber": [20, 12],
            "risk_counts": { "Safe": 1, "Moderate": 1 }
        }))
        .unwrap();

        assert_eq!(stats.risk_counts.high, 0);
        assert_eq!(stats.sugar, vec![30.0, 52.5]);
        assert!(stats.context.is_none());
    }

    #[test]
    fn test_setup_status_defaults_to_incomplete() {
        let status: SetupStatus = serde_json::from_value(json!({})).unwrap();
        assert!(!status.setup_complete);
    }
}
