//! Chart.js configuration builders
//!
//! Typed mirrors of the Chart.js config objects the dashboard uses. They
//! serialize to the camelCase JSON Chart.js expects.

use serde::Serialize;

use crate::api::{RiskLevel, WeeklyStats};

const PINK: &str = "#ec4899";
const PINK_FILL: &str = "#fbcfe8";
const GREEN: &str = "#10b981";
const BLUE: &str = "#3b82f6";
const BLUE_FILL: &str = "#dbeafe";
const BLUE_LIGHT: &str = "#93c5fd";
const AMBER: &str = "#f59e0b";
const RED: &str = "#ef4444";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

/// Top-level `new Chart(ctx, config)` argument
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Either one colour for the whole series or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(&'static str),
    PerPoint(Vec<&'static str>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

impl Dataset {
    fn series(label: &str, data: &[f64]) -> Self {
        Self {
            label: Some(label.to_string()),
            data: data.to_vec(),
            ..Default::default()
        }
    }

    /// Filled, smoothed line
    fn area(label: &str, data: &[f64], line: &'static str, fill: &'static str) -> Self {
        Self {
            border_color: Some(line),
            background_color: Some(Paint::Solid(fill)),
            tension: Some(0.3),
            fill: Some(true),
            ..Self::series(label, data)
        }
    }

    fn bars(label: &str, data: &[f64], colour: &'static str) -> Self {
        Self {
            background_color: Some(Paint::Solid(colour)),
            ..Self::series(label, data)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

impl ChartOptions {
    /// Options shared by the line and bar charts
    pub fn common() -> Self {
        Self {
            responsive: true,
            plugins: Plugins {
                legend: Legend { position: "bottom" },
            },
            scales: Some(Scales {
                y: Axis { begin_at_zero: true },
            }),
        }
    }

    /// Doughnut charts have no axes
    pub fn without_scales() -> Self {
        Self {
            scales: None,
            ..Self::common()
        }
    }
}

/// Daily sugar with a flat recommended-limit reference line
pub fn sugar_chart(stats: &WeeklyStats, recommended_limit: f64) -> ChartConfig {
    let limit = Dataset {
        border_color: Some(GREEN),
        border_dash: Some([5, 5]),
        point_radius: Some(0),
        ..Dataset::series(
            &format!("Recommended Limit ({}g)", recommended_limit),
            &vec![recommended_limit; stats.dates.len()],
        )
    };

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: stats.dates.clone(),
            datasets: vec![
                Dataset::area("Sugar (g)", &stats.sugar, PINK, PINK_FILL),
                limit,
            ],
        },
        options: ChartOptions::common(),
    }
}

pub fn carbs_chart(stats: &WeeklyStats) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: stats.dates.clone(),
            datasets: vec![Dataset::area("Carbs (g)", &stats.carbs, BLUE, BLUE_FILL)],
        },
        options: ChartOptions::common(),
    }
}

/// Fiber against carbs per day
pub fn fiber_carb_chart(stats: &WeeklyStats) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: stats.dates.clone(),
            datasets: vec![
                Dataset::bars("Fiber (g)", &stats.fiber, GREEN),
                Dataset::bars("Carbs (g)", &stats.carbs, BLUE_LIGHT),
            ],
        },
        options: ChartOptions::common(),
    }
}

/// Distribution of days per risk level
pub fn risk_chart(stats: &WeeklyStats) -> ChartConfig {
    let counts = &stats.risk_counts;
    let levels = [RiskLevel::Safe, RiskLevel::Moderate, RiskLevel::High];

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: levels.iter().map(|l| l.as_str().to_string()).collect(),
            datasets: vec![Dataset {
                data: vec![counts.safe as f64, counts.moderate as f64, counts.high as f64],
                background_color: Some(Paint::PerPoint(vec![GREEN, AMBER, RED])),
                ..Default::default()
            }],
        },
        options: ChartOptions::without_scales(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RiskCounts;
    use serde_json::json;

    fn stats() -> WeeklyStats {
        WeeklyStats {
            dates: vec!["01/03".into(), "02/03".into(), "03/03".into()],
            sugar: vec![30.0, 52.5, 18.0],
            carbs: vec![180.0, 240.0, 150.0],
            fiber: vec![20.0, 12.0, 25.0],
            risk_counts: RiskCounts {
                safe: 2,
                moderate: 1,
                high: 0,
            },
            context: None,
        }
    }

    #[test]
    fn test_sugar_chart_reference_line() {
        let config = sugar_chart(&stats(), 25.0);
        let limit = &config.data.datasets[1];

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(limit.label.as_deref(), Some("Recommended Limit (25g)"));
        assert_eq!(limit.data, vec![25.0, 25.0, 25.0]);
        assert_eq!(limit.point_radius, Some(0));
    }

    #[test]
    fn test_sugar_chart_json_shape() {
        let value = serde_json::to_value(sugar_chart(&stats(), 25.0)).unwrap();

        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["datasets"][0]["borderColor"], "#ec4899");
        assert_eq!(value["data"]["datasets"][0]["fill"], true);
        assert_eq!(value["data"]["datasets"][1]["borderDash"], json!([5, 5]));
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
        assert!(value["data"]["datasets"][0].get("pointRadius").is_none());
    }

    #[test]
    fn test_fiber_carb_chart_is_bar_with_two_series() {
        let config = fiber_carb_chart(&stats());
        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.data.datasets.len(), 2);
        assert_eq!(config.data.datasets[0].data, vec![20.0, 12.0, 25.0]);
        assert_eq!(config.data.datasets[1].data, vec![180.0, 240.0, 150.0]);
    }

    #[test]
    fn test_risk_chart_has_no_scales() {
        let value = serde_json::to_value(risk_chart(&stats())).unwrap();

        assert_eq!(value["type"], "doughnut");
        assert_eq!(value["data"]["labels"], json!(["Safe", "Moderate", "High"]));
        assert_eq!(value["data"]["datasets"][0]["data"], json!([2.0, 1.0, 0.0]));
        assert_eq!(
            value["data"]["datasets"][0]["backgroundColor"],
            json!(["#10b981", "#f59e0b", "#ef4444"])
        );
        assert!(value["options"].get("scales").is_none());
        assert!(value["data"]["datasets"][0].get("label").is_none());
    }

    #[test]
    fn test_empty_week() {
        let config = carbs_chart(&WeeklyStats::default());
        assert!(config.data.labels.is_empty());
        assert!(config.data.datasets[0].data.is_empty());
    }
}
