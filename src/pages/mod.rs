//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod settings;
pub mod weekly;

pub use dashboard::Dashboard;
pub use settings::Settings;
pub use weekly::WeeklyAnalysis;
