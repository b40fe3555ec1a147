//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod form_data;
pub mod meal_form;
pub mod nav;
pub mod onboarding;
pub mod results;
pub mod weekly_charts;

pub use meal_form::MealForm;
pub use nav::Nav;
pub use onboarding::OnboardingModal;
pub use results::{ResultView, Results};
pub use weekly_charts::WeeklyCharts;
