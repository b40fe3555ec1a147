//! Backend API
//!
//! Wire types, errors and the HTTP client for the GlucoVision backend.

pub mod client;
pub mod dto;
pub mod error;

pub use client::{Backend, HttpBackend};
pub use dto::{
    AnalysisResult, MealInput, RiskCounts, RiskLevel, SettingsPayload, SetupStatus, Suggestions,
    SuggestionsPayload, Totals, WeeklyStats,
};
pub use error::{ApiError, ApiResult};
