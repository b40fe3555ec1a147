//! HTTP API Client
//!
//! The [`Backend`] trait is the seam between the UI actions and the network;
//! [`HttpBackend`] implements it over `gloo-net` fetch.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto::{AnalysisResult, MealInput, SettingsPayload, SetupStatus, WeeklyStats};
use super::error::{ApiError, ApiResult};
use crate::config::UiConfig;

pub const ANALYZE_PATH: &str = "/analyze";
pub const SETTINGS_PATH: &str = "/api/settings";
pub const SETTINGS_STATUS_PATH: &str = "/api/settings/status";
pub const WEEKLY_STATS_PATH: &str = "/api/stats/weekly";

/// Operations the dashboard needs from the backend
#[async_trait(?Send)]
pub trait Backend {
    /// Analyse a day of meals
    async fn analyze(&self, meals: &MealInput) -> ApiResult<AnalysisResult>;

    /// Save settings; the response body is not used
    async fn save_settings(&self, settings: &SettingsPayload) -> ApiResult<()>;

    /// Whether first-run setup has been completed on the server
    async fn setup_status(&self) -> ApiResult<SetupStatus>;

    /// Last seven logged days
    async fn weekly_stats(&self) -> ApiResult<WeeklyStats>;
}

/// Fetch-based backend client
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: UiConfig,
}

impl HttpBackend {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn analyze(&self, meals: &MealInput) -> ApiResult<AnalysisResult> {
        let response = Request::post(&self.url(ANALYZE_PATH))
            .json(meals)?
            .send()
            .await?;

        read_json(response).await
    }

    async fn save_settings(&self, settings: &SettingsPayload) -> ApiResult<()> {
        let response = Request::post(&self.url(SETTINGS_PATH))
            .json(settings)?
            .send()
            .await?;

        if response.ok() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(&body).unwrap_or(ApiError::Status(response.status())))
    }

    async fn setup_status(&self) -> ApiResult<SetupStatus> {
        let response = Request::get(&self.url(SETTINGS_STATUS_PATH)).send().await?;
        read_json(response).await
    }

    async fn weekly_stats(&self) -> ApiResult<WeeklyStats> {
        let response = Request::get(&self.url(WEEKLY_STATS_PATH)).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await?;
    decode_body(response.ok(), status, &body)
}

/// Decode a response body.
///
/// An `error` field wins regardless of status; a non-2xx status without one
/// is reported by code.
pub fn decode_body<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> ApiResult<T> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(message) = error_message(&value) {
        return Err(ApiError::Server(message));
    }
    if !ok {
        return Err(ApiError::Status(status));
    }

    Ok(serde_json::from_value(value)?)
}

fn error_from_body(body: &str) -> Option<ApiError> {
    let value: Value = serde_json::from_str(body).ok()?;
    error_message(&value).map(ApiError::Server)
}

fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
