// HTTP request handlers
use crate::domain::window::{MAX_LOOKBACK_HOURS, MIN_LOOKBACK_HOURS};
use crate::error::TelemetryError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub const DEFAULT_LOOKBACK_HOURS: i64 = 24;

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub hours: Option<i64>,
    pub log: Option<bool>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The chart page. All numbers it displays come from /api/dashboard; the
/// page itself holds only the two controls and the plot.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Build the dashboard for the requested lookback window
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hours = clamp_hours(query.hours);
    let log_scale = query.log.unwrap_or(true);

    match state.dashboard_service.get_dashboard(hours, log_scale).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => error_response(e),
    }
}

fn clamp_hours(hours: Option<i64>) -> i64 {
    hours
        .unwrap_or(DEFAULT_LOOKBACK_HOURS)
        .clamp(MIN_LOOKBACK_HOURS, MAX_LOOKBACK_HOURS)
}

/// Every failure produces a visible error body; nothing escapes uncaught.
fn error_response(error: TelemetryError) -> Response {
    let status = match &error {
        TelemetryError::FetchFailed { .. } => StatusCode::BAD_GATEWAY,
        TelemetryError::EmptyUpstream => StatusCode::SERVICE_UNAVAILABLE,
        TelemetryError::EmptyWindow => StatusCode::INTERNAL_SERVER_ERROR,
    };

    tracing::error!("dashboard request failed: {}", error);
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
