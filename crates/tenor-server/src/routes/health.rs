//! Health Routes

use axum::{extract::State, routing::get, Json, Router};

use crate::models::HealthResponse;
use crate::AppState;

/// Service status and configured models
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is running", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "tenor".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sentiment_model: state.annotator.sentiment_model().to_string(),
        intent_model: state.annotator.intent_model().to_string(),
        polarity_analyzer: state.annotator.polarity_analyzer().to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
