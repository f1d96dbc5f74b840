//! Analyze Routes - Message annotation

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use tenor::InboundMessage;

use crate::models::{AnalyzeRequest, AnalyzeResponse, ErrorDetail};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorDetail>);

/// Annotate a chat message with sentiment, intent and context relevance
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Message annotated", body = AnalyzeResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorDetail),
        (status = 422, description = "Body does not match the schema", body = ErrorDetail),
        (status = 500, description = "Analysis failed", body = ErrorDetail)
    ),
    tag = "Analyze"
)]
pub async fn analyze_message(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected analyze request: {}", rejection.body_text());
        (rejection.status(), Json(ErrorDetail::new(rejection.body_text())))
    })?;

    let message = InboundMessage::from(payload);

    let annotation = state.annotator.annotate(&message).await.map_err(|e| {
        tracing::error!("Error processing message: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDetail::new(e.to_string())),
        )
    })?;

    tracing::info!("Successfully processed message");

    Ok(Json(annotation.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_message))
}
