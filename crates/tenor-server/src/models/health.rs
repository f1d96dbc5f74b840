//! Health - Liveness and model information

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub sentiment_model: String,
    pub intent_model: String,
    pub polarity_analyzer: String,
}
