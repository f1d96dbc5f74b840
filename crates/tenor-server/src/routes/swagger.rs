//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{AnalyzeRequest, AnalyzeResponse, ChatTurn, ErrorDetail, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::analyze::analyze_message,
        super::health::health_check,
    ),
    info(
        title = "Tenor API",
        version = "0.1.0",
        description = "Message annotation for chat applications: sentiment, intent and context relevance.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Analyze", description = "Analyze - Annotate a chat message"),
    ),
    components(
        schemas(
            AnalyzeRequest,
            ChatTurn,
            AnalyzeResponse,
            ErrorDetail,
            HealthResponse,
        )
    ),
)]
pub struct ApiDoc;
