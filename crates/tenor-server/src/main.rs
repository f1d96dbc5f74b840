use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{HfSentimentClassifier, HfZeroShotClassifier, InferenceClient};
use application::AnnotationService;
use config::ServerConfig;
use tenor::{DomainError, LexiconAnalyzer};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub annotator: Arc<AnnotationService>,
}

/// Build the model-backed annotation service
fn build_annotator(config: &ServerConfig) -> Result<AnnotationService, DomainError> {
    let client = InferenceClient::new(
        &config.inference_base_url,
        config.api_token.clone(),
        config.request_timeout,
    )?;

    Ok(AnnotationService::new(
        Arc::new(HfSentimentClassifier::new(client.clone(), &config.sentiment_model)),
        Arc::new(LexiconAnalyzer::new()),
        Arc::new(HfZeroShotClassifier::new(client, &config.intent_model)),
    ))
}

/// Full HTTP surface: API routes, docs, tracing and permissive CORS
fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::analyze::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn startup_error(e: DomainError) -> shuttle_runtime::Error {
    tracing::error!("Error initializing ML models: {}", e);
    shuttle_runtime::Error::Custom(anyhow::Error::new(e))
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    init_tracing();
    tracing::info!("🎼 Tenor API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key)).map_err(startup_error)?;

    if config.api_token.is_none() {
        tracing::warn!("⚠️  No HF_API_TOKEN set - inference requests are anonymous");
    }

    let annotator = build_annotator(&config).map_err(startup_error)?;

    if config.verify_models_on_startup {
        annotator.verify().await.map_err(startup_error)?;
        tracing::info!("✅ ML models initialized successfully");
    } else {
        tracing::warn!("⚠️  Model verification skipped (VERIFY_MODELS_ON_STARTUP=false)");
    }

    let router = app(AppState {
        annotator: Arc::new(annotator),
    });

    tracing::info!("📚 Swagger UI: /docs");
    tracing::info!("✅ Tenor API ready");

    Ok(router.into())
}
