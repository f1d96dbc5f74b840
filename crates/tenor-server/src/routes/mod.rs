//! Tenor API Routes
//!
//! - /analyze - Message annotation
//! - /health - Liveness and model information
//! - /docs, /openapi.json - API documentation

pub mod analyze;
pub mod health;
pub mod swagger;
