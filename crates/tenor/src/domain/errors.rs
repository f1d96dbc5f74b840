//! Domain Errors
//!
//! Error types for annotation operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

