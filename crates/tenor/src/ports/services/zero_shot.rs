//! Zero-Shot Classifier Port
//!
//! Abstract interface for classifying text against caller-supplied labels.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Candidate labels ranked by score, best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotRanking {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

impl ZeroShotRanking {
    /// Highest-ranked label, if any
    pub fn top_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

/// Service interface for zero-shot text classification
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    /// Rank `candidate_labels` for `text`
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> Result<ZeroShotRanking, DomainError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;

    /// Make sure the model is reachable and produces output
    async fn warm_up(&self) -> Result<ZeroShotRanking, DomainError> {
        let labels = vec!["statement".to_string(), "question".to_string()];
        self.classify("This is a test sentence.", &labels).await
    }
}
