//! Sentiment Classifier Port
//!
//! Abstract interface for a pretrained sentiment model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Top prediction of a sentiment model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    /// Model-specific label (e.g. "POSITIVE", "LABEL_1")
    pub label: String,
    /// Confidence, 0.0 - 1.0
    pub score: f64,
}

/// Service interface for pretrained sentiment classification
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify text, returning the highest-scoring label
    async fn classify(&self, text: &str) -> Result<ClassifierOutput, DomainError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;

    /// Make sure the model is reachable and produces output
    async fn warm_up(&self) -> Result<ClassifierOutput, DomainError> {
        self.classify("This is a test sentence.").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LengthClassifier;

    #[async_trait]
    impl SentimentClassifier for LengthClassifier {
        async fn classify(&self, text: &str) -> Result<ClassifierOutput, DomainError> {
            Ok(ClassifierOutput {
                label: "POSITIVE".to_string(),
                score: text.len() as f64 / 100.0,
            })
        }

        fn model_id(&self) -> &str {
            "length"
        }
    }

    #[tokio::test]
    async fn test_warm_up_classifies_probe_sentence() {
        let output = LengthClassifier.warm_up().await.unwrap();
        assert_eq!(output.score, "This is a test sentence.".len() as f64 / 100.0);
    }
}
