//! Stub model ports for unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tenor::{
    ClassifierOutput, DomainError, LexiconAnalyzer, SentimentClassifier, ZeroShotClassifier,
    ZeroShotRanking,
};

use super::AnnotationService;

/// Sentiment model returning a fixed confidence
pub struct StubSentiment {
    score: f64,
}

impl StubSentiment {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

#[async_trait]
impl SentimentClassifier for StubSentiment {
    async fn classify(&self, _text: &str) -> Result<ClassifierOutput, DomainError> {
        Ok(ClassifierOutput {
            label: "POSITIVE".to_string(),
            score: self.score,
        })
    }

    fn model_id(&self) -> &str {
        "stub-sentiment"
    }
}

/// Sentiment model that is always down
pub struct FailingSentiment;

#[async_trait]
impl SentimentClassifier for FailingSentiment {
    async fn classify(&self, _text: &str) -> Result<ClassifierOutput, DomainError> {
        Err(DomainError::ExternalService(
            "sentiment backend offline".to_string(),
        ))
    }

    fn model_id(&self) -> &str {
        "failing-sentiment"
    }
}

/// Zero-shot model returning a fixed ranking and recording the labels it was offered
pub struct StubZeroShot {
    labels: Vec<String>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl StubZeroShot {
    pub fn ranking(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            seen: Arc::default(),
        }
    }

    pub fn seen_labels(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.seen)
    }
}

#[async_trait]
impl ZeroShotClassifier for StubZeroShot {
    async fn classify(
        &self,
        _text: &str,
        candidate_labels: &[String],
    ) -> Result<ZeroShotRanking, DomainError> {
        if let Ok(mut seen) = self.seen.lock() {
            *seen = candidate_labels.to_vec();
        }
        let count = self.labels.len();
        Ok(ZeroShotRanking {
            labels: self.labels.clone(),
            scores: (0..count).map(|i| 1.0 - i as f64 / count as f64).collect(),
        })
    }

    fn model_id(&self) -> &str {
        "stub-zero-shot"
    }
}

/// Service wired with the built-in lexicon and the given stubs
pub fn service(sentiment: StubSentiment, zero_shot: StubZeroShot) -> AnnotationService {
    AnnotationService::new(
        Arc::new(sentiment),
        Arc::new(LexiconAnalyzer::new()),
        Arc::new(zero_shot),
    )
}
