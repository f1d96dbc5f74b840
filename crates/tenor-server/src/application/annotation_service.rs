//! Annotation Application Service (Use Case)
//!
//! Runs sentiment, intent and context analysis for a message and assembles
//! the annotation.

use std::sync::Arc;

use tenor::{
    merge_sentiment, score_context, Annotation, DomainError, HistoryEntry, InboundMessage, Intent,
    PolarityAnalyzer, SentimentClassifier, SentimentVerdict, ZeroShotClassifier,
};

/// Characters of message content included in logs
const LOG_PREVIEW_CHARS: usize = 100;

/// Application service for message annotation
pub struct AnnotationService {
    sentiment: Arc<dyn SentimentClassifier>,
    polarity: Arc<dyn PolarityAnalyzer>,
    intent: Arc<dyn ZeroShotClassifier>,
}

impl AnnotationService {
    pub fn new(
        sentiment: Arc<dyn SentimentClassifier>,
        polarity: Arc<dyn PolarityAnalyzer>,
        intent: Arc<dyn ZeroShotClassifier>,
    ) -> Self {
        Self {
            sentiment,
            polarity,
            intent,
        }
    }

    pub fn sentiment_model(&self) -> &str {
        self.sentiment.model_id()
    }

    pub fn intent_model(&self) -> &str {
        self.intent.model_id()
    }

    pub fn polarity_analyzer(&self) -> &str {
        self.polarity.name()
    }

    /// Merge model confidence, lexical polarity and keyword cues
    pub async fn analyze_sentiment(&self, text: &str) -> Result<SentimentVerdict, DomainError> {
        let model = self.sentiment.classify(text).await?;
        let lexical = self.polarity.analyze(text)?;

        tracing::debug!(
            "Sentiment inputs: model {}={:.3}, polarity={:.3}, subjectivity={:.3}",
            model.label,
            model.score,
            lexical.polarity,
            lexical.subjectivity
        );

        Ok(merge_sentiment(text, model.score, lexical))
    }

    /// Top-ranked intent from the zero-shot model
    pub async fn detect_intent(&self, text: &str) -> Result<Intent, DomainError> {
        let ranking = self
            .intent
            .classify(text, &Intent::candidate_labels())
            .await?;

        let label = ranking.top_label().ok_or_else(|| {
            DomainError::ExternalService(format!("{} returned no labels", self.intent.model_id()))
        })?;

        label.parse().map_err(DomainError::ExternalService)
    }

    /// Relevance to the last few history entries; never fails
    pub fn analyze_context(&self, text: &str, chat_history: &[HistoryEntry]) -> f64 {
        score_context(text, chat_history)
    }

    /// Annotate a message
    pub async fn annotate(&self, message: &InboundMessage) -> Result<Annotation, DomainError> {
        tracing::info!("Received message: {}...", message.preview(LOG_PREVIEW_CHARS));

        let sentiment = self.analyze_sentiment(&message.content).await?;
        tracing::info!("Sentiment analysis result: {:?}", sentiment);

        let intent = self.detect_intent(&message.content).await?;
        tracing::info!("Intent detection result: {}", intent);

        let context_score = self.analyze_context(&message.content, &message.chat_history);
        tracing::info!("Context analysis score: {}", context_score);

        Ok(Annotation {
            enhanced_response: message.content.clone(),
            sentiment: sentiment.label,
            intent,
            context_score,
            score: Some(sentiment.score),
            subjectivity: Some(sentiment.subjectivity),
        })
    }

    /// Exercise every model once; any failure means the service must not start
    pub async fn verify(&self) -> Result<(), DomainError> {
        tracing::info!("Testing sentiment model {}...", self.sentiment_model());
        let output = self.sentiment.warm_up().await?;
        tracing::info!("Sentiment model test successful: {:?}", output);

        tracing::info!("Testing polarity analyzer {}...", self.polarity_analyzer());
        let lexical = self.polarity.analyze("This is a test sentence.")?;
        tracing::info!("Polarity analyzer test successful: {:?}", lexical);

        tracing::info!("Testing intent model {}...", self.intent_model());
        let ranking = self.intent.warm_up().await?;
        tracing::info!("Intent model test successful: {:?}", ranking);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{service, FailingSentiment, StubSentiment, StubZeroShot};
    use tenor::{LexiconAnalyzer, Sentiment};

    #[tokio::test]
    async fn test_love_message_without_history() {
        let service = service(StubSentiment::new(0.99), StubZeroShot::ranking(&["statement"]));
        let message = InboundMessage::new("I love how well you explain things!");

        let annotation = service.annotate(&message).await.unwrap();

        assert_eq!(annotation.enhanced_response, message.content);
        assert_eq!(annotation.sentiment, Sentiment::Positive);
        assert_eq!(annotation.context_score, 1.0);
        assert_eq!(annotation.score, Some(0.99));
        assert!(Intent::ALL.contains(&annotation.intent));
    }

    #[tokio::test]
    async fn test_descriptive_message_is_neutral() {
        let service = service(StubSentiment::new(0.52), StubZeroShot::ranking(&["statement", "question"]));
        let message = InboundMessage::new("The sky is blue and today is Thursday.");

        let annotation = service.annotate(&message).await.unwrap();

        assert_eq!(annotation.sentiment, Sentiment::Neutral);
        assert_eq!(annotation.score, Some(0.52));
        assert_eq!(annotation.intent, Intent::Statement);
        assert_eq!(annotation.context_score, 1.0);
    }

    #[tokio::test]
    async fn test_negative_message_gets_confidence_floor() {
        let service = service(StubSentiment::new(0.3), StubZeroShot::ranking(&["request_for_help"]));
        let message = InboundMessage::new("I'm frustrated, this is awful")
            .with_history(vec![HistoryEntry::model("Try restarting it.")]);

        let annotation = service.annotate(&message).await.unwrap();

        assert_eq!(annotation.sentiment, Sentiment::Negative);
        assert_eq!(annotation.score, Some(0.6));
        assert_eq!(annotation.intent, Intent::RequestForHelp);
        assert!(annotation.context_score < 1.0);
    }

    #[tokio::test]
    async fn test_intent_sends_all_candidates_and_takes_top() {
        let zero_shot = StubZeroShot::ranking(&["farewell", "greeting"]);
        let seen = zero_shot.seen_labels();
        let service = service(StubSentiment::new(0.9), zero_shot);

        assert_eq!(service.detect_intent("bye for now").await.unwrap(), Intent::Farewell);
        assert_eq!(*seen.lock().unwrap(), Intent::candidate_labels());
    }

    #[tokio::test]
    async fn test_unknown_or_missing_intent_is_an_error() {
        let unknown = service(StubSentiment::new(0.9), StubZeroShot::ranking(&["small_talk"]));
        assert!(matches!(
            unknown.detect_intent("hey").await,
            Err(DomainError::ExternalService(_))
        ));

        let empty = service(StubSentiment::new(0.9), StubZeroShot::ranking(&[]));
        assert!(empty.detect_intent("hey").await.is_err());
    }

    #[tokio::test]
    async fn test_classifier_failure_propagates() {
        let service = AnnotationService::new(
            Arc::new(FailingSentiment),
            Arc::new(LexiconAnalyzer::new()),
            Arc::new(StubZeroShot::ranking(&["question"])),
        );

        let err = service.annotate(&InboundMessage::new("hello?")).await.unwrap_err();
        assert!(err.to_string().contains("sentiment backend offline"));
        assert!(service.verify().await.is_err());
    }

    #[tokio::test]
    async fn test_verify_succeeds_with_working_models() {
        let service = service(StubSentiment::new(0.9), StubZeroShot::ranking(&["statement"]));
        service.verify().await.unwrap();
        assert_eq!(service.sentiment_model(), "stub-sentiment");
        assert_eq!(service.intent_model(), "stub-zero-shot");
        assert_eq!(service.polarity_analyzer(), "vader");
    }
}
