//! Tenor Domain Library
//!
//! Core domain types, heuristics and model interfaces for the Tenor
//! message annotation service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Inbound messages and annotation results
//!   - `value_objects/`: Immutable value types (Sentiment, Intent)
//!   - `services/`: Pure analyses (tokenizer, sentiment merge, context score, lexicon)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits) for pretrained models
//!
//! # Usage
//!
//! ```rust,ignore
//! use tenor::domain::{merge_sentiment, score_context};
//! use tenor::ports::{SentimentClassifier, ZeroShotClassifier};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    context_score, merge_sentiment, score_context, tokenize, Annotation, DomainError,
    HistoryEntry, InboundMessage, Intent, LexicalSentiment, LexiconAnalyzer, Sentiment,
    SentimentVerdict,
    CONFIDENCE_FLOOR, CONTEXT_WINDOW, NEGATIVE_KEYWORDS, POLARITY_THRESHOLD, POSITIVE_KEYWORDS,
};
pub use ports::{
    ClassifierOutput, PolarityAnalyzer, SentimentClassifier, ZeroShotClassifier,
    ZeroShotRanking,
};
