//! Sentiment Merge - Blends keyword cues, lexical polarity and model confidence
//!
//! Rule order (first match wins):
//! 1. positive keyword or polarity above threshold -> POSITIVE
//! 2. negative keyword or polarity below -threshold -> NEGATIVE
//! 3. otherwise NEUTRAL

use serde::Serialize;

use super::tokenizer::tokenize;
use crate::domain::value_objects::{LexicalSentiment, Sentiment};

pub const POSITIVE_KEYWORDS: [&str; 10] = [
    "happy",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "good",
    "love",
    "enjoy",
    "excited",
    "fantastic",
];

pub const NEGATIVE_KEYWORDS: [&str; 10] = [
    "sad",
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "frustrated",
    "angry",
    "disappointed",
    "confused",
];

/// Polarity magnitude needed to leave NEUTRAL
pub const POLARITY_THRESHOLD: f64 = 0.05;

/// Minimum confidence reported for a non-neutral verdict
pub const CONFIDENCE_FLOOR: f64 = 0.6;

/// Merged sentiment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentVerdict {
    pub label: Sentiment,
    pub score: f64,
    pub subjectivity: f64,
}

/// Merge a model confidence with lexical polarity and keyword cues.
///
/// The model's own label is not consulted, only its confidence.
pub fn merge_sentiment(text: &str, model_score: f64, lexical: LexicalSentiment) -> SentimentVerdict {
    let words = tokenize(text);
    let has_positive = words.iter().any(|w| POSITIVE_KEYWORDS.contains(&w.as_str()));
    let has_negative = words.iter().any(|w| NEGATIVE_KEYWORDS.contains(&w.as_str()));

    let (label, score) = if has_positive || lexical.polarity > POLARITY_THRESHOLD {
        (Sentiment::Positive, model_score.max(CONFIDENCE_FLOOR))
    } else if has_negative || lexical.polarity < -POLARITY_THRESHOLD {
        (Sentiment::Negative, model_score.max(CONFIDENCE_FLOOR))
    } else {
        (Sentiment::Neutral, model_score)
    };

    SentimentVerdict {
        label,
        score,
        subjectivity: lexical.subjectivity,
    }
}
