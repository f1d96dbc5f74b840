//! Annotation Entity
//!
//! The enriched view of a message returned to the chat application.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Intent, Sentiment};

/// Annotation result for a single message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// The original content, echoed verbatim
    pub enhanced_response: String,
    pub sentiment: Sentiment,
    pub intent: Intent,
    /// Jaccard overlap with recent history, 0.0 - 1.0
    pub context_score: f64,
    /// Sentiment confidence, 0.0 - 1.0
    #[serde(default)]
    pub score: Option<f64>,
    /// Lexical subjectivity, 0.0 - 1.0
    #[serde(default)]
    pub subjectivity: Option<f64>,
}

impl Annotation {
    /// Neutral annotation used when the service cannot be reached
    pub fn fallback(content: impl Into<String>) -> Self {
        Self {
            enhanced_response: content.into(),
            sentiment: Sentiment::Neutral,
            intent: Intent::Statement,
            context_score: 1.0,
            score: None,
            subjectivity: None,
        }
    }
}
