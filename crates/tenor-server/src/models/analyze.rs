//! Analyze - Message annotation request and response

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use tenor::{Annotation, HistoryEntry, InboundMessage, Intent, Sentiment};

/// One prior turn of the conversation. All values must be strings; extra
/// keys are allowed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatTurn {
    /// Speaker, e.g. "user" or "model"
    #[schema(example = "user")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[schema(example = "Can you explain lifetimes?")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl<'de> Deserialize<'de> for ChatTurn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entry = HistoryEntry::deserialize(deserializer)?;
        Ok(Self {
            role: entry.role,
            content: entry.content,
        })
    }
}

/// Request body for POST /analyze
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[schema(example = "I love how well you explain things!")]
    pub content: String,
    /// Conversation so far, oldest first
    pub chat_history: Vec<ChatTurn>,
}

impl From<AnalyzeRequest> for InboundMessage {
    fn from(req: AnalyzeRequest) -> Self {
        InboundMessage::new(req.content).with_history(
            req.chat_history
                .into_iter()
                .map(|turn| HistoryEntry {
                    role: turn.role,
                    content: turn.content,
                })
                .collect(),
        )
    }
}

/// Annotated message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// The submitted content, unchanged
    pub enhanced_response: String,
    #[schema(value_type = String, example = "POSITIVE")]
    pub sentiment: Sentiment,
    #[schema(value_type = String, example = "statement")]
    pub intent: Intent,
    #[schema(example = 1.0)]
    pub context_score: f64,
    pub score: Option<f64>,
    pub subjectivity: Option<f64>,
}

impl From<Annotation> for AnalyzeResponse {
    fn from(a: Annotation) -> Self {
        Self {
            enhanced_response: a.enhanced_response,
            sentiment: a.sentiment,
            intent: a.intent,
            context_score: a.context_score,
            score: a.score,
            subjectivity: a.subjectivity,
        }
    }
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
