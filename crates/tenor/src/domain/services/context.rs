//! Context Scorer - Relevance of a message to recent conversation
//!
//! Jaccard similarity between the token set of the message and the token set
//! of the last few history entries.

use std::collections::HashSet;

use super::tokenizer::tokenize;
use crate::domain::entities::HistoryEntry;
use crate::domain::errors::DomainError;

/// Number of trailing history entries compared against
pub const CONTEXT_WINDOW: usize = 3;

/// Relevance score, failing open to 1.0 on any internal error
pub fn score_context(current_message: &str, chat_history: &[HistoryEntry]) -> f64 {
    match context_score(current_message, chat_history) {
        Ok(similarity) => {
            tracing::info!("Context similarity score: {}", similarity);
            similarity
        }
        Err(e) => {
            tracing::error!("Error in context analysis: {}", e);
            1.0
        }
    }
}

/// Relevance score; empty history counts as fully relevant
pub fn context_score(current_message: &str, chat_history: &[HistoryEntry]) -> Result<f64, DomainError> {
    if chat_history.is_empty() {
        return Ok(1.0);
    }

    let start = chat_history.len().saturating_sub(CONTEXT_WINDOW);
    let recent = chat_history[start..]
        .iter()
        .map(|entry| {
            entry
                .content
                .as_deref()
                .ok_or_else(|| DomainError::Analysis("history entry has no content".to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let current_tokens = tokenize(current_message);
    let context_tokens = tokenize(&recent.join(" "));

    Ok(jaccard(&current_tokens, &context_tokens))
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
