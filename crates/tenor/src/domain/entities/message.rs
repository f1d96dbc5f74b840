//! Message Entity
//!
//! The message being annotated together with the conversation that preceded it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One prior turn of the conversation.
///
/// Deserialized from a string-to-string map: every value must be a string,
/// keys other than `role` and `content` are accepted and discarded. Both
/// fields may be absent, and an entry without `content` only degrades
/// context scoring instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct HistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<BTreeMap<String, String>> for HistoryEntry {
    fn from(mut fields: BTreeMap<String, String>) -> Self {
        Self {
            role: fields.remove("role"),
            content: fields.remove("content"),
        }
    }
}

impl HistoryEntry {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            content: Some(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new("model", content)
    }
}

/// A chat message submitted for annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message text
    pub content: String,
    /// Conversation so far, oldest first
    pub chat_history: Vec<HistoryEntry>,
}

impl InboundMessage {
    /// Create a message with no history
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            chat_history: Vec::new(),
        }
    }

    /// Attach conversation history
    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.chat_history = history;
        self
    }

    /// Content truncated to `max_chars` characters, for logging
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_entry_tolerates_missing_and_extra_keys() {
        let entries: Vec<HistoryEntry> =
            serde_json::from_str(r#"[{"role": "user"}, {"content": "hi", "lang": "en"}]"#)
                .unwrap();

        assert_eq!(entries[0].content, None);
        assert_eq!(entries[1].content.as_deref(), Some("hi"));
        assert_eq!(entries[1].role, None);
    }

    #[test]
    fn test_history_entry_rejects_non_string_values() {
        let result = serde_json::from_str::<HistoryEntry>(r#"{"role": "user", "content": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_history_entry_rejects_null_fields() {
        let result = serde_json::from_str::<HistoryEntry>(r#"{"role": "user", "content": null}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<HistoryEntry>(r#"{"role": null, "content": "hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_history_entry_rejects_non_string_extra_keys() {
        let result =
            serde_json::from_str::<HistoryEntry>(r#"{"role": "user", "content": "x", "ts": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_history_entry_serializes_only_present_fields() {
        let entry: HistoryEntry = serde_json::from_str(r#"{"content": "hi"}"#).unwrap();
        assert_eq!(serde_json::to_string(&entry).unwrap(), r#"{"content":"hi"}"#);
    }

    #[test]
    fn test_inbound_message_requires_content() {
        let result = serde_json::from_str::<InboundMessage>(r#"{"chat_history": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let message = InboundMessage::new("héllo wörld");
        assert_eq!(message.preview(4), "héll");
        assert_eq!(message.preview(100), "héllo wörld");
    }
}
