//! Intent - What the author is trying to do with a message

use serde::{Deserialize, Serialize};

/// Intent label, one of a fixed candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Question,
    Statement,
    RequestForHelp,
    Greeting,
    Farewell,
    Clarification,
    Agreement,
    Disagreement,
}

impl Intent {
    /// Candidate labels, in the order they are offered to the classifier
    pub const ALL: [Intent; 8] = [
        Intent::Question,
        Intent::Statement,
        Intent::RequestForHelp,
        Intent::Greeting,
        Intent::Farewell,
        Intent::Clarification,
        Intent::Agreement,
        Intent::Disagreement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Question => "question",
            Intent::Statement => "statement",
            Intent::RequestForHelp => "request_for_help",
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Clarification => "clarification",
            Intent::Agreement => "agreement",
            Intent::Disagreement => "disagreement",
        }
    }

    /// Candidate label strings for a zero-shot request
    pub fn candidate_labels() -> Vec<String> {
        Self::ALL.iter().map(|i| i.as_str().to_string()).collect()
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == label)
            .ok_or_else(|| format!("Unknown intent: {}", s))
    }
}
