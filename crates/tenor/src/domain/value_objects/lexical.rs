//! LexicalSentiment - Lexicon-derived polarity and subjectivity

use serde::{Deserialize, Serialize};

/// Polarity (-1.0 to 1.0) and subjectivity (0.0 to 1.0) of a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl LexicalSentiment {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}
