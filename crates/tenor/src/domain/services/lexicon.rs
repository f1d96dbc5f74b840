//! Lexicon Analyzer - In-process polarity and subjectivity scoring
//!
//! Backed by the VADER lexicon (about 7,500 rated words, emoticons and
//! slang) and its rules for boosters, negation, capitalization and
//! contrastive "but". Polarity is VADER's normalized compound score.
//! Subjectivity is the share of the text carrying sentiment, `pos + neg`.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::LexicalSentiment;
use crate::ports::PolarityAnalyzer;

/// Lexicon-based polarity analyzer
pub struct LexiconAnalyzer {
    vader: SentimentIntensityAnalyzer<'static>,
}

impl LexiconAnalyzer {
    /// Analyzer with the bundled English lexicon
    pub fn new() -> Self {
        Self {
            vader: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score text
    pub fn score(&self, text: &str) -> LexicalSentiment {
        if text.trim().is_empty() {
            return LexicalSentiment::default();
        }

        let scores = self.vader.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        LexicalSentiment::new(get("compound"), get("pos") + get("neg"))
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LexiconAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconAnalyzer").finish_non_exhaustive()
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<LexicalSentiment, DomainError> {
        Ok(self.score(text))
    }

    fn name(&self) -> &str {
        "vader"
    }
}
