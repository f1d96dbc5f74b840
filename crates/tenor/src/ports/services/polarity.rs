//! Polarity Analyzer Port
//!
//! Interface for lexical polarity/subjectivity scoring.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::LexicalSentiment;

/// Service interface for lexical sentiment analysis
///
/// Analyzers run in-process, so the call is synchronous.
pub trait PolarityAnalyzer: Send + Sync {
    /// Score polarity and subjectivity of text
    fn analyze(&self, text: &str) -> Result<LexicalSentiment, DomainError>;

    /// Analyzer name for logs and health output
    fn name(&self) -> &str;
}
