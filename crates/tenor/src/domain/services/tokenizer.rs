//! Tokenizer shared by keyword matching and context scoring

use std::collections::HashSet;

const STRIP_CHARS: &[char] = &['.', ',', '!', '?', '(', ')', '[', ']', '{', '}', ':', ';', '"', '\''];

/// Lowercase, split on whitespace, strip surrounding punctuation, dedupe
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(STRIP_CHARS))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
