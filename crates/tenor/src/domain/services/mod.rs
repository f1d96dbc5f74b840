//! Domain Services
//!
//! Pure analyses that do not touch any model.

mod context;
mod lexicon;
mod sentiment_merge;
mod tokenizer;

pub use context::*;
pub use lexicon::*;
pub use sentiment_merge::*;
pub use tokenizer::*;
