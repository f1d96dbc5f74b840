//! Adapters
//!
//! Infrastructure implementations of the model ports.

pub mod huggingface;

pub use huggingface::{HfSentimentClassifier, HfZeroShotClassifier, InferenceClient};
