//! Service Ports
//!
//! Abstract interfaces for the models consulted during annotation.

mod polarity;
mod sentiment_classifier;
mod zero_shot;

pub use polarity::*;
pub use sentiment_classifier::*;
pub use zero_shot::*;
