//! Domain Entities
//!
//! Request-scoped objects; nothing here outlives a single annotation.

mod annotation;
mod message;

pub use annotation::*;
pub use message::*;
