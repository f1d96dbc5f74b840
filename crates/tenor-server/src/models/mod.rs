//! Tenor Data Models
//!
//! - Analyze: annotation request/response
//! - Health: service status

mod analyze;
mod health;

pub use analyze::*;
pub use health::*;
