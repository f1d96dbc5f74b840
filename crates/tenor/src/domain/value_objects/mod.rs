//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod intent;
mod lexical;
mod sentiment;

pub use intent::*;
pub use lexical::*;
pub use sentiment::*;
