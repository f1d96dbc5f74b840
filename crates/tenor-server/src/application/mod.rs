//! Application Services (Use Cases)
//!
//! Orchestrates domain operations and model ports.

mod annotation_service;

#[cfg(test)]
pub mod testing;

pub use annotation_service::AnnotationService;
