//! Domain layer for the refinement engine
//!
//! This module contains the core models, the error taxonomy and the
//! generation-hook port the engine is written against.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{GenerationCause, OrchestrationError, OrchestrationResult, RequestError};
