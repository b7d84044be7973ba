//! Template-backed generation hooks and agent role templates.

pub mod canned_hooks;

pub use canned_hooks::{AgentTemplate, CannedGenerationHooks, PRINCIPLES};
