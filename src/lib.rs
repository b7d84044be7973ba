//! Dialectic - two-agent convergent refinement engine
//!
//! Dialectic runs two peer agents through repeated rounds of drafting,
//! cross-critique and improvement proposals until their merged output stops
//! changing (convergence) or a round cap is reached, then folds the last
//! round into a single synthesized deliverable.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and the generation-hook port
//! - **Service Layer** (`services`): Alignment, scoring, rounds, orchestration, synthesis
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging, canned hooks
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dialectic::{CannedGenerationHooks, OrchestrationConfig, OrchestrationEngine, Request};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = OrchestrationEngine::new(
//!         Arc::new(CannedGenerationHooks::new()),
//!         OrchestrationConfig::default(),
//!     );
//!     let outcome = engine.run(&Request::example()).await?;
//!     println!("{} rounds, final state: {}", outcome.history.len(), outcome.phase);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{GenerationCause, OrchestrationError, OrchestrationResult, RequestError};
pub use domain::models::{
    AgentId, AlignmentSummary, AlignmentToken, ChangeLogEntry, Config, HookKind, LoggingConfig,
    OrchestrationConfig, Request, RoundRecord, RunOutcome, RunPhase, RunState, TokenKind,
};
pub use domain::ports::GenerationHooks;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::templates::{AgentTemplate, CannedGenerationHooks};
pub use services::{ConvergenceScorer, DraftRound, OrchestrationEngine, Synthesizer, TextAligner};
