//! Domain models for requests, rounds, run state and alignments.

pub mod alignment;
pub mod change_log;
pub mod config;
pub mod outcome;
pub mod request;
pub mod round;
pub mod run_state;

pub use alignment::{AlignmentSummary, AlignmentToken, TokenKind};
pub use change_log::ChangeLogEntry;
pub use config::{Config, LoggingConfig, OrchestrationConfig};
pub use outcome::RunOutcome;
pub use request::Request;
pub use round::{merge_sections, AgentId, HookKind, RoundRecord};
pub use run_state::{RunPhase, RunState};
