//! Domain errors for the refinement engine.

use thiserror::Error;

use super::models::{AgentId, HookKind};

/// Why a generation hook call was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationCause {
    /// The hook itself returned an error.
    #[error("{0}")]
    Hook(String),

    /// The hook returned empty or whitespace-only text.
    #[error("hook returned blank output")]
    BlankOutput,

    /// The round deadline elapsed while the hook was in flight.
    #[error("round deadline of {secs}s elapsed")]
    TimedOut { secs: u64 },
}

/// Errors surfaced by an orchestration run.
///
/// A round is either recorded in full or not at all, so every variant
/// means the run was aborted and no partial history is returned.
#[derive(Debug, Error)]
pub enum OrchestrationError {
    #[error("Generation failure in round {round}: {hook} hook for agent {agent} failed: {cause}")]
    GenerationFailure {
        round: u32,
        hook: HookKind,
        agent: AgentId,
        cause: GenerationCause,
    },
}

impl OrchestrationError {
    /// Round in which the failure occurred.
    pub const fn round(&self) -> u32 {
        match self {
            Self::GenerationFailure { round, .. } => *round,
        }
    }

    /// Hook that failed.
    pub const fn hook(&self) -> HookKind {
        match self {
            Self::GenerationFailure { hook, .. } => *hook,
        }
    }
}

pub type OrchestrationResult<T> = Result<T, OrchestrationError>;

/// Request validation errors, raised at the CLI edge before a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Request purpose cannot be empty")]
    EmptyPurpose,

    #[error("Request format cannot be empty")]
    EmptyFormat,
}
