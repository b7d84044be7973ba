use std::fmt;

use serde::{Deserialize, Serialize};

use super::round::RoundRecord;

/// Mutable state of a single orchestration run.
///
/// Each run owns its own instance; nothing is shared across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Intent line derived from the request
    pub intent: String,

    /// Number of rounds recorded so far
    pub iteration_count: u32,

    /// Note describing the most recent round
    pub last_feedback_note: String,

    /// Score of the most recent round (0-100)
    pub convergence_score: u8,
}

impl RunState {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }

    /// Apply a completed round. This is the only way the state advances.
    pub fn record_round(&mut self, record: &RoundRecord) {
        self.iteration_count += 1;
        self.convergence_score = record.convergence_score;
        self.last_feedback_note = format!(
            "Round {}: critiques and improvements captured.",
            record.round_number
        );
    }
}

/// Lifecycle of a run: `Idle -> Running -> Converged | Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RunPhase {
    Idle,
    Running { round: u32 },
    /// A round reached the convergence threshold
    Converged,
    /// The round cap was hit without reaching the threshold
    Exhausted,
}

impl RunPhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Converged | Self::Exhausted)
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Running { round } => write!(f, "running (round {round})"),
            Self::Converged => f.write_str("converged"),
            Self::Exhausted => f.write_str("exhausted"),
        }
    }
}
