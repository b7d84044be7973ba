use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::change_log::ChangeLogEntry;
use super::round::RoundRecord;
use super::run_state::{RunPhase, RunState};

/// Everything a completed run hands back to its caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Identifier carried on every log event of the run
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Terminal phase: converged or exhausted
    pub phase: RunPhase,

    /// One record per completed round, in round order
    pub history: Vec<RoundRecord>,

    /// Synthesized deliverable built from the last round's drafts
    pub final_text: String,

    /// Snapshot of the run state after the last round
    pub final_state: RunState,

    pub change_log: Vec<ChangeLogEntry>,
    pub risks: Vec<String>,
    pub tips: Vec<String>,
}

impl RunOutcome {
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    pub fn converged(&self) -> bool {
        self.phase == RunPhase::Converged
    }

    /// Why each change-log entry was applied, in change-log order.
    pub fn rationale(&self) -> Vec<&str> {
        self.change_log.iter().map(|e| e.reason.as_str()).collect()
    }
}
