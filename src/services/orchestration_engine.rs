//! Orchestration engine: drives rounds until convergence or the round cap.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::errors::OrchestrationResult;
use crate::domain::models::change_log::{RISKS, TIPS};
use crate::domain::models::{
    ChangeLogEntry, OrchestrationConfig, Request, RoundRecord, RunOutcome, RunPhase, RunState,
};
use crate::domain::ports::GenerationHooks;
use crate::services::{DraftRound, Synthesizer};

/// Runs the round loop for a request.
///
/// State machine: `Idle -> Running(1..=max_rounds) -> Converged | Exhausted`.
/// A run stops at the first round whose score reaches the threshold; the
/// record of that round is the last one in the history.
///
/// The engine keeps no per-run state, so one engine (behind an `Arc`) may
/// serve concurrent runs; each gets its own `RunState`.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use dialectic::{CannedGenerationHooks, OrchestrationConfig, OrchestrationEngine, Request};
///
/// # async fn demo() -> anyhow::Result<()> {
/// let engine = OrchestrationEngine::new(
///     Arc::new(CannedGenerationHooks::new()),
///     OrchestrationConfig::default(),
/// );
/// let outcome = engine.run(&Request::example()).await?;
/// assert!(outcome.history.len() <= 3);
/// # Ok(())
/// # }
/// ```
pub struct OrchestrationEngine<H: GenerationHooks + ?Sized> {
    round_runner: DraftRound<H>,
    config: OrchestrationConfig,
}

impl<H: GenerationHooks + ?Sized> OrchestrationEngine<H> {
    pub fn new(hooks: Arc<H>, config: OrchestrationConfig) -> Self {
        Self {
            round_runner: DraftRound::new(hooks, config.round_timeout()),
            config,
        }
    }

    pub const fn config(&self) -> &OrchestrationConfig {
        &self.config
    }

    /// Run the full loop for `request`.
    ///
    /// On a hook failure the run aborts with `GenerationFailure`; rounds
    /// completed before the failure are discarded with it.
    pub async fn run(&self, request: &Request) -> OrchestrationResult<RunOutcome> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        // At least one round so there is always something to synthesize.
        let max_rounds = self.config.max_rounds.max(1);
        let threshold = self.config.convergence_threshold;

        let mut state = RunState::new(request.intent());
        let mut phase = RunPhase::Idle;
        let mut history: Vec<RoundRecord> = Vec::new();
        let mut previous_merged: Option<String> = None;

        info!(run_id = %run_id, max_rounds, threshold, intent = %state.intent, "starting orchestration run");

        for round in 1..=max_rounds {
            phase = RunPhase::Running { round };
            debug!(run_id = %run_id, %phase, "starting round");

            let record = match self
                .round_runner
                .run_round(round, request, previous_merged.as_deref())
                .await
            {
                Ok(record) => record,
                Err(err) => {
                    warn!(run_id = %run_id, round, error = %err, "round aborted, run failed");
                    return Err(err);
                }
            };

            state.record_round(&record);
            previous_merged = Some(record.merged_text());
            let score = record.convergence_score;
            history.push(record);

            info!(run_id = %run_id, round, score, "round complete");

            if score >= threshold {
                phase = RunPhase::Converged;
                info!(run_id = %run_id, round, score, threshold, "run converged");
                break;
            }
        }

        if !phase.is_terminal() {
            phase = RunPhase::Exhausted;
            info!(
                run_id = %run_id,
                rounds = history.len(),
                score = state.convergence_score,
                threshold,
                "round cap reached without convergence"
            );
        }

        let final_text = history
            .last()
            .map(|last| Synthesizer::synthesize(&last.agent_a_draft, &last.agent_b_draft, request))
            .unwrap_or_default();

        Ok(RunOutcome {
            run_id,
            started_at,
            finished_at: Utc::now(),
            phase,
            history,
            final_text,
            final_state: state,
            change_log: ChangeLogEntry::standard(),
            risks: RISKS.iter().map(ToString::to_string).collect(),
            tips: TIPS.iter().map(ToString::to_string).collect(),
        })
    }
}
