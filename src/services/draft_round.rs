//! A single draft -> critique -> improve -> score iteration.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{timeout_at, Instant};
use tracing::debug;

use crate::domain::errors::{GenerationCause, OrchestrationError, OrchestrationResult};
use crate::domain::models::{merge_sections, AgentId, HookKind, Request, RoundRecord};
use crate::domain::ports::GenerationHooks;
use crate::services::ConvergenceScorer;

/// Upper bound on a round deadline when the configured timeout overflows `Instant`.
const MAX_DEADLINE_SECS: u64 = 365 * 24 * 60 * 60;

/// Runs one round against the injected generation hooks.
///
/// The two agents are independent until the merge step, so each hook pair
/// runs concurrently; results are always combined agent A first. Every hook
/// call shares one deadline measured from the start of the round. The round
/// does not touch run state; the engine applies the returned record.
pub struct DraftRound<H: GenerationHooks + ?Sized> {
    hooks: Arc<H>,
    round_timeout: Duration,
}

impl<H: GenerationHooks + ?Sized> DraftRound<H> {
    pub fn new(hooks: Arc<H>, round_timeout: Duration) -> Self {
        Self {
            hooks,
            round_timeout,
        }
    }

    /// Execute round `round_number` and build its record.
    ///
    /// `previous_merged` is the merged text of the immediately preceding
    /// round, or `None` for round 1.
    pub async fn run_round(
        &self,
        round_number: u32,
        request: &Request,
        previous_merged: Option<&str>,
    ) -> OrchestrationResult<RoundRecord> {
        let started = Instant::now();
        let call = HookCall {
            round: round_number,
            deadline: started
                .checked_add(self.round_timeout)
                .unwrap_or_else(|| started + Duration::from_secs(MAX_DEADLINE_SECS)),
            timeout_secs: self.round_timeout.as_secs(),
        };

        let (agent_a_draft, agent_b_draft) = tokio::try_join!(
            call.text(
                HookKind::Draft,
                AgentId::A,
                self.hooks.draft(AgentId::A, request, round_number)
            ),
            call.text(
                HookKind::Draft,
                AgentId::B,
                self.hooks.draft(AgentId::B, request, round_number)
            ),
        )?;
        debug!(round = round_number, "drafts received");

        let (agent_a_critique, agent_b_critique) = tokio::try_join!(
            call.text(
                HookKind::Critique,
                AgentId::A,
                self.hooks.critique(AgentId::A, &agent_b_draft)
            ),
            call.text(
                HookKind::Critique,
                AgentId::B,
                self.hooks.critique(AgentId::B, &agent_a_draft)
            ),
        )?;
        debug!(round = round_number, "critiques received");

        let (mut improvements, agent_b_improvements) = tokio::try_join!(
            call.list(
                HookKind::ProposeImprovements,
                AgentId::A,
                self.hooks.propose_improvements(AgentId::A)
            ),
            call.list(
                HookKind::ProposeImprovements,
                AgentId::B,
                self.hooks.propose_improvements(AgentId::B)
            ),
        )?;
        improvements.extend(agent_b_improvements);

        let merged = merge_sections(&agent_a_draft, &agent_b_draft, &improvements);
        let convergence_score = ConvergenceScorer::score(previous_merged, &merged);

        Ok(RoundRecord {
            round_number,
            agent_a_draft,
            agent_b_draft,
            agent_a_critique,
            agent_b_critique,
            improvements,
            convergence_score,
        })
    }
}

/// Deadline and error attribution shared by the hook calls of one round.
struct HookCall {
    round: u32,
    deadline: Instant,
    timeout_secs: u64,
}

impl HookCall {
    async fn run<T, F>(&self, hook: HookKind, agent: AgentId, fut: F) -> OrchestrationResult<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match timeout_at(self.deadline, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(self.failure(hook, agent, GenerationCause::Hook(format!("{err:#}")))),
            Err(_) => Err(self.failure(
                hook,
                agent,
                GenerationCause::TimedOut {
                    secs: self.timeout_secs,
                },
            )),
        }
    }

    async fn text<F>(&self, hook: HookKind, agent: AgentId, fut: F) -> OrchestrationResult<String>
    where
        F: Future<Output = anyhow::Result<String>>,
    {
        let text = self.run(hook, agent, fut).await?;
        if text.trim().is_empty() {
            return Err(self.failure(hook, agent, GenerationCause::BlankOutput));
        }
        Ok(text)
    }

    async fn list<F>(
        &self,
        hook: HookKind,
        agent: AgentId,
        fut: F,
    ) -> OrchestrationResult<Vec<String>>
    where
        F: Future<Output = anyhow::Result<Vec<String>>>,
    {
        let items = self.run(hook, agent, fut).await?;
        if items.iter().any(|item| item.trim().is_empty()) {
            return Err(self.failure(hook, agent, GenerationCause::BlankOutput));
        }
        Ok(items)
    }

    fn failure(
        &self,
        hook: HookKind,
        agent: AgentId,
        cause: GenerationCause,
    ) -> OrchestrationError {
        OrchestrationError::GenerationFailure {
            round: self.round,
            hook,
            agent,
            cause,
        }
    }
}
