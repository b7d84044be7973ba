//! Common test utilities for integration tests
//!
//! Provides generation-hook test doubles shared across integration test files.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use dialectic::{AgentId, GenerationHooks, HookKind, OrchestrationConfig, Request};

/// Hooks whose output never changes between rounds, so round 2 scores 100.
#[derive(Debug, Default)]
pub struct StaticHooks;

#[async_trait]
impl GenerationHooks for StaticHooks {
    async fn draft(&self, agent: AgentId, request: &Request, _round: u32) -> Result<String> {
        Ok(format!(
            "{} plan for {}\n- keep steps short\n- verify output",
            agent.label(),
            request.purpose
        ))
    }

    async fn critique(&self, agent: AgentId, counterpart_draft: &str) -> Result<String> {
        Ok(format!(
            "{} reviewed {} words",
            agent.label(),
            counterpart_draft.split_whitespace().count()
        ))
    }

    async fn propose_improvements(&self, agent: AgentId) -> Result<Vec<String>> {
        Ok(vec![format!("{}: add a checklist", agent.label())])
    }
}

/// Hooks that fail one hook kind for one agent from a given round onwards.
///
/// Critique and improvement calls are counted per agent; each agent makes one
/// such call per round, so the n-th call belongs to round n.
#[derive(Debug)]
pub struct FailingHooks {
    pub hook: HookKind,
    pub agent: AgentId,
    pub from_round: u32,
    calls: AtomicU32,
}

impl FailingHooks {
    pub const fn new(hook: HookKind, agent: AgentId, from_round: u32) -> Self {
        Self {
            hook,
            agent,
            from_round,
            calls: AtomicU32::new(0),
        }
    }

    fn should_fail(&self, hook: HookKind, agent: AgentId, round: Option<u32>) -> bool {
        if hook != self.hook || agent != self.agent {
            return false;
        }
        let round = round.unwrap_or_else(|| self.calls.fetch_add(1, Ordering::SeqCst) + 1);
        round >= self.from_round
    }
}

#[async_trait]
impl GenerationHooks for FailingHooks {
    async fn draft(&self, agent: AgentId, request: &Request, round: u32) -> Result<String> {
        if self.should_fail(HookKind::Draft, agent, Some(round)) {
            anyhow::bail!("model unavailable");
        }
        StaticHooks.draft(agent, request, round).await
    }

    async fn critique(&self, agent: AgentId, counterpart_draft: &str) -> Result<String> {
        if self.should_fail(HookKind::Critique, agent, None) {
            anyhow::bail!("critique rejected");
        }
        StaticHooks.critique(agent, counterpart_draft).await
    }

    async fn propose_improvements(&self, agent: AgentId) -> Result<Vec<String>> {
        if self.should_fail(HookKind::ProposeImprovements, agent, None) {
            anyhow::bail!("no improvements");
        }
        StaticHooks.propose_improvements(agent).await
    }
}

/// Hooks whose agent B draft never finishes within a test timeout.
#[derive(Debug)]
pub struct SlowHooks {
    pub delay: Duration,
}

#[async_trait]
impl GenerationHooks for SlowHooks {
    async fn draft(&self, agent: AgentId, request: &Request, round: u32) -> Result<String> {
        if agent == AgentId::B {
            tokio::time::sleep(self.delay).await;
        }
        StaticHooks.draft(agent, request, round).await
    }

    async fn critique(&self, agent: AgentId, counterpart_draft: &str) -> Result<String> {
        StaticHooks.critique(agent, counterpart_draft).await
    }

    async fn propose_improvements(&self, agent: AgentId) -> Result<Vec<String>> {
        StaticHooks.propose_improvements(agent).await
    }
}

/// Orchestration settings with the given cap and threshold and a short timeout.
pub fn orchestration(max_rounds: u32, convergence_threshold: u8) -> OrchestrationConfig {
    OrchestrationConfig {
        max_rounds,
        convergence_threshold,
        round_timeout_secs: 5,
    }
}

/// The market-research brief request used throughout the walkthrough tests.
pub fn sample_request() -> Request {
    Request::example()
}
