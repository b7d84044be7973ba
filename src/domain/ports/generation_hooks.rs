use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{AgentId, Request};

/// Port for the content-generation capability driven by each round.
///
/// Implementations may call a language model, render canned templates or
/// return scripted text in tests. The engine never inspects how text is
/// produced; it only checks that it arrived in time and is not blank.
///
/// # Examples
///
/// ```no_run
/// use dialectic::domain::ports::GenerationHooks;
/// use dialectic::{AgentId, Request};
/// use anyhow::Result;
///
/// async fn example(hooks: &dyn GenerationHooks, request: &Request) -> Result<()> {
///     let draft = hooks.draft(AgentId::A, request, 1).await?;
///     let critique = hooks.critique(AgentId::B, &draft).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait GenerationHooks: Send + Sync {
    /// Produce `agent`'s draft for the given round.
    ///
    /// Should be a pure function of its inputs so runs are reproducible.
    async fn draft(&self, agent: AgentId, request: &Request, round: u32) -> Result<String>;

    /// Produce `agent`'s critique of its counterpart's draft.
    async fn critique(&self, agent: AgentId, counterpart_draft: &str) -> Result<String>;

    /// Produce `agent`'s ordered list of concrete improvements.
    async fn propose_improvements(&self, agent: AgentId) -> Result<Vec<String>>;
}
