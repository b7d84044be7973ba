use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two peer agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    A,
    B,
}

impl AgentId {
    /// Both agents in merge order.
    pub const BOTH: [Self; 2] = [Self::A, Self::B];

    /// Single-letter name used in draft headers.
    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Display label used in critiques and improvements, e.g. `"Agent A"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Agent A",
            Self::B => "Agent B",
        }
    }

    /// The other agent.
    pub const fn counterpart(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// The three pluggable generation hooks a round calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    Draft,
    Critique,
    ProposeImprovements,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Draft => "draft",
            Self::Critique => "critique",
            Self::ProposeImprovements => "propose_improvements",
        };
        f.write_str(name)
    }
}

/// Everything produced by one draft -> critique -> merge -> score iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round_number: u32,
    pub agent_a_draft: String,
    pub agent_b_draft: String,
    /// Agent A's critique of agent B's draft
    pub agent_a_critique: String,
    /// Agent B's critique of agent A's draft
    pub agent_b_critique: String,
    /// Agent A's proposals followed by agent B's
    pub improvements: Vec<String>,
    /// Overlap with the previous round's merged text (0-100)
    pub convergence_score: u8,
}

impl RoundRecord {
    pub fn draft(&self, agent: AgentId) -> &str {
        match agent {
            AgentId::A => &self.agent_a_draft,
            AgentId::B => &self.agent_b_draft,
        }
    }

    pub fn critique(&self, agent: AgentId) -> &str {
        match agent {
            AgentId::A => &self.agent_a_critique,
            AgentId::B => &self.agent_b_critique,
        }
    }

    /// The text this round is scored on, and the baseline for the next round.
    pub fn merged_text(&self) -> String {
        merge_sections(&self.agent_a_draft, &self.agent_b_draft, &self.improvements)
    }
}

/// Agent A draft, agent B draft and the improvement list, separated by blank lines.
pub fn merge_sections(agent_a_draft: &str, agent_b_draft: &str, improvements: &[String]) -> String {
    format!(
        "{agent_a_draft}\n\n{agent_b_draft}\n\n{}",
        improvements.join("\n")
    )
}
