//! Deterministic template-backed generation hooks.
//!
//! Agent A plays a practical prompt optimizer, agent B a structured reasoning
//! prompt architect. Each round a draft picks the next focus set for its
//! agent, so successive rounds share the request header and improvement
//! vocabulary but not their bullets.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::domain::models::{AgentId, Request};
use crate::domain::ports::GenerationHooks;

/// Display template describing an agent's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentTemplate {
    pub agent: AgentId,
    pub title: &'static str,
    pub role: &'static str,
    pub objective: &'static str,
    pub process: [&'static str; 4],
}

impl AgentTemplate {
    pub const fn for_agent(agent: AgentId) -> &'static Self {
        match agent {
            AgentId::A => &AGENT_A_TEMPLATE,
            AgentId::B => &AGENT_B_TEMPLATE,
        }
    }

    /// Multi-line rendering: role, objective and numbered process steps.
    pub fn render(&self) -> String {
        let mut text = format!(
            "Role: {}\nObjective: {}\nProcess:",
            self.role, self.objective
        );
        for (idx, step) in self.process.iter().enumerate() {
            text.push_str(&format!("\n{}) {step}", idx + 1));
        }
        text
    }
}

const AGENT_A_TEMPLATE: AgentTemplate = AgentTemplate {
    agent: AgentId::A,
    title: "Agent A Template",
    role: "Practical prompt optimizer.",
    objective: "Deliver concise, feasible prompt improvements.",
    process: [
        "Draft prompt from user_intent.",
        "Flag real-world feasibility issues.",
        "Compress instructions without losing control.",
        "Provide critique of Agent B with concrete edits + why.",
    ],
};

const AGENT_B_TEMPLATE: AgentTemplate = AgentTemplate {
    agent: AgentId::B,
    title: "Agent B Template",
    role: "Structured reasoning prompt architect.",
    objective: "Build robust instruction hierarchy and failure-mode prevention.",
    process: [
        "Draft prompt with explicit steps and clarifying questions.",
        "Identify missing constraints or ambiguous scope.",
        "Offer critique of Agent A emphasizing logic gaps.",
        "Provide improvements + reasoning principles.",
    ],
};

/// Agent A focus bullets, one set per round (cycled).
const AGENT_A_FOCUS: [[&str; 4]; 3] = [
    [
        "Use direct instructions with minimal ambiguity.",
        "Keep only high-value steps.",
        "Include a short checklist for feasibility.",
        "End with a validation question for the user.",
    ],
    [
        "Compress repeated guidance into single imperatives.",
        "Flag any requirement that cannot be verified cheaply.",
        "Trim examples that do not change model behaviour.",
        "Close with one measurable acceptance test.",
    ],
    [
        "Lead with the deliverable before supporting context.",
        "State word budgets per section explicitly.",
        "Replace hedged wording with firm defaults.",
        "Ask the reader to confirm assumptions before drafting.",
    ],
];

/// Agent B focus bullets, one set per round (cycled).
const AGENT_B_FOCUS: [[&str; 4]; 3] = [
    [
        "Build a stepwise instruction hierarchy.",
        "Add guardrails against hallucinations.",
        "Specify output sections and ordering.",
        "Include a reflection step to catch gaps.",
    ],
    [
        "Number every step and tie it to an output section.",
        "Name the evidence standard expected for each claim.",
        "Add clarifying questions where scope is ambiguous.",
        "Reserve a final pass for constraint compliance.",
    ],
    [
        "Separate hard constraints from stylistic preferences.",
        "Map each risk to a concrete mitigation prompt.",
        "Define fallback behaviour when data is missing.",
        "End with a self-audit against the stated principles.",
    ],
];

const CRITIQUE_POINTS: [&str; 3] = [
    "Clarify ambiguous scope to prevent drift.",
    "Ensure instruction hierarchy is explicit.",
    "Add output controllability via numbered sections.",
];

/// Prompt-quality principles cited when justifying a critique.
pub const PRINCIPLES: [&str; 5] = [
    "Clarity",
    "Instruction hierarchy",
    "Role anchoring",
    "Output controllability",
    "Failure-mode prevention",
];

const IMPROVEMENTS: [&str; 3] = [
    "Add explicit instruction hierarchy with priority tags (must/should/optional).",
    "Replace vague verbs with action-oriented directives.",
    "Introduce a final verification checklist for completeness.",
];

/// Template-backed hooks: pure functions of their inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedGenerationHooks;

impl CannedGenerationHooks {
    pub const fn new() -> Self {
        Self
    }

    /// Render `agent`'s draft for `round` (1-based).
    pub fn render_draft(agent: AgentId, request: &Request, round: u32) -> String {
        let focus = match agent {
            AgentId::A => &AGENT_A_FOCUS,
            AgentId::B => &AGENT_B_FOCUS,
        };
        let set = &focus[round.saturating_sub(1) as usize % focus.len()];

        let mut draft = format!(
            "Goal: {}\nOutput format: {}\nDomain focus: {}\nConstraints: {}\n\nDraft ({}, round {round}):",
            request.purpose,
            request.format,
            request.domain_or_default(),
            request.constraints_or_default(),
            agent.letter(),
        );
        for bullet in set {
            draft.push_str("\n- ");
            draft.push_str(bullet);
        }
        draft
    }

    pub fn render_critique(agent: AgentId) -> String {
        format!(
            "{} critique of counterpart:\n- {}\nWhy it helps:\n- {} improve execution fidelity.",
            agent.label(),
            CRITIQUE_POINTS.join("\n- "),
            PRINCIPLES[..3].join(", ")
        )
    }

    pub fn render_improvements(agent: AgentId) -> Vec<String> {
        IMPROVEMENTS
            .iter()
            .map(|item| format!("{}: {item}", agent.label()))
            .collect()
    }
}

#[async_trait]
impl GenerationHooks for CannedGenerationHooks {
    async fn draft(&self, agent: AgentId, request: &Request, round: u32) -> Result<String> {
        Ok(Self::render_draft(agent, request, round))
    }

    async fn critique(&self, agent: AgentId, _counterpart_draft: &str) -> Result<String> {
        Ok(Self::render_critique(agent))
    }

    async fn propose_improvements(&self, agent: AgentId) -> Result<Vec<String>> {
        Ok(Self::render_improvements(agent))
    }
}
