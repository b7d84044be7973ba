use serde::{Deserialize, Serialize};

/// An explanatory before/after note attached to the final output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    pub before: String,
    pub after: String,
    pub reason: String,
}

impl ChangeLogEntry {
    pub fn new(
        before: impl Into<String>,
        after: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            reason: reason.into(),
        }
    }

    /// The structural changes every synthesized prompt applies.
    pub fn standard() -> Vec<Self> {
        vec![
            Self::new(
                "Implicit instructions",
                "Priority-tagged MUST/SHOULD/OPTIONAL hierarchy",
                "Improves instruction hierarchy and controllability.",
            ),
            Self::new(
                "Generic output description",
                "Explicit output sections with labeled bullets",
                "Boosts clarity and reduces ambiguity.",
            ),
            Self::new(
                "No validation layer",
                "Verification checklist and risk surfacing",
                "Prevents failure modes and omissions.",
            ),
        ]
    }
}

/// Known risks of using the synthesized prompt.
pub const RISKS: [&str; 3] = [
    "Domain-specific data may require clarification.",
    "Output length could exceed constraints if inputs are verbose.",
    "Assumption surfacing depends on user-provided context.",
];

/// Usage tips for the synthesized prompt.
pub const TIPS: [&str; 3] = [
    "Best with models that support instruction hierarchy (GPT-4 class, Gemini Pro, Claude).",
    "Use temperature 0.2-0.4 for precision and consistency.",
    "Provide supplemental context (data, constraints) for top-tier results.",
];
