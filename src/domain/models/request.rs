use serde::{Deserialize, Serialize};

use crate::domain::errors::RequestError;

/// Fallback rendered when the request names no domain.
pub const ANY_DOMAIN: &str = "Any";

/// Fallback rendered in drafts and synthesis when the request has no constraints.
pub const NO_CONSTRAINTS: &str = "None";

/// Fallback used in the derived intent line when the request has no constraints.
const NO_CONSTRAINTS_INTENT: &str = "none";

/// A structured refinement request. Immutable input to a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// What the deliverable is for
    pub purpose: String,

    /// Desired output format
    pub format: String,

    /// Subject domain, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Free-form constraints (tone, length, ...), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

impl Request {
    pub fn new(purpose: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            purpose: purpose.into(),
            format: format.into(),
            domain: None,
            constraints: None,
        }
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    /// The sample market-research request used by `dialectic example`.
    pub fn example() -> Self {
        Self::new(
            "Design a market research brief for a new AI-enabled fitness app.",
            "Provide a bullet-point brief with sections: audience, differentiation, risks, and next steps.",
        )
        .with_domain("Consumer tech / fitness")
        .with_constraints(
            "Executive tone, <= 350 words, avoid unverified claims, include data gaps.",
        )
    }

    /// Domain text, or `"Any"` when absent or blank.
    pub fn domain_or_default(&self) -> &str {
        non_blank(self.domain.as_deref()).unwrap_or(ANY_DOMAIN)
    }

    /// Constraints text, or `"None"` when absent or blank.
    pub fn constraints_or_default(&self) -> &str {
        non_blank(self.constraints.as_deref()).unwrap_or(NO_CONSTRAINTS)
    }

    /// One-line intent summary recorded in the run state.
    ///
    /// Format: `<purpose> <format> Domain: <domain|Any>. Constraints: <constraints|none>.`
    pub fn intent(&self) -> String {
        let constraints =
            non_blank(self.constraints.as_deref()).unwrap_or(NO_CONSTRAINTS_INTENT);
        format!(
            "{} {} Domain: {}. Constraints: {}.",
            self.purpose,
            self.format,
            self.domain_or_default(),
            constraints
        )
        .trim()
        .to_string()
    }

    /// Check that purpose and format are present.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.purpose.trim().is_empty() {
            return Err(RequestError::EmptyPurpose);
        }
        if self.format.trim().is_empty() {
            return Err(RequestError::EmptyFormat);
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_with_all_fields() {
        let request = Request::new("Write a haiku.", "Three lines.")
            .with_domain("Poetry")
            .with_constraints("No rhymes");

        assert_eq!(
            request.intent(),
            "Write a haiku. Three lines. Domain: Poetry. Constraints: No rhymes."
        );
    }

    #[test]
    fn test_intent_uses_literal_fallbacks() {
        let request = Request::new("Write a haiku.", "Three lines.");
        assert_eq!(
            request.intent(),
            "Write a haiku. Three lines. Domain: Any. Constraints: none."
        );
    }

    #[test]
    fn test_intent_is_trimmed() {
        let request = Request::new("  Summarize", "bullets");
        assert!(request.intent().starts_with("Summarize bullets"));
    }

    #[test]
    fn test_blank_optional_fields_fall_back() {
        let request = Request::new("p", "f").with_domain("   ").with_constraints("");
        assert_eq!(request.domain_or_default(), "Any");
        assert_eq!(request.constraints_or_default(), "None");
    }

    #[test]
    fn test_validate_rejects_empty_purpose_and_format() {
        assert_eq!(
            Request::new(" ", "f").validate(),
            Err(RequestError::EmptyPurpose)
        );
        assert_eq!(
            Request::new("p", "").validate(),
            Err(RequestError::EmptyFormat)
        );
        assert!(Request::example().validate().is_ok());
    }

    #[test]
    fn test_yaml_request_with_optional_fields_missing() {
        let yaml = "purpose: Plan a launch\nformat: Numbered list\n";
        let request: Request = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(request.purpose, "Plan a launch");
        assert!(request.domain.is_none());
        assert!(request.constraints.is_none());
    }
}
