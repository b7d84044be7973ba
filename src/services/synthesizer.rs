//! Final synthesis: folds the last round's drafts into one deliverable prompt.

use crate::domain::models::Request;

/// Formats the synthesized deliverable. Pure; never touches run state.
pub struct Synthesizer;

impl Synthesizer {
    pub fn synthesize(agent_a_draft: &str, agent_b_draft: &str, request: &Request) -> String {
        format!(
            "You are an expert prompt engineer tasked with creating a single, elite prompt.

User intent: {purpose}
Desired output: {format}
Domain: {domain}
Constraints: {constraints}

Instructions (priority order):
1) MUST: Follow the specified output format exactly.
2) MUST: Surface assumptions and data gaps explicitly.
3) SHOULD: Use domain-accurate language and concise structure.
4) SHOULD: Include a short verification checklist.
5) OPTIONAL: Offer 1-2 questions if clarifications are required.

Output format:
- Section 1: Summary of intent
- Section 2: Structured response with labeled bullets
- Section 3: Risks, unknowns, and mitigation prompts
- Section 4: Verification checklist

Quality checks:
- Ensure clarity, instruction hierarchy, and role anchoring are explicit.
- Prevent failure modes (missing constraints, vague outputs, unsupported claims).
- Keep within length/tone constraints.

Context for reference (Agent A):
{agent_a_draft}

Context for reference (Agent B):
{agent_b_draft}",
            purpose = request.purpose,
            format = request.format,
            domain = request.domain_or_default(),
            constraints = request.constraints_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_embeds_request_and_drafts() {
        let request = Request::example();
        let text = Synthesizer::synthesize("DRAFT-A", "DRAFT-B", &request);

        assert!(text.starts_with("You are an expert prompt engineer"));
        assert!(text.contains(&format!("User intent: {}\n", request.purpose)));
        assert!(text.contains("Domain: Consumer tech / fitness\n"));
        assert!(text.ends_with("Context for reference (Agent B):\nDRAFT-B"));
        assert!(text.contains("Context for reference (Agent A):\nDRAFT-A\n\n"));
    }

    #[test]
    fn test_synthesis_fallbacks() {
        let request = Request::new("p", "f");
        let text = Synthesizer::synthesize("a", "b", &request);

        assert!(text.contains("\nDomain: Any\n"));
        assert!(text.contains("\nConstraints: None\n"));
    }

    #[test]
    fn test_priority_order_and_sections() {
        let text = Synthesizer::synthesize("a", "b", &Request::new("p", "f"));

        let must = text.find("1) MUST").unwrap();
        let should = text.find("3) SHOULD").unwrap();
        let optional = text.find("5) OPTIONAL").unwrap();
        assert!(must < should && should < optional);
        for section in 1..=4 {
            assert!(text.contains(&format!("- Section {section}:")));
        }
    }
}
