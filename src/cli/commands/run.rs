//! Implementation of the `dialectic run` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::display::{bullet_section, colored_diff, heading, round_table};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AlignmentSummary, Config, Request, RunOutcome};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::templates::CannedGenerationHooks;
use crate::services::{OrchestrationEngine, TextAligner};

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// What the deliverable is for
    #[arg(long, conflicts_with_all = ["request", "example"])]
    pub purpose: Option<String>,

    /// Desired output format
    #[arg(long, conflicts_with_all = ["request", "example"])]
    pub format: Option<String>,

    /// Subject domain (defaults to "Any")
    #[arg(long, conflicts_with_all = ["request", "example"])]
    pub domain: Option<String>,

    /// Constraints to respect (defaults to "None")
    #[arg(long, conflicts_with_all = ["request", "example"])]
    pub constraints: Option<String>,

    /// Read the request from a YAML or JSON file
    #[arg(long, short, conflicts_with = "example")]
    pub request: Option<PathBuf>,

    /// Use the built-in sample request
    #[arg(long)]
    pub example: bool,

    /// Override orchestration.max_rounds
    #[arg(long)]
    pub max_rounds: Option<u32>,

    /// Override orchestration.convergence_threshold
    #[arg(long)]
    pub threshold: Option<u8>,
}

impl RunArgs {
    /// Resolve the request from flags, a request file or the sample.
    pub async fn resolve_request(&self) -> Result<Request> {
        let request = if self.example {
            Request::example()
        } else if let Some(path) = &self.request {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read request file {}", path.display()))?;
            serde_yaml::from_str(&raw)
                .with_context(|| format!("Failed to parse request file {}", path.display()))?
        } else {
            let (Some(purpose), Some(format)) = (&self.purpose, &self.format) else {
                anyhow::bail!("Provide --purpose and --format, --request <file>, or --example");
            };
            let mut request = Request::new(purpose.as_str(), format.as_str());
            if let Some(domain) = &self.domain {
                request = request.with_domain(domain.as_str());
            }
            if let Some(constraints) = &self.constraints {
                request = request.with_constraints(constraints.as_str());
            }
            request
        };

        request.validate()?;
        Ok(request)
    }

    /// Apply `--max-rounds` / `--threshold` on top of loaded configuration.
    pub fn apply_overrides(&self, config: &Config) -> Result<Config> {
        let mut config = config.clone();
        if let Some(max_rounds) = self.max_rounds {
            config.orchestration.max_rounds = max_rounds;
        }
        if let Some(threshold) = self.threshold {
            config.orchestration.convergence_threshold = threshold;
        }
        ConfigLoader::validate(&config)?;
        Ok(config)
    }
}

#[derive(Debug, Serialize)]
pub struct RunOutput {
    #[serde(flatten)]
    pub outcome: RunOutcome,
    #[serde(skip)]
    pub threshold: u8,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        let outcome = &self.outcome;
        let state = &outcome.final_state;
        let mut sections = vec![
            format!(
                "{} after {} round(s), score {} (threshold {})",
                heading(&format!("Run {}", outcome.phase)),
                state.iteration_count,
                state.convergence_score,
                self.threshold
            ),
            round_table(&outcome.history, self.threshold).to_string(),
            format!("Intent: {}\nLast note: {}", state.intent, state.last_feedback_note),
        ];

        if let Some(last) = outcome.last_round() {
            let tokens = TextAligner::align_round(last);
            let summary = AlignmentSummary::from_tokens(&tokens);
            sections.push(format!(
                "{}\n{}\n({} same, {} added, {} removed)",
                heading("Last drafts (A -> B)"),
                colored_diff(&tokens),
                summary.same,
                summary.added,
                summary.removed
            ));
        }

        sections.push(format!("{}\n{}", heading("Final prompt"), outcome.final_text));

        let changes: Vec<String> = outcome
            .change_log
            .iter()
            .map(|entry| format!("{} -> {}", entry.before, entry.after))
            .collect();
        sections.push(bullet_section("Change log", &changes));
        sections.push(bullet_section("Rationale", &outcome.rationale()));
        sections.push(bullet_section("Risks", &outcome.risks));
        sections.push(bullet_section("Tips", &outcome.tips));

        sections.join("\n\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.outcome).unwrap_or_default()
    }
}

pub async fn execute(args: RunArgs, config: &Config, json_mode: bool) -> Result<()> {
    let request = args.resolve_request().await?;
    let config = args.apply_overrides(config)?;
    let threshold = config.orchestration.convergence_threshold;

    let engine = OrchestrationEngine::new(
        Arc::new(CannedGenerationHooks::new()),
        config.orchestration,
    );
    let outcome = engine
        .run(&request)
        .await
        .context("Orchestration run failed")?;

    output(&RunOutput { outcome, threshold }, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RequestError;
    use std::io::Write;

    #[tokio::test]
    async fn test_resolve_request_from_flags() {
        let args = RunArgs {
            purpose: Some("Summarize a paper.".to_string()),
            format: Some("Three bullets.".to_string()),
            domain: Some("Biology".to_string()),
            ..RunArgs::default()
        };

        let request = args.resolve_request().await.unwrap();
        assert_eq!(request.purpose, "Summarize a paper.");
        assert_eq!(request.domain_or_default(), "Biology");
        assert_eq!(request.constraints_or_default(), "None");
    }

    #[tokio::test]
    async fn test_resolve_request_requires_purpose_and_format() {
        let args = RunArgs {
            purpose: Some("Summarize a paper.".to_string()),
            ..RunArgs::default()
        };
        assert!(args.resolve_request().await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_request_rejects_blank_purpose() {
        let args = RunArgs {
            purpose: Some("   ".to_string()),
            format: Some("List.".to_string()),
            ..RunArgs::default()
        };
        let err = args.resolve_request().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RequestError>(),
            Some(RequestError::EmptyPurpose)
        ));
    }

    #[tokio::test]
    async fn test_resolve_request_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "purpose: Draft a memo.\nformat: One page.\nconstraints: Formal tone.").unwrap();
        file.flush().unwrap();

        let args = RunArgs {
            request: Some(file.path().to_path_buf()),
            ..RunArgs::default()
        };
        let request = args.resolve_request().await.unwrap();
        assert_eq!(request.format, "One page.");
        assert_eq!(request.constraints_or_default(), "Formal tone.");
        assert_eq!(request.domain_or_default(), "Any");
    }

    #[tokio::test]
    async fn test_resolve_request_example() {
        let args = RunArgs {
            example: true,
            ..RunArgs::default()
        };
        assert_eq!(args.resolve_request().await.unwrap(), Request::example());
    }

    #[test]
    fn test_apply_overrides() {
        let args = RunArgs {
            max_rounds: Some(5),
            threshold: Some(60),
            ..RunArgs::default()
        };
        let config = args.apply_overrides(&Config::default()).unwrap();
        assert_eq!(config.orchestration.max_rounds, 5);
        assert_eq!(config.orchestration.convergence_threshold, 60);
    }

    #[test]
    fn test_apply_overrides_validates() {
        let args = RunArgs {
            threshold: Some(150),
            ..RunArgs::default()
        };
        assert!(args.apply_overrides(&Config::default()).is_err());
    }

    #[tokio::test]
    async fn test_run_output_human_and_json() {
        let engine = OrchestrationEngine::new(
            Arc::new(CannedGenerationHooks::new()),
            Config::default().orchestration,
        );
        let outcome = engine.run(&Request::example()).await.unwrap();
        let output = RunOutput {
            outcome,
            threshold: 88,
        };

        let human = console::strip_ansi_codes(&output.to_human()).to_string();
        assert!(human.contains("Run exhausted after 3 round(s)"));
        assert!(human.contains("Final prompt"));
        assert!(human.contains("Risks"));

        let json = output.to_json();
        assert_eq!(json["history"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["final_state"]["iteration_count"], 3);
    }
}
