//! Implementation of the `dialectic diff` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::display::colored_diff;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AlignmentSummary, AlignmentToken, TokenKind};
use crate::services::TextAligner;

#[derive(Args, Debug, Default)]
pub struct DiffArgs {
    /// Source text
    #[arg(required_unless_present = "file_a", conflicts_with = "file_a")]
    pub a: Option<String>,

    /// Target text
    #[arg(required_unless_present = "file_b", conflicts_with = "file_b")]
    pub b: Option<String>,

    /// Read the source text from a file
    #[arg(long)]
    pub file_a: Option<PathBuf>,

    /// Read the target text from a file
    #[arg(long)]
    pub file_b: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct DiffOutput {
    pub tokens: Vec<AlignmentToken>,
    pub summary: AlignmentSummary,
    pub markup: String,
}

impl DiffOutput {
    pub fn new(source: &str, target: &str) -> Self {
        let tokens = TextAligner::align(source, target);
        Self {
            summary: AlignmentSummary::from_tokens(&tokens),
            markup: TextAligner::render_markup(&tokens),
            tokens,
        }
    }
}

impl CommandOutput for DiffOutput {
    fn to_human(&self) -> String {
        if self.tokens.iter().all(|t| t.kind == TokenKind::Same) {
            return format!("{}\n\nTexts are identical.", colored_diff(&self.tokens));
        }
        if self.summary.is_identical() {
            return format!("{}\n\nWhitespace differs only.", colored_diff(&self.tokens));
        }
        format!(
            "{}\n\n{} same, {} added, {} removed",
            colored_diff(&self.tokens),
            self.summary.same,
            self.summary.added,
            self.summary.removed
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

async fn load_text(inline: Option<&str>, path: Option<&Path>) -> Result<String> {
    match (inline, path) {
        (_, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        (Some(text), None) => Ok(text.to_string()),
        (None, None) => anyhow::bail!("Missing text to compare"),
    }
}

pub async fn execute(args: DiffArgs, json_mode: bool) -> Result<()> {
    let source = load_text(args.a.as_deref(), args.file_a.as_deref()).await?;
    let target = load_text(args.b.as_deref(), args.file_b.as_deref()).await?;

    output(&DiffOutput::new(&source, &target), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_diff_output_scenario() {
        let diff = DiffOutput::new("the quick fox", "the slow fox");
        assert_eq!(diff.markup, "the [-quick-]{+slow+} fox");
        assert_eq!(
            diff.summary,
            AlignmentSummary {
                same: 2,
                added: 1,
                removed: 1
            }
        );
    }

    #[test]
    fn test_diff_output_human_identical() {
        let diff = DiffOutput::new("same words", "same words");
        assert!(diff.to_human().ends_with("Texts are identical."));
    }

    #[test]
    fn test_diff_output_human_whitespace_only() {
        let diff = DiffOutput::new("same  words", "same words");
        assert!(diff.to_human().ends_with("Whitespace differs only."));
    }

    #[test]
    fn test_diff_output_json_tokens() {
        let json = DiffOutput::new("a", "b").to_json();
        assert_eq!(json["tokens"][0]["kind"], "removed");
        assert_eq!(json["tokens"][1]["kind"], "added");
        assert_eq!(json["summary"]["same"], 0);
    }

    #[tokio::test]
    async fn test_load_text_prefers_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "from file").unwrap();
        file.flush().unwrap();

        let text = load_text(None, Some(file.path())).await.unwrap();
        assert_eq!(text, "from file");
        assert_eq!(load_text(Some("inline"), None).await.unwrap(), "inline");
        assert!(load_text(None, None).await.is_err());
    }
}
