//! Human-readable rendering: round tables, coloured diffs and bullet sections.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::style;

use crate::domain::models::{AlignmentToken, RoundRecord, TokenKind};

use super::output::truncate;

const PREVIEW_CHARS: usize = 48;

/// Create a standard list table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// One row per round: score, draft previews and improvement count.
pub fn round_table(history: &[RoundRecord], threshold: u8) -> Table {
    let mut table = list_table(&["round", "score", "agent a draft", "agent b draft", "improvements"]);
    for record in history {
        table.add_row(vec![
            Cell::new(record.round_number),
            Cell::new(score_label(record.convergence_score, threshold)),
            Cell::new(preview(&record.agent_a_draft)),
            Cell::new(preview(&record.agent_b_draft)),
            Cell::new(record.improvements.len()),
        ]);
    }
    table
}

/// Coloured word diff: added text green, removed text red and struck through.
pub fn colored_diff(tokens: &[AlignmentToken]) -> String {
    tokens
        .iter()
        .map(|token| match token.kind {
            TokenKind::Same => token.value.clone(),
            TokenKind::Added => style(&token.value).green().to_string(),
            TokenKind::Removed => style(&token.value).red().strikethrough().to_string(),
        })
        .collect()
}

/// A bold heading followed by one indented bullet per item.
pub fn bullet_section<S: AsRef<str>>(title: &str, items: &[S]) -> String {
    let mut lines = vec![style(title).bold().to_string()];
    lines.extend(items.iter().map(|item| format!("  - {}", item.as_ref())));
    lines.join("\n")
}

pub fn heading(title: &str) -> String {
    style(title).bold().underlined().to_string()
}

fn score_label(score: u8, threshold: u8) -> String {
    if score >= threshold {
        style(score).green().bold().to_string()
    } else {
        style(score).yellow().to_string()
    }
}

fn preview(text: &str) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&flattened, PREVIEW_CHARS)
}
