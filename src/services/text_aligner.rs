//! Word-level alignment of two texts via longest-common-subsequence matching.
//!
//! Texts are split into alternating runs of non-whitespace and whitespace so
//! that spacing survives the round trip: concatenating the `same` and
//! `removed` tokens reproduces the source text, and concatenating the `same`
//! and `added` tokens reproduces the target text.
//!
//! Cost is O(|A|·|B|) in time and memory over token counts. Inputs in the low
//! thousands of tokens are fine; larger documents should be chunked first.

use crate::domain::models::{AlignmentToken, RoundRecord, TokenKind};

/// Computes and renders word-level alignments.
pub struct TextAligner;

impl TextAligner {
    /// Align `source` against `target`.
    ///
    /// Backtracking walks from the bottom-right of the LCS table. Equal tokens
    /// move diagonally; otherwise the walk moves up (emitting `removed`) when
    /// the upper cell is at least the left cell, and left (emitting `added`)
    /// otherwise. Within each run of consecutive changes, removals are listed
    /// before additions.
    pub fn align(source: &str, target: &str) -> Vec<AlignmentToken> {
        let source_tokens = Self::tokenize(source);
        let target_tokens = Self::tokenize(target);
        let table = LcsTable::build(&source_tokens, &target_tokens);
        order_hunks(backtrack(&table, &source_tokens, &target_tokens))
    }

    /// Align the two agent drafts of a round (A is the source).
    pub fn align_round(record: &RoundRecord) -> Vec<AlignmentToken> {
        Self::align(&record.agent_a_draft, &record.agent_b_draft)
    }

    /// Split text into maximal runs of whitespace and non-whitespace.
    ///
    /// Empty text yields no tokens.
    pub fn tokenize(text: &str) -> Vec<&str> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut in_whitespace: Option<bool> = None;

        for (idx, ch) in text.char_indices() {
            let is_ws = ch.is_whitespace();
            if in_whitespace.is_some_and(|prev| prev != is_ws) {
                tokens.push(&text[start..idx]);
                start = idx;
            }
            in_whitespace = Some(is_ws);
        }

        if start < text.len() {
            tokens.push(&text[start..]);
        }
        tokens
    }

    /// Rebuild the source text from `same` and `removed` tokens.
    pub fn source_text(tokens: &[AlignmentToken]) -> String {
        collect_kinds(tokens, TokenKind::Removed)
    }

    /// Rebuild the target text from `same` and `added` tokens.
    pub fn target_text(tokens: &[AlignmentToken]) -> String {
        collect_kinds(tokens, TokenKind::Added)
    }

    /// Plain-text word-diff rendering: `[-removed-]` and `{+added+}`.
    pub fn render_markup(tokens: &[AlignmentToken]) -> String {
        tokens
            .iter()
            .map(|token| match token.kind {
                TokenKind::Same => token.value.clone(),
                TokenKind::Added => format!("{{+{}+}}", token.value),
                TokenKind::Removed => format!("[-{}-]", token.value),
            })
            .collect()
    }
}

fn collect_kinds(tokens: &[AlignmentToken], changed: TokenKind) -> String {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Same || t.kind == changed)
        .map(|t| t.value.as_str())
        .collect()
}

/// Row-major `(|A|+1) x (|B|+1)` table of LCS lengths.
struct LcsTable {
    width: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build(source: &[&str], target: &[&str]) -> Self {
        let width = target.len() + 1;
        let mut cells = vec![0; (source.len() + 1) * width];

        for i in 1..=source.len() {
            for j in 1..=target.len() {
                cells[i * width + j] = if source[i - 1] == target[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }
}

fn backtrack(table: &LcsTable, source: &[&str], target: &[&str]) -> Vec<AlignmentToken> {
    let mut i = source.len();
    let mut j = target.len();
    let mut reversed = Vec::with_capacity(source.len() + target.len());

    while i > 0 && j > 0 {
        if source[i - 1] == target[j - 1] {
            reversed.push(AlignmentToken::same(source[i - 1]));
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            reversed.push(AlignmentToken::removed(source[i - 1]));
            i -= 1;
        } else {
            reversed.push(AlignmentToken::added(target[j - 1]));
            j -= 1;
        }
    }

    while i > 0 {
        reversed.push(AlignmentToken::removed(source[i - 1]));
        i -= 1;
    }
    while j > 0 {
        reversed.push(AlignmentToken::added(target[j - 1]));
        j -= 1;
    }

    reversed.reverse();
    reversed
}

/// Stable-partition each run of non-`same` tokens into removals then additions.
fn order_hunks(tokens: Vec<AlignmentToken>) -> Vec<AlignmentToken> {
    let mut ordered = Vec::with_capacity(tokens.len());
    let mut pending_added = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Removed => ordered.push(token),
            TokenKind::Added => pending_added.push(token),
            TokenKind::Same => {
                ordered.append(&mut pending_added);
                ordered.push(token);
            }
        }
    }

    ordered.append(&mut pending_added);
    ordered
}
