//! Vocabulary-retention score between successive merged outputs.
//!
//! The score is the share of the previous round's distinct words that
//! survive into the current round. It is a coarse stopping signal: it ignores
//! word order and counts near-duplicate vocabulary as retained, so it must not
//! be read as semantic equivalence.

use std::collections::HashSet;

/// Computes the 0-100 convergence score for a round.
pub struct ConvergenceScorer;

impl ConvergenceScorer {
    /// Score `current` against `previous`.
    ///
    /// Absent or empty `previous` (the first round) scores 0.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn score(previous: Option<&str>, current: &str) -> u8 {
        let Some(previous) = previous.filter(|p| !p.is_empty()) else {
            return 0;
        };

        let previous_words: HashSet<&str> = previous.split_whitespace().collect();
        let current_words: HashSet<&str> = current.split_whitespace().collect();
        let retained = previous_words.intersection(&current_words).count();

        let overlap = retained as f64 / previous_words.len().max(1) as f64;
        (overlap * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
