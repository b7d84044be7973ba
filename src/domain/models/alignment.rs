use serde::{Deserialize, Serialize};

/// How a token relates the source text to the target text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Present in both texts
    Same,
    /// Present only in the target text
    Added,
    /// Present only in the source text
    Removed,
}

/// One word or whitespace run in an alignment script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentToken {
    pub kind: TokenKind,
    pub value: String,
}

impl AlignmentToken {
    pub fn same(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Same,
            value: value.into(),
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Added,
            value: value.into(),
        }
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Removed,
            value: value.into(),
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.value.chars().all(char::is_whitespace)
    }
}

/// Word counts of an alignment, whitespace tokens excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSummary {
    pub same: usize,
    pub added: usize,
    pub removed: usize,
}

impl AlignmentSummary {
    pub fn from_tokens(tokens: &[AlignmentToken]) -> Self {
        tokens
            .iter()
            .filter(|t| !t.is_whitespace())
            .fold(Self::default(), |mut acc, t| {
                match t.kind {
                    TokenKind::Same => acc.same += 1,
                    TokenKind::Added => acc.added += 1,
                    TokenKind::Removed => acc.removed += 1,
                }
                acc
            })
    }

    pub const fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}
