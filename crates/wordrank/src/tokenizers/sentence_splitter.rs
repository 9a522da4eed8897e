//! # Sentence Splitter

use crate::errors::TokenizationError;
use crate::util::validators;
use std::sync::Arc;

/// Whitespace following terminal punctuation.
pub const SENTENCE_BOUNDARY_PATTERN: &str = r"(?<=[.!?])\s+";

/// Splits text into sentences at boundary matches.
///
/// Sentences are trimmed; empty sentences are dropped.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    boundary: Arc<fancy_regex::Regex>,
}

impl SentenceSplitter {
    /// Create a splitter on [`SENTENCE_BOUNDARY_PATTERN`].
    pub fn new() -> anyhow::Result<Self> {
        Self::with_boundary_pattern(SENTENCE_BOUNDARY_PATTERN)
    }

    /// Create a splitter with a custom boundary pattern.
    pub fn with_boundary_pattern<S: AsRef<str>>(pattern: S) -> anyhow::Result<Self> {
        Ok(Self {
            boundary: Arc::new(validators::try_regex(pattern.as_ref())?),
        })
    }

    /// Get the boundary pattern.
    pub fn pattern(&self) -> &str {
        self.boundary.as_str()
    }

    /// Split text into sentences.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<&'a str>, TokenizationError> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for mat in self.boundary.find_iter(text) {
            let mat = mat?;
            push_trimmed(&mut sentences, &text[start..mat.start()]);
            start = mat.end();
        }
        push_trimmed(&mut sentences, &text[start..]);
        Ok(sentences)
    }
}

fn push_trimmed<'a>(
    sentences: &mut Vec<&'a str>,
    piece: &'a str,
) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}
