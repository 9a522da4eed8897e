//! # Regex Tokenizer

use crate::errors::TokenizationError;
use crate::tokenizers::WordTokenizer;
use crate::util::validators;
use std::sync::Arc;

/// Runs of word characters.
pub const WORD_PATTERN: &str = r"\w+";

/// Runs of word characters, or runs of punctuation.
///
/// ``"Don't stop."`` splits as ``["Don", "'", "t", "stop", "."]``.
pub const WORD_PUNCT_PATTERN: &str = r"\w+|[^\w\s]+";

/// A [`WordTokenizer`] which emits every match of a regex pattern.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    regex: Arc<fancy_regex::Regex>,
}

impl RegexTokenizer {
    /// Compile a new tokenizer from a pattern.
    pub fn new<S: AsRef<str>>(pattern: S) -> anyhow::Result<Self> {
        let regex = validators::try_regex(pattern.as_ref())?;
        Ok(Self::from_regex(regex))
    }

    /// Wrap an already compiled regex.
    pub fn from_regex<R: Into<Arc<fancy_regex::Regex>>>(regex: R) -> Self {
        Self {
            regex: regex.into(),
        }
    }

    /// Tokenizer over [`WORD_PATTERN`].
    pub fn word() -> anyhow::Result<Self> {
        Self::new(WORD_PATTERN)
    }

    /// Tokenizer over [`WORD_PUNCT_PATTERN`].
    pub fn word_punct() -> anyhow::Result<Self> {
        Self::new(WORD_PUNCT_PATTERN)
    }

    /// Get the regex pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl WordTokenizer for RegexTokenizer {
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<&'a str>, TokenizationError> {
        let mut tokens = Vec::new();
        for mat in self.regex.find_iter(text) {
            tokens.push(mat?.as_str());
        }
        Ok(tokens)
    }
}
