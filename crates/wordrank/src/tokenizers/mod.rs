//! # Word Tokenizers
//!
//! The encoder treats tokenization as an external collaborator: anything
//! implementing [`WordTokenizer`] can be injected into
//! [`crate::encoders::CorpusEncoder::encode`].
//!
//! The implementations here are simple splitters:
//! * [`RegexTokenizer`] - every regex match is a token.
//! * [`WhitespaceTokenizer`] - split on whitespace.
//! * [`FilterTokenizer`] - split on whitespace and a set of filter characters.
//!
//! [`SentenceSplitter`] breaks a paragraph into a corpus of sentences.

pub mod filter_tokenizer;
pub mod regex_tokenizer;
pub mod sentence_splitter;

pub use filter_tokenizer::{FilterTokenizer, KERAS_FILTERS, WhitespaceTokenizer};
pub use regex_tokenizer::{RegexTokenizer, WORD_PATTERN, WORD_PUNCT_PATTERN};
pub use sentence_splitter::{SENTENCE_BOUNDARY_PATTERN, SentenceSplitter};

use crate::errors::TokenizationError;
use std::sync::Arc;

/// Splits a sentence into word-level tokens.
///
/// Punctuation and contraction handling are the tokenizer's concern;
/// case-normalization and filtering happen downstream.
pub trait WordTokenizer: Send + Sync {
    /// Split text into ordered word tokens.
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<&'a str>, TokenizationError>;
}

impl<W: WordTokenizer + ?Sized> WordTokenizer for &W {
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<&'a str>, TokenizationError> {
        (**self).tokenize(text)
    }
}

impl<W: WordTokenizer + ?Sized> WordTokenizer for Box<W> {
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<&'a str>, TokenizationError> {
        (**self).tokenize(text)
    }
}

impl<W: WordTokenizer + ?Sized> WordTokenizer for Arc<W> {
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<&'a str>, TokenizationError> {
        (**self).tokenize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dyn_dispatch() {
        let tokenizers: Vec<Box<dyn WordTokenizer>> = vec![
            Box::new(WhitespaceTokenizer),
            Box::new(FilterTokenizer::default()),
            Box::new(RegexTokenizer::new(WORD_PATTERN).unwrap()),
        ];

        for tokenizer in &tokenizers {
            assert_eq!(
                tokenizer.tokenize("hello world").unwrap(),
                vec!["hello", "world"]
            );
        }

        let shared: Arc<dyn WordTokenizer> = Arc::new(WhitespaceTokenizer);
        assert_eq!(shared.tokenize("a b").unwrap(), vec!["a", "b"]);
    }
}
