//! # Character Filter Tokenizers

use crate::errors::TokenizationError;
use crate::tokenizers::WordTokenizer;
use ahash::AHashSet;

/// Punctuation removed by Keras' ``text_to_word_sequence``.
pub const KERAS_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// A [`WordTokenizer`] which splits on whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl WordTokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<&'a str>, TokenizationError> {
        Ok(text.split_whitespace().collect())
    }
}

/// A [`WordTokenizer`] which splits on whitespace and on a set of filter chars.
///
/// Filter chars never appear in the output.
#[derive(Debug, Clone)]
pub struct FilterTokenizer {
    filters: AHashSet<char>,
}

impl Default for FilterTokenizer {
    fn default() -> Self {
        Self::new(KERAS_FILTERS.chars())
    }
}

impl FilterTokenizer {
    /// Create a tokenizer for the given filter chars.
    pub fn new<I: IntoIterator<Item = char>>(filters: I) -> Self {
        Self {
            filters: filters.into_iter().collect(),
        }
    }

    /// Is this char a split point?
    pub fn is_split(
        &self,
        c: char,
    ) -> bool {
        c.is_whitespace() || self.filters.contains(&c)
    }
}

impl WordTokenizer for FilterTokenizer {
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Result<Vec<&'a str>, TokenizationError> {
        Ok(text
            .split(|c: char| self.is_split(c))
            .filter(|s| !s.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        assert_eq!(
            WhitespaceTokenizer
                .tokenize("  the cat\tsat\n on, the mat ")
                .unwrap(),
            vec!["the", "cat", "sat", "on,", "the", "mat"]
        );
        assert!(WhitespaceTokenizer.tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_keras_filters() {
        let tokenizer = FilterTokenizer::default();
        assert_eq!(
            tokenizer
                .tokenize("Don't be fooled by the dark sounding name, Mr. Jone's Orphanage!")
                .unwrap(),
            vec![
                "Don't",
                "be",
                "fooled",
                "by",
                "the",
                "dark",
                "sounding",
                "name",
                "Mr",
                "Jone's",
                "Orphanage"
            ]
        );
    }

    #[test]
    fn test_custom_filters() {
        let tokenizer = FilterTokenizer::new(['-', '/']);
        assert!(tokenizer.is_split('-'));
        assert!(tokenizer.is_split(' '));
        assert!(!tokenizer.is_split(','));

        assert_eq!(
            tokenizer.tokenize("a-b/c, d").unwrap(),
            vec!["a", "b", "c,", "d"]
        );
    }
}
