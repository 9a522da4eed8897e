//! # Sentence Preprocessing
//!
//! The first pass of corpus encoding: tokenize each sentence, case-normalize
//! each token, and drop stopwords and short tokens.
//!
//! Filtering is local to each token; the cleaned form of a sentence never
//! depends on any other sentence.

use crate::errors::{EncodeError, TokenizationError};
use crate::stopwords::StopwordSet;
use crate::tokenizers::WordTokenizer;
use crate::types::{StringChunkType, TokenizedSentence};
use crate::util::validators;
use std::borrow::Cow;

/// Options for sentence preprocessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Tokens with fewer chars than this are dropped.
    pub min_token_len: usize,

    /// Whether tokens are lowercased before filtering.
    pub lowercase: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            min_token_len: crate::DEFAULT_MIN_TOKEN_LEN,
            lowercase: true,
        }
    }
}

impl PreprocessOptions {
    /// Set the minimum token length, in chars.
    pub fn with_min_token_len(
        self,
        min_token_len: usize,
    ) -> Self {
        Self {
            min_token_len,
            ..self
        }
    }

    /// Set the lowercase option.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Validate the options.
    pub fn validate(&self) -> anyhow::Result<()> {
        validators::try_min_token_len(self.min_token_len)?;
        Ok(())
    }

    /// Case-normalize a raw token, and return it if it survives filtering.
    pub fn normalize_token<'a>(
        &self,
        token: &'a str,
        stopwords: &StopwordSet,
    ) -> Option<Cow<'a, str>> {
        let token: Cow<'a, str> = if self.lowercase {
            Cow::Owned(token.to_lowercase())
        } else {
            Cow::Borrowed(token)
        };

        if stopwords.contains(&token) || token.chars().count() < self.min_token_len {
            None
        } else {
            Some(token)
        }
    }

    /// Tokenize and filter one sentence.
    pub fn clean_sentence<K, W>(
        &self,
        tokenizer: &W,
        stopwords: &StopwordSet,
        sentence: &str,
    ) -> Result<TokenizedSentence<K>, TokenizationError>
    where
        K: StringChunkType,
        W: WordTokenizer + ?Sized,
    {
        Ok(tokenizer
            .tokenize(sentence)?
            .into_iter()
            .filter_map(|token| self.normalize_token(token, stopwords))
            .map(|token| K::from(&*token))
            .collect())
    }

    /// Tokenize and filter every sentence of a corpus, preserving order.
    ///
    /// The first tokenizer failure aborts the whole corpus.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, tokenizer, stopwords, corpus))
    )]
    pub fn clean_corpus<K, W, I>(
        &self,
        tokenizer: &W,
        stopwords: &StopwordSet,
        corpus: I,
    ) -> Result<Vec<TokenizedSentence<K>>, EncodeError>
    where
        K: StringChunkType,
        W: WordTokenizer + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        corpus
            .into_iter()
            .enumerate()
            .map(|(idx, sentence)| {
                self.clean_sentence(tokenizer, stopwords, sentence.as_ref())
                    .map_err(|source| EncodeError::Tokenization {
                        sentence: idx,
                        source,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizers::{RegexTokenizer, WhitespaceTokenizer};
    use compact_str::CompactString;

    struct RefusingTokenizer;

    impl WordTokenizer for RefusingTokenizer {
        fn tokenize<'a>(
            &self,
            text: &'a str,
        ) -> Result<Vec<&'a str>, TokenizationError> {
            if text.contains('\u{0}') {
                Err(TokenizationError::Unsupported {
                    reason: "NUL byte".to_string(),
                })
            } else {
                Ok(text.split_whitespace().collect())
            }
        }
    }

    #[test]
    fn test_options() {
        let options = PreprocessOptions::default();
        assert_eq!(options.min_token_len, 3);
        assert!(options.lowercase);
        assert!(options.validate().is_ok());

        let options = options.with_min_token_len(5).with_lowercase(false);
        assert_eq!(options.min_token_len, 5);
        assert!(!options.lowercase);

        assert!(options.with_min_token_len(0).validate().is_err());
    }

    #[test]
    fn test_normalize_token() {
        let options = PreprocessOptions::default();
        let stopwords = StopwordSet::new(["the"]);

        assert_eq!(
            options.normalize_token("Barber", &stopwords).as_deref(),
            Some("barber")
        );
        assert_eq!(options.normalize_token("THE", &stopwords), None);
        assert_eq!(options.normalize_token("is", &stopwords), None);
        assert_eq!(
            options.normalize_token("cat", &stopwords).as_deref(),
            Some("cat")
        );

        // Length counts chars, not bytes.
        assert_eq!(
            options.normalize_token("Été", &stopwords).as_deref(),
            Some("été")
        );
        assert_eq!(options.normalize_token("né", &stopwords), None);

        let options = options.with_lowercase(false);
        assert_eq!(
            options.normalize_token("THE", &stopwords).as_deref(),
            Some("THE")
        );
    }

    #[test]
    fn test_clean_sentence() {
        let options = PreprocessOptions::default();
        let stopwords = StopwordSet::english();
        let tokenizer = RegexTokenizer::word_punct().unwrap();

        let cleaned: Vec<String> = options
            .clean_sentence(
                &tokenizer,
                &stopwords,
                "The Secret He Kept is huge secret.",
            )
            .unwrap();
        assert_eq!(cleaned, vec!["secret", "kept", "huge", "secret"]);

        let cleaned: Vec<CompactString> = options
            .clean_sentence(&tokenizer, &stopwords, "he Knew A Secret!")
            .unwrap();
        assert_eq!(cleaned, vec!["knew", "secret"]);

        let cleaned: Vec<String> = options
            .clean_sentence(&tokenizer, &stopwords, "")
            .unwrap();
        assert!(cleaned.is_empty());

        let cleaned: Vec<String> = options
            .clean_sentence(&tokenizer, &stopwords, "a an the to")
            .unwrap();
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_clean_corpus() {
        let options = PreprocessOptions::default();
        let stopwords = StopwordSet::new(["the", "a"]);

        let cleaned: Vec<Vec<String>> = options
            .clean_corpus(
                &WhitespaceTokenizer,
                &stopwords,
                ["the cat sat", "", "a dog ran"],
            )
            .unwrap();
        assert_eq!(
            cleaned,
            vec![
                vec!["cat".to_string(), "sat".to_string()],
                vec![],
                vec!["dog".to_string(), "ran".to_string()],
            ]
        );
    }

    #[test]
    fn test_clean_corpus_failure() {
        let options = PreprocessOptions::default();
        let stopwords = StopwordSet::empty();

        let corpus = vec!["fine sentence", "bad \u{0} sentence", "never seen"];
        let err = options
            .clean_corpus::<String, _, _>(&RefusingTokenizer, &stopwords, &corpus)
            .unwrap_err();

        match err {
            EncodeError::Tokenization { sentence, source } => {
                assert_eq!(sentence, 1);
                assert_eq!(
                    source,
                    TokenizationError::Unsupported {
                        reason: "NUL byte".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
