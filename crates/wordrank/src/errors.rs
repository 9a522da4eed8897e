//! # Error Types

/// Errors raised by a [`crate::tokenizers::WordTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizationError {
    /// Regex engine failed during text splitting (e.g. backtracking limit exceeded).
    #[error("regex match failed: {0}")]
    RegexMatch(String),

    /// The tokenizer cannot process this input.
    #[error("unsupported input: {reason}")]
    Unsupported {
        /// Why the input was refused.
        reason: String,
    },
}

impl From<fancy_regex::Error> for TokenizationError {
    fn from(e: fancy_regex::Error) -> Self {
        Self::RegexMatch(e.to_string())
    }
}

/// Errors that can occur while encoding a corpus.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The tokenizer failed on a sentence; the whole call is aborted.
    #[error("tokenization failed on sentence {sentence}: {source}")]
    Tokenization {
        /// Position of the failing sentence in the corpus.
        sentence: usize,

        /// The tokenizer error.
        #[source]
        source: TokenizationError,
    },

    /// A rank does not fit in the requested rank type.
    #[error("rank {rank} does not fit in the rank type")]
    RankOverflow {
        /// The rank that could not be represented.
        rank: usize,
    },
}
