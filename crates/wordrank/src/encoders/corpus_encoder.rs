//! # Corpus Encoder
//!
//! Two passes over a corpus:
//! 1. preprocess every sentence and count the surviving tokens;
//! 2. rank the qualifying tokens, then map every sentence onto those ranks.
//!
//! The second pass cannot start until the first has seen the whole corpus.

use crate::errors::EncodeError;
use crate::preprocess::PreprocessOptions;
use crate::stopwords::StopwordSet;
use crate::tokenizers::WordTokenizer;
use crate::types::{EncodedSentence, StringChunkType, TokenType, TokenizedSentence};
use crate::vocab::{OovPlacement, RankOrder, WordCounts, WordIndex, WordIndexOptions};

/// Options for [`CorpusEncoder`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CorpusEncoderOptions {
    /// Sentence preprocessing options.
    pub preprocess: PreprocessOptions,

    /// Word index options.
    pub index: WordIndexOptions,
}

impl CorpusEncoderOptions {
    /// Set the minimum token length, in chars.
    pub fn with_min_token_len(
        self,
        min_token_len: usize,
    ) -> Self {
        Self {
            preprocess: self.preprocess.with_min_token_len(min_token_len),
            ..self
        }
    }

    /// Set whether tokens are lowercased.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self {
            preprocess: self.preprocess.with_lowercase(lowercase),
            ..self
        }
    }

    /// Set the minimum corpus frequency for a ranked token.
    pub fn with_min_frequency(
        self,
        min_frequency: usize,
    ) -> Self {
        Self {
            index: self.index.with_min_frequency(min_frequency),
            ..self
        }
    }

    /// Set the rank order.
    pub fn with_order(
        self,
        order: RankOrder,
    ) -> Self {
        Self {
            index: self.index.with_order(order),
            ..self
        }
    }

    /// Set the OOV placement.
    pub fn with_oov_placement(
        self,
        oov_placement: OovPlacement,
    ) -> Self {
        Self {
            index: self.index.with_oov_placement(oov_placement),
            ..self
        }
    }

    /// Set the OOV sentinel token.
    pub fn with_oov_token(
        self,
        oov_token: impl Into<String>,
    ) -> Self {
        Self {
            index: self.index.with_oov_token(oov_token),
            ..self
        }
    }

    /// Replace the preprocessing options.
    pub fn with_preprocess(
        self,
        preprocess: PreprocessOptions,
    ) -> Self {
        Self { preprocess, ..self }
    }

    /// Replace the word index options.
    pub fn with_index(
        self,
        index: WordIndexOptions,
    ) -> Self {
        Self { index, ..self }
    }

    /// Validate the options.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.preprocess.validate()?;
        self.index.validate()?;
        Ok(())
    }

    /// Validate and initialize a [`CorpusEncoder`].
    pub fn init(self) -> anyhow::Result<CorpusEncoder> {
        CorpusEncoder::init(self)
    }
}

/// Results of [`CorpusEncoder::encode`].
///
/// # Parameters
/// * `K` - the type used to store words.
/// * `T` - the rank type.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeResults<K = String, T = u32>
where
    K: StringChunkType,
    T: TokenType,
{
    /// The word index built from the corpus.
    pub word_index: WordIndex<K, T>,

    /// One encoded sentence per input sentence, in input order.
    pub encoded: Vec<EncodedSentence<T>>,
}

/// Frequency-ranked corpus encoder.
///
/// Holds only validated options; the tokenizer and stopwords are supplied
/// to each call, and nothing is retained between calls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CorpusEncoder {
    options: CorpusEncoderOptions,
}

impl CorpusEncoder {
    /// Validate `options` and build an encoder.
    pub fn init(options: CorpusEncoderOptions) -> anyhow::Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The encoder options.
    pub fn options(&self) -> &CorpusEncoderOptions {
        &self.options
    }

    /// Tokenize and filter every sentence of `corpus`, preserving order.
    pub fn preprocess<K, W, I>(
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
        self.options
            .preprocess
            .clean_corpus(tokenizer, stopwords, corpus)
    }

    /// Build a [`WordIndex`] from already-cleaned sentences.
    pub fn build_index<K, T>(
        &self,
        cleaned: &[TokenizedSentence<K>],
    ) -> Result<WordIndex<K, T>, EncodeError>
    where
        K: StringChunkType,
        T: TokenType,
    {
        let counts: WordCounts<K, usize> = WordCounts::from_sentences(cleaned);
        log::info!(
            "counted {} tokens; {} distinct",
            counts.total(),
            counts.len()
        );
        WordIndex::build(&counts, &self.options.index)
    }

    /// Encode a corpus.
    ///
    /// # Arguments
    /// * `tokenizer` - splits each sentence into raw tokens.
    /// * `stopwords` - tokens excluded after case-normalization.
    /// * `corpus` - the raw sentences.
    ///
    /// # Returns
    /// The [`WordIndex`] built from the corpus, and one encoded sentence per
    /// input sentence. The first tokenizer failure aborts the call.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, tokenizer, stopwords, corpus))
    )]
    pub fn encode<K, T, W, I>(
        &self,
        tokenizer: &W,
        stopwords: &StopwordSet,
        corpus: I,
    ) -> Result<EncodeResults<K, T>, EncodeError>
    where
        K: StringChunkType,
        T: TokenType,
        W: WordTokenizer + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cleaned: Vec<TokenizedSentence<K>> = self.preprocess(tokenizer, stopwords, corpus)?;
        log::info!("preprocessed {} sentences", cleaned.len());

        let word_index: WordIndex<K, T> = self.build_index(&cleaned)?;
        log::info!(
            "ranked {} words; {:?} -> {}",
            word_index.num_words(),
            word_index.oov_token(),
            word_index.oov_rank()
        );

        let encoded = word_index.encode_sentences(&cleaned);

        Ok(EncodeResults {
            word_index,
            encoded,
        })
    }
}
