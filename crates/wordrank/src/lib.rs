//! # Frequency-Ranked Vocabulary Encoding
//!
//! Turns a corpus of raw sentences into integer sequences.
//!
//! Each sentence is split by a [`tokenizers::WordTokenizer`], lowercased, and
//! filtered against a [`stopwords::StopwordSet`] and a minimum token length.
//! The surviving tokens are counted across the whole corpus, ranked by
//! descending frequency (ties keep first-seen order), and every sentence is
//! mapped onto those ranks; tokens without a rank map to the `"OOV"` sentinel.
//!
//! # Encoding Example
//!
//! ```rust
//! use wordrank::encoders::{CorpusEncoderOptions, EncodeResults};
//! use wordrank::stopwords::StopwordSet;
//! use wordrank::tokenizers::WhitespaceTokenizer;
//!
//! let encoder = CorpusEncoderOptions::default().init().unwrap();
//! let stopwords = StopwordSet::new(["the", "a"]);
//!
//! let EncodeResults::<String, u32> {
//!     word_index,
//!     encoded,
//! } = encoder
//!     .encode(
//!         &WhitespaceTokenizer,
//!         &stopwords,
//!         ["the cat sat", "the cat ran", "a dog ran"],
//!     )
//!     .unwrap();
//!
//! assert_eq!(word_index.get("cat"), Some(1));
//! assert_eq!(word_index.get("ran"), Some(2));
//! assert_eq!(word_index.oov_rank(), 3);
//! assert_eq!(encoded, vec![vec![1, 3], vec![1, 2], vec![3, 2]]);
//! ```
#![warn(missing_docs, unused)]

pub mod clean;
pub mod encoders;
pub mod errors;
pub mod preprocess;
pub mod stopwords;
pub mod tokenizers;
pub mod types;
pub mod util;
pub mod vocab;

/// The default out-of-vocabulary sentinel token.
pub const DEFAULT_OOV_TOKEN: &str = "OOV";

/// Default minimum token length, in chars; shorter tokens are dropped.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Default minimum corpus frequency for a token to receive a rank.
pub const DEFAULT_MIN_FREQUENCY: usize = 2;
