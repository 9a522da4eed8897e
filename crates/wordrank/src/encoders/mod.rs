//! # Corpus Encoders

pub mod corpus_encoder;

#[doc(inline)]
pub use corpus_encoder::{CorpusEncoder, CorpusEncoderOptions, EncodeResults};
