//! # Vocabulary
//!
//! * [`WordCounts`] - corpus-wide frequencies, in first-seen order.
//! * [`WordIndex`] - dense frequency ranks with an OOV sentinel.
//! * [`BagOfWords`] - 0-indexed words with counts.

pub mod bag_of_words;
pub mod word_counts;
pub mod word_index;

#[doc(inline)]
pub use bag_of_words::BagOfWords;
#[doc(inline)]
pub use word_counts::{FirstSeenCountMap, WordCounts};
#[doc(inline)]
pub use word_index::{OovPlacement, RankOrder, WordIndex, WordIndexOptions};
