//! # Word Frequency Counts

use crate::types::{CountType, StringChunkType};
use crate::vocab::bag_of_words::BagOfWords;
use crate::vocab::word_index::RankOrder;
use indexmap::IndexMap;

/// ``{ K -> C }`` count map, iterated in first-seen order.
pub type FirstSeenCountMap<K, C> = IndexMap<K, C, ahash::RandomState>;

/// Corpus-wide token frequencies.
///
/// Iteration order is the order in which tokens were first counted,
/// which is what makes frequency ties resolve deterministically.
///
/// # Parameters
/// * `K` - the type used to store words.
/// * `C` - the type used to store counts.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCounts<K = String, C = usize>
where
    K: StringChunkType,
    C: CountType,
{
    counts: FirstSeenCountMap<K, C>,
}

impl<K, C> Default for WordCounts<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn default() -> Self {
        Self {
            counts: Default::default(),
        }
    }
}

impl<K, C> WordCounts<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create an empty count table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a single token sequence.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut counts = Self::new();
        counts.update_from_tokens(tokens);
        counts
    }

    /// Count every token of every sentence, in corpus order.
    pub fn from_sentences<S>(sentences: &[S]) -> Self
    where
        S: AsRef<[K]>,
    {
        let mut counts = Self::new();
        for sentence in sentences {
            counts.update_from_tokens(sentence.as_ref());
        }
        counts
    }

    /// Add one occurrence of a token.
    pub fn add(
        &mut self,
        token: &K,
    ) {
        self.add_count(token, C::one());
    }

    /// Add `count` occurrences of a token.
    pub fn add_count(
        &mut self,
        token: &K,
        count: C,
    ) {
        match self.counts.get_mut::<str>(token.as_ref()) {
            Some(c) => *c += count,
            None => {
                self.counts.insert(token.clone(), count);
            }
        }
    }

    /// Update counts in-place from a token sequence.
    pub fn update_from_tokens<'a, I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        for token in tokens {
            self.add(token);
        }
    }

    /// The count of a token; zero when unseen.
    pub fn count(
        &self,
        token: &str,
    ) -> C {
        self.counts.get(token).copied().unwrap_or_else(C::zero)
    }

    /// The first-seen position of a token, if seen.
    pub fn first_seen(
        &self,
        token: &str,
    ) -> Option<usize> {
        self.counts.get_index_of(token)
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no tokens have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The total number of counted occurrences.
    pub fn total(&self) -> C {
        self.counts.values().fold(C::zero(), |mut acc, &c| {
            acc += c;
            acc
        })
    }

    /// Iterate over ``(token, count)`` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, C)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }

    /// All ``(token, count)`` pairs in rank order.
    ///
    /// [`RankOrder::Frequency`] is a stable descending sort over first-seen
    /// order; so equal counts keep first-seen order.
    pub fn ranked(
        &self,
        order: RankOrder,
    ) -> Vec<(&K, C)> {
        let mut items: Vec<(&K, C)> = self.iter().collect();
        if order == RankOrder::Frequency {
            items.sort_by(|a, b| b.1.cmp(&a.1));
        }
        items
    }

    /// Convert to a 0-indexed bag of words, in first-seen order.
    pub fn to_bag_of_words(&self) -> BagOfWords<K, C> {
        BagOfWords::from(self)
    }
}
