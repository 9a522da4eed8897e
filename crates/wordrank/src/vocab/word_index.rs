//! # Word Index ``{ K -> T }`` Rank Vocabulary
//!
//! A [`WordIndex`] assigns dense positive ranks to the qualifying words of a
//! [`WordCounts`] table, plus one out-of-vocabulary sentinel rank.
//!
//! With default [`WordIndexOptions`]:
//! * only words seen more than once are ranked,
//! * ranks ``1..=N`` follow descending frequency; ties keep first-seen order,
//! * the ``"OOV"`` sentinel is ``N + 1``.

use crate::errors::EncodeError;
use crate::types::{
    CountType, EncodedSentence, StringChunkType, TokenType, TokenizedSentence, WordToRankMap,
};
use crate::util::validators;
use crate::vocab::word_counts::WordCounts;
use core::borrow::Borrow;
use core::hash::Hash;

/// The order in which qualifying words receive ranks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankOrder {
    /// Descending frequency; ties keep first-seen order.
    #[default]
    Frequency,

    /// First-seen order, ignoring frequency.
    FirstSeen,
}

/// Where the OOV sentinel sits relative to the real ranks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OovPlacement {
    /// OOV is ``N + 1``; real ranks are ``1..=N``.
    #[default]
    Last,

    /// OOV is ``1``; real ranks are ``2..=N + 1``.
    First,
}

/// Options for [`WordIndex::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordIndexOptions {
    /// Words counted fewer times than this are left to OOV.
    pub min_frequency: usize,

    /// The rank order.
    pub order: RankOrder,

    /// The OOV sentinel placement.
    pub oov_placement: OovPlacement,

    /// The OOV sentinel token.
    pub oov_token: String,
}

impl Default for WordIndexOptions {
    fn default() -> Self {
        Self {
            min_frequency: crate::DEFAULT_MIN_FREQUENCY,
            order: RankOrder::default(),
            oov_placement: OovPlacement::default(),
            oov_token: crate::DEFAULT_OOV_TOKEN.to_string(),
        }
    }
}

impl WordIndexOptions {
    /// Set the minimum frequency.
    pub fn with_min_frequency(
        self,
        min_frequency: usize,
    ) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    /// Set the rank order.
    pub fn with_order(
        self,
        order: RankOrder,
    ) -> Self {
        Self { order, ..self }
    }

    /// Set the OOV placement.
    pub fn with_oov_placement(
        self,
        oov_placement: OovPlacement,
    ) -> Self {
        Self {
            oov_placement,
            ..self
        }
    }

    /// Set the OOV sentinel token.
    pub fn with_oov_token(
        self,
        oov_token: impl Into<String>,
    ) -> Self {
        Self {
            oov_token: oov_token.into(),
            ..self
        }
    }

    /// Validate the options.
    pub fn validate(&self) -> anyhow::Result<()> {
        validators::try_min_frequency(self.min_frequency)?;
        validators::try_oov_token(&self.oov_token)?;
        Ok(())
    }
}

/// Word to rank vocabulary, with an OOV sentinel.
///
/// # Parameters
/// * `K` - the type used to store words.
/// * `T` - the rank type.
#[derive(Debug, Clone, PartialEq)]
pub struct WordIndex<K = String, T = u32>
where
    K: StringChunkType,
    T: TokenType,
{
    /// Ranked words; does not contain the OOV sentinel.
    words: WordToRankMap<K, T>,

    oov_token: K,
    oov_rank: T,
}

fn try_rank<T: TokenType>(rank: usize) -> Result<T, EncodeError> {
    T::from_usize(rank).ok_or(EncodeError::RankOverflow { rank })
}

impl<K, T> WordIndex<K, T>
where
    K: StringChunkType,
    T: TokenType,
{
    /// Build an index holding only the OOV sentinel, at rank 1.
    pub fn oov_only<S: AsRef<str>>(oov_token: S) -> Self {
        Self {
            words: Default::default(),
            oov_token: K::from(oov_token.as_ref()),
            oov_rank: T::one(),
        }
    }

    /// Rank the qualifying words of `counts`.
    ///
    /// A real word equal to the OOV token is never ranked; it encodes as OOV.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(counts)))]
    pub fn build<C: CountType>(
        counts: &WordCounts<K, C>,
        options: &WordIndexOptions,
    ) -> Result<Self, EncodeError> {
        // A threshold beyond the range of `C` admits nothing.
        let threshold = C::from_usize(options.min_frequency);

        let offset = match options.oov_placement {
            OovPlacement::Last => 1,
            OovPlacement::First => 2,
        };

        let mut words: WordToRankMap<K, T> = Default::default();
        for (word, count) in counts.ranked(options.order) {
            let qualifies = threshold.is_some_and(|t| count >= t);
            if !qualifies || word.as_ref() == options.oov_token {
                continue;
            }
            let rank = try_rank(offset + words.len())?;
            words.insert(word.clone(), rank);
        }
        words.shrink_to_fit();

        let oov_rank = match options.oov_placement {
            OovPlacement::Last => try_rank(words.len() + 1)?,
            OovPlacement::First => T::one(),
        };

        log::debug!(
            "ranked {} of {} distinct words; {:?} -> {}",
            words.len(),
            counts.len(),
            options.oov_token,
            oov_rank
        );

        Ok(Self {
            words,
            oov_token: K::from(options.oov_token.as_str()),
            oov_rank,
        })
    }

    /// The OOV sentinel token.
    pub fn oov_token(&self) -> &K {
        &self.oov_token
    }

    /// The OOV sentinel rank.
    pub fn oov_rank(&self) -> T {
        self.oov_rank
    }

    /// The number of ranked words; excludes the OOV sentinel.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// The number of entries; includes the OOV sentinel.
    pub fn num_entries(&self) -> usize {
        self.words.len() + 1
    }

    /// The largest rank in the index.
    pub fn max_rank(&self) -> T {
        self.words
            .values()
            .copied()
            .max()
            .map_or(self.oov_rank, |m| m.max(self.oov_rank))
    }

    /// The rank of a word, or of the OOV sentinel when `token` is the OOV token.
    ///
    /// Returns `None` for words that are not in the index.
    pub fn get<Q>(
        &self,
        token: &Q,
    ) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.words.get(token) {
            Some(&rank) => Some(rank),
            None if <K as Borrow<Q>>::borrow(&self.oov_token) == token => Some(self.oov_rank),
            None => None,
        }
    }

    /// Is this word ranked? The OOV sentinel is not a ranked word.
    pub fn contains<Q>(
        &self,
        token: &Q,
    ) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.words.contains_key(token)
    }

    /// The rank of a word; unranked words map to the OOV rank.
    pub fn lookup<Q>(
        &self,
        token: &Q,
    ) -> T
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.words.get(token).copied().unwrap_or(self.oov_rank)
    }

    /// Iterate over the ranked words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, T)> {
        self.words.iter().map(|(k, &t)| (k, t))
    }

    /// All entries, including the OOV sentinel, sorted by rank.
    pub fn to_ranked_vec(&self) -> Vec<(&K, T)> {
        let mut entries: Vec<(&K, T)> = self.iter().collect();
        entries.push((&self.oov_token, self.oov_rank));
        entries.sort_by_key(|&(_, t)| t);
        entries
    }

    /// All entries, including the OOV sentinel, as a ``{ K -> T }`` map.
    pub fn to_map(&self) -> WordToRankMap<K, T> {
        let mut map = self.words.clone();
        map.insert(self.oov_token.clone(), self.oov_rank);
        map
    }

    /// Encode one cleaned sentence.
    pub fn encode_sentence(
        &self,
        sentence: &[K],
    ) -> EncodedSentence<T> {
        sentence.iter().map(|token| self.lookup::<K>(token)).collect()
    }

    /// Encode cleaned sentences, preserving order.
    pub fn encode_sentences(
        &self,
        sentences: &[TokenizedSentence<K>],
    ) -> Vec<EncodedSentence<T>> {
        sentences
            .iter()
            .map(|sentence| self.encode_sentence(sentence))
            .collect()
    }
}
