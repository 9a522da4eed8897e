//! # Bag of Words
//!
//! A 0-indexed vocabulary over distinct words in first-seen order, with a
//! parallel count vector.

use crate::types::{CountType, StringChunkType};
use crate::vocab::word_counts::WordCounts;
use ahash::AHashMap;

/// 0-indexed words with their counts.
///
/// `counts[word_to_index[w]]` is the count of `w`.
#[derive(Debug, Clone, PartialEq)]
pub struct BagOfWords<K = String, C = usize>
where
    K: StringChunkType,
    C: CountType,
{
    /// Distinct words, in first-seen order.
    pub words: Vec<K>,

    /// ``{ K -> index }`` into `words` and `counts`.
    pub word_to_index: AHashMap<K, usize>,

    /// Counts, parallel to `words`.
    pub counts: Vec<C>,
}

impl<K, C> BagOfWords<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Build a bag of words from a single token sequence.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        Self::from(&WordCounts::from_tokens(tokens))
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The index of a word.
    pub fn index_of(
        &self,
        word: &str,
    ) -> Option<usize> {
        self.word_to_index.get(word).copied()
    }

    /// The count of a word; zero when absent.
    pub fn count(
        &self,
        word: &str,
    ) -> C {
        self.index_of(word)
            .and_then(|idx| self.counts.get(idx).copied())
            .unwrap_or_else(C::zero)
    }
}

impl<K, C> From<&WordCounts<K, C>> for BagOfWords<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn from(counts: &WordCounts<K, C>) -> Self {
        let mut words = Vec::with_capacity(counts.len());
        let mut word_to_index = AHashMap::with_capacity(counts.len());
        let mut values = Vec::with_capacity(counts.len());

        for (idx, (word, count)) in counts.iter().enumerate() {
            words.push(word.clone());
            word_to_index.insert(word.clone(), idx);
            values.push(count);
        }

        Self {
            words,
            word_to_index,
            counts: values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    #[test]
    fn test_from_tokens() {
        let tokens: Vec<String> = "this is an example this is"
            .split_whitespace()
            .map(String::from)
            .collect();
        let bag: BagOfWords<String, u32> = BagOfWords::from_tokens(&tokens);

        assert_eq!(bag.len(), 4);
        assert!(!bag.is_empty());
        assert_eq!(bag.words, vec!["this", "is", "an", "example"]);
        assert_eq!(bag.counts, vec![2, 2, 1, 1]);

        assert_eq!(bag.index_of("this"), Some(0));
        assert_eq!(bag.index_of("example"), Some(3));
        assert_eq!(bag.index_of("missing"), None);

        assert_eq!(bag.count("is"), 2);
        assert_eq!(bag.count("missing"), 0);

        for (idx, word) in bag.words.iter().enumerate() {
            assert_eq!(bag.word_to_index[word], idx);
        }
    }

    #[test]
    fn test_from_word_counts() {
        let sentences: Vec<Vec<CompactString>> = vec![
            vec!["secret".into(), "kept".into()],
            vec!["secret".into()],
        ];
        let counts: WordCounts<CompactString, usize> = WordCounts::from_sentences(&sentences);
        let bag = counts.to_bag_of_words();

        assert_eq!(bag.words, vec!["secret", "kept"]);
        assert_eq!(bag.counts, vec![2, 1]);
    }

    #[test]
    fn test_count_with_truncated_counts() {
        let tokens: Vec<String> = vec!["barber".into(), "secret".into(), "secret".into()];
        let mut bag: BagOfWords<String, u32> = BagOfWords::from_tokens(&tokens);
        bag.counts.truncate(1);

        assert_eq!(bag.count("barber"), 1);
        assert_eq!(bag.index_of("secret"), Some(1));
        assert_eq!(bag.count("secret"), 0);
    }

    #[test]
    fn test_empty() {
        let bag: BagOfWords = BagOfWords::from_tokens(&Vec::<String>::new());
        assert!(bag.is_empty());
        assert!(bag.word_to_index.is_empty());
        assert!(bag.counts.is_empty());
    }
}
