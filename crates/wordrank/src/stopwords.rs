//! # Stopwords
//!
//! A [`StopwordSet`] is a fixed set of case-normalized words which are
//! excluded from vocabulary consideration.

use ahash::AHashSet;
use anyhow::Context;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The NLTK English stopword list, as shipped since NLTK 3.8.2.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't", "he'd", "he'll", "he's", "i'd", "i'll", "i'm", "i've", "it'd", "it'll",
    "she'd", "she'll", "they'd", "they'll", "they're", "they've", "we'd", "we'll", "we're",
    "we've",
];

/// A set of lowercase words excluded from the vocabulary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: AHashSet<String>,
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl StopwordSet {
    /// Create a stopword set; words are lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// An empty stopword set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The [`ENGLISH_STOPWORDS`] set.
    pub fn english() -> Self {
        Self::new(ENGLISH_STOPWORDS)
    }

    /// Load a stopword set from a file; see [`StopwordSet::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open stopwords file: {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a stopword set from a line reader.
    ///
    /// One word per line; blank lines and ``#`` comments are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> anyhow::Result<Self> {
        let mut set = Self::empty();
        for line in reader.lines() {
            let line = line.context("failed to read stopwords line")?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            set.insert(word);
        }
        Ok(set)
    }

    /// Add a word to the set.
    pub fn insert(
        &mut self,
        word: &str,
    ) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Is this (already case-normalized) token a stopword?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.words.contains(token)
    }

    /// The number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set contains no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stopwords, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Keep only the tokens which are not stopwords.
    pub fn filter<'a, S, I>(
        &self,
        tokens: I,
    ) -> Vec<&'a S>
    where
        S: AsRef<str> + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        tokens
            .into_iter()
            .filter(|t| !self.contains(t.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{check_is_send, check_is_sync};
    use std::io::Write;

    #[test]
    fn test_english() {
        let set = StopwordSet::english();
        check_is_send(&set);
        check_is_sync(&set);

        assert_eq!(set.len(), ENGLISH_STOPWORDS.len());
        assert_eq!(set.len(), 198);

        for word in ["the", "a", "is", "his", "was", "such", "don't", "i'm", "he's", "we've"] {
            assert!(set.contains(word), "{word}");
        }
        for word in ["barber", "secret", "huge", "The"] {
            assert!(!set.contains(word), "{word}");
        }
    }

    #[test]
    fn test_new_lowercases() {
        let set: StopwordSet = ["The", "A", "a"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("the"));
        assert!(set.contains("a"));
        assert!(!set.contains("The"));

        let mut words = set.iter().collect::<Vec<_>>();
        words.sort();
        assert_eq!(words, vec!["a", "the"]);
    }

    #[test]
    fn test_empty_and_insert() {
        let mut set = StopwordSet::empty();
        assert!(set.is_empty());

        assert!(set.insert("Foo"));
        assert!(!set.insert("foo"));
        assert!(set.contains("foo"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_filter() {
        let set = StopwordSet::new(["the", "a"]);
        let tokens = ["the", "cat", "sat", "on", "a", "mat"];
        assert_eq!(set.filter(tokens), vec!["cat", "sat", "on", "mat"]);

        let owned = vec!["A".to_string(), "dog".to_string()];
        assert_eq!(set.filter(&owned), vec!["A", "dog"]);
    }

    #[test]
    fn test_from_reader() {
        let text = "# common words\nthe\n\n  A  \nof\n";
        let set = StopwordSet::from_reader(text.as_bytes()).unwrap();
        assert_eq!(set, StopwordSet::new(["the", "a", "of"]));
    }

    #[test]
    fn test_from_path() {
        tempdir::TempDir::new("stopwords_test")
            .and_then(|dir| {
                let path = dir.path().join("stopwords.txt");
                let mut file = std::fs::File::create(&path)?;
                writeln!(file, "barber")?;
                writeln!(file, "Secret")?;
                drop(file);

                let set = StopwordSet::from_path(&path).expect("failed to load stopwords");
                assert_eq!(set, StopwordSet::new(["barber", "secret"]));

                assert!(StopwordSet::from_path(dir.path().join("missing.txt")).is_err());

                Ok(())
            })
            .unwrap();
    }
}
