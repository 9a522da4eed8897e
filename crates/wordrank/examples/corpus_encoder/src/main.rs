use anyhow::Context;
use clap::{Parser, ValueEnum};
use wordrank::encoders::CorpusEncoderOptions;
use wordrank::stopwords::StopwordSet;
use wordrank::tokenizers::{
    FilterTokenizer, RegexTokenizer, SentenceSplitter, WhitespaceTokenizer, WordTokenizer,
};
use wordrank::vocab::{OovPlacement, RankOrder, WordCounts, WordIndex};

/// Word tokenizer choices.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum TokenizerKind {
    /// Runs of word chars.
    Word,

    /// Runs of word chars, and runs of punctuation.
    WordPunct,

    /// Whitespace separated.
    Whitespace,

    /// Whitespace and Keras punctuation filters.
    Filter,
}

impl TokenizerKind {
    fn build(self) -> anyhow::Result<Box<dyn WordTokenizer>> {
        Ok(match self {
            TokenizerKind::Word => Box::new(RegexTokenizer::word()?),
            TokenizerKind::WordPunct => Box::new(RegexTokenizer::word_punct()?),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
            TokenizerKind::Filter => Box::new(FilterTokenizer::default()),
        })
    }
}

/// Rank order choices.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OrderKind {
    /// Descending frequency; ties keep first-seen order.
    Frequency,

    /// First-seen order.
    FirstSeen,
}

impl From<OrderKind> for RankOrder {
    fn from(kind: OrderKind) -> Self {
        match kind {
            OrderKind::Frequency => RankOrder::Frequency,
            OrderKind::FirstSeen => RankOrder::FirstSeen,
        }
    }
}

/// Frequency-ranked corpus encoder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Corpus text.
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    pub text: Option<String>,

    /// Path to a corpus text file.
    #[arg(long)]
    pub input: Option<String>,

    /// Split the text into sentences; otherwise each line is a sentence.
    #[arg(long, default_value = "false")]
    pub split_sentences: bool,

    /// Word tokenizer.
    #[arg(long, value_enum, default_value = "word-punct")]
    pub tokenizer: TokenizerKind,

    /// Path to a stopwords file; defaults to the built-in English list.
    #[arg(long)]
    pub stopwords: Option<String>,

    /// Disable stopword filtering.
    #[arg(long, default_value = "false", conflicts_with = "stopwords")]
    pub no_stopwords: bool,

    /// Minimum token length, in chars.
    #[arg(long, default_value_t = wordrank::DEFAULT_MIN_TOKEN_LEN)]
    pub min_token_len: usize,

    /// Minimum corpus frequency for a ranked word.
    #[arg(long, default_value_t = wordrank::DEFAULT_MIN_FREQUENCY)]
    pub min_frequency: usize,

    /// Out-of-vocabulary sentinel token.
    #[arg(long, default_value = wordrank::DEFAULT_OOV_TOKEN)]
    pub oov_token: String,

    /// Rank order.
    #[arg(long, value_enum, default_value = "frequency")]
    pub order: OrderKind,

    /// Give the OOV sentinel rank 1.
    #[arg(long, default_value = "false")]
    pub oov_first: bool,

    /// Also print the bag of words.
    #[arg(long, default_value = "false")]
    pub bag_of_words: bool,

    /// Enable verbose output.
    #[arg(long, default_value = "false")]
    pub verbose: bool,
}

/// Split text into a corpus of sentences.
///
/// Without `split_sentences` every line is a sentence; blank lines are kept
/// so encoded rows line up with input lines.
fn split_corpus(
    text: &str,
    split_sentences: bool,
) -> anyhow::Result<Vec<&str>> {
    Ok(if split_sentences {
        SentenceSplitter::new()?.split(text)?
    } else {
        text.lines().collect()
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    if args.verbose {
        println!("{:#?}", args);
    }

    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read corpus: {path}"))?,
        (None, None) => anyhow::bail!("one of --text or --input is required"),
    };

    let corpus = split_corpus(&text, args.split_sentences)?;

    let stopwords = if args.no_stopwords {
        StopwordSet::empty()
    } else if let Some(path) = &args.stopwords {
        StopwordSet::from_path(path)?
    } else {
        StopwordSet::english()
    };

    let oov_placement = if args.oov_first {
        OovPlacement::First
    } else {
        OovPlacement::Last
    };

    let encoder = CorpusEncoderOptions::default()
        .with_min_token_len(args.min_token_len)
        .with_min_frequency(args.min_frequency)
        .with_oov_token(args.oov_token.as_str())
        .with_order(args.order.into())
        .with_oov_placement(oov_placement)
        .init()?;
    if args.verbose {
        println!("{:#?}", encoder.options());
    }

    let tokenizer = args.tokenizer.build()?;

    type K = String;
    type T = u32;

    let cleaned: Vec<Vec<K>> = encoder.preprocess(&*tokenizer, &stopwords, &corpus)?;
    let word_index: WordIndex<K, T> = encoder.build_index(&cleaned)?;
    let encoded = word_index.encode_sentences(&cleaned);

    println!("Word Index: ({} sentences)", corpus.len());
    for (word, rank) in word_index.to_ranked_vec() {
        println!("  {rank:>6}  {word}");
    }

    println!();
    println!("Encoded:");
    for (sentence, ranks) in corpus.iter().zip(&encoded) {
        println!("  {ranks:?}");
        if args.verbose {
            println!("    {sentence:?}");
        }
    }

    if args.bag_of_words {
        let bag = WordCounts::<K, usize>::from_sentences(&cleaned).to_bag_of_words();
        println!();
        println!("Bag of Words:");
        for (idx, (word, count)) in bag.words.iter().zip(&bag.counts).enumerate() {
            println!("  {idx:>6}  {word}: {count}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordrank::encoders::{CorpusEncoder, EncodeResults};

    #[test]
    fn test_split_corpus_keeps_blank_lines() {
        let text = "the cat sat\n\nthe cat ran\na dog ran\n";
        let corpus = split_corpus(text, false).unwrap();
        assert_eq!(corpus, vec!["the cat sat", "", "the cat ran", "a dog ran"]);

        let results: EncodeResults = CorpusEncoder::default()
            .encode(
                &WhitespaceTokenizer,
                &StopwordSet::new(["the", "a"]),
                &corpus,
            )
            .unwrap();
        assert_eq!(results.encoded.len(), corpus.len());
        assert_eq!(
            results.encoded,
            vec![vec![1, 3], vec![], vec![1, 2], vec![3, 2]]
        );
    }

    #[test]
    fn test_split_corpus_sentences() {
        let text = "He kept a huge secret. The secret is out!\nNext";
        assert_eq!(
            split_corpus(text, true).unwrap(),
            vec!["He kept a huge secret.", "The secret is out!", "Next"]
        );
    }
}
