//! # Raw Text Cleaning
//!
//! Regex cleanup applied to raw text before tokenization.

use crate::util::validators;
use fancy_regex::Regex;

/// Build a pattern matching words of ``1..=max_len`` word chars,
/// along with any leading non-word chars.
pub fn short_word_pattern(max_len: usize) -> String {
    format!(r"\W*\b\w{{1,{max_len}}}\b")
}

/// Compile [`short_word_pattern`].
pub fn short_word_regex(max_len: usize) -> anyhow::Result<Regex> {
    if max_len == 0 {
        anyhow::bail!("max_len ({max_len}) must be >= 1");
    }
    validators::try_regex(&short_word_pattern(max_len))
}

/// Remove every match of `regex` from `text`.
pub fn remove_matches(
    regex: &Regex,
    text: &str,
) -> anyhow::Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for mat in regex.find_iter(text) {
        let mat = mat?;
        out.push_str(&text[last..mat.start()]);
        last = mat.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Remove words of at most `max_len` chars from `text`.
pub fn remove_short_words(
    text: &str,
    max_len: usize,
) -> anyhow::Result<String> {
    remove_matches(&short_word_regex(max_len)?, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_word_pattern() {
        assert_eq!(short_word_pattern(2), r"\W*\b\w{1,2}\b");
        assert!(short_word_regex(0).is_err());
    }

    #[test]
    fn test_remove_short_words() {
        let text = "I was wondering if anyone out there could enlighten me on this car.";
        assert_eq!(
            remove_short_words(text, 2).unwrap(),
            " was wondering anyone out there could enlighten this car."
        );
    }

    #[test]
    fn test_remove_matches_reuses_regex() {
        let regex = short_word_regex(3).unwrap();
        assert_eq!(remove_matches(&regex, "the cat sat").unwrap(), "");
        assert_eq!(
            remove_matches(&regex, "a barber kept his word").unwrap(),
            " barber kept word"
        );
        assert_eq!(remove_matches(&regex, "").unwrap(), "");
    }
}
