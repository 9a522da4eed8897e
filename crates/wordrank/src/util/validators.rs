//! Validators for various configuration options.
use fancy_regex::Regex;

/// Validates and returns the minimum token length, ensuring it's at least 1.
pub fn try_min_token_len(min_token_len: usize) -> anyhow::Result<usize> {
    if min_token_len == 0 {
        Err(anyhow::anyhow!(
            "min_token_len ({min_token_len}) must be >= 1"
        ))
    } else {
        Ok(min_token_len)
    }
}

/// Validates and returns the minimum frequency, ensuring it's at least 1.
pub fn try_min_frequency(min_frequency: usize) -> anyhow::Result<usize> {
    if min_frequency == 0 {
        Err(anyhow::anyhow!(
            "min_frequency ({min_frequency}) must be >= 1"
        ))
    } else {
        Ok(min_frequency)
    }
}

/// Validates and returns an OOV token; it must be non-empty and contain no whitespace.
pub fn try_oov_token(oov_token: &str) -> anyhow::Result<&str> {
    if oov_token.is_empty() {
        Err(anyhow::anyhow!("oov_token must be non-empty"))
    } else if oov_token.chars().any(char::is_whitespace) {
        Err(anyhow::anyhow!(
            "oov_token ({oov_token:?}) must not contain whitespace"
        ))
    } else {
        Ok(oov_token)
    }
}

/// Validates and returns a compiled regex pattern.
pub fn try_regex(pattern: &str) -> anyhow::Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| anyhow::anyhow!("regex pattern compilation failed: {pattern}: {e}"))
}
