//! Tokenization and stopword filtering.
//!
//! Tokens are maximal runs of ASCII letters, digits and apostrophes in the
//! lower-cased text. Everything else separates tokens.
//!
//! The stopword list is part of the scoring contract: changing it changes
//! which sentences are selected.

use regex::Regex;
use std::sync::OnceLock;

/// Fixed English stopword set excluded from frequency scoring.
pub const STOPWORDS: [&str; 46] = [
    "the", "a", "an", "of", "and", "to", "in", "is", "it", "for", "on", "with", "this", "that",
    "as", "by", "from", "be", "are", "was", "were", "at", "or", "not", "have", "has", "had", "you",
    "they", "we", "i", "his", "her", "their", "our", "your", "but", "if", "then", "than", "which",
    "who", "what", "when", "where", "how",
];

#[allow(clippy::expect_used)]
fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[a-z0-9']+").expect("valid regex"))
}

/// Splits text into lower-cased word tokens.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::tokenize;
///
/// assert_eq!(tokenize("Don't PANIC, it's 42!"), vec!["don't", "panic", "it's", "42"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns true if the token is in [`STOPWORDS`].
///
/// Expects an already lower-cased token.
#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Tokenizes text and drops stopwords.
#[must_use]
pub fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| !is_stopword(token))
        .collect()
}
