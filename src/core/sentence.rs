//! Sentence representation for brief-rs.
//!
//! Sentences are produced once by a segmenter and never mutated
//! afterwards. Scoring wraps them rather than changing them.

use crate::summarizer::tokenize::content_tokens;
use serde::Serialize;

/// A candidate sentence of the input text.
///
/// # Examples
///
/// ```
/// use brief_rs::core::Sentence;
///
/// let sentence = Sentence::new(0, "The cat sat on the mat.".to_string());
/// assert_eq!(sentence.tokens, vec!["cat", "sat", "mat"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Position in the segmented sequence (0-based).
    pub index: usize,

    /// Sentence text, terminal punctuation included.
    pub text: String,

    /// Lower-cased content tokens (stopwords removed), in reading order.
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Creates a sentence and extracts its content tokens.
    #[must_use]
    pub fn new(index: usize, text: String) -> Self {
        let tokens = content_tokens(&text);
        Self {
            index,
            text,
            tokens,
        }
    }

    /// Returns true if the sentence has no content tokens.
    #[must_use]
    pub fn is_content_free(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A sentence paired with its relevance score.
///
/// Exists only while the selector ranks candidates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    /// The scored sentence.
    pub sentence: Sentence,

    /// Relevance score (always >= 0).
    pub score: f64,
}

impl ScoredSentence {
    /// Pairs a sentence with its score.
    #[must_use]
    pub const fn new(sentence: Sentence, score: f64) -> Self {
        Self { sentence, score }
    }
}

/// A candidate sentence as reported by ranking diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSentence {
    /// Original position of the sentence.
    pub index: usize,

    /// Sentence text.
    pub text: String,

    /// Relevance score, absent when the mode does not score.
    pub score: Option<f64>,

    /// Whether the sentence made it into the summary.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_tokens_skip_stopwords() {
        let sentence = Sentence::new(2, "It is what it is.".to_string());
        assert_eq!(sentence.index, 2);
        assert!(sentence.tokens.is_empty());
        assert!(sentence.is_content_free());
    }

    #[test]
    fn test_sentence_keeps_text_verbatim() {
        let text = "Rust's borrow checker, explained!";
        let sentence = Sentence::new(0, text.to_string());
        assert_eq!(sentence.text, text);
        assert_eq!(sentence.tokens, vec!["rust's", "borrow", "checker", "explained"]);
    }
}
