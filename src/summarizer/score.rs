//! Sentence relevance scoring.
//!
//! ```text
//! raw   = sum of freq[token] over the sentence's content tokens
//! score = raw / sqrt(content_tokens + 1)
//! score += position_bonus        when index < LEAD_SENTENCES
//! ```
//!
//! The `+ 1` keeps content-free sentences at a finite score and dampens the
//! advantage of very short sentences.

use crate::core::{ScoredSentence, Sentence};
use crate::summarizer::frequency::FrequencyTable;

/// Number of leading sentences that receive the position bonus.
pub const LEAD_SENTENCES: usize = 3;

/// Scores one sentence against the global frequency table.
///
/// # Examples
///
/// ```
/// use brief_rs::core::Sentence;
/// use brief_rs::summarizer::{FrequencyTable, score};
///
/// let freq = FrequencyTable::from_text("Cats like fish. Cats nap.");
/// let sentence = Sentence::new(5, "Cats like fish.".to_string());
/// // (2 + 1 + 1) / sqrt(3 + 1)
/// assert!((score(&sentence, &freq, 0.5) - 2.0).abs() < 1e-9);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(sentence: &Sentence, freq: &FrequencyTable, position_bonus: f64) -> f64 {
    let raw: usize = sentence.tokens.iter().map(|token| freq.get(token)).sum();
    let mut score = raw as f64 / ((sentence.tokens.len() + 1) as f64).sqrt();
    if sentence.index < LEAD_SENTENCES {
        score += position_bonus;
    }
    score
}

/// Scores every sentence, keeping their order.
#[must_use]
pub fn score_all(
    sentences: Vec<Sentence>,
    freq: &FrequencyTable,
    position_bonus: f64,
) -> Vec<ScoredSentence> {
    sentences
        .into_iter()
        .map(|sentence| {
            let value = score(&sentence, freq, position_bonus);
            tracing::trace!(index = sentence.index, score = value, "scored sentence");
            ScoredSentence::new(sentence, value)
        })
        .collect()
}
