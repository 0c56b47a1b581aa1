//! Sentence segmentation.
//!
//! Two strategies share the [`Segmenter`] trait:
//!
//! - **Punctuation**: splits after `.`, `!` or `?` followed by whitespace.
//!   A heuristic: abbreviations ("Dr. Smith"), decimals followed by a space
//!   and quoted punctuation are split too. Summaries are defined in terms of
//!   this behavior, so it is the default.
//! - **Unicode**: UAX #29 sentence boundaries from `unicode-segmentation`.

use crate::core::Sentence;
use crate::summarizer::config::SegmenterKind;
use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Trait for splitting normalized text into ordered sentences.
///
/// Implementations must be deterministic and assign `index` values
/// `0..n` in reading order.
pub trait Segmenter: Send + Sync {
    /// Splits the text into sentences.
    fn segment(&self, text: &str) -> Vec<Sentence>;

    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a description of the strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }
}

/// Builds indexed sentences from raw fragments, dropping blank ones.
fn collect_sentences<'a, I>(fragments: I) -> Vec<Sentence>
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, fragment)| Sentence::new(index, fragment.to_string()))
        .collect()
}

#[allow(clippy::expect_used)]
fn boundary_regex() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?]\s+").expect("valid regex"))
}

/// Splits after terminal punctuation followed by whitespace.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::{PunctuationSegmenter, Segmenter};
///
/// let sentences = PunctuationSegmenter.segment("One. Two? Three!");
/// let texts: Vec<_> = sentences.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, vec!["One.", "Two?", "Three!"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

impl Segmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut fragments = Vec::new();
        let mut start = 0;
        for boundary in boundary_regex().find_iter(text) {
            // Terminal punctuation is one ASCII byte and stays with the sentence
            fragments.push(&text[start..=boundary.start()]);
            start = boundary.end();
        }
        fragments.push(&text[start..]);
        collect_sentences(fragments)
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn description(&self) -> &'static str {
        "Splits after '.', '!' or '?' followed by whitespace"
    }
}

/// Splits on Unicode (UAX #29) sentence boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        collect_sentences(text.split_sentence_bounds())
    }

    fn name(&self) -> &'static str {
        "unicode"
    }

    fn description(&self) -> &'static str {
        "Unicode UAX #29 sentence boundaries"
    }
}

/// Creates the segmenter for a configured strategy.
#[must_use]
pub fn create_segmenter(kind: SegmenterKind) -> Box<dyn Segmenter> {
    match kind {
        SegmenterKind::Punctuation => Box::new(PunctuationSegmenter),
        SegmenterKind::Unicode => Box::new(UnicodeSegmenter),
    }
}

/// Lists available segmenter names.
#[must_use]
pub fn available_segmenters() -> Vec<&'static str> {
    vec!["punctuation", "unicode"]
}

/// Segments text with the default punctuation strategy.
#[must_use]
pub fn segment(text: &str) -> Vec<Sentence> {
    PunctuationSegmenter.segment(text)
}
