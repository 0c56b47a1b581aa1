//! Extractive summarization pipeline.
//!
//! Each stage is a pure function of its input:
//!
//! 1. [`normalize`] collapses whitespace (empty input short-circuits)
//! 2. a [`Segmenter`] splits the text into candidate sentences
//! 3. [`tokenize`] and [`is_stopword`] extract content tokens
//! 4. [`FrequencyTable`] counts content tokens across the whole text
//! 5. [`score`] rates each sentence
//! 6. [`select`] keeps the best sentences in reading order
//! 7. [`format_summary`] joins and truncates them
//!
//! Naive mode stops after step 2 and keeps the leading sentences.

pub mod batch;
pub mod config;
pub mod format;
pub mod frequency;
pub mod normalize;
pub mod notes;
pub mod score;
pub mod segment;
pub mod select;
pub mod tokenize;

pub use batch::summarize_batch;
pub use config::{
    ConfigOverrides, MIN_CHAR_BUDGET, Mode, Preset, SegmenterKind, SummarizerConfig,
};
pub use format::format_summary;
pub use frequency::FrequencyTable;
pub use normalize::{clean_transcript, normalize};
pub use notes::StudyNotes;
pub use score::{LEAD_SENTENCES, score, score_all};
pub use segment::{
    PunctuationSegmenter, Segmenter, UnicodeSegmenter, available_segmenters, create_segmenter,
    segment,
};
pub use select::{select, selection_size};
pub use tokenize::{STOPWORDS, content_tokens, is_stopword, tokenize};

use crate::core::{RankedSentence, Sentence, Summary};
use crate::error::Result;
use crate::io::truncate_chars;
use std::collections::HashSet;
use std::fmt;

/// Result returned for empty or whitespace-only input.
pub const EMPTY_INPUT_MESSAGE: &str = "No text provided.";

/// Summarizes text with the preset for `mode`.
///
/// Never fails: empty or whitespace-only input yields
/// [`EMPTY_INPUT_MESSAGE`].
///
/// # Examples
///
/// ```
/// use brief_rs::{Mode, summarize};
///
/// assert_eq!(summarize("Hello world.", Mode::Naive), "Hello world.");
/// assert_eq!(summarize("   ", Mode::Frequency), "No text provided.");
/// ```
#[must_use]
pub fn summarize(text: &str, mode: Mode) -> String {
    Summarizer::from_preset(mode.preset()).summarize(text)
}

/// Normalized input and its capped candidate sentences.
struct Prepared {
    normalized: String,
    candidates: Vec<Sentence>,
}

/// A configured summarization pipeline.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent calls.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::{Preset, Summarizer};
///
/// let config = Preset::Frequency.config().with_char_budget(40);
/// let summarizer = Summarizer::new(config).unwrap();
/// let summary = summarizer.run("Cats are mammals. Cats like fish. It is sunny today.");
/// assert_eq!(summary.sentences_total, 3);
/// assert!(summary.summary.chars().count() <= 40);
/// ```
pub struct Summarizer {
    config: SummarizerConfig,
    segmenter: Box<dyn Segmenter>,
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("config", &self.config)
            .field("segmenter", &self.segmenter.name())
            .finish()
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::from_preset(Preset::Frequency)
    }
}

impl Summarizer {
    /// Creates a summarizer from a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config fails validation.
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Creates a summarizer from a preset.
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        Self::build(preset.config())
    }

    fn build(config: SummarizerConfig) -> Self {
        let segmenter = create_segmenter(config.segmenter);
        Self { config, segmenter }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarizes text, returning only the summary string.
    #[must_use]
    pub fn summarize(&self, text: &str) -> String {
        self.run(text).summary
    }

    /// Summarizes text, returning the summary with selection statistics.
    #[must_use]
    pub fn run(&self, text: &str) -> Summary {
        let Some(prepared) = self.prepare(text) else {
            return Summary::empty(self.config.mode);
        };
        let sentences_total = prepared.candidates.len();

        let selected = match self.config.mode {
            Mode::Naive => prepared.candidates,
            Mode::Frequency => {
                let freq = FrequencyTable::from_text(&prepared.normalized);
                tracing::debug!(
                    terms = freq.len(),
                    occurrences = freq.total(),
                    "built frequency table"
                );
                let scored = score_all(prepared.candidates, &freq, self.config.position_bonus);
                select(
                    scored,
                    self.config.budget_fraction,
                    self.config.min_count,
                    self.config.max_count,
                )
            }
        };
        tracing::debug!(
            selected = selected.len(),
            total = sentences_total,
            "selected sentences"
        );

        Summary {
            summary: format_summary(&selected, &prepared.normalized, self.config.char_budget),
            mode: self.config.mode,
            sentences_total,
            sentences_selected: selected.len(),
        }
    }

    /// Reports every candidate sentence with its score and selection.
    ///
    /// Naive mode reports no scores and marks every candidate selected.
    #[must_use]
    pub fn rank(&self, text: &str) -> Vec<RankedSentence> {
        let Some(prepared) = self.prepare(text) else {
            return Vec::new();
        };

        match self.config.mode {
            Mode::Naive => prepared
                .candidates
                .into_iter()
                .map(|sentence| RankedSentence {
                    index: sentence.index,
                    text: sentence.text,
                    score: None,
                    selected: true,
                })
                .collect(),
            Mode::Frequency => {
                let freq = FrequencyTable::from_text(&prepared.normalized);
                let scored = score_all(prepared.candidates, &freq, self.config.position_bonus);
                let chosen: HashSet<usize> = select(
                    scored.clone(),
                    self.config.budget_fraction,
                    self.config.min_count,
                    self.config.max_count,
                )
                .iter()
                .map(|sentence| sentence.index)
                .collect();

                scored
                    .into_iter()
                    .map(|scored| RankedSentence {
                        selected: chosen.contains(&scored.sentence.index),
                        index: scored.sentence.index,
                        text: scored.sentence.text,
                        score: Some(scored.score),
                    })
                    .collect()
            }
        }
    }

    /// Builds the frequency table this summarizer would score against.
    #[must_use]
    pub fn frequencies(&self, text: &str) -> FrequencyTable {
        self.prepare(text)
            .map(|prepared| FrequencyTable::from_text(&prepared.normalized))
            .unwrap_or_default()
    }

    fn prepare(&self, text: &str) -> Option<Prepared> {
        let normalized = if self.config.clean_input {
            clean_transcript(text)
        } else {
            normalize(text)
        };
        if normalized.is_empty() {
            tracing::debug!("empty input");
            return None;
        }

        let normalized = match self.config.max_input_chars {
            Some(limit) => {
                let kept = truncate_chars(&normalized, limit).trim_end();
                if kept.len() < normalized.len() {
                    tracing::debug!(limit, "input truncated before segmentation");
                }
                kept.to_string()
            }
            None => normalized,
        };

        let mut candidates = self.segmenter.segment(&normalized);
        let found = candidates.len();
        candidates.truncate(self.config.sentence_cap);
        tracing::debug!(
            found,
            kept = candidates.len(),
            segmenter = self.segmenter.name(),
            "segmented input"
        );

        Some(Prepared {
            normalized,
            candidates,
        })
    }
}
