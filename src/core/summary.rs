//! Summary result record.

use crate::summarizer::EMPTY_INPUT_MESSAGE;
use crate::summarizer::config::Mode;
use serde::Serialize;

/// The outcome of one summarization call.
///
/// Serializes with a `summary` field so it can stand in for the response
/// body of a remote `summarize/text` endpoint.
///
/// # Examples
///
/// ```
/// use brief_rs::core::Summary;
/// use brief_rs::summarizer::Mode;
///
/// let summary = Summary::empty(Mode::Naive);
/// assert_eq!(summary.summary, "No text provided.");
/// assert!(summary.is_empty_input());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The summary text.
    pub summary: String,

    /// Mode that produced the summary.
    pub mode: Mode,

    /// Candidate sentences considered after the sentence cap.
    pub sentences_total: usize,

    /// Sentences that made it into the summary.
    pub sentences_selected: usize,
}

impl Summary {
    /// The result for empty or whitespace-only input.
    #[must_use]
    pub fn empty(mode: Mode) -> Self {
        Self {
            summary: EMPTY_INPUT_MESSAGE.to_string(),
            mode,
            sentences_total: 0,
            sentences_selected: 0,
        }
    }

    /// Returns true if this is the empty-input sentinel result.
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        self.sentences_total == 0 && self.summary == EMPTY_INPUT_MESSAGE
    }
}
