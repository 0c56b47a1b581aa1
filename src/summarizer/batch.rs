//! Parallel summarization of independent inputs.
//!
//! Each input runs its own pipeline; nothing is shared between inputs
//! except the read-only [`Summarizer`].

use crate::core::Summary;
use crate::summarizer::Summarizer;
use rayon::prelude::*;

/// Summarizes every input in parallel, preserving input order.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::{Preset, Summarizer, summarize_batch};
///
/// let summarizer = Summarizer::from_preset(Preset::Naive);
/// let results = summarize_batch(&summarizer, &["First text.", "", "Second text."]);
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].summary, "First text.");
/// assert!(results[1].is_empty_input());
/// ```
#[must_use]
pub fn summarize_batch<S>(summarizer: &Summarizer, inputs: &[S]) -> Vec<Summary>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(inputs = inputs.len(), "summarizing batch");
    inputs
        .par_iter()
        .map(|input| summarizer.run(input.as_ref()))
        .collect()
}
