//! Budgeted top-k sentence selection.

use crate::core::{ScoredSentence, Sentence};

/// Number of sentences to keep out of `total` candidates.
///
/// `ceil(total * budget_fraction)`, raised to `min_count`, capped at
/// `max_count` (unbounded when `None`), and never more than `total`.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::selection_size;
///
/// assert_eq!(selection_size(3, 0.25, 3, Some(5)), 3);
/// assert_eq!(selection_size(40, 0.25, 3, Some(5)), 5);
/// assert_eq!(selection_size(100, 0.15, 5, None), 15);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn selection_size(
    total: usize,
    budget_fraction: f64,
    min_count: usize,
    max_count: Option<usize>,
) -> usize {
    let wanted = (total as f64 * budget_fraction).ceil() as usize;
    let mut count = wanted.max(min_count);
    if let Some(max) = max_count {
        count = count.min(max);
    }
    count.min(total)
}

/// Picks the top-scoring sentences and returns them in reading order.
///
/// Content-free sentences (stopwords only) are never candidates and do not
/// count towards the selection size, so padding a text with them leaves the
/// selection unchanged. The ranking sort is stable, so on equal scores the
/// sentence with the lower original index wins.
#[must_use]
pub fn select(
    mut scored: Vec<ScoredSentence>,
    budget_fraction: f64,
    min_count: usize,
    max_count: Option<usize>,
) -> Vec<Sentence> {
    scored.retain(|candidate| !candidate.sentence.is_content_free());
    let keep = selection_size(scored.len(), budget_fraction, min_count, max_count);

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(keep);

    let mut selected: Vec<Sentence> = scored.into_iter().map(|s| s.sentence).collect();
    selected.sort_by_key(|sentence| sentence.index);
    selected
}
