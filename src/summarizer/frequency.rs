//! Global term-frequency model.

use crate::summarizer::tokenize::{is_stopword, tokenize};
use std::collections::HashMap;

/// Occurrence counts of content tokens across one whole input.
///
/// Built once per summarization call and read-only afterwards.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::FrequencyTable;
///
/// let table = FrequencyTable::from_text("Cats are mammals. Cats like fish.");
/// assert_eq!(table.get("cats"), 2);
/// assert_eq!(table.get("are"), 0);
/// assert_eq!(table.get("dogs"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Counts the non-stopword tokens of a flat token sequence.
    #[must_use]
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            let word = word.as_ref();
            if !is_stopword(word) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Tokenizes the text and counts its content tokens.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::build(tokenize(text))
    }

    /// Returns the count for a token, 0 if absent.
    #[must_use]
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no content token was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted token occurrences.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent tokens, count descending then alphabetical.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}
