//! Summary output formatting.

use crate::core::Sentence;
use crate::io::truncate_chars;

/// Joins the selected sentences and truncates to `char_budget` characters.
///
/// When nothing was selected, the normalized source text is truncated
/// instead, so the result is only empty if the source is.
///
/// # Examples
///
/// ```
/// use brief_rs::core::Sentence;
/// use brief_rs::summarizer::format_summary;
///
/// let sentences = vec![
///     Sentence::new(0, "First.".to_string()),
///     Sentence::new(2, "Third.".to_string()),
/// ];
/// assert_eq!(format_summary(&sentences, "unused", 100), "First. Third.");
/// assert_eq!(format_summary(&sentences, "unused", 8), "First. T");
/// assert_eq!(format_summary(&[], "Fallback text", 8), "Fallback");
/// ```
#[must_use]
pub fn format_summary(sentences: &[Sentence], fallback: &str, char_budget: usize) -> String {
    let joined = sentences
        .iter()
        .map(|sentence| sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let source = if joined.is_empty() {
        tracing::debug!("no sentences selected, falling back to source text");
        fallback
    } else {
        joined.as_str()
    };

    truncate_chars(source, char_budget).to_string()
}
