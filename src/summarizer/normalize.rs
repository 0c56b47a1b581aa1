//! Input normalization and transcript cleaning.

use regex::Regex;
use std::sync::OnceLock;

/// Collapses every whitespace run to a single space and trims the result.
///
/// An empty return value means the input carried no text at all.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::normalize;
///
/// assert_eq!(normalize("  Hello\n\n\tworld.  "), "Hello world.");
/// assert_eq!(normalize(" \n\t "), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Patterns stripped by [`clean_transcript`], applied in order.
#[allow(clippy::expect_used)]
fn noise_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Caption cues such as [Music] or [Applause]
            Regex::new(r"\[[^\]]{1,40}\]").expect("valid regex"),
            // Timestamps: 0:42, 12:07, 1:02:33, optionally parenthesized
            Regex::new(r"\(?\b\d{1,2}:\d{2}(?::\d{2})?\)?").expect("valid regex"),
            Regex::new(r"https?://\S+").expect("valid regex"),
        ]
    })
}

/// Strips transcript and web-page noise before summarization.
///
/// Removes caption cues, timestamps and URLs, replacing each with a space so
/// neighbouring words stay apart, and turns non-breaking spaces into regular
/// ones. Whitespace is collapsed afterwards.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::clean_transcript;
///
/// let raw = "[Music] 00:12 Welcome back. See https://example.com/x for notes.";
/// assert_eq!(clean_transcript(raw), "Welcome back. See for notes.");
/// ```
#[must_use]
pub fn clean_transcript(text: &str) -> String {
    let mut cleaned = text.replace('\u{a0}', " ");
    for pattern in noise_patterns() {
        cleaned = pattern.replace_all(&cleaned, " ").into_owned();
    }
    normalize(&cleaned)
}
