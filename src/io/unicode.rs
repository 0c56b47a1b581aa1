//! Unicode utilities for text budgets.
//!
//! Character budgets count Unicode scalar values, so truncation never
//! splits a multi-byte character.

/// Returns the prefix of `s` holding at most `max_chars` characters.
///
/// # Examples
///
/// ```
/// use brief_rs::io::truncate_chars;
///
/// assert_eq!(truncate_chars("Hello", 3), "Hel");
/// assert_eq!(truncate_chars("世界!", 2), "世界");
/// assert_eq!(truncate_chars("Hello", 10), "Hello");
/// ```
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end_byte, _)) => &s[..end_byte],
        None => s,
    }
}

/// Validates that a byte slice is valid UTF-8.
///
/// # Errors
///
/// Returns the byte offset of the first invalid UTF-8 sequence.
pub fn validate_utf8(bytes: &[u8]) -> std::result::Result<&str, usize> {
    std::str::from_utf8(bytes).map_err(|e| e.valid_up_to())
}
