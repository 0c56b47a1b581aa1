//! Study notes rendering.
//!
//! Turns a finished summary into key-point bullets plus a few templated
//! practice questions about its apparent topic.

use crate::summarizer::EMPTY_INPUT_MESSAGE;
use crate::summarizer::segment::segment;
use regex::Regex;
use serde::Serialize;
use std::fmt::Write;
use std::sync::OnceLock;

/// Default number of key points.
pub const DEFAULT_MAX_POINTS: usize = 5;

/// Topic used when the summary has no capitalized phrase.
const FALLBACK_TOPIC: &str = "the topic";

#[allow(clippy::expect_used)]
fn topic_regex() -> &'static Regex {
    static TOPIC: OnceLock<Regex> = OnceLock::new();
    TOPIC.get_or_init(|| {
        Regex::new(r"\b([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+){0,2})\b").expect("valid regex")
    })
}

/// Key points and practice questions derived from a summary.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::StudyNotes;
///
/// let notes = StudyNotes::from_summary("Photosynthesis feeds plants. It needs light.", 5)
///     .unwrap();
/// assert_eq!(notes.topic, "Photosynthesis");
/// assert_eq!(notes.key_points.len(), 2);
/// assert!(notes.render().starts_with("Key Points:\n• Photosynthesis feeds plants."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyNotes {
    /// Leading sentences of the summary.
    pub key_points: Vec<String>,

    /// First capitalized phrase of the summary.
    pub topic: String,

    /// Practice questions about the topic.
    pub questions: Vec<String>,
}

impl StudyNotes {
    /// Builds notes from a summary.
    ///
    /// Returns `None` for an empty summary or the empty-input sentinel.
    #[must_use]
    pub fn from_summary(summary: &str, max_points: usize) -> Option<Self> {
        if summary.trim().is_empty() || summary == EMPTY_INPUT_MESSAGE {
            return None;
        }

        let key_points = segment(summary)
            .into_iter()
            .take(max_points)
            .map(|sentence| sentence.text)
            .collect();

        let topic = topic_regex()
            .captures(summary)
            .and_then(|caps| caps.get(1))
            .map_or_else(|| FALLBACK_TOPIC.to_string(), |m| m.as_str().to_string());

        let questions = vec![
            format!("1) What problem does {topic} address, and why is it important?"),
            format!("2) List two key takeaways about {topic}."),
            format!("3) How could you apply {topic} in a real scenario?"),
        ];

        Some(Self {
            key_points,
            topic,
            questions,
        })
    }

    /// Renders the notes as plain text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::from("Key Points:\n");
        for point in &self.key_points {
            let _ = writeln!(output, "• {point}");
        }
        output.push_str("\nPractice Questions:\n");
        output.push_str(&self.questions.join("\n"));
        output
    }
}
