//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats. JSON output keeps a top-level
//! `summary` field per input and reports errors as `{"detail": ...}`.

use crate::core::{RankedSentence, Summary};
use crate::error::Error;
use crate::summarizer::{Preset, StudyNotes};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// The summary of one input, labelled with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// File path or `<stdin>`.
    pub source: String,

    /// The summarization result.
    #[serde(flatten)]
    pub summary: Summary,

    /// Study notes, when requested and the summary is not the sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<StudyNotes>,
}

impl SummaryReport {
    /// Text body: rendered notes if present, otherwise the summary.
    #[must_use]
    pub fn body(&self) -> String {
        self.notes
            .as_ref()
            .map_or_else(|| self.summary.summary.clone(), StudyNotes::render)
    }
}

/// Formats summarization results.
///
/// A single report prints bare; several reports are headed by their source
/// in text mode and form an array in JSON mode.
#[must_use]
pub fn format_summaries(reports: &[SummaryReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_summaries_text(reports),
        OutputFormat::Json => match reports {
            [single] => format_json(single),
            _ => format_json(&reports),
        },
    }
}

fn format_summaries_text(reports: &[SummaryReport]) -> String {
    let mut output = String::new();
    if let [single] = reports {
        output.push_str(&single.body());
        output.push('\n');
        return output;
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = writeln!(output, "==> {} <==", report.source);
        output.push_str(&report.body());
        output.push('\n');
    }
    output
}

/// Formats the confirmation printed after writing results to a file.
#[must_use]
pub fn format_written(path: &Path, count: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let noun = if count == 1 { "summary" } else { "summaries" };
            format!("Wrote {count} {noun} to {}\n", path.display())
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Written<'a> {
                written: usize,
                path: &'a str,
            }
            format_json(&Written {
                written: count,
                path: &path.to_string_lossy(),
            })
        }
    }
}

/// A term and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    /// The content token.
    pub term: String,
    /// Occurrences across the text.
    pub count: usize,
}

/// Formats the ranking diagnostics.
#[must_use]
pub fn format_ranking(
    sentences: &[RankedSentence],
    terms: &[TermCount],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => format_ranking_text(sentences, terms),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Ranking<'a> {
                sentences: &'a [RankedSentence],
                top_terms: &'a [TermCount],
            }
            format_json(&Ranking {
                sentences,
                top_terms: terms,
            })
        }
    }
}

fn format_ranking_text(sentences: &[RankedSentence], terms: &[TermCount]) -> String {
    if sentences.is_empty() {
        return "No sentences found.\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "{:<6} {:<9} {:<4} Sentence", "Index", "Score", "Sel");
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for sentence in sentences {
        let score = sentence
            .score
            .map_or_else(|| "-".to_string(), |s| format!("{s:.3}"));
        let selected = if sentence.selected { "*" } else { "" };
        let _ = writeln!(
            output,
            "{:<6} {:<9} {:<4} {}",
            sentence.index,
            score,
            selected,
            truncate(&sentence.text, 50)
        );
    }

    if !terms.is_empty() {
        output.push_str("\nTop terms:\n");
        for term in terms {
            let _ = writeln!(output, "  {:<20} {}", term.term, term.count);
        }
    }

    output
}

/// Formats the preset table.
#[must_use]
pub fn format_presets(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_presets_text(),
        OutputFormat::Json => {
            let mut presets = serde_json::Map::new();
            for preset in Preset::all() {
                let config = serde_json::to_value(preset.config()).unwrap_or_default();
                presets.insert(preset.name().to_string(), config);
            }
            format_json(&presets)
        }
    }
}

fn format_presets_text() -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<16} {:<10} {:<5} {:<6} {:<9} {:<4} {:<5} Budget",
        "Preset", "Mode", "Cap", "Bonus", "Fraction", "Min", "Max"
    );
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for preset in Preset::all() {
        let config = preset.config();
        let max = config
            .max_count
            .map_or_else(|| "none".to_string(), |m| m.to_string());
        let _ = writeln!(
            output,
            "{:<16} {:<10} {:<5} {:<6} {:<9} {:<4} {:<5} {}",
            preset.name(),
            config.mode.name(),
            config.sentence_cap,
            config.position_bonus,
            config.budget_fraction,
            config.min_count,
            max,
            config.char_budget
        );
    }

    output
}

/// Formats an error for the selected output format.
///
/// JSON errors use a `detail` field.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorBody {
                detail: String,
            }
            format_json(&ErrorBody {
                detail: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Truncates a string to `max_chars` characters with ellipsis.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}
