//! Summarizer configuration and named presets.
//!
//! Every tunable of the algorithm lives in [`SummarizerConfig`]. Presets
//! provide the parameter sets in common use; a config file or individual
//! overrides can then adjust any field through [`ConfigOverrides`].

use crate::error::{ConfigError, Result};
use crate::io::read_file;
use crate::summarizer::EMPTY_INPUT_MESSAGE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest accepted character budget: the empty-input result must fit.
pub const MIN_CHAR_BUDGET: usize = EMPTY_INPUT_MESSAGE.len();

/// How sentences are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Keep the leading sentences without scoring.
    Naive,
    /// Rank sentences by term frequency and position.
    Frequency,
}

impl Mode {
    /// The preset used by [`crate::summarize`] for this mode.
    #[must_use]
    pub const fn preset(self) -> Preset {
        match self {
            Self::Naive => Preset::Naive,
            Self::Frequency => Preset::Frequency,
        }
    }

    /// Returns the mode name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Frequency => "frequency",
        }
    }

    /// Parses a mode name (case-insensitive; `advanced` is an alias of
    /// `frequency`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "frequency" | "advanced" => Ok(Self::Frequency),
            _ => Err(ConfigError::InvalidValue {
                field: "mode",
                reason: format!("unknown mode '{name}' (expected naive or frequency)"),
            }
            .into()),
        }
    }
}

/// Sentence segmentation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// Split after terminal punctuation followed by whitespace.
    #[default]
    Punctuation,
    /// Unicode UAX #29 sentence boundaries.
    Unicode,
}

impl SegmenterKind {
    /// Parses a segmenter name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownSegmenter`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "punctuation" => Ok(Self::Punctuation),
            "unicode" => Ok(Self::Unicode),
            _ => Err(ConfigError::UnknownSegmenter {
                name: name.to_string(),
            }
            .into()),
        }
    }
}

/// Named parameter sets.
///
/// | preset           | mode      | cap | bonus | fraction | min | max  | budget |
/// |------------------|-----------|-----|-------|----------|-----|------|--------|
/// | `naive`          | naive     | 6   | -     | -        | -   | -    | 700    |
/// | `lead`           | naive     | 5   | -     | -        | -   | -    | 1200   |
/// | `frequency`      | frequency | 120 | 0.5   | 0.25     | 3   | 5    | 900    |
/// | `frequency-wide` | frequency | 120 | 0.3   | 0.15     | 5   | none | 1400   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// First six sentences, 700 characters.
    Naive,
    /// First five sentences, 1200 characters.
    Lead,
    /// Frequency ranking, 3 to 5 sentences, 900 characters.
    Frequency,
    /// Frequency ranking, at least 5 sentences, 1400 characters.
    FrequencyWide,
}

impl Preset {
    /// Returns all presets.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Naive, Self::Lead, Self::Frequency, Self::FrequencyWide]
    }

    /// Returns the preset name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Lead => "lead",
            Self::Frequency => "frequency",
            Self::FrequencyWide => "frequency-wide",
        }
    }

    /// Parses a preset name (case-insensitive; `advanced` is an alias of
    /// `frequency`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "lead" => Ok(Self::Lead),
            "frequency" | "advanced" => Ok(Self::Frequency),
            "frequency-wide" => Ok(Self::FrequencyWide),
            _ => Err(ConfigError::UnknownPreset {
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Returns the configuration for this preset.
    #[must_use]
    pub const fn config(self) -> SummarizerConfig {
        match self {
            Self::Naive => SummarizerConfig::naive(6, 700),
            Self::Lead => SummarizerConfig::naive(5, 1200),
            Self::Frequency => SummarizerConfig::frequency(0.5, 0.25, 3, Some(5), 900),
            Self::FrequencyWide => SummarizerConfig::frequency(0.3, 0.15, 5, None, 1400),
        }
    }
}

/// The complete tunable surface of the summarizer.
///
/// # Examples
///
/// ```
/// use brief_rs::summarizer::{Mode, Preset, SummarizerConfig};
///
/// let config = Preset::Frequency.config().with_char_budget(400);
/// assert_eq!(config.mode, Mode::Frequency);
/// assert_eq!(config.char_budget, 400);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Selection mode.
    pub mode: Mode,

    /// Maximum number of candidate sentences taken from the start of the text.
    pub sentence_cap: usize,

    /// Score added to the first three sentences (frequency mode).
    pub position_bonus: f64,

    /// Fraction of candidates to keep before the count bounds apply.
    pub budget_fraction: f64,

    /// Lower bound on selected sentences.
    pub min_count: usize,

    /// Upper bound on selected sentences (`None` = unbounded).
    pub max_count: Option<usize>,

    /// Maximum summary length in characters.
    pub char_budget: usize,

    /// Sentence segmentation strategy.
    #[serde(default)]
    pub segmenter: SegmenterKind,

    /// Strip caption cues, timestamps and URLs before summarizing.
    #[serde(default)]
    pub clean_input: bool,

    /// Truncate the normalized input to this many characters.
    #[serde(default)]
    pub max_input_chars: Option<usize>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Preset::Frequency.config()
    }
}

impl SummarizerConfig {
    /// Creates a naive-mode configuration.
    #[must_use]
    pub const fn naive(sentence_cap: usize, char_budget: usize) -> Self {
        Self {
            mode: Mode::Naive,
            sentence_cap,
            position_bonus: 0.0,
            budget_fraction: 1.0,
            min_count: 0,
            max_count: None,
            char_budget,
            segmenter: SegmenterKind::Punctuation,
            clean_input: false,
            max_input_chars: None,
        }
    }

    /// Creates a frequency-mode configuration with the default 120 sentence cap.
    #[must_use]
    pub const fn frequency(
        position_bonus: f64,
        budget_fraction: f64,
        min_count: usize,
        max_count: Option<usize>,
        char_budget: usize,
    ) -> Self {
        Self {
            mode: Mode::Frequency,
            sentence_cap: 120,
            position_bonus,
            budget_fraction,
            min_count,
            max_count,
            char_budget,
            segmenter: SegmenterKind::Punctuation,
            clean_input: false,
            max_input_chars: None,
        }
    }

    /// Sets the character budget.
    #[must_use]
    pub const fn with_char_budget(mut self, char_budget: usize) -> Self {
        self.char_budget = char_budget;
        self
    }

    /// Sets the segmentation strategy.
    #[must_use]
    pub const fn with_segmenter(mut self, segmenter: SegmenterKind) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Enables or disables transcript cleaning.
    #[must_use]
    pub const fn with_clean_input(mut self, clean_input: bool) -> Self {
        self.clean_input = clean_input;
        self
    }

    /// Sets the input length cap.
    #[must_use]
    pub const fn with_max_input_chars(mut self, max_input_chars: Option<usize>) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// Applies overrides on top of this configuration.
    ///
    /// Changing the mode first resets the selection fields (sentence cap,
    /// bonus, fraction and counts) to that mode's base preset; the other
    /// overrides are then applied on top.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(mode) = overrides.mode
            && mode != self.mode
        {
            self.switch_mode(mode);
        }
        if let Some(cap) = overrides.sentence_cap {
            self.sentence_cap = cap;
        }
        if let Some(bonus) = overrides.position_bonus {
            self.position_bonus = bonus;
        }
        if let Some(fraction) = overrides.budget_fraction {
            self.budget_fraction = fraction;
        }
        if let Some(min) = overrides.min_count {
            self.min_count = min;
        }
        if overrides.unbounded {
            self.max_count = None;
        } else if let Some(max) = overrides.max_count {
            self.max_count = Some(max);
        }
        if let Some(budget) = overrides.char_budget {
            self.char_budget = budget;
        }
        if let Some(segmenter) = overrides.segmenter {
            self.segmenter = segmenter;
        }
        if let Some(clean) = overrides.clean_input {
            self.clean_input = clean;
        }
        if let Some(limit) = overrides.max_input_chars {
            self.max_input_chars = Some(limit);
        }
    }

    fn switch_mode(&mut self, mode: Mode) {
        let base = mode.preset().config();
        self.mode = mode;
        self.sentence_cap = base.sentence_cap;
        self.position_bonus = base.position_bonus;
        self.budget_fraction = base.budget_fraction;
        self.min_count = base.min_count;
        self.max_count = base.max_count;
    }

    /// Checks that the pipeline can run with these values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &'static str, reason: &str| -> Result<()> {
            Err(ConfigError::InvalidValue {
                field,
                reason: reason.to_string(),
            }
            .into())
        };

        if self.sentence_cap == 0 {
            return invalid("sentence_cap", "must be > 0");
        }
        if self.char_budget < MIN_CHAR_BUDGET {
            return invalid(
                "char_budget",
                &format!("must be at least {MIN_CHAR_BUDGET}"),
            );
        }
        if !self.position_bonus.is_finite() || self.position_bonus < 0.0 {
            return invalid("position_bonus", "must be a finite number >= 0");
        }
        if !self.budget_fraction.is_finite() || !(0.0..=1.0).contains(&self.budget_fraction) {
            return invalid("budget_fraction", "must be between 0 and 1");
        }
        if let Some(max) = self.max_count {
            if max == 0 {
                return invalid("max_count", "must be > 0");
            }
            if self.min_count > max {
                return invalid("min_count", "must not exceed max_count");
            }
        }
        if self.max_input_chars == Some(0) {
            return invalid("max_input_chars", "must be > 0");
        }
        Ok(())
    }
}

/// Partial configuration layered over a preset.
///
/// Deserialized from config files and filled from CLI flags. Unset fields
/// leave the underlying value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Selection mode.
    pub mode: Option<Mode>,
    /// Candidate sentence cap.
    pub sentence_cap: Option<usize>,
    /// Position bonus.
    pub position_bonus: Option<f64>,
    /// Budget fraction.
    pub budget_fraction: Option<f64>,
    /// Minimum selected sentences.
    pub min_count: Option<usize>,
    /// Maximum selected sentences.
    pub max_count: Option<usize>,
    /// Remove the upper bound on selected sentences.
    #[serde(default)]
    pub unbounded: bool,
    /// Character budget.
    pub char_budget: Option<usize>,
    /// Segmentation strategy.
    pub segmenter: Option<SegmenterKind>,
    /// Transcript cleaning.
    pub clean_input: Option<bool>,
    /// Input length cap.
    pub max_input_chars: Option<usize>,
}

impl ConfigOverrides {
    /// Parses overrides from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
    }

    /// Loads overrides from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = read_file(path)?;
        Self::from_json(&json)
    }
}
