//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// brief-rs: extractive text summarization.
///
/// Condenses text into a short summary built from its own sentences.
#[derive(Parser, Debug)]
#[command(name = "brief-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Summarizer tuning shared by the summarizing commands.
///
/// Layered lowest to highest: preset, config file, individual flags.
#[derive(Args, Debug, Clone, Default)]
pub struct TuningArgs {
    /// Named preset (naive, lead, frequency, frequency-wide).
    ///
    /// Defaults to `frequency`.
    #[arg(short, long, env = "BRIEF_PRESET")]
    pub preset: Option<String>,

    /// JSON config file with field overrides.
    #[arg(short, long, env = "BRIEF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Selection mode (naive, frequency).
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Maximum summary length in characters.
    #[arg(long)]
    pub char_budget: Option<usize>,

    /// Score bonus for the first three sentences.
    #[arg(long)]
    pub position_bonus: Option<f64>,

    /// Fraction of candidate sentences to keep (0 to 1).
    #[arg(long)]
    pub budget_fraction: Option<f64>,

    /// Minimum number of selected sentences.
    #[arg(long)]
    pub min_count: Option<usize>,

    /// Maximum number of selected sentences.
    #[arg(long)]
    pub max_count: Option<usize>,

    /// Remove the upper bound on selected sentences.
    #[arg(long, conflicts_with = "max_count")]
    pub no_max_count: bool,

    /// Maximum number of candidate sentences read from the text.
    #[arg(long)]
    pub sentence_cap: Option<usize>,

    /// Sentence segmenter (punctuation, unicode).
    #[arg(long)]
    pub segmenter: Option<String>,

    /// Strip caption cues, timestamps and URLs first.
    #[arg(long)]
    pub clean: bool,

    /// Truncate normalized input to this many characters.
    #[arg(long)]
    pub max_input_chars: Option<usize>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize text files or stdin.
    ///
    /// Reads stdin when no file is given; `-` also stands for stdin.
    /// Multiple files are summarized in parallel.
    #[command(alias = "sum")]
    Summarize {
        /// Input files.
        files: Vec<PathBuf>,

        /// Summarizer tuning.
        #[command(flatten)]
        tuning: TuningArgs,

        /// Render study notes (key points and practice questions).
        #[arg(short, long)]
        notes: bool,

        /// Maximum key points in study notes.
        #[arg(long, default_value = "5")]
        max_points: usize,

        /// Write the result to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show every candidate sentence with its score and selection.
    Rank {
        /// Input file (stdin if omitted or `-`).
        file: Option<PathBuf>,

        /// Summarizer tuning.
        #[command(flatten)]
        tuning: TuningArgs,

        /// Number of most frequent terms to list.
        #[arg(long, default_value = "10")]
        top_terms: usize,
    },

    /// List the built-in presets and their parameters.
    Presets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        // Test that CLI can be created
        Cli::command().debug_assert();
    }

    #[test]
    fn test_summarize_flags() {
        let cli = Cli::try_parse_from([
            "brief-rs",
            "--format",
            "json",
            "summarize",
            "a.txt",
            "-",
            "--preset",
            "naive",
            "--char-budget",
            "200",
            "--notes",
        ])
        .unwrap();

        assert_eq!(cli.format, "json");
        let Commands::Summarize {
            files,
            tuning,
            notes,
            max_points,
            output,
        } = cli.command
        else {
            panic!("expected summarize");
        };
        assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("-")]);
        assert_eq!(tuning.preset.as_deref(), Some("naive"));
        assert_eq!(tuning.char_budget, Some(200));
        assert!(notes);
        assert_eq!(max_points, 5);
        assert!(output.is_none());
    }

    #[test]
    fn test_max_count_conflicts_with_unbounded() {
        let result = Cli::try_parse_from([
            "brief-rs",
            "summarize",
            "--max-count",
            "3",
            "--no-max-count",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rank_defaults() {
        let cli = Cli::try_parse_from(["brief-rs", "rank"]).unwrap();
        let Commands::Rank {
            file, top_terms, ..
        } = cli.command
        else {
            panic!("expected rank");
        };
        assert!(file.is_none());
        assert_eq!(top_terms, 10);
    }
}
