//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    OutputFormat, SummaryReport, TermCount, format_presets, format_ranking, format_summaries,
    format_written,
};
use crate::cli::parser::{Cli, Commands, TuningArgs};
use crate::error::{CommandError, Result};
use crate::io::{STDIN_LABEL, read_file, read_stream, write_file};
use crate::summarizer::{
    ConfigOverrides, Mode, Preset, SegmenterKind, StudyNotes, Summarizer, SummarizerConfig,
    summarize_batch,
};
use std::io;
use std::path::{Path, PathBuf};

/// Path argument that stands for standard input.
const STDIN_PATH: &str = "-";

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Summarize {
            files,
            tuning,
            notes,
            max_points,
            output,
        } => cmd_summarize(
            files,
            tuning,
            notes.then_some(*max_points),
            output.as_deref(),
            format,
        ),
        Commands::Rank {
            file,
            tuning,
            top_terms,
        } => cmd_rank(file.as_deref(), tuning, *top_terms, format),
        Commands::Presets => Ok(format_presets(format)),
    }
}

/// Builds the summarizer configuration from preset, config file and flags.
///
/// # Errors
///
/// Returns an error if a name is unknown, the config file cannot be read or
/// parsed, or the merged configuration fails validation.
pub fn resolve_config(tuning: &TuningArgs) -> Result<SummarizerConfig> {
    let preset = tuning
        .preset
        .as_deref()
        .map_or(Ok(Preset::Frequency), Preset::parse)?;
    let mut config = preset.config();

    if let Some(path) = &tuning.config {
        config.apply(&ConfigOverrides::from_file(path)?);
        tracing::debug!(path = %path.display(), "applied config file");
    }

    config.apply(&overrides_from_flags(tuning)?);
    config.validate()?;
    tracing::debug!(preset = preset.name(), ?config, "resolved configuration");
    Ok(config)
}

fn overrides_from_flags(tuning: &TuningArgs) -> Result<ConfigOverrides> {
    Ok(ConfigOverrides {
        mode: tuning.mode.as_deref().map(Mode::parse).transpose()?,
        sentence_cap: tuning.sentence_cap,
        position_bonus: tuning.position_bonus,
        budget_fraction: tuning.budget_fraction,
        min_count: tuning.min_count,
        max_count: tuning.max_count,
        unbounded: tuning.no_max_count,
        char_budget: tuning.char_budget,
        segmenter: tuning
            .segmenter
            .as_deref()
            .map(SegmenterKind::parse)
            .transpose()?,
        clean_input: tuning.clean.then_some(true),
        max_input_chars: tuning.max_input_chars,
    })
}

/// A text to summarize and where it came from.
struct Input {
    source: String,
    text: String,
}

fn read_stdin() -> Result<Input> {
    let text = read_stream(io::stdin().lock(), STDIN_LABEL)?;
    tracing::info!(bytes = text.len(), "read stdin");
    Ok(Input {
        source: STDIN_LABEL.to_string(),
        text,
    })
}

fn read_input(path: &Path) -> Result<Input> {
    if path.as_os_str() == STDIN_PATH {
        return read_stdin();
    }
    let text = read_file(path)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "read input");
    Ok(Input {
        source: path.display().to_string(),
        text,
    })
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    if files
        .iter()
        .filter(|path| path.as_os_str() == STDIN_PATH)
        .count()
        > 1
    {
        return Err(
            CommandError::InvalidArgument("stdin ('-') can only be read once".to_string()).into(),
        );
    }
    files.iter().map(|path| read_input(path)).collect()
}

fn cmd_summarize(
    files: &[PathBuf],
    tuning: &TuningArgs,
    notes: Option<usize>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    if notes == Some(0) {
        return Err(CommandError::InvalidArgument("--max-points must be > 0".to_string()).into());
    }

    let summarizer = Summarizer::new(resolve_config(tuning)?)?;
    let inputs = read_inputs(files)?;
    let texts: Vec<&str> = inputs.iter().map(|input| input.text.as_str()).collect();
    let summaries = summarize_batch(&summarizer, &texts);

    let reports: Vec<SummaryReport> = inputs
        .into_iter()
        .zip(summaries)
        .map(|(input, summary)| {
            if summary.is_empty_input() {
                tracing::warn!(source = %input.source, "input has no text");
            }
            let notes =
                notes.and_then(|max_points| StudyNotes::from_summary(&summary.summary, max_points));
            SummaryReport {
                source: input.source,
                summary,
                notes,
            }
        })
        .collect();

    let rendered = format_summaries(&reports, format);
    match output {
        Some(path) => {
            write_file(path, &rendered)?;
            tracing::info!(path = %path.display(), "wrote summaries");
            Ok(format_written(path, reports.len(), format))
        }
        None => Ok(rendered),
    }
}

fn cmd_rank(
    file: Option<&Path>,
    tuning: &TuningArgs,
    top_terms: usize,
    format: OutputFormat,
) -> Result<String> {
    let summarizer = Summarizer::new(resolve_config(tuning)?)?;
    let input = file.map_or_else(read_stdin, read_input)?;

    let ranked = summarizer.rank(&input.text);
    let freq = summarizer.frequencies(&input.text);
    let terms: Vec<TermCount> = freq
        .most_common(top_terms)
        .into_iter()
        .map(|(term, count)| TermCount {
            term: term.to_string(),
            count,
        })
        .collect();

    Ok(format_ranking(&ranked, &terms, format))
}
