//! Integration tests for brief-rs.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use brief_rs::cli::{Cli, execute};
use brief_rs::summarizer::{
    ConfigOverrides, Preset, STOPWORDS, SegmenterKind, StudyNotes, Summarizer, summarize_batch,
};
use brief_rs::{EMPTY_INPUT_MESSAGE, Mode, SummarizerConfig, summarize};
use clap::Parser;
use predicates::prelude::*;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_case::test_case;

const GOLDEN: &str = "Cats are mammals. Cats like fish. It is sunny today.";

const ARTICLE: &str = "\
    The city council approved a new transit plan on Monday.   The plan adds \
    three bus lines and extends the light rail to the airport.\n\nCouncil \
    members debated the transit budget for hours. Some residents worried \
    about construction noise. The transit plan also funds bike lanes. \
    Weather on Monday was mild. A local bakery sold out of bread. \
    Officials expect the transit expansion to finish in four years. \
    The mayor called the transit vote historic. Parking downtown remains \
    scarce.";

/// Helper to build a summarizer with an effectively unlimited char budget.
fn unlimited(mut config: SummarizerConfig) -> Summarizer {
    config.char_budget = 1_000_000;
    Summarizer::new(config).expect("valid config")
}

fn run_cli(args: &[&str]) -> brief_rs::Result<String> {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    execute(&cli)
}

// ==================== End-to-end examples ====================

#[test]
fn test_golden_frequency_summary() {
    assert_eq!(summarize(GOLDEN, Mode::Frequency), GOLDEN);
}

#[test]
fn test_hello_world_naive() {
    assert_eq!(summarize("Hello world.", Mode::Naive), "Hello world.");
}

#[test]
fn test_article_frequency_summary() {
    let summary = Summarizer::default().run(ARTICLE);

    assert_eq!(summary.sentences_total, 10);
    assert_eq!(summary.sentences_selected, 3);
    assert_eq!(
        summary.summary,
        "The city council approved a new transit plan on Monday. \
         Council members debated the transit budget for hours. \
         The transit plan also funds bike lanes."
    );
}

#[test]
fn test_article_naive_summary_collapses_whitespace() {
    let summary = summarize(ARTICLE, Mode::Naive);
    assert!(!summary.contains("  "));
    assert!(!summary.contains('\n'));
    assert!(summary.starts_with("The city council approved a new transit plan on Monday. The plan"));
}

#[test]
fn test_empty_input_law() {
    for mode in [Mode::Naive, Mode::Frequency] {
        assert_eq!(summarize("", mode), EMPTY_INPUT_MESSAGE);
        assert_eq!(summarize("   ", mode), EMPTY_INPUT_MESSAGE);
        assert_eq!(summarize("\n\t \r\n", mode), EMPTY_INPUT_MESSAGE);
    }
}

#[test]
fn test_text_without_terminal_punctuation() {
    let text = "just a long run of words with no ending punctuation at all";
    assert_eq!(summarize(text, Mode::Frequency), text);
    assert_eq!(summarize(text, Mode::Naive), text);
}

#[test]
fn test_tie_stability_prefers_earlier_sentences() {
    let config = SummarizerConfig::frequency(0.0, 0.0, 2, Some(2), 1000);
    let summarizer = Summarizer::new(config).expect("valid config");
    let text = "Apple pie. Apple tart. Apple cake. Apple jam.";
    // Every sentence scores the same, so the two earliest win
    assert_eq!(summarizer.summarize(text), "Apple pie. Apple tart.");
}

#[test]
fn test_transcript_cleaning_end_to_end() {
    let transcript = "[Music] (0:05) Welcome to the lecture. 12:30 Today we cover \
                      photosynthesis. See https://example.com/slides for slides. [Applause]";
    let config = Preset::Naive.config().with_clean_input(true);
    let summary = Summarizer::new(config)
        .expect("valid config")
        .summarize(transcript);
    assert_eq!(
        summary,
        "Welcome to the lecture. Today we cover photosynthesis. See for slides."
    );
}

#[test]
fn test_unicode_segmenter_handles_non_ascii_text() {
    let config = Preset::Naive
        .config()
        .with_segmenter(SegmenterKind::Unicode);
    let summarizer = Summarizer::new(config).expect("valid config");
    let summary = summarizer.run("Größe zählt. Café öffnet früh.");
    assert_eq!(summary.sentences_total, 2);
    assert_eq!(summary.summary, "Größe zählt. Café öffnet früh.");
}

#[test]
fn test_config_overrides_from_json() {
    let overrides = ConfigOverrides::from_json(r#"{"mode": "naive", "sentence_cap": 2}"#)
        .expect("valid overrides");
    let mut config = Preset::Frequency.config();
    config.apply(&overrides);
    let summarizer = Summarizer::new(config).expect("valid config");
    assert_eq!(summarizer.summarize(GOLDEN), "Cats are mammals. Cats like fish.");
}

#[test]
fn test_batch_preserves_order() {
    let summarizer = Summarizer::from_preset(Preset::Naive);
    let inputs = vec!["One.", "", "Three. Four.", "  "];
    let results = summarize_batch(&summarizer, &inputs);
    let summaries: Vec<&str> = results.iter().map(|r| r.summary.as_str()).collect();
    assert_eq!(
        summaries,
        vec!["One.", EMPTY_INPUT_MESSAGE, "Three. Four.", EMPTY_INPUT_MESSAGE]
    );
}

#[test]
fn test_study_notes_name_the_leading_subject() {
    let summary = summarize(GOLDEN, Mode::Frequency);
    let notes = StudyNotes::from_summary(&summary, 2).expect("notes for non-empty summary");
    assert_eq!(notes.key_points, vec!["Cats are mammals.", "Cats like fish."]);
    assert_eq!(notes.topic, "Cats");
    assert_eq!(notes.questions.len(), 3);
    assert!(notes.questions.iter().all(|q| q.contains("Cats")));
}

// ==================== Preset tables ====================

#[test_case(Preset::Naive, 700 ; "naive")]
#[test_case(Preset::Lead, 1200 ; "lead")]
#[test_case(Preset::Frequency, 900 ; "frequency")]
#[test_case(Preset::FrequencyWide, 1400 ; "frequency wide")]
fn test_preset_char_budget(preset: Preset, budget: usize) {
    let text = "word ".repeat(2000);
    let summary = Summarizer::from_preset(preset).summarize(&text);
    assert_eq!(summary.chars().count(), budget);
}

#[test_case(Preset::Naive, 6 ; "naive keeps six")]
#[test_case(Preset::Lead, 5 ; "lead keeps five")]
#[test_case(Preset::Frequency, 5 ; "frequency keeps at most five")]
#[test_case(Preset::FrequencyWide, 5 ; "frequency wide keeps at least five")]
fn test_preset_sentence_counts(preset: Preset, expected: usize) {
    let text = (1..=20)
        .map(|i| format!("Sentence number {i} here."))
        .collect::<Vec<_>>()
        .join(" ");
    let summary = Summarizer::from_preset(preset).run(&text);
    assert_eq!(summary.sentences_selected, expected);
}

#[test_case("naive", Preset::Naive)]
#[test_case("LEAD", Preset::Lead)]
#[test_case("advanced", Preset::Frequency)]
#[test_case("frequency-wide", Preset::FrequencyWide)]
fn test_preset_names(name: &str, expected: Preset) {
    assert_eq!(Preset::parse(name).expect("known preset"), expected);
}

// ==================== Property tests ====================

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..8).prop_map(|words| format!("{}.", words.join(" ")))
}

proptest! {
    #[test]
    fn prop_deterministic(text in "\\PC{0,400}") {
        for mode in [Mode::Naive, Mode::Frequency] {
            prop_assert_eq!(summarize(&text, mode), summarize(&text, mode));
        }
    }

    #[test]
    fn prop_length_bound(text in "\\PC{0,3000}") {
        prop_assert!(summarize(&text, Mode::Naive).chars().count() <= 700);
        prop_assert!(summarize(&text, Mode::Frequency).chars().count() <= 900);
    }

    #[test]
    fn prop_whitespace_only_is_sentinel(text in "[ \t\r\n]{0,64}") {
        prop_assert_eq!(summarize(&text, Mode::Frequency), EMPTY_INPUT_MESSAGE);
        prop_assert_eq!(summarize(&text, Mode::Naive), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn prop_selected_sentences_keep_reading_order(
        sentences in prop::collection::vec(sentence_strategy(), 1..40)
    ) {
        let marked: Vec<String> = sentences
            .iter()
            .enumerate()
            .map(|(i, s)| format!("m{i} {s}"))
            .collect();
        let text = marked.join(" ");
        let summarizer = unlimited(Preset::FrequencyWide.config());

        let positions: Vec<usize> = summarizer
            .rank(&text)
            .into_iter()
            .filter(|r| r.selected)
            .map(|r| r.index)
            .collect();
        let expected: Vec<&str> = positions.iter().map(|&i| marked[i].as_str()).collect();
        prop_assert_eq!(summarizer.summarize(&text), expected.join(" "));
    }

    #[test]
    fn prop_stopword_sentences_do_not_change_selection(
        sentences in prop::collection::vec(sentence_strategy(), 1..40),
        filler in prop::collection::vec(
            prop::collection::vec(prop::sample::select(STOPWORDS.to_vec()), 1..6),
            1..10,
        ),
    ) {
        let text = sentences.join(" ");
        let padding: Vec<String> = filler.iter().map(|words| format!("{}.", words.join(" "))).collect();
        let padded = format!("{text} {}", padding.join(" "));

        for preset in [Preset::Frequency, Preset::FrequencyWide] {
            let summarizer = unlimited(preset.config());
            let plain = summarizer.run(&text);
            let with_padding = summarizer.run(&padded);
            prop_assert_eq!(plain.sentences_selected, with_padding.sentences_selected);
            if plain.sentences_selected > 0 {
                prop_assert_eq!(plain.summary, with_padding.summary);
            }
        }
    }
}

// ==================== CLI (library entry) ====================

#[test]
fn test_cli_summarize_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("golden.txt");
    fs::write(&path, GOLDEN).expect("write input");
    let path = path.to_string_lossy().to_string();

    let output = run_cli(&["brief-rs", "summarize", path.as_str(), "--preset", "frequency"])
        .expect("summarize succeeds");
    assert_eq!(output, format!("{GOLDEN}\n"));
}

#[test]
fn test_cli_config_file_and_flags() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let input = temp.path().join("article.txt");
    let config = temp.path().join("brief.json");
    fs::write(&input, ARTICLE).expect("write input");
    fs::write(&config, r#"{"mode": "naive", "sentence_cap": 1}"#).expect("write config");
    let input = input.to_string_lossy().to_string();
    let config = config.to_string_lossy().to_string();

    let output = run_cli(&[
        "brief-rs",
        "--format",
        "json",
        "summarize",
        input.as_str(),
        "--config",
        config.as_str(),
        "--char-budget",
        "20",
    ])
    .expect("summarize succeeds");

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["summary"], "The city council app");
    assert_eq!(value["mode"], "naive");
    assert_eq!(value["sentences_total"], 1);
}

#[test]
fn test_cli_invalid_config_rejected() {
    let result = run_cli(&["brief-rs", "summarize", "--budget-fraction", "1.5"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rank_text() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("golden.txt");
    fs::write(&path, GOLDEN).expect("write input");
    let path = path.to_string_lossy().to_string();

    let output = run_cli(&["brief-rs", "rank", path.as_str(), "--top-terms", "2"])
        .expect("rank succeeds");
    assert!(output.contains("2.500"));
    assert!(output.contains("Top terms:"));
    assert!(output.contains("cats"));
}

// ==================== Binary ====================

fn brief() -> Command {
    let mut cmd = Command::cargo_bin("brief-rs").expect("binary exists");
    cmd.env_remove("BRIEF_PRESET")
        .env_remove("BRIEF_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_binary_summarizes_stdin() {
    brief()
        .arg("summarize")
        .write_stdin(GOLDEN)
        .assert()
        .success()
        .stdout(format!("{GOLDEN}\n"));
}

#[test]
fn test_binary_dash_reads_stdin() {
    brief()
        .args(["summarize", "-", "--preset", "naive"])
        .write_stdin("Hello world.")
        .assert()
        .success()
        .stdout("Hello world.\n");
}

#[test]
fn test_binary_empty_stdin_json() {
    brief()
        .args(["--format", "json", "summarize"])
        .write_stdin("   ")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\": \"No text provided.\""));
}

#[test]
fn test_binary_preset_from_env() {
    brief()
        .arg("summarize")
        .env("BRIEF_PRESET", "naive")
        .write_stdin("One. Two. Three. Four. Five. Six. Seven.")
        .assert()
        .success()
        .stdout("One. Two. Three. Four. Five. Six.\n");
}

#[test]
fn test_binary_notes() {
    brief()
        .args(["summarize", "--notes"])
        .write_stdin(GOLDEN)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Key Points:\n• Cats are mammals."))
        .stdout(predicate::str::contains("Practice Questions:"));
}

#[test]
fn test_binary_missing_file_text_error() {
    brief()
        .args(["summarize", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_binary_json_error_on_stdout() {
    brief()
        .args(["--format", "json", "summarize", "--preset", "turbo"])
        .write_stdin(GOLDEN)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"detail\""))
        .stdout(predicate::str::contains("unknown preset: turbo"));
}

#[test]
fn test_binary_presets() {
    brief()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("frequency-wide"))
        .stdout(predicate::str::contains("1400"));
}
