//! # brief-rs
//!
//! Extractive text summarization.
//!
//! brief-rs condenses a block of text into a short summary made of sentences
//! taken verbatim from the input. Two selection modes are available:
//!
//! - **Naive**: keep the first few sentences
//! - **Frequency**: rank sentences by how often their content words occur
//!   across the whole text, favour the opening sentences, and keep the best
//!   ones in reading order
//!
//! ## Features
//!
//! - **Presets**: named parameter sets, adjustable through a JSON config file
//! - **Pluggable segmentation**: punctuation rules or Unicode sentence bounds
//! - **Transcript cleaning**: strips caption cues, timestamps and URLs
//! - **Study notes**: key points and practice questions from a summary
//! - **Batch mode**: parallel summarization of independent inputs
//!
//! ## Example
//!
//! ```
//! use brief_rs::{Mode, summarize};
//!
//! let text = "Cats are mammals. Cats like fish. It is sunny today.";
//! assert_eq!(summarize(text, Mode::Frequency), text);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod summarizer;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{RankedSentence, ScoredSentence, Sentence, Summary};

// Re-export summarizer types
pub use summarizer::{
    EMPTY_INPUT_MESSAGE, Mode, Preset, SegmenterKind, StudyNotes, Summarizer, SummarizerConfig,
    summarize, summarize_batch,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
