//! Core domain models for brief-rs.
//!
//! Sentences, their scored wrappers and the summary record. These are pure
//! domain models with no I/O dependencies.

pub mod sentence;
pub mod summary;

pub use sentence::{RankedSentence, ScoredSentence, Sentence};
pub use summary::Summary;
