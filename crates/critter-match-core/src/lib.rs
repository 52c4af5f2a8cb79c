//! Core library for critter-match.
//!
//! This crate provides the question and animal catalogs and the scoring
//! engine used by the `critter-match` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`dimension`] - The six personality axes and per-axis score vectors
//! - [`questions`] - The fixed question catalog
//! - [`animals`] - The fixed animal catalog
//! - [`answers`] - Answer sets, their encodings, and validation
//! - [`scoring`] - Dimension scoring, similarity, and matching
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use critter_match_core::{AnswerSet, scoring};
//!
//! let answers = AnswerSet::parse("543215432154321543215432154321").unwrap();
//! let best = scoring::find_best_match(&answers);
//! let top = scoring::find_top_matches(&answers, scoring::DEFAULT_MATCH_COUNT);
//! assert_eq!(best.id, top[0].animal.id);
//! ```
#![deny(unsafe_code)]

pub mod animals;
pub mod answers;
pub mod config;
pub mod dimension;
pub mod error;
pub mod questions;
pub mod scoring;

pub use animals::{ANIMALS, AnimalProfile};
pub use answers::{AnswerSet, ValidationReport, validate};
pub use config::{Config, ConfigLoader, LogLevel};
pub use dimension::{Dimension, DimensionScores};
pub use error::{AnswerError, ConfigError, ConfigResult, ScoringError};
pub use questions::{QUESTIONS, Question, QuestionId};
pub use scoring::{MatchResult, QuizResult};

/// Default maximum answer payload size: 64 KiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;
