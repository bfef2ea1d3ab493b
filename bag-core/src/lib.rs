//! N-gram based Naive-Bayes text classification library.
//!
//! This crate provides a small supervised classifier including:
//! - Word n-gram extraction (`model::ngram`)
//! - Per-label vocabulary accumulation with Laplace smoothing
//! - Log-probability scoring of free text against every trained label
//! - Training-set ingestion from JSON files
//!
//! The classifier itself performs no locking. Callers sharing a model across
//! threads must serialize `train` calls against each other and against
//! `score` (for example with a `RwLock`).

/// Classifier model, configuration, tokenizer and scoring results.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{BagError, Result};
pub use model::classifier::Classifier;
pub use model::config::{Config, Settings};
pub use model::results::Results;
pub use model::training_set::{is_valid_label, Sample, TrainingSet};
