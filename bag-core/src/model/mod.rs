//! Top-level module for the Naive-Bayes classification system.
//!
//! This module groups:
//! - Model configuration and its resolution to defaults (`Config`, `Settings`)
//! - Word n-gram tokenization (`NGram`)
//! - Per-label feature counts (`Vocabulary`)
//! - The classifier itself (`Classifier`)
//! - Scoring output (`Results`)
//! - Training-set ingestion (`TrainingSet`)

/// The Naive-Bayes classifier.
///
/// Owns per-label vocabularies and document counts, trains on labeled text
/// and scores free text against every known label.
pub mod classifier;

/// Partial configuration and its resolved, immutable form.
pub mod config;

/// Word n-gram extraction.
pub mod ngram;

/// Label to score mapping returned by scoring.
pub mod results;

/// Labeled samples loaded from a JSON document.
pub mod training_set;

/// Feature occurrence counts for one label.
pub mod vocabulary;
