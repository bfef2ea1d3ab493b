//! Error types for the classifier.
//!
//! Every fallible operation returns [`Result`], whose error side is
//! [`BagError`]. Training on a classifier never fails; only scoring an
//! untrained model and ingesting training sets can.

use std::io;

use thiserror::Error;

/// The main error type for classifier operations.
#[derive(Error, Debug)]
pub enum BagError {
	/// Scoring was attempted without any trained document, or against a
	/// label that holds no document.
	#[error("Insufficient training data: {0}")]
	InsufficientTrainingData(String),

	/// A training sample carried an empty label.
	#[error("Invalid label: {0}")]
	InvalidLabel(String),

	/// I/O errors while reading a training set.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	/// Malformed JSON training-set document.
	#[error("Parse error: {0}")]
	Parse(#[from] serde_json::Error),

	/// Malformed YAML training-set document.
	#[error("YAML parse error: {0}")]
	Yaml(#[from] serde_yaml::Error),
}

impl BagError {
	/// Creates an `InsufficientTrainingData` error.
	pub fn insufficient_training_data<S: Into<String>>(msg: S) -> Self {
		BagError::InsufficientTrainingData(msg.into())
	}

	/// Creates an `InvalidLabel` error.
	pub fn invalid_label<S: Into<String>>(msg: S) -> Self {
		BagError::InvalidLabel(msg.into())
	}
}

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, BagError>;
