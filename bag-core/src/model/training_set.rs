use std::path::Path;

use serde::{Deserialize, Serialize};

use super::config::Config;
use crate::error::{BagError, Result};
use crate::io::read_file;

/// One labeled training document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Sample {
	pub sentence: String,
	pub label: String,
}

impl Sample {
	pub fn new<S: Into<String>, L: Into<String>>(sentence: S, label: L) -> Self {
		Self { sentence: sentence.into(), label: label.into() }
	}
}

/// Returns whether `label` can name a class: it must hold a non-whitespace
/// character.
pub fn is_valid_label(label: &str) -> bool {
	!label.trim().is_empty()
}

/// A classifier configuration plus its ordered training samples.
///
/// Files ending in `.yaml` or `.yml` are read as YAML with the same keys,
/// anything else as JSON. JSON form:
/// ```json
/// {
///   "config": { "ngramSize": 1, "smoothingParameter": 1.0 },
///   "samples": [
///     { "sentence": "I love this", "label": "positive" }
///   ]
/// }
/// ```
/// Both `config` and any of its fields may be omitted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TrainingSet {
	#[serde(default)]
	pub config: Config,

	#[serde(default)]
	pub samples: Vec<Sample>,
}

impl TrainingSet {
	/// Loads a training set from a JSON or YAML file, picked by extension.
	///
	/// # Errors
	/// - `Io` if the file cannot be read
	/// - `Parse` / `Yaml` if it is not a valid training-set document
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let contents = read_file(&path)?;
		let training_set: TrainingSet = match path.as_ref().extension().and_then(|e| e.to_str()) {
			Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
			_ => serde_json::from_str(&contents)?,
		};
		log::debug!("loaded {} samples from {}", training_set.samples.len(), path.as_ref().display());
		Ok(training_set)
	}

	/// Checks that every sample carries a valid label (see [`is_valid_label`]).
	pub fn validate(&self) -> Result<()> {
		match self.samples.iter().position(|sample| !is_valid_label(&sample.label)) {
			Some(index) => Err(BagError::invalid_label(format!("sample {index} has a blank label"))),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			r#"{{
				"config": {{ "ngramSize": 1 }},
				"samples": [
					{{ "sentence": "I love this", "label": "positive" }},
					{{ "sentence": "I hate this", "label": "negative" }}
				]
			}}"#
		)
		.unwrap();

		let training_set = TrainingSet::from_file(file.path()).unwrap();
		assert_eq!(training_set.config.ngram_size, Some(1));
		assert_eq!(training_set.config.smoothing_parameter, None);
		assert_eq!(training_set.samples[1], Sample::new("I hate this", "negative"));
	}

	#[test]
	fn test_from_yaml_file() {
		let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
		write!(
			file,
			"config:\n  ngramSize: 1\n  smoothingParameter: 0.5\nsamples:\n  - sentence: I love this\n    label: positive\n  - sentence: I hate this\n    label: negative\n"
		)
		.unwrap();

		let training_set = TrainingSet::from_file(file.path()).unwrap();
		assert_eq!(training_set.config, Config::new(1, 0.5));
		assert_eq!(training_set.samples.len(), 2);
		assert_eq!(training_set.samples[0], Sample::new("I love this", "positive"));
	}

	#[test]
	fn test_malformed_yaml_is_yaml_error() {
		let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
		write!(file, "samples: [unclosed").unwrap();
		assert!(matches!(TrainingSet::from_file(file.path()), Err(BagError::Yaml(_))));
	}

	#[test]
	fn test_config_is_optional() {
		let training_set: TrainingSet = serde_json::from_str(r#"{"samples": []}"#).unwrap();
		assert_eq!(training_set.config, Config::default());
	}

	#[test]
	fn test_malformed_file_is_parse_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "samples: - nope").unwrap();
		assert!(matches!(TrainingSet::from_file(file.path()), Err(BagError::Parse(_))));
	}

	#[test]
	fn test_missing_file_is_io_error() {
		assert!(matches!(TrainingSet::from_file("/nonexistent/training.json"), Err(BagError::Io(_))));
	}

	#[test]
	fn test_validate_reports_empty_label() {
		let training_set = TrainingSet {
			config: Config::default(),
			samples: vec![Sample::new("a", "x"), Sample::new("b", "")],
		};
		match training_set.validate() {
			Err(BagError::InvalidLabel(msg)) => assert!(msg.contains("sample 1")),
			other => panic!("expected InvalidLabel, got {other:?}"),
		}
	}

	#[test]
	fn test_whitespace_label_is_invalid() {
		assert!(!is_valid_label(""));
		assert!(!is_valid_label("  \t"));
		assert!(is_valid_label("positive"));

		let training_set = TrainingSet {
			config: Config::default(),
			samples: vec![Sample::new("a", "   ")],
		};
		assert!(matches!(training_set.validate(), Err(BagError::InvalidLabel(_))));
	}
}
