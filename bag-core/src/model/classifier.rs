use std::collections::HashMap;

use super::config::{Config, Settings};
use super::ngram::{self, NGram};
use super::results::Results;
use super::training_set::TrainingSet;
use super::vocabulary::Vocabulary;
use crate::error::{BagError, Result};

/// Multinomial Naive-Bayes classifier over word n-grams.
///
/// # Responsibilities
/// - Accumulate per-label n-gram counts and document counts from labeled text
/// - Score free text against every trained label, combining the label prior
///   with Laplace-smoothed likelihoods (natural-log scale)
///
/// # Invariants
/// - `total_document_count` equals the sum of `document_count_by_label`
/// - `vocabulary_by_label` and `document_count_by_label` share the same labels
/// - Counts never decrease
///
/// # Concurrency
/// `train` takes `&mut self` and `score` takes `&self`; a model shared
/// between threads needs an external lock held for the whole call.
#[derive(Clone, Debug)]
pub struct Classifier {
	/// Resolved configuration, fixed at construction
	settings: Settings,

	/// Feature counts by label
	vocabulary_by_label: HashMap<String, Vocabulary>,

	/// Number of trained documents by label
	document_count_by_label: HashMap<String, usize>,

	/// Number of trained documents across all labels
	total_document_count: usize,
}

impl Classifier {
	/// Creates an empty classifier, resolving unset or invalid configuration
	/// values to their defaults.
	pub fn new(config: Config) -> Self {
		let settings = config.resolve();
		log::debug!(
			"classifier created with ngram size {} and smoothing {}",
			settings.ngram_size(),
			settings.smoothing_parameter()
		);
		Self {
			settings,
			vocabulary_by_label: HashMap::new(),
			document_count_by_label: HashMap::new(),
			total_document_count: 0,
		}
	}

	/// Builds a classifier from a training set.
	///
	/// Uses the set's configuration, then trains every sample in order.
	///
	/// # Errors
	/// Returns `InvalidLabel` if a sample has a blank label. Nothing is
	/// trained in that case.
	pub fn from_training_set(training_set: &TrainingSet) -> Result<Self> {
		Self::from_training_set_with(training_set, &Config::default())
	}

	/// Same as [`Classifier::from_training_set`], with `overrides` replacing
	/// any configuration value it sets.
	pub fn from_training_set_with(training_set: &TrainingSet, overrides: &Config) -> Result<Self> {
		training_set.validate()?;

		let mut classifier = Self::new(training_set.config.overridden_by(overrides));
		for sample in &training_set.samples {
			classifier.train(&sample.sentence, &sample.label);
		}
		log::debug!(
			"trained {} documents over {} labels",
			classifier.total_document_count,
			classifier.document_count_by_label.len()
		);
		Ok(classifier)
	}

	/// Adds one labeled document to the model.
	///
	/// - Creates the label's vocabulary on first sight
	/// - Increments the count of every n-gram of `text`
	/// - Increments the label and total document counts, even when `text`
	///   yields no n-gram
	pub fn train(&mut self, text: &str, label: &str) {
		let ngrams = ngram::tokenize(text, self.settings.ngram_size());

		// Get or create the vocabulary for this label
		let vocabulary = self.vocabulary_by_label.entry(label.to_owned()).or_default();
		for ngram in &ngrams {
			vocabulary.add(ngram);
		}

		*self.document_count_by_label.entry(label.to_owned()).or_insert(0) += 1;
		self.total_document_count += 1;
	}

	/// Scores `text` against every trained label.
	///
	/// For each label:
	/// `ln(docs(label) / total) + Σ ln((count(ngram, label) + smoothing) / (docs(label) + |vocabulary(label)|))`
	///
	/// Scores are comparable across labels but are not normalized.
	///
	/// # Errors
	/// Returns `InsufficientTrainingData` if nothing was trained yet.
	pub fn score(&self, text: &str) -> Result<Results> {
		if self.total_document_count == 0 {
			return Err(BagError::insufficient_training_data("no document has been trained"));
		}

		let ngrams = ngram::tokenize(text, self.settings.ngram_size());
		let mut scores = HashMap::with_capacity(self.vocabulary_by_label.len());
		for (label, vocabulary) in &self.vocabulary_by_label {
			let score = self.label_score(&ngrams, label, vocabulary)?;
			log::trace!("label {label:?} scored {score}");
			scores.insert(label.clone(), score);
		}

		Ok(Results::new(scores))
	}

	/// Prior plus smoothed log-likelihood of `ngrams` for one label.
	fn label_score(&self, ngrams: &[NGram], label: &str, vocabulary: &Vocabulary) -> Result<f64> {
		let documents = self.document_count(label);
		if documents == 0 {
			// Unreachable through `train`, kept to never return NaN or -inf
			return Err(BagError::insufficient_training_data(format!(
				"label {label:?} has no trained document"
			)));
		}

		let mut score = (documents as f64 / self.total_document_count as f64).ln();

		// Fixed per label
		let denominator = (documents + vocabulary.len()) as f64;
		for ngram in ngrams {
			let count = vocabulary.count(&ngram.key()) as f64 + self.settings.smoothing_parameter();
			score += (count / denominator).ln();
		}

		Ok(score)
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Returns every trained label, sorted.
	pub fn labels(&self) -> Vec<&str> {
		let mut labels: Vec<&str> = self.document_count_by_label.keys().map(String::as_str).collect();
		labels.sort_unstable();
		labels
	}

	/// Number of documents trained for `label` (0 if unknown).
	pub fn document_count(&self, label: &str) -> usize {
		self.document_count_by_label.get(label).copied().unwrap_or(0)
	}

	pub fn total_documents(&self) -> usize {
		self.total_document_count
	}

	pub fn vocabulary(&self, label: &str) -> Option<&Vocabulary> {
		self.vocabulary_by_label.get(label)
	}
}

impl Default for Classifier {
	fn default() -> Self {
		Self::new(Config::default())
	}
}
