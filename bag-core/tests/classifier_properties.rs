//! Properties of the classifier over randomly generated training sequences.

use bag_core::model::ngram::tokenize;
use bag_core::{BagError, Classifier, Config};
use rand::prelude::*;
use rand::rngs::StdRng;

const WORDS: &[&str] = &["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];
const LABELS: &[&str] = &["sports", "politics", "science", "music"];

fn random_sentence(rng: &mut StdRng) -> String {
	let len = rng.random_range(0..8);
	(0..len)
		.map(|_| *WORDS.choose(rng).unwrap())
		.collect::<Vec<_>>()
		.join(" ")
}

fn random_model(seed: u64, documents: usize, ngram_size: i64) -> (Classifier, Vec<(String, String)>) {
	let mut rng = StdRng::seed_from_u64(seed);
	let mut classifier = Classifier::new(Config::new(ngram_size, 1.0));
	let mut trained = Vec::with_capacity(documents);
	for _ in 0..documents {
		let sentence = random_sentence(&mut rng);
		let label = LABELS.choose(&mut rng).unwrap().to_string();
		classifier.train(&sentence, &label);
		trained.push((sentence, label));
	}
	(classifier, trained)
}

#[test]
fn test_total_equals_number_of_train_calls() {
	for seed in 0..20 {
		let (classifier, trained) = random_model(seed, seed as usize * 7, 2);

		assert_eq!(classifier.total_documents(), trained.len());
		let per_label: usize = classifier.labels().iter().map(|l| classifier.document_count(l)).sum();
		assert_eq!(per_label, trained.len());
	}
}

#[test]
fn test_vocabulary_matches_ngram_counts() {
	let (classifier, trained) = random_model(42, 200, 2);

	for label in classifier.labels() {
		let expected: usize = trained
			.iter()
			.filter(|(_, l)| l == label)
			.map(|(sentence, _)| tokenize(sentence, 2).len())
			.sum();
		let vocabulary = classifier.vocabulary(label).unwrap();
		assert_eq!(vocabulary.iter().map(|(_, count)| count).sum::<usize>(), expected);
	}
}

#[test]
fn test_every_trained_label_gets_a_finite_score() {
	let (classifier, _) = random_model(7, 100, 1);

	let results = classifier.score("never seen tokens only").unwrap();
	assert_eq!(results.len(), classifier.labels().len());
	for label in classifier.labels() {
		let score = results.get(label).unwrap();
		assert!(score.is_finite(), "{label} scored {score}");
	}
}

#[test]
fn test_labels_never_trained_are_absent() {
	let mut classifier = Classifier::new(Config::new(1, 1.0));
	classifier.train("alpha beta", "sports");
	classifier.train("gamma", "music");

	let results = classifier.score("alpha").unwrap();
	let mut labels: Vec<&str> = results.iter().map(|(label, _)| label).collect();
	labels.sort_unstable();
	assert_eq!(labels, vec!["music", "sports"]);
}

#[test]
fn test_scoring_is_deterministic() {
	let (classifier, _) = random_model(3, 150, 2);
	let text = "alpha beta gamma delta";

	assert_eq!(classifier.score(text).unwrap(), classifier.score(text).unwrap());
}

#[test]
fn test_untrained_model_refuses_to_score() {
	let classifier = Classifier::default();
	assert!(matches!(classifier.score("anything"), Err(BagError::InsufficientTrainingData(_))));
}

#[test]
fn test_prior_dominates_without_features() {
	let mut classifier = Classifier::new(Config::new(3, 1.0));
	for _ in 0..3 {
		classifier.train("x", "common");
	}
	classifier.train("y", "rare");

	// Too short for a trigram: only the prior counts
	let results = classifier.score("x").unwrap();
	assert_eq!(results.highest().map(|(label, _)| label), Some("common"));
	assert!((results.get("common").unwrap() - (0.75f64).ln()).abs() < 1e-12);
	assert!((results.get("rare").unwrap() - (0.25f64).ln()).abs() < 1e-12);
}
