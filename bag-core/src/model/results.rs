use std::collections::HashMap;

/// Scores of one text against every trained label.
///
/// Scores are natural-log values: higher (less negative) means more likely.
/// They rank labels but do not sum to 1.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Results {
	scores: HashMap<String, f64>,
}

impl Results {
	pub(crate) fn new(scores: HashMap<String, f64>) -> Self {
		Self { scores }
	}

	pub fn get(&self, label: &str) -> Option<f64> {
		self.scores.get(label).copied()
	}

	pub fn len(&self) -> usize {
		self.scores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scores.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.scores.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Returns the best label and its score.
	///
	/// Ties go to the lexicographically smallest label.
	pub fn highest(&self) -> Option<(&str, f64)> {
		self.ranked().into_iter().next()
	}

	/// Returns every label sorted by descending score, then by label.
	pub fn ranked(&self) -> Vec<(&str, f64)> {
		let mut ranked: Vec<(&str, f64)> = self.iter().collect();
		ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		ranked
	}

	pub fn into_inner(self) -> HashMap<String, f64> {
		self.scores
	}
}
