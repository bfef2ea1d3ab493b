use std::collections::HashMap;

use super::ngram::NGram;

/// Feature occurrence counts observed for one label.
///
/// ## Responsibilities:
/// - Accumulate n-gram occurrences during training
/// - Report the count of a feature key (0 when never seen)
///
/// ## Invariants
/// - Counts only grow; nothing is ever removed
/// - Every stored count is strictly positive
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
	/// Example: { "i love" => 3, "love this" => 1 }
	counts: HashMap<String, usize>,
}

impl Vocabulary {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `ngram`.
	pub fn add(&mut self, ngram: &NGram) {
		*self.counts.entry(ngram.key()).or_insert(0) += 1;
	}

	/// Returns how many times `key` was observed.
	pub fn count(&self, key: &str) -> usize {
		self.counts.get(key).copied().unwrap_or(0)
	}

	/// Number of distinct feature keys.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(k, v)| (k.as_str(), *v))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_add_accumulates() {
		let mut vocabulary = Vocabulary::new();
		assert!(vocabulary.is_empty());

		vocabulary.add(&NGram::new(["a", "b"]));
		vocabulary.add(&NGram::new(["a", "b"]));
		vocabulary.add(&NGram::new(["b", "c"]));

		assert_eq!(vocabulary.len(), 2);
		assert_eq!(vocabulary.count("a b"), 2);
		assert_eq!(vocabulary.count("b c"), 1);
		assert_eq!(vocabulary.count("c d"), 0);
		assert_eq!(vocabulary.iter().map(|(_, c)| c).sum::<usize>(), 3);
	}
}
