use std::fmt;

/// Separator placed between tokens in an n-gram key.
///
/// Tokens are split on whitespace, so a space never appears inside one.
pub const KEY_SEPARATOR: &str = " ";

/// An ordered window of consecutive tokens taken from a text.
///
/// Two n-grams with the same tokens in the same order share the same key.
/// `["a", "b"]` and `["b", "a"]` do not.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NGram {
	tokens: Vec<String>,
}

impl NGram {
	pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
		Self { tokens: tokens.into_iter().map(Into::into).collect() }
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Returns the canonical feature key (tokens joined by `KEY_SEPARATOR`).
	pub fn key(&self) -> String {
		self.tokens.join(KEY_SEPARATOR)
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.key())
	}
}

/// Splits `text` into whitespace-delimited tokens and returns every window
/// of `n` consecutive tokens, left to right.
///
/// - Runs of whitespace count as one separator; empty tokens are dropped.
/// - Returns `max(0, token_count - n + 1)` n-grams.
/// - Returns an empty list when there are fewer than `n` tokens or `n == 0`.
pub fn tokenize(text: &str, n: usize) -> Vec<NGram> {
	let tokens: Vec<&str> = text.split_whitespace().collect();
	if n == 0 || tokens.len() < n {
		// Text too short, no n-grams to compute
		return Vec::new();
	}

	tokens.windows(n).map(|window| NGram::new(window.iter().copied())).collect()
}
