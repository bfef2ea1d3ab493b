use serde::{Deserialize, Serialize};

/// Window length used when `ngram_size` is unset or not positive.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Additive smoothing used when `smoothing_parameter` is unset or not positive.
pub const DEFAULT_SMOOTHING_PARAMETER: f64 = 1.0;

/// Possibly partial classifier configuration.
///
/// Values are kept as given (including invalid ones) until [`Config::resolve`]
/// turns them into [`Settings`]. This is the shape read from training-set
/// files and command-line flags.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
	/// Number of consecutive tokens per n-gram.
	#[serde(default)]
	pub ngram_size: Option<i64>,

	/// Value added to every raw count (Laplace smoothing).
	#[serde(default)]
	pub smoothing_parameter: Option<f64>,
}

impl Config {
	/// Creates a fully specified configuration.
	pub fn new(ngram_size: i64, smoothing_parameter: f64) -> Self {
		Self {
			ngram_size: Some(ngram_size),
			smoothing_parameter: Some(smoothing_parameter),
		}
	}

	/// Returns a copy where every value set in `other` replaces ours.
	pub fn overridden_by(&self, other: &Config) -> Config {
		Config {
			ngram_size: other.ngram_size.or(self.ngram_size),
			smoothing_parameter: other.smoothing_parameter.or(self.smoothing_parameter),
		}
	}

	/// Resolves unset or invalid values to their defaults.
	///
	/// - `ngram_size` <= 0 or unset becomes `DEFAULT_NGRAM_SIZE`
	/// - `smoothing_parameter` <= 0, NaN or unset becomes `DEFAULT_SMOOTHING_PARAMETER`
	///
	/// Defaulting is never an error.
	pub fn resolve(&self) -> Settings {
		let ngram_size = match self.ngram_size {
			Some(n) if n > 0 => n as usize,
			other => {
				log::debug!("ngram size {:?} defaulted to {}", other, DEFAULT_NGRAM_SIZE);
				DEFAULT_NGRAM_SIZE
			}
		};

		// NaN fails the comparison and falls through to the default
		let smoothing_parameter = match self.smoothing_parameter {
			Some(s) if s > 0.0 && s.is_finite() => s,
			other => {
				log::debug!("smoothing parameter {:?} defaulted to {}", other, DEFAULT_SMOOTHING_PARAMETER);
				DEFAULT_SMOOTHING_PARAMETER
			}
		};

		Settings { ngram_size, smoothing_parameter }
	}
}

/// Fully resolved configuration of a classifier.
///
/// # Invariants
/// - `ngram_size >= 1`
/// - `smoothing_parameter > 0.0` and finite
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
	ngram_size: usize,
	smoothing_parameter: f64,
}

impl Settings {
	pub fn ngram_size(&self) -> usize {
		self.ngram_size
	}

	pub fn smoothing_parameter(&self) -> f64 {
		self.smoothing_parameter
	}
}

impl Default for Settings {
	fn default() -> Self {
		Config::default().resolve()
	}
}
