use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use bag_core::{Classifier, Config, Results, TrainingSet};
use clap::Parser;

/// Classify text lines read from stdin with a model trained from a JSON training set
#[derive(Parser, Debug)]
#[command(name = "bag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
	/// Path to the training set (JSON)
	#[arg(short, long)]
	training: PathBuf,

	/// Keep reading lines until EOF, "exit" or "quit" instead of stopping after the first result
	#[arg(short, long)]
	interactive: bool,

	/// Override the training set's n-gram size
	#[arg(long)]
	ngram_size: Option<i64>,

	/// Override the training set's smoothing parameter
	#[arg(long)]
	smoothing: Option<f64>,
}

impl Args {
	fn overrides(&self) -> Config {
		Config { ngram_size: self.ngram_size, smoothing_parameter: self.smoothing }
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = Args::parse();

	let training_set = TrainingSet::from_file(&args.training)?;
	if args.interactive {
		println!("Training set loaded");
	}

	let classifier = Classifier::from_training_set_with(&training_set, &args.overrides())?;
	log::info!(
		"model trained on {} documents ({} labels)",
		classifier.total_documents(),
		classifier.labels().len()
	);
	if args.interactive {
		println!("Model generated");
		println!("Interactive mode is active. Type your input and press Enter:");
	}

	let mut stdout = io::stdout().lock();
	run(&classifier, io::stdin().lock(), &mut stdout, args.interactive)
}

/// Classifies `input` line by line, writing one result block per line.
///
/// - Blank lines are skipped
/// - `exit` or `quit` ends the loop
/// - Without `interactive`, stops after the first result
/// - In interactive mode, a line that is not valid UTF-8 is skipped
fn run<R: BufRead, W: Write>(
	classifier: &Classifier,
	input: R,
	out: &mut W,
	interactive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	for line in input.lines() {
		let line = match line {
			Ok(line) => line,
			Err(e) if interactive && e.kind() == io::ErrorKind::InvalidData => {
				log::warn!("skipping unreadable line: {e}");
				continue;
			}
			Err(e) => return Err(e.into()),
		};
		let text = line.trim();

		if text.is_empty() {
			continue;
		}
		if text == "exit" || text == "quit" {
			break;
		}

		let results = classifier.score(text)?;
		print_results(out, &results)?;

		if !interactive {
			break;
		}
	}

	Ok(())
}

/// Writes the best label followed by every label's score.
fn print_results<W: Write>(out: &mut W, results: &Results) -> io::Result<()> {
	if let Some((label, _)) = results.highest() {
		writeln!(out, "{label}")?;
	}
	for (label, score) in results.ranked() {
		writeln!(out, "  {label}: {score:.4}")?;
	}
	out.flush()
}
