use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text file into a `String`.
///
/// - Reads the entire file into memory
/// - Fails on invalid UTF-8
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
