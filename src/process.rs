//! The command line shell: scan arguments, echo them, optionally load a dataset and greet.

use std::io::{BufWriter, Write};

use anyhow::Result;

use crate::args;
use crate::dataset;
use crate::types::{Arg, ArgResult, Matrix, ParsedArgs};

static HELP_BANNER: [&str; 2] = [
	"OpenRecSyst:Help",
	"Usage: openrecsyst [-h|--help] [-f|--file <path>]",
];
static GREETING: &str = "Hello, World!";

/// Run
///
/// Process the invocation `tokens` and write all console output to `output` (trait bound
/// `std::io::Write`). Returns the loaded dataset when a file was given. Malformed arguments are
/// only logged, a dataset that fails to load is returned as an error.
pub fn run<S: AsRef<str>, W: Write>(tokens: &[S], output: &mut W) -> Result<Option<Matrix>> {
	let mut buffered = BufWriter::new(output);
	let parsed = args::parse(tokens);
	for arg in parsed.args.iter() {
		write_arg(&mut buffered, arg)?;
	}
	// Flush before loading so diagnostics are out even if the load fails
	buffered.flush()?;
	let dataset = load_dataset_if_requested(&parsed)?;
	print_greeting(&mut buffered)?;
	buffered.flush()?;
	Ok(dataset)
}

/// Write Arg
///
/// Echo a single scan result the way it is reported on the console.
fn write_arg<W: Write>(wtr: &mut W, arg: &ArgResult) -> Result<()> {
	match arg {
		Ok(Arg::Help) => print_help(wtr)?,
		Ok(Arg::File { value, .. }) => writeln!(wtr, "File: {}", value)?,
		Ok(Arg::NotFlag(token)) => writeln!(wtr, "{} - not flag", token)?,
		Ok(Arg::RepeatedFile) => log::debug!("Ignoring repeated file flag"),
		Err(e) => log::warn!("Ignoring malformed argument: {}", e),
	}
	Ok(())
}

pub fn print_help<W: Write>(wtr: &mut W) -> Result<()> {
	for line in HELP_BANNER.iter() {
		writeln!(wtr, "{}", line)?;
	}
	Ok(())
}

pub fn print_greeting<W: Write>(wtr: &mut W) -> Result<()> {
	writeln!(wtr, "{}", GREETING)?;
	Ok(())
}

/// Load Dataset If Requested
///
/// Load the file given with `-f`/`--file`, if any. Nothing is read otherwise.
pub fn load_dataset_if_requested(parsed: &ParsedArgs) -> Result<Option<Matrix>> {
	let path = match parsed.file_path() {
		Some(path) => path,
		None => return Ok(None),
	};
	let mut data = Matrix::default();
	dataset::load(path, &mut data, true)?;
	Ok(Some(data))
}
