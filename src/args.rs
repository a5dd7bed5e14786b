//! Command line argument scanning.

use crate::types::{Arg, ArgError, ParsedArgs};

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];
const FILE_FLAGS: [&str; 2] = ["-f", "--file"];

/// Parse
///
/// Scan `tokens` (element 0 being the program name) and produce one result per flag or
/// token, in the order they were seen. Help does not end the scan. Only the first file flag
/// records a file argument; later ones are reported as `Arg::RepeatedFile` and the token
/// following them is scanned like any other.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> ParsedArgs {
	let mut parsed = ParsedArgs::default();
	let mut i = 1;
	while i < tokens.len() {
		let token = tokens[i].as_ref();
		let arg = if HELP_FLAGS.contains(&token) {
			Ok(Arg::Help)
		} else if FILE_FLAGS.contains(&token) {
			let position = i + 1;
			match tokens.get(position).map(AsRef::<str>::as_ref) {
				_ if parsed.file_arg_pos().is_some() => Ok(Arg::RepeatedFile),
				Some(value) => {
					parsed.record_file(position, value);
					i = position;
					Ok(Arg::File {
						position,
						value: value.to_owned(),
					})
				}
				None => Err(ArgError::MissingValue {
					flag: token.to_owned(),
					position: i,
				}),
			}
		} else {
			Ok(Arg::NotFlag(token.to_owned()))
		};
		log::debug!("{:?}", arg);
		parsed.args.push(arg);
		i += 1;
	}
	parsed
}
