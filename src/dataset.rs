//! Loading CSV datasets into a `Matrix`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::{StringRecord, Trim};

use crate::types::Matrix;

/// Load
///
/// Load the CSV file at `path` into `out`, returning whether it succeeded. With `fatal` set any
/// failure is returned as an error. Otherwise it is logged, `out` is left as it was and `false`
/// is returned.
pub fn load<P: AsRef<Path>>(path: P, out: &mut Matrix, fatal: bool) -> Result<bool> {
	let path = path.as_ref();
	let loaded = File::open(path)
		.with_context(|| format!("Failed to open dataset '{}'", path.display()))
		.and_then(|file| {
			Matrix::from_reader(file)
				.with_context(|| format!("Failed to load dataset '{}'", path.display()))
		});
	match loaded {
		Ok(matrix) => {
			log::info!(
				"Loaded '{}' ({} rows, {} cols)",
				path.display(),
				matrix.rows(),
				matrix.cols()
			);
			*out = matrix;
			Ok(true)
		}
		Err(e) if fatal => Err(e),
		Err(e) => {
			log::error!("{:#}", e);
			Ok(false)
		}
	}
}

impl Matrix {
	/// From Reader
	///
	/// Read numeric CSV from `input` (trait bound `std::io::Read`). A first record with no
	/// numeric fields at all is taken to be a header and skipped. All other fields must parse as
	/// `f64` and every row must have the same number of fields.
	pub fn from_reader<R: Read>(input: R) -> Result<Self> {
		let buffered = BufReader::new(input);
		let mut rdr = csv::ReaderBuilder::new()
			.has_headers(false)
			.trim(Trim::All)
			.from_reader(buffered);

		let mut rows = Vec::new();
		for (index, result) in rdr.records().enumerate() {
			let record = result?;
			if index == 0 && is_header(&record) {
				log::debug!("Skipping header {:?}", record);
				continue;
			}
			rows.push(parse_row(&record, index + 1)?);
		}
		Matrix::from_rows(rows).ok_or_else(|| anyhow!("Rows have differing lengths"))
	}
}

fn is_header(record: &StringRecord) -> bool {
	!record.is_empty() && record.iter().all(|field| field.parse::<f64>().is_err())
}

/// Parse Row
///
/// `line` is only used for error messages.
fn parse_row(record: &StringRecord, line: usize) -> Result<Vec<f64>> {
	record
		.iter()
		.enumerate()
		.map(|(col, field)| {
			field
				.parse::<f64>()
				.with_context(|| format!("Line {}, column {}: '{}' is not a number", line, col + 1, field))
		})
		.collect()
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	#[fixture]
	fn ratings() -> &'static str {
		"userId,movieId,rating,timestamp\n1,2,3.5,1112486027\n1,29,3.5,1112484676\n"
	}

	#[rstest]
	fn header_is_skipped(ratings: &str) {
		let matrix = Matrix::from_reader(ratings.as_bytes()).expect("valid csv");
		assert_eq!((matrix.rows(), matrix.cols()), (2, 4));
		assert_eq!(matrix.get(0, 2), Some(3.5));
		assert_eq!(matrix.get(1, 1), Some(29.0));
	}

	#[test]
	fn headerless_input_keeps_first_row() {
		let matrix = Matrix::from_reader(" 1, 2\n3 ,4\n".as_bytes()).expect("valid csv");
		assert_eq!(matrix.row(0), Some(&[1.0, 2.0][..]));
		assert_eq!(matrix.rows(), 2);
	}

	#[test]
	fn empty_input_is_empty_matrix() {
		let matrix = Matrix::from_reader("".as_bytes()).expect("empty csv");
		assert!(matrix.is_empty());
	}

	#[rstest]
	#[case("1,2\n3,x\n")]
	#[case("1,2\n3\n")]
	fn invalid_input_is_an_error(#[case] input: &str) {
		assert!(Matrix::from_reader(input.as_bytes()).is_err());
	}

	#[test]
	fn error_names_line_and_column() {
		let err = Matrix::from_reader("a,b\n1,2\n3,oops\n".as_bytes()).unwrap_err();
		assert!(format!("{:#}", err).contains("Line 3, column 2"));
	}

	#[test]
	fn missing_file_is_fatal_when_asked() {
		let mut matrix = Matrix::default();
		assert!(load("tests/data/does-not-exist.csv", &mut matrix, true).is_err());
	}

	#[test]
	fn missing_file_is_reported_otherwise() {
		let mut matrix = Matrix::from_rows(vec![vec![1.0]]).expect("single cell");
		let loaded = load("tests/data/does-not-exist.csv", &mut matrix, false);
		assert!(matches!(loaded, Ok(false)));
		assert_eq!(matrix.get(0, 0), Some(1.0));
	}

	#[test]
	fn load_replaces_matrix() {
		let mut matrix = Matrix::default();
		let loaded = load("tests/data/ratings.csv", &mut matrix, true);
		assert!(matches!(loaded, Ok(true)));
		assert_eq!((matrix.rows(), matrix.cols()), (5, 4));
	}
}
