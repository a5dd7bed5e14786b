//! Global type definitions.

use thiserror::Error;

/// Index into the argument list.
pub type Position = usize;

/// Outcome of scanning a single flag or token, kept in scan order.
pub type ArgResult = Result<Arg, ArgError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
	/// `-h` / `--help`. Does not stop the scan.
	Help,
	/// First `-f` / `--file` occurrence, with the position and value of the token after it.
	File { position: Position, value: String },
	/// A later `-f` / `--file` occurrence. Ignored, the token after it is scanned as usual.
	RepeatedFile,
	/// Anything that isn't a recognised flag.
	NotFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
	#[error("flag '{flag}' at position {position} expects a value")]
	MissingValue { flag: String, position: Position },
}

/// Every scanned token plus the recorded file argument.
#[derive(Debug, Default)]
pub struct ParsedArgs {
	pub args: Vec<ArgResult>,
	// NB `None` is the "not set" sentinel; only ever assigned once
	file: Option<(Position, String)>,
}

impl ParsedArgs {
	/// Record the file argument, returning `false` if one was already recorded.
	pub fn record_file(&mut self, position: Position, value: &str) -> bool {
		if self.file.is_some() {
			return false;
		}
		self.file = Some((position, value.to_owned()));
		true
	}

	pub fn show_help(&self) -> bool {
		self.args.iter().any(|arg| matches!(arg, Ok(Arg::Help)))
	}

	pub fn file_arg_pos(&self) -> Option<Position> {
		self.file.as_ref().map(|(position, _)| *position)
	}

	pub fn file_path(&self) -> Option<&str> {
		self.file.as_ref().map(|(_, value)| value.as_str())
	}

	pub fn errors(&self) -> impl Iterator<Item = &ArgError> {
		self.args.iter().filter_map(|arg| arg.as_ref().err())
	}
}

/// Dense row-major matrix of `f64`, empty (0x0) by default.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Matrix {
	rows: usize,
	cols: usize,
	data: Vec<f64>,
}

impl Matrix {
	/// Build a matrix from equally sized rows. Returns `None` if the rows are ragged.
	pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
		let cols = rows.first().map_or(0, Vec::len);
		if rows.iter().any(|row| row.len() != cols) {
			return None;
		}
		Some(Self {
			rows: rows.len(),
			cols,
			data: rows.into_iter().flatten().collect(),
		})
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn cols(&self) -> usize {
		self.cols
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, row: usize, col: usize) -> Option<f64> {
		if row >= self.rows || col >= self.cols {
			return None;
		}
		self.data.get(row * self.cols + col).copied()
	}

	pub fn row(&self, row: usize) -> Option<&[f64]> {
		if row >= self.rows {
			return None;
		}
		Some(&self.data[row * self.cols..(row + 1) * self.cols])
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn default_matrix_is_empty() {
		let matrix = Matrix::default();
		assert!(matrix.is_empty());
		assert_eq!((matrix.rows(), matrix.cols()), (0, 0));
		assert_eq!(matrix.get(0, 0), None);
	}

	#[test]
	fn from_rows_is_row_major() {
		let matrix = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
		let matrix = matrix.expect("rows are equally sized");
		assert_eq!((matrix.rows(), matrix.cols()), (2, 3));
		assert_eq!(matrix.get(1, 0), Some(4.0));
		assert_eq!(matrix.row(0), Some(&[1.0, 2.0, 3.0][..]));
		assert_eq!(matrix.get(0, 3), None);
		assert_eq!(matrix.row(2), None);
	}

	#[test]
	fn from_rows_rejects_ragged() {
		assert!(Matrix::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_none());
	}

	#[test]
	fn file_is_recorded_once() {
		let mut parsed = ParsedArgs::default();
		assert!(parsed.record_file(2, "a.csv"));
		assert!(!parsed.record_file(4, "b.csv"));
		assert_eq!(parsed.file_arg_pos(), Some(2));
		assert_eq!(parsed.file_path(), Some("a.csv"));
	}
}
