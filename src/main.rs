//! Program entrypoint.

use std::env;
use std::io;

use anyhow::Result;

use openrecsyst::process;

fn main() -> Result<()> {
	env_logger::init();
	let tokens: Vec<String> = env::args().collect();
	let mut output = io::stdout();
	if let Some(dataset) = process::run(&tokens, &mut output)? {
		log::debug!("Dataset ready ({} rows)", dataset.rows());
	}
	Ok(())
}
