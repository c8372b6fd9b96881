use std::io;

use crate::{symbol, tests};
use super::{analyze, Source};


/// Analyze every program in a corpus directory, checking whether it is
/// expected to pass or fail.
fn check_dir(dir: &str, expect_errors: bool) -> io::Result<()> {
	let mut interner = symbol::Interner::new();

	for path in tests::sal_sources(dir)? {
		let source = Source::from_path(&path, &mut interner)?;
		let analysis = analyze(&source, &mut interner);

		if analysis.is_err() != expect_errors {
			panic!(
				"{}: unexpected analysis result: {:#?}",
				path.display(),
				analysis
			);
		}
	}

	Ok(())
}


#[test]
fn test_positive() -> io::Result<()> {
	check_dir("src/syntax/tests/data/positive", false)
}


#[test]
fn test_negative() -> io::Result<()> {
	check_dir("src/syntax/tests/data/negative", true)
}
