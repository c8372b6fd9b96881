use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{compiler, sam, symbol, syntax};


/// Collect every `.sal` program under a corpus directory, in a stable
/// order. Directories are walked relative to the crate root.
pub fn sal_sources<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
	let mut root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	root.push(dir);

	let mut sources = Vec::new();
	let mut pending = vec![root];

	while let Some(dir) = pending.pop() {
		for entry in fs::read_dir(dir)? {
			let path = entry?.path();

			if path.is_dir() {
				pending.push(path);
			} else if path.extension().and_then(OsStr::to_str) == Some("sal") {
				sources.push(path);
			}
		}
	}

	sources.sort();
	Ok(sources)
}


/// Drive every corpus program through the whole pipeline: lex, parse,
/// compile, assemble. Assembly must also be deterministic.
#[test]
fn test_pipeline() -> io::Result<()> {
	run_pipeline("src/syntax/tests/data/positive")
}


/// The demo programs must keep working too.
#[test]
fn test_demos() -> io::Result<()> {
	run_pipeline("demos")
}


fn run_pipeline(dir: &str) -> io::Result<()> {
	let mut interner = symbol::Interner::new();

	for path in sal_sources(dir)? {
		let source = syntax::Source::from_path(&path, &mut interner)?;

		let body = syntax::analyze(&source, &mut interner)
			.unwrap_or_else(
				|error| panic!("{}: syntax error: {:?}", path.display(), error)
			);

		let asm = compiler::compile(&body, &interner)
			.unwrap_or_else(
				|error| panic!("{}: compile error: {}", path.display(), error)
			);

		let state = sam::assembler::assemble(asm.as_bytes(), Path::new("."))
			.unwrap_or_else(
				|error| panic!("{}: assembly error: {}", path.display(), error)
			);

		let again = sam::assembler::assemble(asm.as_bytes(), Path::new("."))
			.expect("assembly succeeded once");

		assert_eq!(
			state.to_string(),
			again.to_string(),
			"{}: assembly must be deterministic",
			path.display()
		);
	}

	Ok(())
}
