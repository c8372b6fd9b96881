// Parts of the machine-model API (stack access, word encoding) exist for
// the execution engine, which lives out of tree.
#![allow(dead_code)]

mod args;
mod compiler;
mod fmt;
mod sam;
mod symbol;
mod syntax;
mod term;
#[cfg(test)]
mod tests;

use std::path::Path;
use std::process::ExitCode;

use term::color;


/// Anything that can abort the pipeline.
#[derive(Debug)]
enum Error {
	Io(std::io::Error),
	Syntax(syntax::Error),
	Compile(compiler::Error),
	Assemble(sam::assembler::Error),
	UnknownFileType,
}


impl<'a> fmt::Display<'a> for Error {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Io(error) => write!(f, "{}", error),
			Self::Syntax(error) => error.fmt(f, context),
			Self::Compile(error) => write!(f, "{}", error),
			Self::Assemble(error) => write!(f, "{}", error),
			Self::UnknownFileType => {
				write!(f, "unknown file type, expected PROGRAM.yaml or PROGRAM.sal")
			}
		}
	}
}


fn main() -> ExitCode {
	let args = args::parse();
	let mut interner = symbol::Interner::new();

	match run(&args, &mut interner) {
		Ok(state) => {
			if args.debug {
				eprint!("{}", state);
			}

			ExitCode::SUCCESS
		}

		Err(error) => {
			eprintln!(
				"{}: {}",
				color::Fg(color::Red, "Error"),
				fmt::Show(&error, &interner)
			);

			ExitCode::FAILURE
		}
	}
}


fn run(args: &args::Args, interner: &mut symbol::Interner) -> Result<sam::State, Error> {
	let path = args.program.as_path();
	let base_dir = path
		.parent()
		.unwrap_or_else(|| Path::new("."));

	match path.extension().and_then(std::ffi::OsStr::to_str) {
		// SAL source: compile, then assemble the emitted tree.
		Some("sal") => {
			let source = syntax::Source::from_path(path, interner)
				.map_err(Error::Io)?;

			let body = syntax::analyze(&source, interner)
				.map_err(Error::Syntax)?;

			if args.ast {
				println!(
					"{}",
					fmt::Show(&body, syntax::ast::fmt::Context::from(&*interner))
				);
			}

			let asm = compiler::compile(&body, interner)
				.map_err(Error::Compile)?;

			if args.asm {
				print!("{}", asm);
			}

			sam::assembler::assemble(asm.as_bytes(), base_dir)
				.map_err(Error::Assemble)
		}

		// SAM source: assemble directly.
		Some("yaml") => {
			let source = std::fs::read(path).map_err(Error::Io)?;

			sam::assembler::assemble(&source, base_dir)
				.map_err(Error::Assemble)
		}

		_ => Err(Error::UnknownFileType),
	}
}
