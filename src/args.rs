use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};


/// The command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
	/// The program file: `.yaml` for SAM source, `.sal` for SAL.
	pub program: PathBuf,
	/// Dump the assembled stacks to standard error.
	pub debug: bool,
	/// Print the syntax tree.
	pub ast: bool,
	/// Print the emitted SAM source.
	pub asm: bool,
}


pub fn parse() -> Args {
	let matches = Command::new("sam")
		.version(env!("CARGO_PKG_VERSION"))
		.about("SAM, the Super-Awesome Machine: a simple virtual machine and run time for playful low-level programming.")
		.arg(
			Arg::new("program")
				.value_name("PROGRAM")
				.required(true)
				.help("Program file (PROGRAM.yaml for SAM, PROGRAM.sal for SAL)")
		)
		.arg(
			Arg::new("debug")
				.long("debug")
				.action(ArgAction::SetTrue)
				.help("Output debug information to standard error")
		)
		.arg(
			Arg::new("ast")
				.long("ast")
				.action(ArgAction::SetTrue)
				.help("Print the syntax tree")
		)
		.arg(
			Arg::new("asm")
				.long("asm")
				.action(ArgAction::SetTrue)
				.help("Print the compiled SAM source")
		)
		.get_matches();

	let program = matches
		.get_one::<String>("program")
		.expect("program is a required argument");

	Args {
		program: program.into(),
		debug: matches.get_flag("debug"),
		ast: matches.get_flag("ast"),
		asm: matches.get_flag("asm"),
	}
}
