mod fmt;

use crate::syntax::SourcePos;


/// A compile error. All are fatal; compilation aborts at the first one.
#[derive(Debug)]
pub enum Error {
	/// Name not in scope or captures.
	NoSuchVariable {
		name: String,
		pos: SourcePos,
	},
	/// Assignment target neither a variable nor an indexed access.
	InvalidLvalue {
		pos: SourcePos,
	},
	/// Trap name not in the catalogue.
	UnknownTrap {
		name: String,
		pos: SourcePos,
	},
	/// Trap invoked with the wrong number of arguments.
	TrapArity {
		name: String,
		expected: u32,
		supplied: usize,
		pos: SourcePos,
	},
	/// Trap with more than one result.
	UnsupportedTrapArity {
		name: String,
		pos: SourcePos,
	},
	/// `break` outside a loop.
	BreakOutsideLoop {
		pos: SourcePos,
	},
	/// `continue` outside a loop.
	ContinueOutsideLoop {
		pos: SourcePos,
	},
	/// Failure serialising the emitted tree.
	Emit(serde_yaml::Error),
}


impl Error {
	pub fn no_such_variable(name: &str, pos: SourcePos) -> Self {
		Self::NoSuchVariable { name: name.to_owned(), pos }
	}

	pub fn invalid_lvalue(pos: SourcePos) -> Self {
		Self::InvalidLvalue { pos }
	}

	pub fn unknown_trap(name: &str, pos: SourcePos) -> Self {
		Self::UnknownTrap { name: name.to_owned(), pos }
	}

	pub fn trap_arity(name: &str, expected: u32, supplied: usize, pos: SourcePos) -> Self {
		Self::TrapArity { name: name.to_owned(), expected, supplied, pos }
	}

	pub fn unsupported_trap_arity(name: &str, pos: SourcePos) -> Self {
		Self::UnsupportedTrapArity { name: name.to_owned(), pos }
	}

	pub fn break_outside_loop(pos: SourcePos) -> Self {
		Self::BreakOutsideLoop { pos }
	}

	pub fn continue_outside_loop(pos: SourcePos) -> Self {
		Self::ContinueOutsideLoop { pos }
	}
}


impl From<serde_yaml::Error> for Error {
	fn from(error: serde_yaml::Error) -> Self {
		Self::Emit(error)
	}
}


impl std::error::Error for Error {}
