use std::fmt::{self, Display};
use std::io;


/// Assembly error. All are fatal; assembly aborts at the first one.
#[derive(Debug)]
pub enum Error {
	/// The input held no document.
	EmptyInput,
	/// The input held more than one document.
	MultipleDocuments,
	/// The program is not a sequence of instructions.
	NotASequence,
	/// A node of a kind that cannot be assembled.
	InvalidNode,
	/// An instruction line with no tokens.
	EmptyInstruction,
	/// Mnemonic not in the catalogue.
	UnknownInstruction(String),
	/// Operand mnemonic without its operand.
	NeedsOperand(String),
	/// Operand supplied to a mnemonic that takes none, or too many.
	UnexpectedOperand(String),
	/// Operand neither an integer nor a known trap.
	BadLiteral(String),
	/// Malformed float operand.
	BadFloat(String),
	/// Trap name not in the catalogue.
	UnknownTrap(String),
	/// A label mapping without exactly one entry and a string key.
	BadLabel,
	/// A label that was never declared.
	UnresolvedLabel(String),
	/// An unknown directive, or a directive with a bad argument.
	InvalidDirective(String),
	/// Failure reading an included file.
	Io(io::Error),
	/// Malformed input document.
	Yaml(serde_yaml::Error),
}


impl Error {
	pub fn unknown_instruction(name: &str) -> Self {
		Self::UnknownInstruction(name.to_owned())
	}

	pub fn needs_operand(name: &str) -> Self {
		Self::NeedsOperand(name.to_owned())
	}

	pub fn unexpected_operand(name: &str) -> Self {
		Self::UnexpectedOperand(name.to_owned())
	}

	pub fn bad_literal(operand: &str) -> Self {
		Self::BadLiteral(operand.to_owned())
	}

	pub fn bad_float(operand: &str) -> Self {
		Self::BadFloat(operand.to_owned())
	}

	pub fn unknown_trap(name: &str) -> Self {
		Self::UnknownTrap(name.to_owned())
	}

	pub fn unresolved_label(label: &str) -> Self {
		Self::UnresolvedLabel(label.to_owned())
	}

	pub fn invalid_directive(name: &str) -> Self {
		Self::InvalidDirective(name.to_owned())
	}
}


impl From<io::Error> for Error {
	fn from(error: io::Error) -> Self {
		Self::Io(error)
	}
}


impl From<serde_yaml::Error> for Error {
	fn from(error: serde_yaml::Error) -> Self {
		Self::Yaml(error)
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::EmptyInput => write!(f, "input was empty"),
			Self::MultipleDocuments => write!(f, "only one program allowed at a time"),
			Self::NotASequence => write!(f, "program must be a list of instructions"),
			Self::InvalidNode => write!(f, "invalid code"),
			Self::EmptyInstruction => write!(f, "empty instruction"),
			Self::UnknownInstruction(name) => write!(f, "unknown instruction {}", name),
			Self::NeedsOperand(name) => write!(f, "{} needs an operand", name),
			Self::UnexpectedOperand(name) => write!(f, "unexpected operand for {}", name),
			Self::BadLiteral(operand) => write!(f, "bad literal {}", operand),
			Self::BadFloat(operand) => write!(f, "bad float {}", operand),
			Self::UnknownTrap(name) => write!(f, "unknown trap {}", name),
			Self::BadLabel => write!(f, "bad label"),
			Self::UnresolvedLabel(label) => write!(f, "unresolved label {}", label),
			Self::InvalidDirective(name) => write!(f, "invalid directive {}", name),
			Self::Io(error) => write!(f, "{}", error),
			Self::Yaml(error) => write!(f, "{}", error),
		}
	}
}


impl std::error::Error for Error {}
