use std::fmt;

use crate::fmt::Display;
use crate::symbol::Interner;
use super::Error;


impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Lexer(error) => write!(f, "{}", error),
			Self::Parser(error) => write!(f, "{}", error),
		}
	}
}


impl<'a> Display<'a> for Error {
	type Context = &'a Interner;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		match self {
			Self::Lexer(error) => write!(f, "{}", error),
			Self::Parser(error) => error.fmt(f, context),
		}
	}
}
