use std::fmt;

use crate::fmt::Display;
use crate::symbol::Interner;
use super::Error;


impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnexpectedEof => write!(f, "unexpected end of file"),

			Self::Unexpected { token, expected } => {
				write!(f, "{} - unexpected token, expected {}", token.pos, expected)
			}
		}
	}
}


impl<'a> Display<'a> for Error {
	type Context = &'a Interner;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		match self {
			Self::UnexpectedEof => write!(f, "unexpected end of file"),

			Self::Unexpected { token, expected } => {
				write!(f, "{} - unexpected '", token.pos)?;
				token.fmt(f, context)?;
				write!(f, "', expected {}", expected)
			}
		}
	}
}
