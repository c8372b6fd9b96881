mod fmt;

use super::{lexer, parser};


/// Syntax error. The analysis aborts at the first one.
#[derive(Debug)]
pub enum Error {
	Lexer(lexer::Error),
	Parser(parser::Error),
}


impl From<lexer::Error> for Error {
	fn from(error: lexer::Error) -> Self {
		Self::Lexer(error)
	}
}


impl From<parser::Error> for Error {
	fn from(error: parser::Error) -> Self {
		Self::Parser(error)
	}
}


impl std::error::Error for Error {}
