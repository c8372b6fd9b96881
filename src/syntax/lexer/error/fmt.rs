use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnexpectedEof => write!(f, "unexpected end of file"),

			Self::Unexpected(value) => {
				write!(f, "unexpected character '{}'", *value as char)
			}

			Self::InvalidEscapeSequence(sequence) => write!(
				f,
				"invalid escape sequence \"{}\"",
				String::from_utf8_lossy(sequence)
			),

			Self::InvalidNumber(number) => write!(
				f,
				"invalid number literal \"{}\"",
				String::from_utf8_lossy(number)
			),
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} - {}", self.pos, self.error)
	}
}
