use std::fmt::{self, Display};

use super::Error;


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::NoSuchVariable { name, pos } => {
				write!(f, "{} - no such variable {}", pos, name)
			}

			Self::InvalidLvalue { pos } => {
				write!(f, "{} - invalid assignment target", pos)
			}

			Self::UnknownTrap { name, pos } => {
				write!(f, "{} - unknown trap {}", pos, name)
			}

			Self::TrapArity { name, expected, supplied, pos } => write!(
				f,
				"{} - trap {} takes {} argument(s), but {} supplied",
				pos,
				name,
				expected,
				supplied
			),

			Self::UnsupportedTrapArity { name, pos } => write!(
				f,
				"{} - trap {} returns more than one value, which is not supported",
				pos,
				name
			),

			Self::BreakOutsideLoop { pos } => {
				write!(f, "{} - 'break' used outside a loop", pos)
			}

			Self::ContinueOutsideLoop { pos } => {
				write!(f, "{} - 'continue' used outside a loop", pos)
			}

			Self::Emit(error) => write!(f, "error encoding compilation output: {}", error),
		}
	}
}
