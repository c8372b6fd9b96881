use crate::fmt::Display;
use super::{Interner, Symbol};


impl<'a> Display<'a> for Symbol {
	type Context = &'a Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		let ident = context
			.resolve(*self)
			.unwrap_or("<unresolved symbol>");

		write!(f, "{}", ident)
	}
}
