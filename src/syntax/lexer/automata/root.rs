use super::{
	symbol::SymbolChar,
	word::IsWord,
	Cursor,
	Error,
	LiteralString,
	Mode,
	NumberLiteral,
	State,
	Str,
	Symbol,
	Token,
	TokenKind,
	Transition,
	Word,
};


/// The top level lexer state. Also active inside interpolated
/// expressions, where the mode stack disambiguates the closing brace.
#[derive(Debug)]
pub(super) struct Root;


impl Root {
	pub fn visit(self, cursor: &Cursor, modes: &mut Vec<Mode>) -> Transition {
		let token = |kind| Ok(Token { kind, pos: cursor.pos() });

		match cursor.peek() {
			// Newlines are tokens; the fix-up pass turns them into
			// semicolons where needed.
			Some(b'\n') => Transition::emit(self, token(TokenKind::Newline)),

			// Other whitespace.
			Some(c) if c.is_ascii_whitespace() => Transition::advance(self),

			// Line continuation.
			Some(b'\\') => Transition::emit(self, token(TokenKind::Backslash)),

			// Interpolated string literals.
			Some(b'"') => {
				modes.push(Mode::Str);
				Transition::emit(Str::at(cursor), token(TokenKind::StringStart))
			}

			// Literal strings.
			Some(quote @ (b'\'' | b'`')) => {
				Transition::advance(LiteralString::at(quote, cursor))
			}

			// A closing brace ends an interpolated expression when one
			// is open.
			Some(b'}') if modes.last() == Some(&Mode::StrExpr) => {
				modes.pop();
				Transition::emit(Str::at(cursor), token(TokenKind::StringExprEnd))
			}

			// Number literals.
			Some(c) if c.is_ascii_digit() => {
				Transition::advance(NumberLiteral::at(cursor))
			}

			// Identifiers and keywords.
			Some(c) if c.is_word_start() => Transition::hold(Word::at(cursor)),

			// Symbols.
			Some(c) => match SymbolChar::from_first(c) {
				SymbolChar::None => Transition::emit(
					self,
					Err(Error::unexpected(c, cursor.pos())),
				),

				SymbolChar::Single(kind) => Transition::emit(self, token(kind)),

				SymbolChar::Double { first } => {
					Transition::advance(Symbol::from_first(first, cursor))
				}
			},

			// End of input.
			None => Transition::advance(self),
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}
