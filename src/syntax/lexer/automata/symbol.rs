use super::{
	Comment,
	Cursor,
	Operator,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing multi-character symbols.
#[derive(Debug)]
pub(super) struct Symbol {
	first: u8,
	/// Whether the first character has been seen twice, for the
	/// three-character shift operators.
	doubled: bool,
	pos: SourcePos,
}


impl Symbol {
	pub fn from_first(first: u8, cursor: &Cursor) -> Self {
		Self { first, doubled: false, pos: cursor.pos() }
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let pos = self.pos;
		let operator = TokenKind::Operator;

		// Emit consuming the peeked character, or holding it for the
		// root state.
		let emit = |kind| Transition::emit(Root, Ok(Token { kind, pos }));
		let hold_emit = |kind| Transition::hold_emit(Root, Ok(Token { kind, pos }));

		match (self.first, self.doubled, cursor.peek()) {
			(b'<', false, Some(b'=')) => emit(operator(Operator::LowerEquals)),
			(b'<', false, Some(b'<')) => {
				self.doubled = true;
				Transition::advance(self)
			}
			(b'<', false, _) => hold_emit(operator(Operator::Lower)),
			(b'<', true, Some(b'<')) => emit(operator(Operator::ShiftLeft)),
			(b'<', true, _) => hold_emit(operator(Operator::Append)),

			(b'>', false, Some(b'=')) => emit(operator(Operator::GreaterEquals)),
			(b'>', false, Some(b'>')) => {
				self.doubled = true;
				Transition::advance(self)
			}
			(b'>', false, _) => hold_emit(operator(Operator::Greater)),
			(b'>', true, Some(b'>')) => emit(operator(Operator::ShiftRight)),
			(b'>', true, _) => hold_emit(operator(Operator::Prepend)),

			(b'&', _, Some(b'&')) => emit(operator(Operator::And)),
			(b'&', _, _) => hold_emit(operator(Operator::BitAnd)),

			(b'|', _, Some(b'|')) => emit(operator(Operator::Or)),
			(b'|', _, _) => hold_emit(operator(Operator::BitOr)),

			(b'=', _, Some(b'=')) => emit(operator(Operator::Equals)),
			(b'=', _, _) => hold_emit(operator(Operator::Assign)),

			(b'!', _, Some(b'=')) => emit(operator(Operator::NotEquals)),
			(b'!', _, _) => hold_emit(operator(Operator::Not)),

			(b'*', _, Some(b'*')) => emit(operator(Operator::Pow)),
			(b'*', _, _) => hold_emit(operator(Operator::Times)),

			(b'-', _, Some(b'>')) => emit(operator(Operator::Arrow)),
			(b'-', _, _) => hold_emit(operator(Operator::Minus)),

			(b'%', _, Some(b'=')) => emit(operator(Operator::ModAssign)),
			(b'%', _, _) => hold_emit(operator(Operator::Mod)),

			(b':', _, Some(b'=')) => emit(operator(Operator::Update)),
			(b':', _, _) => hold_emit(TokenKind::Colon),

			(b'/', _, Some(b'/')) => Transition::advance(Comment),
			(b'/', _, _) => hold_emit(operator(Operator::Div)),

			// We must have covered all possibilities for the first
			// character. The peeked character is wildcarded, which
			// covers everything including the end of input.
			_ => unreachable!("invalid first character in symbol state"),
		}
	}
}


impl From<Symbol> for State {
	fn from(state: Symbol) -> State {
		State::Symbol(state)
	}
}


/// Helper for symbols.
pub(super) enum SymbolChar {
	/// Not a symbol character.
	None,
	/// Some symbols are single characters. We can produce them straight away.
	Single(TokenKind),
	/// Others have more characters, so we must handle those separately.
	Double { first: u8 },
}


impl SymbolChar {
	pub fn from_first(first: u8) -> Self {
		let token = Self::Single;
		let operator = |op| token(TokenKind::Operator(op));
		let double = |c| Self::Double { first: c };

		match first {
			// Single character.
			b'+' => operator(Operator::Plus),
			b'^' => operator(Operator::BitXor),
			b'~' => operator(Operator::BitNot),
			b'#' => operator(Operator::Len),
			b',' => token(TokenKind::Comma),
			b';' => token(TokenKind::Semicolon),
			b'(' => token(TokenKind::OpenParens),
			b')' => token(TokenKind::CloseParens),
			b'[' => token(TokenKind::OpenBracket),
			b']' => token(TokenKind::CloseBracket),
			b'{' => token(TokenKind::OpenBrace),
			b'}' => token(TokenKind::CloseBrace),

			// More characters may follow.
			b'<' => double(first),
			b'>' => double(first),
			b'&' => double(first),
			b'|' => double(first),
			b'=' => double(first),
			b'!' => double(first),
			b'*' => double(first),
			b'-' => double(first),
			b'%' => double(first),
			b':' => double(first),
			b'/' => double(first),

			// Not a symbol character:
			_ => SymbolChar::None,
		}
	}
}
