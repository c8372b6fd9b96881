use super::{
	Cursor,
	Error,
	Literal,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing numeric literals, both integer and float.
#[derive(Debug)]
pub(super) struct NumberLiteral {
	start_offset: usize,
	/// None before a dot is seen, Some(false) right after it, Some(true)
	/// once a fractional digit has been consumed.
	consumed_decimal: Option<bool>,
	pos: SourcePos,
}


impl NumberLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			start_offset: cursor.offset(),
			consumed_decimal: None,
			pos: cursor.pos(),
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match (&self, cursor.peek()) {
			// There must be at most one dot.
			(&Self { consumed_decimal: None, .. }, Some(b'.')) => {
				self.consumed_decimal = Some(false);
				Transition::advance(self)
			}

			// Consume digits.
			(_, Some(value)) if value.is_ascii_digit() => {
				if self.consumed_decimal == Some(false) {
					self.consumed_decimal = Some(true);
				}

				Transition::advance(self)
			}

			// A dot must be followed by a digit.
			(&Self { consumed_decimal: Some(false), .. }, value) => {
				let error = match value {
					Some(value) => Error::unexpected(value, self.pos),
					None => Error::unexpected_eof(self.pos),
				};

				Transition::hold_emit(Root, Err(error))
			}

			// Anything else ends the literal, including the end of
			// input.
			(_, _) => Transition::hold_emit(Root, self.parse(cursor)),
		}
	}


	/// Parse the consumed characters.
	fn parse(&self, cursor: &Cursor) -> Result<Token, Error> {
		let number = &cursor.slice()[self.start_offset .. cursor.offset()];

		let literal = |literal| Ok(Token { kind: TokenKind::Literal(literal), pos: self.pos });

		// There is no method in std to parse a number from a byte array.
		let number_str = std::str::from_utf8(number)
			.expect("number literals should be valid ascii, which should be valid utf8");

		if self.consumed_decimal.is_some() {
			match number_str.parse() {
				Ok(float) => literal(Literal::Float(float)),
				Err(_) => Err(Error::invalid_number(number, self.pos)),
			}
		} else {
			match number_str.parse() {
				Ok(int) => literal(Literal::Int(int)),
				Err(_) => Err(Error::invalid_number(number, self.pos)),
			}
		}
	}
}


impl From<NumberLiteral> for State {
	fn from(state: NumberLiteral) -> State {
		State::NumberLiteral(state)
	}
}
