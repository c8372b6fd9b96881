use super::{
	Cursor,
	Error,
	Mode,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state for single-line literal strings ('...', `...`), which have
/// no escapes and no interpolation.
#[derive(Debug)]
pub(super) struct LiteralString {
	quote: u8,
	value: Vec<u8>,
	pos: SourcePos,
}


impl LiteralString {
	pub fn at(quote: u8, cursor: &Cursor) -> Self {
		Self {
			quote,
			value: Vec::with_capacity(8),
			pos: cursor.pos(),
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			Some(c) if c == self.quote => Transition::emit(
				Root,
				Ok(
					Token {
						kind: TokenKind::LiteralString(self.value.into()),
						pos: self.pos,
					}
				),
			),

			// Literal strings are single-line.
			Some(b'\n') => Transition::hold_emit(
				Root,
				Err(Error::unexpected(b'\n', self.pos)),
			),

			None => Transition::hold_emit(
				Root,
				Err(Error::unexpected_eof(self.pos)),
			),

			Some(c) => {
				self.value.push(c);
				Transition::advance(self)
			}
		}
	}
}


impl From<LiteralString> for State {
	fn from(state: LiteralString) -> State {
		State::LiteralString(state)
	}
}


/// The state inside an interpolated string ("..."). Interpolations hand
/// control back to the root state, with the mode stack recording the
/// pending string context.
#[derive(Debug)]
pub(super) struct Str {
	/// The accumulated chars since the last emitted token.
	value: Vec<u8>,
	/// The position of the current escape sequence, if any.
	escaping: Option<(usize, SourcePos)>,
	/// The position of the current run of chars.
	pos: SourcePos,
}


impl Str {
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			value: Vec::with_capacity(8),
			escaping: None,
			pos: cursor.pos(),
		}
	}


	/// Emit the accumulated chars without consuming the current
	/// character; the next visit handles it with an empty buffer.
	fn flush_chars(mut self) -> Transition {
		let chars = std::mem::take(&mut self.value);
		let pos = self.pos;

		Transition::hold_emit(
			self,
			Ok(Token { kind: TokenKind::StringChars(chars.into()), pos }),
		)
	}


	pub fn visit(mut self, cursor: &Cursor, modes: &mut Vec<Mode>) -> Transition {
		match (&self, cursor.peek()) {
			// The end of input inside a string is always an error.
			(_, None) => {
				modes.pop();
				Transition::hold_emit(Root, Err(Error::unexpected_eof(self.pos)))
			}

			// Escaped character.
			(&Self { escaping: Some((offset, pos)), .. }, Some(value)) => {
				let escaped = match value {
					b'"' => Some(b'"'),
					b'\'' => Some(b'\''),
					b'n' => Some(b'\n'),
					b't' => Some(b'\t'),
					b'0' => Some(b'\0'),
					b'\\' => Some(b'\\'),
					b'{' => Some(b'{'),
					_ => None,
				};

				self.escaping = None;

				match escaped {
					Some(c) => {
						if self.value.is_empty() {
							self.pos = pos;
						}

						self.value.push(c);
						Transition::advance(self)
					}

					None => {
						let sequence = &cursor.slice()[offset ..= cursor.offset()];
						let error = Error::invalid_escape_sequence(sequence, pos);
						Transition::emit(self, Err(error))
					}
				}
			}

			// Begin of escape sequence.
			(_, Some(b'\\')) => {
				self.escaping = Some((cursor.offset(), cursor.pos()));
				Transition::advance(self)
			}

			// End of string.
			(_, Some(b'"')) => {
				if !self.value.is_empty() {
					return self.flush_chars();
				}

				modes.pop();
				Transition::emit(
					Root,
					Ok(Token { kind: TokenKind::StringEnd, pos: cursor.pos() }),
				)
			}

			// Start of an interpolated expression.
			(_, Some(b'{')) => {
				if !self.value.is_empty() {
					return self.flush_chars();
				}

				modes.push(Mode::StrExpr);
				Transition::emit(
					Root,
					Ok(Token { kind: TokenKind::StringExprStart, pos: cursor.pos() }),
				)
			}

			// Ordinary character.
			(_, Some(value)) => {
				if self.value.is_empty() {
					self.pos = cursor.pos();
				}

				self.value.push(value);
				Transition::advance(self)
			}
		}
	}
}


impl From<Str> for State {
	fn from(state: Str) -> State {
		State::Str(state)
	}
}
