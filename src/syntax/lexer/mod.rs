mod automata;
mod cursor;
mod error;
#[cfg(test)]
mod tests;
mod token;

use crate::symbol;
use automata::Scanner;
use super::{Source, SourcePos};
pub use cursor::Cursor;
pub use error::{Error, ErrorKind};
pub use token::{Keyword, Literal, Operator, Token, TokenKind};


/// The lexer for SAL source code: the scanner, plus the semicolon
/// fix-up pass that keeps statement termination implicit in the surface
/// language. A raw newline is discarded after a semicolon or a line
/// continuation, becomes a semicolon after a token that may end a
/// statement, and is discarded otherwise; a closing brace not preceded
/// by a semicolon gets one injected ahead of it.
#[derive(Debug)]
pub struct Lexer<'a, 'b> {
	scanner: Scanner<'a, 'b>,
	/// The kind of the last emitted or discarded token.
	last: Option<TokenKind>,
	/// A token stashed while a synthetic semicolon goes out first.
	stashed: Option<Token>,
}


impl<'a, 'b> Lexer<'a, 'b> {
	pub fn new(cursor: Cursor<'a>, interner: &'b mut symbol::Interner) -> Self {
		Self {
			scanner: Scanner::new(cursor, interner),
			last: None,
			stashed: None,
		}
	}


	fn emit(&mut self, token: Token) -> Option<Result<Token, Error>> {
		self.last = Some(token.kind.clone());
		Some(Ok(token))
	}
}


impl<'a, 'b> Iterator for Lexer<'a, 'b> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		if let Some(token) = self.stashed.take() {
			return self.emit(token);
		}

		loop {
			let mut token = match self.scanner.next()? {
				Ok(token) => token,
				Err(error) => return Some(Err(error)),
			};

			match token.kind {
				TokenKind::Newline => match &self.last {
					// Collapse blank lines.
					Some(TokenKind::Semicolon) => continue,

					// Line continuation: discard both.
					Some(TokenKind::Backslash) => {
						self.last = Some(TokenKind::Newline);
						continue;
					}

					Some(kind) if kind.ends_statement() => {
						token.kind = TokenKind::Semicolon;
					}

					// The line is not a statement boundary.
					_ => {
						self.last = Some(TokenKind::Newline);
						continue;
					}
				},

				// Backslashes only matter to the newline rule above.
				TokenKind::Backslash => {
					self.last = Some(TokenKind::Backslash);
					continue;
				}

				TokenKind::CloseBrace => {
					if self.last != Some(TokenKind::Semicolon) {
						self.stashed = Some(token.clone());
						token.kind = TokenKind::Semicolon;
					}
				}

				_ => (),
			}

			return self.emit(token);
		}
	}
}
