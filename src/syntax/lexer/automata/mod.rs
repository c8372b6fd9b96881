mod comment;
mod number;
mod root;
mod string;
mod symbol;
mod word;

use self::{
	comment::Comment,
	number::NumberLiteral,
	root::Root,
	string::{LiteralString, Str},
	symbol::Symbol,
	word::Word,
};
use super::{
	Cursor,
	Error,
	Keyword,
	Literal,
	Operator,
	SourcePos,
	Token,
	TokenKind,
};
use crate::symbol::Interner as SymbolInterner;


/// The lexer modes. Root needs no entry; the stack records the pending
/// string contexts, so that a closing brace can be told apart from the
/// end of an interpolated expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
	Str,
	StrExpr,
}


/// A state's verdict on the character under the cursor: move past it,
/// or keep it for the next state to examine, emitting a token or an
/// error along the way.
#[derive(Debug)]
enum Transition {
	Advance(State),
	AdvanceEmit(State, Result<Token, Error>),
	Hold(State),
	HoldEmit(State, Result<Token, Error>),
}


impl Transition {
	/// Move past the character, continuing in the given state.
	pub fn advance<S: Into<State>>(state: S) -> Self {
		Self::Advance(state.into())
	}

	/// Keep the character for the given state to examine.
	pub fn hold<S: Into<State>>(state: S) -> Self {
		Self::Hold(state.into())
	}

	/// Move past the character and emit.
	pub fn emit<S: Into<State>>(state: S, output: Result<Token, Error>) -> Self {
		Self::AdvanceEmit(state.into(), output)
	}

	/// Keep the character and emit.
	pub fn hold_emit<S: Into<State>>(state: S, output: Result<Token, Error>) -> Self {
		Self::HoldEmit(state.into(), output)
	}
}


/// All states in the scanner.
#[derive(Debug)]
enum State {
	Root(Root),
	Comment(Comment),
	NumberLiteral(NumberLiteral),
	Word(Word),
	Symbol(Symbol),
	LiteralString(LiteralString),
	Str(Str),
}


impl State {
	fn visit(
		self,
		cursor: &Cursor,
		interner: &mut SymbolInterner,
		modes: &mut Vec<Mode>,
	) -> Transition {
		match self {
			State::Root(state) => state.visit(cursor, modes),
			State::Comment(state) => state.visit(cursor),
			State::NumberLiteral(state) => state.visit(cursor),
			State::Word(state) => state.visit(cursor, interner),
			State::Symbol(state) => state.visit(cursor),
			State::LiteralString(state) => state.visit(cursor),
			State::Str(state) => state.visit(cursor, modes),
		}
	}
}


/// The scanner feeds the cursor to the active state until the input is
/// exhausted, handing out whatever the states emit. A state is shown
/// the end of input exactly once, so it can flush a pending token.
#[derive(Debug)]
pub(super) struct Scanner<'a, 'b> {
	/// The active state; None once the input is exhausted.
	state: Option<State>,
	cursor: Cursor<'a>,
	interner: &'b mut SymbolInterner,
	modes: Vec<Mode>,
}


impl<'a, 'b> Scanner<'a, 'b> {
	pub fn new(cursor: Cursor<'a>, interner: &'b mut SymbolInterner) -> Self {
		Self {
			state: Some(Root.into()),
			cursor,
			interner,
			modes: Vec::new(),
		}
	}
}


impl<'a, 'b> Iterator for Scanner<'a, 'b> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let state = self.state.take()?;
			let at_end = self.cursor.is_eof();

			let transition = state.visit(&self.cursor, self.interner, &mut self.modes);

			let (state, output) = match transition {
				Transition::Advance(state) => {
					self.cursor.step();
					(state, None)
				}

				Transition::AdvanceEmit(state, output) => {
					self.cursor.step();
					(state, Some(output))
				}

				Transition::Hold(state) => (state, None),

				Transition::HoldEmit(state, output) => (state, Some(output)),
			};

			// A state that was shown the end of input and emitted
			// nothing is finished; anything emitted is handed out, and
			// the state gets its turn at the end of input later.
			if at_end && output.is_none() {
				return None;
			}

			self.state = Some(state);

			if let Some(output) = output {
				return Some(output);
			}
		}
	}
}
