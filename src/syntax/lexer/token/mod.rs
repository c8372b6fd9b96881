mod fmt;

use super::SourcePos;
use crate::symbol::Symbol;


/// All keywords in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	If,
	Fn,
	Loop,
	Then,
	Else,
	Break,
	Continue,
	Return,
	Let,
	Trap,
}


/// Literals for numeric types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
	Int(i64),
	Float(f64),
}


/// Operators, including assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Arrow,     // ->
	ModAssign, // %=

	Equals,        // ==
	NotEquals,     // !=
	Greater,       // >
	GreaterEquals, // >=
	Lower,         // <
	LowerEquals,   // <=

	And, // &&
	Or,  // ||
	Not, // !

	Plus,  // +
	Minus, // -
	Times, // *
	Div,   // /
	Mod,   // %
	Pow,   // **

	BitAnd, // &
	BitXor, // ^
	BitOr,  // |
	BitNot, // ~

	Append,     // <<
	Prepend,    // >>
	ShiftLeft,  // <<< (also the unary ipush operator)
	ShiftRight, // >>>

	Len, // #

	Assign, // =
	Update, // :=
}


/// All possible kinds of token in SAL.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	Identifier(Symbol),
	Keyword(Keyword),
	Operator(Operator),
	Literal(Literal),

	/// Literal strings ('...', `...`) have no interpolation.
	LiteralString(Box<[u8]>),

	// Interpolated strings produce a flat sub-stream of tokens:
	// StringStart, then chars and interpolations, then StringEnd.
	StringStart,
	StringChars(Box<[u8]>),
	StringExprStart,
	StringExprEnd,
	StringEnd,

	Colon,     // :
	Comma,     // ,
	Semicolon, // ;

	OpenParens,   // (
	CloseParens,  // )
	OpenBracket,  // [
	CloseBracket, // ]
	OpenBrace,    // {
	CloseBrace,   // }

	// Consumed by the semicolon fix-up; the parser never sees these.
	Newline,
	Backslash,
}


impl TokenKind {
	/// Whether a newline after this token ends a statement.
	pub fn ends_statement(&self) -> bool {
		matches!(
			self,
			Self::CloseParens
				| Self::CloseBrace
				| Self::CloseBracket
				| Self::Literal(_)
				| Self::StringEnd
				| Self::Identifier(_)
		)
	}
}


/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub pos: SourcePos,
}
