pub mod fmt;

use super::{lexer, SourcePos};
pub use crate::symbol::Symbol;


/// Literals of the numeric types. Strings lex, but are deferred from the
/// grammar for now.
#[derive(Debug)]
pub enum Literal {
	Int(i64),
	Float(f64),
}


impl From<lexer::Literal> for Literal {
	fn from(literal: lexer::Literal) -> Self {
		match literal {
			lexer::Literal::Int(int) => Literal::Int(int),
			lexer::Literal::Float(float) => Literal::Float(float),
		}
	}
}


/// Unary operators, in prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
	Not,    // !
	Minus,  // -
	BitNot, // ~
	Len,    // #
	Ipush,  // <<<
}


/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
	And, // &&
	Or,  // ||

	Append,  // <<
	Prepend, // >>

	BitAnd,     // &
	BitXor,     // ^
	BitOr,      // |
	ShiftLeft,  // <<<
	ShiftRight, // >>>

	Equals,        // ==
	NotEquals,     // !=
	Greater,       // >
	GreaterEquals, // >=
	Lower,         // <
	LowerEquals,   // <=

	Plus,  // +
	Minus, // -
	Times, // *
	Div,   // /
	Mod,   // %
	Pow,   // **
}


/// Expressions of all kinds in the language.
#[derive(Debug)]
pub enum Expr {
	Literal {
		literal: Literal,
		pos: SourcePos,
	},
	Identifier {
		identifier: Symbol,
		pos: SourcePos,
	},
	List {
		items: Box<[Expr]>,
		pos: SourcePos,
	},
	/// A block expression: `{ body }`.
	Block {
		body: Box<Body>,
		pos: SourcePos,
	},
	Function {
		params: Box<[Symbol]>,
		body: Body,
		pos: SourcePos,
	},
	If {
		condition: Box<Expr>,
		then: Body,
		otherwise: Option<Body>,
		pos: SourcePos,
	},
	Loop {
		body: Body,
		pos: SourcePos,
	},
	UnaryOp {
		op: UnaryOp,
		operand: Box<Expr>,
		pos: SourcePos,
	},
	BinaryOp {
		left: Box<Expr>,
		op: BinaryOp,
		right: Box<Expr>,
		pos: SourcePos,
	},
	/// A function expression with its successive argument lists, as in
	/// `f(a)(b)`.
	Call {
		function: Box<Expr>,
		applications: Box<[Box<[Expr]>]>,
		pos: SourcePos,
	},
	/// An indexed access: `obj[index]`.
	Index {
		object: Box<Expr>,
		index: Box<Expr>,
		pos: SourcePos,
	},
}


impl Expr {
	pub fn pos(&self) -> SourcePos {
		match self {
			Self::Literal { pos, .. }
			| Self::Identifier { pos, .. }
			| Self::List { pos, .. }
			| Self::Block { pos, .. }
			| Self::Function { pos, .. }
			| Self::If { pos, .. }
			| Self::Loop { pos, .. }
			| Self::UnaryOp { pos, .. }
			| Self::BinaryOp { pos, .. }
			| Self::Call { pos, .. }
			| Self::Index { pos, .. } => *pos,
		}
	}
}


/// A declaration: `let name = expr;`. Declarations come first in a body.
#[derive(Debug)]
pub struct Declaration {
	pub identifier: Symbol,
	pub value: Expr,
	pub pos: SourcePos,
}


/// Statements of all kinds in the language.
#[derive(Debug)]
pub enum Statement {
	/// An assignment: `lvalue := expr;`. The left side is an arbitrary
	/// expression here; the compiler restricts it to a variable or an
	/// indexed access.
	Assign {
		left: Expr,
		right: Expr,
		pos: SourcePos,
	},
	/// A trap invocation: `trap NAME, arg, ...;`.
	Trap {
		name: Symbol,
		args: Box<[Expr]>,
		pos: SourcePos,
	},
	Expr(Expr),
}


/// The terminator of a body, after which no statement may follow.
#[derive(Debug)]
pub enum Terminator {
	Return {
		expr: Box<Expr>,
		pos: SourcePos,
	},
	Break {
		expr: Option<Expr>,
		pos: SourcePos,
	},
	Continue {
		pos: SourcePos,
	},
}


/// A body: declarations, then statements, then an optional terminator.
/// Blocks wrap a body in braces; the top-level program is a bare body.
#[derive(Debug)]
pub struct Body {
	pub declarations: Box<[Declaration]>,
	pub statements: Box<[Statement]>,
	pub terminator: Option<Box<Terminator>>,
	pub pos: SourcePos,
}
