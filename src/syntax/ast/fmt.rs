use std::fmt;

use crate::fmt::{Display, Indentation};
use crate::symbol::Interner;
use super::{
	Body,
	BinaryOp,
	Declaration,
	Expr,
	Literal,
	Statement,
	Terminator,
	UnaryOp,
};


/// The context for formatting the syntax tree.
#[derive(Debug, Copy, Clone)]
pub struct Context<'a> {
	pub interner: &'a Interner,
	pub indentation: Indentation,
}


impl<'a> From<&'a Interner> for Context<'a> {
	fn from(interner: &'a Interner) -> Self {
		Self { interner, indentation: Indentation::default() }
	}
}


impl<'a> Context<'a> {
	fn indent(self) -> Self {
		Self {
			interner: self.interner,
			indentation: self.indentation.increase(),
		}
	}
}


impl fmt::Display for Literal {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Int(value) => write!(f, "{}", value),
			Self::Float(value) => write!(f, "{}", value),
		}
	}
}


impl fmt::Display for UnaryOp {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let op = match self {
			Self::Not => "!",
			Self::Minus => "-",
			Self::BitNot => "~",
			Self::Len => "#",
			Self::Ipush => "<<<",
		};

		write!(f, "{}", op)
	}
}


impl fmt::Display for BinaryOp {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let op = match self {
			Self::And => "&&",
			Self::Or => "||",
			Self::Append => "<<",
			Self::Prepend => ">>",
			Self::BitAnd => "&",
			Self::BitXor => "^",
			Self::BitOr => "|",
			Self::ShiftLeft => "<<<",
			Self::ShiftRight => ">>>",
			Self::Equals => "==",
			Self::NotEquals => "!=",
			Self::Greater => ">",
			Self::GreaterEquals => ">=",
			Self::Lower => "<",
			Self::LowerEquals => "<=",
			Self::Plus => "+",
			Self::Minus => "-",
			Self::Times => "*",
			Self::Div => "/",
			Self::Mod => "%",
			Self::Pow => "**",
		};

		write!(f, "{}", op)
	}
}


impl<'a> Display<'a> for Expr {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		match self {
			Self::Literal { literal, .. } => write!(f, "{}", literal),

			Self::Identifier { identifier, .. } => identifier.fmt(f, context.interner),

			Self::List { items, .. } => {
				write!(f, "[")?;

				for (index, item) in items.iter().enumerate() {
					if index > 0 {
						write!(f, ", ")?;
					}

					item.fmt(f, context)?;
				}

				write!(f, "]")
			}

			Self::Block { body, .. } => {
				writeln!(f, "{{")?;
				body.fmt(f, context.indent())?;
				write!(f, "{}}}", context.indentation)
			}

			Self::Function { params, body, .. } => {
				write!(f, "fn (")?;

				for (index, param) in params.iter().enumerate() {
					if index > 0 {
						write!(f, ", ")?;
					}

					param.fmt(f, context.interner)?;
				}

				writeln!(f, ") {{")?;
				body.fmt(f, context.indent())?;
				write!(f, "{}}}", context.indentation)
			}

			Self::If { condition, then, otherwise, .. } => {
				write!(f, "if ")?;
				condition.fmt(f, context)?;
				writeln!(f, " {{")?;
				then.fmt(f, context.indent())?;
				write!(f, "{}}}", context.indentation)?;

				if let Some(otherwise) = otherwise {
					writeln!(f, " else {{")?;
					otherwise.fmt(f, context.indent())?;
					write!(f, "{}}}", context.indentation)?;
				}

				Ok(())
			}

			Self::Loop { body, .. } => {
				writeln!(f, "loop {{")?;
				body.fmt(f, context.indent())?;
				write!(f, "{}}}", context.indentation)
			}

			Self::UnaryOp { op, operand, .. } => {
				write!(f, "{}", op)?;
				operand.fmt(f, context)
			}

			Self::BinaryOp { left, op, right, .. } => {
				write!(f, "(")?;
				left.fmt(f, context)?;
				write!(f, " {} ", op)?;
				right.fmt(f, context)?;
				write!(f, ")")
			}

			Self::Call { function, applications, .. } => {
				function.fmt(f, context)?;

				for application in applications.iter() {
					write!(f, "(")?;

					for (index, arg) in application.iter().enumerate() {
						if index > 0 {
							write!(f, ", ")?;
						}

						arg.fmt(f, context)?;
					}

					write!(f, ")")?;
				}

				Ok(())
			}

			Self::Index { object, index, .. } => {
				object.fmt(f, context)?;
				write!(f, "[")?;
				index.fmt(f, context)?;
				write!(f, "]")
			}
		}
	}
}


impl<'a> Display<'a> for Declaration {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		write!(f, "{}let ", context.indentation)?;
		self.identifier.fmt(f, context.interner)?;
		write!(f, " = ")?;
		self.value.fmt(f, context)?;
		writeln!(f, ";")
	}
}


impl<'a> Display<'a> for Statement {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		match self {
			Self::Assign { left, right, .. } => {
				write!(f, "{}", context.indentation)?;
				left.fmt(f, context)?;
				write!(f, " := ")?;
				right.fmt(f, context)?;
				writeln!(f, ";")
			}

			Self::Trap { name, args, .. } => {
				write!(f, "{}trap ", context.indentation)?;
				name.fmt(f, context.interner)?;

				for arg in args.iter() {
					write!(f, ", ")?;
					arg.fmt(f, context)?;
				}

				writeln!(f, ";")
			}

			Self::Expr(expr) => {
				write!(f, "{}", context.indentation)?;
				expr.fmt(f, context)?;
				writeln!(f, ";")
			}
		}
	}
}


impl<'a> Display<'a> for Terminator {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		match self {
			Self::Return { expr, .. } => {
				write!(f, "{}return ", context.indentation)?;
				expr.fmt(f, context)?;
				writeln!(f, ";")
			}

			Self::Break { expr, .. } => {
				write!(f, "{}break", context.indentation)?;

				if let Some(expr) = expr {
					write!(f, " ")?;
					expr.fmt(f, context)?;
				}

				writeln!(f, ";")
			}

			Self::Continue { .. } => writeln!(f, "{}continue;", context.indentation),
		}
	}
}


impl<'a> Display<'a> for Body {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut fmt::Formatter, context: Self::Context) -> fmt::Result {
		for declaration in self.declarations.iter() {
			declaration.fmt(f, context)?;
		}

		for statement in self.statements.iter() {
			statement.fmt(f, context)?;
		}

		if let Some(terminator) = self.terminator.as_ref() {
			terminator.fmt(f, context)?;
		}

		Ok(())
	}
}
