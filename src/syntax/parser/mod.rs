mod error;

use super::ast;
use super::lexer::{Keyword, Operator, Token, TokenKind};
use super::SourcePos;
pub use error::Error;


/// The parser for SAL syntax: recursive descent with one token of
/// lookahead. Errors are fatal; there is no recovery.
#[derive(Debug)]
pub struct Parser<I>
where
	I: Iterator<Item = Token>,
{
	// We don't use a std::iter::Peekable instead of a (Iterator,
	// Option<Token>) pair because we must be able to move from `token`,
	// but Peekable only returns a reference.
	cursor: I,
	token: Option<Token>,
	/// The position of the current token, kept for empty productions.
	pos: SourcePos,
}


impl<I> Parser<I>
where
	I: Iterator<Item = Token>,
{
	/// Create a new parser for the given input. The position is the
	/// start of the source, used when the input is empty.
	pub fn new(mut cursor: I, pos: SourcePos) -> Self {
		let token = cursor.next();
		let pos = token
			.as_ref()
			.map(|token| token.pos)
			.unwrap_or(pos);

		Self { cursor, token, pos }
	}


	/// Parse the input, producing the top-level body.
	pub fn parse(mut self) -> Result<ast::Body, Error> {
		let body = self.parse_body()?;

		match self.token.take() {
			None => Ok(body),
			Some(token) => Err(Error::unexpected(token, "end of file")),
		}
	}


	/// Step the cursor, placing the next token on self.token.
	fn step(&mut self) {
		self.token = self.cursor.next();

		if let Some(token) = &self.token {
			self.pos = token.pos;
		}
	}


	/// Try and eat a token.
	fn eat<F, T>(&mut self, eat: F) -> Result<T, Error>
	where
		F: FnOnce(Token) -> Result<T, (Error, Token)>,
	{
		if let Some(token) = self.token.take() {
			match eat(token) {
				Ok(value) => { // Token successfully consumed.
					self.step();
					Ok(value)
				}

				Err((error, token)) => { // Fail, rollback the token.
					self.token = Some(token);
					Err(error)
				}
			}
		} else {
			Err(Error::unexpected_eof())
		}
	}


	/// Consume the expected token, or produce an error.
	fn expect(&mut self, expected: TokenKind) -> Result<SourcePos, Error> {
		self.eat(
			|token| if token.kind == expected {
				Ok(token.pos)
			} else {
				let error = Error::unexpected_kind(token.clone(), &expected);
				Err((error, token))
			}
		)
	}


	/// Parse an identifier.
	fn parse_identifier(&mut self) -> Result<ast::Symbol, Error> {
		self.eat(
			|token| match token {
				Token { kind: TokenKind::Identifier(symbol), .. } => Ok(symbol),
				token => Err((Error::unexpected(token.clone(), "identifier"), token)),
			}
		)
	}


	/// Check the kind of the current token without consuming it.
	fn peek_is(&self, kind: &TokenKind) -> bool {
		matches!(&self.token, Some(token) if &token.kind == kind)
	}


	fn peek_keyword(&self, keyword: Keyword) -> bool {
		self.peek_is(&TokenKind::Keyword(keyword))
	}


	fn peek_operator(&self, operator: Operator) -> bool {
		self.peek_is(&TokenKind::Operator(operator))
	}


	/// Parse a body: declarations, then statements, then an optional
	/// terminator. Stops at a closing brace or EOF.
	fn parse_body(&mut self) -> Result<ast::Body, Error> {
		let pos = self.token
			.as_ref()
			.map(|token| token.pos)
			.unwrap_or(self.pos);

		let mut declarations = Vec::new();
		let mut statements = Vec::new();
		let mut terminator = None;

		// Declarations come first.
		while self.peek_keyword(Keyword::Let) {
			declarations.push(self.parse_declaration()?);
		}

		loop {
			match &self.token {
				None => break,

				Some(Token { kind: TokenKind::CloseBrace, .. }) => break,

				// Stray semicolons are empty statements.
				Some(Token { kind: TokenKind::Semicolon, .. }) => self.step(),

				Some(Token { kind: TokenKind::Keyword(Keyword::Return), pos }) => {
					let pos = *pos;
					self.step();

					let expr = self.parse_expression()?;
					self.expect(TokenKind::Semicolon)?;

					terminator = Some(ast::Terminator::Return { expr: Box::new(expr), pos });
					break;
				}

				Some(Token { kind: TokenKind::Keyword(Keyword::Break), pos }) => {
					let pos = *pos;
					self.step();

					let expr =
						if self.peek_is(&TokenKind::Semicolon) {
							None
						} else {
							Some(self.parse_expression()?)
						};
					self.expect(TokenKind::Semicolon)?;

					terminator = Some(ast::Terminator::Break { expr, pos });
					break;
				}

				Some(Token { kind: TokenKind::Keyword(Keyword::Continue), pos }) => {
					let pos = *pos;
					self.step();
					self.expect(TokenKind::Semicolon)?;

					terminator = Some(ast::Terminator::Continue { pos });
					break;
				}

				Some(_) => statements.push(self.parse_statement()?),
			}
		}

		Ok(
			ast::Body {
				declarations: declarations.into(),
				statements: statements.into(),
				terminator: terminator.map(Box::new),
				pos,
			}
		)
	}


	/// Parse a declaration: `let name = expr;`.
	fn parse_declaration(&mut self) -> Result<ast::Declaration, Error> {
		let pos = self.expect(TokenKind::Keyword(Keyword::Let))?;
		let identifier = self.parse_identifier()?;
		self.expect(TokenKind::Operator(Operator::Assign))?;
		let value = self.parse_expression()?;
		self.expect(TokenKind::Semicolon)?;

		Ok(ast::Declaration { identifier, value, pos })
	}


	/// Parse a single statement, consuming the trailing semicolon.
	fn parse_statement(&mut self) -> Result<ast::Statement, Error> {
		// Trap invocation.
		if self.peek_keyword(Keyword::Trap) {
			let pos = self.expect(TokenKind::Keyword(Keyword::Trap))?;
			let name = self.parse_identifier()?;

			let mut args = Vec::new();
			while self.peek_is(&TokenKind::Comma) {
				self.step();
				args.push(self.parse_expression()?);
			}

			self.expect(TokenKind::Semicolon)?;

			return Ok(ast::Statement::Trap { name, args: args.into(), pos });
		}

		let expr = self.parse_expression()?;

		// An assignment, or a bare expression statement.
		let statement =
			if self.peek_operator(Operator::Update) {
				let pos = self.expect(TokenKind::Operator(Operator::Update))?;
				let right = self.parse_expression()?;

				ast::Statement::Assign { left: expr, right, pos }
			} else {
				ast::Statement::Expr(expr)
			};

		self.expect(TokenKind::Semicolon)?;

		Ok(statement)
	}


	/// Parse a single expression. If and loop live at this level: they
	/// cannot appear as operands without parenthesis.
	fn parse_expression(&mut self) -> Result<ast::Expr, Error> {
		match &self.token {
			Some(Token { kind: TokenKind::Keyword(Keyword::If), .. }) => self.parse_if(),

			Some(Token { kind: TokenKind::Keyword(Keyword::Loop), pos }) => {
				let pos = *pos;
				self.step();
				let body = self.parse_block()?;

				Ok(ast::Expr::Loop { body, pos })
			}

			_ => self.parse_or(),
		}
	}


	/// Parse an if expression.
	fn parse_if(&mut self) -> Result<ast::Expr, Error> {
		let pos = self.expect(TokenKind::Keyword(Keyword::If))?;
		let condition = self.parse_expression()?;
		let then = self.parse_block()?;

		let otherwise =
			if self.peek_keyword(Keyword::Else) {
				self.step();
				Some(self.parse_block()?)
			} else {
				None
			};

		Ok(
			ast::Expr::If {
				condition: condition.into(),
				then,
				otherwise,
				pos,
			}
		)
	}


	/// Parse a braced block.
	fn parse_block(&mut self) -> Result<ast::Body, Error> {
		self.expect(TokenKind::OpenBrace)?;
		let body = self.parse_body()?;
		self.expect(TokenKind::CloseBrace)?;

		Ok(body)
	}


	/// Parse a left-associative chain of binary operators.
	fn parse_binary<P, O>(&mut self, mut parse: P, op: O) -> Result<ast::Expr, Error>
	where
		P: FnMut(&mut Self) -> Result<ast::Expr, Error>,
		O: Fn(&Operator) -> Option<ast::BinaryOp>,
	{
		let mut expr = parse(self)?;

		loop {
			let (bin_op, pos) = match &self.token {
				Some(Token { kind: TokenKind::Operator(operator), pos }) => {
					match op(operator) {
						Some(bin_op) => (bin_op, *pos),
						None => break,
					}
				}

				_ => break,
			};

			self.step();
			let right = parse(self)?;

			expr = ast::Expr::BinaryOp {
				left: expr.into(),
				op: bin_op,
				right: right.into(),
				pos,
			};
		}

		Ok(expr)
	}


	/// Logical or and and, the loosest binding operators.
	fn parse_or(&mut self) -> Result<ast::Expr, Error> {
		self.parse_binary(
			Self::parse_and,
			|op| match op {
				Operator::Or => Some(ast::BinaryOp::Or),
				_ => None,
			}
		)
	}


	fn parse_and(&mut self) -> Result<ast::Expr, Error> {
		self.parse_binary(
			Self::parse_not,
			|op| match op {
				Operator::And => Some(ast::BinaryOp::And),
				_ => None,
			}
		)
	}


	/// Logical not, binding looser than the push operators.
	fn parse_not(&mut self) -> Result<ast::Expr, Error> {
		if self.peek_operator(Operator::Not) {
			let pos = self.expect(TokenKind::Operator(Operator::Not))?;
			let operand = self.parse_not()?;

			Ok(
				ast::Expr::UnaryOp {
					op: ast::UnaryOp::Not,
					operand: operand.into(),
					pos,
				}
			)
		} else {
			self.parse_push()
		}
	}


	/// The list push operators: append and prepend.
	fn parse_push(&mut self) -> Result<ast::Expr, Error> {
		self.parse_binary(
			Self::parse_bitwise,
			|op| match op {
				Operator::Append => Some(ast::BinaryOp::Append),
				Operator::Prepend => Some(ast::BinaryOp::Prepend),
				_ => None,
			}
		)
	}


	fn parse_bitwise(&mut self) -> Result<ast::Expr, Error> {
		self.parse_binary(
			Self::parse_comparison,
			|op| match op {
				Operator::BitAnd => Some(ast::BinaryOp::BitAnd),
				Operator::BitXor => Some(ast::BinaryOp::BitXor),
				Operator::BitOr => Some(ast::BinaryOp::BitOr),
				Operator::ShiftLeft => Some(ast::BinaryOp::ShiftLeft),
				Operator::ShiftRight => Some(ast::BinaryOp::ShiftRight),
				_ => None,
			}
		)
	}


	fn parse_comparison(&mut self) -> Result<ast::Expr, Error> {
		self.parse_binary(
			Self::parse_additive,
			|op| match op {
				Operator::Equals => Some(ast::BinaryOp::Equals),
				Operator::NotEquals => Some(ast::BinaryOp::NotEquals),
				Operator::Greater => Some(ast::BinaryOp::Greater),
				Operator::GreaterEquals => Some(ast::BinaryOp::GreaterEquals),
				Operator::Lower => Some(ast::BinaryOp::Lower),
				Operator::LowerEquals => Some(ast::BinaryOp::LowerEquals),
				_ => None,
			}
		)
	}


	fn parse_additive(&mut self) -> Result<ast::Expr, Error> {
		self.parse_binary(
			Self::parse_multiplicative,
			|op| match op {
				Operator::Plus => Some(ast::BinaryOp::Plus),
				Operator::Minus => Some(ast::BinaryOp::Minus),
				_ => None,
			}
		)
	}


	fn parse_multiplicative(&mut self) -> Result<ast::Expr, Error> {
		self.parse_binary(
			Self::parse_exponent,
			|op| match op {
				Operator::Times => Some(ast::BinaryOp::Times),
				Operator::Div => Some(ast::BinaryOp::Div),
				Operator::Mod => Some(ast::BinaryOp::Mod),
				_ => None,
			}
		)
	}


	/// Exponentiation is right-associative.
	fn parse_exponent(&mut self) -> Result<ast::Expr, Error> {
		let left = self.parse_unary()?;

		if self.peek_operator(Operator::Pow) {
			let pos = self.expect(TokenKind::Operator(Operator::Pow))?;
			let right = self.parse_exponent()?;

			Ok(
				ast::Expr::BinaryOp {
					left: left.into(),
					op: ast::BinaryOp::Pow,
					right: right.into(),
					pos,
				}
			)
		} else {
			Ok(left)
		}
	}


	/// The tightest-binding prefix operators.
	fn parse_unary(&mut self) -> Result<ast::Expr, Error> {
		let op = match &self.token {
			Some(Token { kind: TokenKind::Operator(Operator::BitNot), .. }) => {
				Some(ast::UnaryOp::BitNot)
			}
			Some(Token { kind: TokenKind::Operator(Operator::Minus), .. }) => {
				Some(ast::UnaryOp::Minus)
			}
			// Unary plus is the identity.
			Some(Token { kind: TokenKind::Operator(Operator::Plus), .. }) => None,
			Some(Token { kind: TokenKind::Operator(Operator::Len), .. }) => {
				Some(ast::UnaryOp::Len)
			}
			Some(Token { kind: TokenKind::Operator(Operator::ShiftLeft), .. }) => {
				Some(ast::UnaryOp::Ipush)
			}
			_ => return self.parse_postfix(),
		};

		let token = self.token
			.take()
			.expect("peeked token vanished");
		let pos = token.pos;
		self.step();

		let operand = self.parse_unary()?;

		match op {
			Some(op) => Ok(
				ast::Expr::UnaryOp { op, operand: operand.into(), pos }
			),

			// Unary plus: just the operand.
			None => Ok(operand),
		}
	}


	/// Call and index, the postfix operators.
	fn parse_postfix(&mut self) -> Result<ast::Expr, Error> {
		let mut expr = self.parse_primary()?;
		let mut applications: Vec<Box<[ast::Expr]>> = Vec::new();

		loop {
			match &self.token {
				Some(Token { kind: TokenKind::OpenParens, .. }) => {
					self.step();

					let mut args = Vec::new();

					if !self.peek_is(&TokenKind::CloseParens) {
						loop {
							args.push(self.parse_expression()?);

							if self.peek_is(&TokenKind::Comma) {
								self.step();

								// Allow a trailing comma.
								if self.peek_is(&TokenKind::CloseParens) {
									break;
								}
							} else {
								break;
							}
						}
					}

					self.expect(TokenKind::CloseParens)?;
					applications.push(args.into());
				}

				Some(Token { kind: TokenKind::OpenBracket, pos }) => {
					let pos = *pos;
					self.step();

					let index = self.parse_expression()?;
					self.expect(TokenKind::CloseBracket)?;

					expr = fold_calls(expr, &mut applications);
					expr = ast::Expr::Index {
						object: expr.into(),
						index: index.into(),
						pos,
					};
				}

				_ => break,
			}
		}

		Ok(fold_calls(expr, &mut applications))
	}


	/// Parse a primary expression.
	fn parse_primary(&mut self) -> Result<ast::Expr, Error> {
		match self.token.take() {
			// Identifier.
			Some(Token { kind: TokenKind::Identifier(identifier), pos }) => {
				self.step();
				Ok(ast::Expr::Identifier { identifier, pos })
			}

			// Numeric literal.
			Some(Token { kind: TokenKind::Literal(literal), pos }) => {
				self.step();
				Ok(ast::Expr::Literal { literal: literal.into(), pos })
			}

			// List literal.
			Some(Token { kind: TokenKind::OpenBracket, pos }) => {
				self.step();

				let mut items = Vec::new();

				if !self.peek_is(&TokenKind::CloseBracket) {
					loop {
						items.push(self.parse_expression()?);

						if self.peek_is(&TokenKind::Comma) {
							self.step();

							if self.peek_is(&TokenKind::CloseBracket) {
								break;
							}
						} else {
							break;
						}
					}
				}

				self.expect(TokenKind::CloseBracket)?;

				Ok(ast::Expr::List { items: items.into(), pos })
			}

			// Block expression.
			Some(Token { kind: TokenKind::OpenBrace, pos }) => {
				self.token = Some(Token { kind: TokenKind::OpenBrace, pos });
				let body = self.parse_block()?;

				Ok(ast::Expr::Block { body: Box::new(body), pos })
			}

			// Function literal.
			Some(Token { kind: TokenKind::Keyword(Keyword::Fn), pos }) => {
				self.step();
				self.expect(TokenKind::OpenParens)?;

				let mut params = Vec::new();

				if !self.peek_is(&TokenKind::CloseParens) {
					loop {
						params.push(self.parse_identifier()?);

						if self.peek_is(&TokenKind::Comma) {
							self.step();

							if self.peek_is(&TokenKind::CloseParens) {
								break;
							}
						} else {
							break;
						}
					}
				}

				self.expect(TokenKind::CloseParens)?;
				let body = self.parse_block()?;

				Ok(ast::Expr::Function { params: params.into(), body, pos })
			}

			// Parenthesis.
			Some(Token { kind: TokenKind::OpenParens, .. }) => {
				self.step();

				let expr = self.parse_expression()?;
				self.expect(TokenKind::CloseParens)?;

				Ok(expr)
			}

			// Some other unexpected token.
			Some(token) => {
				// We need to restore the token because it may be some delimiter.
				self.token = Some(token.clone());
				Err(Error::unexpected(token, "expression"))
			}

			None => Err(Error::unexpected_eof()),
		}
	}
}


/// Wrap pending applications around a function expression.
fn fold_calls(expr: ast::Expr, applications: &mut Vec<Box<[ast::Expr]>>) -> ast::Expr {
	if applications.is_empty() {
		return expr;
	}

	let pos = expr.pos();
	let applications = std::mem::take(applications);

	ast::Expr::Call {
		function: expr.into(),
		applications: applications.into(),
		pos,
	}
}
