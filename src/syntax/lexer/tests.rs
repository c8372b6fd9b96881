use super::*;

use assert_matches::assert_matches;


macro_rules! token {
	($kind:pat) => {
		Ok(Token { kind: $kind, .. })
	};
}

macro_rules! assert_symbol {
	($interner:ident, $symbol:ident, $expected:literal) => {
		assert_eq!($interner.resolve(*$symbol), Some($expected))
	};
}


fn lex(input: &str, interner: &mut symbol::Interner) -> Vec<Result<Token, Error>> {
	let source = Source {
		path: interner.get_or_intern("<test>"),
		contents: input.as_bytes().into(),
	};

	let cursor = Cursor::from(&source);
	let tokens: Vec<_> = Lexer::new(cursor, interner).collect();
	tokens
}


#[test]
fn test_declaration() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("let x = 1 + 2 * 3\n", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Let)),
			token!(TokenKind::Identifier(x)),
			token!(TokenKind::Operator(Operator::Assign)),
			token!(TokenKind::Literal(Literal::Int(1))),
			token!(TokenKind::Operator(Operator::Plus)),
			token!(TokenKind::Literal(Literal::Int(2))),
			token!(TokenKind::Operator(Operator::Times)),
			token!(TokenKind::Literal(Literal::Int(3))),
			// The newline after the literal ends the statement.
			token!(TokenKind::Semicolon),
		]
			=> assert_symbol!(interner, x, "x")
	);
}


#[test]
fn test_operators() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("-> %= >= <= && || == != ** <<< >>> << >> := = ~ # ^", &mut interner);

	let expected = [
		Operator::Arrow,
		Operator::ModAssign,
		Operator::GreaterEquals,
		Operator::LowerEquals,
		Operator::And,
		Operator::Or,
		Operator::Equals,
		Operator::NotEquals,
		Operator::Pow,
		Operator::ShiftLeft,
		Operator::ShiftRight,
		Operator::Append,
		Operator::Prepend,
		Operator::Update,
		Operator::Assign,
		Operator::BitNot,
		Operator::Len,
		Operator::BitXor,
	];

	assert_eq!(tokens.len(), expected.len());

	for (token, op) in tokens.iter().zip(expected) {
		assert_matches!(
			token,
			Ok(Token { kind: TokenKind::Operator(actual), .. }) if *actual == op
		);
	}
}


#[test]
fn test_floats_and_ints() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("42 3.25", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Literal(Literal::Int(42))),
			token!(TokenKind::Literal(Literal::Float(float))),
		]
			=> assert_eq!(*float, 3.25)
	);
}


#[test]
fn test_comment_runs_to_end_of_line() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("x // comment ; not tokens\ny", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Identifier(_)),
			// The newline after the comment still ends the statement.
			token!(TokenKind::Semicolon),
			token!(TokenKind::Identifier(_)),
		]
	);
}


#[test]
fn test_semicolon_insertion() {
	let mut interner = symbol::Interner::new();

	// After a closing bracket.
	let tokens = lex("f()\n", &mut interner);
	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::OpenParens),
			token!(TokenKind::CloseParens),
			token!(TokenKind::Semicolon),
		]
	);

	// Not after an operator: the line is not a statement boundary.
	let tokens = lex("1 +\n2\n", &mut interner);
	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Literal(Literal::Int(1))),
			token!(TokenKind::Operator(Operator::Plus)),
			token!(TokenKind::Literal(Literal::Int(2))),
			token!(TokenKind::Semicolon),
		]
	);

	// Blank lines collapse into one semicolon.
	let tokens = lex("x\n\n\ny\n", &mut interner);
	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Semicolon),
		]
	);
}


#[test]
fn test_line_continuation() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("1 \\\n+ 2\n", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Literal(Literal::Int(1))),
			token!(TokenKind::Operator(Operator::Plus)),
			token!(TokenKind::Literal(Literal::Int(2))),
			token!(TokenKind::Semicolon),
		]
	);
}


#[test]
fn test_brace_gets_semicolon_injected() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("{ x }", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::OpenBrace),
			token!(TokenKind::Identifier(_)),
			// Injected ahead of the brace.
			token!(TokenKind::Semicolon),
			token!(TokenKind::CloseBrace),
		]
	);

	// No injection when a semicolon is already there.
	let tokens = lex("{ x; }", &mut interner);
	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::OpenBrace),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::CloseBrace),
		]
	);
}


#[test]
fn test_string_interpolation_modes() {
	let mut interner = symbol::Interner::new();
	let tokens = lex(r#""ab{x + 1}cd""#, &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::StringStart),
			token!(TokenKind::StringChars(ab)),
			token!(TokenKind::StringExprStart),
			token!(TokenKind::Identifier(x)),
			token!(TokenKind::Operator(Operator::Plus)),
			token!(TokenKind::Literal(Literal::Int(1))),
			token!(TokenKind::StringExprEnd),
			token!(TokenKind::StringChars(cd)),
			token!(TokenKind::StringEnd),
		]
			=> {
				assert_eq!(ab.as_ref(), b"ab");
				assert_eq!(cd.as_ref(), b"cd");
				assert_symbol!(interner, x, "x");
			}
	);
}


#[test]
fn test_string_escapes() {
	let mut interner = symbol::Interner::new();
	let tokens = lex(r#""a\n\{b""#, &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::StringStart),
			token!(TokenKind::StringChars(chars)),
			token!(TokenKind::StringEnd),
		]
			=> assert_eq!(chars.as_ref(), b"a\n{b")
	);

	let tokens = lex(r#""\q""#, &mut interner);
	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::StringStart),
			Err(Error { error: ErrorKind::InvalidEscapeSequence(_), .. }),
			token!(TokenKind::StringEnd),
		]
	);
}


#[test]
fn test_literal_strings() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("'abc' `d\"e`", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::LiteralString(first)),
			token!(TokenKind::LiteralString(second)),
		]
			=> {
				assert_eq!(first.as_ref(), b"abc");
				assert_eq!(second.as_ref(), b"d\"e");
			}
	);
}


#[test]
fn test_unexpected_character() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("x @ y", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Identifier(_)),
			Err(Error { error: ErrorKind::Unexpected(b'@'), .. }),
			token!(TokenKind::Identifier(_)),
		]
	);
}


#[test]
fn test_unterminated_string() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("\"abc", &mut interner);

	assert_matches!(
		tokens.last(),
		Some(Err(Error { error: ErrorKind::UnexpectedEof, .. }))
	);
}
