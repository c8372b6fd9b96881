pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
mod source;
#[cfg(test)]
mod tests;

use crate::symbol;
pub use error::Error;
use lexer::Lexer;
use parser::Parser;
pub use source::{Source, SourcePos};


/// Perform syntax analysis on the given source, producing the top-level
/// body. The first lexical or syntactic error aborts the analysis.
pub fn analyze(source: &Source, interner: &mut symbol::Interner) -> Result<ast::Body, Error> {
	let cursor = lexer::Cursor::from(source);
	let lexer = Lexer::new(cursor, interner);

	let tokens = lexer
		.collect::<Result<Vec<_>, _>>()
		.map_err(Error::Lexer)?;

	let start = SourcePos { line: 1, column: 0, path: source.path };
	let parser = Parser::new(tokens.into_iter(), start);

	parser
		.parse()
		.map_err(Error::Parser)
}
