pub mod ast;
pub mod interpret;
pub mod lex;
pub mod parse;
pub mod span;
pub mod token;

use log::debug;
use thiserror::Error;

pub use ast::{Expression, Operator};
pub use interpret::{evaluate, ArithmeticError};
pub use lex::{lex, LexError, LexItem, Lexer};
pub use parse::{parse, ParseError, Parser};
pub use span::Span;
pub use token::Token;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(LexError),

    #[error("Parse error: {0}")]
    Parse(ParseError),

    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(e) => Error::Lex(e),
            e => Error::Parse(e),
        }
    }
}

impl Error {
    /// Row and column of the offending input, when the error points at one.
    pub fn get_source_start(&self, input: &str) -> Option<(usize, usize)> {
        match self {
            Error::Lex(e) => Some(e.span().to_start_row_col(input)),
            Error::Parse(e) => Some(e.get_source_start(input)),
            Error::Arithmetic(_) => None,
        }
    }
}

/// Tokenizes, parses and evaluates `input` as a single expression.
pub fn run(input: &str) -> Result<i64, Error> {
    let expr = parse(input)?;
    let value = evaluate(&expr)?;
    debug!("{} = {}", expr, value);
    Ok(value)
}
