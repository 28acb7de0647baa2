use crate::lex::LexError;
use crate::span::Span;
use crate::token::Token;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Unexpected token `{0}` at position {1}, expected an operand")]
    UnexpectedToken(Token, Span),

    #[error("Unable to parse to number at position {0}")]
    InvalidNumber(Span),

    #[error("Group is not closed, expected `)` but found `{0}` at position {1}")]
    UnmatchedParen(Token, Span),

    #[error("Parse have leftover tokens start with `{0}` at {1}")]
    TrailingInput(Token, Span),
}

impl ParseError {
    pub fn span(&self) -> Span {
        use ParseError::*;
        match self {
            Lex(e) => e.span(),
            UnexpectedToken(_, s) => *s,
            InvalidNumber(s) => *s,
            UnmatchedParen(_, s) => *s,
            TrailingInput(_, s) => *s,
        }
    }

    pub fn get_source_start(&self, input: &str) -> (usize, usize) {
        self.span().to_start_row_col(input)
    }
}
