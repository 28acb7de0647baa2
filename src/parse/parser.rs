use log::{debug, trace};

use super::error::ParseError;
use crate::ast::{Expression, Operator};
use crate::lex::{LexItem, Lexer};
use crate::token::{Token, PREFIX_PRECEDENCE};

/// Parses a whole input as one expression. Anything left after the
/// expression other than the end of input is rejected.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(Lexer::new(input))?;
    let expr = parser.parse_expression(0)?;
    parser.expect_end()?;
    debug!("parsed {}", expr);
    Ok(expr)
}

/// Precedence climbing parser with one token of lookahead. Tokens are
/// pulled from the lexer as the parser advances.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    curr: LexItem,
    peek: LexItem,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let curr = lexer.next_token()?;
        let peek = lexer.next_token()?;
        debug!("{} - {:?}", curr.span, curr.token);
        debug!("{} - {:?}", peek.span, peek.token);
        Ok(Parser { lexer, curr, peek })
    }

    pub fn parse_expression(&mut self, min_precedence: u8) -> Result<Expression, ParseError> {
        let mut lhs = self.parse_prefix()?;

        while min_precedence < self.peek.token.precedence() {
            // `(` has a binding power but never continues an expression
            let Ok(op) = Operator::try_from(self.peek.token) else {
                break;
            };
            self.advance()?;
            lhs = self.parse_infix(lhs, op)?;
        }

        Ok(lhs)
    }

    /// Succeeds only when the token after the last parsed one ends the input.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek.token {
            Token::EndOfInput => Ok(()),
            token => Err(ParseError::TrailingInput(token, self.peek.span)),
        }
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        let next = self.lexer.next_token()?;
        debug!("{} - {:?}", next.span, next.token);
        self.curr = std::mem::replace(&mut self.peek, next);
        Ok(())
    }

    fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
        trace!("prefix `{}` at {}", self.curr.token, self.curr.span);
        match self.curr.token {
            Token::Number => self.parse_number(),
            Token::Sub => self.parse_negation(),
            Token::LeftParen => self.parse_group(),
            token => Err(ParseError::UnexpectedToken(token, self.curr.span)),
        }
    }

    fn parse_number(&self) -> Result<Expression, ParseError> {
        let source = self.curr.span.str_from_source(self.lexer.input());
        match source.parse::<i64>() {
            Err(_) => Err(ParseError::InvalidNumber(self.curr.span)),
            Ok(num) => Ok(Expression::Number(num)),
        }
    }

    fn parse_negation(&mut self) -> Result<Expression, ParseError> {
        self.advance()?; // consume '-'
        let operand = self.parse_expression(PREFIX_PRECEDENCE)?;
        Ok(Expression::prefix(operand))
    }

    fn parse_group(&mut self) -> Result<Expression, ParseError> {
        self.advance()?; // consume '('
        let expr = self.parse_expression(0)?;

        self.advance()?;
        if self.curr.token != Token::RightParen {
            return Err(ParseError::UnmatchedParen(self.curr.token, self.curr.span));
        }

        Ok(expr)
    }

    fn parse_infix(&mut self, lhs: Expression, op: Operator) -> Result<Expression, ParseError> {
        trace!("infix `{}` at {}", op, self.curr.span);
        let precedence = self.curr.token.precedence();
        self.advance()?;
        let rhs = self.parse_expression(precedence)?;
        Ok(Expression::infix(lhs, op, rhs))
    }
}
