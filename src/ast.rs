use derive_more::Display;

use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operator {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
    #[display("/")]
    Div,
}

impl TryFrom<Token> for Operator {
    type Error = Token;

    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::Add => Ok(Operator::Add),
            Token::Sub => Ok(Operator::Sub),
            Token::Mul => Ok(Operator::Mul),
            Token::Div => Ok(Operator::Div),
            other => Err(other),
        }
    }
}

/// Every node owns its children, displayed fully parenthesized.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Expression {
    #[display("{_0}")]
    Number(i64),

    // unary negation
    #[display("(-{_0})")]
    Prefix(Box<Expression>),

    #[display("({_0} {_1} {_2})")]
    Infix(Box<Expression>, Operator, Box<Expression>),
}

impl Expression {
    pub fn prefix(operand: Expression) -> Self {
        Expression::Prefix(Box::new(operand))
    }

    pub fn infix(lhs: Expression, op: Operator, rhs: Expression) -> Self {
        Expression::Infix(Box::new(lhs), op, Box::new(rhs))
    }
}
