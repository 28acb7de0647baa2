use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Token {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
    #[display("/")]
    Div,

    #[display("(")]
    LeftParen,
    #[display(")")]
    RightParen,

    #[display("number")]
    Number,

    #[display("end of input")]
    EndOfInput,
}

impl Token {
    /// Binding power used by the expression parser, higher binds tighter.
    /// Tokens that can never continue an expression get 0.
    pub fn precedence(self) -> u8 {
        match self {
            Token::Add | Token::Sub => 1,
            Token::Mul | Token::Div => 2,
            Token::LeftParen => 4,
            Token::RightParen | Token::Number | Token::EndOfInput => 0,
        }
    }
}

/// Binding power of unary minus: above every binary operator, below grouping.
pub const PREFIX_PRECEDENCE: u8 = 3;
