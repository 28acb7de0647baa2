use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Divide by 0")]
    DivisionByZero,

    #[error("Integer overflow while computing `{0}`")]
    Overflow(String),
}
