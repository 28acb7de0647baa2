mod error;
mod interpreter;

pub use error::ArithmeticError;
pub use interpreter::evaluate;
