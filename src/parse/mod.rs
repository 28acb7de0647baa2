mod error;
mod parser;

pub use error::ParseError;
pub use parser::{parse, Parser};
