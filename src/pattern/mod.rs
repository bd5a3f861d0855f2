mod error;
mod parser;

pub use error::{PatternError, PatternResult};
pub use parser::parse_parts;
