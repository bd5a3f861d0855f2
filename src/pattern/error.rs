use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("parameter segment '{segment}' in '{pattern}' is missing a name")]
    ParameterMissingName { pattern: String, segment: String },
    #[error("optional segment '{segment}' in '{pattern}' is missing a literal")]
    OptionalMissingLiteral { pattern: String, segment: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
