use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SerializeError {
    #[error("param '{name}' expects a finite integer when serializing, got {got}")]
    NotAnInteger { name: String, got: String },
    #[error("param '{name}' requires a value when serializing")]
    MissingValue { name: String },
    #[error("param '{name}' expects a {expected} value when serializing, got {got}")]
    UnexpectedValue {
        name: String,
        expected: &'static str,
        got: &'static str,
    },
}

pub type SerializeResult<T> = Result<T, SerializeError>;
