use crate::param::SerializeError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CheminError {
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type CheminResult<T> = Result<T, CheminError>;
