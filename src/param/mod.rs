mod error;
mod kind;
mod numeric;
mod traits;
mod value;

pub use error::{SerializeError, SerializeResult};
pub use kind::{
    IntegerOptions, ParamKind, constant, integer, integer_with, multiple, number, optional,
    optional_const, optional_const_with, optional_string, string,
};
pub use traits::{Param, ParamIdentity, ParamMatch, params_equal};
pub(crate) use traits::checked_match;
pub use value::{ParamValue, Params};
