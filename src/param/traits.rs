use std::any::{Any, TypeId};
use std::fmt;

use super::{ParamValue, SerializeResult};

/// Identifies which kind of matcher produced a Param.
///
/// Two params can only be equal when their identities are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamIdentity {
    Constant,
    String,
    Number,
    Integer,
    OptionalConst,
    OptionalString,
    Optional,
    Multiple,
    Custom(TypeId),
}

impl ParamIdentity {
    /// Identity for a user-defined param type.
    pub fn custom<T: 'static>() -> Self {
        ParamIdentity::Custom(TypeId::of::<T>())
    }
}

/// Successful match of a single Param.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamMatch {
    pub value: ParamValue,
    /// Number of leading segments consumed.
    pub consumed: usize,
}

impl ParamMatch {
    pub fn new(value: ParamValue, consumed: usize) -> Self {
        Self { value, consumed }
    }
}

/// An atomic pattern unit.
///
/// The matching engine only talks to params through this trait, so user
/// types can sit next to the built-in [`ParamKind`](super::ParamKind)
/// variants inside a Chemin.
pub trait Param: fmt::Debug + Send + Sync + Any {
    /// Key used in the params map.
    fn name(&self) -> &str;

    fn identity(&self) -> ParamIdentity;

    /// Tries to consume a prefix of `segments`. Must be pure and must not
    /// report more consumed segments than it was given.
    fn match_segments(&self, segments: &[&str]) -> Option<ParamMatch>;

    /// Renders `value` back to at most one path fragment. `Ok(None)` omits it.
    fn serialize(&self, value: Option<&ParamValue>) -> SerializeResult<Option<String>>;

    fn stringify(&self) -> String;

    /// `false` for params that match but contribute no key to the result.
    fn produces_value(&self) -> bool {
        true
    }

    /// Kind-specific equality. Only called when identities match.
    fn equals(&self, other: &dyn Param) -> bool;

    fn as_any(&self) -> &dyn Any;
}

/// Identity check followed by the param's own equality hook.
pub fn params_equal(left: &dyn Param, right: &dyn Param) -> bool {
    left.identity() == right.identity() && left.equals(right)
}

/// Runs `param` and discards results that claim more segments than exist.
pub(crate) fn checked_match(param: &dyn Param, segments: &[&str]) -> Option<ParamMatch> {
    let found = param.match_segments(segments)?;
    if found.consumed > segments.len() {
        tracing::debug!(
            param = param.name(),
            consumed = found.consumed as u64,
            available = segments.len() as u64,
            "param consumed more segments than available; treating as no match"
        );
        return None;
    }
    Some(found)
}
