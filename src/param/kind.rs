use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;

use super::numeric::{format_number, parse_float_prefix, parse_int_prefix};
use super::traits::checked_match;
use super::{
    Param, ParamIdentity, ParamMatch, ParamValue, SerializeError, SerializeResult, params_equal,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerOptions {
    /// Only match when the parsed integer prints back to the raw segment,
    /// so `"3.0"`, `"42abc"` and `"007"` are rejected.
    pub strict: bool,
}

impl Default for IntegerOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// The built-in params.
#[derive(Debug, Clone)]
pub enum ParamKind {
    Constant { name: String },
    String { name: String },
    Number { name: String },
    Integer { name: String, strict: bool },
    OptionalConst { name: String, literal: String },
    OptionalString { name: String },
    Optional { sub: Arc<dyn Param> },
    Multiple { sub: Arc<dyn Param>, at_least_one: bool },
}

/// Matches exactly `name` and produces no value.
pub fn constant(name: impl Into<String>) -> ParamKind {
    ParamKind::Constant { name: name.into() }
}

/// Any non-empty segment, as-is.
pub fn string(name: impl Into<String>) -> ParamKind {
    ParamKind::String { name: name.into() }
}

/// A float read with the leading-prefix rules of [`ParamKind::Number`].
///
/// Note that `Infinity` and `10e2` are accepted too.
pub fn number(name: impl Into<String>) -> ParamKind {
    ParamKind::Number { name: name.into() }
}

/// A strict base-10 integer.
pub fn integer(name: impl Into<String>) -> ParamKind {
    integer_with(name, IntegerOptions::default())
}

pub fn integer_with(name: impl Into<String>, options: IntegerOptions) -> ParamKind {
    ParamKind::Integer {
        name: name.into(),
        strict: options.strict,
    }
}

/// `true` when the next segment is `name`, `false` (consuming nothing) otherwise.
pub fn optional_const(name: impl Into<String>) -> ParamKind {
    let name = name.into();
    ParamKind::OptionalConst {
        literal: name.clone(),
        name,
    }
}

pub fn optional_const_with(name: impl Into<String>, literal: impl Into<String>) -> ParamKind {
    ParamKind::OptionalConst {
        name: name.into(),
        literal: literal.into(),
    }
}

/// The next non-empty segment, or `Bool(false)` when there is none.
pub fn optional_string(name: impl Into<String>) -> ParamKind {
    ParamKind::OptionalString { name: name.into() }
}

/// Wraps `sub` so that a failed match succeeds with an absent value.
pub fn optional<P: Param>(sub: P) -> ParamKind {
    ParamKind::Optional { sub: Arc::new(sub) }
}

/// Applies `sub` greedily until it fails, collecting every value.
pub fn multiple<P: Param>(sub: P, at_least_one: bool) -> ParamKind {
    ParamKind::Multiple {
        sub: Arc::new(sub),
        at_least_one,
    }
}

impl ParamKind {
    fn match_multiple(
        sub: &dyn Param,
        at_least_one: bool,
        segments: &[&str],
    ) -> Option<ParamMatch> {
        let mut values = Vec::new();
        let mut consumed = 0usize;

        while let Some(found) = checked_match(sub, &segments[consumed..]) {
            if found.consumed == 0 {
                // a zero-width repetition would never advance
                tracing::debug!(param = sub.name(), "repetition stopped on zero-width match");
                break;
            }
            consumed += found.consumed;
            values.push(found.value);
        }

        if values.is_empty() && at_least_one {
            return None;
        }
        Some(ParamMatch::new(ParamValue::List(values), consumed))
    }

    fn unexpected(&self, expected: &'static str, got: &ParamValue) -> SerializeError {
        SerializeError::UnexpectedValue {
            name: self.name().to_string(),
            expected,
            got: got.kind_name(),
        }
    }

    fn missing(&self) -> SerializeError {
        SerializeError::MissingValue {
            name: self.name().to_string(),
        }
    }
}

impl Param for ParamKind {
    fn name(&self) -> &str {
        match self {
            ParamKind::Constant { name }
            | ParamKind::String { name }
            | ParamKind::Number { name }
            | ParamKind::Integer { name, .. }
            | ParamKind::OptionalConst { name, .. }
            | ParamKind::OptionalString { name } => name,
            ParamKind::Optional { sub } | ParamKind::Multiple { sub, .. } => sub.name(),
        }
    }

    fn identity(&self) -> ParamIdentity {
        match self {
            ParamKind::Constant { .. } => ParamIdentity::Constant,
            ParamKind::String { .. } => ParamIdentity::String,
            ParamKind::Number { .. } => ParamIdentity::Number,
            ParamKind::Integer { .. } => ParamIdentity::Integer,
            ParamKind::OptionalConst { .. } => ParamIdentity::OptionalConst,
            ParamKind::OptionalString { .. } => ParamIdentity::OptionalString,
            ParamKind::Optional { .. } => ParamIdentity::Optional,
            ParamKind::Multiple { .. } => ParamIdentity::Multiple,
        }
    }

    fn match_segments(&self, segments: &[&str]) -> Option<ParamMatch> {
        let first = segments.first().copied();

        match self {
            ParamKind::Constant { name } => {
                (first? == name.as_str()).then(|| ParamMatch::new(ParamValue::Null, 1))
            }
            ParamKind::String { .. } => {
                let seg = first.filter(|seg| !seg.is_empty())?;
                Some(ParamMatch::new(ParamValue::String(seg.to_string()), 1))
            }
            ParamKind::Number { .. } => {
                let parsed = parse_float_prefix(first?)?;
                Some(ParamMatch::new(ParamValue::Number(parsed), 1))
            }
            ParamKind::Integer { strict, .. } => {
                let seg = first.filter(|seg| !seg.is_empty())?;
                let parsed = parse_int_prefix(seg)?;
                if *strict && parsed.to_string() != seg {
                    return None;
                }
                Some(ParamMatch::new(ParamValue::Integer(parsed), 1))
            }
            ParamKind::OptionalConst { literal, .. } => {
                if first == Some(literal.as_str()) {
                    Some(ParamMatch::new(ParamValue::Bool(true), 1))
                } else {
                    Some(ParamMatch::new(ParamValue::Bool(false), 0))
                }
            }
            ParamKind::OptionalString { .. } => match first.filter(|seg| !seg.is_empty()) {
                Some(seg) => Some(ParamMatch::new(ParamValue::String(seg.to_string()), 1)),
                None => Some(ParamMatch::new(ParamValue::Bool(false), 0)),
            },
            ParamKind::Optional { sub } => match checked_match(sub.as_ref(), segments) {
                Some(found) => Some(ParamMatch::new(
                    ParamValue::present(found.value),
                    found.consumed,
                )),
                None => Some(ParamMatch::new(ParamValue::absent(), 0)),
            },
            ParamKind::Multiple { sub, at_least_one } => {
                Self::match_multiple(sub.as_ref(), *at_least_one, segments)
            }
        }
    }

    fn serialize(&self, value: Option<&ParamValue>) -> SerializeResult<Option<String>> {
        match self {
            ParamKind::Constant { name } => Ok(Some(name.clone())),
            ParamKind::String { .. } => match value.ok_or_else(|| self.missing())? {
                ParamValue::String(s) => Ok(Some(s.clone())),
                ParamValue::Integer(i) => Ok(Some(i.to_string())),
                ParamValue::Number(n) => Ok(Some(format_number(*n))),
                other => Err(self.unexpected("string", other)),
            },
            ParamKind::Number { .. } => match value.ok_or_else(|| self.missing())? {
                ParamValue::Number(n) => Ok(Some(format_number(*n))),
                ParamValue::Integer(i) => Ok(Some(i.to_string())),
                other => Err(self.unexpected("number", other)),
            },
            ParamKind::Integer { name, .. } => match value.ok_or_else(|| self.missing())? {
                ParamValue::Integer(i) => Ok(Some(i.to_string())),
                ParamValue::Number(n)
                    if n.is_finite()
                        && n.fract() == 0.0
                        && *n >= i64::MIN as f64
                        && *n < i64::MAX as f64 =>
                {
                    Ok(Some((*n as i64).to_string()))
                }
                ParamValue::Number(n) => Err(SerializeError::NotAnInteger {
                    name: name.clone(),
                    got: format_number(*n),
                }),
                other => Err(SerializeError::NotAnInteger {
                    name: name.clone(),
                    got: other.kind_name().to_string(),
                }),
            },
            ParamKind::OptionalConst { literal, .. } => match value {
                None | Some(ParamValue::Bool(false)) => Ok(None),
                Some(ParamValue::Bool(true)) => Ok(Some(literal.clone())),
                Some(other) => Err(self.unexpected("bool", other)),
            },
            ParamKind::OptionalString { .. } => match value {
                None | Some(ParamValue::Bool(false)) => Ok(None),
                Some(ParamValue::String(s)) => Ok(Some(s.clone())),
                Some(other) => Err(self.unexpected("string", other)),
            },
            ParamKind::Optional { sub } => match value {
                None | Some(ParamValue::Optional(None)) => Ok(None),
                Some(ParamValue::Optional(Some(inner))) => sub.serialize(Some(inner)),
                Some(other) => Err(self.unexpected("optional", other)),
            },
            ParamKind::Multiple { sub, .. } => match value.ok_or_else(|| self.missing())? {
                ParamValue::List(items) => {
                    let mut out = Vec::with_capacity(items.len());
                    for item in items {
                        if let Some(seg) = sub.serialize(Some(item))?
                            && !seg.is_empty()
                        {
                            out.push(seg);
                        }
                    }
                    Ok(Some(out.join("/")))
                }
                other => Err(self.unexpected("list", other)),
            },
        }
    }

    fn stringify(&self) -> String {
        match self {
            ParamKind::Constant { name } => name.clone(),
            ParamKind::String { name } => format!(":{name}"),
            ParamKind::Number { name } => format!(":{name}(number)"),
            ParamKind::Integer { name, .. } => format!(":{name}(integer)"),
            ParamKind::OptionalConst { literal, .. } => format!("{literal}?"),
            ParamKind::OptionalString { name } => format!(":{name}?"),
            ParamKind::Optional { sub } => format!("{}?", sub.stringify()),
            ParamKind::Multiple { sub, at_least_one } => {
                format!("{}{}", sub.stringify(), if *at_least_one { '+' } else { '*' })
            }
        }
    }

    fn produces_value(&self) -> bool {
        !matches!(self, ParamKind::Constant { .. })
    }

    fn equals(&self, other: &dyn Param) -> bool {
        let Some(other) = other.as_any().downcast_ref::<ParamKind>() else {
            return false;
        };

        match (self, other) {
            (ParamKind::Constant { name: a }, ParamKind::Constant { name: b })
            | (ParamKind::String { name: a }, ParamKind::String { name: b })
            | (ParamKind::Number { name: a }, ParamKind::Number { name: b })
            | (ParamKind::OptionalString { name: a }, ParamKind::OptionalString { name: b }) => {
                a == b
            }
            (
                ParamKind::Integer {
                    name: na,
                    strict: sa,
                },
                ParamKind::Integer {
                    name: nb,
                    strict: sb,
                },
            ) => na == nb && sa == sb,
            (
                ParamKind::OptionalConst {
                    name: na,
                    literal: la,
                },
                ParamKind::OptionalConst {
                    name: nb,
                    literal: lb,
                },
            ) => na == nb && la == lb,
            (ParamKind::Optional { sub: a }, ParamKind::Optional { sub: b }) => {
                params_equal(a.as_ref(), b.as_ref())
            }
            (
                ParamKind::Multiple {
                    sub: a,
                    at_least_one: la,
                },
                ParamKind::Multiple {
                    sub: b,
                    at_least_one: lb,
                },
            ) => la == lb && params_equal(a.as_ref(), b.as_ref()),
            _ => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
