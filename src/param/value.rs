use hashbrown::HashMap as FastHashMap;
use serde::Serialize;

/// Flat map of extracted values keyed by param name.
pub type Params = FastHashMap<String, ParamValue>;

/// A value produced by matching a Param, or consumed when serializing one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Produced by constants, which carry no information.
    Null,
    Bool(bool),
    String(String),
    Number(f64),
    Integer(i64),
    /// `None` when the wrapped param did not match.
    Optional(Option<Box<ParamValue>>),
    List(Vec<ParamValue>),
}

impl ParamValue {
    pub fn present(value: impl Into<ParamValue>) -> Self {
        ParamValue::Optional(Some(Box::new(value.into())))
    }

    pub fn absent() -> Self {
        ParamValue::Optional(None)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// `Some(None)` for an absent optional, `Some(Some(v))` for a present one.
    pub fn as_optional(&self) -> Option<Option<&ParamValue>> {
        match self {
            ParamValue::Optional(inner) => Some(inner.as_deref()),
            _ => None,
        }
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "bool",
            ParamValue::String(_) => "string",
            ParamValue::Number(_) => "number",
            ParamValue::Integer(_) => "integer",
            ParamValue::Optional(_) => "optional",
            ParamValue::List(_) => "list",
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        ParamValue::List(value.into_iter().map(Into::into).collect())
    }
}
