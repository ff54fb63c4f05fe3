//! Values produced by evaluation
//!
//! The evaluator only ever produces these four variants. Operators live in
//! [`ops`] and fail with a typed error instead of panicking when the
//! operands cannot be coerced.

mod display;
mod ops;

pub use ops::{parse_bool, parse_int};

use crate::context::Context;

/// A runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// Text
    Str(String),

    /// Boolean: `true` or `false`
    Bool(bool),

    /// A nested context, e.g. another file's exports
    Container(Context),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Get as integer, if this is an Int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice, if this is a Str.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as bool, if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as context, if this is a Container.
    pub fn as_container(&self) -> Option<&Context> {
        match self {
            Value::Container(ctx) => Some(ctx),
            _ => None,
        }
    }

    /// Integer view used by arithmetic and comparison: an Int, or a Str
    /// whose whole text parses as an i64.
    pub fn coerce_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Str(s) => parse_int(s),
            _ => None,
        }
    }

    /// Boolean view used by logical operators and conditions: a Bool, or
    /// the Str `"true"` / `"false"`.
    pub fn coerce_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Str(s) => parse_bool(s),
            _ => None,
        }
    }

    /// Text form of the value, as written into rendered output.
    pub fn to_text(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Context> for Value {
    fn from(ctx: Context) -> Self {
        Value::Container(ctx)
    }
}
