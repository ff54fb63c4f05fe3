//! Display implementation for Value

use std::fmt;

use super::Value;
use crate::context::{Context, ContextNode};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Container(ctx) => fmt_context(ctx, f),
        }
    }
}

fn fmt_context(ctx: &Context, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (key, node)) in ctx.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: ", key)?;
        match node {
            ContextNode::Value(Value::Str(s)) => write!(f, "{:?}", s)?,
            ContextNode::Value(v) => write!(f, "{}", v)?,
            ContextNode::Context(nested) => fmt_context(nested, f)?,
        }
    }
    write!(f, "}}")
}
