//! Nested variable scopes
//!
//! A [`Context`] maps names to either a value or a nested context. Dotted
//! names (`post.meta.title`) resolve by descending one level per part.
//! Entries keep their insertion order, which is also the iteration order of
//! `for` loops over a container.

use indexmap::IndexMap;

use crate::value::Value;

/// An entry in a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextNode {
    /// A plain value
    Value(Value),
    /// A nested scope
    Context(Context),
}

impl ContextNode {
    /// Convert the entry into a value; nested scopes become containers.
    pub fn to_value(&self) -> Value {
        match self {
            ContextNode::Value(v) => v.clone(),
            ContextNode::Context(ctx) => Value::Container(ctx.clone()),
        }
    }
}

impl From<Value> for ContextNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Container(ctx) => ContextNode::Context(ctx),
            other => ContextNode::Value(other),
        }
    }
}

/// A named scope of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    entries: IndexMap<String, ContextNode>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the context has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get a top-level entry.
    pub fn get(&self, key: &str) -> Option<&ContextNode> {
        self.entries.get(key)
    }

    /// Resolve a dotted path to its value.
    ///
    /// A path ending at a nested scope yields a container.
    pub fn at<S: AsRef<str>>(&self, path: &[S]) -> Option<Value> {
        let (last, parents) = path.split_last()?;
        let mut scope = self;
        for part in parents {
            match scope.entries.get(part.as_ref())? {
                ContextNode::Context(nested) => scope = nested,
                ContextNode::Value(_) => return None,
            }
        }
        scope.entries.get(last.as_ref()).map(ContextNode::to_value)
    }

    /// Resolve a dotted name such as `"post.title"`.
    pub fn lookup(&self, dotted: &str) -> Option<Value> {
        let parts: Vec<&str> = dotted.split('.').collect();
        self.at(&parts)
    }

    /// Bind a value at a dotted path.
    ///
    /// Missing intermediate scopes are created, and a plain value standing
    /// where a scope is needed is replaced by one. Whatever was at the final
    /// key is overwritten. An empty path is ignored.
    pub fn insert<S: AsRef<str>>(&mut self, path: &[S], value: Value) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut scope = self;
        for part in parents {
            let entry = scope
                .entries
                .entry(part.as_ref().to_string())
                .or_insert_with(|| ContextNode::Context(Context::new()));
            if let ContextNode::Value(_) = entry {
                *entry = ContextNode::Context(Context::new());
            }
            scope = match entry {
                ContextNode::Context(nested) => nested,
                ContextNode::Value(_) => return,
            };
        }
        scope.entries.insert(last.as_ref().to_string(), value.into());
    }

    /// Bind a value under a single top-level key.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value.into());
    }

    /// Return a new context holding both sets of entries, `other` winning
    /// on key collisions. Neither input is modified.
    pub fn merge(&self, other: &Context) -> Context {
        let mut merged = self.clone();
        for (key, node) in &other.entries {
            merged.entries.insert(key.clone(), node.clone());
        }
        merged
    }

    /// Entries as values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.entries.values().map(ContextNode::to_value)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut ctx = Context::new();
        for (key, value) in iter {
            ctx.set(key, value);
        }
        ctx
    }
}
