//! Shared stores: per-file exports and parsed templates
//!
//! Both stores are constructed once per build and handed to every task
//! through an `Arc`. They are backed by [`DashMap`], so writers lock only
//! the shard they touch and readers never wait on other readers.

use std::path::{Path, PathBuf};

use dashmap::DashMap;

use crate::context::Context;
use crate::node::ParseNode;
use crate::value::Value;

/// Variables exported by each evaluated file, keyed by the file's path.
#[derive(Debug, Default)]
pub struct ExportStore {
    files: DashMap<PathBuf, Context>,
}

impl ExportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` at the dotted `key` within `file`'s exports.
    pub fn insert<S: AsRef<str>>(&self, file: &Path, key: &[S], value: Value) {
        self.files
            .entry(file.to_path_buf())
            .or_default()
            .insert(key, value);
    }

    /// The whole exported context of `file`; empty if it exported nothing.
    pub fn get(&self, file: &Path) -> Context {
        self.files
            .get(file)
            .map(|ctx| ctx.value().clone())
            .unwrap_or_default()
    }

    /// Check whether `file` has exported anything.
    pub fn contains(&self, file: &Path) -> bool {
        self.files.contains_key(file)
    }

    /// Number of files with exports.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if no file has exported anything.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Parsed node sequences of reusable templates, keyed by template path.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: DashMap<String, Vec<ParseNode>>,
}

impl TemplateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node to `path`'s sequence.
    pub fn insert(&self, path: &str, node: ParseNode) {
        self.templates.entry(path.to_string()).or_default().push(node);
    }

    /// Register `path` with no nodes yet, so an empty template still resolves.
    pub fn declare(&self, path: &str) {
        self.templates.entry(path.to_string()).or_default();
    }

    /// The accumulated nodes for `path`, in insertion order.
    pub fn get(&self, path: &str) -> Option<Vec<ParseNode>> {
        self.templates.get(path).map(|nodes| nodes.value().clone())
    }

    /// Check whether `path` has been cached.
    pub fn contains(&self, path: &str) -> bool {
        self.templates.contains_key(path)
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
