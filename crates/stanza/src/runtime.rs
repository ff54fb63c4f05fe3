//! Shared evaluation runtime
//!
//! A [`Runtime`] bundles what every evaluator of a build shares: the export
//! store, the template cache, the source of content listings, the builtin
//! registry and the evaluation options. Cloning it is cheap.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::builtins::Builtins;
use crate::config::EvalOptions;
use crate::store::{ExportStore, TemplateCache};

/// Lists the files behind a content path such as `"posts"`.
///
/// Paths must come back in a stable order, and must be the same paths the
/// files were exported under.
pub trait ContentSource: Send + Sync {
    /// Files under `path`, in iteration order.
    fn list(&self, path: &str) -> io::Result<Vec<PathBuf>>;
}

impl<F> ContentSource for F
where
    F: Fn(&str) -> io::Result<Vec<PathBuf>> + Send + Sync,
{
    fn list(&self, path: &str) -> io::Result<Vec<PathBuf>> {
        self(path)
    }
}

/// Content source with no files.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoContent;

impl ContentSource for NoContent {
    fn list(&self, _path: &str) -> io::Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

/// State shared by all evaluators of one build.
#[derive(Clone)]
pub struct Runtime {
    exports: Arc<ExportStore>,
    templates: Arc<TemplateCache>,
    content: Arc<dyn ContentSource>,
    builtins: Arc<Builtins>,
    options: EvalOptions,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(
            Arc::new(ExportStore::new()),
            Arc::new(TemplateCache::new()),
            Arc::new(NoContent),
        )
    }
}

impl Runtime {
    /// Create a runtime with the standard builtins and default options.
    pub fn new(
        exports: Arc<ExportStore>,
        templates: Arc<TemplateCache>,
        content: Arc<dyn ContentSource>,
    ) -> Self {
        Self {
            exports,
            templates,
            content,
            builtins: Arc::new(Builtins::with_prelude()),
            options: EvalOptions::default(),
        }
    }

    /// Replace the builtin registry.
    pub fn with_builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = Arc::new(builtins);
        self
    }

    /// Replace the evaluation options.
    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the content source.
    pub fn with_content(mut self, content: Arc<dyn ContentSource>) -> Self {
        self.content = content;
        self
    }

    /// The export store.
    pub fn exports(&self) -> &Arc<ExportStore> {
        &self.exports
    }

    /// The template cache.
    pub fn templates(&self) -> &Arc<TemplateCache> {
        &self.templates
    }

    /// The content source.
    pub fn content(&self) -> &dyn ContentSource {
        self.content.as_ref()
    }

    /// The builtin registry.
    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    /// Evaluation options.
    pub fn options(&self) -> &EvalOptions {
        &self.options
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("exports", &self.exports.len())
            .field("templates", &self.templates.len())
            .field("builtins", &self.builtins.len())
            .field("options", &self.options)
            .finish()
    }
}
