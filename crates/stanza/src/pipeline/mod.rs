//! Streaming per-file pipeline
//!
//! Every file runs as a set of concurrent stage tasks joined by bounded
//! channels:
//!
//! ```text
//! lex ─▶ parse ─┬─▶ evaluate(page 1) ─▶ assemble(page 1) ─┐
//!               ├─▶ evaluate(page 2) ─▶ assemble(page 2) ─┼─▶ write
//!               └─▶ ...                                  ─┘
//! ```
//!
//! A full channel blocks its producer, so memory stays bounded by the
//! channel capacity. A paginated file fans its node stream out to one
//! evaluator per page; each sees every node in source order. All stages of
//! a file share one [`CancelToken`]. The first stage to fail raises it, the
//! others stop forwarding, and that first error is the one reported.
//! Pages are written only after every stage of the file has succeeded, so a
//! failed file leaves no output behind.

mod stages;

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::eval::{Document, Evaluator};
use crate::node::ParseNode;
use crate::output::OutputPaths;
use crate::pagination::PaginationRequest;
use crate::runtime::Runtime;
use crate::site::{MarkdownProcessor, NullRenderer, PostProcessor, Renderer};
use crate::value::Value;

/// Default capacity of each inter-stage channel.
pub const DEFAULT_CAPACITY: usize = 10;

/// What a batch does with each file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Parse into the template cache, keyed by the path relative to `root`
    CacheTemplate {
        /// Template directory
        root: PathBuf,
    },
    /// Evaluate, post-process and render
    Render,
}

/// Runs files through the lex/parse/evaluate/render stages.
#[derive(Clone)]
pub struct Pipeline {
    runtime: Runtime,
    paths: OutputPaths,
    post: Arc<dyn PostProcessor>,
    renderer: Arc<dyn Renderer>,
    capacity: usize,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("runtime", &self.runtime)
            .field("paths", &self.paths)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl Pipeline {
    /// Create a pipeline that post-processes Markdown and discards output.
    pub fn new(runtime: Runtime, paths: OutputPaths) -> Self {
        Self {
            runtime,
            paths,
            post: Arc::new(MarkdownProcessor),
            renderer: Arc::new(NullRenderer),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Replace the post-processor.
    pub fn with_post_processor(mut self, post: Arc<dyn PostProcessor>) -> Self {
        self.post = post;
        self
    }

    /// Replace the renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the channel capacity; at least 1.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Use a different input-to-output mapping.
    pub fn with_paths(mut self, paths: OutputPaths) -> Self {
        self.paths = paths;
        self
    }

    /// The shared runtime.
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// The input-to-output mapping.
    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    // ═══════════════════════════════════════════════════════════════════
    // Single File
    // ═══════════════════════════════════════════════════════════════════

    /// Lex and parse `source` into the template cache under `key`.
    pub async fn cache_template(&self, key: &str, source: String) -> Result<()> {
        let templates = self.runtime.templates().clone();
        templates.declare(key);

        let cancel = CancelToken::new();
        let mut tasks = JoinSet::new();
        let (token_tx, token_rx) = mpsc::channel(self.capacity);
        let (node_tx, node_rx) = mpsc::channel(self.capacity);

        tasks.spawn(stages::lex(source, token_tx, cancel.clone()));
        tasks.spawn(stages::parse(token_rx, node_tx, cancel.clone()));
        tasks.spawn(stages::cache(node_rx, templates, key.to_string(), cancel.clone()));

        stages::merge(tasks, &cancel).await.map_err(|e| e.in_file(key))
    }

    /// Number of pages `source` renders.
    pub fn page_count(&self, source: &str) -> usize {
        let Some(request) = PaginationRequest::scan(source) else {
            return 1;
        };
        let items = match self.runtime.content().list(&request.content_path) {
            Ok(files) => files.len(),
            Err(e) => {
                // Evaluation reports the listing failure with its position.
                debug!(content = %request.content_path, error = %e, "pagination listing failed");
                0
            }
        };
        request.pages_for(items)
    }

    /// Evaluate `source` as the document at `input` and render each of its
    /// pages.
    pub async fn run_file(&self, input: &Path, source: String) -> Result<()> {
        let pages = self.page_count(&source);
        debug!(file = %input.display(), pages, "starting pipeline");

        self.runtime
            .exports()
            .insert(input, &["_href"], Value::Str(self.paths.href(input, 1)));

        let cancel = CancelToken::new();
        let mut tasks = JoinSet::new();
        let (token_tx, token_rx) = mpsc::channel(self.capacity);
        let (node_tx, node_rx) = mpsc::channel(self.capacity);

        tasks.spawn(stages::lex(source, token_tx, cancel.clone()));
        tasks.spawn(stages::parse(token_rx, node_tx, cancel.clone()));

        let branches: Vec<mpsc::Receiver<ParseNode>> = if pages == 1 {
            vec![node_rx]
        } else {
            let (txs, rxs): (Vec<_>, Vec<_>) =
                (0..pages).map(|_| mpsc::channel(self.capacity)).unzip();
            tasks.spawn(stages::fan_out(node_rx, txs, cancel.clone()));
            rxs
        };

        let (page_tx, mut page_rx) = mpsc::channel(pages.max(1));
        for (index, nodes) in branches.into_iter().enumerate() {
            let page = index as i64 + 1;
            let document = Document::new(input)
                .with_page(page, pages as i64)
                .with_paths(self.paths.clone());
            let evaluator = Evaluator::new(self.runtime.clone(), document)
                .with_context(page_context(page, pages as i64))
                .with_interrupt(cancel.clone());
            let (text_tx, text_rx) = mpsc::channel(self.capacity);

            tasks.spawn(stages::evaluate(evaluator, nodes, text_tx, cancel.clone()));
            tasks.spawn(stages::assemble(
                text_rx,
                page,
                input.to_path_buf(),
                self.paths.output_path(input, page),
                self.post.clone(),
                page_tx.clone(),
                cancel.clone(),
            ));
        }
        drop(page_tx);

        stages::merge(tasks, &cancel)
            .await
            .map_err(|e| e.in_file(input))?;

        let mut finished = Vec::with_capacity(pages);
        while let Some(page) = page_rx.recv().await {
            finished.push(page);
        }
        stages::write_pages(finished, self.renderer.as_ref())
            .await
            .map_err(|e| e.in_file(input))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Batches
    // ═══════════════════════════════════════════════════════════════════

    /// Run `job` over `files` concurrently.
    ///
    /// A file that cannot be read is logged and skipped. Any other failure
    /// stops the batch and is returned.
    pub async fn run_batch(&self, files: Vec<PathBuf>, job: Job) -> Result<()> {
        let mut tasks = JoinSet::new();

        for path in files {
            let source = match tokio::fs::read_to_string(&path).await {
                Ok(source) => source,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping unreadable file");
                    continue;
                }
            };
            info!(file = %path.display(), "processing");

            let pipeline = self.clone();
            let job = job.clone();
            tasks.spawn(async move {
                match job {
                    Job::CacheTemplate { root } => {
                        let key = template_key(&root, &path);
                        pipeline.cache_template(&key, source).await
                    }
                    Job::Render => pipeline.run_file(&path, source).await,
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            let result = joined.unwrap_or_else(|e| {
                Err(Error::Stage {
                    stage: "batch",
                    message: e.to_string(),
                })
            });
            if let Err(e) = result {
                tasks.abort_all();
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Variables every page starts with.
fn page_context(page: i64, pages: i64) -> Context {
    [("curPage", Value::Int(page)), ("numPages", Value::Int(pages))]
        .into_iter()
        .collect()
}

/// Cache key of a template: its path under `root`, `/`-separated.
pub fn template_key(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_template_key_is_relative_and_slashed() {
        assert_eq!(
            template_key(
                Path::new("site/templates"),
                Path::new("site/templates/partials/nav.html"),
            ),
            "partials/nav.html"
        );
        assert_eq!(template_key(Path::new("elsewhere"), Path::new("t.html")), "t.html");
    }

    #[test]
    fn test_unpaginated_source_has_one_page() {
        let pipeline = Pipeline::new(Runtime::default(), OutputPaths::default());
        assert_eq!(pipeline.page_count("<p>{{: 1 }}</p>"), 1);
        assert_eq!(pipeline.page_count("{{: paginate(\"posts\", \"t\", 5) }}"), 1);
    }

    #[tokio::test]
    async fn test_cache_template_replays_in_order() {
        let pipeline = Pipeline::new(Runtime::default(), OutputPaths::default()).with_capacity(1);
        pipeline
            .cache_template("list.html", "a{{: 1 }}b\n{{ x = 2 }}c".to_string())
            .await
            .unwrap();
        let nodes = pipeline.runtime().templates().get("list.html").unwrap();
        let shown: Vec<String> = nodes.iter().map(ToString::to_string).collect();
        assert_eq!(
            shown,
            vec!["\"a\"", "(print 1)", "\"b\\n\"", "(block (stmts (= x 2)))", "\"c\""]
        );
    }

    #[tokio::test]
    async fn test_syntax_error_names_file() {
        let pipeline = Pipeline::new(Runtime::default(), OutputPaths::default());
        let err = pipeline
            .run_file(Path::new("pages/bad.html"), "{{ ) }}".to_string())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("pages/bad.html"));
        assert!(matches!(err.root(), Error::Parse(_)));
    }
}
