//! Site builds and their file-system collaborators
//!
//! [`Site::build`] runs three phases, each a concurrent batch over one
//! directory:
//!
//! 1. **templates**: parsed into the template cache
//! 2. **content**: rendered, which fills the export store
//! 3. **pages**: rendered, free to iterate over content exports
//!
//! The first fatal error ends the build.

mod post;
mod render;
mod source;

pub use post::{markdown_to_html, MarkdownProcessor, PostProcessor, Unprocessed};
pub use render::{FsRenderer, MemoryRenderer, NullRenderer, RenderFuture, Renderer};
pub use source::{walk_files, FileSource};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::output::OutputPaths;
use crate::pipeline::{Job, Pipeline};
use crate::runtime::Runtime;
use crate::store::{ExportStore, TemplateCache};

/// Files found by each phase of a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Template files
    pub templates: usize,
    /// Content files
    pub content: usize,
    /// Page files
    pub pages: usize,
}

/// A site on disk and the stores one build fills.
pub struct Site {
    config: SiteConfig,
    exports: Arc<ExportStore>,
    templates: Arc<TemplateCache>,
    post: Arc<dyn PostProcessor>,
    renderer: Arc<dyn Renderer>,
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("config", &self.config)
            .field("exports", &self.exports.len())
            .field("templates", &self.templates.len())
            .finish()
    }
}

impl Site {
    /// Create a site that writes Markdown-processed pages to disk.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            exports: Arc::new(ExportStore::new()),
            templates: Arc::new(TemplateCache::new()),
            post: Arc::new(MarkdownProcessor),
            renderer: Arc::new(FsRenderer),
        }
    }

    /// Replace the renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the post-processor.
    pub fn with_post_processor(mut self, post: Arc<dyn PostProcessor>) -> Self {
        self.post = post;
        self
    }

    /// The configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Exports recorded so far.
    pub fn exports(&self) -> &Arc<ExportStore> {
        &self.exports
    }

    /// Templates cached so far.
    pub fn templates(&self) -> &Arc<TemplateCache> {
        &self.templates
    }

    /// Run the template, content and page phases in order.
    pub async fn build(&self) -> Result<BuildReport> {
        let config = &self.config;
        let content_root = config.content_root();
        let output_root = config.output_root();

        let runtime = Runtime::new(
            self.exports.clone(),
            self.templates.clone(),
            Arc::new(FileSource::new(&content_root)),
        )
        .with_options(config.eval.clone());

        let pipeline = Pipeline::new(runtime, OutputPaths::default())
            .with_capacity(config.channel_capacity)
            .with_post_processor(self.post.clone())
            .with_renderer(self.renderer.clone());

        let mut report = BuildReport::default();

        let template_root = config.template_root();
        let files = phase_files("templates", &template_root)?;
        report.templates = files.len();
        pipeline
            .run_batch(files, Job::CacheTemplate { root: template_root })
            .await?;

        let files = phase_files("content", &content_root)?;
        report.content = files.len();
        pipeline
            .clone()
            .with_paths(OutputPaths::new(&content_root, &output_root))
            .run_batch(files, Job::Render)
            .await?;

        let pages_root = config.pages_root();
        let files = phase_files("pages", &pages_root)?;
        report.pages = files.len();
        pipeline
            .with_paths(OutputPaths::new(&pages_root, &output_root))
            .run_batch(files, Job::Render)
            .await?;

        info!(
            templates = report.templates,
            content = report.content,
            pages = report.pages,
            output = %output_root.display(),
            "build finished"
        );
        Ok(report)
    }
}

/// Files of one phase. A missing directory is an empty phase.
fn phase_files(phase: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(phase, dir = %dir.display(), "directory missing, phase skipped");
        return Ok(Vec::new());
    }
    let files = walk_files(dir).map_err(|e| Error::io(dir, e))?;
    info!(phase, files = files.len(), dir = %dir.display(), "starting phase");
    Ok(files)
}
