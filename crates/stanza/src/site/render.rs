//! Writing rendered pages

use std::collections::BTreeMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Mutex;

/// Future returned by [`Renderer::render`].
pub type RenderFuture<'a> = Pin<Box<dyn Future<Output = io::Result<()>> + Send + 'a>>;

/// Writes one finished page.
pub trait Renderer: Send + Sync {
    /// Write `text` as the page at `output`.
    fn render<'a>(&'a self, output: &'a Path, text: String) -> RenderFuture<'a>;
}

/// Writes pages to disk, creating parent directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRenderer;

impl Renderer for FsRenderer {
    fn render<'a>(&'a self, output: &'a Path, text: String) -> RenderFuture<'a> {
        Box::pin(async move {
            if let Some(parent) = output.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(output, text).await
        })
    }
}

/// Discards pages. Evaluation still runs, so exports are still recorded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render<'a>(&'a self, _output: &'a Path, _text: String) -> RenderFuture<'a> {
        Box::pin(async { Ok(()) })
    }
}

/// Keeps pages in memory, keyed by output path.
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    pages: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written for `output`, if any.
    pub fn page(&self, output: &Path) -> Option<String> {
        self.lock().get(output).cloned()
    }

    /// All written pages.
    pub fn pages(&self) -> BTreeMap<PathBuf, String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, String>> {
        // A poisoned map still holds every completed write.
        self.pages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Renderer for MemoryRenderer {
    fn render<'a>(&'a self, output: &'a Path, text: String) -> RenderFuture<'a> {
        Box::pin(async move {
            self.lock().insert(output.to_path_buf(), text);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_fs_renderer_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("blog/posts/a.html");
        FsRenderer.render(&output, "<p>a</p>".to_string()).await.unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "<p>a</p>");
    }

    #[tokio::test]
    async fn test_memory_renderer_records_pages() {
        let renderer = MemoryRenderer::new();
        renderer.render(Path::new("out/a.html"), "a".to_string()).await.unwrap();
        assert_eq!(renderer.page(Path::new("out/a.html")), Some("a".to_string()));
        assert_eq!(renderer.pages().len(), 1);
    }
}
