//! Whole-site builds over a temporary directory

use std::fs;
use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use stanza::*;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("{}: {}", rel, e))
}

/// A blog with two posts, an index listing them and a paginated archive.
fn blog() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(root, "content/posts/a.md", "{{ title = \"Alpha\" }}Body *A*\n");
    write(root, "content/posts/b.md", "{{ title = \"Beta\" }}Body *B*\n");
    write(root, "templates/item.html", "<li><a href=\"/{{: p._href }}\">{{: p.title }}</a></li>");
    write(root, "templates/archive/list.html", "{{ for p in content }}{{: p.title }}{{ end }}");
    write(
        root,
        "pages/index.html",
        "<ul>{{ for p in \"posts\" }}{{ template(\"item.html\") }}{{ end }}</ul>\n",
    );
    write(
        root,
        "pages/archive.html",
        "{{: curPage }}:{{ paginate(\"posts\", \"archive/list.html\", 1) }}",
    );
    dir
}

// ═══════════════════════════════════════════════════════════════════════
// Build
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_build_renders_every_phase() {
    let dir = blog();
    let root = dir.path();

    let site = Site::new(SiteConfig::with_root(root));
    let report = site.build().await.unwrap();

    assert_eq!(
        report,
        BuildReport {
            templates: 2,
            content: 2,
            pages: 2
        }
    );
    assert_eq!(read(root, "output/posts/a.html"), "<p>Body <em>A</em></p>\n");
    assert_eq!(
        read(root, "output/index.html"),
        concat!(
            "<ul><li><a href=\"/posts/a.html\">Alpha</a></li>\n",
            "<li><a href=\"/posts/b.html\">Beta</a></li></ul>\n",
        )
    );
    assert_eq!(read(root, "output/archive.html"), "1:Alpha");
    assert_eq!(read(root, "output/archive_002.html"), "2:Beta");
}

#[tokio::test]
async fn test_content_exports_are_keyed_by_file() {
    let dir = blog();
    let site = Site::new(SiteConfig::with_root(dir.path())).with_renderer(Arc::new(NullRenderer));
    site.build().await.unwrap();

    let exports = site.exports().get(&dir.path().join("content/posts/b.md"));
    assert_eq!(exports.lookup("title"), Some(Value::string("Beta")));
    assert_eq!(exports.lookup("_href"), Some(Value::string("posts/b.html")));
    assert!(site.templates().contains("archive/list.html"));
}

#[tokio::test]
async fn test_null_renderer_writes_nothing() {
    let dir = blog();
    let site = Site::new(SiteConfig::with_root(dir.path())).with_renderer(Arc::new(NullRenderer));
    site.build().await.unwrap();
    assert!(!dir.path().join("output").exists());
}

#[tokio::test]
async fn test_memory_renderer_sees_unprocessed_text() {
    let dir = blog();
    let renderer = Arc::new(MemoryRenderer::new());
    let site = Site::new(SiteConfig::with_root(dir.path()))
        .with_renderer(renderer.clone())
        .with_post_processor(Arc::new(Unprocessed));
    site.build().await.unwrap();

    assert_eq!(
        renderer.page(&dir.path().join("output/posts/a.html")),
        Some("Body *A*\n".to_string())
    );
    assert_eq!(renderer.pages().len(), 5);
}

#[tokio::test]
async fn test_missing_directories_are_empty_phases() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "pages/solo.html", "{{: 6 * 7 }}");

    let report = Site::new(SiteConfig::with_root(dir.path())).build().await.unwrap();
    assert_eq!(
        report,
        BuildReport {
            templates: 0,
            content: 0,
            pages: 1
        }
    );
    assert_eq!(read(dir.path(), "output/solo.html"), "42");
}

// ═══════════════════════════════════════════════════════════════════════
// Failures
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_build_fails_with_file_name() {
    let dir = blog();
    write(dir.path(), "pages/broken.html", "{{: nope + 1 }}");

    let err = Site::new(SiteConfig::with_root(dir.path())).build().await.unwrap_err();
    assert!(err.to_string().contains("broken.html"), "{}", err);
    assert!(matches!(err.root(), Error::Eval(e) if e.is_name_error()));
}

#[tokio::test]
async fn test_config_file_drives_layout() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/home.html", "home");
    write(
        root,
        "stanza.json",
        &format!(
            "{{\"root_path\": {:?}, \"pages_dir\": \"src\", \"output_path\": \"public\"}}",
            root.display().to_string()
        ),
    );

    let config = SiteConfig::load(&root.join("stanza.json")).unwrap();
    Site::new(config).build().await.unwrap();
    assert_eq!(read(root, "public/home.html"), "home");
}
