//! Pipeline behaviour: streaming, pagination fan-out, cancellation, batches

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use stanza::*;

fn post_path(i: usize) -> PathBuf {
    PathBuf::from(format!("content/posts/{}.md", i))
}

/// A runtime whose `"posts"` listing holds five files titled A to E.
fn blog_runtime() -> Runtime {
    let exports = Arc::new(ExportStore::new());
    for (i, title) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        exports.insert(&post_path(i), &["title"], Value::string(*title));
    }
    let listing = |path: &str| -> io::Result<Vec<PathBuf>> {
        match path {
            "posts" => Ok((0..5).map(post_path).collect()),
            "drafts" => Ok(Vec::new()),
            other => Err(io::Error::new(io::ErrorKind::NotFound, other.to_string())),
        }
    };
    Runtime::new(exports, Arc::new(TemplateCache::new()), Arc::new(listing))
}

fn memory_pipeline(runtime: Runtime, renderer: &Arc<MemoryRenderer>) -> Pipeline {
    Pipeline::new(runtime, OutputPaths::new("pages", "out"))
        .with_post_processor(Arc::new(Unprocessed))
        .with_renderer(renderer.clone())
}

fn page(renderer: &MemoryRenderer, path: &str) -> Option<String> {
    renderer.page(Path::new(path))
}

// ═══════════════════════════════════════════════════════════════════════
// Single Page
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_single_page_renders_to_mapped_output() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(Runtime::default(), &renderer);

    pipeline
        .run_file(Path::new("pages/about.md"), "{{ x = 2 }}x is {{: x * 21 }}\n".to_string())
        .await
        .unwrap();

    assert_eq!(page(&renderer, "out/about.html"), Some("x is 42\n".to_string()));
    assert_eq!(renderer.pages().len(), 1);
}

#[tokio::test]
async fn test_page_starts_with_page_variables_and_href_export() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(Runtime::default(), &renderer);

    pipeline
        .run_file(Path::new("pages/a.html"), "{{: curPage }} of {{: numPages }}".to_string())
        .await
        .unwrap();

    assert_eq!(page(&renderer, "out/a.html"), Some("1 of 1".to_string()));
    let exports = pipeline.runtime().exports().get(Path::new("pages/a.html"));
    assert_eq!(exports.lookup("_href"), Some(Value::string("a.html")));
}

#[tokio::test]
async fn test_capacity_one_still_streams_everything() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(Runtime::default(), &renderer).with_capacity(0);

    let source: String = (0..300).map(|i| format!("line {{{{: {} * 2 }}}}\n", i)).collect();
    let expected: String = (0..300).map(|i| format!("line {}\n", i * 2)).collect();
    pipeline.run_file(Path::new("pages/long.html"), source).await.unwrap();

    assert_eq!(page(&renderer, "out/long.html"), Some(expected));
}

#[tokio::test]
async fn test_markdown_is_post_processed_by_default() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = Pipeline::new(Runtime::default(), OutputPaths::new("pages", "out"))
        .with_renderer(renderer.clone());

    pipeline
        .run_file(Path::new("pages/post.md"), "{{ t = \"Hi\" }}# {{: t }}\n".to_string())
        .await
        .unwrap();

    assert_eq!(page(&renderer, "out/post.html"), Some("<h1>Hi</h1>\n".to_string()));
}

// ═══════════════════════════════════════════════════════════════════════
// Pagination
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_paginated_file_fans_out_one_output_per_page() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(blog_runtime(), &renderer);
    pipeline
        .cache_template("list.html", "{{ for p in content }}{{: p.title }}{{ end }}".to_string())
        .await
        .unwrap();

    let source =
        "<h1>{{: curPage }}/{{: numPages }}</h1>{{ paginate(\"posts\", \"list.html\", 2) }}";
    assert_eq!(pipeline.page_count(source), 3);
    pipeline
        .run_file(Path::new("pages/blog.html"), source.to_string())
        .await
        .unwrap();

    assert_eq!(renderer.pages().len(), 3);
    assert_eq!(page(&renderer, "out/blog.html"), Some("<h1>1/3</h1>A\nB".to_string()));
    assert_eq!(page(&renderer, "out/blog_002.html"), Some("<h1>2/3</h1>C\nD".to_string()));
    assert_eq!(page(&renderer, "out/blog_003.html"), Some("<h1>3/3</h1>E".to_string()));
}

#[tokio::test]
async fn test_pagination_over_empty_content_renders_one_page() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(blog_runtime(), &renderer);
    pipeline.cache_template("list.html", "items".to_string()).await.unwrap();

    let source = "[{{ paginate(\"drafts\", \"list.html\", 10) }}]";
    pipeline
        .run_file(Path::new("pages/drafts.html"), source.to_string())
        .await
        .unwrap();

    assert_eq!(page(&renderer, "out/drafts.html"), Some("[items]".to_string()));
    assert_eq!(renderer.pages().len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════
// Failures
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_evaluation_error_names_file_and_writes_nothing() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(Runtime::default(), &renderer);

    let err = pipeline
        .run_file(Path::new("pages/bad.html"), "ok\n{{: missing }}\nmore\n".to_string())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("pages/bad.html"), "{}", err);
    assert!(matches!(
        err.root(),
        Error::Eval(EvalError::UndefinedVariable { name, .. }) if name == "missing"
    ));
    assert!(renderer.pages().is_empty());
}

#[tokio::test]
async fn test_syntax_error_cancels_every_page() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(blog_runtime(), &renderer);
    pipeline.cache_template("list.html", "x".to_string()).await.unwrap();

    let source = "{{ paginate(\"posts\", \"list.html\", 1) }}\nfine\n{{ if }}\n";
    let err = pipeline
        .run_file(Path::new("pages/broken.html"), source.to_string())
        .await
        .unwrap_err();

    assert!(matches!(err.root(), Error::Parse(ParseError::Syntax { .. })));
    assert!(renderer.pages().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_failure_on_one_page_writes_no_page() {
    let source = concat!(
        "{{ paginate(\"posts\", \"list.html\", 2) }}\n",
        "{{ if curPage == 3 }}{{: missing }}{{ end }}\n",
    );

    for _ in 0..25 {
        let renderer = Arc::new(MemoryRenderer::new());
        let pipeline = memory_pipeline(blog_runtime(), &renderer);
        pipeline
            .cache_template(
                "list.html",
                "{{ for p in content }}{{: p.title }}{{ end }}".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(pipeline.page_count(source), 3);

        let err = pipeline
            .run_file(Path::new("pages/blog.html"), source.to_string())
            .await
            .unwrap_err();

        assert!(matches!(
            err.root(),
            Error::Eval(EvalError::UndefinedVariable { name, .. }) if name == "missing"
        ));
        assert!(renderer.pages().is_empty(), "written: {:?}", renderer.pages());
    }
}

#[tokio::test]
async fn test_pages_are_written_only_after_every_page_succeeds() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(blog_runtime(), &renderer);
    pipeline.cache_template("list.html", "x".to_string()).await.unwrap();

    let source = concat!(
        "{{ paginate(\"posts\", \"list.html\", 1) }}",
        "{{ if curPage == 5 }}{{: 1 / 0 }}{{ end }}",
    );
    let err = pipeline
        .run_file(Path::new("pages/all.html"), source.to_string())
        .await
        .unwrap_err();

    assert!(matches!(err.root(), Error::Eval(EvalError::DivisionByZero { .. })));
    assert!(renderer.pages().is_empty());
}

#[tokio::test]
async fn test_unclosed_block_is_reported_at_end_of_input() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(Runtime::default(), &renderer);

    let err = pipeline
        .run_file(Path::new("pages/open.html"), "{{ for p in \"posts\" }}\nbody\n".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err.root(), Error::Parse(ParseError::UnexpectedEnd { .. })));
    assert!(renderer.pages().is_empty());
}

#[tokio::test]
async fn test_missing_content_listing_is_io_category() {
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = memory_pipeline(blog_runtime(), &renderer);
    pipeline.cache_template("list.html", "x".to_string()).await.unwrap();

    let err = pipeline
        .run_file(
            Path::new("pages/x.html"),
            "{{ paginate(\"nowhere\", \"list.html\", 2) }}".to_string(),
        )
        .await
        .unwrap_err();

    match err.root() {
        Error::Eval(e) => assert_eq!(e.category(), ErrorCategory::Io),
        other => panic!("expected evaluation error, got {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Batches
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_batch_skips_unreadable_files() {
    let dir = tempfile::tempdir().unwrap();
    let pages = dir.path().join("pages");
    std::fs::create_dir_all(&pages).unwrap();
    std::fs::write(pages.join("a.html"), "A{{: 1 }}").unwrap();
    std::fs::write(pages.join("b.html"), "B{{: 2 }}").unwrap();

    let out = dir.path().join("out");
    let renderer = Arc::new(MemoryRenderer::new());
    let pipeline = Pipeline::new(Runtime::default(), OutputPaths::new(&pages, &out))
        .with_post_processor(Arc::new(Unprocessed))
        .with_renderer(renderer.clone());

    let files = vec![pages.join("a.html"), pages.join("gone.html"), pages.join("b.html")];
    pipeline.run_batch(files, Job::Render).await.unwrap();

    assert_eq!(renderer.page(&out.join("a.html")), Some("A1".to_string()));
    assert_eq!(renderer.page(&out.join("b.html")), Some("B2".to_string()));
    assert_eq!(renderer.pages().len(), 2);
}

#[tokio::test]
async fn test_batch_stops_on_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.html"), "{{: nope }}").unwrap();

    let paths = OutputPaths::new(dir.path(), dir.path().join("out"));
    let pipeline = Pipeline::new(Runtime::default(), paths);
    let err = pipeline
        .run_batch(vec![dir.path().join("bad.html")], Job::Render)
        .await
        .unwrap_err();

    assert!(err.root().to_string().contains("undefined variable: nope"));
}

#[tokio::test]
async fn test_template_batch_keys_by_relative_path() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("templates");
    std::fs::create_dir_all(root.join("partials")).unwrap();
    std::fs::write(root.join("partials/nav.html"), "<nav>{{: title }}</nav>").unwrap();

    let runtime = Runtime::default();
    let pipeline = Pipeline::new(runtime.clone(), OutputPaths::default());
    pipeline
        .run_batch(vec![root.join("partials/nav.html")], Job::CacheTemplate { root })
        .await
        .unwrap();

    let nodes = runtime.templates().get("partials/nav.html").unwrap();
    let rendered: Vec<String> = nodes.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["\"<nav>\"", "(print title)", "\"</nav>\""]);
}
