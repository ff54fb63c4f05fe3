//! End-to-end evaluation: parse a document, render it against a runtime

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use stanza::*;

fn render_doc(
    runtime: Runtime,
    document: Document,
    src: &str,
) -> std::result::Result<String, EvalError> {
    let nodes = Parser::parse_str(src).expect("parse failed");
    Evaluator::new(runtime, document).render_all(&nodes)
}

fn render(src: &str) -> String {
    render_doc(Runtime::default(), Document::new("page.html"), src).unwrap()
}

fn render_err(src: &str) -> EvalError {
    render_doc(Runtime::default(), Document::new("page.html"), src).unwrap_err()
}

/// Parse `src` into the template cache under `key`.
fn cache(templates: &TemplateCache, key: &str, src: &str) {
    templates.declare(key);
    for node in Parser::parse_str(src).expect("template parse failed") {
        templates.insert(key, node);
    }
}

/// A runtime with five exported posts listed under `"posts"`.
fn blog_runtime() -> Runtime {
    let exports = Arc::new(ExportStore::new());
    let titles = ["A", "B", "C", "D", "E"];
    for (i, title) in titles.iter().enumerate() {
        exports.insert(&post_path(i), &["title"], Value::string(*title));
        exports.insert(&post_path(i), &["meta", "rank"], Value::Int(i as i64 + 1));
    }
    let listing = |path: &str| -> io::Result<Vec<PathBuf>> {
        match path {
            "posts" => Ok((0..5).map(post_path).collect()),
            other => Err(io::Error::new(io::ErrorKind::NotFound, other.to_string())),
        }
    };
    Runtime::new(exports, Arc::new(TemplateCache::new()), Arc::new(listing))
}

fn post_path(i: usize) -> PathBuf {
    PathBuf::from(format!("content/posts/{}.md", i))
}

// ═══════════════════════════════════════════════════════════════════════
// Passthrough
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_document_without_blocks_renders_unchanged() {
    let doc = "# Title\n\nSome *markdown* with } and { braces.\n";
    assert_eq!(render(doc), doc);
}

#[test]
fn test_blocks_splice_into_surrounding_text() {
    assert_eq!(
        render("{{ name = \"World\" }}Hello, {{: name }}!\nBye {{: name }}.\n"),
        "Hello, World!\nBye World.\n"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Value algebra
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_operator_results() {
    let cases = [
        ("7 / 2", "3"),
        ("0 - 7 / 2", "-3"),
        ("-7 % 3", "-1"),
        ("\"4\" * 2", "8"),
        ("\"4\" + 2", "42"),
        ("2 + \"4\"", "24"),
        ("\"a\" + \"b\"", "ab"),
        ("\"10\" > 9", "true"),
        ("\"abc\" < \"abd\"", "true"),
        ("\"true\" == true", "true"),
        ("\"yes\" != \"no\"", "true"),
        ("true && \"false\"", "false"),
        ("!(1 < 2) || 3 >= 3", "true"),
    ];
    for (expr, expected) in cases {
        assert_eq!(render(&format!("{{{{: {} }}}}", expr)), expected, "{}", expr);
    }
}

#[test]
fn test_type_mismatches_are_errors() {
    for expr in ["1 - \"a\"", "\"a\" < 1", "true + 1", "!1", "-\"x\"", "1 && true"] {
        let err = render_err(&format!("{{{{: {} }}}}", expr));
        assert!(err.is_type_mismatch(), "{} gave {:?}", expr, err);
    }
}

#[test]
fn test_arithmetic_faults() {
    assert!(matches!(render_err("{{: 1 / 0 }}"), EvalError::DivisionByZero { .. }));
    assert!(matches!(render_err("{{: 1 % 0 }}"), EvalError::DivisionByZero { .. }));
    assert!(matches!(
        render_err("{{: 9223372036854775807 + 1 }}"),
        EvalError::IntegerOverflow { .. }
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Conditionals
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_exactly_one_branch_renders() {
    let template = "{{ if a }}A{{ else_if b }}B{{ else }}C{{ end }}";
    for (a, b, expected) in [
        (true, true, "A"),
        (true, false, "A"),
        (false, true, "B"),
        (false, false, "C"),
    ] {
        let src = format!("{{{{ a = {}; b = {} }}}}{}", a, b, template);
        assert_eq!(render(&src), expected, "a = {}, b = {}", a, b);
    }
}

#[test]
fn test_string_conditions_coerce() {
    assert_eq!(render("{{ flag = \"true\" }}{{ if flag }}on{{ end }}"), "on");
    let err = render_err("{{ if \"maybe\" }}on{{ end }}");
    assert!(matches!(err, EvalError::NonBooleanCondition { found: "string", .. }));
}

// ═══════════════════════════════════════════════════════════════════════
// Loops over exports
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_for_follows_listing_order() {
    let out = render_doc(
        blog_runtime(),
        Document::new("pages/index.html"),
        "{{ for p in \"posts\" }}{{: p.meta.rank }}:{{: p.title }}{{ end }}",
    )
    .unwrap();
    assert_eq!(out, "1:A\n2:B\n3:C\n4:D\n5:E");
}

#[test]
fn test_loop_variable_does_not_leak() {
    let err = render_doc(
        blog_runtime(),
        Document::new("pages/index.html"),
        "{{ for p in \"posts\" }}{{ end }}{{: p }}",
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::UndefinedVariable { ref name, .. } if name == "p"));
}

#[test]
fn test_loop_shadowing_leaves_outer_binding() {
    let mut outer = Context::new();
    outer.set("p", Value::string("outer"));
    let nodes = Parser::parse_str("{{ for p in \"posts\" }}{{ end }}{{: p }}").unwrap();
    let mut ev = Evaluator::new(blog_runtime(), Document::new("pages/index.html"))
        .with_context(outer.clone());
    // Five empty iterations joined by newlines, then the outer binding.
    assert_eq!(ev.render_all(&nodes).unwrap(), "\n\n\n\nouter");
    assert_eq!(ev.context(), &outer);
}

// ═══════════════════════════════════════════════════════════════════════
// Exports
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_root_assignments_are_exported() {
    let runtime = Runtime::default();
    let exports = runtime.exports().clone();
    render_doc(
        runtime,
        Document::new("content/posts/hello.md"),
        "{{ title = \"Hello\"; meta.date = \"2024-01-01\" }}body\n",
    )
    .unwrap();

    let ctx = exports.get(Path::new("content/posts/hello.md"));
    assert_eq!(ctx.lookup("title"), Some(Value::string("Hello")));
    assert_eq!(ctx.lookup("meta.date"), Some(Value::string("2024-01-01")));
}

#[test]
fn test_later_assignment_overwrites_export() {
    let runtime = Runtime::default();
    let exports = runtime.exports().clone();
    render_doc(runtime, Document::new("a.md"), "{{ n = 1 }}{{ n = n + 1 }}").unwrap();
    assert_eq!(exports.get(Path::new("a.md")).lookup("n"), Some(Value::Int(2)));
}

// ═══════════════════════════════════════════════════════════════════════
// Templates
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_template_replays_against_caller_context() {
    let runtime = Runtime::default();
    cache(runtime.templates(), "item.html", "<li>{{: name }}</li>");

    let src = "{{ name = \"x\" }}{{ template(\"item.html\") }}|{{ template(\"item.html\") }}";
    let nodes = Parser::parse_str(src).unwrap();
    let out = Evaluator::new(runtime, Document::new("page.html")).render_all(&nodes).unwrap();
    assert_eq!(out, "<li>x</li>|<li>x</li>");
}

#[test]
fn test_template_bindings_stay_local() {
    let runtime = Runtime::default();
    cache(runtime.templates(), "set.html", "{{ secret = 1 }}");
    let exports = runtime.exports().clone();

    let err = render_doc(
        runtime,
        Document::new("page.html"),
        "{{ template(\"set.html\") }}{{: secret }}",
    )
    .unwrap_err();
    assert!(err.is_name_error());
    assert!(!exports.contains(Path::new("page.html")));
}

#[test]
fn test_empty_template_resolves() {
    let runtime = Runtime::default();
    runtime.templates().declare("empty.html");
    assert_eq!(
        render_doc(runtime, Document::new("p.html"), "[{{ template(\"empty.html\") }}]").unwrap(),
        "[]"
    );
}

#[test]
fn test_missing_template_is_name_error() {
    let err = render_err("{{ template(\"nope.html\") }}");
    assert!(matches!(err, EvalError::UnknownTemplate { ref path } if path == "nope.html"));
}

#[test]
fn test_self_inclusion_hits_depth_limit() {
    let runtime = Runtime::default().with_options(EvalOptions::with_max_depth(8));
    cache(runtime.templates(), "loop.html", "{{ template(\"loop.html\") }}");
    let src = "{{ template(\"loop.html\") }}";
    let err = render_doc(runtime, Document::new("p.html"), src).unwrap_err();
    assert!(matches!(err, EvalError::InclusionDepthExceeded { depth: 8, .. }));
}

// ═══════════════════════════════════════════════════════════════════════
// Pagination builtins
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_paginate_renders_current_page_slice() {
    let runtime = blog_runtime();
    cache(
        runtime.templates(),
        "list.html",
        "{{: curPage }}/{{: numPages }}:{{ for p in content }}{{: p.title }}{{ end }}",
    );
    let src = "{{ paginate(\"posts\", \"list.html\", 3) }}";

    let blog = |page| Document::new("pages/blog.html").with_page(page, 2);
    let first = render_doc(runtime.clone(), blog(1), src).unwrap();
    let second = render_doc(runtime, blog(2), src).unwrap();
    assert_eq!(first, "1/2:A\nB\nC");
    assert_eq!(second, "2/2:D\nE");
}

#[test]
fn test_paginate_rejects_non_positive_page_size() {
    let runtime = blog_runtime();
    cache(runtime.templates(), "list.html", "");
    let src = "{{ paginate(\"posts\", \"list.html\", 0) }}";
    let err = render_doc(runtime, Document::new("p.html"), src).unwrap_err();
    assert!(matches!(
        err,
        EvalError::InvalidArgument { ref function, .. } if function == "paginate"
    ));
}

#[test]
fn test_page_links_around_current_page() {
    let document = Document::new("pages/blog/index.md")
        .with_page(3, 5)
        .with_paths(OutputPaths::new("pages", "out"));
    let src = concat!(
        "{{ for l in pagesBefore(5) }}{{: l.href }}{{ end }}|",
        "{{ for l in pagesAfter(1) }}{{: l.page }}{{ end }}",
    );
    let out = render_doc(Runtime::default(), document, src).unwrap();
    assert_eq!(out, "blog/index.html\nblog/index_002.html|4");
}
