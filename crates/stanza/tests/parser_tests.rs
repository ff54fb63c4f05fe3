//! Parser behaviour over whole documents

use stanza::*;

fn roots(src: &str) -> Vec<String> {
    Parser::parse_str(src)
        .expect("parse failed")
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn expr(src: &str) -> String {
    let nodes = roots(&format!("{{{{: {} }}}}", src));
    assert_eq!(nodes.len(), 1, "expected one print block for {src:?}");
    nodes[0].clone()
}

// ═══════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_precedence_climbs_from_logic_to_unary() {
    assert_eq!(expr("1 + 2 * 3"), "(print (+ 1 (* 2 3)))");
    assert_eq!(expr("a || b && c"), "(print (&& (|| a b) c))");
    assert_eq!(expr("1 + 2 < 4 && !done"), "(print (&& (< (+ 1 2) 4) (! done)))");
    assert_eq!(expr("-x * 2"), "(print (* (- x) 2))");
}

#[test]
fn test_binary_operators_associate_left() {
    assert_eq!(expr("10 - 3 - 2"), "(print (- (- 10 3) 2))");
    assert_eq!(expr("8 / 2 % 3"), "(print (% (/ 8 2) 3))");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(expr("(1 + 2) * 3"), "(print (* (+ 1 2) 3))");
}

#[test]
fn test_calls_and_dotted_names() {
    assert_eq!(expr("len(post.tags)"), "(print (call len (args post.tags)))");
    assert_eq!(expr("f()"), "(print (call f (args)))");
    assert_eq!(
        expr("paginate(\"posts\", 5, \"item.html\")"),
        "(print (call paginate (args \"posts\" 5 \"item.html\")))"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Blocks
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_statement_list_with_trailing_separator() {
    assert_eq!(
        roots("{{ x = 1; y = x + 1; }}"),
        vec!["(block (stmts (= x 1) (= y (+ x 1))))"]
    );
}

#[test]
fn test_block_may_span_lines() {
    assert_eq!(
        roots("{{ title = \"Home\";\n   nav = true }}\n"),
        vec!["(block (stmts (= title \"Home\") (= nav true)))", "\"\\n\""]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Control flow
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_if_without_else() {
    assert_eq!(
        roots("{{ if x }}yes{{ end }}"),
        vec!["(if if x (content \"yes\") (else_ifs) end)"]
    );
}

#[test]
fn test_if_chain_collects_else_ifs_in_order() {
    let src = "{{ if a }}A{{ else_if b }}B{{ else_if c }}C{{ else }}D{{ end }}";
    assert_eq!(
        roots(src),
        vec![
            "(if if a (content \"A\") (else_ifs b (content \"B\") c (content \"C\")) \
             (else else (content \"D\")) end)"
        ]
    );
}

#[test]
fn test_for_forms() {
    assert_eq!(
        roots("{{ for (p in posts) }}{{: p.title }}{{ end }}"),
        vec!["(for p posts (content (print p.title)))"]
    );
    assert_eq!(
        roots("{{ for p in \"posts\" }}x{{ end }}"),
        vec!["(for p \"posts\" (content \"x\"))"]
    );
}

#[test]
fn test_nested_control_flow() {
    let src = "{{ for p in items() }}\n{{ if p.draft }}{{ else }}{{: p }}{{ end }}\n{{ end }}";
    assert_eq!(
        roots(src),
        vec![
            "(for p (call items (args)) (content \"\\n\" \
             (if if p.draft (content) (else_ifs) (else else (content (print p))) end) \"\\n\"))"
        ]
    );
}

#[test]
fn test_text_around_units_is_kept() {
    assert_eq!(
        roots("<h1>{{: title }}</h1>\n"),
        vec!["\"<h1>\"", "(print title)", "\"</h1>\\n\""]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_syntax_error_names_position() {
    let err = Parser::parse_str("ok\n{{ x = = 1 }}").unwrap_err();
    match err {
        Error::Parse(ParseError::Syntax { span, .. }) => assert_eq!(span, Span::new(2, 8)),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_unclosed_if_is_unexpected_end() {
    let err = Parser::parse_str("{{ if x }}body").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::UnexpectedEnd { span }) if span == Span::new(1, 1)
    ));
}

#[test]
fn test_stray_end_is_rejected() {
    assert!(Parser::parse_str("{{ end }}").is_err());
}

#[test]
fn test_lex_errors_surface_through_parse_str() {
    let err = Parser::parse_str("{{ \"open }}").unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::UnterminatedString { .. })));
}
