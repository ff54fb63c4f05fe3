//! Post-processing of rendered text

use std::path::Path;

use pulldown_cmark::{html, Options, Parser};

/// Transforms a page's evaluated text before it is written.
pub trait PostProcessor: Send + Sync {
    /// Process the text rendered from `input`.
    fn process(&self, input: &Path, text: String) -> String;
}

/// Converts Markdown inputs (`.md`) to HTML; other inputs pass through.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownProcessor;

impl PostProcessor for MarkdownProcessor {
    fn process(&self, input: &Path, text: String) -> String {
        match input.extension().and_then(|e| e.to_str()) {
            Some("md") => markdown_to_html(&text),
            _ => text,
        }
    }
}

/// Leaves text unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unprocessed;

impl PostProcessor for Unprocessed {
    fn process(&self, _input: &Path, text: String) -> String {
        text
    }
}

/// Render Markdown to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_inputs_become_html() {
        let out = MarkdownProcessor
            .process(Path::new("posts/a.md"), "# Title\n\n*hi*\n".to_string());
        assert_eq!(out, "<h1>Title</h1>\n<p><em>hi</em></p>\n");
    }

    #[test]
    fn test_other_inputs_pass_through() {
        let text = "# not markdown".to_string();
        assert_eq!(MarkdownProcessor.process(Path::new("index.html"), text.clone()), text);
        assert_eq!(Unprocessed.process(Path::new("a.md"), text.clone()), text);
    }
}
