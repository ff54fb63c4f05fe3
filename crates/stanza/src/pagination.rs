//! Pagination contexts, page-link helpers and pagination discovery

use crate::context::Context;
use crate::error::EvalError;
use crate::lexer::{Lexer, TokenKind};
use crate::value::Value;

/// Number of pages needed for `items` at `per_page` each.
///
/// Zero when there are no items or `per_page` is not positive.
pub fn page_count(items: usize, per_page: i64) -> usize {
    if items == 0 || per_page <= 0 {
        return 0;
    }
    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);
    items.div_ceil(per_page)
}

/// Context for page `cur_page` of `contents`.
///
/// The result holds `curPage`, `numPages` and `content`, a container keyed
/// `"0"`, `"1"`, ... holding this page's slice of `contents`.
pub fn build_pagination_context(
    contents: &[Context],
    cur_page: i64,
    per_page: i64,
) -> Result<Context, EvalError> {
    if per_page <= 0 {
        return Err(EvalError::InvalidArgument {
            function: "paginate".to_string(),
            message: format!("expected number of items per page to be > 0, got {}", per_page),
        });
    }
    if cur_page <= 0 {
        return Err(EvalError::InvalidArgument {
            function: "paginate".to_string(),
            message: format!("expected current page to be > 0, got {}", cur_page),
        });
    }

    let num_pages = page_count(contents.len(), per_page);
    let per = usize::try_from(per_page).unwrap_or(usize::MAX);
    let skipped = usize::try_from(cur_page - 1).unwrap_or(usize::MAX);
    let offset = skipped.saturating_mul(per).min(contents.len());
    let end = offset.saturating_add(per).min(contents.len());

    let content: Context = contents[offset..end]
        .iter()
        .enumerate()
        .map(|(i, ctx)| (i.to_string(), Value::Container(ctx.clone())))
        .collect();

    let mut page = Context::new();
    page.set("curPage", Value::Int(cur_page));
    page.set("numPages", Value::Int(num_pages as i64));
    page.set("content", Value::Container(content));
    Ok(page)
}

/// One context per page of `contents`, in page order.
pub fn build_pagination_contexts(
    contents: &[Context],
    per_page: i64,
) -> Result<Vec<Context>, EvalError> {
    let pages = page_count(contents.len(), per_page);
    (1..=pages as i64)
        .map(|page| build_pagination_context(contents, page, per_page))
        .collect()
}

fn link(page: i64, href: String) -> Value {
    let mut ctx = Context::new();
    ctx.set("page", Value::Int(page));
    ctx.set("href", Value::Str(href));
    Value::Container(ctx)
}

/// Links to up to `count` pages before `cur_page`, nearest last.
pub fn pages_before(cur_page: i64, count: i64, href: impl Fn(i64) -> String) -> Context {
    let first = cur_page.saturating_sub(count).max(1);
    (first..cur_page)
        .map(|page| (page.to_string(), link(page, href(page))))
        .collect()
}

/// Links to up to `count` pages after `cur_page`, never past `num_pages`.
pub fn pages_after(
    cur_page: i64,
    num_pages: i64,
    count: i64,
    href: impl Fn(i64) -> String,
) -> Context {
    let last = cur_page.saturating_add(count).min(num_pages);
    (cur_page.saturating_add(1)..=last)
        .map(|page| (page.to_string(), link(page, href(page))))
        .collect()
}

/// A literal `paginate("content", "template", perPage)` call found in a
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationRequest {
    /// Content path whose files are paged
    pub content_path: String,
    /// Template rendered for each page
    pub template_path: String,
    /// Items per page
    pub per_page: i64,
}

impl PaginationRequest {
    /// Scan `source` for the first literal `paginate` call.
    ///
    /// Lines that fail to lex end the scan; the real pipeline run reports
    /// the error.
    pub fn scan(source: &str) -> Option<Self> {
        let mut lexer = Lexer::new();
        let mut tokens = Vec::new();
        for line in source.split_inclusive('\n') {
            match lexer.lex_line(line) {
                Ok(line_tokens) => tokens.extend(
                    line_tokens
                        .into_iter()
                        .map(|t| t.kind)
                        .filter(|k| *k != TokenKind::EndOfLine),
                ),
                Err(_) => break,
            }
        }

        tokens.windows(8).find_map(|w| match w {
            [
                TokenKind::Identifier(name),
                TokenKind::Symbol('('),
                TokenKind::String(content),
                TokenKind::Symbol(','),
                TokenKind::String(template),
                TokenKind::Symbol(','),
                TokenKind::Number(per_page),
                TokenKind::Symbol(')'),
            ] if name == "paginate" =>
            {
                Some(PaginationRequest {
                    content_path: content.clone(),
                    template_path: template.clone(),
                    per_page: *per_page,
                })
            }
            _ => None,
        })
    }

    /// Pages to render for `items` content files; at least one.
    pub fn pages_for(&self, items: usize) -> usize {
        page_count(items, self.per_page).max(1)
    }
}
