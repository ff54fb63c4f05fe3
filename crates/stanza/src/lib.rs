//! # Stanza
//!
//! A small templating language for static content.
//!
//! Source files are plain text with embedded `{{ ... }}` statement blocks
//! and `{{: ... }}` print blocks. Stanza tokenizes them line by line, parses
//! each block with a table-driven LR(1) shift-reduce parser, and evaluates
//! the resulting tree against a nested variable scope. Files can export
//! variables for other files to iterate over, include cached templates, and
//! paginate over content.
//!
//! ## Architecture
//!
//! - **Lexer**: raw text to [`Token`]s, one line at a time
//! - **Parser**: tokens to validated [`ParseNode`] trees via the [`grammar`] table
//! - **Evaluator**: nodes to text over a [`Context`], with [`Value`] operators
//!   that fail with typed errors instead of panicking
//! - **Pipeline**: the stages above as concurrent tasks over bounded
//!   channels, fanned out per page, cancelled per file
//! - **Site**: template, content and page phases over a directory tree

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod cancel;
pub mod config;
pub mod context;
pub mod error;
pub mod eval;
pub mod grammar;
pub mod lexer;
pub mod node;
pub mod output;
pub mod pagination;
pub mod parser;
pub mod pipeline;
pub mod runtime;
pub mod site;
pub mod store;
pub mod value;

// Re-export main types
pub use builtins::{BuiltinFn, BuiltinFnPtr, Builtins, Implicit};
pub use cancel::CancelToken;
pub use config::{EvalOptions, SiteConfig};
pub use context::{Context, ContextNode};
pub use error::{type_name, Error, ErrorCategory, EvalError, LexError, ParseError, Result};
pub use eval::{Document, Evaluator, PageInfo};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use node::{ExprKind, IfView, NodeKind, NodeView, ParseNode};
pub use output::OutputPaths;
pub use pagination::{
    build_pagination_context, build_pagination_contexts, page_count, PaginationRequest,
};
pub use parser::Parser;
pub use pipeline::{Job, Pipeline};
pub use runtime::{ContentSource, NoContent, Runtime};
pub use site::{
    BuildReport, FileSource, FsRenderer, MarkdownProcessor, MemoryRenderer, NullRenderer,
    PostProcessor, Renderer, Site, Unprocessed,
};
pub use store::{ExportStore, TemplateCache};
pub use value::Value;

/// Stanza version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
