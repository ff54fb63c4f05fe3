//! Pipeline stage tasks
//!
//! Each stage owns its end of the bounded channels it is handed. A stage
//! that fails raises the file's cancel token *before* its senders are
//! dropped, so downstream stages always see the cancellation before they
//! see the end of their input.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinSet;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::error::{Error, EvalError, Result};
use crate::eval::Evaluator;
use crate::lexer::{Lexer, Token};
use crate::node::ParseNode;
use crate::parser::Parser;
use crate::site::{PostProcessor, Renderer};
use crate::store::TemplateCache;

/// Outcome of one stage task.
pub(super) type StageResult = Result<()>;

/// Send `item`, giving up if the file is cancelled or the consumer is gone.
async fn send<T>(tx: &Sender<T>, item: T, cancel: &CancelToken) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        sent = tx.send(item) => sent.is_ok(),
    }
}

/// Receive the next item, or `None` once the input ends or the file is
/// cancelled.
async fn recv<T>(rx: &mut Receiver<T>, cancel: &CancelToken) -> Option<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        item = rx.recv() => item,
    }
}

fn settle(result: StageResult, cancel: &CancelToken) -> StageResult {
    if result.is_err() {
        cancel.cancel();
    }
    result
}

// ═══════════════════════════════════════════════════════════════════════
// Front End
// ═══════════════════════════════════════════════════════════════════════

/// Tokenize `source` line by line.
pub(super) async fn lex(source: String, tx: Sender<Token>, cancel: CancelToken) -> StageResult {
    let result = lex_lines(&source, &tx, &cancel).await;
    settle(result, &cancel)
}

async fn lex_lines(source: &str, tx: &Sender<Token>, cancel: &CancelToken) -> StageResult {
    let mut lexer = Lexer::new();
    for line in source.split_inclusive('\n') {
        for token in lexer.lex_line(line)? {
            if !send(tx, token, cancel).await {
                return Ok(());
            }
        }
    }
    debug!(lines = lexer.line(), "lexer finished");
    Ok(())
}

/// Parse tokens into root nodes.
pub(super) async fn parse(
    mut rx: Receiver<Token>,
    tx: Sender<ParseNode>,
    cancel: CancelToken,
) -> StageResult {
    let result = parse_tokens(&mut rx, &tx, &cancel).await;
    settle(result, &cancel)
}

async fn parse_tokens(
    rx: &mut Receiver<Token>,
    tx: &Sender<ParseNode>,
    cancel: &CancelToken,
) -> StageResult {
    let mut parser = Parser::new();
    let mut roots = 0usize;
    while let Some(token) = recv(rx, cancel).await {
        if let Some(node) = parser.push(token)? {
            roots += 1;
            if !send(tx, node, cancel).await {
                return Ok(());
            }
        }
    }
    if cancel.is_cancelled() {
        return Ok(());
    }
    parser.finish()?;
    debug!(roots, "parser finished");
    Ok(())
}

/// Deliver every node, in order, to each page branch.
pub(super) async fn fan_out(
    mut rx: Receiver<ParseNode>,
    txs: Vec<Sender<ParseNode>>,
    cancel: CancelToken,
) -> StageResult {
    while let Some(node) = recv(&mut rx, &cancel).await {
        for tx in &txs {
            if !send(tx, node.clone(), &cancel).await {
                return Ok(());
            }
        }
    }
    Ok(())
}

/// Append each node to the template cache under `key`.
pub(super) async fn cache(
    mut rx: Receiver<ParseNode>,
    templates: Arc<TemplateCache>,
    key: String,
    cancel: CancelToken,
) -> StageResult {
    let mut count = 0usize;
    while let Some(node) = recv(&mut rx, &cancel).await {
        templates.insert(&key, node);
        count += 1;
    }
    debug!(template = %key, nodes = count, "template cached");
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Back End
// ═══════════════════════════════════════════════════════════════════════

/// Render each node of one page to text.
pub(super) async fn evaluate(
    evaluator: Evaluator,
    mut rx: Receiver<ParseNode>,
    tx: Sender<String>,
    cancel: CancelToken,
) -> StageResult {
    let result = evaluate_nodes(evaluator, &mut rx, &tx, &cancel).await;
    settle(result, &cancel)
}

async fn evaluate_nodes(
    mut evaluator: Evaluator,
    rx: &mut Receiver<ParseNode>,
    tx: &Sender<String>,
    cancel: &CancelToken,
) -> StageResult {
    while let Some(node) = recv(rx, cancel).await {
        let text = match evaluator.render(&node) {
            Ok(text) => text,
            Err(EvalError::Interrupted) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        if !send(tx, text, cancel).await {
            return Ok(());
        }
    }
    Ok(())
}

/// A page ready to write: its number, output path and final text.
pub(super) type FinishedPage = (i64, PathBuf, String);

/// Collect a page's text, post-process it and hand it back to the driver.
/// A cancelled page is dropped.
pub(super) async fn assemble(
    mut rx: Receiver<String>,
    page: i64,
    input: PathBuf,
    output: PathBuf,
    post: Arc<dyn PostProcessor>,
    tx: Sender<FinishedPage>,
    cancel: CancelToken,
) -> StageResult {
    let mut text = String::new();
    while let Some(chunk) = recv(&mut rx, &cancel).await {
        text.push_str(&chunk);
    }
    if cancel.is_cancelled() {
        debug!(output = %output.display(), "page cancelled, not assembled");
        return Ok(());
    }

    let text = post.process(&input, text);
    send(&tx, (page, output, text), &cancel).await;
    Ok(())
}

/// Write a file's pages in page order, stopping at the first failure.
pub(super) async fn write_pages(
    mut pages: Vec<FinishedPage>,
    renderer: &dyn Renderer,
) -> StageResult {
    pages.sort_by_key(|(page, _, _)| *page);
    for (_, output, text) in pages {
        renderer
            .render(&output, text)
            .await
            .map_err(|e| Error::io(&output, e))?;
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Error Merge
// ═══════════════════════════════════════════════════════════════════════

/// Wait for every stage of one file. The first failure raises `cancel`
/// and is the one reported; later failures are dropped.
pub(super) async fn merge(mut stages: JoinSet<StageResult>, cancel: &CancelToken) -> StageResult {
    let mut first = None;
    while let Some(joined) = stages.join_next().await {
        let result = joined.unwrap_or_else(|e| {
            Err(Error::Stage {
                stage: "pipeline",
                message: e.to_string(),
            })
        });
        if let Err(e) = result {
            cancel.cancel();
            first.get_or_insert(e);
        }
    }
    match first {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
