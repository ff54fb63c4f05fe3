//! Tree-walking evaluation
//!
//! An [`Evaluator`] walks parse nodes against its current [`Context`] and
//! produces text. One evaluator serves one page of one document: the
//! pipeline creates a fresh evaluator per page branch and feeds it the
//! document's nodes in order, so bindings made by an earlier block are
//! visible to every later one.
//!
//! Root-scope assignments are also written to the export store under the
//! document's path. Loop bodies and included templates run in a scoped
//! context whose bindings stay local.

mod call;
mod control;
mod expr;

use std::path::PathBuf;

use tracing::trace;

use crate::cancel::CancelToken;
use crate::context::Context;
use crate::error::EvalError;
use crate::node::{NodeKind, NodeView, ParseNode};
use crate::output::OutputPaths;
use crate::runtime::Runtime;
use crate::value::Value;

/// Page position of the document being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, starting at 1
    pub current: i64,
    /// Number of pages the document renders
    pub count: i64,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self { current: 1, count: 1 }
    }
}

/// The document an evaluator renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Input path; exports are stored under it
    pub path: PathBuf,
    /// Page being rendered
    pub page: PageInfo,
    /// Output path mapping used for page links
    pub paths: OutputPaths,
}

impl Document {
    /// A single-page document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the page position.
    pub fn with_page(mut self, current: i64, count: i64) -> Self {
        self.page = PageInfo { current, count };
        self
    }

    /// Set the output path mapping.
    pub fn with_paths(mut self, paths: OutputPaths) -> Self {
        self.paths = paths;
        self
    }
}

/// Evaluates parse nodes for one page of one document.
#[derive(Debug)]
pub struct Evaluator {
    runtime: Runtime,
    document: Document,
    context: Context,
    exporting: bool,
    depth: usize,
    interrupt: Option<CancelToken>,
}

impl Evaluator {
    /// Create an evaluator with an empty root context that exports its
    /// root-scope assignments.
    pub fn new(runtime: Runtime, document: Document) -> Self {
        Self {
            runtime,
            document,
            context: Context::new(),
            exporting: true,
            depth: 0,
            interrupt: None,
        }
    }

    /// Replace the root context.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Set whether root-scope assignments are exported.
    pub fn exporting(mut self, exporting: bool) -> Self {
        self.exporting = exporting;
        self
    }

    /// Stop with [`EvalError::Interrupted`] once `token` is raised.
    pub fn with_interrupt(mut self, token: CancelToken) -> Self {
        self.interrupt = Some(token);
        self
    }

    /// The current context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Consume the evaluator, returning its context.
    pub fn into_context(self) -> Context {
        self.context
    }

    /// The document being evaluated.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The shared runtime.
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    fn check_interrupt(&self) -> Result<(), EvalError> {
        match &self.interrupt {
            Some(token) if token.is_cancelled() => Err(EvalError::Interrupted),
            _ => Ok(()),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Rendering
    // ═══════════════════════════════════════════════════════════════════

    /// Render a node to the text it contributes to the document.
    pub fn render(&mut self, node: &ParseNode) -> Result<String, EvalError> {
        Ok(self.eval(node)?.map(|v| v.to_text()).unwrap_or_default())
    }

    /// Render nodes in order and concatenate their text.
    pub fn render_all(&mut self, nodes: &[ParseNode]) -> Result<String, EvalError> {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&self.render(node)?);
        }
        Ok(out)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Dispatch
    // ═══════════════════════════════════════════════════════════════════

    /// Evaluate a node. Assignments and other pure statements yield `None`.
    pub fn eval(&mut self, node: &ParseNode) -> Result<Option<Value>, EvalError> {
        self.check_interrupt()?;

        match node.view() {
            NodeView::Text(text) => Ok(Some(Value::string(text))),
            NodeView::Block { print, statements } => self.eval_block(print, statements).map(Some),
            NodeView::StatementList(statements) => self.eval_block(false, statements).map(Some),
            NodeView::Content(items) => self.render_all(items).map(|s| Some(Value::Str(s))),
            NodeView::If(view) => self.eval_if(&view).map(|s| Some(Value::Str(s))),
            NodeView::ElseClause(body) => self.render(body).map(|s| Some(Value::Str(s))),
            NodeView::For { var, input, body } => self
                .eval_for(var, input, body, node.span())
                .map(|s| Some(Value::Str(s))),
            NodeView::Call { name, args } => self.eval_call(name, args, node.span()).map(Some),
            NodeView::VarName(parts) => self.eval_var(parts, node.span()).map(Some),
            NodeView::Str(s) => Ok(Some(Value::string(s))),
            NodeView::Number(n) => Ok(Some(Value::Int(n))),
            NodeView::Bool(b) => Ok(Some(Value::Bool(b))),
            NodeView::Identifier(text) | NodeView::Operator(text) => Ok(Some(Value::string(text))),
            NodeView::Assignment { target, value } => {
                self.eval_assignment(target, value)?;
                Ok(None)
            }
            NodeView::Binary { left, op, right, .. } => {
                self.eval_binary(left, op, right, node.span()).map(Some)
            }
            NodeView::Unary { op, operand } => self.eval_unary(op, operand, node.span()).map(Some),
            // Only meaningful through their parent node.
            NodeView::ElseIfList(_) | NodeView::Args(_) => Ok(None),
        }
    }

    /// Evaluate a node that must produce a value.
    pub fn eval_value(&mut self, node: &ParseNode) -> Result<Value, EvalError> {
        self.eval(node)?
            .ok_or(EvalError::NoValue { span: node.span() })
    }

    fn eval_block(&mut self, print: bool, statements: &[ParseNode]) -> Result<Value, EvalError> {
        if print {
            let mut text = String::new();
            for statement in statements {
                text.push_str(&self.eval_value(statement)?.to_text());
            }
            return Ok(Value::Str(text));
        }

        let mut tail = None;
        for (i, statement) in statements.iter().enumerate() {
            let value = self.eval(statement)?;
            if i + 1 == statements.len() && matches!(statement.kind(), NodeKind::FuncCall) {
                tail = value;
            }
        }
        Ok(Value::Str(tail.map(|v| v.to_text()).unwrap_or_default()))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Scopes
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `value` at `target` in the current context, exporting it when
    /// evaluating at root scope.
    pub fn bind(&mut self, target: &[String], value: Value) {
        if self.exporting {
            self.runtime
                .exports()
                .insert(&self.document.path, target, value.clone());
        }
        self.context.insert(target, value);
    }

    /// Run `f` with `context` as the current context. Bindings made inside
    /// are local and not exported.
    fn scoped<T>(
        &mut self,
        context: Context,
        f: impl FnOnce(&mut Self) -> Result<T, EvalError>,
    ) -> Result<T, EvalError> {
        let saved = std::mem::replace(&mut self.context, context);
        let exporting = std::mem::replace(&mut self.exporting, false);
        let result = f(self);
        self.context = saved;
        self.exporting = exporting;
        result
    }

    /// Replay the cached template at `path` against `context` and return
    /// its text.
    pub fn include(&mut self, path: &str, context: Context) -> Result<String, EvalError> {
        let max_depth = self.runtime.options().max_depth;
        if self.depth >= max_depth {
            return Err(EvalError::InclusionDepthExceeded {
                depth: self.depth,
                path: path.to_string(),
            });
        }

        let nodes = self
            .runtime
            .templates()
            .get(path)
            .ok_or_else(|| EvalError::UnknownTemplate {
                path: path.to_string(),
            })?;
        trace!(template = path, nodes = nodes.len(), depth = self.depth, "including template");

        self.depth += 1;
        let result = self.scoped(context, |ev| ev.render_all(&nodes));
        self.depth -= 1;
        result
    }

    /// Exported contexts of the files listed under a content path, in
    /// listing order.
    pub fn exported_contexts(&self, content_path: &str) -> Result<Vec<Context>, EvalError> {
        let files = self
            .runtime
            .content()
            .list(content_path)
            .map_err(|e| EvalError::ContentUnavailable {
                path: content_path.to_string(),
                message: e.to_string(),
            })?;
        let exports = self.runtime.exports();
        Ok(files.iter().map(|file| exports.get(file)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::store::{ExportStore, TemplateCache};
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use std::sync::Arc;

    fn render_with(runtime: Runtime, src: &str) -> Result<String, EvalError> {
        let nodes = Parser::parse_str(src).unwrap();
        Evaluator::new(runtime, Document::new("page.html")).render_all(&nodes)
    }

    fn render(src: &str) -> String {
        render_with(Runtime::default(), src).unwrap()
    }

    #[test]
    fn test_passthrough_and_print() {
        assert_eq!(render("a {{: 1 + 2 }} b"), "a 3 b");
    }

    #[test]
    fn test_statement_block_discards_value() {
        assert_eq!(render("{{ x = 4; x * 2 }}[{{: x }}]"), "[4]");
    }

    #[test]
    fn test_statement_block_prints_tail_call() {
        assert_eq!(render("{{ x = 1; print(\"v\", x) }}"), "v1");
    }

    #[test]
    fn test_print_of_assignment_is_no_value() {
        let err = render_with(Runtime::default(), "{{: x = 1 }}").unwrap_err();
        assert!(matches!(err, EvalError::NoValue { .. }));
    }

    #[test]
    fn test_root_assignments_are_exported() {
        let runtime = Runtime::default();
        render_with(runtime.clone(), "{{ title = \"Hello\"; meta.tags = 3 }}").unwrap();
        let exported = runtime.exports().get(Path::new("page.html"));
        assert_eq!(exported.lookup("title"), Some(Value::string("Hello")));
        assert_eq!(exported.lookup("meta.tags"), Some(Value::Int(3)));
    }

    #[test]
    fn test_include_is_local_and_bounded() {
        let templates = Arc::new(TemplateCache::new());
        for node in Parser::parse_str("{{ inner = 1 }}<{{: name }}>").unwrap() {
            templates.insert("t.html", node);
        }
        for node in Parser::parse_str("{{: template(\"loop.html\") }}").unwrap() {
            templates.insert("loop.html", node);
        }
        let exports = Arc::new(ExportStore::new());
        let runtime = Runtime::new(exports.clone(), templates, Arc::new(crate::runtime::NoContent));

        let src = "{{ name = \"n\" }}{{: template(\"t.html\") }}";
        let out = render_with(runtime.clone(), src).unwrap();
        assert_eq!(out, "<n>");
        assert_eq!(exports.get(Path::new("page.html")).lookup("inner"), None);

        let err = render_with(runtime, "{{: template(\"loop.html\") }}").unwrap_err();
        assert!(matches!(err, EvalError::InclusionDepthExceeded { depth: 64, .. }));
    }

    #[test]
    fn test_interrupt_stops_evaluation() {
        let token = CancelToken::new();
        token.cancel();
        let nodes = Parser::parse_str("text").unwrap();
        let mut ev = Evaluator::new(Runtime::default(), Document::new("p")).with_interrupt(token);
        assert_eq!(ev.render_all(&nodes), Err(EvalError::Interrupted));
    }
}
