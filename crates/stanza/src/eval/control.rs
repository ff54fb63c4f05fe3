//! Conditionals and loops

use super::Evaluator;
use crate::context::Context;
use crate::error::{type_name, EvalError};
use crate::lexer::Span;
use crate::node::{IfView, NodeView, ParseNode};
use crate::value::Value;

// ═══════════════════════════════════════════════════════════════════════
// if / else_if / else
// ═══════════════════════════════════════════════════════════════════════

impl Evaluator {
    /// Render the first branch whose condition holds. Only that branch's
    /// body is evaluated; with no match and no `else` the result is empty.
    pub(super) fn eval_if(&mut self, view: &IfView<'_>) -> Result<String, EvalError> {
        if self.condition(view.condition)? {
            return self.render(view.body);
        }

        for (condition, body) in view.else_if_branches() {
            if self.condition(condition)? {
                return self.render(body);
            }
        }

        match view.else_body {
            Some(body) => self.render(body),
            None => Ok(String::new()),
        }
    }

    fn condition(&mut self, node: &ParseNode) -> Result<bool, EvalError> {
        let value = self.eval_value(node)?;
        value.coerce_bool().ok_or(EvalError::NonBooleanCondition {
            found: type_name(&value),
            span: node.span(),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// for ... in
// ═══════════════════════════════════════════════════════════════════════

impl Evaluator {
    /// Render `body` once per item of `input` with `var` bound to the item,
    /// joining the iterations with newlines.
    pub(super) fn eval_for(
        &mut self,
        var: &str,
        input: &ParseNode,
        body: &ParseNode,
        span: Span,
    ) -> Result<String, EvalError> {
        let items = self.loop_items(input, span)?;

        let mut outputs = Vec::with_capacity(items.len());
        for item in items {
            self.check_interrupt()?;
            let mut binding = Context::new();
            binding.set(var, item);
            let iteration = self.context.merge(&binding);
            outputs.push(self.scoped(iteration, |ev| ev.render(body))?);
        }
        Ok(outputs.join("\n"))
    }

    fn loop_items(&mut self, input: &ParseNode, span: Span) -> Result<Vec<Value>, EvalError> {
        let value = match input.view() {
            NodeView::Str(path) => return self.content_items(path),
            _ => self.eval_value(input)?,
        };

        match value {
            Value::Container(ctx) => Ok(ctx.values().collect()),
            Value::Str(path) => self.content_items(&path),
            other => Err(EvalError::NotIterable {
                found: type_name(&other),
                span,
            }),
        }
    }

    fn content_items(&self, path: &str) -> Result<Vec<Value>, EvalError> {
        Ok(self
            .exported_contexts(path)?
            .into_iter()
            .map(Value::Container)
            .collect())
    }
}
