//! Variables, operators and assignment

use super::Evaluator;
use crate::error::{type_name, EvalError};
use crate::lexer::Span;
use crate::node::ParseNode;
use crate::value::Value;

impl Evaluator {
    pub(super) fn eval_var(&self, parts: &[String], span: Span) -> Result<Value, EvalError> {
        self.context
            .at(parts)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: parts.join("."),
                span,
            })
    }

    pub(super) fn eval_assignment(
        &mut self,
        target: &[String],
        value: &ParseNode,
    ) -> Result<(), EvalError> {
        let value = self.eval_value(value)?;
        self.bind(target, value);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binary Operators
    // ═══════════════════════════════════════════════════════════════════

    pub(super) fn eval_binary(
        &mut self,
        left: &ParseNode,
        op: &str,
        right: &ParseNode,
        span: Span,
    ) -> Result<Value, EvalError> {
        // Both sides are always evaluated, including for && and ||.
        let lhs = self.eval_value(left)?;
        let rhs = self.eval_value(right)?;

        match op {
            "+" => lhs.add(rhs, span),
            "-" => lhs.sub(rhs, span),
            "*" => lhs.mul(rhs, span),
            "/" => lhs.div(rhs, span),
            "%" => lhs.rem(rhs, span),
            "&&" => lhs.and(&rhs, span),
            "||" => lhs.or(&rhs, span),
            _ => lhs.relate(op, &rhs, span),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Unary Operators
    // ═══════════════════════════════════════════════════════════════════

    pub(super) fn eval_unary(
        &mut self,
        op: &str,
        operand: &ParseNode,
        span: Span,
    ) -> Result<Value, EvalError> {
        let value = self.eval_value(operand)?;
        match op {
            "!" => value.not(span),
            "-" => value.negate(span),
            _ => Err(EvalError::InvalidUnaryOperand {
                op: op.to_string(),
                operand: type_name(&value),
                span,
            }),
        }
    }
}
