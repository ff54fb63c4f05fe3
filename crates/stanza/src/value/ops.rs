//! Operator capabilities of values
//!
//! Coercion rules:
//! - `+` adds two Ints and concatenates anything else made of Ints and Strs,
//!   so `1 + "a"` is `"1a"`.
//! - `-` `*` `/` `%` need both sides to be Ints or numeric Strs.
//! - Ordering compares Ints numerically (a numeric Str counts as an Int
//!   against an Int) and Strs by bytes.
//! - Equality additionally lets a Bool meet a Bool or `"true"` / `"false"`.
//! - Containers support no operators.

use std::cmp::Ordering;

use crate::error::{type_name, EvalError};
use crate::lexer::Span;

use super::Value;

/// Parse a numeric-looking string: the whole text must be an i64.
///
/// An optional sign and leading zeros are accepted; surrounding whitespace
/// is not.
pub fn parse_int(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Parse the literal strings `"true"` and `"false"`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn mismatch(op: &str, left: &Value, right: &Value, span: Span) -> EvalError {
    EvalError::TypeMismatch {
        op: op.to_string(),
        left: type_name(left),
        right: type_name(right),
        span,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════

impl Value {
    /// `self + rhs`
    pub fn add(self, rhs: Value, span: Span) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(b)
                .map(Value::Int)
                .ok_or(EvalError::IntegerOverflow { span }),
            (Value::Int(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
            (Value::Str(mut a), Value::Int(b)) => {
                a.push_str(&b.to_string());
                Ok(Value::Str(a))
            }
            (Value::Str(mut a), Value::Str(b)) => {
                a.push_str(&b);
                Ok(Value::Str(a))
            }
            (l, r) => Err(mismatch("+", &l, &r, span)),
        }
    }

    /// `self - rhs`
    pub fn sub(self, rhs: Value, span: Span) -> Result<Value, EvalError> {
        let (a, b) = int_operands("-", &self, &rhs, span)?;
        a.checked_sub(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { span })
    }

    /// `self * rhs`
    pub fn mul(self, rhs: Value, span: Span) -> Result<Value, EvalError> {
        let (a, b) = int_operands("*", &self, &rhs, span)?;
        a.checked_mul(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { span })
    }

    /// `self / rhs`, truncating toward zero.
    pub fn div(self, rhs: Value, span: Span) -> Result<Value, EvalError> {
        let (a, b) = int_operands("/", &self, &rhs, span)?;
        if b == 0 {
            return Err(EvalError::DivisionByZero { span });
        }
        a.checked_div(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { span })
    }

    /// `self % rhs`, with the sign of the dividend.
    pub fn rem(self, rhs: Value, span: Span) -> Result<Value, EvalError> {
        let (a, b) = int_operands("%", &self, &rhs, span)?;
        if b == 0 {
            return Err(EvalError::DivisionByZero { span });
        }
        a.checked_rem(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { span })
    }

    /// `-self`; Int only.
    pub fn negate(self, span: Span) -> Result<Value, EvalError> {
        match self {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or(EvalError::IntegerOverflow { span }),
            other => Err(EvalError::InvalidUnaryOperand {
                op: "-".to_string(),
                operand: type_name(&other),
                span,
            }),
        }
    }

    /// `!self`; Bool only.
    pub fn not(self, span: Span) -> Result<Value, EvalError> {
        match self {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => Err(EvalError::InvalidUnaryOperand {
                op: "!".to_string(),
                operand: type_name(&other),
                span,
            }),
        }
    }
}

fn int_operands(
    op: &str,
    left: &Value,
    right: &Value,
    span: Span,
) -> Result<(i64, i64), EvalError> {
    match (left.coerce_int(), right.coerce_int()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(mismatch(op, left, right, span)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Comparison
// ═══════════════════════════════════════════════════════════════════════

impl Value {
    /// Equality under the coercion rules; `op` is used for diagnostics.
    pub fn equals(&self, rhs: &Value, op: &str, span: Span) -> Result<bool, EvalError> {
        match (self, rhs) {
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            (Value::Bool(a), Value::Str(s)) | (Value::Str(s), Value::Bool(a)) => parse_bool(s)
                .map(|b| *a == b)
                .ok_or_else(|| mismatch(op, self, rhs, span)),
            _ => self.compare(rhs, op, span).map(|ord| ord == Ordering::Equal),
        }
    }

    /// Ordering under the coercion rules; `op` is used for diagnostics.
    pub fn compare(&self, rhs: &Value, op: &str, span: Span) -> Result<Ordering, EvalError> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Ok(a.as_bytes().cmp(b.as_bytes())),
            (Value::Int(a), Value::Str(s)) => parse_int(s)
                .map(|b| a.cmp(&b))
                .ok_or_else(|| mismatch(op, self, rhs, span)),
            (Value::Str(s), Value::Int(b)) => parse_int(s)
                .map(|a| a.cmp(b))
                .ok_or_else(|| mismatch(op, self, rhs, span)),
            _ => Err(mismatch(op, self, rhs, span)),
        }
    }

    /// Apply a relational operator (`==`, `!=`, `<`, `>`, `<=`, `>=`).
    pub fn relate(&self, op: &str, rhs: &Value, span: Span) -> Result<Value, EvalError> {
        let result = match op {
            "==" => self.equals(rhs, op, span)?,
            "!=" => !self.equals(rhs, op, span)?,
            "<" => self.compare(rhs, op, span)? == Ordering::Less,
            ">" => self.compare(rhs, op, span)? == Ordering::Greater,
            "<=" => self.compare(rhs, op, span)? != Ordering::Greater,
            ">=" => self.compare(rhs, op, span)? != Ordering::Less,
            _ => return Err(mismatch(op, self, rhs, span)),
        };
        Ok(Value::Bool(result))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Logical
// ═══════════════════════════════════════════════════════════════════════

impl Value {
    /// `self && rhs`
    pub fn and(&self, rhs: &Value, span: Span) -> Result<Value, EvalError> {
        let (a, b) = bool_operands("&&", self, rhs, span)?;
        Ok(Value::Bool(a && b))
    }

    /// `self || rhs`
    pub fn or(&self, rhs: &Value, span: Span) -> Result<Value, EvalError> {
        let (a, b) = bool_operands("||", self, rhs, span)?;
        Ok(Value::Bool(a || b))
    }
}

fn bool_operands(
    op: &str,
    left: &Value,
    right: &Value,
    span: Span,
) -> Result<(bool, bool), EvalError> {
    match (left.coerce_bool(), right.coerce_bool()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(mismatch(op, left, right, span)),
    }
}
