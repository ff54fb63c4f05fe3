//! Builtin function calls

use super::Evaluator;
use crate::builtins::Implicit;
use crate::error::EvalError;
use crate::lexer::Span;
use crate::node::ParseNode;
use crate::value::Value;

impl Evaluator {
    /// Evaluate the arguments left to right and dispatch to the named
    /// builtin, with its implicit arguments in front.
    pub(super) fn eval_call(
        &mut self,
        name: &str,
        args: &[ParseNode],
        span: Span,
    ) -> Result<Value, EvalError> {
        let builtin = self
            .runtime
            .builtins()
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnknownFunction {
                name: name.to_string(),
                span,
            })?;

        if builtin.arity >= 0 && args.len() != builtin.arity as usize {
            return Err(EvalError::InvalidArgument {
                function: builtin.name.clone(),
                message: format!("expected {} arguments, got {}", builtin.arity, args.len()),
            });
        }

        let mut values = Vec::with_capacity(builtin.implicit.len() + args.len());
        for implicit in &builtin.implicit {
            values.push(self.implicit_arg(*implicit));
        }
        for arg in args {
            values.push(self.eval_value(arg)?);
        }

        (builtin.func)(self, &values)
    }

    fn implicit_arg(&self, implicit: Implicit) -> Value {
        match implicit {
            Implicit::CurrentPage => Value::Int(self.document.page.current),
            Implicit::PageCount => Value::Int(self.document.page.count),
            Implicit::InputPath => Value::Str(self.document.path.to_string_lossy().into_owned()),
        }
    }
}
