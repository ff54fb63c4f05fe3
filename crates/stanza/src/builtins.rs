//! Builtin function registry and the standard prelude

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{type_name, EvalError};
use crate::eval::Evaluator;
use crate::pagination;
use crate::value::Value;

/// Type alias for builtin function pointers
pub type BuiltinFnPtr =
    Arc<dyn Fn(&mut Evaluator, &[Value]) -> Result<Value, EvalError> + Send + Sync>;

/// Values the evaluator passes ahead of a builtin's written arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Implicit {
    /// Current page number
    CurrentPage,
    /// Number of pages of the document
    PageCount,
    /// Path of the document being evaluated
    InputPath,
}

/// A builtin function.
#[derive(Clone)]
pub struct BuiltinFn {
    /// Name templates call it by
    pub name: String,
    /// Number of written arguments (-1 for variadic)
    pub arity: i32,
    /// Arguments supplied by the evaluator, in order, before the written ones
    pub implicit: Vec<Implicit>,
    /// Implementation
    pub func: BuiltinFnPtr,
}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFn")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("implicit", &self.implicit)
            .finish()
    }
}

/// Registry of builtins, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct Builtins {
    functions: HashMap<String, BuiltinFn>,
}

impl Builtins {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard builtins.
    pub fn with_prelude() -> Self {
        let mut builtins = Self::new();
        builtins.load_prelude();
        builtins
    }

    /// Register a builtin, replacing any with the same name.
    pub fn define(&mut self, builtin: BuiltinFn) {
        self.functions.insert(builtin.name.clone(), builtin);
    }

    /// Look up a builtin.
    pub fn get(&self, name: &str) -> Option<&BuiltinFn> {
        self.functions.get(name)
    }

    /// Check if a builtin is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of registered builtins.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Load the standard prelude into this registry.
    pub fn load_prelude(&mut self) {
        // Output
        self.define(BuiltinFn {
            name: "print".to_string(),
            arity: -1, // Variadic
            implicit: Vec::new(),
            func: Arc::new(builtin_print),
        });

        self.define(BuiltinFn {
            name: "len".to_string(),
            arity: 1,
            implicit: Vec::new(),
            func: Arc::new(builtin_len),
        });

        // Inclusion
        self.define(BuiltinFn {
            name: "template".to_string(),
            arity: 1,
            implicit: Vec::new(),
            func: Arc::new(builtin_template),
        });

        // Pagination
        self.define(BuiltinFn {
            name: "paginate".to_string(),
            arity: 3,
            implicit: vec![Implicit::CurrentPage],
            func: Arc::new(builtin_paginate),
        });

        self.define(BuiltinFn {
            name: "pagesBefore".to_string(),
            arity: 1,
            implicit: vec![Implicit::CurrentPage, Implicit::InputPath],
            func: Arc::new(builtin_pages_before),
        });

        self.define(BuiltinFn {
            name: "pagesAfter".to_string(),
            arity: 1,
            implicit: vec![Implicit::CurrentPage, Implicit::PageCount, Implicit::InputPath],
            func: Arc::new(builtin_pages_after),
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Function Implementations
// ═══════════════════════════════════════════════════════════════════════

fn invalid(function: &str, message: String) -> EvalError {
    EvalError::InvalidArgument {
        function: function.to_string(),
        message,
    }
}

fn int_arg(function: &str, args: &[Value], index: usize) -> Result<i64, EvalError> {
    match args.get(index) {
        Some(v) => v.coerce_int().ok_or_else(|| {
            let message = format!("argument {} must be an int, got {}", index + 1, type_name(v));
            invalid(function, message)
        }),
        None => Err(invalid(function, format!("missing argument {}", index + 1))),
    }
}

fn str_arg<'a>(function: &str, args: &'a [Value], index: usize) -> Result<&'a str, EvalError> {
    match args.get(index) {
        Some(Value::Str(s)) => Ok(s),
        Some(v) => Err(invalid(
            function,
            format!("argument {} must be a string, got {}", index + 1, type_name(v)),
        )),
        None => Err(invalid(function, format!("missing argument {}", index + 1))),
    }
}

fn builtin_print(_ev: &mut Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    Ok(Value::Str(args.iter().map(Value::to_text).collect()))
}

fn builtin_len(_ev: &mut Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    match args.first() {
        Some(Value::Container(ctx)) => Ok(Value::Int(ctx.len() as i64)),
        Some(Value::Str(s)) => Ok(Value::Int(s.chars().count() as i64)),
        Some(other) => Err(invalid("len", format!("cannot take length of {}", type_name(other)))),
        None => Err(invalid("len", "missing argument 1".to_string())),
    }
}

fn builtin_template(ev: &mut Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    let path = str_arg("template", args, 0)?;
    let context = ev.context().clone();
    ev.include(path, context).map(Value::Str)
}

// paginate(curPage, contentPath, templatePath, perPage)
fn builtin_paginate(ev: &mut Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    let cur_page = int_arg("paginate", args, 0)?;
    let content_path = str_arg("paginate", args, 1)?;
    let template_path = str_arg("paginate", args, 2)?;
    let per_page = int_arg("paginate", args, 3)?;

    let contents = ev.exported_contexts(content_path)?;
    let page = pagination::build_pagination_context(&contents, cur_page, per_page)?;
    let context = ev.context().merge(&page);
    ev.include(template_path, context).map(Value::Str)
}

// pagesBefore(curPage, inputPath, count)
fn builtin_pages_before(ev: &mut Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    let cur_page = int_arg("pagesBefore", args, 0)?;
    let input = str_arg("pagesBefore", args, 1)?;
    let count = int_arg("pagesBefore", args, 2)?;
    let paths = &ev.document().paths;
    let links = pagination::pages_before(cur_page, count, |page| {
        paths.href(Path::new(input), page)
    });
    Ok(Value::Container(links))
}

// pagesAfter(curPage, numPages, inputPath, count)
fn builtin_pages_after(ev: &mut Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    let cur_page = int_arg("pagesAfter", args, 0)?;
    let num_pages = int_arg("pagesAfter", args, 1)?;
    let input = str_arg("pagesAfter", args, 2)?;
    let count = int_arg("pagesAfter", args, 3)?;
    let paths = &ev.document().paths;
    let links = pagination::pages_after(cur_page, num_pages, count, |page| {
        paths.href(Path::new(input), page)
    });
    Ok(Value::Container(links))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Document;
    use crate::runtime::Runtime;
    use pretty_assertions::assert_eq;

    fn evaluator() -> Evaluator {
        Evaluator::new(Runtime::default(), Document::new("page.html"))
    }

    fn call(name: &str, args: &[Value]) -> Result<Value, EvalError> {
        let builtins = Builtins::with_prelude();
        let builtin = builtins.get(name).unwrap();
        (builtin.func)(&mut evaluator(), args)
    }

    #[test]
    fn test_prelude_registers_all_builtins() {
        let builtins = Builtins::with_prelude();
        for name in ["print", "len", "template", "paginate", "pagesBefore", "pagesAfter"] {
            assert!(builtins.contains(name), "missing {}", name);
        }
        assert_eq!(builtins.len(), 6);
        assert!(Builtins::new().is_empty());
    }

    fn zero(_ev: &mut Evaluator, _args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Int(0))
    }

    #[test]
    fn test_define_replaces_by_name() {
        let mut builtins = Builtins::with_prelude();
        builtins.define(BuiltinFn {
            name: "len".to_string(),
            arity: 1,
            implicit: Vec::new(),
            func: Arc::new(zero),
        });
        assert_eq!(builtins.len(), 6);
        let len = builtins.get("len").unwrap();
        assert_eq!((len.func)(&mut evaluator(), &[Value::string("abc")]).unwrap(), Value::Int(0));
    }

    #[test]
    fn test_print_and_len() {
        assert_eq!(
            call("print", &[Value::string("n="), Value::Int(3), Value::Bool(true)]).unwrap(),
            Value::string("n=3true")
        );
        assert_eq!(call("len", &[Value::string("héllo")]).unwrap(), Value::Int(5));
        let err = call("len", &[Value::Int(5)]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::InvalidArgument { ref function, .. } if function == "len"
        ));
    }

    #[test]
    fn test_argument_kinds_are_checked() {
        let err = call(
            "paginate",
            &[Value::Int(1), Value::Int(2), Value::string("t.html"), Value::Int(3)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("argument 2 must be a string"));

        let err = call(
            "pagesBefore",
            &[Value::string("x"), Value::string("p.html"), Value::Int(1)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("argument 1 must be an int"));
    }
}
