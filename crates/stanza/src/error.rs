//! Error types for lexing, parsing, evaluation and site builds

use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::Span;
use crate::value::Value;

/// Errors raised while tokenizing a line of template source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token
    #[error("unexpected character {found:?} at {span}")]
    UnexpectedChar {
        /// The offending character
        found: char,
        /// Where it was found
        span: Span,
    },

    /// A string literal with no closing quote on the same line
    #[error("unterminated string literal starting at {span}")]
    UnterminatedString {
        /// Position of the opening quote
        span: Span,
    },

    /// An integer literal that does not fit in an i64
    #[error("integer literal {text} out of range at {span}")]
    NumberOutOfRange {
        /// The literal text
        text: String,
        /// Where it was found
        span: Span,
    },
}

impl LexError {
    /// Source position of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::NumberOutOfRange { span, .. } => *span,
        }
    }
}

/// Errors raised by the shift-reduce automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No table action exists for the current state and token class
    #[error("syntax error at {span}: unexpected {found} (state {state})")]
    Syntax {
        /// Rendered form of the offending token
        found: String,
        /// Parser state when the token arrived
        state: u16,
        /// Position of the token
        span: Span,
    },

    /// The token stream ended inside an open block or statement
    #[error("unexpected end of input; block opened at {span} is not closed")]
    UnexpectedEnd {
        /// Position of the first token of the unfinished unit
        span: Span,
    },

    /// A reduction produced a node whose children do not fit its kind
    #[error("malformed {kind} node at {span}: {reason}")]
    MalformedNode {
        /// Node kind being built
        kind: &'static str,
        /// What was wrong
        reason: String,
        /// Position of the node
        span: Span,
    },
}

/// Broad classes of evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// An unresolved variable, function or template
    Name,
    /// An operator or builtin applied to incompatible values
    TypeMismatch,
    /// A collaborator failed to read input
    Io,
    /// Evaluation was stopped from outside
    Cancelled,
}

/// Errors raised while evaluating a parse tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Variable not found in the context
    #[error("undefined variable: {name} at {span}")]
    UndefinedVariable {
        /// The dotted name that failed to resolve
        name: String,
        /// Where it was referenced
        span: Span,
    },

    /// Function name not in the builtin registry
    #[error("unknown function: {name} at {span}")]
    UnknownFunction {
        /// The called name
        name: String,
        /// Where it was called
        span: Span,
    },

    /// Template path not present in the template cache
    #[error("unknown template: {path}")]
    UnknownTemplate {
        /// The requested template path
        path: String,
    },

    /// Binary operator applied to incompatible operands
    #[error("type mismatch: cannot apply '{op}' to {left} and {right} at {span}")]
    TypeMismatch {
        /// Operator text
        op: String,
        /// Left operand type
        left: &'static str,
        /// Right operand type
        right: &'static str,
        /// Position of the expression
        span: Span,
    },

    /// Unary operator applied to an unsupported operand
    #[error("type mismatch: cannot apply '{op}' to {operand} at {span}")]
    InvalidUnaryOperand {
        /// Operator text
        op: String,
        /// Operand type
        operand: &'static str,
        /// Position of the expression
        span: Span,
    },

    /// A condition that is neither a boolean nor "true"/"false"
    #[error("type mismatch: expected bool condition, got {found} at {span}")]
    NonBooleanCondition {
        /// Type of the condition value
        found: &'static str,
        /// Position of the condition
        span: Span,
    },

    /// A loop input that cannot be iterated
    #[error("type mismatch: cannot iterate over {found} at {span}")]
    NotIterable {
        /// Type of the loop input
        found: &'static str,
        /// Position of the loop
        span: Span,
    },

    /// Division or remainder by zero
    #[error("division by zero at {span}")]
    DivisionByZero {
        /// Position of the expression
        span: Span,
    },

    /// Integer arithmetic overflowed i64
    #[error("integer overflow at {span}")]
    IntegerOverflow {
        /// Position of the expression
        span: Span,
    },

    /// An expression that produced no value was used as a value
    #[error("expression produces no value at {span}")]
    NoValue {
        /// Position of the expression
        span: Span,
    },

    /// A builtin received arguments it cannot work with
    #[error("{function}: {message}")]
    InvalidArgument {
        /// Builtin name
        function: String,
        /// What was wrong
        message: String,
    },

    /// Listing the files behind a content path failed
    #[error("cannot list content {path}: {message}")]
    ContentUnavailable {
        /// The content path
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Evaluation was interrupted by cancellation
    #[error("evaluation interrupted")]
    Interrupted,

    /// Template inclusion nested deeper than the configured limit
    #[error("template inclusion depth exceeded ({depth}) while including {path}")]
    InclusionDepthExceeded {
        /// Depth reached
        depth: usize,
        /// Template being included
        path: String,
    },
}

impl EvalError {
    /// Map the error onto its broad category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalError::UndefinedVariable { .. }
            | EvalError::UnknownFunction { .. }
            | EvalError::UnknownTemplate { .. } => ErrorCategory::Name,
            EvalError::ContentUnavailable { .. } => ErrorCategory::Io,
            EvalError::Interrupted => ErrorCategory::Cancelled,
            _ => ErrorCategory::TypeMismatch,
        }
    }

    /// Check if this is a name-resolution error.
    pub fn is_name_error(&self) -> bool {
        self.category() == ErrorCategory::Name
    }

    /// Check if this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        self.category() == ErrorCategory::TypeMismatch
    }
}

/// Get a human-readable type name for a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Int(_) => "int",
        Value::Str(_) => "string",
        Value::Bool(_) => "bool",
        Value::Container(_) => "container",
    }
}

/// Main error type for stanza operations
#[derive(Error, Debug)]
pub enum Error {
    /// Tokenizing failed
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// Parsing failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Evaluation failed
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The site configuration could not be parsed
    #[error("invalid configuration in {}: {message}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A pipeline stage stopped unexpectedly
    #[error("pipeline stage '{stage}' failed: {message}")]
    Stage {
        /// Stage name
        stage: &'static str,
        /// What happened
        message: String,
    },

    /// An error raised while processing a specific input file
    #[error("{}: {source}", path.display())]
    InFile {
        /// The input file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Build an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the originating file path, unless one is already attached.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::InFile { .. } => self,
            other => Error::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// Strip any file wrapping and return the underlying error.
    pub fn root(&self) -> &Error {
        match self {
            Error::InFile { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if the underlying error is an I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self.root(), Error::Io { .. })
    }
}

/// Result type alias for stanza operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span::new(3, 7)
    }

    #[test]
    fn test_eval_error_categories() {
        let name = EvalError::UndefinedVariable {
            name: "post.title".into(),
            span: span(),
        };
        assert!(name.is_name_error());
        assert!(!name.is_type_mismatch());

        let mismatch = EvalError::TypeMismatch {
            op: "==".into(),
            left: "string",
            right: "int",
            span: span(),
        };
        assert_eq!(mismatch.category(), ErrorCategory::TypeMismatch);
    }

    #[test]
    fn test_error_display_includes_position() {
        let err = LexError::UnexpectedChar {
            found: '@',
            span: span(),
        };
        assert_eq!(err.to_string(), "unexpected character '@' at 3:7");
    }

    #[test]
    fn test_in_file_wraps_once() {
        let err = Error::from(EvalError::UnknownTemplate {
            path: "nav.html".into(),
        })
        .in_file("pages/index.md")
        .in_file("ignored.md");

        let text = err.to_string();
        assert!(text.starts_with("pages/index.md: "));
        assert!(matches!(err.root(), Error::Eval(_)));
    }

    #[test]
    fn test_is_io() {
        let err = Error::io(
            "out/index.html",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .in_file("pages/index.md");
        assert!(err.is_io());
    }
}
