//! Token types produced by the lexer

use std::fmt;

use crate::grammar::Terminal;

/// A 1-based line/column position in template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// Line number, starting at 1
    pub line: usize,
    /// Column (in characters), starting at 1
    pub column: usize,
}

impl Span {
    /// Create a span.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Operator precedence classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// `=`
    Assign,
    /// `||` `&&`
    Logic,
    /// `<` `>` `<=` `>=` `==` `!=`
    Relation,
    /// `+`
    Plus,
    /// `-` (binary subtraction or unary negation)
    Minus,
    /// `*` `/` `%`
    Mult,
    /// `!`
    Bang,
}

/// Template keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `if`
    If,
    /// `else_if`
    ElseIf,
    /// `else`
    Else,
    /// `for`
    For,
    /// `in`
    In,
    /// `end`
    End,
}

impl Keyword {
    /// Look up a keyword by its source text.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "if" => Some(Keyword::If),
            "else_if" => Some(Keyword::ElseIf),
            "else" => Some(Keyword::Else),
            "for" => Some(Keyword::For),
            "in" => Some(Keyword::In),
            "end" => Some(Keyword::End),
            _ => None,
        }
    }

    /// Source text of the keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::ElseIf => "else_if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::End => "end",
        }
    }
}

/// Block delimiter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `{{`
    Open,
    /// `{{:`
    PrintOpen,
    /// `}}`
    Close,
}

/// The payload of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// An operator with its precedence class and source text
    Operator(OpClass, String),
    /// A bare identifier
    Identifier(String),
    /// A dotted variable name, split into its parts
    VariableName(Vec<String>),
    /// A double-quoted string literal, without the quotes
    String(String),
    /// An integer literal
    Number(i64),
    /// `true` or `false`
    Bool(bool),
    /// A reserved word
    Keyword(Keyword),
    /// `(` `)` `,` `;`
    Symbol(char),
    /// A block delimiter
    BlockDelimiter(Delimiter),
    /// Raw text outside any block
    Passthrough(String),
    /// End of an input line
    EndOfLine,
}

/// A lexed token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// Where it starts
    pub span: Span,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The grammar terminal this token feeds to the parser, if any.
    ///
    /// End-of-line markers have no terminal; the parser skips them.
    pub fn terminal(&self) -> Option<Terminal> {
        let terminal = match &self.kind {
            TokenKind::Operator(class, _) => match class {
                OpClass::Assign => Terminal::Assign,
                OpClass::Logic => Terminal::LogicOp,
                OpClass::Relation => Terminal::RelOp,
                OpClass::Plus => Terminal::Plus,
                OpClass::Minus => Terminal::Minus,
                OpClass::Mult => Terminal::MultOp,
                OpClass::Bang => Terminal::Bang,
            },
            TokenKind::Identifier(_) => Terminal::Identifier,
            TokenKind::VariableName(_) => Terminal::VariableName,
            TokenKind::String(_) => Terminal::String,
            TokenKind::Number(_) => Terminal::Number,
            TokenKind::Bool(_) => Terminal::Bool,
            TokenKind::Keyword(kw) => match kw {
                Keyword::If => Terminal::If,
                Keyword::ElseIf => Terminal::ElseIf,
                Keyword::Else => Terminal::Else,
                Keyword::For => Terminal::For,
                Keyword::In => Terminal::In,
                Keyword::End => Terminal::End,
            },
            TokenKind::Symbol(c) => match c {
                '(' => Terminal::LParen,
                ')' => Terminal::RParen,
                ',' => Terminal::Comma,
                _ => Terminal::Semicolon,
            },
            TokenKind::BlockDelimiter(d) => match d {
                Delimiter::Open => Terminal::Open,
                Delimiter::PrintOpen => Terminal::PrintOpen,
                Delimiter::Close => Terminal::Close,
            },
            TokenKind::Passthrough(_) => Terminal::Passthrough,
            TokenKind::EndOfLine => return None,
        };
        Some(terminal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Operator(_, text) => write!(f, "operator '{}'", text),
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::VariableName(parts) => write!(f, "variable '{}'", parts.join(".")),
            TokenKind::String(s) => write!(f, "string \"{}\"", s),
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Bool(b) => write!(f, "'{}'", b),
            TokenKind::Keyword(kw) => write!(f, "keyword '{}'", kw.as_str()),
            TokenKind::Symbol(c) => write!(f, "'{}'", c),
            TokenKind::BlockDelimiter(Delimiter::Open) => write!(f, "'{{{{'"),
            TokenKind::BlockDelimiter(Delimiter::PrintOpen) => write!(f, "'{{{{:'"),
            TokenKind::BlockDelimiter(Delimiter::Close) => write!(f, "'}}}}'"),
            TokenKind::Passthrough(_) => write!(f, "text"),
            TokenKind::EndOfLine => write!(f, "end of line"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
