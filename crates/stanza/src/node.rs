//! Parse tree nodes
//!
//! Every [`ParseNode`] is built through a constructor that checks its
//! children against the shape its kind requires. Children are private, so a
//! node that exists is a node whose shape is valid, and [`ParseNode::view`]
//! can hand out typed borrowed parts without re-checking.
//!
//! Fixed shapes:
//!
//! | kind | children |
//! |------|----------|
//! | `Block { print: false }` | `[StatementList]` |
//! | `Block { print: true }` | `[expr]` |
//! | `StatementList` | `[expr, ...]` (at least one) |
//! | `IfStatement` | `[Identifier(if), expr, Content, ElseIfList, ElseClause?, Identifier(end)]` |
//! | `ElseIfList` | `[expr, Content, expr, Content, ...]` |
//! | `ElseClause` | `[Identifier(else), Content]` |
//! | `ForLoop` | `[Identifier(var), StringLiteral \| VarName \| FuncCall, Content]` |
//! | `FuncCall` | `[Identifier(name), ArgsList]` |
//! | `Expression(Assignment)` | `[VarName, expr]` |
//! | `Expression(Unary)` | `[Operator, expr]` |
//! | `Expression(binary)` | `[expr, Operator, expr]` |

use std::fmt;

use crate::error::ParseError;
use crate::lexer::Span;

/// Expression node flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// `name = expr`
    Assignment,
    /// `||` `&&`
    Logic,
    /// Relational and equality comparisons
    Relation,
    /// `+` `-`
    Add,
    /// `*` `/` `%`
    Mult,
    /// `!x` `-x`
    Unary,
}

/// Node kinds, with leaf payloads inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Literal text emitted unchanged
    Text(String),
    /// Statements of a `{{ }}` block
    StatementList,
    /// Body of an if branch or for loop
    Content,
    /// A block; `print` is set for `{{: }}`
    Block {
        /// Whether the block's value is emitted
        print: bool,
    },
    /// `if` / `else_if` / `else` / `end`
    IfStatement,
    /// Flattened `else_if` conditions and bodies
    ElseIfList,
    /// `else` branch
    ElseClause,
    /// `for ident in input`
    ForLoop,
    /// Builtin function call
    FuncCall,
    /// Call arguments
    ArgsList,
    /// Variable reference, split on dots
    VarName(Vec<String>),
    /// String literal
    StringLiteral(String),
    /// Integer literal
    NumberLiteral(i64),
    /// Boolean literal
    BoolLiteral(bool),
    /// Keyword or name used structurally
    Identifier(String),
    /// Operator text inside an expression node
    Operator(String),
    /// Compound expression
    Expression(ExprKind),
}

impl NodeKind {
    /// Short name of the kind, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Text(_) => "text",
            NodeKind::StatementList => "statement list",
            NodeKind::Content => "content",
            NodeKind::Block { print: false } => "block",
            NodeKind::Block { print: true } => "print block",
            NodeKind::IfStatement => "if statement",
            NodeKind::ElseIfList => "else_if list",
            NodeKind::ElseClause => "else clause",
            NodeKind::ForLoop => "for loop",
            NodeKind::FuncCall => "function call",
            NodeKind::ArgsList => "argument list",
            NodeKind::VarName(_) => "variable name",
            NodeKind::StringLiteral(_) => "string literal",
            NodeKind::NumberLiteral(_) => "number literal",
            NodeKind::BoolLiteral(_) => "bool literal",
            NodeKind::Identifier(_) => "identifier",
            NodeKind::Operator(_) => "operator",
            NodeKind::Expression(ExprKind::Assignment) => "assignment",
            NodeKind::Expression(_) => "expression",
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Text(_)
                | NodeKind::VarName(_)
                | NodeKind::StringLiteral(_)
                | NodeKind::NumberLiteral(_)
                | NodeKind::BoolLiteral(_)
                | NodeKind::Identifier(_)
                | NodeKind::Operator(_)
        )
    }

    fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::VarName(_)
                | NodeKind::StringLiteral(_)
                | NodeKind::NumberLiteral(_)
                | NodeKind::BoolLiteral(_)
                | NodeKind::FuncCall
                | NodeKind::Expression(_)
        )
    }
}

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    kind: NodeKind,
    children: Vec<ParseNode>,
    span: Span,
}

/// Borrowed, typed view of a node's parts.
#[derive(Debug, Clone, Copy)]
pub enum NodeView<'a> {
    /// Literal text
    Text(&'a str),
    /// A block and the statements it evaluates
    Block {
        /// Whether the value is emitted
        print: bool,
        /// Statements, in order; a print block has exactly one
        statements: &'a [ParseNode],
    },
    /// Statements of a block
    StatementList(&'a [ParseNode]),
    /// Items of a body
    Content(&'a [ParseNode]),
    /// An if statement
    If(IfView<'a>),
    /// Flattened `else_if` pairs
    ElseIfList(&'a [ParseNode]),
    /// The else branch body
    ElseClause(&'a ParseNode),
    /// A for loop
    For {
        /// Loop variable
        var: &'a str,
        /// What is iterated
        input: &'a ParseNode,
        /// Loop body
        body: &'a ParseNode,
    },
    /// A function call
    Call {
        /// Function name
        name: &'a str,
        /// Argument expressions
        args: &'a [ParseNode],
    },
    /// Call arguments
    Args(&'a [ParseNode]),
    /// Variable reference
    VarName(&'a [String]),
    /// String literal
    Str(&'a str),
    /// Integer literal
    Number(i64),
    /// Boolean literal
    Bool(bool),
    /// Structural identifier
    Identifier(&'a str),
    /// Operator text
    Operator(&'a str),
    /// `target = value`
    Assignment {
        /// Dotted target name
        target: &'a [String],
        /// Right-hand side
        value: &'a ParseNode,
    },
    /// `left op right`
    Binary {
        /// Operator family
        kind: ExprKind,
        /// Left operand
        left: &'a ParseNode,
        /// Operator text
        op: &'a str,
        /// Right operand
        right: &'a ParseNode,
    },
    /// `op operand`
    Unary {
        /// Operator text
        op: &'a str,
        /// Operand
        operand: &'a ParseNode,
    },
}

/// Parts of an if statement.
#[derive(Debug, Clone, Copy)]
pub struct IfView<'a> {
    /// The `if` condition
    pub condition: &'a ParseNode,
    /// Body of the `if` branch
    pub body: &'a ParseNode,
    /// Flattened `else_if` (condition, body) pairs
    pub else_ifs: &'a [ParseNode],
    /// Body of the `else` branch, if any
    pub else_body: Option<&'a ParseNode>,
}

impl<'a> IfView<'a> {
    /// Iterate the `else_if` branches as (condition, body) pairs.
    pub fn else_if_branches(&self) -> impl Iterator<Item = (&'a ParseNode, &'a ParseNode)> {
        self.else_ifs.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }
}

impl ParseNode {
    /// Build a node, checking that the children fit the kind.
    pub fn new(kind: NodeKind, children: Vec<ParseNode>, span: Span) -> Result<Self, ParseError> {
        check_shape(&kind, &children).map_err(|reason| ParseError::MalformedNode {
            kind: kind.name(),
            reason,
            span,
        })?;
        Ok(Self {
            kind,
            children,
            span,
        })
    }

    fn leaf(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            children: Vec::new(),
            span,
        }
    }

    /// Literal text node.
    pub fn text(text: impl Into<String>, span: Span) -> Self {
        Self::leaf(NodeKind::Text(text.into()), span)
    }

    /// String literal node.
    pub fn string(value: impl Into<String>, span: Span) -> Self {
        Self::leaf(NodeKind::StringLiteral(value.into()), span)
    }

    /// Number literal node.
    pub fn number(value: i64, span: Span) -> Self {
        Self::leaf(NodeKind::NumberLiteral(value), span)
    }

    /// Bool literal node.
    pub fn boolean(value: bool, span: Span) -> Self {
        Self::leaf(NodeKind::BoolLiteral(value), span)
    }

    /// Identifier node.
    pub fn identifier(name: impl Into<String>, span: Span) -> Self {
        Self::leaf(NodeKind::Identifier(name.into()), span)
    }

    /// Operator node.
    pub fn operator(op: impl Into<String>, span: Span) -> Self {
        Self::leaf(NodeKind::Operator(op.into()), span)
    }

    /// Variable reference node.
    pub fn var_name(parts: Vec<String>, span: Span) -> Self {
        Self::leaf(NodeKind::VarName(parts), span)
    }

    /// The node's kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node's children, in source order.
    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// Position of the first token of the node.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Append a child to a list-shaped node, returning the node.
    ///
    /// Only statement lists, content and argument lists accept appends.
    pub fn push(mut self, child: ParseNode) -> Result<Self, ParseError> {
        match self.kind {
            NodeKind::StatementList | NodeKind::Content | NodeKind::ArgsList => {
                self.children.push(child);
                check_shape(&self.kind, &self.children).map_err(|reason| ParseError::MalformedNode {
                    kind: self.kind.name(),
                    reason,
                    span: self.span,
                })?;
                Ok(self)
            }
            _ => Err(ParseError::MalformedNode {
                kind: self.kind.name(),
                reason: "node does not hold a list".to_string(),
                span: self.span,
            }),
        }
    }

    /// Typed view of the node's parts.
    pub fn view(&self) -> NodeView<'_> {
        let c = &self.children;
        match &self.kind {
            NodeKind::Text(text) => NodeView::Text(text),
            NodeKind::Block { print: false } => NodeView::Block {
                print: false,
                statements: &c[0].children,
            },
            NodeKind::Block { print: true } => NodeView::Block {
                print: true,
                statements: &c[..1],
            },
            NodeKind::StatementList => NodeView::StatementList(c),
            NodeKind::Content => NodeView::Content(c),
            NodeKind::IfStatement => NodeView::If(IfView {
                condition: &c[1],
                body: &c[2],
                else_ifs: &c[3].children,
                else_body: if c.len() == 6 { Some(&c[4].children[1]) } else { None },
            }),
            NodeKind::ElseIfList => NodeView::ElseIfList(c),
            NodeKind::ElseClause => NodeView::ElseClause(&c[1]),
            NodeKind::ForLoop => NodeView::For {
                var: identifier_text(&c[0]),
                input: &c[1],
                body: &c[2],
            },
            NodeKind::FuncCall => NodeView::Call {
                name: identifier_text(&c[0]),
                args: &c[1].children,
            },
            NodeKind::ArgsList => NodeView::Args(c),
            NodeKind::VarName(parts) => NodeView::VarName(parts),
            NodeKind::StringLiteral(s) => NodeView::Str(s),
            NodeKind::NumberLiteral(n) => NodeView::Number(*n),
            NodeKind::BoolLiteral(b) => NodeView::Bool(*b),
            NodeKind::Identifier(name) => NodeView::Identifier(name),
            NodeKind::Operator(op) => NodeView::Operator(op),
            NodeKind::Expression(ExprKind::Assignment) => NodeView::Assignment {
                target: match &c[0].kind {
                    NodeKind::VarName(parts) => parts,
                    _ => &[],
                },
                value: &c[1],
            },
            NodeKind::Expression(ExprKind::Unary) => NodeView::Unary {
                op: operator_text(&c[0]),
                operand: &c[1],
            },
            NodeKind::Expression(kind) => NodeView::Binary {
                kind: *kind,
                left: &c[0],
                op: operator_text(&c[1]),
                right: &c[2],
            },
        }
    }
}

fn identifier_text(node: &ParseNode) -> &str {
    match &node.kind {
        NodeKind::Identifier(name) => name,
        _ => "",
    }
}

fn operator_text(node: &ParseNode) -> &str {
    match &node.kind {
        NodeKind::Operator(op) => op,
        _ => "",
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Shape Validation
// ═══════════════════════════════════════════════════════════════════════

fn check_shape(kind: &NodeKind, children: &[ParseNode]) -> Result<(), String> {
    if kind.is_leaf() {
        return expect_len(children, 0);
    }

    match kind {
        NodeKind::StatementList => {
            if children.is_empty() {
                return Err("expected at least one statement".to_string());
            }
            (0..children.len()).try_for_each(|i| expect_expression(children, i))
        }
        NodeKind::Content | NodeKind::ArgsList => Ok(()),
        NodeKind::Block { print: false } => {
            expect_len(children, 1)?;
            expect_kind(children, 0, |k| matches!(k, NodeKind::StatementList), "statement list")
        }
        NodeKind::Block { print: true } => {
            expect_len(children, 1)?;
            expect_expression(children, 0)
        }
        NodeKind::IfStatement => {
            if children.len() != 5 && children.len() != 6 {
                return Err(format!("expected 5 or 6 children, got {}", children.len()));
            }
            expect_keyword(children, 0, "if")?;
            expect_expression(children, 1)?;
            expect_kind(children, 2, |k| matches!(k, NodeKind::Content), "content")?;
            expect_kind(children, 3, |k| matches!(k, NodeKind::ElseIfList), "else_if list")?;
            if children.len() == 6 {
                expect_kind(children, 4, |k| matches!(k, NodeKind::ElseClause), "else clause")?;
            }
            expect_keyword(children, children.len() - 1, "end")
        }
        NodeKind::ElseIfList => {
            if children.len() % 2 != 0 {
                return Err(format!(
                    "expected condition/body pairs, got {} children",
                    children.len()
                ));
            }
            for i in (0..children.len()).step_by(2) {
                expect_expression(children, i)?;
                expect_kind(children, i + 1, |k| matches!(k, NodeKind::Content), "content")?;
            }
            Ok(())
        }
        NodeKind::ElseClause => {
            expect_len(children, 2)?;
            expect_keyword(children, 0, "else")?;
            expect_kind(children, 1, |k| matches!(k, NodeKind::Content), "content")
        }
        NodeKind::ForLoop => {
            expect_len(children, 3)?;
            expect_kind(children, 0, |k| matches!(k, NodeKind::Identifier(_)), "identifier")?;
            expect_kind(
                children,
                1,
                |k| {
                    matches!(
                        k,
                        NodeKind::StringLiteral(_) | NodeKind::VarName(_) | NodeKind::FuncCall
                    )
                },
                "loop input",
            )?;
            expect_kind(children, 2, |k| matches!(k, NodeKind::Content), "content")
        }
        NodeKind::FuncCall => {
            expect_len(children, 2)?;
            expect_kind(children, 0, |k| matches!(k, NodeKind::Identifier(_)), "identifier")?;
            expect_kind(children, 1, |k| matches!(k, NodeKind::ArgsList), "argument list")
        }
        NodeKind::Expression(ExprKind::Assignment) => {
            expect_len(children, 2)?;
            expect_kind(children, 0, |k| matches!(k, NodeKind::VarName(_)), "variable name")?;
            expect_expression(children, 1)
        }
        NodeKind::Expression(ExprKind::Unary) => {
            expect_len(children, 2)?;
            expect_kind(children, 0, |k| matches!(k, NodeKind::Operator(_)), "operator")?;
            expect_expression(children, 1)
        }
        NodeKind::Expression(_) => {
            expect_len(children, 3)?;
            expect_expression(children, 0)?;
            expect_kind(children, 1, |k| matches!(k, NodeKind::Operator(_)), "operator")?;
            expect_expression(children, 2)
        }
        _ => Ok(()),
    }
}

fn expect_len(children: &[ParseNode], len: usize) -> Result<(), String> {
    if children.len() == len {
        Ok(())
    } else {
        Err(format!("expected {} children, got {}", len, children.len()))
    }
}

fn expect_kind(
    children: &[ParseNode],
    index: usize,
    pred: impl Fn(&NodeKind) -> bool,
    what: &str,
) -> Result<(), String> {
    if pred(&children[index].kind) {
        Ok(())
    } else {
        Err(format!(
            "child {} should be {}, found {}",
            index,
            what,
            children[index].kind.name()
        ))
    }
}

fn expect_expression(children: &[ParseNode], index: usize) -> Result<(), String> {
    expect_kind(children, index, NodeKind::is_expression, "an expression")
}

fn expect_keyword(children: &[ParseNode], index: usize, word: &str) -> Result<(), String> {
    expect_kind(
        children,
        index,
        |k| matches!(k, NodeKind::Identifier(name) if name == word),
        word,
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════

/// Renders the tree as an s-expression, e.g. `(print (+ a 1))`.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = match &self.kind {
            NodeKind::Text(text) => return write!(f, "{:?}", text),
            NodeKind::VarName(parts) => return write!(f, "{}", parts.join(".")),
            NodeKind::StringLiteral(s) => return write!(f, "\"{}\"", s),
            NodeKind::NumberLiteral(n) => return write!(f, "{}", n),
            NodeKind::BoolLiteral(b) => return write!(f, "{}", b),
            NodeKind::Identifier(name) => return write!(f, "{}", name),
            NodeKind::Operator(op) => return write!(f, "{}", op),
            NodeKind::Block { print: false } => "block",
            NodeKind::Block { print: true } => "print",
            NodeKind::StatementList => "stmts",
            NodeKind::Content => "content",
            NodeKind::IfStatement => "if",
            NodeKind::ElseIfList => "else_ifs",
            NodeKind::ElseClause => "else",
            NodeKind::ForLoop => "for",
            NodeKind::FuncCall => "call",
            NodeKind::ArgsList => "args",
            NodeKind::Expression(ExprKind::Assignment) => "=",
            NodeKind::Expression(_) => {
                let (op, operands): (&str, Vec<&ParseNode>) = match self.view() {
                    NodeView::Unary { op, operand } => (op, vec![operand]),
                    NodeView::Binary { left, op, right, .. } => (op, vec![left, right]),
                    _ => ("?", Vec::new()),
                };
                write!(f, "({}", op)?;
                for operand in operands {
                    write!(f, " {}", operand)?;
                }
                return write!(f, ")");
            }
        };
        write!(f, "({}", head)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> Span {
        Span::new(1, 1)
    }

    fn content(items: Vec<ParseNode>) -> ParseNode {
        ParseNode::new(NodeKind::Content, items, at()).unwrap()
    }

    fn else_ifs(items: Vec<ParseNode>) -> ParseNode {
        ParseNode::new(NodeKind::ElseIfList, items, at()).unwrap()
    }

    #[test]
    fn test_leaf_rejects_children() {
        let err = ParseNode::new(
            NodeKind::NumberLiteral(1),
            vec![ParseNode::number(2, at())],
            at(),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::MalformedNode { kind: "number literal", .. }));
    }

    #[test]
    fn test_binary_requires_operator_in_middle() {
        let err = ParseNode::new(
            NodeKind::Expression(ExprKind::Add),
            vec![
                ParseNode::number(1, at()),
                ParseNode::number(2, at()),
                ParseNode::number(3, at()),
            ],
            at(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("child 1 should be operator"));
    }

    #[test]
    fn test_if_view_with_else() {
        let node = ParseNode::new(
            NodeKind::IfStatement,
            vec![
                ParseNode::identifier("if", at()),
                ParseNode::boolean(true, at()),
                content(vec![ParseNode::text("yes", at())]),
                else_ifs(vec![ParseNode::boolean(false, at()), content(vec![])]),
                ParseNode::new(
                    NodeKind::ElseClause,
                    vec![
                        ParseNode::identifier("else", at()),
                        content(vec![ParseNode::text("no", at())]),
                    ],
                    at(),
                )
                .unwrap(),
                ParseNode::identifier("end", at()),
            ],
            at(),
        )
        .unwrap();

        match node.view() {
            NodeView::If(view) => {
                assert_eq!(view.else_if_branches().count(), 1);
                assert_eq!(view.else_body.unwrap().to_string(), "(content \"no\")");
            }
            other => panic!("expected if view, got {:?}", other),
        }
    }

    #[test]
    fn test_if_rejects_missing_end() {
        let err = ParseNode::new(
            NodeKind::IfStatement,
            vec![
                ParseNode::identifier("if", at()),
                ParseNode::boolean(true, at()),
                content(vec![]),
                else_ifs(vec![]),
                ParseNode::identifier("fin", at()),
            ],
            at(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("should be end"));
    }

    #[test]
    fn test_else_if_list_must_pair() {
        let err = ParseNode::new(NodeKind::ElseIfList, vec![ParseNode::boolean(true, at())], at())
            .unwrap_err();
        assert!(err.to_string().contains("pairs"));
    }

    #[test]
    fn test_push_rejects_non_list() {
        let err = ParseNode::number(1, at())
            .push(ParseNode::number(2, at()))
            .unwrap_err();
        assert!(err.to_string().contains("does not hold a list"));
    }
}
