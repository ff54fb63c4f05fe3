//! Node construction for each grammar reduction

use std::vec::IntoIter;

use crate::error::ParseError;
use crate::grammar::Rule;
use crate::lexer::{Span, Token, TokenKind};
use crate::node::{ExprKind, NodeKind, ParseNode};

/// An entry on the parser's value stack.
#[derive(Debug)]
pub(super) enum StackEntry {
    /// A shifted token
    Token(Token),
    /// A reduced node
    Node(ParseNode),
    /// The partially built tail of an if statement
    Tail(IfTail),
}

/// `else_if` branches, optional else clause and the `end` identifier,
/// collected right to left as the tail productions reduce.
#[derive(Debug)]
pub(super) struct IfTail {
    else_ifs: Vec<ParseNode>,
    else_clause: Option<ParseNode>,
    end: ParseNode,
}

/// Build the stack entry for `rule` from its right-hand side entries.
pub(super) fn reduce(
    rule: Rule,
    entries: Vec<StackEntry>,
    lookahead: Span,
) -> Result<StackEntry, ParseError> {
    let span = entries.first().map(entry_span).unwrap_or(lookahead);
    let mut rhs = Rhs {
        entries: entries.into_iter(),
        rule,
        span,
    };

    let node = match rule {
        // Unit productions collapse to their only child
        Rule::Start
        | Rule::UnitBlock
        | Rule::UnitPrintBlock
        | Rule::UnitIf
        | Rule::UnitFor
        | Rule::ExprLogic
        | Rule::LogicRel
        | Rule::RelAdd
        | Rule::AddMult
        | Rule::MultUnary
        | Rule::UnaryTerm
        | Rule::TermVar
        | Rule::TermCall
        | Rule::ArgsSome
        | Rule::LoopVar
        | Rule::LoopCall
        | Rule::ItemBlock
        | Rule::ItemPrintBlock
        | Rule::ItemIf
        | Rule::ItemFor => rhs.node()?,

        Rule::Block => {
            rhs.skip()?;
            let statements = rhs.node()?;
            ParseNode::new(NodeKind::Block { print: false }, vec![statements], span)?
        }
        Rule::PrintBlock => {
            rhs.skip()?;
            let expr = rhs.node()?;
            ParseNode::new(NodeKind::Block { print: true }, vec![expr], span)?
        }

        Rule::StatementFirst => ParseNode::new(NodeKind::StatementList, vec![rhs.node()?], span)?,
        Rule::StatementAppend => {
            let list = rhs.node()?;
            rhs.skip()?;
            list.push(rhs.node()?)?
        }
        Rule::StatementTrailing => rhs.node()?,

        Rule::Assignment => {
            let target = rhs.node()?;
            rhs.skip()?;
            let value = rhs.node()?;
            ParseNode::new(NodeKind::Expression(ExprKind::Assignment), vec![target, value], span)?
        }
        Rule::Logic => rhs.binary(ExprKind::Logic)?,
        Rule::Relation => rhs.binary(ExprKind::Relation)?,
        Rule::Plus | Rule::Minus => rhs.binary(ExprKind::Add)?,
        Rule::Mult => rhs.binary(ExprKind::Mult)?,
        Rule::Not | Rule::Negate => {
            let op = rhs.operator()?;
            let operand = rhs.node()?;
            ParseNode::new(NodeKind::Expression(ExprKind::Unary), vec![op, operand], span)?
        }

        Rule::StringLiteral | Rule::LoopString => match rhs.token()? {
            Token {
                kind: TokenKind::String(s),
                span,
            } => ParseNode::string(s, span),
            other => return Err(rhs.unexpected(&other)),
        },
        Rule::NumberLiteral => match rhs.token()? {
            Token {
                kind: TokenKind::Number(n),
                span,
            } => ParseNode::number(n, span),
            other => return Err(rhs.unexpected(&other)),
        },
        Rule::BoolLiteral => match rhs.token()? {
            Token {
                kind: TokenKind::Bool(b),
                span,
            } => ParseNode::boolean(b, span),
            other => return Err(rhs.unexpected(&other)),
        },
        Rule::Parenthesized => {
            rhs.skip()?;
            rhs.node()?
        }

        Rule::DottedName => match rhs.token()? {
            Token {
                kind: TokenKind::VariableName(parts),
                span,
            } => ParseNode::var_name(parts, span),
            other => return Err(rhs.unexpected(&other)),
        },
        Rule::SimpleName => {
            let ident = rhs.identifier()?;
            let parts = match ident.kind() {
                NodeKind::Identifier(name) => vec![name.clone()],
                _ => Vec::new(),
            };
            ParseNode::var_name(parts, ident.span())
        }

        Rule::FuncCall => {
            let name = rhs.identifier()?;
            rhs.skip()?;
            let args = rhs.node()?;
            ParseNode::new(NodeKind::FuncCall, vec![name, args], span)?
        }
        Rule::ArgsNone => ParseNode::new(NodeKind::ArgsList, Vec::new(), span)?,
        Rule::ArgFirst => ParseNode::new(NodeKind::ArgsList, vec![rhs.node()?], span)?,
        Rule::ArgAppend => {
            let list = rhs.node()?;
            rhs.skip()?;
            list.push(rhs.node()?)?
        }

        Rule::IfStatement => {
            rhs.skip()?;
            let if_ident = rhs.identifier()?;
            let condition = rhs.node()?;
            rhs.skip()?;
            let body = rhs.node()?;
            let tail = rhs.tail()?;

            let mut children = vec![
                if_ident,
                condition,
                body,
                ParseNode::new(NodeKind::ElseIfList, tail.else_ifs, span)?,
            ];
            children.extend(tail.else_clause);
            children.push(tail.end);
            ParseNode::new(NodeKind::IfStatement, children, span)?
        }
        Rule::ElseIf => {
            rhs.skip()?;
            rhs.skip()?;
            let condition = rhs.node()?;
            rhs.skip()?;
            let body = rhs.node()?;
            let rest = rhs.tail()?;

            let mut else_ifs = vec![condition, body];
            else_ifs.extend(rest.else_ifs);
            return Ok(StackEntry::Tail(IfTail {
                else_ifs,
                else_clause: rest.else_clause,
                end: rest.end,
            }));
        }
        Rule::Else => {
            rhs.skip()?;
            let else_ident = rhs.identifier()?;
            rhs.skip()?;
            let body = rhs.node()?;
            rhs.skip()?;
            let end = rhs.identifier()?;
            let clause = ParseNode::new(NodeKind::ElseClause, vec![else_ident, body], span)?;
            return Ok(StackEntry::Tail(IfTail {
                else_ifs: Vec::new(),
                else_clause: Some(clause),
                end,
            }));
        }
        Rule::EndIf => {
            rhs.skip()?;
            let end = rhs.identifier()?;
            return Ok(StackEntry::Tail(IfTail {
                else_ifs: Vec::new(),
                else_clause: None,
                end,
            }));
        }

        Rule::ForParenthesized => {
            rhs.skip_n(3)?;
            let var = rhs.identifier()?;
            rhs.skip()?;
            let input = rhs.node()?;
            rhs.skip_n(2)?;
            let body = rhs.node()?;
            ParseNode::new(NodeKind::ForLoop, vec![var, input, body], span)?
        }
        Rule::ForBare => {
            rhs.skip_n(2)?;
            let var = rhs.identifier()?;
            rhs.skip()?;
            let input = rhs.node()?;
            rhs.skip()?;
            let body = rhs.node()?;
            ParseNode::new(NodeKind::ForLoop, vec![var, input, body], span)?
        }

        Rule::ContentEmpty => ParseNode::new(NodeKind::Content, Vec::new(), span)?,
        Rule::ContentAppend => {
            let content = rhs.node()?;
            content.push(rhs.node()?)?
        }
        Rule::ItemText => match rhs.token()? {
            Token {
                kind: TokenKind::Passthrough(text),
                span,
            } => ParseNode::text(text, span),
            other => return Err(rhs.unexpected(&other)),
        },
    };

    Ok(StackEntry::Node(node))
}

fn entry_span(entry: &StackEntry) -> Span {
    match entry {
        StackEntry::Token(token) => token.span,
        StackEntry::Node(node) => node.span(),
        StackEntry::Tail(tail) => tail.end.span(),
    }
}

/// Right-hand side entries of one reduction, consumed left to right.
struct Rhs {
    entries: IntoIter<StackEntry>,
    rule: Rule,
    span: Span,
}

impl Rhs {
    fn malformed(&self, reason: String) -> ParseError {
        ParseError::MalformedNode {
            kind: "reduction",
            reason: format!("{:?}: {}", self.rule, reason),
            span: self.span,
        }
    }

    fn unexpected(&self, token: &Token) -> ParseError {
        self.malformed(format!("unexpected {}", token))
    }

    fn next(&mut self) -> Result<StackEntry, ParseError> {
        self.entries
            .next()
            .ok_or_else(|| self.malformed("missing right-hand side entry".to_string()))
    }

    fn skip(&mut self) -> Result<(), ParseError> {
        self.next().map(|_| ())
    }

    fn skip_n(&mut self, n: usize) -> Result<(), ParseError> {
        (0..n).try_for_each(|_| self.skip())
    }

    fn node(&mut self) -> Result<ParseNode, ParseError> {
        match self.next()? {
            StackEntry::Node(node) => Ok(node),
            StackEntry::Token(token) => Err(self.unexpected(&token)),
            StackEntry::Tail(_) => Err(self.malformed("expected node, found if tail".to_string())),
        }
    }

    fn token(&mut self) -> Result<Token, ParseError> {
        match self.next()? {
            StackEntry::Token(token) => Ok(token),
            _ => Err(self.malformed("expected token".to_string())),
        }
    }

    fn tail(&mut self) -> Result<IfTail, ParseError> {
        match self.next()? {
            StackEntry::Tail(tail) => Ok(tail),
            _ => Err(self.malformed("expected if tail".to_string())),
        }
    }

    /// Turn a keyword or identifier token into an identifier leaf.
    fn identifier(&mut self) -> Result<ParseNode, ParseError> {
        let token = self.token()?;
        match token.kind {
            TokenKind::Identifier(name) => Ok(ParseNode::identifier(name, token.span)),
            TokenKind::Keyword(kw) => Ok(ParseNode::identifier(kw.as_str(), token.span)),
            _ => Err(self.unexpected(&token)),
        }
    }

    fn operator(&mut self) -> Result<ParseNode, ParseError> {
        let token = self.token()?;
        match token.kind {
            TokenKind::Operator(_, text) => Ok(ParseNode::operator(text, token.span)),
            _ => Err(self.unexpected(&token)),
        }
    }

    fn binary(&mut self, kind: ExprKind) -> Result<ParseNode, ParseError> {
        let left = self.node()?;
        let op = self.operator()?;
        let right = self.node()?;
        ParseNode::new(NodeKind::Expression(kind), vec![left, op, right], self.span)
    }
}
