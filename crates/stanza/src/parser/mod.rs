//! Table-driven shift-reduce parser
//!
//! The parser is fed one token at a time and hands back a root node each
//! time a top-level unit completes: a block, a print block, an `if`
//! statement or a `for` loop. Passthrough text outside any block skips the
//! automaton and comes back as a text node straight away.
//!
//! A unit is complete when, right after a `}}` is shifted, the automaton
//! would accept if the input ended there. That check runs on a copy of the
//! state stack, so an `{{ if }}` head that still needs a body is left alone.

mod build;

use tracing::trace;

use crate::error::{Error, ParseError};
use crate::grammar::{self, Action, Terminal};
use crate::lexer::{Lexer, Span, Token, TokenKind};
use crate::node::ParseNode;

use build::StackEntry;

/// Incremental LR parser.
#[derive(Debug)]
pub struct Parser {
    states: Vec<u16>,
    stack: Vec<StackEntry>,
    unit_start: Option<Span>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser in the start state.
    pub fn new() -> Self {
        Self {
            states: vec![0],
            stack: Vec::new(),
            unit_start: None,
        }
    }

    /// Whether the parser is between units.
    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    /// Feed one token; returns a root node when a unit completes.
    pub fn push(&mut self, token: Token) -> Result<Option<ParseNode>, ParseError> {
        let Some(terminal) = token.terminal() else {
            return Ok(None);
        };

        if terminal == Terminal::Passthrough && self.is_idle() {
            if let TokenKind::Passthrough(text) = token.kind {
                return Ok(Some(ParseNode::text(text, token.span)));
            }
        }

        if self.is_idle() {
            self.unit_start = Some(token.span);
        }

        self.feed(terminal, token)?;

        if terminal == Terminal::Close && self.accepts_here() {
            return self.complete_unit().map(Some);
        }
        Ok(None)
    }

    /// Signal end of input; fails if a unit is still open.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        if self.is_idle() {
            return Ok(());
        }
        let span = self.unit_start.unwrap_or_default();
        self.reset();
        Err(ParseError::UnexpectedEnd { span })
    }

    /// Parse a complete token sequence into root nodes.
    pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<Vec<ParseNode>, ParseError> {
        let mut parser = Parser::new();
        let mut nodes = Vec::new();
        for token in tokens {
            if let Some(node) = parser.push(token)? {
                nodes.push(node);
            }
        }
        parser.finish()?;
        Ok(nodes)
    }

    /// Lex and parse a whole document.
    pub fn parse_str(source: &str) -> Result<Vec<ParseNode>, Error> {
        let tokens = Lexer::tokenize(source)?;
        Ok(Parser::parse(tokens)?)
    }

    fn reset(&mut self) {
        self.states.clear();
        self.states.push(0);
        self.stack.clear();
        self.unit_start = None;
    }

    fn top(&self) -> u16 {
        self.states.last().copied().unwrap_or(0)
    }

    /// Reduce as the table directs, then shift the token.
    fn feed(&mut self, terminal: Terminal, token: Token) -> Result<(), ParseError> {
        loop {
            let state = self.top();
            match grammar::action(state, terminal) {
                Some(Action::Shift(next)) => {
                    trace!(state, next, token = %token, "shift");
                    self.states.push(next);
                    self.stack.push(StackEntry::Token(token));
                    return Ok(());
                }
                Some(Action::Reduce(rule)) => self.reduce(rule, token.span)?,
                Some(Action::Accept) | None => {
                    let err = ParseError::Syntax {
                        found: token.to_string(),
                        state,
                        span: token.span,
                    };
                    self.reset();
                    return Err(err);
                }
            }
        }
    }

    fn reduce(&mut self, rule: grammar::Rule, lookahead: Span) -> Result<(), ParseError> {
        let production = grammar::production(rule);
        let n = production.rhs.len();
        if self.stack.len() < n || self.states.len() <= n {
            return Err(ParseError::MalformedNode {
                kind: "parser stack",
                reason: format!("cannot reduce {:?} with {} entries", rule, self.stack.len()),
                span: lookahead,
            });
        }

        let entries = self.stack.split_off(self.stack.len() - n);
        self.states.truncate(self.states.len() - n);

        let entry = build::reduce(rule, entries, lookahead)?;
        let state = self.top();
        let next = grammar::goto(state, production.lhs).ok_or_else(|| ParseError::MalformedNode {
            kind: "parser stack",
            reason: format!("no goto for {:?} from state {}", production.lhs, state),
            span: lookahead,
        })?;
        trace!(?rule, state, next, "reduce");
        self.states.push(next);
        self.stack.push(entry);
        Ok(())
    }

    /// Would the automaton accept if input ended now?
    fn accepts_here(&self) -> bool {
        let mut states = self.states.clone();
        loop {
            let state = states.last().copied().unwrap_or(0);
            match grammar::action(state, Terminal::EndOfInput) {
                Some(Action::Accept) => return true,
                Some(Action::Reduce(rule)) => {
                    let production = grammar::production(rule);
                    let keep = states.len().saturating_sub(production.rhs.len());
                    states.truncate(keep);
                    let top = states.last().copied().unwrap_or(0);
                    match grammar::goto(top, production.lhs) {
                        Some(next) => states.push(next),
                        None => return false,
                    }
                }
                Some(Action::Shift(_)) | None => return false,
            }
        }
    }

    /// Reduce the finished unit down to its root and reset for the next.
    fn complete_unit(&mut self) -> Result<ParseNode, ParseError> {
        let span = self.unit_start.unwrap_or_default();
        loop {
            match grammar::action(self.top(), Terminal::EndOfInput) {
                Some(Action::Reduce(rule)) => self.reduce(rule, span)?,
                Some(Action::Accept) => break,
                _ => {
                    self.reset();
                    return Err(ParseError::UnexpectedEnd { span });
                }
            }
        }

        let root = match self.stack.pop() {
            Some(StackEntry::Node(node)) if self.stack.is_empty() => node,
            _ => {
                self.reset();
                return Err(ParseError::MalformedNode {
                    kind: "unit",
                    reason: "accepted stack does not hold a single node".to_string(),
                    span,
                });
            }
        };
        self.reset();
        Ok(root)
    }
}
