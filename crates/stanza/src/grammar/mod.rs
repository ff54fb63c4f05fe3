//! Grammar symbols, productions and the LR action/goto table
//!
//! The table itself lives in [`table`] and is generated offline by
//! `scripts/gen_grammar_table.py`. It is immutable data: the parser only
//! ever reads it. The [`Rule`] variants below are declared in production
//! order, so `Rule as usize` indexes the production list.

mod table;

pub use table::TABLE_VERSION;

/// Token classes the automaton understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// `{{`
    Open,
    /// `{{:`
    PrintOpen,
    /// `}}`
    Close,
    /// Raw text inside a control-flow body
    Passthrough,
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
    /// Bare identifier
    Identifier,
    /// Dotted variable name
    VariableName,
    /// String literal
    String,
    /// Integer literal
    Number,
    /// `true` / `false`
    Bool,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `=`
    Assign,
    /// `||` `&&`
    LogicOp,
    /// Relational and equality operators
    RelOp,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*` `/` `%`
    MultOp,
    /// `!`
    Bang,
    /// End of a unit; never produced by the lexer
    EndOfInput,
}

/// Non-terminal symbols of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    /// Augmented start symbol
    Start,
    /// One top-level block, print block, if statement or for loop
    Unit,
    /// `{{ statements }}`
    Block,
    /// `{{: expr }}`
    PrintBlock,
    /// `;`-separated statements
    StatementList,
    /// Assignment or logic expression
    Expression,
    /// `a || b`, `a && b`
    LogicExpr,
    /// Relational comparison
    RelationExpr,
    /// `+` / `-`
    AddExpr,
    /// `*` / `/` / `%`
    MultExpr,
    /// `!x`, `-x`
    UnaryExpr,
    /// Literal, name, call or parenthesized expression
    Term,
    /// Simple or dotted variable reference
    VarRef,
    /// `name(args)`
    FuncCall,
    /// Optional argument list
    Args,
    /// Comma-separated arguments
    ArgList,
    /// `{{ if ... }} ... {{ end }}`
    IfStatement,
    /// `else_if` / `else` / `end` tail of an if statement
    IfRest,
    /// `{{ for x in ... }} ... {{ end }}`
    ForLoop,
    /// What a for loop iterates
    LoopInput,
    /// Body of a control-flow construct
    Content,
    /// One element of a body
    Item,
}

/// Grammar productions, in table order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Start,
    UnitBlock,
    UnitPrintBlock,
    UnitIf,
    UnitFor,
    Block,
    PrintBlock,
    StatementAppend,
    StatementTrailing,
    StatementFirst,
    Assignment,
    ExprLogic,
    Logic,
    LogicRel,
    Relation,
    RelAdd,
    Plus,
    Minus,
    AddMult,
    Mult,
    MultUnary,
    Not,
    Negate,
    UnaryTerm,
    StringLiteral,
    NumberLiteral,
    BoolLiteral,
    TermVar,
    TermCall,
    Parenthesized,
    DottedName,
    SimpleName,
    FuncCall,
    ArgsSome,
    ArgsNone,
    ArgAppend,
    ArgFirst,
    IfStatement,
    ElseIf,
    Else,
    EndIf,
    ForParenthesized,
    ForBare,
    LoopString,
    LoopVar,
    LoopCall,
    ContentAppend,
    ContentEmpty,
    ItemText,
    ItemBlock,
    ItemPrintBlock,
    ItemIf,
    ItemFor,
}

/// A grammar symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Terminal
    T(Terminal),
    /// Non-terminal
    N(NonTerminal),
}

/// One production: `lhs -> rhs`.
#[derive(Debug)]
pub struct Production {
    /// Rule identifier
    pub rule: Rule,
    /// Left-hand side
    pub lhs: NonTerminal,
    /// Right-hand side symbols
    pub rhs: &'static [Symbol],
}

/// Parser action for a (state, terminal) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Push the token and move to the state
    Shift(u16),
    /// Reduce by the rule
    Reduce(Rule),
    /// Input accepted
    Accept,
}

/// Look up the action for a state and lookahead terminal.
pub fn action(state: u16, terminal: Terminal) -> Option<Action> {
    table::ACTIONS
        .get(state as usize)?
        .iter()
        .find(|(t, _)| *t == terminal)
        .map(|(_, a)| *a)
}

/// Look up the goto state after reducing to `symbol` in `state`.
pub fn goto(state: u16, symbol: NonTerminal) -> Option<u16> {
    table::GOTOS
        .get(state as usize)?
        .iter()
        .find(|(n, _)| *n == symbol)
        .map(|(_, s)| *s)
}

/// The production for a rule.
pub fn production(rule: Rule) -> &'static Production {
    &table::PRODUCTIONS[rule as usize]
}

/// All productions, in table order.
pub fn productions() -> &'static [Production] {
    &table::PRODUCTIONS
}

/// Number of automaton states.
pub fn state_count() -> usize {
    table::ACTIONS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_index_their_productions() {
        for (i, p) in productions().iter().enumerate() {
            assert_eq!(p.rule as usize, i, "rule {:?} out of order", p.rule);
            assert_eq!(production(p.rule).lhs, p.lhs);
        }
    }

    #[test]
    fn test_tables_cover_every_state() {
        assert_eq!(table::ACTIONS.len(), table::GOTOS.len());
        assert!(state_count() > 0);
    }

    #[test]
    fn test_start_state_expects_a_block() {
        assert!(matches!(action(0, Terminal::Open), Some(Action::Shift(_))));
        assert!(matches!(action(0, Terminal::PrintOpen), Some(Action::Shift(_))));
        assert_eq!(action(0, Terminal::Identifier), None);
    }

    #[test]
    fn test_shift_and_goto_targets_in_range() {
        let n = state_count() as u16;
        for state in 0..n {
            for (_, a) in table::ACTIONS[state as usize] {
                if let Action::Shift(next) = a {
                    assert!(*next < n);
                }
            }
            for (_, next) in table::GOTOS[state as usize] {
                assert!(*next < n);
            }
        }
    }
}
