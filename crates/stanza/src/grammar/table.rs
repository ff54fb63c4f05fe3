// Generated by scripts/gen_grammar_table.py. Do not edit by hand.

use super::{Action, NonTerminal, Production, Rule, Symbol, Terminal};

/// Version of the generated table; bumped whenever the grammar changes.
pub const TABLE_VERSION: u32 = 1;

pub(super) static PRODUCTIONS: [Production; 53] = [
    Production {
        rule: Rule::Start,
        lhs: NonTerminal::Start,
        rhs: &[Symbol::N(NonTerminal::Unit)],
    },
    Production {
        rule: Rule::UnitBlock,
        lhs: NonTerminal::Unit,
        rhs: &[Symbol::N(NonTerminal::Block)],
    },
    Production {
        rule: Rule::UnitPrintBlock,
        lhs: NonTerminal::Unit,
        rhs: &[Symbol::N(NonTerminal::PrintBlock)],
    },
    Production {
        rule: Rule::UnitIf,
        lhs: NonTerminal::Unit,
        rhs: &[Symbol::N(NonTerminal::IfStatement)],
    },
    Production {
        rule: Rule::UnitFor,
        lhs: NonTerminal::Unit,
        rhs: &[Symbol::N(NonTerminal::ForLoop)],
    },
    Production {
        rule: Rule::Block,
        lhs: NonTerminal::Block,
        rhs: &[
            Symbol::T(Terminal::Open),
            Symbol::N(NonTerminal::StatementList),
            Symbol::T(Terminal::Close),
        ],
    },
    Production {
        rule: Rule::PrintBlock,
        lhs: NonTerminal::PrintBlock,
        rhs: &[
            Symbol::T(Terminal::PrintOpen),
            Symbol::N(NonTerminal::Expression),
            Symbol::T(Terminal::Close),
        ],
    },
    Production {
        rule: Rule::StatementAppend,
        lhs: NonTerminal::StatementList,
        rhs: &[
            Symbol::N(NonTerminal::StatementList),
            Symbol::T(Terminal::Semicolon),
            Symbol::N(NonTerminal::Expression),
        ],
    },
    Production {
        rule: Rule::StatementTrailing,
        lhs: NonTerminal::StatementList,
        rhs: &[Symbol::N(NonTerminal::StatementList), Symbol::T(Terminal::Semicolon)],
    },
    Production {
        rule: Rule::StatementFirst,
        lhs: NonTerminal::StatementList,
        rhs: &[Symbol::N(NonTerminal::Expression)],
    },
    Production {
        rule: Rule::Assignment,
        lhs: NonTerminal::Expression,
        rhs: &[
            Symbol::N(NonTerminal::VarRef),
            Symbol::T(Terminal::Assign),
            Symbol::N(NonTerminal::Expression),
        ],
    },
    Production {
        rule: Rule::ExprLogic,
        lhs: NonTerminal::Expression,
        rhs: &[Symbol::N(NonTerminal::LogicExpr)],
    },
    Production {
        rule: Rule::Logic,
        lhs: NonTerminal::LogicExpr,
        rhs: &[
            Symbol::N(NonTerminal::LogicExpr),
            Symbol::T(Terminal::LogicOp),
            Symbol::N(NonTerminal::RelationExpr),
        ],
    },
    Production {
        rule: Rule::LogicRel,
        lhs: NonTerminal::LogicExpr,
        rhs: &[Symbol::N(NonTerminal::RelationExpr)],
    },
    Production {
        rule: Rule::Relation,
        lhs: NonTerminal::RelationExpr,
        rhs: &[
            Symbol::N(NonTerminal::RelationExpr),
            Symbol::T(Terminal::RelOp),
            Symbol::N(NonTerminal::AddExpr),
        ],
    },
    Production {
        rule: Rule::RelAdd,
        lhs: NonTerminal::RelationExpr,
        rhs: &[Symbol::N(NonTerminal::AddExpr)],
    },
    Production {
        rule: Rule::Plus,
        lhs: NonTerminal::AddExpr,
        rhs: &[
            Symbol::N(NonTerminal::AddExpr),
            Symbol::T(Terminal::Plus),
            Symbol::N(NonTerminal::MultExpr),
        ],
    },
    Production {
        rule: Rule::Minus,
        lhs: NonTerminal::AddExpr,
        rhs: &[
            Symbol::N(NonTerminal::AddExpr),
            Symbol::T(Terminal::Minus),
            Symbol::N(NonTerminal::MultExpr),
        ],
    },
    Production {
        rule: Rule::AddMult,
        lhs: NonTerminal::AddExpr,
        rhs: &[Symbol::N(NonTerminal::MultExpr)],
    },
    Production {
        rule: Rule::Mult,
        lhs: NonTerminal::MultExpr,
        rhs: &[
            Symbol::N(NonTerminal::MultExpr),
            Symbol::T(Terminal::MultOp),
            Symbol::N(NonTerminal::UnaryExpr),
        ],
    },
    Production {
        rule: Rule::MultUnary,
        lhs: NonTerminal::MultExpr,
        rhs: &[Symbol::N(NonTerminal::UnaryExpr)],
    },
    Production {
        rule: Rule::Not,
        lhs: NonTerminal::UnaryExpr,
        rhs: &[Symbol::T(Terminal::Bang), Symbol::N(NonTerminal::UnaryExpr)],
    },
    Production {
        rule: Rule::Negate,
        lhs: NonTerminal::UnaryExpr,
        rhs: &[Symbol::T(Terminal::Minus), Symbol::N(NonTerminal::UnaryExpr)],
    },
    Production {
        rule: Rule::UnaryTerm,
        lhs: NonTerminal::UnaryExpr,
        rhs: &[Symbol::N(NonTerminal::Term)],
    },
    Production {
        rule: Rule::StringLiteral,
        lhs: NonTerminal::Term,
        rhs: &[Symbol::T(Terminal::String)],
    },
    Production {
        rule: Rule::NumberLiteral,
        lhs: NonTerminal::Term,
        rhs: &[Symbol::T(Terminal::Number)],
    },
    Production {
        rule: Rule::BoolLiteral,
        lhs: NonTerminal::Term,
        rhs: &[Symbol::T(Terminal::Bool)],
    },
    Production {
        rule: Rule::TermVar,
        lhs: NonTerminal::Term,
        rhs: &[Symbol::N(NonTerminal::VarRef)],
    },
    Production {
        rule: Rule::TermCall,
        lhs: NonTerminal::Term,
        rhs: &[Symbol::N(NonTerminal::FuncCall)],
    },
    Production {
        rule: Rule::Parenthesized,
        lhs: NonTerminal::Term,
        rhs: &[
            Symbol::T(Terminal::LParen),
            Symbol::N(NonTerminal::Expression),
            Symbol::T(Terminal::RParen),
        ],
    },
    Production {
        rule: Rule::DottedName,
        lhs: NonTerminal::VarRef,
        rhs: &[Symbol::T(Terminal::VariableName)],
    },
    Production {
        rule: Rule::SimpleName,
        lhs: NonTerminal::VarRef,
        rhs: &[Symbol::T(Terminal::Identifier)],
    },
    Production {
        rule: Rule::FuncCall,
        lhs: NonTerminal::FuncCall,
        rhs: &[
            Symbol::T(Terminal::Identifier),
            Symbol::T(Terminal::LParen),
            Symbol::N(NonTerminal::Args),
            Symbol::T(Terminal::RParen),
        ],
    },
    Production {
        rule: Rule::ArgsSome,
        lhs: NonTerminal::Args,
        rhs: &[Symbol::N(NonTerminal::ArgList)],
    },
    Production {
        rule: Rule::ArgsNone,
        lhs: NonTerminal::Args,
        rhs: &[],
    },
    Production {
        rule: Rule::ArgAppend,
        lhs: NonTerminal::ArgList,
        rhs: &[
            Symbol::N(NonTerminal::ArgList),
            Symbol::T(Terminal::Comma),
            Symbol::N(NonTerminal::Expression),
        ],
    },
    Production {
        rule: Rule::ArgFirst,
        lhs: NonTerminal::ArgList,
        rhs: &[Symbol::N(NonTerminal::Expression)],
    },
    Production {
        rule: Rule::IfStatement,
        lhs: NonTerminal::IfStatement,
        rhs: &[
            Symbol::T(Terminal::Open),
            Symbol::T(Terminal::If),
            Symbol::N(NonTerminal::Expression),
            Symbol::T(Terminal::Close),
            Symbol::N(NonTerminal::Content),
            Symbol::N(NonTerminal::IfRest),
        ],
    },
    Production {
        rule: Rule::ElseIf,
        lhs: NonTerminal::IfRest,
        rhs: &[
            Symbol::T(Terminal::Open),
            Symbol::T(Terminal::ElseIf),
            Symbol::N(NonTerminal::Expression),
            Symbol::T(Terminal::Close),
            Symbol::N(NonTerminal::Content),
            Symbol::N(NonTerminal::IfRest),
        ],
    },
    Production {
        rule: Rule::Else,
        lhs: NonTerminal::IfRest,
        rhs: &[
            Symbol::T(Terminal::Open),
            Symbol::T(Terminal::Else),
            Symbol::T(Terminal::Close),
            Symbol::N(NonTerminal::Content),
            Symbol::T(Terminal::Open),
            Symbol::T(Terminal::End),
            Symbol::T(Terminal::Close),
        ],
    },
    Production {
        rule: Rule::EndIf,
        lhs: NonTerminal::IfRest,
        rhs: &[Symbol::T(Terminal::Open), Symbol::T(Terminal::End), Symbol::T(Terminal::Close)],
    },
    Production {
        rule: Rule::ForParenthesized,
        lhs: NonTerminal::ForLoop,
        rhs: &[
            Symbol::T(Terminal::Open),
            Symbol::T(Terminal::For),
            Symbol::T(Terminal::LParen),
            Symbol::T(Terminal::Identifier),
            Symbol::T(Terminal::In),
            Symbol::N(NonTerminal::LoopInput),
            Symbol::T(Terminal::RParen),
            Symbol::T(Terminal::Close),
            Symbol::N(NonTerminal::Content),
            Symbol::T(Terminal::Open),
            Symbol::T(Terminal::End),
            Symbol::T(Terminal::Close),
        ],
    },
    Production {
        rule: Rule::ForBare,
        lhs: NonTerminal::ForLoop,
        rhs: &[
            Symbol::T(Terminal::Open),
            Symbol::T(Terminal::For),
            Symbol::T(Terminal::Identifier),
            Symbol::T(Terminal::In),
            Symbol::N(NonTerminal::LoopInput),
            Symbol::T(Terminal::Close),
            Symbol::N(NonTerminal::Content),
            Symbol::T(Terminal::Open),
            Symbol::T(Terminal::End),
            Symbol::T(Terminal::Close),
        ],
    },
    Production {
        rule: Rule::LoopString,
        lhs: NonTerminal::LoopInput,
        rhs: &[Symbol::T(Terminal::String)],
    },
    Production {
        rule: Rule::LoopVar,
        lhs: NonTerminal::LoopInput,
        rhs: &[Symbol::N(NonTerminal::VarRef)],
    },
    Production {
        rule: Rule::LoopCall,
        lhs: NonTerminal::LoopInput,
        rhs: &[Symbol::N(NonTerminal::FuncCall)],
    },
    Production {
        rule: Rule::ContentAppend,
        lhs: NonTerminal::Content,
        rhs: &[Symbol::N(NonTerminal::Content), Symbol::N(NonTerminal::Item)],
    },
    Production {
        rule: Rule::ContentEmpty,
        lhs: NonTerminal::Content,
        rhs: &[],
    },
    Production {
        rule: Rule::ItemText,
        lhs: NonTerminal::Item,
        rhs: &[Symbol::T(Terminal::Passthrough)],
    },
    Production {
        rule: Rule::ItemBlock,
        lhs: NonTerminal::Item,
        rhs: &[Symbol::N(NonTerminal::Block)],
    },
    Production {
        rule: Rule::ItemPrintBlock,
        lhs: NonTerminal::Item,
        rhs: &[Symbol::N(NonTerminal::PrintBlock)],
    },
    Production {
        rule: Rule::ItemIf,
        lhs: NonTerminal::Item,
        rhs: &[Symbol::N(NonTerminal::IfStatement)],
    },
    Production {
        rule: Rule::ItemFor,
        lhs: NonTerminal::Item,
        rhs: &[Symbol::N(NonTerminal::ForLoop)],
    },
];

pub(super) static ACTIONS: [&[(Terminal, Action)]; 102] = [
    // state 0
    &[
        (Terminal::Open, Action::Shift(1)),
        (Terminal::PrintOpen, Action::Shift(2)),
    ],
    // state 1
    &[
        (Terminal::If, Action::Shift(50)),
        (Terminal::For, Action::Shift(51)),
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 2
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 3
    &[
        (Terminal::EndOfInput, Action::Accept),
    ],
    // state 4
    &[
        (Terminal::EndOfInput, Action::Reduce(Rule::UnitBlock)),
    ],
    // state 5
    &[
        (Terminal::EndOfInput, Action::Reduce(Rule::UnitPrintBlock)),
    ],
    // state 6
    &[
        (Terminal::EndOfInput, Action::Reduce(Rule::UnitIf)),
    ],
    // state 7
    &[
        (Terminal::EndOfInput, Action::Reduce(Rule::UnitFor)),
    ],
    // state 8
    &[
        (Terminal::Close, Action::Reduce(Rule::SimpleName)),
        (Terminal::LParen, Action::Shift(30)),
        (Terminal::RParen, Action::Reduce(Rule::SimpleName)),
        (Terminal::Comma, Action::Reduce(Rule::SimpleName)),
        (Terminal::Semicolon, Action::Reduce(Rule::SimpleName)),
        (Terminal::Assign, Action::Reduce(Rule::SimpleName)),
        (Terminal::LogicOp, Action::Reduce(Rule::SimpleName)),
        (Terminal::RelOp, Action::Reduce(Rule::SimpleName)),
        (Terminal::Plus, Action::Reduce(Rule::SimpleName)),
        (Terminal::Minus, Action::Reduce(Rule::SimpleName)),
        (Terminal::MultOp, Action::Reduce(Rule::SimpleName)),
    ],
    // state 9
    &[
        (Terminal::Close, Action::Reduce(Rule::DottedName)),
        (Terminal::RParen, Action::Reduce(Rule::DottedName)),
        (Terminal::Comma, Action::Reduce(Rule::DottedName)),
        (Terminal::Semicolon, Action::Reduce(Rule::DottedName)),
        (Terminal::Assign, Action::Reduce(Rule::DottedName)),
        (Terminal::LogicOp, Action::Reduce(Rule::DottedName)),
        (Terminal::RelOp, Action::Reduce(Rule::DottedName)),
        (Terminal::Plus, Action::Reduce(Rule::DottedName)),
        (Terminal::Minus, Action::Reduce(Rule::DottedName)),
        (Terminal::MultOp, Action::Reduce(Rule::DottedName)),
    ],
    // state 10
    &[
        (Terminal::Close, Action::Reduce(Rule::StringLiteral)),
        (Terminal::RParen, Action::Reduce(Rule::StringLiteral)),
        (Terminal::Comma, Action::Reduce(Rule::StringLiteral)),
        (Terminal::Semicolon, Action::Reduce(Rule::StringLiteral)),
        (Terminal::LogicOp, Action::Reduce(Rule::StringLiteral)),
        (Terminal::RelOp, Action::Reduce(Rule::StringLiteral)),
        (Terminal::Plus, Action::Reduce(Rule::StringLiteral)),
        (Terminal::Minus, Action::Reduce(Rule::StringLiteral)),
        (Terminal::MultOp, Action::Reduce(Rule::StringLiteral)),
    ],
    // state 11
    &[
        (Terminal::Close, Action::Reduce(Rule::NumberLiteral)),
        (Terminal::RParen, Action::Reduce(Rule::NumberLiteral)),
        (Terminal::Comma, Action::Reduce(Rule::NumberLiteral)),
        (Terminal::Semicolon, Action::Reduce(Rule::NumberLiteral)),
        (Terminal::LogicOp, Action::Reduce(Rule::NumberLiteral)),
        (Terminal::RelOp, Action::Reduce(Rule::NumberLiteral)),
        (Terminal::Plus, Action::Reduce(Rule::NumberLiteral)),
        (Terminal::Minus, Action::Reduce(Rule::NumberLiteral)),
        (Terminal::MultOp, Action::Reduce(Rule::NumberLiteral)),
    ],
    // state 12
    &[
        (Terminal::Close, Action::Reduce(Rule::BoolLiteral)),
        (Terminal::RParen, Action::Reduce(Rule::BoolLiteral)),
        (Terminal::Comma, Action::Reduce(Rule::BoolLiteral)),
        (Terminal::Semicolon, Action::Reduce(Rule::BoolLiteral)),
        (Terminal::LogicOp, Action::Reduce(Rule::BoolLiteral)),
        (Terminal::RelOp, Action::Reduce(Rule::BoolLiteral)),
        (Terminal::Plus, Action::Reduce(Rule::BoolLiteral)),
        (Terminal::Minus, Action::Reduce(Rule::BoolLiteral)),
        (Terminal::MultOp, Action::Reduce(Rule::BoolLiteral)),
    ],
    // state 13
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 14
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 15
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 16
    &[
        (Terminal::Close, Action::Shift(49)),
    ],
    // state 17
    &[
        (Terminal::Close, Action::Reduce(Rule::ExprLogic)),
        (Terminal::RParen, Action::Reduce(Rule::ExprLogic)),
        (Terminal::Comma, Action::Reduce(Rule::ExprLogic)),
        (Terminal::Semicolon, Action::Reduce(Rule::ExprLogic)),
        (Terminal::LogicOp, Action::Shift(43)),
    ],
    // state 18
    &[
        (Terminal::Close, Action::Reduce(Rule::LogicRel)),
        (Terminal::RParen, Action::Reduce(Rule::LogicRel)),
        (Terminal::Comma, Action::Reduce(Rule::LogicRel)),
        (Terminal::Semicolon, Action::Reduce(Rule::LogicRel)),
        (Terminal::LogicOp, Action::Reduce(Rule::LogicRel)),
        (Terminal::RelOp, Action::Shift(41)),
    ],
    // state 19
    &[
        (Terminal::Close, Action::Reduce(Rule::RelAdd)),
        (Terminal::RParen, Action::Reduce(Rule::RelAdd)),
        (Terminal::Comma, Action::Reduce(Rule::RelAdd)),
        (Terminal::Semicolon, Action::Reduce(Rule::RelAdd)),
        (Terminal::LogicOp, Action::Reduce(Rule::RelAdd)),
        (Terminal::RelOp, Action::Reduce(Rule::RelAdd)),
        (Terminal::Plus, Action::Shift(37)),
        (Terminal::Minus, Action::Shift(38)),
    ],
    // state 20
    &[
        (Terminal::Close, Action::Reduce(Rule::AddMult)),
        (Terminal::RParen, Action::Reduce(Rule::AddMult)),
        (Terminal::Comma, Action::Reduce(Rule::AddMult)),
        (Terminal::Semicolon, Action::Reduce(Rule::AddMult)),
        (Terminal::LogicOp, Action::Reduce(Rule::AddMult)),
        (Terminal::RelOp, Action::Reduce(Rule::AddMult)),
        (Terminal::Plus, Action::Reduce(Rule::AddMult)),
        (Terminal::Minus, Action::Reduce(Rule::AddMult)),
        (Terminal::MultOp, Action::Shift(27)),
    ],
    // state 21
    &[
        (Terminal::Close, Action::Reduce(Rule::MultUnary)),
        (Terminal::RParen, Action::Reduce(Rule::MultUnary)),
        (Terminal::Comma, Action::Reduce(Rule::MultUnary)),
        (Terminal::Semicolon, Action::Reduce(Rule::MultUnary)),
        (Terminal::LogicOp, Action::Reduce(Rule::MultUnary)),
        (Terminal::RelOp, Action::Reduce(Rule::MultUnary)),
        (Terminal::Plus, Action::Reduce(Rule::MultUnary)),
        (Terminal::Minus, Action::Reduce(Rule::MultUnary)),
        (Terminal::MultOp, Action::Reduce(Rule::MultUnary)),
    ],
    // state 22
    &[
        (Terminal::Close, Action::Reduce(Rule::UnaryTerm)),
        (Terminal::RParen, Action::Reduce(Rule::UnaryTerm)),
        (Terminal::Comma, Action::Reduce(Rule::UnaryTerm)),
        (Terminal::Semicolon, Action::Reduce(Rule::UnaryTerm)),
        (Terminal::LogicOp, Action::Reduce(Rule::UnaryTerm)),
        (Terminal::RelOp, Action::Reduce(Rule::UnaryTerm)),
        (Terminal::Plus, Action::Reduce(Rule::UnaryTerm)),
        (Terminal::Minus, Action::Reduce(Rule::UnaryTerm)),
        (Terminal::MultOp, Action::Reduce(Rule::UnaryTerm)),
    ],
    // state 23
    &[
        (Terminal::Close, Action::Reduce(Rule::TermVar)),
        (Terminal::RParen, Action::Reduce(Rule::TermVar)),
        (Terminal::Comma, Action::Reduce(Rule::TermVar)),
        (Terminal::Semicolon, Action::Reduce(Rule::TermVar)),
        (Terminal::Assign, Action::Shift(25)),
        (Terminal::LogicOp, Action::Reduce(Rule::TermVar)),
        (Terminal::RelOp, Action::Reduce(Rule::TermVar)),
        (Terminal::Plus, Action::Reduce(Rule::TermVar)),
        (Terminal::Minus, Action::Reduce(Rule::TermVar)),
        (Terminal::MultOp, Action::Reduce(Rule::TermVar)),
    ],
    // state 24
    &[
        (Terminal::Close, Action::Reduce(Rule::TermCall)),
        (Terminal::RParen, Action::Reduce(Rule::TermCall)),
        (Terminal::Comma, Action::Reduce(Rule::TermCall)),
        (Terminal::Semicolon, Action::Reduce(Rule::TermCall)),
        (Terminal::LogicOp, Action::Reduce(Rule::TermCall)),
        (Terminal::RelOp, Action::Reduce(Rule::TermCall)),
        (Terminal::Plus, Action::Reduce(Rule::TermCall)),
        (Terminal::Minus, Action::Reduce(Rule::TermCall)),
        (Terminal::MultOp, Action::Reduce(Rule::TermCall)),
    ],
    // state 25
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 26
    &[
        (Terminal::Close, Action::Reduce(Rule::Assignment)),
        (Terminal::RParen, Action::Reduce(Rule::Assignment)),
        (Terminal::Comma, Action::Reduce(Rule::Assignment)),
        (Terminal::Semicolon, Action::Reduce(Rule::Assignment)),
    ],
    // state 27
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 28
    &[
        (Terminal::Close, Action::Reduce(Rule::Mult)),
        (Terminal::RParen, Action::Reduce(Rule::Mult)),
        (Terminal::Comma, Action::Reduce(Rule::Mult)),
        (Terminal::Semicolon, Action::Reduce(Rule::Mult)),
        (Terminal::LogicOp, Action::Reduce(Rule::Mult)),
        (Terminal::RelOp, Action::Reduce(Rule::Mult)),
        (Terminal::Plus, Action::Reduce(Rule::Mult)),
        (Terminal::Minus, Action::Reduce(Rule::Mult)),
        (Terminal::MultOp, Action::Reduce(Rule::Mult)),
    ],
    // state 29
    &[
        (Terminal::Close, Action::Reduce(Rule::TermVar)),
        (Terminal::RParen, Action::Reduce(Rule::TermVar)),
        (Terminal::Comma, Action::Reduce(Rule::TermVar)),
        (Terminal::Semicolon, Action::Reduce(Rule::TermVar)),
        (Terminal::LogicOp, Action::Reduce(Rule::TermVar)),
        (Terminal::RelOp, Action::Reduce(Rule::TermVar)),
        (Terminal::Plus, Action::Reduce(Rule::TermVar)),
        (Terminal::Minus, Action::Reduce(Rule::TermVar)),
        (Terminal::MultOp, Action::Reduce(Rule::TermVar)),
    ],
    // state 30
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::RParen, Action::Reduce(Rule::ArgsNone)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 31
    &[
        (Terminal::RParen, Action::Reduce(Rule::ArgFirst)),
        (Terminal::Comma, Action::Reduce(Rule::ArgFirst)),
    ],
    // state 32
    &[
        (Terminal::RParen, Action::Shift(36)),
    ],
    // state 33
    &[
        (Terminal::RParen, Action::Reduce(Rule::ArgsSome)),
        (Terminal::Comma, Action::Shift(34)),
    ],
    // state 34
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 35
    &[
        (Terminal::RParen, Action::Reduce(Rule::ArgAppend)),
        (Terminal::Comma, Action::Reduce(Rule::ArgAppend)),
    ],
    // state 36
    &[
        (Terminal::Close, Action::Reduce(Rule::FuncCall)),
        (Terminal::RParen, Action::Reduce(Rule::FuncCall)),
        (Terminal::Comma, Action::Reduce(Rule::FuncCall)),
        (Terminal::Semicolon, Action::Reduce(Rule::FuncCall)),
        (Terminal::LogicOp, Action::Reduce(Rule::FuncCall)),
        (Terminal::RelOp, Action::Reduce(Rule::FuncCall)),
        (Terminal::Plus, Action::Reduce(Rule::FuncCall)),
        (Terminal::Minus, Action::Reduce(Rule::FuncCall)),
        (Terminal::MultOp, Action::Reduce(Rule::FuncCall)),
    ],
    // state 37
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 38
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 39
    &[
        (Terminal::Close, Action::Reduce(Rule::Minus)),
        (Terminal::RParen, Action::Reduce(Rule::Minus)),
        (Terminal::Comma, Action::Reduce(Rule::Minus)),
        (Terminal::Semicolon, Action::Reduce(Rule::Minus)),
        (Terminal::LogicOp, Action::Reduce(Rule::Minus)),
        (Terminal::RelOp, Action::Reduce(Rule::Minus)),
        (Terminal::Plus, Action::Reduce(Rule::Minus)),
        (Terminal::Minus, Action::Reduce(Rule::Minus)),
        (Terminal::MultOp, Action::Shift(27)),
    ],
    // state 40
    &[
        (Terminal::Close, Action::Reduce(Rule::Plus)),
        (Terminal::RParen, Action::Reduce(Rule::Plus)),
        (Terminal::Comma, Action::Reduce(Rule::Plus)),
        (Terminal::Semicolon, Action::Reduce(Rule::Plus)),
        (Terminal::LogicOp, Action::Reduce(Rule::Plus)),
        (Terminal::RelOp, Action::Reduce(Rule::Plus)),
        (Terminal::Plus, Action::Reduce(Rule::Plus)),
        (Terminal::Minus, Action::Reduce(Rule::Plus)),
        (Terminal::MultOp, Action::Shift(27)),
    ],
    // state 41
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 42
    &[
        (Terminal::Close, Action::Reduce(Rule::Relation)),
        (Terminal::RParen, Action::Reduce(Rule::Relation)),
        (Terminal::Comma, Action::Reduce(Rule::Relation)),
        (Terminal::Semicolon, Action::Reduce(Rule::Relation)),
        (Terminal::LogicOp, Action::Reduce(Rule::Relation)),
        (Terminal::RelOp, Action::Reduce(Rule::Relation)),
        (Terminal::Plus, Action::Shift(37)),
        (Terminal::Minus, Action::Shift(38)),
    ],
    // state 43
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 44
    &[
        (Terminal::Close, Action::Reduce(Rule::Logic)),
        (Terminal::RParen, Action::Reduce(Rule::Logic)),
        (Terminal::Comma, Action::Reduce(Rule::Logic)),
        (Terminal::Semicolon, Action::Reduce(Rule::Logic)),
        (Terminal::LogicOp, Action::Reduce(Rule::Logic)),
        (Terminal::RelOp, Action::Shift(41)),
    ],
    // state 45
    &[
        (Terminal::Close, Action::Reduce(Rule::Not)),
        (Terminal::RParen, Action::Reduce(Rule::Not)),
        (Terminal::Comma, Action::Reduce(Rule::Not)),
        (Terminal::Semicolon, Action::Reduce(Rule::Not)),
        (Terminal::LogicOp, Action::Reduce(Rule::Not)),
        (Terminal::RelOp, Action::Reduce(Rule::Not)),
        (Terminal::Plus, Action::Reduce(Rule::Not)),
        (Terminal::Minus, Action::Reduce(Rule::Not)),
        (Terminal::MultOp, Action::Reduce(Rule::Not)),
    ],
    // state 46
    &[
        (Terminal::Close, Action::Reduce(Rule::Negate)),
        (Terminal::RParen, Action::Reduce(Rule::Negate)),
        (Terminal::Comma, Action::Reduce(Rule::Negate)),
        (Terminal::Semicolon, Action::Reduce(Rule::Negate)),
        (Terminal::LogicOp, Action::Reduce(Rule::Negate)),
        (Terminal::RelOp, Action::Reduce(Rule::Negate)),
        (Terminal::Plus, Action::Reduce(Rule::Negate)),
        (Terminal::Minus, Action::Reduce(Rule::Negate)),
        (Terminal::MultOp, Action::Reduce(Rule::Negate)),
    ],
    // state 47
    &[
        (Terminal::RParen, Action::Shift(48)),
    ],
    // state 48
    &[
        (Terminal::Close, Action::Reduce(Rule::Parenthesized)),
        (Terminal::RParen, Action::Reduce(Rule::Parenthesized)),
        (Terminal::Comma, Action::Reduce(Rule::Parenthesized)),
        (Terminal::Semicolon, Action::Reduce(Rule::Parenthesized)),
        (Terminal::LogicOp, Action::Reduce(Rule::Parenthesized)),
        (Terminal::RelOp, Action::Reduce(Rule::Parenthesized)),
        (Terminal::Plus, Action::Reduce(Rule::Parenthesized)),
        (Terminal::Minus, Action::Reduce(Rule::Parenthesized)),
        (Terminal::MultOp, Action::Reduce(Rule::Parenthesized)),
    ],
    // state 49
    &[
        (Terminal::Open, Action::Reduce(Rule::PrintBlock)),
        (Terminal::PrintOpen, Action::Reduce(Rule::PrintBlock)),
        (Terminal::Passthrough, Action::Reduce(Rule::PrintBlock)),
        (Terminal::EndOfInput, Action::Reduce(Rule::PrintBlock)),
    ],
    // state 50
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 51
    &[
        (Terminal::Identifier, Action::Shift(57)),
        (Terminal::LParen, Action::Shift(58)),
    ],
    // state 52
    &[
        (Terminal::Close, Action::Shift(54)),
        (Terminal::Semicolon, Action::Shift(55)),
    ],
    // state 53
    &[
        (Terminal::Close, Action::Reduce(Rule::StatementFirst)),
        (Terminal::Semicolon, Action::Reduce(Rule::StatementFirst)),
    ],
    // state 54
    &[
        (Terminal::Open, Action::Reduce(Rule::Block)),
        (Terminal::PrintOpen, Action::Reduce(Rule::Block)),
        (Terminal::Passthrough, Action::Reduce(Rule::Block)),
        (Terminal::EndOfInput, Action::Reduce(Rule::Block)),
    ],
    // state 55
    &[
        (Terminal::Close, Action::Reduce(Rule::StatementTrailing)),
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Semicolon, Action::Reduce(Rule::StatementTrailing)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 56
    &[
        (Terminal::Close, Action::Reduce(Rule::StatementAppend)),
        (Terminal::Semicolon, Action::Reduce(Rule::StatementAppend)),
    ],
    // state 57
    &[
        (Terminal::In, Action::Shift(77)),
    ],
    // state 58
    &[
        (Terminal::Identifier, Action::Shift(59)),
    ],
    // state 59
    &[
        (Terminal::In, Action::Shift(60)),
    ],
    // state 60
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(61)),
    ],
    // state 61
    &[
        (Terminal::Close, Action::Reduce(Rule::LoopString)),
        (Terminal::RParen, Action::Reduce(Rule::LoopString)),
    ],
    // state 62
    &[
        (Terminal::Close, Action::Reduce(Rule::LoopVar)),
        (Terminal::RParen, Action::Reduce(Rule::LoopVar)),
    ],
    // state 63
    &[
        (Terminal::Close, Action::Reduce(Rule::LoopCall)),
        (Terminal::RParen, Action::Reduce(Rule::LoopCall)),
    ],
    // state 64
    &[
        (Terminal::RParen, Action::Shift(65)),
    ],
    // state 65
    &[
        (Terminal::Close, Action::Shift(66)),
    ],
    // state 66
    &[
        (Terminal::Open, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::Passthrough, Action::Reduce(Rule::ContentEmpty)),
    ],
    // state 67
    &[
        (Terminal::Open, Action::Shift(68)),
        (Terminal::PrintOpen, Action::Shift(2)),
        (Terminal::Passthrough, Action::Shift(69)),
    ],
    // state 68
    &[
        (Terminal::If, Action::Shift(50)),
        (Terminal::For, Action::Shift(51)),
        (Terminal::End, Action::Shift(75)),
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 69
    &[
        (Terminal::Open, Action::Reduce(Rule::ItemText)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ItemText)),
        (Terminal::Passthrough, Action::Reduce(Rule::ItemText)),
    ],
    // state 70
    &[
        (Terminal::Open, Action::Reduce(Rule::ItemBlock)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ItemBlock)),
        (Terminal::Passthrough, Action::Reduce(Rule::ItemBlock)),
    ],
    // state 71
    &[
        (Terminal::Open, Action::Reduce(Rule::ItemPrintBlock)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ItemPrintBlock)),
        (Terminal::Passthrough, Action::Reduce(Rule::ItemPrintBlock)),
    ],
    // state 72
    &[
        (Terminal::Open, Action::Reduce(Rule::ItemIf)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ItemIf)),
        (Terminal::Passthrough, Action::Reduce(Rule::ItemIf)),
    ],
    // state 73
    &[
        (Terminal::Open, Action::Reduce(Rule::ItemFor)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ItemFor)),
        (Terminal::Passthrough, Action::Reduce(Rule::ItemFor)),
    ],
    // state 74
    &[
        (Terminal::Open, Action::Reduce(Rule::ContentAppend)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ContentAppend)),
        (Terminal::Passthrough, Action::Reduce(Rule::ContentAppend)),
    ],
    // state 75
    &[
        (Terminal::Close, Action::Shift(76)),
    ],
    // state 76
    &[
        (Terminal::Open, Action::Reduce(Rule::ForParenthesized)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ForParenthesized)),
        (Terminal::Passthrough, Action::Reduce(Rule::ForParenthesized)),
        (Terminal::EndOfInput, Action::Reduce(Rule::ForParenthesized)),
    ],
    // state 77
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(61)),
    ],
    // state 78
    &[
        (Terminal::Close, Action::Shift(79)),
    ],
    // state 79
    &[
        (Terminal::Open, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::Passthrough, Action::Reduce(Rule::ContentEmpty)),
    ],
    // state 80
    &[
        (Terminal::Open, Action::Shift(81)),
        (Terminal::PrintOpen, Action::Shift(2)),
        (Terminal::Passthrough, Action::Shift(69)),
    ],
    // state 81
    &[
        (Terminal::If, Action::Shift(50)),
        (Terminal::For, Action::Shift(51)),
        (Terminal::End, Action::Shift(82)),
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 82
    &[
        (Terminal::Close, Action::Shift(83)),
    ],
    // state 83
    &[
        (Terminal::Open, Action::Reduce(Rule::ForBare)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ForBare)),
        (Terminal::Passthrough, Action::Reduce(Rule::ForBare)),
        (Terminal::EndOfInput, Action::Reduce(Rule::ForBare)),
    ],
    // state 84
    &[
        (Terminal::Close, Action::Shift(85)),
    ],
    // state 85
    &[
        (Terminal::Open, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::Passthrough, Action::Reduce(Rule::ContentEmpty)),
    ],
    // state 86
    &[
        (Terminal::Open, Action::Shift(87)),
        (Terminal::PrintOpen, Action::Shift(2)),
        (Terminal::Passthrough, Action::Shift(69)),
    ],
    // state 87
    &[
        (Terminal::If, Action::Shift(50)),
        (Terminal::ElseIf, Action::Shift(89)),
        (Terminal::Else, Action::Shift(90)),
        (Terminal::For, Action::Shift(51)),
        (Terminal::End, Action::Shift(91)),
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 88
    &[
        (Terminal::Open, Action::Reduce(Rule::IfStatement)),
        (Terminal::PrintOpen, Action::Reduce(Rule::IfStatement)),
        (Terminal::Passthrough, Action::Reduce(Rule::IfStatement)),
        (Terminal::EndOfInput, Action::Reduce(Rule::IfStatement)),
    ],
    // state 89
    &[
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 90
    &[
        (Terminal::Close, Action::Shift(93)),
    ],
    // state 91
    &[
        (Terminal::Close, Action::Shift(92)),
    ],
    // state 92
    &[
        (Terminal::Open, Action::Reduce(Rule::EndIf)),
        (Terminal::PrintOpen, Action::Reduce(Rule::EndIf)),
        (Terminal::Passthrough, Action::Reduce(Rule::EndIf)),
        (Terminal::EndOfInput, Action::Reduce(Rule::EndIf)),
    ],
    // state 93
    &[
        (Terminal::Open, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::Passthrough, Action::Reduce(Rule::ContentEmpty)),
    ],
    // state 94
    &[
        (Terminal::Open, Action::Shift(95)),
        (Terminal::PrintOpen, Action::Shift(2)),
        (Terminal::Passthrough, Action::Shift(69)),
    ],
    // state 95
    &[
        (Terminal::If, Action::Shift(50)),
        (Terminal::For, Action::Shift(51)),
        (Terminal::End, Action::Shift(96)),
        (Terminal::Identifier, Action::Shift(8)),
        (Terminal::VariableName, Action::Shift(9)),
        (Terminal::String, Action::Shift(10)),
        (Terminal::Number, Action::Shift(11)),
        (Terminal::Bool, Action::Shift(12)),
        (Terminal::LParen, Action::Shift(13)),
        (Terminal::Minus, Action::Shift(14)),
        (Terminal::Bang, Action::Shift(15)),
    ],
    // state 96
    &[
        (Terminal::Close, Action::Shift(97)),
    ],
    // state 97
    &[
        (Terminal::Open, Action::Reduce(Rule::Else)),
        (Terminal::PrintOpen, Action::Reduce(Rule::Else)),
        (Terminal::Passthrough, Action::Reduce(Rule::Else)),
        (Terminal::EndOfInput, Action::Reduce(Rule::Else)),
    ],
    // state 98
    &[
        (Terminal::Close, Action::Shift(99)),
    ],
    // state 99
    &[
        (Terminal::Open, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ContentEmpty)),
        (Terminal::Passthrough, Action::Reduce(Rule::ContentEmpty)),
    ],
    // state 100
    &[
        (Terminal::Open, Action::Shift(87)),
        (Terminal::PrintOpen, Action::Shift(2)),
        (Terminal::Passthrough, Action::Shift(69)),
    ],
    // state 101
    &[
        (Terminal::Open, Action::Reduce(Rule::ElseIf)),
        (Terminal::PrintOpen, Action::Reduce(Rule::ElseIf)),
        (Terminal::Passthrough, Action::Reduce(Rule::ElseIf)),
        (Terminal::EndOfInput, Action::Reduce(Rule::ElseIf)),
    ],
];

pub(super) static GOTOS: [&[(NonTerminal, u16)]; 102] = [
    &[
        (NonTerminal::Unit, 3),
        (NonTerminal::Block, 4),
        (NonTerminal::PrintBlock, 5),
        (NonTerminal::IfStatement, 6),
        (NonTerminal::ForLoop, 7),
    ],
    &[
        (NonTerminal::StatementList, 52),
        (NonTerminal::Expression, 53),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[
        (NonTerminal::Expression, 16),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[
        (NonTerminal::Expression, 47),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[
        (NonTerminal::UnaryExpr, 46),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 29),
        (NonTerminal::FuncCall, 24),
    ],
    &[
        (NonTerminal::UnaryExpr, 45),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 29),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[
        (NonTerminal::Expression, 26),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[
        (NonTerminal::UnaryExpr, 28),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 29),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[
        (NonTerminal::Expression, 31),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
        (NonTerminal::Args, 32),
        (NonTerminal::ArgList, 33),
    ],
    &[],
    &[],
    &[],
    &[
        (NonTerminal::Expression, 35),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[
        (NonTerminal::MultExpr, 40),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 29),
        (NonTerminal::FuncCall, 24),
    ],
    &[
        (NonTerminal::MultExpr, 39),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 29),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[
        (NonTerminal::AddExpr, 42),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 29),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[
        (NonTerminal::RelationExpr, 44),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 29),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[
        (NonTerminal::Expression, 84),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[],
    &[
        (NonTerminal::Expression, 56),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[],
    &[(NonTerminal::VarRef, 62), (NonTerminal::FuncCall, 63), (NonTerminal::LoopInput, 64)],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[(NonTerminal::Content, 67)],
    &[
        (NonTerminal::Block, 70),
        (NonTerminal::PrintBlock, 71),
        (NonTerminal::IfStatement, 72),
        (NonTerminal::ForLoop, 73),
        (NonTerminal::Item, 74),
    ],
    &[
        (NonTerminal::StatementList, 52),
        (NonTerminal::Expression, 53),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[(NonTerminal::VarRef, 62), (NonTerminal::FuncCall, 63), (NonTerminal::LoopInput, 78)],
    &[],
    &[(NonTerminal::Content, 80)],
    &[
        (NonTerminal::Block, 70),
        (NonTerminal::PrintBlock, 71),
        (NonTerminal::IfStatement, 72),
        (NonTerminal::ForLoop, 73),
        (NonTerminal::Item, 74),
    ],
    &[
        (NonTerminal::StatementList, 52),
        (NonTerminal::Expression, 53),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[(NonTerminal::Content, 86)],
    &[
        (NonTerminal::Block, 70),
        (NonTerminal::PrintBlock, 71),
        (NonTerminal::IfStatement, 72),
        (NonTerminal::IfRest, 88),
        (NonTerminal::ForLoop, 73),
        (NonTerminal::Item, 74),
    ],
    &[
        (NonTerminal::StatementList, 52),
        (NonTerminal::Expression, 53),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[
        (NonTerminal::Expression, 98),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[(NonTerminal::Content, 94)],
    &[
        (NonTerminal::Block, 70),
        (NonTerminal::PrintBlock, 71),
        (NonTerminal::IfStatement, 72),
        (NonTerminal::ForLoop, 73),
        (NonTerminal::Item, 74),
    ],
    &[
        (NonTerminal::StatementList, 52),
        (NonTerminal::Expression, 53),
        (NonTerminal::LogicExpr, 17),
        (NonTerminal::RelationExpr, 18),
        (NonTerminal::AddExpr, 19),
        (NonTerminal::MultExpr, 20),
        (NonTerminal::UnaryExpr, 21),
        (NonTerminal::Term, 22),
        (NonTerminal::VarRef, 23),
        (NonTerminal::FuncCall, 24),
    ],
    &[],
    &[],
    &[],
    &[(NonTerminal::Content, 100)],
    &[
        (NonTerminal::Block, 70),
        (NonTerminal::PrintBlock, 71),
        (NonTerminal::IfStatement, 72),
        (NonTerminal::IfRest, 101),
        (NonTerminal::ForLoop, 73),
        (NonTerminal::Item, 74),
    ],
    &[],
];
