//! Line-oriented lexer for template source
//!
//! Text outside `{{ ... }}` blocks becomes a single [`TokenKind::Passthrough`]
//! token per run. Inside a block, input is tokenized greedily left to right.
//! Block state carries across lines, so a block may span several of them.
//! Every line ends with a [`TokenKind::EndOfLine`] marker.

mod token;

pub use token::{Delimiter, Keyword, OpClass, Span, Token, TokenKind};

use crate::error::LexError;

/// Stateful lexer that consumes one line at a time.
#[derive(Debug, Default)]
pub struct Lexer {
    line: usize,
    in_block: bool,
}

impl Lexer {
    /// Create a lexer positioned before the first line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last lexed line left a block open.
    pub fn in_block(&self) -> bool {
        self.in_block
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Tokenize a whole document, line by line.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new();
        let mut tokens = Vec::new();
        for line in source.split_inclusive('\n') {
            tokens.extend(lexer.lex_line(line)?);
        }
        Ok(tokens)
    }

    /// Tokenize one line of input.
    ///
    /// The line should include its trailing newline, if it has one, so that
    /// passthrough text reproduces the document byte for byte.
    pub fn lex_line(&mut self, line: &str) -> Result<Vec<Token>, LexError> {
        self.line += 1;
        let chars: Vec<char> = line.chars().collect();
        let mut cursor = Cursor {
            chars: &chars,
            pos: 0,
            line: self.line,
        };
        let mut tokens = Vec::new();

        while !cursor.at_end() {
            if self.in_block {
                self.lex_block(&mut cursor, &mut tokens)?;
            } else {
                self.lex_passthrough(&mut cursor, &mut tokens);
            }
        }

        tokens.push(Token::new(TokenKind::EndOfLine, cursor.span()));
        Ok(tokens)
    }

    fn lex_passthrough(&mut self, cursor: &mut Cursor<'_>, tokens: &mut Vec<Token>) {
        let start = cursor.pos;
        let span = cursor.span();
        while !cursor.at_end() && !cursor.starts_with("{{") {
            cursor.pos += 1;
        }
        if cursor.pos > start {
            let text: String = cursor.chars[start..cursor.pos].iter().collect();
            tokens.push(Token::new(TokenKind::Passthrough(text), span));
        }
        if !cursor.at_end() {
            tokens.push(cursor.open_delimiter());
            self.in_block = true;
        }
    }

    fn lex_block(
        &mut self,
        cursor: &mut Cursor<'_>,
        tokens: &mut Vec<Token>,
    ) -> Result<(), LexError> {
        while let Some(c) = cursor.peek() {
            if c.is_whitespace() {
                cursor.pos += 1;
                continue;
            }

            let span = cursor.span();

            // Block delimiters
            if cursor.starts_with("}}") {
                cursor.pos += 2;
                tokens.push(Token::new(TokenKind::BlockDelimiter(Delimiter::Close), span));
                self.in_block = false;
                return Ok(());
            }
            if cursor.starts_with("{{") {
                tokens.push(cursor.open_delimiter());
                continue;
            }

            // Two-character operators
            let two_char = TWO_CHAR_OPS.iter().find(|(_, text)| cursor.starts_with(text));
            if let Some((class, text)) = two_char {
                cursor.pos += 2;
                tokens.push(Token::new(TokenKind::Operator(*class, text.to_string()), span));
                continue;
            }

            // Single-character operators and symbols
            if let Some(class) = single_char_op(c) {
                cursor.pos += 1;
                tokens.push(Token::new(TokenKind::Operator(class, c.to_string()), span));
                continue;
            }
            if matches!(c, '(' | ')' | ',' | ';') {
                cursor.pos += 1;
                tokens.push(Token::new(TokenKind::Symbol(c), span));
                continue;
            }

            // Keywords, booleans, dotted names and identifiers
            if is_word_start(c) {
                let parts = cursor.dotted_word();
                tokens.push(Token::new(classify_word(parts), span));
                continue;
            }

            if c == '"' {
                let text = cursor.string_literal()?;
                tokens.push(Token::new(TokenKind::String(text), span));
                continue;
            }

            if c.is_ascii_digit() {
                let start = cursor.pos;
                while cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                    cursor.pos += 1;
                }
                let text: String = cursor.chars[start..cursor.pos].iter().collect();
                let value = text
                    .parse::<i64>()
                    .map_err(|_| LexError::NumberOutOfRange { text, span })?;
                tokens.push(Token::new(TokenKind::Number(value), span));
                continue;
            }

            return Err(LexError::UnexpectedChar { found: c, span });
        }
        Ok(())
    }
}

const TWO_CHAR_OPS: [(OpClass, &str); 6] = [
    (OpClass::Relation, "=="),
    (OpClass::Relation, "!="),
    (OpClass::Relation, "<="),
    (OpClass::Relation, ">="),
    (OpClass::Logic, "||"),
    (OpClass::Logic, "&&"),
];

fn single_char_op(c: char) -> Option<OpClass> {
    match c {
        '=' => Some(OpClass::Assign),
        '<' | '>' => Some(OpClass::Relation),
        '+' => Some(OpClass::Plus),
        '-' => Some(OpClass::Minus),
        '*' | '/' | '%' => Some(OpClass::Mult),
        '!' => Some(OpClass::Bang),
        _ => None,
    }
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn classify_word(mut parts: Vec<String>) -> TokenKind {
    if parts.len() > 1 {
        return TokenKind::VariableName(parts);
    }
    let word = parts.pop().unwrap_or_default();
    if let Some(kw) = Keyword::from_word(&word) {
        return TokenKind::Keyword(kw);
    }
    match word.as_str() {
        "true" => TokenKind::Bool(true),
        "false" => TokenKind::Bool(false),
        _ => TokenKind::Identifier(word),
    }
}

struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
    line: usize,
}

impl Cursor<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn span(&self) -> Span {
        Span::new(self.line, self.pos + 1)
    }

    fn starts_with(&self, s: &str) -> bool {
        let mut i = self.pos;
        for c in s.chars() {
            if self.chars.get(i) != Some(&c) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Consume `{{` or `{{:` at the cursor.
    fn open_delimiter(&mut self) -> Token {
        let span = self.span();
        if self.starts_with("{{:") {
            self.pos += 3;
            Token::new(TokenKind::BlockDelimiter(Delimiter::PrintOpen), span)
        } else {
            self.pos += 2;
            Token::new(TokenKind::BlockDelimiter(Delimiter::Open), span)
        }
    }

    fn word(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_word_char) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn dotted_word(&mut self) -> Vec<String> {
        let mut parts = vec![self.word()];
        while self.peek() == Some('.') && self.peek_at(1).is_some_and(is_word_start) {
            self.pos += 1;
            parts.push(self.word());
        }
        parts
    }

    fn string_literal(&mut self) -> Result<String, LexError> {
        let span = self.span();
        self.pos += 1;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '"' {
                let text = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                return Ok(text);
            }
            self.pos += 1;
        }
        Err(LexError::UnterminatedString { span })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        Lexer::new()
            .lex_line(line)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_plain_line_is_one_passthrough() {
        assert_eq!(
            kinds("hello world\n"),
            vec![
                TokenKind::Passthrough("hello world\n".into()),
                TokenKind::EndOfLine
            ]
        );
    }

    #[test]
    fn test_block_state_carries_across_lines() {
        let mut lexer = Lexer::new();
        lexer.lex_line("a {{ x =\n").unwrap();
        assert!(lexer.in_block());
        let tokens = lexer.lex_line("1 }} b\n").unwrap();
        assert!(!lexer.in_block());
        assert_eq!(tokens[0].kind, TokenKind::Number(1));
        assert_eq!(tokens[0].span, Span::new(2, 1));
        assert_eq!(tokens[2].kind, TokenKind::Passthrough(" b\n".into()));
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(
            kinds("{{ iffy inner end_date }}"),
            vec![
                TokenKind::BlockDelimiter(Delimiter::Open),
                TokenKind::Identifier("iffy".into()),
                TokenKind::Identifier("inner".into()),
                TokenKind::Identifier("end_date".into()),
                TokenKind::BlockDelimiter(Delimiter::Close),
                TokenKind::EndOfLine,
            ]
        );
    }

    #[test]
    fn test_unexpected_char_reports_column() {
        let err = Lexer::new().lex_line("ab {{ x @ y }}").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                found: '@',
                span: Span::new(1, 9)
            }
        );
    }
}
