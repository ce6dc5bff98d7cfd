use std::fmt;

use serde::Serialize;

/// A single classified lexeme with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Exact source text, quotes included for strings.
    pub lexeme: String,
    pub kind: TokenKind,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character.
    pub column: usize,
    pub span: Span,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, at: Position, span: Span) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            line: at.line,
            column: at.column,
            span,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Prolog logic variables are identifiers starting with an uppercase letter or `_`.
    pub fn is_variable(&self) -> bool {
        self.kind == TokenKind::Identifier
            && self
                .lexeme
                .chars()
                .next()
                .is_some_and(|c| c == '_' || c.is_uppercase())
    }

    /// Text between the quotes of a string literal, escapes left as written.
    pub fn string_contents(&self) -> Option<&str> {
        if self.kind != TokenKind::String {
            return None;
        }
        self.lexeme.strip_prefix('"')?.strip_suffix('"')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

/// Byte offset span in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Literals
    String,
    Integer,
    Decimal,

    // Names
    Identifier,
    ReservedWord,

    // Operators
    ArithOp,
    ComparisonOp,
    AssignOp,
    LogicalOp,
    IncrementOp,
    RuleOp,
    QueryOp,

    // Punctuation
    Parenthesis,
    Brace,
    Terminator,
    Separator,
}

impl TokenKind {
    pub const ALL: [TokenKind; 16] = [
        TokenKind::String,
        TokenKind::Integer,
        TokenKind::Decimal,
        TokenKind::Identifier,
        TokenKind::ReservedWord,
        TokenKind::ArithOp,
        TokenKind::ComparisonOp,
        TokenKind::AssignOp,
        TokenKind::LogicalOp,
        TokenKind::IncrementOp,
        TokenKind::RuleOp,
        TokenKind::QueryOp,
        TokenKind::Parenthesis,
        TokenKind::Brace,
        TokenKind::Terminator,
        TokenKind::Separator,
    ];

    /// Stable display name callers may depend on.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::ArithOp => "ARITH_OP",
            TokenKind::ComparisonOp => "COMPARISON_OP",
            TokenKind::AssignOp => "ASSIGN_OP",
            TokenKind::LogicalOp => "LOGICAL_OP",
            TokenKind::IncrementOp => "INCREMENT_OP",
            TokenKind::RuleOp => "RULE_OP",
            TokenKind::QueryOp => "QUERY_OP",
            TokenKind::Parenthesis => "PARENTHESIS",
            TokenKind::Brace => "BRACE",
            TokenKind::Terminator => "TERMINATOR",
            TokenKind::Separator => "SEPARATOR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
