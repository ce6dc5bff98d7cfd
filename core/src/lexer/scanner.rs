use super::Analysis;
use super::cursor::Cursor;
use super::number_ident_scanner::is_ident_start;
use super::token::{Position, Span, Token, TokenKind};
use crate::config::LexerConfig;
use crate::errors::{LexError, LexErrorKind};

/// Multi-character operators, longest spelling first so a prefix never
/// shadows a longer operator.
const COMPOUND_OPERATORS: &[(&str, TokenKind)] = &[
    ("=:=", TokenKind::ComparisonOp),
    ("=\\=", TokenKind::ComparisonOp),
    ("\\==", TokenKind::ComparisonOp),
    ("@>=", TokenKind::ComparisonOp),
    ("@=<", TokenKind::ComparisonOp),
    ("-->", TokenKind::RuleOp),
    (":-", TokenKind::RuleOp),
    ("?-", TokenKind::QueryOp),
    ("==", TokenKind::ComparisonOp),
    ("\\=", TokenKind::ComparisonOp),
    ("!=", TokenKind::ComparisonOp),
    (">=", TokenKind::ComparisonOp),
    ("=<", TokenKind::ComparisonOp),
    ("<=", TokenKind::ComparisonOp),
    ("@>", TokenKind::ComparisonOp),
    ("@<", TokenKind::ComparisonOp),
    ("&&", TokenKind::LogicalOp),
    ("||", TokenKind::LogicalOp),
    ("\\+", TokenKind::LogicalOp),
    ("->", TokenKind::LogicalOp),
    ("++", TokenKind::IncrementOp),
    ("--", TokenKind::IncrementOp),
    ("**", TokenKind::ArithOp),
    ("//", TokenKind::ArithOp),
];

/// Scans source code into tokens and diagnostics in a single pass.
pub struct Scanner<'src> {
    pub(super) cursor: Cursor<'src>,
    pub(super) config: LexerConfig,
    tokens: Vec<Token>,
    diagnostics: Vec<LexError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn scan(mut self) -> Analysis {
        while let Some(ch) = self.cursor.peek() {
            match ch {
                c if c.is_whitespace() => {
                    self.cursor.advance();
                }
                '%' => self.skip_line_comment(),
                '/' if self.cursor.peek_next() == Some('*') => self.skip_block_comment(),
                '"' => self.scan_string(),
                c if c.is_ascii_digit() => self.scan_number(),
                c if is_ident_start(c) => self.scan_identifier(),
                _ => self.scan_operator(),
            }
        }

        tracing::debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );

        Analysis {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Emit a token whose lexeme runs from `start` to the cursor.
    pub(super) fn push_token(&mut self, kind: TokenKind, start: usize, at: Position) {
        let end = self.cursor.pos();
        let lexeme = self.cursor.slice_from(start);
        tracing::trace!(%kind, lexeme, line = at.line, column = at.column, "token");
        self.tokens
            .push(Token::new(lexeme, kind, at, Span::new(start, end)));
    }

    pub(super) fn report(&mut self, kind: LexErrorKind, at: Position, start: usize) {
        let length = self.cursor.pos().saturating_sub(start);
        let error = LexError::new(kind, at, start, length);
        tracing::debug!(line = at.line, column = at.column, "{}", error.kind);
        self.diagnostics.push(error);
    }

    fn skip_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }

    fn skip_block_comment(&mut self) {
        let start = self.cursor.pos();
        let at = self.cursor.position();
        self.cursor.advance_by(2);
        loop {
            if self.cursor.peek() == Some('*') && self.cursor.peek_next() == Some('/') {
                self.cursor.advance_by(2);
                return;
            }
            if self.cursor.advance().is_none() {
                self.report(LexErrorKind::UnterminatedBlockComment, at, start);
                return;
            }
        }
    }

    fn scan_operator(&mut self) {
        let start = self.cursor.pos();
        let at = self.cursor.position();

        let rest = self.cursor.rest();
        if let Some((spelling, kind)) = COMPOUND_OPERATORS
            .iter()
            .find(|(spelling, _)| rest.starts_with(spelling))
        {
            self.cursor.advance_by(spelling.chars().count());
            self.push_token(*kind, start, at);
            return;
        }

        let Some(ch) = self.cursor.advance() else {
            return;
        };
        let kind = match ch {
            '+' | '-' | '*' | '/' | '^' => TokenKind::ArithOp,
            '<' | '>' => TokenKind::ComparisonOp,
            '=' => TokenKind::AssignOp,
            '!' | ';' => TokenKind::LogicalOp,
            '?' => TokenKind::QueryOp,
            '(' | ')' => TokenKind::Parenthesis,
            '{' | '}' => TokenKind::Brace,
            '.' => TokenKind::Terminator,
            ',' => TokenKind::Separator,
            symbol => {
                self.report(LexErrorKind::UnrecognizedSymbol { symbol }, at, start);
                return;
            }
        };
        self.push_token(kind, start, at);
    }
}
