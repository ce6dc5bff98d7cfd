use std::fmt::Display;

use miette::{Diagnostic, LabeledSpan, Severity, SourceSpan};
use thiserror::Error;

use crate::lexer::token::Position;

/// What went wrong while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    #[diagnostic(
        code(prolex::unterminated_string),
        help("close the string with a matching '\"'")
    )]
    UnterminatedString,

    #[error("unterminated block comment")]
    #[diagnostic(
        code(prolex::unterminated_comment),
        help("close the comment with '*/'")
    )]
    UnterminatedBlockComment,

    #[error("incomplete escape sequence in string literal")]
    #[diagnostic(
        code(prolex::incomplete_escape),
        help("a '\\' must be followed by the character it escapes")
    )]
    IncompleteEscape,

    #[error("identifier '{name}' is {length} characters long (maximum is {max})")]
    #[diagnostic(code(prolex::identifier_too_long), severity(Warning))]
    IdentifierTooLong {
        name: String,
        length: usize,
        max: usize,
    },

    #[error("unrecognized symbol '{symbol}'")]
    #[diagnostic(code(prolex::unrecognized_symbol))]
    UnrecognizedSymbol { symbol: char },
}

impl LexErrorKind {
    pub fn is_warning(&self) -> bool {
        matches!(self, LexErrorKind::IdentifierTooLong { .. })
    }
}

/// A non-fatal, position-tagged lexical diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {kind}", location(.line, .column))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
    pub column: Option<usize>,
    pub span: SourceSpan,
}

impl LexError {
    pub fn new(kind: LexErrorKind, at: Position, offset: usize, length: usize) -> Self {
        Self {
            kind,
            line: at.line,
            column: Some(at.column),
            span: (offset, length).into(),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn is_warning(&self) -> bool {
        self.kind.is_warning()
    }
}

impl Diagnostic for LexError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.kind.code()
    }

    fn severity(&self) -> Option<Severity> {
        self.kind.severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.kind.help()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some("here".to_string()),
            self.span,
        ))))
    }
}

fn location(line: &usize, column: &Option<usize>) -> String {
    match column {
        Some(column) => format!("line {line}, column {column}"),
        None => format!("line {line}"),
    }
}
