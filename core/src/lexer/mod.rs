pub mod cursor;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use crate::config::LexerConfig;
use crate::errors::LexError;
pub use number_ident_scanner::RESERVED_WORDS;
use token::Token;

/// Output of one analysis run. Both sequences are in source order and
/// independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexError>,
}

impl Analysis {
    /// No diagnostics of any severity.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// At least one diagnostic that is not a warning.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| !d.is_warning())
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<LexError>) {
        (self.tokens, self.diagnostics)
    }
}

/// Tokenize source code. Absent input yields an empty analysis.
pub fn analyze<'src>(source: impl Into<Option<&'src str>>) -> Analysis {
    analyze_with(source, &LexerConfig::default())
}

pub fn analyze_with<'src>(source: impl Into<Option<&'src str>>, config: &LexerConfig) -> Analysis {
    match source.into() {
        Some(source) => scanner::Scanner::with_config(source, *config).scan(),
        None => Analysis::default(),
    }
}
