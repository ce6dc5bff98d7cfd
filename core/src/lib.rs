pub mod config;
pub mod errors;
pub mod lexer;

pub use config::LexerConfig;
pub use errors::{LexError, LexErrorKind};
pub use lexer::token::{Position, Span, Token, TokenKind};
pub use lexer::{Analysis, analyze, analyze_with};
