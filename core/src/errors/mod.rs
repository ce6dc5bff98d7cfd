mod lex_error;

pub use lex_error::{LexError, LexErrorKind};
