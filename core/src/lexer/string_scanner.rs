use super::scanner::Scanner;
use super::token::TokenKind;
use crate::errors::LexErrorKind;

impl Scanner<'_> {
    /// Scans a `"`-delimited literal. Escapes are kept verbatim as two
    /// characters; a malformed literal produces a diagnostic and no token.
    pub(super) fn scan_string(&mut self) {
        let start = self.cursor.pos();
        let at = self.cursor.position();
        self.cursor.advance();

        loop {
            match self.cursor.advance() {
                Some('"') => {
                    self.push_token(TokenKind::String, start, at);
                    return;
                }
                Some('\\') => {
                    if self.cursor.advance().is_none() {
                        self.report(LexErrorKind::IncompleteEscape, at, start);
                        return;
                    }
                }
                Some(_) => {}
                None => {
                    self.report(LexErrorKind::UnterminatedString, at, start);
                    return;
                }
            }
        }
    }
}
