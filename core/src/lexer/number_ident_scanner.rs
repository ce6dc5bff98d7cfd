use super::scanner::Scanner;
use super::token::TokenKind;
use crate::errors::LexErrorKind;

/// Reserved words, matched case-sensitively.
pub const RESERVED_WORDS: [&str; 10] = [
    "consult", "listing", "fail", "true", "false", "not", "is", "repeat", "assert", "retract",
];

impl Scanner<'_> {
    pub(super) fn scan_number(&mut self) {
        let start = self.cursor.pos();
        let at = self.cursor.position();

        self.cursor.advance_while(|c| c.is_ascii_digit());

        // A point only belongs to the number when a digit follows it.
        let kind = if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.match_char('.');
            self.cursor.advance_while(|c| c.is_ascii_digit());
            TokenKind::Decimal
        } else {
            TokenKind::Integer
        };

        self.push_token(kind, start, at);
    }

    pub(super) fn scan_identifier(&mut self) {
        let start = self.cursor.pos();
        let at = self.cursor.position();

        self.cursor.advance_while(is_ident_continue);

        let text = self.cursor.slice_from(start);
        let kind = if RESERVED_WORDS.contains(&text) {
            TokenKind::ReservedWord
        } else {
            TokenKind::Identifier
        };
        self.push_token(kind, start, at);

        let length = text.chars().count();
        let max = self.config.max_identifier_len;
        if length > max {
            let name = text.to_owned();
            self.report(LexErrorKind::IdentifierTooLong { name, length, max }, at, start);
        }
    }
}

pub(super) fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
