use std::borrow::Cow;

use prolex::LexerConfig;

use crate::report::paint;

/// Recolours each lexeme by its token kind; text between tokens (blanks,
/// comments, unrecognized symbols) is copied as written.
pub fn highlight_line<'l>(line: &'l str, config: &LexerConfig) -> Cow<'l, str> {
    let analysis = prolex::analyze_with(line, config);
    if analysis.tokens.is_empty() {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() * 2);
    let mut last = 0;
    for token in &analysis.tokens {
        out.push_str(&line[last..token.span.start]);
        out.push_str(&paint(token.kind, &token.lexeme));
        last = token.span.end;
    }
    out.push_str(&line[last..]);
    Cow::Owned(out)
}
