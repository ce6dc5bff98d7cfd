use miette::{Diagnostic, Severity};
use prolex::{LexErrorKind, LexerConfig, TokenKind, analyze, analyze_with};

#[test]
fn unterminated_string_reports_start_and_emits_nothing() {
    let analysis = analyze("\"unterminated");
    assert!(analysis.tokens.is_empty());
    assert_eq!(analysis.diagnostics.len(), 1);
    let error = &analysis.diagnostics[0];
    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
    assert_eq!(error.line, 1);
    assert_eq!(error.column, Some(1));
    assert!(error.to_string().contains("line 1"));
    assert!(error.to_string().contains("unterminated string"));
}

#[test]
fn unterminated_string_after_tokens_reports_its_own_start() {
    let analysis = analyze("a.\nb(\"open\nmore");
    let lexemes: Vec<&str> = analysis.tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["a", ".", "b", "("]);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].line, 2);
    assert_eq!(analysis.diagnostics[0].column, Some(3));
}

#[test]
fn trailing_backslash_is_incomplete_escape() {
    let analysis = analyze("x \"abc\\");
    assert_eq!(analysis.tokens.len(), 1);
    assert_eq!(analysis.diagnostics.len(), 1);
    let error = &analysis.diagnostics[0];
    assert_eq!(error.kind, LexErrorKind::IncompleteEscape);
    assert_eq!(error.line, 1);
    assert_eq!(error.column, Some(3));
}

#[test]
fn unterminated_block_comment_consumes_rest_of_input() {
    let analysis = analyze("a.\n  /* never closed\nb.");
    let lexemes: Vec<&str> = analysis.tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["a", "."]);
    assert_eq!(analysis.diagnostics.len(), 1);
    let error = &analysis.diagnostics[0];
    assert_eq!(error.kind, LexErrorKind::UnterminatedBlockComment);
    assert_eq!(error.line, 2);
    assert_eq!(error.column, Some(3));
}

#[test]
fn comment_closer_split_across_star_runs() {
    let analysis = analyze("/* ** **/ ok");
    assert!(analysis.is_clean());
    assert_eq!(analysis.tokens.len(), 1);
    assert_eq!(analysis.tokens[0].lexeme, "ok");
}

#[test]
fn oversize_identifier_still_emits_token() {
    let name = "abcdefghijklmnop";
    assert_eq!(name.len(), 16);
    let analysis = analyze(name);
    assert_eq!(analysis.tokens.len(), 1);
    assert_eq!(analysis.tokens[0].kind, TokenKind::Identifier);
    assert_eq!(analysis.tokens[0].lexeme, name);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(
        analysis.diagnostics[0].kind,
        LexErrorKind::IdentifierTooLong {
            name: name.to_string(),
            length: 16,
            max: 15,
        }
    );
    assert!(!analysis.has_errors());
    assert!(!analysis.is_clean());
}

#[test]
fn fifteen_character_identifier_is_fine() {
    let analysis = analyze("abcdefghijklmno");
    assert!(analysis.is_clean());
}

#[test]
fn identifier_length_counts_characters() {
    // 15 characters, more than 15 bytes.
    let analysis = analyze("ñññññññññññññññ");
    assert!(analysis.is_clean());
}

#[test]
fn identifier_limit_is_configurable() {
    let config = LexerConfig::default().with_max_identifier_len(3);
    let analysis = analyze_with("abc abcd", &config);
    assert_eq!(analysis.tokens.len(), 2);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].column, Some(5));
}

#[test]
fn unrecognized_symbols_are_reported_individually() {
    let analysis = analyze("a [b] # c");
    let lexemes: Vec<&str> = analysis.tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["a", "b", "c"]);
    let reported: Vec<(LexErrorKind, Option<usize>)> = analysis
        .diagnostics
        .iter()
        .map(|d| (d.kind.clone(), d.column))
        .collect();
    assert_eq!(
        reported,
        vec![
            (LexErrorKind::UnrecognizedSymbol { symbol: '[' }, Some(3)),
            (LexErrorKind::UnrecognizedSymbol { symbol: ']' }, Some(5)),
            (LexErrorKind::UnrecognizedSymbol { symbol: '#' }, Some(7)),
        ]
    );
    assert!(analysis.has_errors());
}

#[test]
fn lone_operator_prefixes_are_unrecognized() {
    let analysis = analyze(": @ \\ |");
    assert!(analysis.tokens.is_empty());
    assert_eq!(analysis.diagnostics.len(), 4);
}

#[test]
fn errors_do_not_stop_scanning() {
    let analysis = analyze("\"bad\\\n# ok(1).");
    // The escape pairs the backslash with the newline; the string never closes.
    assert!(analysis.tokens.is_empty());
    assert_eq!(analysis.diagnostics.len(), 1);

    let analysis = analyze("# ok(1). \"open");
    let lexemes: Vec<&str> = analysis.tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["ok", "(", "1", ")", "."]);
    assert_eq!(analysis.diagnostics.len(), 2);
}

#[test]
fn display_always_includes_line() {
    let analysis = analyze("\n\n  $");
    let error = &analysis.diagnostics[0];
    assert_eq!(error.to_string(), "line 3, column 3: unrecognized symbol '$'");

    let mut without_column = error.clone();
    without_column.column = None;
    assert_eq!(without_column.to_string(), "line 3: unrecognized symbol '$'");
}

#[test]
fn diagnostics_carry_miette_metadata() {
    let analysis = analyze("abcdefghijklmnopq $");
    let warning = &analysis.diagnostics[0];
    assert_eq!(warning.severity(), Some(Severity::Warning));
    assert_eq!(
        warning.code().map(|c| c.to_string()),
        Some("prolex::identifier_too_long".to_string())
    );

    let error = &analysis.diagnostics[1];
    assert_ne!(error.severity(), Some(Severity::Warning));
    let labels: Vec<_> = error.labels().expect("labels").collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 18);
    assert_eq!(labels[0].len(), 1);
}

#[test]
fn unterminated_string_span_covers_rest_of_input() {
    let analysis = analyze("x \"abc");
    let error = &analysis.diagnostics[0];
    assert_eq!(error.span.offset(), 2);
    assert_eq!(error.span.len(), 4);
    assert_eq!((error.line, error.column), (1, Some(3)));
}
