use miette::{NamedSource, Report};
use owo_colors::OwoColorize;
use prolex::{Analysis, LexError, Token, TokenKind};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    tokens: &'a [Token],
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    line: usize,
    column: Option<usize>,
    severity: &'static str,
    message: String,
}

impl From<&LexError> for JsonDiagnostic {
    fn from(err: &LexError) -> Self {
        Self {
            line: err.line,
            column: err.column,
            severity: if err.is_warning() { "warning" } else { "error" },
            message: err.message(),
        }
    }
}

pub fn to_json(analysis: &Analysis) -> serde_json::Result<String> {
    let report = JsonReport {
        tokens: &analysis.tokens,
        diagnostics: analysis.diagnostics.iter().map(JsonDiagnostic::from).collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// Token table, then diagnostics or a success line.
pub fn print_analysis(analysis: &Analysis, source: &str, name: &str) {
    print_tokens(&analysis.tokens);

    if analysis.is_clean() {
        println!(
            "{} {} tokens found",
            "analysis completed successfully:".green().bold(),
            analysis.tokens.len()
        );
        return;
    }

    eprintln!("{}", "lexical errors detected:".red().bold());
    for err in &analysis.diagnostics {
        let report = Report::new(err.clone())
            .with_source_code(NamedSource::new(name, source.to_string()));
        eprintln!("{report:?}");
    }
}

fn print_tokens(tokens: &[Token]) {
    if tokens.is_empty() {
        return;
    }
    let width = tokens
        .iter()
        .map(|t| display_lexeme(&t.lexeme).chars().count())
        .max()
        .unwrap_or(0)
        .max("lexeme".len());

    println!(
        "{}",
        format!("{:<width$}  {:<13}  position", "lexeme", "kind").bright_black()
    );
    for token in tokens {
        let lexeme = format!("{:<width$}", display_lexeme(&token.lexeme));
        println!(
            "{}  {:<13}  {}:{}",
            paint(token.kind, &lexeme),
            token.kind.as_str(),
            token.line,
            token.column
        );
    }
}

/// Keeps multi-line string lexemes on one table row.
fn display_lexeme(lexeme: &str) -> String {
    lexeme.replace('\n', "\\n").replace('\r', "\\r").replace('\t', "\\t")
}

pub fn paint(kind: TokenKind, text: &str) -> String {
    match kind {
        TokenKind::String => text.green().to_string(),
        TokenKind::Integer | TokenKind::Decimal => text.yellow().to_string(),
        TokenKind::Identifier => text.to_string(),
        TokenKind::ReservedWord => text.blue().bold().to_string(),
        TokenKind::ArithOp
        | TokenKind::ComparisonOp
        | TokenKind::AssignOp
        | TokenKind::LogicalOp
        | TokenKind::IncrementOp => text.magenta().to_string(),
        TokenKind::RuleOp | TokenKind::QueryOp => text.cyan().bold().to_string(),
        TokenKind::Parenthesis
        | TokenKind::Brace
        | TokenKind::Terminator
        | TokenKind::Separator => text.bright_black().to_string(),
    }
}
