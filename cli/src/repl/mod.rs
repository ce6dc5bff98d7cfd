mod completer;
mod helper;
mod highlighter;
mod hinter;

use owo_colors::OwoColorize;
use prolex::{LexErrorKind, LexerConfig};
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};
use std::fs;

use self::helper::ReplHelper;

pub fn run(config: LexerConfig) -> Result<(), ReadlineError> {
    let editor_config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(editor_config)?;
    rl.set_helper(Some(ReplHelper::new(config)));

    println!(
        "{} {}",
        "prolex".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                if handle_command(trimmed, &config) {
                    continue;
                }

                analyze_snippet(&line, "<repl>", &config);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn handle_command(trimmed: &str, config: &LexerConfig) -> bool {
    if trimmed == ".exit" || trimmed == "exit" {
        std::process::exit(0);
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!(
            "{}",
            ".load <file.pl>      analyze a source file".bright_blue()
        );
        println!("{}", ".exit                exit REPL".bright_blue());
        return true;
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match fs::read_to_string(path) {
            Ok(source) => analyze_snippet(&source, path, config),
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return true;
    }
    false
}

fn analyze_snippet(source: &str, name: &str, config: &LexerConfig) {
    let analysis = prolex::analyze_with(source, config);
    crate::report::print_analysis(&analysis, source, name);
}

/// Keep reading lines while a string or block comment is still open.
pub fn needs_more_input(source: &str, config: &LexerConfig) -> bool {
    prolex::analyze_with(source, config).diagnostics.iter().any(|d| {
        matches!(
            d.kind,
            LexErrorKind::UnterminatedString
                | LexErrorKind::UnterminatedBlockComment
                | LexErrorKind::IncompleteEscape
        )
    })
}
