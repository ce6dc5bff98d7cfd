use std::fs;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use prolex::LexerConfig;
use prolex::config::DEFAULT_MAX_IDENTIFIER_LEN;
use tracing_subscriber::EnvFilter;

mod repl;
mod report;

#[derive(Parser)]
#[command(
    name = "prolex",
    about = "Lexical analyzer for a small Prolog-like language"
)]
struct Cli {
    /// Path to a source file to analyze
    file: Option<String>,
    /// Analyze inline source text
    #[arg(long)]
    eval: Option<String>,
    /// Print tokens and diagnostics as JSON
    #[arg(long)]
    json: bool,
    /// Identifiers longer than this are reported with a warning
    #[arg(long, default_value_t = DEFAULT_MAX_IDENTIFIER_LEN)]
    max_ident_len: usize,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.version {
        println!(
            "{} {}",
            "prolex".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let config = LexerConfig::default().with_max_identifier_len(cli.max_ident_len);

    let (source, name) = match (cli.eval, cli.file) {
        (Some(code), _) => (code, "<eval>".to_string()),
        (None, Some(file)) => match fs::read_to_string(&file) {
            Ok(s) => (s, file),
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    file.yellow()
                );
                process::exit(1);
            }
        },
        (None, None) => {
            if let Err(err) = repl::run(config) {
                eprintln!("{} {err}", "repl error:".red().bold());
                process::exit(1);
            }
            return;
        }
    };

    tracing::debug!(source = %name, bytes = source.len(), "analyzing");
    let analysis = prolex::analyze_with(source.as_str(), &config);

    if cli.json {
        match report::to_json(&analysis) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                process::exit(1);
            }
        }
    } else {
        report::print_analysis(&analysis, &source, &name);
    }

    if analysis.has_errors() {
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
