//! The Lince interpreter CLI.
//!
//! This binary provides `lince run` and `lince repl` commands: the former
//! interprets a source file, the latter starts the interactive session.

use clap::{Parser, Subcommand};

mod diagnostics;
mod repl;

/// Command-line interface for the Lince interpreter.
#[derive(Parser)]
#[command(name = "lince")]
#[command(about = "El lenguaje de programación Lince", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run a Lince source file.
    Run {
        /// The source file to interpret (e.g. `hola.lin`).
        file: String,
    },
    /// Start the interactive session.
    Repl,
}

/// Entry point for the Lince CLI.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file } => {
            if !run_file(&file) {
                std::process::exit(1);
            }
        }
        Commands::Repl => repl::start(),
    }
}

/// Interprets a source file, printing the result to stdout.
///
/// Parser diagnostics are rendered over the source to stderr; a runtime
/// error prints its message to stderr. Returns `false` when anything
/// failed.
fn run_file(path: &str) -> bool {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: no se pudo leer {}: {}", path, error);
            return false;
        }
    };

    let mut parser = lince::parser::Parser::new(lince::lexer::Lexer::new(&source));
    let program = parser.parse_program();
    if !parser.diagnostics().is_empty() {
        diagnostics::report(path, &source, parser.diagnostics());
        return false;
    }

    let mut evaluator = lince::evaluator::Evaluator::new();
    let env = lince::object::Environment::new();
    match evaluator.eval_program(&program, &env) {
        Some(value) if value.is_error() => {
            eprintln!("{}", value.inspect());
            false
        }
        Some(value) => {
            let rendered = value.inspect();
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
            true
        }
        None => true,
    }
}
