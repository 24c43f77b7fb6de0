//! The interactive session.
//!
//! Reads lines, runs each through the pipeline, and prints the result or
//! the parser's diagnostics. One root environment and one evaluator live
//! for the whole session, so bindings persist across inputs.

use lince::evaluator::Evaluator;
use lince::lexer::Lexer;
use lince::object::Environment;
use lince::parser::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Starts the interactive session.
///
/// The session ends on a line that is exactly `salir()`, on end of input,
/// or on interrupt. (Evaluating `salir()` would also terminate the
/// process through the built-in; the sentinel check keeps the editor's
/// teardown orderly.)
pub(crate) fn start() {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("Error: no se pudo iniciar la sesión interactiva: {}", error);
            return;
        }
    };

    let env = Environment::new();
    let mut evaluator = Evaluator::new();

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if line == "salir()" {
                    break;
                }
                let _ = editor.add_history_entry(line.as_str());

                let mut parser = Parser::new(Lexer::new(&line));
                let program = parser.parse_program();
                if !parser.diagnostics().is_empty() {
                    for diagnostic in parser.diagnostics() {
                        println!("{}", diagnostic.message);
                    }
                    continue;
                }

                if let Some(value) = evaluator.eval_program(&program, &env) {
                    let rendered = value.inspect();
                    if !rendered.is_empty() {
                        println!("{}", rendered);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {}", error);
                break;
            }
        }
    }
}
