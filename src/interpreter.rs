//! The top-level interpretation driver.
//!
//! [`interpret`] wires the pipeline together: lex, parse, check the
//! parser's diagnostics, evaluate, render. Callers that need more control
//! (the CLI renders diagnostics over the source, the REPL keeps one
//! environment alive across inputs) drive the pipeline stages directly.

use crate::evaluator::Evaluator;
use crate::lexer::Lexer;
use crate::object::Environment;
use crate::parser::Parser;

/// Interprets `source` and returns the user-facing result string.
///
/// If the parser accumulated diagnostics, they are returned joined by
/// newlines and the program is not evaluated. Otherwise the program runs
/// under a fresh root environment and the result is the final value's
/// rendering, or the empty string when the program evaluated to nothing.
///
/// # Examples
///
/// ```
/// use lince::interpret;
///
/// assert_eq!(interpret("5 + 5 * 2"), "15");
/// assert_eq!(interpret(""), "");
/// ```
pub fn interpret(source: &str) -> String {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.diagnostics().is_empty() {
        let messages: Vec<&str> = parser
            .diagnostics()
            .iter()
            .map(|diagnostic| diagnostic.message.as_str())
            .collect();
        return messages.join("\n");
    }

    let mut evaluator = Evaluator::new();
    let env = Environment::new();
    match evaluator.eval_program(&program, &env) {
        Some(value) => value.inspect(),
        None => String::new(),
    }
}
