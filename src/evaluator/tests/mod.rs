//! Unit tests for evaluation.
//!
//! Tests are organized by concern:
//! - [`integers`]: Arithmetic and integer edge cases
//! - [`booleans`]: Boolean evaluation, comparisons, the bang operator
//! - [`conditionals`]: `si`/`si_no`, truthiness, `nulo` results
//! - [`loops`]: `mientras` behavior
//! - [`functions`]: Function literals, calls, closures
//! - [`strings`]: String literals, concatenation, comparison
//! - [`bindings`]: Declarations and assignments
//! - [`errors`]: Runtime error production and propagation
//! - [`builtins`]: The built-in function table

use super::*;
use crate::lexer::Lexer;
use crate::object::Env;
use crate::parser::Parser;

mod errors;

/// Evaluates `input` under `env`, panicking on parser diagnostics or an
/// empty program.
pub(super) fn run_with_env(input: &str, env: &Env) -> Value {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    assert!(
        parser.diagnostics().is_empty(),
        "unexpected diagnostics for {:?}: {:?}",
        input,
        parser.diagnostics()
    );

    let mut evaluator = Evaluator::new();
    evaluator
        .eval_program(&program, env)
        .unwrap_or_else(|| panic!("input {:?} evaluated to nothing", input))
}

/// Evaluates `input` under a fresh root environment.
pub(super) fn run(input: &str) -> Value {
    run_with_env(input, &Environment::new())
}

pub(super) fn assert_integer(value: &Value, expected: i64) {
    match value {
        Value::Integer(actual) => assert_eq!(*actual, expected),
        other => panic!("expected INTEGER {}, got {:?}", expected, other),
    }
}

pub(super) fn assert_boolean(value: &Value, expected: bool) {
    match value {
        Value::Boolean(actual) => assert_eq!(*actual, expected),
        other => panic!("expected BOOLEAN {}, got {:?}", expected, other),
    }
}

pub(super) fn assert_null(value: &Value) {
    assert_eq!(*value, NULL, "expected nulo, got {:?}", value);
}

pub(super) fn assert_string(value: &Value, expected: &str) {
    match value {
        Value::Str(actual) => assert_eq!(actual, expected),
        other => panic!("expected STRING {:?}, got {:?}", expected, other),
    }
}

pub(super) fn assert_error(value: &Value, expected: &str) {
    match value {
        Value::Error(message) => assert_eq!(message, expected),
        other => panic!("expected ERROR {:?}, got {:?}", expected, other),
    }
}

#[test]
fn test_empty_program_evaluates_to_nothing() {
    let mut parser = Parser::new(Lexer::new(""));
    let program = parser.parse_program();
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.eval_program(&program, &Environment::new()), None);
}

#[test]
fn test_errors_append_to_the_diagnostics_list() {
    let mut parser = Parser::new(Lexer::new("5 + verdadero"));
    let program = parser.parse_program();
    let mut evaluator = Evaluator::new();
    evaluator.eval_program(&program, &Environment::new());

    assert_eq!(
        evaluator.diagnostics(),
        ["Discrepancia de tipos: INTEGER + BOOLEAN cerca de la línea 1"]
    );
}
