//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`stmt`]: Statement parsing (let, assign, return, while)
//! - [`expr`]: Expression parsing (literals, prefix/infix, if, functions, calls)
//! - [`precedence`]: Operator precedence via canonical rendered forms
//! - [`errors`]: Diagnostic accumulation and resumption

use super::*;
use crate::ast::{BinaryOp, Expr, ExprKind, Stmt, StmtKind, UnaryOp};
use crate::lexer::Lexer;


/// Parses `input`, returning the program and the diagnostic messages.
pub(super) fn parse(input: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    let messages = parser
        .diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.message.clone())
        .collect();
    (program, messages)
}

/// Parses `input`, panicking if any diagnostic was recorded.
pub(super) fn parse_program(input: &str) -> Program {
    let (program, messages) = parse(input);
    assert!(
        messages.is_empty(),
        "unexpected diagnostics for {:?}: {:?}",
        input,
        messages
    );
    program
}

/// Parses `input` and returns its only statement.
pub(super) fn parse_single_statement(input: &str) -> Stmt {
    let mut program = parse_program(input);
    assert_eq!(
        program.statements.len(),
        1,
        "expected one statement for {:?}",
        input
    );
    program.statements.remove(0)
}

/// Parses `input` and returns its only statement as an expression.
pub(super) fn parse_first_expr(input: &str) -> Expr {
    match parse_single_statement(input).kind {
        StmtKind::Expr(expression) => expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

/// Parses `input` and returns the recorded diagnostic messages, panicking
/// if there were none.
pub(super) fn parse_errors(input: &str) -> Vec<String> {
    let (_, messages) = parse(input);
    assert!(
        !messages.is_empty(),
        "expected diagnostics for {:?}",
        input
    );
    messages
}
