//! AST rendering tests.
//!
//! Tests for:
//! - Canonical rendering of hand-built nodes
//! - Program equality by rendered form

use super::*;
use crate::token::Span;

fn span() -> Span {
    Span::new(0, 0, 1, 1)
}

fn integer(value: i64) -> Expr {
    Expr::new(ExprKind::Integer(value), span())
}

fn identifier_expr(name: &str) -> Expr {
    Expr::new(ExprKind::Identifier(name.to_string()), span())
}

// ===================
// Statement rendering
// ===================

#[test]
fn test_let_statement_rendering() {
    let statement = Stmt::new(
        StmtKind::Let {
            name: Identifier::new("x", span()),
            value: integer(5),
        },
        span(),
    );
    assert_eq!(statement.to_string(), "variable x = 5;");
}

#[test]
fn test_assign_statement_rendering() {
    let statement = Stmt::new(
        StmtKind::Assign {
            name: Identifier::new("x", span()),
            value: integer(7),
        },
        span(),
    );
    assert_eq!(statement.to_string(), "x = 7");
}

#[test]
fn test_return_statement_rendering() {
    let statement = Stmt::new(StmtKind::Return(identifier_expr("foo")), span());
    assert_eq!(statement.to_string(), "regresa foo;");
}

#[test]
fn test_loop_statement_rendering() {
    let body = Block::new(
        vec![Stmt::new(StmtKind::Expr(identifier_expr("x")), span())],
        span(),
    );
    let statement = Stmt::new(
        StmtKind::Loop {
            condition: Expr::new(ExprKind::Boolean(true), span()),
            body,
        },
        span(),
    );
    assert_eq!(statement.to_string(), "mientras verdadero x");
}

// ===================
// Expression rendering
// ===================

#[test]
fn test_prefix_rendering() {
    let expression = Expr::new(
        ExprKind::Prefix {
            operator: UnaryOp::Neg,
            right: Box::new(identifier_expr("a")),
        },
        span(),
    );
    assert_eq!(expression.to_string(), "(-a)");
}

#[test]
fn test_infix_rendering() {
    let expression = Expr::new(
        ExprKind::Infix {
            left: Box::new(integer(2)),
            operator: BinaryOp::Mul,
            right: Box::new(integer(3)),
        },
        span(),
    );
    assert_eq!(expression.to_string(), "(2 * 3)");
}

#[test]
fn test_boolean_and_null_rendering() {
    assert_eq!(Expr::new(ExprKind::Boolean(true), span()).to_string(), "verdadero");
    assert_eq!(Expr::new(ExprKind::Boolean(false), span()).to_string(), "falso");
    assert_eq!(Expr::new(ExprKind::Null, span()).to_string(), "nulo");
}

#[test]
fn test_string_renders_without_quotes() {
    let expression = Expr::new(ExprKind::Str("hola".to_string()), span());
    assert_eq!(expression.to_string(), "hola");
}

#[test]
fn test_function_rendering() {
    let body = Block::new(
        vec![Stmt::new(
            StmtKind::Expr(Expr::new(
                ExprKind::Infix {
                    left: Box::new(identifier_expr("x")),
                    operator: BinaryOp::Add,
                    right: Box::new(identifier_expr("y")),
                },
                span(),
            )),
            span(),
        )],
        span(),
    );
    let expression = Expr::new(
        ExprKind::Function {
            parameters: vec![Identifier::new("x", span()), Identifier::new("y", span())],
            body,
        },
        span(),
    );
    assert_eq!(expression.to_string(), "procedimiento(x, y){(x + y)}");
}

#[test]
fn test_function_without_parameters_rendering() {
    let expression = Expr::new(
        ExprKind::Function {
            parameters: vec![],
            body: Block::new(vec![], span()),
        },
        span(),
    );
    assert_eq!(expression.to_string(), "procedimiento(){}");
}

#[test]
fn test_call_rendering() {
    let expression = Expr::new(
        ExprKind::Call {
            function: Box::new(identifier_expr("suma")),
            arguments: vec![integer(1), integer(2)],
        },
        span(),
    );
    assert_eq!(expression.to_string(), "suma(1, 2)");
}

#[test]
fn test_if_rendering() {
    let consequence = Block::new(
        vec![Stmt::new(StmtKind::Expr(identifier_expr("z")), span())],
        span(),
    );
    let alternative = Block::new(
        vec![Stmt::new(StmtKind::Expr(identifier_expr("w")), span())],
        span(),
    );
    let expression = Expr::new(
        ExprKind::If {
            condition: Box::new(identifier_expr("x")),
            consequence,
            alternative: Some(alternative),
        },
        span(),
    );
    assert_eq!(expression.to_string(), "si x z si_now");
}

// ===================
// Program equality
// ===================

#[test]
fn test_program_rendering_concatenates_statements() {
    let program = Program::new(vec![
        Stmt::new(StmtKind::Expr(integer(1)), span()),
        Stmt::new(StmtKind::Expr(integer(2)), span()),
    ]);
    assert_eq!(program.to_string(), "12");
}

#[test]
fn test_programs_compare_by_rendered_form() {
    let first = Program::new(vec![Stmt::new(
        StmtKind::Let {
            name: Identifier::new("x", span()),
            value: integer(5),
        },
        span(),
    )]);
    let second = Program::new(vec![Stmt::new(
        StmtKind::Let {
            name: Identifier::new("x", Span::new(9, 10, 4, 2)),
            value: integer(5),
        },
        Span::new(0, 14, 4, 1),
    )]);
    assert_eq!(first, second);

    let different = Program::new(vec![Stmt::new(
        StmtKind::Let {
            name: Identifier::new("y", span()),
            value: integer(5),
        },
        span(),
    )]);
    assert_ne!(first, different);
}
