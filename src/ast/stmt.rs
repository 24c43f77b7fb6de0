//! Statement nodes for the Lince AST.

use std::fmt;

use super::expr::{Expr, Identifier};
use crate::token::Span;

/// The kind of a statement, without source location information.
///
/// Use [`Stmt`] for the full AST node with span information.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// A declaration: `variable <name> = <value>;`.
    Let {
        /// The declared name.
        name: Identifier,
        /// The bound expression.
        value: Expr,
    },

    /// An assignment: `<name> = <value>`.
    ///
    /// Declarations and assignments have identical runtime effect: both
    /// write the innermost scope.
    Assign {
        /// The assigned name.
        name: Identifier,
        /// The assigned expression.
        value: Expr,
    },

    /// A return statement: `regresa <value>;`.
    Return(Expr),

    /// A loop statement: `mientras (<condition>) { … }`.
    Loop {
        /// The loop condition, re-tested before every iteration.
        condition: Expr,
        /// The loop body.
        body: Block,
    },

    /// A bare expression used as a statement.
    Expr(Expr),
}

/// A statement with its source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "variable {} = {};", name, value),
            StmtKind::Assign { name, value } => write!(f, "{} = {}", name, value),
            StmtKind::Return(value) => write!(f, "regresa {};", value),
            StmtKind::Loop { condition, body } => write!(f, "mientras {} {}", condition, body),
            StmtKind::Expr(expression) => write!(f, "{}", expression),
        }
    }
}

/// A brace-delimited, ordered sequence of statements.
#[derive(Debug, Clone)]
pub struct Block {
    /// The statements of the block, in source order.
    pub statements: Vec<Stmt>,
    /// The source location of the block, from the opening brace.
    pub span: Span,
}

impl Block {
    /// Creates a new block with the given statements and span.
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        Block { statements, span }
    }
}

impl fmt::Display for Block {
    /// Renders the member statements concatenated, without braces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
