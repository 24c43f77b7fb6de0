//! Abstract Syntax Tree definitions for the Lince programming language.
//!
//! This module defines the data structures that represent parsed Lince
//! programs. The AST is produced by the [`crate::parser`] and walked by the
//! [`crate::evaluator`].
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node: an ordered sequence of statements
//! - [`Stmt`] - Statements (declarations, assignments, returns, loops, and
//!   expression statements)
//! - [`Block`] - A brace-delimited sequence of statements
//! - [`Expr`] - Expressions (literals, identifiers, operators, conditionals,
//!   function literals, and calls)
//!
//! Each node includes source location information
//! ([`Span`](crate::token::Span)), principally for the line numbers carried
//! by runtime diagnostics.
//!
//! Every node renders to a canonical textual form through [`std::fmt::Display`];
//! infix and prefix expressions render fully parenthesized, which the parser
//! tests use to check operator precedence.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and operator enums
//! - [`stmt`] - Statement nodes and blocks
//! - [`program`] - The top-level program node
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::evaluator`] - Evaluates the AST

mod expr;
mod program;
mod stmt;

#[cfg(test)]
mod tests;

pub use expr::{BinaryOp, Expr, ExprKind, Identifier, UnaryOp};
pub use program::Program;
pub use stmt::{Block, Stmt, StmtKind};
