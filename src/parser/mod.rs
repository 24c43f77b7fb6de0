//! Parser for the Lince programming language.
//!
//! This module provides the [`Parser`] struct which transforms the lexer's
//! token stream into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! The parser implements Pratt parsing (recursive descent driven by
//! per-token prefix and infix handlers plus a precedence comparison) with
//! two-token lookahead. It pulls tokens from the [`crate::lexer`] on demand
//! and never aborts: problems are recorded as [`Diagnostic`]s and parsing
//! resumes at the next statement.
//!
//! # Grammar
//!
//! ```text
//! program     → stmt* EOF
//! stmt        → let_stmt | assign_stmt | return_stmt | while_stmt | expr_stmt
//! let_stmt    → "variable" IDENT "=" expr ";"?
//! assign_stmt → IDENT "=" expr ";"?
//! return_stmt → "regresa" expr ";"?
//! while_stmt  → "mientras" "(" expr ")" block ";"?
//! expr_stmt   → expr ";"?
//! block       → "{" stmt* "}"
//! expr        → prefix (infix)*            // Pratt, see parser::expr
//! ```
//!
//! # Examples
//!
//! ```
//! use lince::lexer::Lexer;
//! use lince::parser::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("variable x = 5;"));
//! let program = parser.parse_program();
//!
//! assert!(parser.diagnostics().is_empty());
//! assert_eq!(program.to_string(), "variable x = 5;");
//! ```
//!
//! # Module Structure
//!
//! - [`diagnostic`] - The accumulated diagnostic type
//! - `helpers` - Token navigation and expectation checks
//! - `stmt` - Statement parsing
//! - `expr` - Pratt expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::evaluator`] - Walks the AST

mod diagnostic;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use diagnostic::Diagnostic;

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// A Pratt parser for the Lince language.
///
/// The parser keeps two tokens of lookahead (`current` and `peek`) and a
/// growing list of diagnostics. It is designed to be used once per source
/// string.
pub struct Parser<'a> {
    /// The lexer tokens are pulled from.
    lexer: Lexer<'a>,
    /// The token under examination.
    current: Token,
    /// The token after `current`.
    peek: Token,
    /// Diagnostics accumulated along the way.
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over the given lexer.
    ///
    /// Construction primes both lookahead tokens.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            diagnostics: Vec::new(),
        }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// This is the main entry point for parsing. It parses statements until
    /// the end of input; statements that fail to parse are dropped after
    /// recording a diagnostic, and parsing continues with the next one.
    /// Callers must check [`Parser::diagnostics`] before trusting the
    /// returned program.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.current.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        Program::new(statements)
    }

    /// The diagnostics accumulated so far, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
