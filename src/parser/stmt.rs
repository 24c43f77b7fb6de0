//! Statement parsing.

use super::Parser;
use super::expr::Precedence;
use crate::ast::{Block, Identifier, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser<'_> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// An identifier is only an assignment target when the peek token is
    /// `=`; otherwise it starts an expression statement.
    ///
    /// Returns `None` when the statement could not be parsed; a diagnostic
    /// has been recorded in that case.
    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Ident if self.peek.kind == TokenKind::Assign => {
                self.parse_assign_statement()
            }
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Loop => self.parse_while_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a declaration: `variable <name> = <expr> ;?`.
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let start = self.current.span;

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.literal.clone(), self.current.span);

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        let span = start.to(value.span);
        Some(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// Parses an assignment: `<name> = <expr> ;?`.
    ///
    /// The current token is the target identifier.
    fn parse_assign_statement(&mut self) -> Option<Stmt> {
        let name = Identifier::new(self.current.literal.clone(), self.current.span);
        let start = self.current.span;

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        let span = start.to(value.span);
        Some(Stmt::new(StmtKind::Assign { name, value }, span))
    }

    /// Parses a return statement: `regresa <expr> ;?`.
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let start = self.current.span;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        let span = start.to(value.span);
        Some(Stmt::new(StmtKind::Return(value), span))
    }

    /// Parses a loop statement: `mientras ( <expr> ) <block> ;?`.
    fn parse_while_statement(&mut self) -> Option<Stmt> {
        let start = self.current.span;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();

        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();
        self.consume_optional_semicolon();

        let span = start.to(body.span);
        Some(Stmt::new(StmtKind::Loop { condition, body }, span))
    }

    /// Parses a bare expression statement: `<expr> ;?`.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        let span = expression.span;
        Some(Stmt::new(StmtKind::Expr(expression), span))
    }

    /// Parses a block starting at the current `{` token.
    ///
    /// Statements are collected until the closing `}`. An unterminated
    /// block is tolerated: it ends at the end of input.
    pub(super) fn parse_block(&mut self) -> Block {
        let start = self.current.span;
        self.advance();

        let mut statements = Vec::new();
        while self.current.kind != TokenKind::RBrace && self.current.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        let span = start.to(self.current.span);
        Block::new(statements, span)
    }
}
