//! Expression parsing using the Pratt algorithm.
//!
//! This module implements expression parsing with operator precedence.
//! Each token kind that can start an expression has a prefix handler; each
//! operator that can continue one has an infix handler. A precedence
//! comparison between the caller's level and the peek token's level decides
//! when an infix handler takes over, which yields left-associative binary
//! operators without backtracking.

use super::Parser;
use crate::ast::{BinaryOp, Block, Expr, ExprKind, Identifier, UnaryOp};
use crate::token::TokenKind;

/// Operator precedence levels, lowest first.
///
/// The derived ordering is what drives the Pratt loop: an infix handler
/// runs while the caller's level is strictly below the peek operator's
/// level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    Lowest,
    /// `==` and `!=`.
    Equals,
    /// `<` and `>`.
    LessGreater,
    /// `+` and `-`.
    Sum,
    /// `*` and `/`.
    Product,
    /// Prefix `-` and `!`.
    Prefix,
    /// The `(` of a call expression.
    Call,
}

/// Returns the infix precedence of a token kind.
///
/// Token kinds with no infix role sit at [`Precedence::Lowest`], which
/// keeps the Pratt loop from consuming them.
fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Division | TokenKind::Multiplication => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

/// Returns the binary operator for an infix token kind.
fn binary_op_of(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Multiplication => Some(BinaryOp::Mul),
        TokenKind::Division => Some(BinaryOp::Div),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses an expression at the given minimum precedence.
    ///
    /// The core Pratt loop:
    /// 1. Parse a prefix expression for the current token.
    /// 2. While the peek token is not `;` and binds tighter than
    ///    `precedence`, consume it and apply its infix handler to the
    ///    expression built so far.
    ///
    /// Returns `None` when no expression could be parsed; a diagnostic has
    /// been recorded in that case.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while self.peek.kind != TokenKind::Semicolon && precedence < precedence_of(self.peek.kind)
        {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Parses the expression form the current token can start.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Ident => Some(Expr::new(
                ExprKind::Identifier(self.current.literal.clone()),
                self.current.span,
            )),
            TokenKind::Int => self.parse_integer(),
            TokenKind::True => Some(Expr::new(ExprKind::Boolean(true), self.current.span)),
            TokenKind::False => Some(Expr::new(ExprKind::Boolean(false), self.current.span)),
            TokenKind::Null => Some(Expr::new(ExprKind::Null, self.current.span)),
            TokenKind::Str => Some(Expr::new(
                ExprKind::Str(self.current.literal.clone()),
                self.current.span,
            )),
            TokenKind::Minus => self.parse_prefix_operator(UnaryOp::Neg),
            TokenKind::Negation => self.parse_prefix_operator(UnaryOp::Not),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            _ => {
                self.no_parselet_diagnostic();
                None
            }
        }
    }

    /// Parses an integer literal from the current token.
    ///
    /// A literal too large for `i64` is reported with the missing-parselet
    /// diagnostic, matching how any other unusable expression start is
    /// reported.
    fn parse_integer(&mut self) -> Option<Expr> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expr::new(ExprKind::Integer(value), self.current.span)),
            Err(_) => {
                self.no_parselet_diagnostic();
                None
            }
        }
    }

    /// Parses a prefix operation: the operator is the current token.
    fn parse_prefix_operator(&mut self, operator: UnaryOp) -> Option<Expr> {
        let start = self.current.span;
        self.advance();

        let right = self.parse_expression(Precedence::Prefix)?;
        let span = start.to(right.span);
        Some(Expr::new(
            ExprKind::Prefix {
                operator,
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Parses a parenthesized expression, returning the inner expression.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let inner = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(inner)
    }

    /// Parses a conditional:
    /// `si ( <expr> ) <block> [si_no <block>]`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
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
        let consequence = self.parse_block();

        let alternative = if self.peek.kind == TokenKind::Else {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        let end = alternative
            .as_ref()
            .map(|block| block.span)
            .unwrap_or(consequence.span);
        let span = start.to(end);

        Some(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            span,
        ))
    }

    /// Parses a function literal:
    /// `procedimiento ( <params> ) <block>`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        let start = self.current.span;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        let span = start.to(body.span);
        Some(Expr::new(ExprKind::Function { parameters, body }, span))
    }

    /// Parses a comma-separated parameter list, stopping at `)`.
    ///
    /// The current token is the opening `(`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek.kind == TokenKind::RParen {
            self.advance();
            return Some(parameters);
        }
        self.advance();
        parameters.push(Identifier::new(
            self.current.literal.clone(),
            self.current.span,
        ));

        while self.peek.kind == TokenKind::Comma {
            self.advance();
            self.advance();
            parameters.push(Identifier::new(
                self.current.literal.clone(),
                self.current.span,
            ));
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }

    /// Applies the infix handler for the current token to `left`.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        if self.current.kind == TokenKind::LParen {
            return self.parse_call_expression(left);
        }

        let Some(operator) = binary_op_of(self.current.kind) else {
            self.no_parselet_diagnostic();
            return None;
        };
        let precedence = precedence_of(self.current.kind);
        self.advance();

        let right = self.parse_expression(precedence)?;
        let span = left.span.to(right.span);
        Some(Expr::new(
            ExprKind::Infix {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Parses a call expression; `function` is the already-parsed callee
    /// and the current token is the opening `(`.
    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_call_arguments()?;

        let span = function.span.to(self.current.span);
        Some(Expr::new(
            ExprKind::Call {
                function: Box::new(function),
                arguments,
            },
            span,
        ))
    }

    /// Parses a comma-separated argument list, stopping at `)`.
    ///
    /// An argument that fails to parse is dropped after its diagnostic;
    /// the list keeps collecting the remaining arguments.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expr>> {
        let mut arguments = Vec::new();

        if self.peek.kind == TokenKind::RParen {
            self.advance();
            return Some(arguments);
        }
        self.advance();

        if let Some(argument) = self.parse_expression(Precedence::Lowest) {
            arguments.push(argument);
        }

        while self.peek.kind == TokenKind::Comma {
            self.advance();
            self.advance();
            if let Some(argument) = self.parse_expression(Precedence::Lowest) {
                arguments.push(argument);
            }
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(arguments)
    }
}
