//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the various token types from the
//! input: identifiers and keywords, integer and string literals, and the
//! one- and two-character operators and delimiters.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, &self.input[start_pos..self.pos], span)
    }

    /// Reads an operator or delimiter token starting at `c`.
    ///
    /// `=` and `!` look one character ahead to form `==` and `!=`. Any
    /// character that does not belong to the language becomes a
    /// [`TokenKind::Illegal`] token carrying the offending character.
    pub(super) fn read_operator(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        match c {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    self.advance();
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    Token::new(TokenKind::Eq, "==", span)
                } else {
                    self.single_char_token(TokenKind::Assign, start_pos, start_line, start_column)
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    self.advance();
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    Token::new(TokenKind::NotEq, "!=", span)
                } else {
                    self.single_char_token(TokenKind::Negation, start_pos, start_line, start_column)
                }
            }
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column),
            '*' => {
                self.single_char_token(TokenKind::Multiplication, start_pos, start_line, start_column)
            }
            '/' => self.single_char_token(TokenKind::Division, start_pos, start_line, start_column),
            '<' => self.single_char_token(TokenKind::Lt, start_pos, start_line, start_column),
            '>' => self.single_char_token(TokenKind::Gt, start_pos, start_line, start_column),
            '(' => self.single_char_token(TokenKind::LParen, start_pos, start_line, start_column),
            ')' => self.single_char_token(TokenKind::RParen, start_pos, start_line, start_column),
            '{' => self.single_char_token(TokenKind::LBrace, start_pos, start_line, start_column),
            '}' => self.single_char_token(TokenKind::RBrace, start_pos, start_line, start_column),
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            ';' => self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column),
            _ => self.single_char_token(TokenKind::Illegal, start_pos, start_line, start_column),
        }
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers start with an ASCII letter and continue with ASCII
    /// letters, digits, or underscores. If the word matches one of the
    /// language keywords the corresponding keyword kind is returned instead
    /// of [`TokenKind::Ident`].
    pub(super) fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let value = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match value {
            "variable" => TokenKind::Let,
            "procedimiento" => TokenKind::Function,
            "mientras" => TokenKind::Loop,
            "regresa" => TokenKind::Return,
            "si" => TokenKind::If,
            "si_no" => TokenKind::Else,
            "verdadero" => TokenKind::True,
            "falso" => TokenKind::False,
            "nulo" => TokenKind::Null,
            _ => TokenKind::Ident,
        };

        Token::new(kind, value, span)
    }

    /// Reads an integer literal: one or more ASCII digits.
    ///
    /// The literal is kept as text; the parser converts it to a number and
    /// reports values that do not fit.
    pub(super) fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Int, &self.input[start_pos..self.pos], span)
    }

    /// Reads a string literal delimited by `quote` (`"` or `'`).
    ///
    /// The literal is the unquoted content; no escape sequences are
    /// processed. An unterminated string is tolerated and runs to the end of
    /// the input.
    pub(super) fn read_string(
        &mut self,
        quote: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance(); // opening quote
        let content_start = self.pos;

        while self.current_char().is_some_and(|c| c != quote) {
            self.advance();
        }

        let content_end = self.pos;
        if self.current_char() == Some(quote) {
            self.advance(); // closing quote
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Str, &self.input[content_start..content_end], span)
    }
}
