//! Lexical analyzer for the Lince programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s, one token per call.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes keywords, identifiers, integer and string literals, and
//!   punctuation
//! - Tracks source positions for diagnostics
//! - Skips whitespace, counting lines
//!
//! The lexer never fails: characters outside the language are emitted as
//! [`TokenKind::Illegal`] tokens and surface later as parser diagnostics.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `variable`, `procedimiento`, `mientras`, `regresa`, `si`,
//!   `si_no`, `verdadero`, `falso`, `nulo`
//! - **Identifiers**: an ASCII letter followed by ASCII letters, digits, or
//!   underscores
//! - **Integer literals**: sequences of ASCII digits (e.g. `42`, `0`)
//! - **String literals**: enclosed in `"…"` or `'…'`, no escape processing;
//!   an unterminated string runs to the end of input
//! - **Operators**: `= + - * / < > ! == !=`
//! - **Delimiters**: `( ) { } , ;`
//!
//! # Examples
//!
//! ```
//! use lince::lexer::Lexer;
//! use lince::token::TokenKind;
//!
//! let mut lexer = Lexer::new("variable cinco = 5;");
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().kind, TokenKind::Ident);
//! assert_eq!(lexer.next_token().kind, TokenKind::Assign);
//! assert_eq!(lexer.next_token().kind, TokenKind::Int);
//! assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
//! assert_eq!(lexer.next_token().kind, TokenKind::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Position tracking and character navigation
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Lince source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for diagnostics. Tokens are produced on demand with
/// [`Lexer::next_token`]; once the input is exhausted every further call
/// yields an end-of-file token.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
    /// Whether the end-of-file token has already been produced, used by the
    /// [`Iterator`] adapter to terminate.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Advances past whitespace and emits exactly one token.
    ///
    /// Whitespace is `' '`, `'\t'`, `'\r'`, and `'\n'`; a newline increments
    /// the line counter. At the end of input this returns a
    /// [`TokenKind::Eof`] token whose literal is the NUL sentinel, and keeps
    /// returning it on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(c) = self.current_char() else {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Token::new(TokenKind::Eof, "\0", span);
        };

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        if c.is_ascii_alphabetic() {
            return self.read_identifier(start_pos, start_line, start_column);
        }
        if c.is_ascii_digit() {
            return self.read_number(start_pos, start_line, start_column);
        }
        if c == '"' || c == '\'' {
            return self.read_string(c, start_pos, start_line, start_column);
        }

        self.read_operator(c, start_pos, start_line, start_column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token of the input, ending with the first
    /// [`TokenKind::Eof`] token.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}
