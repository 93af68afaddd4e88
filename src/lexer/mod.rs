//! Whitespace-delimited lexer shared by the source and instruction front ends.
//!
//! The lexer knows nothing about the language: it splits input on ASCII
//! whitespace, records where every lexeme came from, and in interactive mode
//! stops at a line holding only the terminator.

pub mod span;
pub mod token;

mod cursor;

use tracing::debug;

use crate::lexer::cursor::Cursor;

pub use span::{ByteOffset, Span};
pub use token::Token;

/// Line that ends interactive input early.
pub const TERMINATOR: &str = ".";

/// Where input text comes from, which decides whether the terminator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Whole file; end of text ends the program.
    #[default]
    File,
    /// Typed at a prompt; a lone `.` line ends the program.
    Interactive,
}

/// Returns `true` when `line` is the interactive terminator.
pub fn is_terminator_line(line: &str) -> bool {
    line.trim() == TERMINATOR
}

/// A lexer over one program text.
pub struct Lexer<'a> {
    input: &'a str,
    mode: InputMode,
    cursor: Cursor,
    at_line_start: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for the provided input and mode.
    pub fn new(input: &'a str, mode: InputMode) -> Self {
        Self {
            input,
            mode,
            cursor: Cursor::new(),
            at_line_start: true,
            finished: false,
        }
    }

    /// Returns the input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Scans and returns the next token, or `None` at end of input.
    ///
    /// In [`InputMode::Interactive`] a terminator line also ends input and
    /// nothing after it is scanned.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.finished {
                return None;
            }

            if self.at_line_start {
                self.at_line_start = false;
                if self.mode == InputMode::Interactive
                    && is_terminator_line(self.cursor.rest_of_line(self.input))
                {
                    self.finished = true;
                    return None;
                }
            }

            match self.cursor.peek_byte(self.input) {
                None => {
                    self.finished = true;
                    return None;
                }
                Some(b'\n') => {
                    self.cursor.bump(self.input);
                    self.at_line_start = true;
                }
                Some(byte) if byte.is_ascii_whitespace() => self.cursor.bump(self.input),
                Some(_) => return Some(self.scan_word()),
            }
        }
    }

    /// Drains the lexer into a token vector.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        debug!(tokens = tokens.len(), mode = ?self.mode, "tokenized input");
        tokens
    }

    fn scan_word(&mut self) -> Token {
        let line = self.cursor.line();
        let start = self.cursor.offset();
        while let Some(byte) = self.cursor.peek_byte(self.input) {
            if byte.is_ascii_whitespace() {
                break;
            }
            self.cursor.bump(self.input);
        }
        let end = self.cursor.offset();
        Token::new(
            &self.input[start.as_usize()..end.as_usize()],
            Span::new(line, start, end),
        )
    }
}

/// Splits `input` into tokens under `mode`.
pub fn tokenize(input: &str, mode: InputMode) -> Vec<Token> {
    Lexer::new(input, mode).tokenize()
}
