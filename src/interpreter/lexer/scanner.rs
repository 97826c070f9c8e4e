use std::mem;

use logos::Logos;
use tracing::{trace, warn};

use crate::interpreter::lexer::{
    raw::RawToken,
    token::{Literal, StringSegment, Token, TokenKind, keyword},
};

/// Converts source text into a token stream terminated by `Eof`.
///
/// Scanning never fails. Characters the language does not know about and
/// string literals that never close become inert [`TokenKind::Trivia`] tokens,
/// reported through `tracing`, so the parser can produce a clearer error or
/// ignore them.
///
/// The lexemes of the returned tokens, concatenated in order, are exactly
/// `source`.
///
/// # Example
/// ```
/// use glint::interpreter::lexer::{scanner::scan, token::TokenKind};
///
/// let tokens = scan("price * 2");
/// let text: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
///
/// assert_eq!(text, "price * 2");
/// assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    scanner.scan_tokens(Mode::TopLevel);
    scanner.finish()
}

/// Where the general scanning routine should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Run to the end of the input.
    TopLevel,
    /// Stop in front of the `)` that closes a `\(` interpolation.
    Interpolation,
}

/// A single forward cursor over the source, collecting tokens as it goes.
struct Scanner<'src> {
    source: &'src str,
    cursor: usize,
    tokens: Vec<Token>,
}

impl<'src> Scanner<'src> {
    const fn new(source: &'src str) -> Self {
        Self { source,
               cursor: 0,
               tokens: Vec::new() }
    }

    fn finish(mut self) -> Vec<Token> {
        self.tokens.push(Token::eof(self.source.len()));
        trace!(count = self.tokens.len(), "scanned source");
        self.tokens
    }

    fn rest(&self) -> &'src str {
        &self.source[self.cursor..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Pushes a token whose lexeme runs from `start` to the cursor.
    fn push(&mut self, start: usize, kind: TokenKind) {
        self.tokens
            .push(Token::new(&self.source[start..self.cursor], kind, start));
    }

    fn push_segment(&mut self, start: usize, segment: StringSegment) {
        self.push(start, TokenKind::Literal(Literal::String(segment)));
    }

    /// The general scanning routine.
    ///
    /// In [`Mode::Interpolation`] it tracks its own parenthesis depth and
    /// returns, without consuming it, at the first `)` found at depth zero.
    /// Both modes return at the end of the input.
    fn scan_tokens(&mut self, mode: Mode) {
        let mut depth = 0usize;

        while let Some(c) = self.peek() {
            if mode == Mode::Interpolation {
                match c {
                    '(' => depth += 1,
                    ')' if depth == 0 => return,
                    ')' => depth -= 1,
                    _ => {},
                }
            }
            self.scan_token();
        }
    }

    fn scan_token(&mut self) {
        let start = self.cursor;
        let (raw, len) = {
            let mut lexer = RawToken::lexer(self.rest());
            let raw = lexer.next();
            (raw, lexer.span().end)
        };

        match raw {
            Some(Ok(RawToken::Quote)) => self.scan_string(),
            Some(Ok(RawToken::Digits)) => {
                self.cursor += len;
                self.scan_fraction();
                self.push_number(start);
            },
            Some(Ok(RawToken::Identifier)) => {
                self.cursor += len;
                let name = &self.source[start..self.cursor];
                let kind = keyword(name).unwrap_or_else(|| TokenKind::Identifier(name.to_string()));
                self.push(start, kind);
            },
            Some(Ok(raw)) => {
                self.cursor += len;
                self.push(start, raw.simple_kind().unwrap_or(TokenKind::Trivia));
            },
            Some(Err(())) | None => {
                self.cursor += self.peek().map_or(1, char::len_utf8);
                warn!(offset = start,
                      lexeme = &self.source[start..self.cursor],
                      "unrecognized character");
                self.push(start, TokenKind::Trivia);
            },
        }
    }

    /// Extends a digit run with `.digits`, but only when a digit follows the
    /// dot. `3.formatted` stays `3`, `.`, `formatted`.
    fn scan_fraction(&mut self) {
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor += 1;
            self.cursor += self.rest().bytes().take_while(u8::is_ascii_digit).count();
        }
    }

    fn push_number(&mut self, start: usize) {
        let lexeme = &self.source[start..self.cursor];
        let kind = match lexeme.parse::<f64>() {
            Ok(value) => TokenKind::Literal(Literal::Number(value)),
            Err(e) => {
                warn!(offset = start, lexeme, error = %e, "invalid number literal");
                TokenKind::Trivia
            },
        };
        self.push(start, kind);
    }

    /// The string literal state machine. The cursor sits on the opening `"`.
    fn scan_string(&mut self) {
        let start = self.cursor;
        let first_token = self.tokens.len();

        self.cursor += 1;
        self.push_segment(start, StringSegment::Start);

        let mut chunk_start = self.cursor;
        let mut text = String::new();

        loop {
            let Some(c) = self.peek() else {
                self.abandon_string(start, first_token);
                return;
            };

            match c {
                '"' => {
                    self.flush_plaintext(chunk_start, &mut text);
                    let quote = self.cursor;
                    self.cursor += 1;
                    self.push_segment(quote, StringSegment::End);
                    return;
                },
                '\\' => match self.peek_next() {
                    Some('(') => {
                        self.flush_plaintext(chunk_start, &mut text);
                        let open = self.cursor;
                        self.cursor += 2;
                        self.push_segment(open, StringSegment::InterpolationStart);

                        self.scan_tokens(Mode::Interpolation);

                        if self.peek() != Some(')') {
                            self.abandon_string(start, first_token);
                            return;
                        }
                        let close = self.cursor;
                        self.cursor += 1;
                        self.push_segment(close, StringSegment::InterpolationEnd);
                        chunk_start = self.cursor;
                    },
                    Some(escaped) => {
                        let decoded = match escaped {
                            '"' => '"',
                            '\\' => '\\',
                            'n' => '\n',
                            't' => '\t',
                            'r' => '\r',
                            other => {
                                text.push('\\');
                                other
                            },
                        };
                        text.push(decoded);
                        self.cursor += 1 + escaped.len_utf8();
                    },
                    None => {
                        text.push('\\');
                        self.cursor += 1;
                    },
                },
                c => {
                    text.push(c);
                    self.cursor += c.len_utf8();
                },
            }
        }
    }

    fn flush_plaintext(&mut self, chunk_start: usize, text: &mut String) {
        if self.cursor > chunk_start {
            let text = mem::take(text);
            self.push_segment(chunk_start, StringSegment::Plaintext(text));
        }
    }

    /// Replaces everything emitted since the opening quote with a single
    /// trivia token that runs to the end of the input.
    fn abandon_string(&mut self, start: usize, first_token: usize) {
        self.cursor = self.source.len();
        self.tokens.truncate(first_token);
        warn!(offset = start, "unterminated string literal");
        self.push(start, TokenKind::Trivia);
    }
}
