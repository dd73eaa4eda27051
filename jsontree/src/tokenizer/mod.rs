// SPDX-License-Identifier: Apache-2.0

mod token;
pub use token::{Token, TokenKind};

use crate::slice_input_buffer::SliceInputBuffer;

/// Splits a byte slice into JSON tokens, one per call to [`next_token`].
///
/// The tokenizer never allocates: every token value is a view into the input.
/// Malformed input produces a [`TokenKind::Error`] token rather than a failure,
/// and running out of input produces [`TokenKind::EndOfStream`] on every
/// subsequent call.
///
/// As an [`Iterator`], it yields tokens up to (not including) `EndOfStream` and
/// stops after the first `Error` token.
///
/// # Example
/// ```
/// use jsontree::{TokenKind, Tokenizer};
/// let mut tokenizer = Tokenizer::new(br#"{"id": 7}"#);
/// assert_eq!(tokenizer.next_token().kind, TokenKind::OpenBrace);
/// let key = tokenizer.next_token();
/// assert_eq!((key.kind, key.value), (TokenKind::String, &b"id"[..]));
/// ```
///
/// [`next_token`]: Tokenizer::next_token
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    buffer: SliceInputBuffer<'a>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            buffer: SliceInputBuffer::new(input),
            finished: false,
        }
    }

    /// Byte offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.buffer.current_pos()
    }

    /// True when no bytes remain, whitespace included.
    pub fn is_at_end(&self) -> bool {
        self.buffer.is_at_end()
    }

    /// Consumes the very next raw byte if it equals `byte`, without skipping whitespace.
    pub(crate) fn match_raw_byte(&mut self, byte: u8) -> bool {
        self.buffer.match_byte(byte)
    }

    /// Scans the next token and advances past it.
    pub fn next_token(&mut self) -> Token<'a> {
        self.buffer.skip_whitespace();
        let start = self.buffer.current_pos();

        let Ok(first) = self.buffer.consume_byte() else {
            return Token::new(TokenKind::EndOfStream, &[], start);
        };

        let token = match first {
            b':' => Token::new(TokenKind::Colon, &[], start),
            b',' => Token::new(TokenKind::Comma, &[], start),
            b'{' => Token::new(TokenKind::OpenBrace, &[], start),
            b'}' => Token::new(TokenKind::CloseBrace, &[], start),
            b'[' => Token::new(TokenKind::OpenBracket, &[], start),
            b']' => Token::new(TokenKind::CloseBracket, &[], start),
            b't' => self.keyword(TokenKind::True, b"rue", start),
            b'f' => self.keyword(TokenKind::False, b"alse", start),
            b'n' => self.keyword(TokenKind::Null, b"ull", start),
            b'"' => self.string(start),
            b'-' | b'0'..=b'9' => self.number(first, start),
            _ => Token::error(start),
        };

        log::trace!("token {} at {}", token.kind, token.start);
        token
    }

    fn lexeme(&self, kind: TokenKind, start: usize, end: usize) -> Token<'a> {
        match self.buffer.slice(start, end) {
            Ok(value) => Token::new(kind, value, start),
            Err(_) => Token::error(start),
        }
    }

    // The first letter is already consumed; the rest must follow exactly.
    fn keyword(&mut self, kind: TokenKind, rest: &[u8], start: usize) -> Token<'a> {
        if self.buffer.match_bytes(rest) {
            self.lexeme(kind, start, self.buffer.current_pos())
        } else {
            Token::error(start)
        }
    }

    fn string(&mut self, start: usize) -> Token<'a> {
        let content_start = self.buffer.current_pos();
        loop {
            match self.buffer.consume_byte() {
                // A backslash always swallows the following byte, so a quote is only
                // a terminator after an even run of backslashes.
                Ok(b'\\') => {
                    if self.buffer.consume_byte().is_err() {
                        return Token::error(start);
                    }
                }
                Ok(b'"') => {
                    let content_end = self.buffer.current_pos() - 1;
                    return match self.buffer.slice(content_start, content_end) {
                        Ok(value) => Token::new(TokenKind::String, value, start),
                        Err(_) => Token::error(start),
                    };
                }
                Ok(_) => {}
                Err(_) => return Token::error(start),
            }
        }
    }

    fn number(&mut self, first: u8, start: usize) -> Token<'a> {
        let lead = if first == b'-' {
            match self.buffer.peek() {
                Some(digit @ b'0'..=b'9') => {
                    self.buffer.match_byte(digit);
                    digit
                }
                _ => return Token::error(start),
            }
        } else {
            first
        };

        // No leading zeros: a `0` is the whole integer part.
        if lead != b'0' {
            self.buffer.match_digits();
        }

        let mark = self.buffer.current_pos();
        if self.buffer.match_byte(b'.') && self.buffer.match_digits() == 0 {
            self.buffer.reset_to(mark);
        }

        let mark = self.buffer.current_pos();
        if self.buffer.match_byte(b'e') || self.buffer.match_byte(b'E') {
            let _sign = self.buffer.match_byte(b'+') || self.buffer.match_byte(b'-');
            if self.buffer.match_digits() == 0 {
                self.buffer.reset_to(mark);
            }
        }

        self.lexeme(TokenKind::Number, start, self.buffer.current_pos())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        match token.kind {
            TokenKind::EndOfStream => {
                self.finished = true;
                None
            }
            TokenKind::Error => {
                self.finished = true;
                Some(token)
            }
            _ => Some(token),
        }
    }
}

impl core::iter::FusedIterator for Tokenizer<'_> {}
