// SPDX-License-Identifier: Apache-2.0

/// The lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A number lexeme such as `-12.5e3`.
    Number,
    /// A string; the token value holds the bytes between the quotes, escapes unresolved.
    String,
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// The literal `null`.
    Null,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// Bytes that do not start any valid token, or a malformed literal, string or number.
    Error,
    /// No input left.
    EndOfStream,
}

impl TokenKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Null => "Null",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::OpenBrace => "OpenBrace",
            TokenKind::CloseBrace => "CloseBrace",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::CloseBracket => "CloseBracket",
            TokenKind::Error => "Error",
            TokenKind::EndOfStream => "EndOfStream",
        }
    }

    /// True for the kinds that carry a complete JSON value on their own.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexical unit: its kind and a view into the source.
///
/// `value` holds the lexeme for numbers and keywords and the unquoted body for
/// strings. Punctuation, `Error` and `EndOfStream` tokens have an empty value.
/// `start` is the byte offset where the token begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a [u8],
    pub start: usize,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, value: &'a [u8], start: usize) -> Self {
        Self { kind, value, start }
    }

    pub(crate) const fn error(start: usize) -> Self {
        Self::new(TokenKind::Error, &[], start)
    }
}
