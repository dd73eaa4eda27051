// SPDX-License-Identifier: Apache-2.0

use crate::tokenizer::TokenKind;

/// The grammar position the parser was in when it met an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Any JSON value.
    Value,
    /// A string key, or `}` to close the object.
    ObjectKeyOrEnd,
    /// The `:` after an object key.
    Colon,
    /// `,` or `}` after an object member.
    CommaOrObjectEnd,
    /// `,` or `]` after an array element.
    CommaOrArrayEnd,
}

impl core::fmt::Display for Expected {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Expected::Value => "a value",
            Expected::ObjectKeyOrEnd => "an object key or '}'",
            Expected::Colon => "':'",
            Expected::CommaOrObjectEnd => "',' or '}'",
            Expected::CommaOrArrayEnd => "',' or ']'",
        })
    }
}

/// Errors that can occur while building a document.
///
/// Parsing stops at the first error; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that does not fit the grammar at this position. `found` is
    /// [`TokenKind::Error`] when the bytes did not form a token at all.
    Unexpected {
        expected: Expected,
        found: TokenKind,
        position: usize,
    },
    /// Containers were nested deeper than the configured limit.
    MaxDepthReached { limit: usize, position: usize },
}

impl ParseError {
    /// Byte offset in the input where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Unexpected { position, .. } => *position,
            ParseError::MaxDepthReached { position, .. } => *position,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Unexpected {
                expected,
                found: TokenKind::Error,
                position,
            } => write!(f, "invalid token at {position}, expected {expected}"),
            ParseError::Unexpected {
                expected,
                found,
                position,
            } => write!(f, "expected {expected} at {position}, found {found}"),
            ParseError::MaxDepthReached { limit, position } => {
                write!(f, "nesting deeper than {limit} levels at {position}")
            }
        }
    }
}

/// Reasons an escaped string value cannot be resolved.
///
/// Offsets are relative to the start of the string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeError {
    /// A backslash followed by a byte that is not a JSON escape.
    InvalidEscapeSequence { byte: u8, offset: usize },
    /// A `\u` escape with a non-hex digit among its four digits.
    InvalidUnicodeHex { offset: usize },
    /// A `\u` escape with fewer than four bytes left in the value.
    TruncatedUnicodeEscape { offset: usize },
    /// A backslash as the last byte of the value.
    TrailingBackslash { offset: usize },
}

impl core::fmt::Display for EscapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EscapeError::InvalidEscapeSequence { byte, offset } => {
                write!(f, "invalid escape '\\{}' at {offset}", *byte as char)
            }
            EscapeError::InvalidUnicodeHex { offset } => {
                write!(f, "invalid hex digit in unicode escape at {offset}")
            }
            EscapeError::TruncatedUnicodeEscape { offset } => {
                write!(f, "incomplete unicode escape at {offset}")
            }
            EscapeError::TrailingBackslash { offset } => {
                write!(f, "dangling backslash at {offset}")
            }
        }
    }
}
