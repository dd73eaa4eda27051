// SPDX-License-Identifier: Apache-2.0

use core::marker::PhantomData;

use crate::config::{DefaultConfig, DepthLimit};
use crate::document::{Document, NodeId, NodeKind};
use crate::parse_error::{Expected, ParseError};
use crate::tokenizer::{Token, TokenKind, Tokenizer};

/// Builds a [`Document`] from a slice by recursive descent.
///
/// Generic over a [`DepthLimit`] for the maximum container nesting.
// Lifetime 'a is the input buffer lifetime
pub struct SliceParser<'a, C: DepthLimit = DefaultConfig> {
    tokenizer: Tokenizer<'a>,
    document: Document<'a>,
    _config: PhantomData<C>,
}

impl<'a> SliceParser<'a, DefaultConfig> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use jsontree::SliceParser;
    /// let document = SliceParser::new(r#"{"name": "value"}"#).parse().unwrap();
    /// assert_eq!(document.find_child("name").unwrap().value(), b"value");
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_config_from_slice(input)
    }
}

impl<'a, C: DepthLimit> SliceParser<'a, C> {
    /// Creates a new parser with a custom [`DepthLimit`].
    pub fn with_config(input: &'a str) -> Self {
        Self::with_config_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice with a custom [`DepthLimit`].
    /// This is the core constructor that all other constructors delegate to.
    pub fn with_config_from_slice(input: &'a [u8]) -> Self {
        SliceParser {
            tokenizer: Tokenizer::new(input),
            document: Document::new(),
            _config: PhantomData,
        }
    }

    /// Parses one JSON value into the root of a new document.
    ///
    /// Bytes after the top-level value are not examined. On failure the
    /// partially built tree is dropped and the first error is returned.
    pub fn parse(mut self) -> Result<Document<'a>, ParseError> {
        match self.parse_node(NodeId::ROOT, 0) {
            Ok(()) => Ok(self.document),
            Err(e) => {
                log::debug!("parse failed: {e}");
                Err(e)
            }
        }
    }

    /// Reads one value and attaches it to `parent`: scalars are stored on
    /// `parent` itself, container members become its children.
    fn parse_node(&mut self, parent: NodeId, depth: usize) -> Result<(), ParseError> {
        let token = self.tokenizer.next_token();
        match token.kind {
            TokenKind::OpenBrace => {
                let depth = Self::enter_container(&token, depth)?;
                self.document.set_kind(parent, NodeKind::Object);
                self.parse_object(parent, depth)
            }
            TokenKind::OpenBracket => {
                let depth = Self::enter_container(&token, depth)?;
                self.document.set_kind(parent, NodeKind::Array);
                self.parse_array(parent, depth)
            }
            TokenKind::EndOfStream => Ok(()),
            kind => match NodeKind::from_scalar(kind) {
                Some(node_kind) => {
                    self.document.set_value(parent, node_kind, token.value);
                    Ok(())
                }
                None => Err(Self::unexpected(Expected::Value, &token)),
            },
        }
    }

    fn parse_object(&mut self, parent: NodeId, depth: usize) -> Result<(), ParseError> {
        while !self.tokenizer.is_at_end() {
            let token = self.tokenizer.next_token();
            let label = match token.kind {
                TokenKind::String => token.value,
                TokenKind::CloseBrace => break,
                _ => return Err(Self::unexpected(Expected::ObjectKeyOrEnd, &token)),
            };

            let token = self.tokenizer.next_token();
            if token.kind != TokenKind::Colon {
                return Err(Self::unexpected(Expected::Colon, &token));
            }

            let child = self.document.append_child(parent, label);
            self.parse_node(child, depth)?;

            let token = self.tokenizer.next_token();
            match token.kind {
                TokenKind::CloseBrace => break,
                TokenKind::Comma => {}
                _ => return Err(Self::unexpected(Expected::CommaOrObjectEnd, &token)),
            }
        }
        Ok(())
    }

    fn parse_array(&mut self, parent: NodeId, depth: usize) -> Result<(), ParseError> {
        // Only a `]` right after `[` is an empty array; whitespace is not skipped here.
        if self.tokenizer.match_raw_byte(b']') {
            return Ok(());
        }

        while !self.tokenizer.is_at_end() {
            let child = self.document.append_child(parent, &[]);
            self.parse_node(child, depth)?;

            let token = self.tokenizer.next_token();
            match token.kind {
                TokenKind::CloseBracket => break,
                TokenKind::Comma => {}
                _ => return Err(Self::unexpected(Expected::CommaOrArrayEnd, &token)),
            }
        }
        Ok(())
    }

    fn enter_container(token: &Token<'_>, depth: usize) -> Result<usize, ParseError> {
        let depth = depth + 1;
        if depth > C::MAX_DEPTH {
            return Err(ParseError::MaxDepthReached {
                limit: C::MAX_DEPTH,
                position: token.start,
            });
        }
        Ok(depth)
    }

    fn unexpected(expected: Expected, token: &Token<'_>) -> ParseError {
        ParseError::Unexpected {
            expected,
            found: token.kind,
            position: token.start,
        }
    }
}
