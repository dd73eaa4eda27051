// SPDX-License-Identifier: Apache-2.0

//! A small JSON parser that builds a navigable tree over the input bytes.
//!
//! Parsing never copies: every label and scalar value in the resulting
//! [`Document`] borrows from the input slice, with string escapes left as
//! written. The accessors in [`ValueAccess`] and on [`NodeRef`] decode on
//! demand and fail soft.
//!
//! ```
//! use jsontree::{NodeKind, ValueAccess};
//!
//! let document = jsontree::parse(br#"{"pairs": [[1, 2], [3, 4]]}"#).unwrap();
//! let pairs = document.find_child("pairs").unwrap();
//! assert_eq!(pairs.kind(), NodeKind::Array);
//!
//! let numbers: Vec<f64> = pairs
//!     .children()
//!     .flat_map(|pair| pair.children())
//!     .map(|n| n.to_number())
//!     .collect();
//! assert_eq!(numbers, [1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(document.find("missing").to_number(), 0.0);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::{DefaultConfig, DepthLimit, MaxDepth};

mod slice_input_buffer;

mod tokenizer;
pub use tokenizer::{Token, TokenKind, Tokenizer};

mod parse_error;
pub use parse_error::{EscapeError, Expected, ParseError};

mod escape_processor;

mod json_number;

mod document;
pub use document::{Document, NodeId, NodeKind, NodeRef, Siblings};

mod node_access;
pub use node_access::ValueAccess;

mod slice_parser;
pub use slice_parser::SliceParser;

/// Parses `input` with the default nesting limit.
///
/// Shorthand for `SliceParser::new_from_slice(input).parse()`.
pub fn parse(input: &[u8]) -> Result<Document<'_>, ParseError> {
    SliceParser::new_from_slice(input).parse()
}
