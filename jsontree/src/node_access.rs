// SPDX-License-Identifier: Apache-2.0

//! Value decoding for nodes.
//!
//! The accessors never report an error kind: an absent node, an empty value
//! and an undecodable value all produce the same zero, `false` or `None`
//! sentinel. [`NodeRef::try_resolve`] is the one exception for callers that
//! need the reason an escape failed.

use alloc::vec::Vec;

use crate::document::NodeRef;
use crate::escape_processor::EscapeProcessor;
use crate::json_number;
use crate::parse_error::EscapeError;

impl<'d, 'a> NodeRef<'d, 'a> {
    /// True iff the value is exactly `null`.
    pub fn is_null(&self) -> bool {
        self.value() == b"null"
    }

    /// The value parsed as a floating point number, or `0.0`.
    ///
    /// The whole value must be number text: a string such as `"8080px"` or
    /// `" 5"` yields `0.0`, no numeric prefix is read.
    pub fn to_number(&self) -> f64 {
        let value = self.value();
        if value.is_empty() {
            return 0.0;
        }
        json_number::parse_f64(value).unwrap_or_else(|| {
            log::debug!("value '{}' is not a number", value.escape_ascii());
            0.0
        })
    }

    /// True iff the value is exactly `true`.
    pub fn to_bool(&self) -> bool {
        self.value() == b"true"
    }

    /// The first byte of the value, or `0` when the value is empty.
    pub fn to_char(&self) -> u8 {
        self.value().first().copied().unwrap_or(0)
    }

    /// An owned copy of the raw value, escapes left as written.
    pub fn to_new_string(&self) -> Option<Vec<u8>> {
        let value = self.value();
        (!value.is_empty()).then(|| value.to_vec())
    }

    /// An owned copy of the value with escape sequences resolved.
    ///
    /// `\uXXXX` escapes become two bytes, low byte first, without surrogate
    /// pairing. Returns `None` on an invalid escape and for an empty value.
    pub fn to_new_string_resolved(&self) -> Option<Vec<u8>> {
        let value = self.value();
        if value.is_empty() {
            return None;
        }
        match EscapeProcessor::unescape(value) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                log::debug!("cannot resolve '{}': {}", value.escape_ascii(), e);
                None
            }
        }
    }

    /// Like [`to_new_string_resolved`](Self::to_new_string_resolved) but keeps
    /// the reason for a failure. An empty value resolves to an empty buffer.
    pub fn try_resolve(&self) -> Result<Vec<u8>, EscapeError> {
        EscapeProcessor::unescape(self.value())
    }

    /// The label with escape sequences resolved; `None` for unlabeled nodes
    /// and invalid escapes.
    pub fn label_resolved(&self) -> Option<Vec<u8>> {
        let label = self.label();
        if label.is_empty() {
            return None;
        }
        EscapeProcessor::unescape(label).ok()
    }
}

/// Lookup and decoding on a node that may be absent.
///
/// Implemented for `Option<NodeRef>` so lookups chain without unwrapping:
///
/// ```
/// use jsontree::ValueAccess;
/// let document = jsontree::parse(br#"{"server": {"port": 8080}}"#).unwrap();
/// assert_eq!(document.find_child("server").find_child("port").to_number(), 8080.0);
/// assert_eq!(document.find_child("client").find_child("port").to_number(), 0.0);
/// ```
pub trait ValueAccess<'d, 'a: 'd> {
    fn node(&self) -> Option<NodeRef<'d, 'a>>;

    fn find_child(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'d, 'a>> {
        self.node()?.find_child(label)
    }

    fn find_sibling(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'d, 'a>> {
        self.node()?.find_sibling(label)
    }

    fn find(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'d, 'a>> {
        self.node()?.find(label)
    }

    fn is_null(&self) -> bool {
        self.node().is_some_and(|node| node.is_null())
    }

    fn to_number(&self) -> f64 {
        self.node().map_or(0.0, |node| node.to_number())
    }

    fn to_bool(&self) -> bool {
        self.node().is_some_and(|node| node.to_bool())
    }

    fn to_char(&self) -> u8 {
        self.node().map_or(0, |node| node.to_char())
    }

    fn to_new_string(&self) -> Option<Vec<u8>> {
        self.node()?.to_new_string()
    }

    fn to_new_string_resolved(&self) -> Option<Vec<u8>> {
        self.node()?.to_new_string_resolved()
    }
}

impl<'d, 'a> ValueAccess<'d, 'a> for Option<NodeRef<'d, 'a>> {
    fn node(&self) -> Option<NodeRef<'d, 'a>> {
        *self
    }
}
