// SPDX-License-Identifier: Apache-2.0

//! Compile-time parser configuration.
//!
//! The tree builder recurses once per nested container, so nesting depth is
//! bounded to keep hostile input from exhausting the call stack. The bound is
//! picked by a type parameter on [`SliceParser`](crate::SliceParser).

/// Maximum container nesting accepted by the parser.
///
/// A document whose containers nest deeper than `MAX_DEPTH` fails with
/// [`ParseError::MaxDepthReached`](crate::ParseError::MaxDepthReached).
/// Scalars do not count towards the depth: `[[1]]` has depth 2.
pub trait DepthLimit {
    const MAX_DEPTH: usize;
}

/// The default configuration: up to 256 nested containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultConfig;

impl DepthLimit for DefaultConfig {
    const MAX_DEPTH: usize = 256;
}

/// A custom nesting limit of `N` containers.
///
/// # Example
/// ```
/// use jsontree::{MaxDepth, SliceParser};
/// let result = SliceParser::<MaxDepth<2>>::with_config("[[[1]]]").parse();
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxDepth<const N: usize>;

impl<const N: usize> DepthLimit for MaxDepth<N> {
    const MAX_DEPTH: usize = N;
}
