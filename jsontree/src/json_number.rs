// SPDX-License-Identifier: Apache-2.0

/// Decode a JSON number lexeme as an `f64`.
///
/// The bytes are parsed in place, no copy is made. Lexemes produced by the
/// tokenizer always parse; other bytes (for instance the body of a string
/// node) yield `None` unless they happen to be valid float text.
pub fn parse_f64(bytes: &[u8]) -> Option<f64> {
    let text = core::str::from_utf8(bytes).ok()?;
    text.parse::<f64>().ok()
}
