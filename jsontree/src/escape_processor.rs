// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::parse_error::EscapeError;

/// Pure functions for resolving the backslash escapes of a raw string value.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `None` if this is not a simple escape.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n'), Some(b'\n'));
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> Option<u8> {
        match escape_char {
            b'n' => Some(b'\n'),
            b't' => Some(b'\t'),
            b'r' => Some(b'\r'),
            b'\\' => Some(b'\\'),
            b'"' => Some(b'"'),
            b'/' => Some(b'/'),
            b'b' => Some(0x08), // Backspace
            b'f' => Some(0x0C), // Form feed
            _ => None,
        }
    }

    /// Numeric value (0-15) of an ASCII hex digit.
    pub fn validate_hex_digit(byte: u8) -> Option<u16> {
        match byte {
            b'0'..=b'9' => Some((byte - b'0') as u16),
            b'a'..=b'f' => Some((byte - b'a' + 10) as u16),
            b'A'..=b'F' => Some((byte - b'A' + 10) as u16),
            _ => None,
        }
    }

    /// Decode the four hex digits of a `\uXXXX` escape into two raw bytes,
    /// low byte first.
    ///
    /// Each escape stands alone: surrogate pairs are not combined and no UTF-8
    /// encoding takes place, so `\u0041` yields `[0x41, 0x00]`.
    ///
    /// # Arguments
    /// * `hex_slice` - The bytes following `\u`; must hold exactly four hex digits
    /// * `escape_start` - Offset of the backslash, for error reporting
    pub fn process_unicode_escape(
        hex_slice: &[u8],
        escape_start: usize,
    ) -> Result<[u8; 2], EscapeError> {
        if hex_slice.len() != 4 {
            return Err(EscapeError::TruncatedUnicodeEscape {
                offset: escape_start,
            });
        }

        let mut codepoint = 0u16;
        for (i, &byte) in hex_slice.iter().enumerate() {
            let digit = Self::validate_hex_digit(byte).ok_or(EscapeError::InvalidUnicodeHex {
                offset: escape_start + 2 + i,
            })?;
            codepoint = (codepoint << 4) | digit;
        }

        Ok(codepoint.to_le_bytes())
    }

    /// Copy `value` with every escape sequence resolved.
    ///
    /// The output is never longer than the input; the returned buffer is shrunk
    /// to the decoded length.
    pub fn unescape(value: &[u8]) -> Result<Vec<u8>, EscapeError> {
        let mut out = Vec::with_capacity(value.len());
        let mut index = 0;

        while let Some(&byte) = value.get(index) {
            if byte != b'\\' {
                out.push(byte);
                index += 1;
                continue;
            }

            let Some(&escape_char) = value.get(index + 1) else {
                return Err(EscapeError::TrailingBackslash { offset: index });
            };

            if escape_char == b'u' {
                let hex_slice = value.get(index + 2..index + 6).unwrap_or(&[]);
                out.extend_from_slice(&Self::process_unicode_escape(hex_slice, index)?);
                index += 6;
            } else {
                let unescaped = Self::process_simple_escape(escape_char).ok_or(
                    EscapeError::InvalidEscapeSequence {
                        byte: escape_char,
                        offset: index,
                    },
                )?;
                out.push(unescaped);
                index += 2;
            }
        }

        if out.len() < out.capacity() {
            out.shrink_to_fit();
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_simple_escapes() {
        assert_eq!(EscapeProcessor::process_simple_escape(b'n'), Some(b'\n'));
        assert_eq!(EscapeProcessor::process_simple_escape(b't'), Some(b'\t'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'r'), Some(b'\r'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'b'), Some(0x08));
        assert_eq!(EscapeProcessor::process_simple_escape(b'f'), Some(0x0C));
        assert_eq!(EscapeProcessor::process_simple_escape(b'/'), Some(b'/'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'"'), Some(b'"'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'\\'), Some(b'\\'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'x'), None);
        assert_eq!(EscapeProcessor::process_simple_escape(b'u'), None);
    }

    #[test]
    fn test_hex_digits() {
        assert_eq!(EscapeProcessor::validate_hex_digit(b'0'), Some(0));
        assert_eq!(EscapeProcessor::validate_hex_digit(b'9'), Some(9));
        assert_eq!(EscapeProcessor::validate_hex_digit(b'a'), Some(10));
        assert_eq!(EscapeProcessor::validate_hex_digit(b'F'), Some(15));
        assert_eq!(EscapeProcessor::validate_hex_digit(b'g'), None);
        assert_eq!(EscapeProcessor::validate_hex_digit(b' '), None);
    }

    #[test]
    fn test_unicode_escape_is_low_byte_first() {
        assert_eq!(
            EscapeProcessor::process_unicode_escape(b"0041", 0),
            Ok([0x41, 0x00])
        );
        assert_eq!(
            EscapeProcessor::process_unicode_escape(b"20aC", 0),
            Ok([0xAC, 0x20])
        );
        assert_eq!(
            EscapeProcessor::process_unicode_escape(b"00g1", 3),
            Err(EscapeError::InvalidUnicodeHex { offset: 7 })
        );
        assert_eq!(
            EscapeProcessor::process_unicode_escape(b"12", 0),
            Err(EscapeError::TruncatedUnicodeEscape { offset: 0 })
        );
    }

    #[test]
    fn test_unescape_without_escapes_is_a_copy() {
        let value = b"plain text / 123";
        assert_eq!(EscapeProcessor::unescape(value).unwrap(), value);
        assert_eq!(EscapeProcessor::unescape(b"").unwrap(), b"");
    }

    #[test]
    fn test_unescape_mixed() {
        assert_eq!(EscapeProcessor::unescape(br#"a\"b"#).unwrap(), b"a\"b");
        assert_eq!(
            EscapeProcessor::unescape(br#"line\nnext\ttab\\slash\/"#).unwrap(),
            b"line\nnext\ttab\\slash/"
        );
        assert_eq!(
            EscapeProcessor::unescape(br#"\b\f\r"#).unwrap(),
            [0x08, 0x0C, b'\r']
        );
        assert_eq!(
            EscapeProcessor::unescape(br#"x\u0041y"#).unwrap(),
            [b'x', 0x41, 0x00, b'y']
        );
    }

    #[test]
    fn test_surrogates_are_not_combined() {
        assert_eq!(
            EscapeProcessor::unescape(br#"\uD83D\uDE00"#).unwrap(),
            [0x3D, 0xD8, 0x00, 0xDE]
        );
    }

    #[test]
    fn test_unescape_failures() {
        assert_eq!(
            EscapeProcessor::unescape(br#"\u12"#),
            Err(EscapeError::TruncatedUnicodeEscape { offset: 0 })
        );
        assert_eq!(
            EscapeProcessor::unescape(br#"ab\u004"#),
            Err(EscapeError::TruncatedUnicodeEscape { offset: 2 })
        );
        assert_eq!(
            EscapeProcessor::unescape(br#"\uZZZZ"#),
            Err(EscapeError::InvalidUnicodeHex { offset: 2 })
        );
        assert_eq!(
            EscapeProcessor::unescape(br#"bad\x"#),
            Err(EscapeError::InvalidEscapeSequence {
                byte: b'x',
                offset: 3
            })
        );
        assert_eq!(
            EscapeProcessor::unescape(b"end\\"),
            Err(EscapeError::TrailingBackslash { offset: 3 })
        );
    }

    #[test]
    fn test_unescape_shrinks_to_fit() {
        let decoded = EscapeProcessor::unescape(br#"\n\n\n\n"#).unwrap();
        assert_eq!(decoded, b"\n\n\n\n");
        assert_eq!(decoded.capacity(), decoded.len());
    }
}
