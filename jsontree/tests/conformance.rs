// SPDX-License-Identifier: Apache-2.0

//! Accept/reject conformance cases.
//!
//! Each case is a named inline document. Besides the usual JSON grammar the
//! parser has a few documented leniencies (trailing bytes, a trailing comma in
//! objects, input ending at a member boundary) which are pinned down here too.

use jsontree::{NodeKind, ParseError};

fn run_parser_test(json: &[u8]) -> Result<usize, ParseError> {
    jsontree::parse(json).map(|document| document.node_count())
}

macro_rules! generate_pass_tests {
    ($($name:ident: $json:expr),* $(,)?) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_pass_ $name>]() {
                    let json: &[u8] = $json;
                    let result = run_parser_test(json);
                    assert!(
                        result.is_ok(),
                        "{} should parse but failed with {:?}. Content: {:?}",
                        stringify!($name),
                        result,
                        json.escape_ascii().to_string()
                    );
                }
            }
        )*
    };
}

macro_rules! generate_fail_tests {
    ($($name:ident: $json:expr),* $(,)?) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_fail_ $name>]() {
                    let json: &[u8] = $json;
                    let result = run_parser_test(json);
                    assert!(
                        result.is_err(),
                        "{} should fail to parse but built {} nodes. Content: {:?}",
                        stringify!($name),
                        result.unwrap_or(0),
                        json.escape_ascii().to_string()
                    );
                }
            }
        )*
    };
}

generate_pass_tests! {
    empty_document: b"",
    whitespace_only: b" \t\r\n",
    empty_object: b"{}",
    empty_array: b"[]",
    empty_string: br#""""#,
    top_level_number: b"12",
    top_level_true: b"true",
    top_level_null: b" null ",
    negative_zero: b"-0",
    exponent_forms: b"[1e5, 1E+5, 1.5e-3, -0.0]",
    nested_mixed: br#"{"a": [1, {"b": [true, false, null]}], "c": "d"}"#,
    escaped_quote: br#"["a\"b"]"#,
    escaped_backslash_before_quote: br#"["a\\"]"#,
    unicode_escape: br#"["\uD834\uDD1E"]"#,
    invalid_escape_kept_raw: br#"["\q"]"#,
    short_unicode_escape_kept_raw: br#"["\u12"]"#,
    raw_utf8: "[\"h\u{e9}llo \u{1F600}\"]".as_bytes(),
    duplicate_keys: br#"{"k": 1, "k": 2}"#,
    empty_key: br#"{"": 0}"#,
    object_trailing_comma: br#"{"a": 1,}"#,
    trailing_bytes: b"[1] [2]",
    trailing_garbage: b"{}xyz",
    unclosed_object: b"{",
    unclosed_array: b"[",
    object_ends_after_comma: br#"{"a": 1,"#,
    array_ends_after_comma: b"[1,",
}

generate_fail_tests! {
    lone_minus: b"-",
    minus_then_letter: b"[-a]",
    minus_then_dot: b"[-.5]",
    leading_plus: b"[+1]",
    leading_zero: b"[01]",
    bare_dot: b"[.5]",
    hex_number: b"[0x14]",
    truncated_true: b"tru",
    truncated_null_in_array: b"[nul]",
    capitalized_keyword: b"[True]",
    single_quotes: b"['x']",
    unquoted_key: br#"{a: 1}"#,
    numeric_key: br#"{1: 1}"#,
    missing_colon: br#"{"a" 1}"#,
    double_colon: br#"{"a":: 1}"#,
    comma_instead_of_colon: br#"{"a", 1}"#,
    missing_value: br#"{"a": }"#,
    missing_comma_in_object: br#"{"a": 1 "b": 2}"#,
    missing_comma_in_array: b"[1 2]",
    array_trailing_comma: b"[1,]",
    array_leading_comma: b"[,1]",
    array_double_comma: b"[1,,2]",
    array_with_space_only: b"[ ]",
    object_double_comma: br#"{"a": 1,,"b": 2}"#,
    mismatched_array_close: b"[1}",
    mismatched_object_close: br#"{"a": 1]"#,
    unterminated_string: br#"["abc]"#,
    unterminated_escape: br#"["abc\"]"#,
    array_unclosed_after_value: b"[1",
    object_unclosed_after_value: br#"{"a": 1"#,
    closer_first: b"]",
    colon_first: b":",
    comma_first: b",",
}

#[test]
fn test_pass_cases_build_expected_kinds() {
    let document = jsontree::parse(br#"[1, "s", true, false, null, {}, []]"#).unwrap();
    let kinds: Vec<NodeKind> = document.root().children().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        [
            NodeKind::Number,
            NodeKind::String,
            NodeKind::True,
            NodeKind::False,
            NodeKind::Null,
            NodeKind::Object,
            NodeKind::Array,
        ]
    );
}
