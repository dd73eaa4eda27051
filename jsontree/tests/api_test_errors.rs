// Error reporting through the public API

use jsontree::{Expected, MaxDepth, ParseError, SliceParser, TokenKind};

fn unexpected(expected: Expected, found: TokenKind, position: usize) -> ParseError {
    ParseError::Unexpected {
        expected,
        found,
        position,
    }
}

#[test]
fn test_lone_minus() {
    assert_eq!(
        jsontree::parse(b"-").unwrap_err(),
        unexpected(Expected::Value, TokenKind::Error, 0)
    );
    assert_eq!(
        jsontree::parse(b"[1, -x]").unwrap_err(),
        unexpected(Expected::Value, TokenKind::Error, 4)
    );
    assert!(jsontree::parse(b"-.5").is_err());
}

#[test]
fn test_malformed_json_missing_quotes() {
    assert_eq!(
        jsontree::parse(br#"{name: "value"}"#).unwrap_err(),
        unexpected(Expected::ObjectKeyOrEnd, TokenKind::Error, 1)
    );
}

#[test]
fn test_malformed_json_unterminated_string() {
    let error = jsontree::parse(br#"{"unterminated": "missing quote}"#).unwrap_err();
    assert_eq!(error, unexpected(Expected::Value, TokenKind::Error, 17));
    assert_eq!(error.position(), 17);
}

#[test]
fn test_missing_colon() {
    assert_eq!(
        jsontree::parse(br#"{"a" 1}"#).unwrap_err(),
        unexpected(Expected::Colon, TokenKind::Number, 5)
    );
}

#[test]
fn test_array_trailing_comma() {
    assert_eq!(
        jsontree::parse(b"[1,]").unwrap_err(),
        unexpected(Expected::Value, TokenKind::CloseBracket, 3)
    );
}

#[test]
fn test_array_with_inner_whitespace_only() {
    assert_eq!(
        jsontree::parse(b"[ ]").unwrap_err(),
        unexpected(Expected::Value, TokenKind::CloseBracket, 2)
    );
}

#[test]
fn test_mismatched_closers() {
    assert_eq!(
        jsontree::parse(b"[1}").unwrap_err(),
        unexpected(Expected::CommaOrArrayEnd, TokenKind::CloseBrace, 2)
    );
    assert_eq!(
        jsontree::parse(br#"{"a": 1]"#).unwrap_err(),
        unexpected(Expected::CommaOrObjectEnd, TokenKind::CloseBracket, 7)
    );
}

#[test]
fn test_invalid_keywords() {
    let inputs: [&[u8]; 5] = [b"tru", b"nul", b"falsy", b"True", b"[nan]"];
    for json in inputs {
        let error = jsontree::parse(json).unwrap_err();
        assert!(
            matches!(
                error,
                ParseError::Unexpected {
                    found: TokenKind::Error,
                    ..
                }
            ),
            "{:?} gave {:?}",
            json.escape_ascii().to_string(),
            error
        );
    }
}

#[test]
fn test_depth_limit() {
    let json = r#"{"a": {"b": {"c": 1}}}"#;
    assert!(SliceParser::<MaxDepth<3>>::with_config(json).parse().is_ok());
    assert_eq!(
        SliceParser::<MaxDepth<2>>::with_config(json).parse().unwrap_err(),
        ParseError::MaxDepthReached {
            limit: 2,
            position: 12,
        }
    );

    let deep = "[".repeat(1000);
    let error = jsontree::parse(deep.as_bytes()).unwrap_err();
    assert_eq!(error.position(), 256);
}

#[test]
fn test_error_messages() {
    let error = jsontree::parse(br#"{"a" 1}"#).unwrap_err();
    assert_eq!(error.to_string(), "expected ':' at 5, found Number");

    let error = jsontree::parse(b"[@]").unwrap_err();
    assert_eq!(error.to_string(), "invalid token at 1, expected a value");

    let error = SliceParser::<MaxDepth<1>>::with_config("[[]]")
        .parse()
        .unwrap_err();
    assert_eq!(error.to_string(), "nesting deeper than 1 levels at 1");
}
