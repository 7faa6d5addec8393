//! RFC 3977 Section 3.1 - Response Line Parsing Tests
//!
//! These tests verify compliance with NNTP response format requirements:
//! - Responses begin with a three-digit status code
//! - Status code is followed by optional space and message
//! - Codes outside three digits are malformed, not longer numbers

use nntp_client::commands::parse_response_line;
use nntp_client::{NntpError, ProtocolViolation};

// Valid Response Parsing (RFC 3977 §3.1)

#[test]
fn test_response_three_digit_code_with_message() {
    let (code, msg) = parse_response_line("200 server ready").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "server ready");
}

#[test]
fn test_response_three_digit_code_only() {
    // RFC 3977 §3.1: "status indicator" followed by optional text
    // A bare "200" with no space or message is valid
    let (code, msg) = parse_response_line("200").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "");
}

#[test]
fn test_response_with_empty_message_after_space() {
    // "200 " should parse as code 200 with empty message
    let (code, msg) = parse_response_line("200 ").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "");
}

#[test]
fn test_response_all_2xx_success_codes() {
    let test_cases = [
        ("200 posting allowed", 200),
        ("201 no posting", 201),
        ("205 closing connection", 205),
        ("211 1234 5 6789 group.name", 211),
        ("220 0 <msgid> article follows", 220),
        ("221 0 <msgid> head follows", 221),
        ("222 0 <msgid> body follows", 222),
        ("224 overview info follows", 224),
        ("281 authentication accepted", 281),
        ("282 list of groups follows", 282),
    ];

    for (input, expected_code) in test_cases {
        let (code, _) = parse_response_line(input).unwrap();
        assert_eq!(code, expected_code, "Failed for input: {}", input);
    }
}

#[test]
fn test_response_3xx_continuation_codes() {
    let test_cases = [
        ("340 send article", 340),
        ("381 password required", 381),
        ("382 continue with TLS negotiation", 382),
    ];

    for (input, expected_code) in test_cases {
        let (code, _) = parse_response_line(input).unwrap();
        assert_eq!(code, expected_code, "Failed for input: {}", input);
    }
}

#[test]
fn test_response_4xx_error_codes() {
    let test_cases = [
        ("400 service unavailable", 400),
        ("411 no such group", 411),
        ("412 no group selected", 412),
        ("420 no current article", 420),
        ("423 no article with that number", 423),
        ("430 no article with that message-id", 430),
        ("480 authentication required", 480),
        ("481 authentication rejected", 481),
    ];

    for (input, expected_code) in test_cases {
        let (code, _) = parse_response_line(input).unwrap();
        assert_eq!(code, expected_code, "Failed for input: {}", input);
    }
}

#[test]
fn test_response_5xx_permanent_error_codes() {
    let test_cases = [
        ("500 command not recognized", 500),
        ("501 syntax error", 501),
        ("502 access denied", 502),
        ("503 program fault", 503),
    ];

    for (input, expected_code) in test_cases {
        let (code, _) = parse_response_line(input).unwrap();
        assert_eq!(code, expected_code, "Failed for input: {}", input);
    }
}

#[test]
fn test_response_message_preserves_content() {
    let (_, msg) = parse_response_line("200 Hello, World! How are you?").unwrap();
    assert_eq!(msg, "Hello, World! How are you?");
}

#[test]
fn test_response_message_with_special_chars() {
    let (code, msg) = parse_response_line("200 Test <msg@id> [INFO] {data}").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "Test <msg@id> [INFO] {data}");
}

// Malformed Response Rejection

#[test]
fn test_response_rejects_non_numeric() {
    assert!(parse_response_line("abc def").is_err());
    assert!(parse_response_line("2x0 hello").is_err());
    assert!(parse_response_line("").is_err());
}

#[test]
fn test_response_rejects_short_codes() {
    assert!(parse_response_line("20").is_err());
    assert!(parse_response_line("2").is_err());
}

#[test]
fn test_response_rejects_four_digit_codes() {
    // "2000 message" must be rejected, not parsed as 200
    assert!(parse_response_line("2000 message").is_err());
    assert!(parse_response_line("99999").is_err());
}

#[test]
fn test_response_rejects_codes_outside_reply_classes() {
    // Only 1xx-5xx are NNTP replies
    assert!(parse_response_line("042 nope").is_err());
    assert!(parse_response_line("600 nope").is_err());
    assert!(parse_response_line("700 nope").is_err());
    assert!(parse_response_line("999 nope").is_err());
}

#[test]
fn test_response_rejection_is_bad_status() {
    match parse_response_line("garbage") {
        Err(NntpError::Protocol(ProtocolViolation::BadStatus(_))) => {}
        other => panic!("expected BadStatus, got {other:?}"),
    }
}

#[test]
fn test_response_bom_tolerated() {
    let (code, msg) = parse_response_line("\u{FEFF}201 no posting").unwrap();
    assert_eq!(code, 201);
    assert_eq!(msg, "no posting");
}

#[test]
fn test_response_missing_space_tolerated() {
    let (code, msg) = parse_response_line("200message").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "message");
}
