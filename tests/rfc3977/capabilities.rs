//! RFC 3977 Section 5.2 - CAPABILITIES parsing and the long-response set

use nntp_client::{Capabilities, LONG_RESPONSE_CODES, is_long_response};

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_rfc_example_capability_list() {
    let caps = Capabilities::parse(&lines(&[
        "VERSION 2",
        "READER",
        "IHAVE",
        "POST",
        "NEWNEWS",
        "LIST ACTIVE NEWSGROUPS",
        "STARTTLS",
        "OVER MSGID",
    ]));

    assert!(caps.has("READER"));
    assert!(caps.has("STARTTLS"));
    assert!(caps.has("OVER"));
    assert!(caps.has_arg("OVER", "MSGID"));
    assert!(caps.has_arg("LIST", "ACTIVE"));
    assert!(!caps.has("MODE-READER"));
    assert_eq!(caps.version(), 2);
}

#[test]
fn test_version_defaults_to_one() {
    let caps = Capabilities::parse(&lines(&["READER", "POST"]));
    assert_eq!(caps.version(), 1);
}

#[test]
fn test_implementation_joined() {
    let caps = Capabilities::parse(&lines(&["IMPLEMENTATION INN 2.7.2"]));
    assert_eq!(caps.implementation().as_deref(), Some("INN 2.7.2"));
}

#[test]
fn test_unknown_capabilities_preserved() {
    let caps = Capabilities::parse(&lines(&["XSECRET", "XFANCY a b c"]));
    assert!(caps.has("XSECRET"));
    assert!(caps.has("xfancy"));
    assert_eq!(caps.get_args("XFANCY").unwrap().len(), 3);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let caps = Capabilities::parse(&lines(&["reader"]));
    assert!(caps.has("READER"));
}

// The long-response code set (RFC 3977 §3.2)

#[test]
fn test_long_response_codes() {
    assert_eq!(
        LONG_RESPONSE_CODES,
        &[100, 101, 215, 220, 221, 222, 224, 225, 230, 231, 282]
    );
    for &code in LONG_RESPONSE_CODES {
        assert!(is_long_response(code));
    }
}

#[test]
fn test_short_codes_not_in_long_set() {
    // 211 only carries a payload after LISTGROUP; the base set excludes it
    for code in [111, 200, 201, 202, 205, 211, 223, 235, 240, 281, 335, 340, 381, 382, 411, 502] {
        assert!(!is_long_response(code), "{code} must be short");
    }
}
