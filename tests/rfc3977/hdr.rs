//! RFC 3977 Section 8.5 / RFC 2980 Section 2.6 - XHDR/HDR line parsing

use nntp_client::commands::parse_hdr_line;

#[test]
fn test_hdr_line_number_and_value() {
    let entry = parse_hdr_line("3000234 I am just a test article");
    assert_eq!(entry.article_number, Some(3000234));
    assert_eq!(entry.value, "I am just a test article");
}

#[test]
fn test_hdr_line_value_keeps_internal_spacing() {
    let entry = parse_hdr_line("5 Re:  doubled  spaces");
    assert_eq!(entry.article_number, Some(5));
    assert_eq!(entry.value, "Re:  doubled  spaces");
}

#[test]
fn test_hdr_line_msgid_query_kept_raw() {
    // A message-id query answers with the id in the first column; the line
    // does not parse as "<number> <value>" and is kept verbatim
    let entry = parse_hdr_line("<i.am.an.article@example.com> I am just a test article");
    assert_eq!(entry.article_number, None);
    assert_eq!(
        entry.value,
        "<i.am.an.article@example.com> I am just a test article"
    );
}

#[test]
fn test_hdr_line_bare_token_kept_raw() {
    let entry = parse_hdr_line("garbage");
    assert_eq!(entry.article_number, None);
    assert_eq!(entry.value, "garbage");
}

#[test]
fn test_hdr_line_empty_value() {
    let entry = parse_hdr_line("17 ");
    assert_eq!(entry.article_number, Some(17));
    assert_eq!(entry.value, "");
}
