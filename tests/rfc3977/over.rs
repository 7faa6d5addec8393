//! RFC 3977 Section 8.3 - Overview record parsing

use nntp_client::overview::{OverviewFormat, parse_overview_line};
use nntp_client::{DataError, NntpError};

fn extended_format() -> OverviewFormat {
    let reply: Vec<String> = [
        "Subject:",
        "From:",
        "Date:",
        "Message-ID:",
        "References:",
        ":bytes",
        ":lines",
        "Xref:full",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    OverviewFormat::parse(&reply).unwrap()
}

#[test]
fn test_default_record() {
    let fmt = OverviewFormat::default_format();
    let entry = parse_overview_line(&fmt, "123\tS\tF\tD\tM\tR\t12\t34").unwrap();

    assert_eq!(entry.article_number, 123);
    assert_eq!(entry.fields["subject"], "S");
    assert_eq!(entry.fields["from"], "F");
    assert_eq!(entry.fields["date"], "D");
    assert_eq!(entry.fields["message-id"], "M");
    assert_eq!(entry.fields["references"], "R");
    assert_eq!(entry.fields[":bytes"], "12");
    assert_eq!(entry.fields[":lines"], "34");
}

#[test]
fn test_realistic_record() {
    let fmt = OverviewFormat::default_format();
    let line = "3000234\tI am just a test article\t\"Demo User\" <nobody@example.com>\t\
                6 Oct 1998 04:38:40 -0500\t<45223423@example.com>\t<45454@example.net>\t1234\t17";
    let entry = parse_overview_line(&fmt, line).unwrap();

    assert_eq!(entry.article_number, 3000234);
    assert_eq!(entry.fields["subject"], "I am just a test article");
    assert_eq!(
        entry.fields["from"],
        "\"Demo User\" <nobody@example.com>"
    );
    assert_eq!(entry.fields[":bytes"], "1234");
    assert_eq!(entry.fields[":lines"], "17");
}

#[test]
fn test_extension_field_prefix_stripped() {
    let fmt = extended_format();
    let entry = parse_overview_line(
        &fmt,
        "123\tS\tF\tD\tM\tR\t12\t34\tXref: news.example foo.bar:1",
    )
    .unwrap();
    assert_eq!(entry.fields["xref"], "news.example foo.bar:1");
}

#[test]
fn test_extension_field_prefix_case_insensitive() {
    let fmt = extended_format();
    let entry =
        parse_overview_line(&fmt, "1\tS\tF\tD\tM\tR\t1\t1\txref: host a.b:9").unwrap();
    assert_eq!(entry.fields["xref"], "host a.b:9");
}

#[test]
fn test_extension_field_missing_prefix_fails() {
    let fmt = extended_format();
    match parse_overview_line(&fmt, "1\tS\tF\tD\tM\tR\t1\t1\tnews.example foo.bar:1") {
        Err(NntpError::Data(DataError::OverMissingHeaderName(_))) => {}
        other => panic!("expected OverMissingHeaderName, got {other:?}"),
    }
}

#[test]
fn test_empty_fields_allowed() {
    // A first post has no References; empty fields stay empty
    let fmt = OverviewFormat::default_format();
    let entry = parse_overview_line(&fmt, "7\tS\tF\tD\tM\t\t10\t2").unwrap();
    assert_eq!(entry.fields["references"], "");
}

#[test]
fn test_short_record_omits_trailing_fields() {
    let fmt = OverviewFormat::default_format();
    let entry = parse_overview_line(&fmt, "7\tS\tF").unwrap();
    assert_eq!(entry.article_number, 7);
    assert!(entry.fields.contains_key("subject"));
    assert!(!entry.fields.contains_key(":lines"));
}

#[test]
fn test_extra_fields_discarded() {
    let fmt = OverviewFormat::default_format();
    let entry =
        parse_overview_line(&fmt, "7\tS\tF\tD\tM\tR\t1\t2\tignored\talso ignored").unwrap();
    assert_eq!(entry.fields.len(), 7);
}

#[test]
fn test_bad_article_number_fails() {
    let fmt = OverviewFormat::default_format();
    match parse_overview_line(&fmt, "seven\tS\tF") {
        Err(NntpError::Data(DataError::BadArticleNumber(_))) => {}
        other => panic!("expected BadArticleNumber, got {other:?}"),
    }
}

#[test]
fn test_tab_inside_subject_shifts_fields() {
    // Tabs are the field separator; an unescaped tab in a subject splits it.
    // The parser maps positionally and does not attempt repair.
    let fmt = OverviewFormat::default_format();
    let entry = parse_overview_line(&fmt, "1\tSubject\twith tab\tF\tD\tM\tR\t1").unwrap();
    assert_eq!(entry.fields["subject"], "Subject");
    assert_eq!(entry.fields["from"], "with tab");
}
