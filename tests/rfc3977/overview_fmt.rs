//! RFC 3977 Section 8.4 - LIST OVERVIEW.FMT validation

use nntp_client::overview::{DEFAULT_OVERVIEW_FORMAT, OverviewFormat};
use nntp_client::{DataError, NntpError};

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_default_descriptor_is_the_seven_canonical_fields() {
    let fmt = OverviewFormat::default_format();
    assert_eq!(fmt.fields(), DEFAULT_OVERVIEW_FORMAT);
    assert_eq!(
        DEFAULT_OVERVIEW_FORMAT,
        [
            "subject",
            "from",
            "date",
            "message-id",
            "references",
            ":bytes",
            ":lines"
        ]
    );
}

#[test]
fn test_metadata_markers() {
    let fmt = OverviewFormat::default_format();
    assert!(!fmt.is_metadata(0)); // subject
    assert!(!fmt.is_metadata(4)); // references
    assert!(fmt.is_metadata(5)); // :bytes
    assert!(fmt.is_metadata(6)); // :lines
    assert!(!fmt.is_metadata(7)); // out of range
}

#[test]
fn test_inn_style_reply_accepted() {
    // The exact lines INN emits
    let reply = lines(&[
        "Subject:",
        "From:",
        "Date:",
        "Message-ID:",
        "References:",
        ":bytes",
        ":lines",
        "Xref:full",
    ]);
    let fmt = OverviewFormat::parse(&reply).unwrap();
    assert_eq!(fmt.fields().len(), 8);
    assert_eq!(fmt.fields()[7], "xref");
}

#[test]
fn test_bytes_lines_aliases_normalized() {
    let reply = lines(&[
        "Subject:",
        "From:",
        "Date:",
        "Message-ID:",
        "References:",
        "Bytes:",
        "Lines:",
    ]);
    let fmt = OverviewFormat::parse(&reply).unwrap();
    assert_eq!(fmt.fields()[5], ":bytes");
    assert_eq!(fmt.fields()[6], ":lines");
}

#[test]
fn test_full_suffix_stripped_from_extensions() {
    let reply = lines(&[
        "Subject:",
        "From:",
        "Date:",
        "Message-ID:",
        "References:",
        ":bytes",
        ":lines",
        "Xref:full",
        "Distribution:full",
    ]);
    let fmt = OverviewFormat::parse(&reply).unwrap();
    assert_eq!(fmt.fields()[7], "xref");
    assert_eq!(fmt.fields()[8], "distribution");
}

#[test]
fn test_too_few_fields_rejected() {
    let reply = lines(&["Subject:", "From:", "Date:", "Message-ID:"]);
    match OverviewFormat::parse(&reply) {
        Err(NntpError::Data(DataError::OverviewFmtInvalid(_))) => {}
        other => panic!("expected OverviewFmtInvalid, got {other:?}"),
    }
}

#[test]
fn test_reordered_prefix_rejected() {
    let reply = lines(&[
        "Date:",
        "From:",
        "Subject:",
        "Message-ID:",
        "References:",
        ":bytes",
        ":lines",
    ]);
    assert!(OverviewFormat::parse(&reply).is_err());
}

#[test]
fn test_wrong_field_in_prefix_rejected() {
    let reply = lines(&[
        "Subject:",
        "From:",
        "Date:",
        "Message-ID:",
        "Newsgroups:",
        ":bytes",
        ":lines",
    ]);
    assert!(OverviewFormat::parse(&reply).is_err());
}

#[test]
fn test_metadata_extension_rejected() {
    let reply = lines(&[
        "Subject:",
        "From:",
        "Date:",
        "Message-ID:",
        "References:",
        ":bytes",
        ":lines",
        ":md5",
    ]);
    assert!(OverviewFormat::parse(&reply).is_err());
}

#[test]
fn test_blank_lines_ignored() {
    let reply = lines(&[
        "Subject:",
        "",
        "From:",
        "Date:",
        "Message-ID:",
        "References:",
        ":bytes",
        ":lines",
    ]);
    let fmt = OverviewFormat::parse(&reply).unwrap();
    assert_eq!(fmt.fields().len(), 7);
}
