//! RFC 3977 Sections 7.3/7.6.3 - NEWGROUPS and LIST ACTIVE record parsing

use nntp_client::commands::parse_active_groups;

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_active_records() {
    let groups = parse_active_groups(&lines(&[
        "misc.test 3002322 3000234 y",
        "comp.risks 442001 441099 m",
        "alt.rfc-writers.recovery 4 1 y",
    ]));

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].name, "misc.test");
    assert_eq!(groups[0].high, 3002322);
    assert_eq!(groups[0].low, 3000234);
    assert_eq!(groups[0].status, "y");
    assert_eq!(groups[1].status, "m");
}

#[test]
fn test_alias_status_preserved() {
    let groups = parse_active_groups(&lines(&["old.name 5 1 =new.name"]));
    assert_eq!(groups[0].status, "=new.name");
}

#[test]
fn test_malformed_lines_skipped() {
    let groups = parse_active_groups(&lines(&[
        "good.group 10 1 y",
        "too few fields",
        "",
        "another.good 20 2 n",
    ]));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "good.group");
    assert_eq!(groups[1].name, "another.good");
}

#[test]
fn test_empty_reply() {
    assert!(parse_active_groups(&[]).is_empty());
}
