//! Command builder wire-format tests
//!
//! Every emitted command line is uppercase, space-separated, and
//! CRLF-terminated.

use nntp_client::commands;
use nntp_client::{ArticleRange, ArticleRef};

#[test]
fn test_session_commands() {
    assert_eq!(commands::capabilities(), "CAPABILITIES\r\n");
    assert_eq!(commands::mode_reader(), "MODE READER\r\n");
    assert_eq!(commands::help(), "HELP\r\n");
    assert_eq!(commands::date(), "DATE\r\n");
    assert_eq!(commands::slave(), "SLAVE\r\n");
    assert_eq!(commands::quit(), "QUIT\r\n");
    assert_eq!(commands::starttls(), "STARTTLS\r\n");
    assert_eq!(commands::post(), "POST\r\n");
}

#[test]
fn test_auth_commands() {
    assert_eq!(commands::authinfo_user("alice"), "AUTHINFO USER alice\r\n");
    assert_eq!(commands::authinfo_pass("s3cret"), "AUTHINFO PASS s3cret\r\n");
}

#[test]
fn test_group_commands() {
    assert_eq!(commands::group("misc.test"), "GROUP misc.test\r\n");
    assert_eq!(
        commands::listgroup("misc.test", Some("1-40")),
        "LISTGROUP misc.test 1-40\r\n"
    );
    assert_eq!(
        commands::newgroups("20240305", "040609"),
        "NEWGROUPS 20240305 040609\r\n"
    );
    assert_eq!(
        commands::newnews("misc.test", "20240305", "040609"),
        "NEWNEWS misc.test 20240305 040609\r\n"
    );
}

#[test]
fn test_article_commands() {
    assert_eq!(
        commands::article(&ArticleRef::Number(12)),
        "ARTICLE 12\r\n"
    );
    assert_eq!(
        commands::head(&ArticleRef::MessageId("<a@b>".to_string())),
        "HEAD <a@b>\r\n"
    );
    assert_eq!(commands::body(&ArticleRef::Current), "BODY\r\n");
    assert_eq!(commands::stat(&ArticleRef::Current), "STAT\r\n");
    assert_eq!(commands::next(), "NEXT\r\n");
    assert_eq!(commands::last(), "LAST\r\n");
    assert_eq!(commands::ihave("<a@b>"), "IHAVE <a@b>\r\n");
}

#[test]
fn test_list_commands() {
    assert_eq!(commands::list_active(None), "LIST\r\n");
    assert_eq!(
        commands::list_active(Some("comp.*")),
        "LIST ACTIVE comp.*\r\n"
    );
    assert_eq!(
        commands::list_newsgroups(Some("misc.*")),
        "LIST NEWSGROUPS misc.*\r\n"
    );
    assert_eq!(commands::list_overview_fmt(), "LIST OVERVIEW.FMT\r\n");
    assert_eq!(commands::xgtitle(Some("alt.*")), "XGTITLE alt.*\r\n");
}

#[test]
fn test_over_commands() {
    assert_eq!(commands::over(&ArticleRange::Current), "OVER\r\n");
    assert_eq!(commands::over(&ArticleRange::span(1, 3)), "OVER 1-3\r\n");
    assert_eq!(
        commands::xover(&ArticleRange::Span { first: 10, last: None }),
        "XOVER 10-\r\n"
    );
    assert_eq!(
        commands::xhdr("Subject", &ArticleRange::span(1, 100)),
        "XHDR Subject 1-100\r\n"
    );
    assert_eq!(
        commands::hdr("Subject", &ArticleRange::Number(5)),
        "HDR Subject 5\r\n"
    );
}

#[test]
fn test_all_commands_crlf_terminated() {
    let built = [
        commands::group("g"),
        commands::authinfo_user("u"),
        commands::over(&ArticleRange::Current),
        commands::article(&ArticleRef::Current),
        commands::list_active(None),
        commands::ihave("<a@b>"),
    ];
    for command in built {
        assert!(command.ends_with("\r\n"), "not CRLF-terminated: {command:?}");
        assert_eq!(command.matches('\n').count(), 1);
    }
}
