//! Article retrieval and navigation commands

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

/// Selects the article a retrieval command operates on
///
/// RFC 3977 lets ARTICLE/HEAD/BODY/STAT take an article number, a message-id
/// in angle brackets, or nothing (the current article of the selected group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRef {
    /// Article number within the selected newsgroup
    Number(u64),
    /// Message-id in angle brackets, e.g. `<abc@example>`
    MessageId(String),
    /// The current article of the selected newsgroup
    Current,
}

impl ArticleRef {
    /// The command argument, or None for the current article.
    pub fn arg(&self) -> Option<String> {
        match self {
            ArticleRef::Number(n) => Some(n.to_string()),
            ArticleRef::MessageId(id) => Some(id.clone()),
            ArticleRef::Current => None,
        }
    }
}

impl From<u64> for ArticleRef {
    fn from(number: u64) -> Self {
        ArticleRef::Number(number)
    }
}

impl From<&str> for ArticleRef {
    fn from(message_id: &str) -> Self {
        ArticleRef::MessageId(message_id.to_string())
    }
}

fn with_ref(command: &str, article: &ArticleRef) -> String {
    match article.arg() {
        Some(arg) => format!("{} {}\r\n", command, arg),
        None => format!("{}\r\n", command),
    }
}

/// Build ARTICLE command
pub fn article(article_ref: &ArticleRef) -> String {
    with_ref("ARTICLE", article_ref)
}

/// Build HEAD command
pub fn head(article_ref: &ArticleRef) -> String {
    with_ref("HEAD", article_ref)
}

/// Build BODY command
pub fn body(article_ref: &ArticleRef) -> String {
    with_ref("BODY", article_ref)
}

/// Build STAT command (RFC 3977 §6.2.4)
///
/// Gets article status without retrieving content.
pub fn stat(article_ref: &ArticleRef) -> String {
    with_ref("STAT", article_ref)
}

/// Build NEXT command (RFC 3977 §6.1.4)
///
/// Moves to the next article in the current group.
pub fn next() -> &'static str {
    "NEXT\r\n"
}

/// Build LAST command (RFC 3977 §6.1.3)
///
/// Moves to the previous article in the current group.
pub fn last() -> &'static str {
    "LAST\r\n"
}

/// Article selection result from STAT, NEXT, and LAST, and from the status
/// line of ARTICLE/HEAD/BODY
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatResp {
    /// Full raw status line
    pub raw: String,
    /// Article number (0 when the article was addressed by message-id)
    pub article_number: u64,
    /// Message identifier, e.g. `<abc@example.com>`
    pub message_id: String,
}

/// Parse a `2xx n message-id` status line (STAT/NEXT/LAST and the first line
/// of ARTICLE/HEAD/BODY replies). Trailing commentary after the message-id is
/// ignored.
pub fn parse_stat_response(response: &NntpResponse) -> Result<StatResp> {
    let raw = response.raw();
    let mut parts = response.message.split_whitespace();

    let article_number = parts
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| NntpError::Reply { line: raw.clone() })?;
    let message_id = parts
        .next()
        .ok_or_else(|| NntpError::Reply { line: raw.clone() })?
        .to_string();

    Ok(StatResp {
        raw,
        article_number,
        message_id,
    })
}

/// Parse a header block into ordered `(name, value)` pairs.
///
/// Folded continuation lines (leading whitespace) are unfolded onto the
/// previous value; lines without a colon are ignored.
pub fn parse_header_block(lines: &[String]) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::with_capacity(lines.len());

    for line in lines {
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some((_, value)) = headers.last_mut() {
                value.push(' ');
                value.push_str(line.trim_start());
            }
            continue;
        }

        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim_start().to_string()));
        }
    }

    headers
}

/// Split an ARTICLE payload at the first blank line into headers and body.
pub fn split_article_payload(lines: Vec<String>) -> (Vec<String>, Vec<String>) {
    match lines.iter().position(|l| l.is_empty()) {
        Some(blank) => {
            let mut head = lines;
            let body = head.split_off(blank + 1);
            head.pop(); // the blank separator itself
            (head, body)
        }
        None => (lines, Vec::new()),
    }
}
