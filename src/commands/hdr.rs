//! XHDR/HDR commands and header field retrieval

use super::over::ArticleRange;

/// Build XHDR command (RFC 2980 §2.6)
///
/// The pre-standard form of HDR, still the more widely deployed of the two.
pub fn xhdr(header: &str, range: &ArticleRange) -> String {
    match range.arg() {
        Some(arg) => format!("XHDR {} {}\r\n", header, arg),
        None => format!("XHDR {}\r\n", header),
    }
}

/// Build HDR command (RFC 3977 §8.5)
pub fn hdr(header: &str, range: &ArticleRange) -> String {
    match range.arg() {
        Some(arg) => format!("HDR {} {}\r\n", header, arg),
        None => format!("HDR {}\r\n", header),
    }
}

/// One line of an XHDR/HDR reply
///
/// Well-formed lines are `<article-number> <value>`. A malformed line is
/// kept verbatim in `value` with `article_number` unset, since servers
/// answering a message-id query put the message-id in the first column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdrEntry {
    /// Article number, when the first column parsed as one
    pub article_number: Option<u64>,
    /// Header field value, or the whole raw line for malformed entries
    pub value: String,
}

/// Parse an XHDR/HDR reply line.
pub fn parse_hdr_line(line: &str) -> HdrEntry {
    if let Some((number, value)) = line.split_once(' ')
        && let Ok(article_number) = number.parse()
    {
        return HdrEntry {
            article_number: Some(article_number),
            value: value.to_string(),
        };
    }

    HdrEntry {
        article_number: None,
        value: line.to_string(),
    }
}
