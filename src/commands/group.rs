//! Group selection and newsgroup-related commands

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

/// Build GROUP command
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {}\r\n", newsgroup)
}

/// Build LISTGROUP command (RFC 3977 §6.1.2)
///
/// Lists article numbers in a newsgroup, optionally restricted to a range.
pub fn listgroup(newsgroup: &str, range: Option<&str>) -> String {
    match range {
        Some(range) => format!("LISTGROUP {} {}\r\n", newsgroup, range),
        None => format!("LISTGROUP {}\r\n", newsgroup),
    }
}

/// Build NEWGROUPS command (RFC 3977 §7.3)
///
/// Lists newsgroups created since the specified date/time.
/// Format: `NEWGROUPS yyyymmdd hhmmss`
pub fn newgroups(date: &str, time: &str) -> String {
    format!("NEWGROUPS {} {}\r\n", date, time)
}

/// Build NEWNEWS command (RFC 3977 §7.4)
///
/// Lists message-ids of articles posted to a group since the date/time.
pub fn newnews(newsgroup: &str, date: &str, time: &str) -> String {
    format!("NEWNEWS {} {} {}\r\n", newsgroup, date, time)
}

/// Group selection result from the GROUP command
///
/// Response format: "211 count first last group-name"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResp {
    /// Full raw status line
    pub raw: String,
    /// Estimated number of articles in the group
    pub count: u64,
    /// Number of the first article
    pub first: u64,
    /// Number of the last article
    pub last: u64,
    /// Newsgroup name, lowercased
    pub name: String,
}

/// Parse GROUP response to extract article count, range, and name
pub fn parse_group_response(response: &NntpResponse) -> Result<GroupResp> {
    let raw = response.raw();
    let parts: Vec<&str> = response.message.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(NntpError::Reply { line: raw });
    }

    let count = parts[0]
        .parse()
        .map_err(|_| NntpError::Reply { line: raw.clone() })?;
    let first = parts[1]
        .parse()
        .map_err(|_| NntpError::Reply { line: raw.clone() })?;
    let last = parts[2]
        .parse()
        .map_err(|_| NntpError::Reply { line: raw.clone() })?;

    Ok(GroupResp {
        raw,
        count,
        first,
        last,
        name: parts[3].to_lowercase(),
    })
}

/// Active newsgroup entry from LIST ACTIVE and NEWGROUPS (RFC 3977 §7.6.3)
#[derive(Debug, Clone)]
pub struct ActiveGroup {
    /// Newsgroup name
    pub name: String,
    /// Highest article number
    pub high: u64,
    /// Lowest article number
    pub low: u64,
    /// Posting status:
    /// - "y" = posting allowed
    /// - "n" = posting not allowed
    /// - "m" = moderated
    /// - "=group.name" = alias to another group
    pub status: String,
}

/// Parse LIST ACTIVE / NEWGROUPS body lines into ActiveGroup entries
///
/// Each line is "group high low status". Malformed lines are skipped.
pub fn parse_active_groups(lines: &[String]) -> Vec<ActiveGroup> {
    let mut groups = Vec::with_capacity(lines.len());
    for line in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            continue;
        }

        let high = parts[1].parse().unwrap_or(0);
        let low = parts[2].parse().unwrap_or(0);
        // Status can be multi-character (e.g., "=group.name" alias)
        let status = parts[3].to_string();

        groups.push(ActiveGroup {
            name: parts[0].to_string(),
            high,
            low,
            status,
        });
    }

    groups
}
