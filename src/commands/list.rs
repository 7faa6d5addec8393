//! LIST command variants and XGTITLE

/// Build LIST command (RFC 3977 §7.6.3)
///
/// Bare `LIST` without a pattern; with one, the explicit `LIST ACTIVE` form.
pub fn list_active(pattern: Option<&str>) -> String {
    match pattern {
        Some(pattern) => format!("LIST ACTIVE {}\r\n", pattern),
        None => "LIST\r\n".to_string(),
    }
}

/// Build LIST NEWSGROUPS command (RFC 3977 §7.6.6)
///
/// Lists newsgroup descriptions, optionally filtered by a wildmat pattern.
pub fn list_newsgroups(pattern: Option<&str>) -> String {
    match pattern {
        Some(pattern) => format!("LIST NEWSGROUPS {}\r\n", pattern),
        None => "LIST NEWSGROUPS\r\n".to_string(),
    }
}

/// Build LIST OVERVIEW.FMT command (RFC 3977 §8.4)
///
/// Lists the format of overview data.
pub fn list_overview_fmt() -> &'static str {
    "LIST OVERVIEW.FMT\r\n"
}

/// Build XGTITLE command (RFC 2980 §2.17)
///
/// Pre-standard equivalent of LIST NEWSGROUPS; replies with 282.
pub fn xgtitle(pattern: Option<&str>) -> String {
    match pattern {
        Some(pattern) => format!("XGTITLE {}\r\n", pattern),
        None => "XGTITLE\r\n".to_string(),
    }
}

/// Newsgroup description entry from LIST NEWSGROUPS or XGTITLE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsgroupTitle {
    /// Newsgroup name
    pub name: String,
    /// Human-readable description (may be empty)
    pub title: String,
}

/// Parse LIST NEWSGROUPS / XGTITLE body lines
///
/// Each line is a group name followed by whitespace and a free-form title.
pub fn parse_newsgroup_titles(lines: &[String]) -> Vec<NewsgroupTitle> {
    let mut titles = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        match line.split_once(|c: char| c.is_ascii_whitespace()) {
            Some((name, title)) => titles.push(NewsgroupTitle {
                name: name.to_string(),
                title: title.trim_start().to_string(),
            }),
            None => titles.push(NewsgroupTitle {
                name: line.to_string(),
                title: String::new(),
            }),
        }
    }
    titles
}
