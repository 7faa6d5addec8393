//! OVER/XOVER commands and their range argument

/// Article range argument for OVER/XOVER and XHDR/HDR
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRange {
    /// The current article of the selected newsgroup
    Current,
    /// A single article number
    Number(u64),
    /// A numeric span; an open upper bound renders as `first-`
    Span {
        /// First article number of the span
        first: u64,
        /// Last article number, or None for "through the end"
        last: Option<u64>,
    },
    /// A single article addressed by message-id
    MessageId(String),
}

impl ArticleRange {
    /// The command argument, or None for the current article.
    pub fn arg(&self) -> Option<String> {
        match self {
            ArticleRange::Current => None,
            ArticleRange::Number(n) => Some(n.to_string()),
            ArticleRange::Span { first, last: Some(last) } => Some(format!("{}-{}", first, last)),
            ArticleRange::Span { first, last: None } => Some(format!("{}-", first)),
            ArticleRange::MessageId(id) => Some(id.clone()),
        }
    }

    /// Closed numeric span helper.
    pub fn span(first: u64, last: u64) -> Self {
        ArticleRange::Span {
            first,
            last: Some(last),
        }
    }
}

/// Build OVER command (RFC 3977 §8.3)
pub fn over(range: &ArticleRange) -> String {
    match range.arg() {
        Some(arg) => format!("OVER {}\r\n", arg),
        None => "OVER\r\n".to_string(),
    }
}

/// Build XOVER command (RFC 2980 §2.8)
///
/// The pre-standard name for OVER; emitted when the server does not
/// advertise the OVER capability.
pub fn xover(range: &ArticleRange) -> String {
    match range.arg() {
        Some(arg) => format!("XOVER {}\r\n", arg),
        None => "XOVER\r\n".to_string(),
    }
}
