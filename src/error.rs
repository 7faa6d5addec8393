//! NNTP error types

use thiserror::Error;

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS error during secure connection or STARTTLS upgrade
    #[error("TLS error: {0}")]
    Tls(String),

    /// I/O deadline exceeded; the session is no longer usable
    #[error("I/O timeout")]
    Timeout,

    /// Server returned a 4xx reply; the request may succeed if retried later
    #[error("temporary failure {code}: {message}")]
    Temporary {
        /// NNTP response code (4xx)
        code: u16,
        /// Error message from server
        message: String,
    },

    /// Server returned a 5xx reply, or refused a mandatory exchange
    #[error("permanent failure {code}: {message}")]
    Permanent {
        /// NNTP response code (5xx)
        code: u16,
        /// Error message from server
        message: String,
    },

    /// Syntactically valid reply outside the command's expected status set
    #[error("unexpected reply: {line}")]
    Reply {
        /// Full raw response line as received
        line: String,
    },

    /// The byte stream violated the NNTP framing rules
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),

    /// A payload broke a content invariant
    #[error("malformed data: {0}")]
    Data(#[from] DataError),

    /// login() called on an already-authenticated session
    #[error("already authenticated")]
    AlreadyLoggedIn,

    /// starttls() called while TLS is active
    #[error("TLS already enabled")]
    TlsAlreadyEnabled,

    /// starttls() called after authentication
    #[error("TLS unavailable after authentication")]
    TlsForbiddenAfterAuth,

    /// Command issued on a closed or never-opened session
    #[error("not connected")]
    NotConnected,

    /// A previous command was cancelled mid-flight; the wire cannot be
    /// resynchronized and the session must be closed
    #[error("command already in flight")]
    CommandInFlight,
}

/// Framing-level violations surfaced by the line framer and classifier
#[derive(Error, Debug)]
pub enum ProtocolViolation {
    /// Response line does not start with a 3-digit status code
    #[error("bad status line: {0}")]
    BadStatus(String),

    /// A line exceeded the maximum permitted length
    #[error("line exceeds {0} bytes")]
    LineTooLong(usize),

    /// The stream ended mid-line or before a multi-line terminator
    #[error("unexpected end of stream")]
    UnexpectedEof,
}

/// Payload content violations
#[derive(Error, Debug)]
pub enum DataError {
    /// DATE reply was not exactly 14 digits, or encoded an invalid date
    #[error("malformed date stamp: {0}")]
    BadDate(String),

    /// LIST OVERVIEW.FMT reply failed validation
    #[error("invalid overview format: {0}")]
    OverviewFmtInvalid(String),

    /// Extended overview field missing its "Name: " prefix
    #[error("overview field missing header-name prefix: {0}")]
    OverMissingHeaderName(String),

    /// Overview record did not start with a decimal article number
    #[error("bad article number in overview record: {0}")]
    BadArticleNumber(String),
}

impl NntpError {
    /// Whether this error leaves the session unusable (the caller must close
    /// and reconnect). Status-level and payload-content errors keep the wire
    /// synchronized; framing, timeout, and I/O errors do not.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            NntpError::Io(_)
                | NntpError::Tls(_)
                | NntpError::Timeout
                | NntpError::Protocol(_)
                | NntpError::CommandInFlight
        )
    }
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
