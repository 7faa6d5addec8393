//! NNTP session implementation: lifecycle, command engine, TLS upgrade

mod articles;
mod auth;
mod connection;
mod group_ops;
mod io;
mod listing;
mod metadata;
mod posting;

pub use articles::{ArticleResp, BodyResp, HeadResp};

use crate::capabilities::Capabilities;
use crate::config::SessionConfig;
use crate::overview::OverviewFormat;
use crate::transport::Transport;
use tracing::debug;

/// Caller-supplied decoder applied to extended overview header values
/// (e.g. an RFC 2047 encoded-words decoder). The default is identity.
pub type HeaderDecoder = Box<dyn Fn(&str) -> String + Send + Sync>;

/// An async NNTP session over plaintext TCP or TLS
///
/// A session is single-owner: every command takes `&mut self` and completes
/// its request line, response line, and payload contiguously. Dropping a
/// command future mid-flight leaves the wire unsynchronizable; subsequent
/// commands then fail until the session is closed.
///
/// # Example
///
/// ```no_run
/// use nntp_client::{ArticleRange, NntpSession, SessionConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SessionConfig::tls("news.example.com").reader_mode(true);
/// let mut session = NntpSession::connect(config).await?;
/// session.login("user", Some("pass")).await?;
///
/// let info = session.group("misc.test").await?;
/// println!("{} articles ({}-{})", info.count, info.first, info.last);
///
/// for entry in session.over(&ArticleRange::span(info.first, info.last)).await? {
///     println!("{}: {}", entry.article_number, entry.fields["subject"]);
/// }
///
/// session.quit().await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpSession {
    /// Connection parameters fixed at connect time
    config: SessionConfig,
    /// Byte transport; None once closed or torn down
    transport: Option<Transport>,
    /// Welcome banner captured at connect
    banner: Option<String>,
    /// Whether the banner advertised posting (200 vs 201)
    posting_allowed: bool,
    /// Capability cache: None = absent, Some = empty or populated
    capabilities: Option<Capabilities>,
    /// Negotiated overview descriptor; survives STARTTLS and login
    overview_fmt: Option<OverviewFormat>,
    /// Decoder for extended overview header values
    header_decoder: Option<HeaderDecoder>,
    /// Currently selected newsgroup
    current_group: Option<String>,
    /// Protocol version derived from the capability cache (default 1)
    nntp_version: u32,
    /// Server software description from IMPLEMENTATION, if advertised
    nntp_implementation: Option<String>,
    tls_on: bool,
    authenticated: bool,
    /// MODE READER answered 480 at connect; retry after login
    readermode_after_auth: bool,
    connected: bool,
    /// Set while a command owns the wire; survives a cancelled future and
    /// poisons the session
    in_flight: bool,
}

impl std::fmt::Debug for NntpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NntpSession")
            .field("config", &self.config)
            .field("transport", &self.transport.is_some())
            .field("banner", &self.banner)
            .field("posting_allowed", &self.posting_allowed)
            .field("capabilities", &self.capabilities)
            .field("overview_fmt", &self.overview_fmt)
            .field("header_decoder", &self.header_decoder.is_some())
            .field("current_group", &self.current_group)
            .field("nntp_version", &self.nntp_version)
            .field("nntp_implementation", &self.nntp_implementation)
            .field("tls_on", &self.tls_on)
            .field("authenticated", &self.authenticated)
            .field("readermode_after_auth", &self.readermode_after_auth)
            .field("connected", &self.connected)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl NntpSession {
    /// The welcome banner line captured at connect.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Whether the welcome banner advertised posting (200 rather than 201).
    pub fn posting_allowed(&self) -> bool {
        self.posting_allowed
    }

    /// Whether the session holds a live transport.
    pub fn is_connected(&self) -> bool {
        self.connected && self.transport.is_some()
    }

    /// Whether AUTHINFO completed successfully on this session.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether the byte stream is TLS-wrapped (implicit TLS or STARTTLS).
    pub fn tls_on(&self) -> bool {
        self.tls_on
    }

    /// Protocol version advertised via CAPABILITIES (1 when not advertised).
    pub fn nntp_version(&self) -> u32 {
        self.nntp_version
    }

    /// Server software description advertised via CAPABILITIES.
    pub fn nntp_implementation(&self) -> Option<&str> {
        self.nntp_implementation.as_deref()
    }

    /// The currently selected newsgroup, if any.
    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// Replace the decoder applied to extended overview header values.
    pub fn set_header_decoder(&mut self, decoder: HeaderDecoder) {
        self.header_decoder = Some(decoder);
    }

    /// Drop the transport and mark the session closed.
    ///
    /// Safe to call repeatedly; subsequent calls are no-ops.
    pub fn close(&mut self) {
        if self.transport.take().is_some() {
            debug!("NNTP session closed");
        }
        self.connected = false;
        self.in_flight = false;
    }
}

impl Drop for NntpSession {
    fn drop(&mut self) {
        debug!("NntpSession dropped");
    }
}
