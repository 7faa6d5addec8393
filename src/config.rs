//! NNTP session configuration

use std::time::Duration;

/// Default port for plaintext and STARTTLS-capable connections
pub const DEFAULT_PORT: u16 = 119;

/// Default port for implicit TLS connections
pub const DEFAULT_TLS_PORT: u16 = 563;

/// Default I/O timeout applied to connect and every subsequent operation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Transport security negotiation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlsMode {
    /// Plaintext for the whole session
    #[default]
    None,
    /// TLS handshake immediately after the TCP connect (port 563 convention)
    Implicit,
    /// Upgrade via STARTTLS when the server advertises it; plaintext otherwise
    StartTlsIfAvailable,
    /// Upgrade via STARTTLS; fail the connect if the server refuses
    StartTlsRequired,
}

impl TlsMode {
    /// The conventional port for this mode.
    pub fn default_port(self) -> u16 {
        match self {
            TlsMode::Implicit => DEFAULT_TLS_PORT,
            _ => DEFAULT_PORT,
        }
    }
}

/// Certificate trust settings for TLS connections
///
/// The default validates server certificates against the Mozilla root store
/// (webpki-roots) using the configured host as the SNI name.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrustConfig {
    /// Additional trusted root certificates, DER-encoded
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_roots: Vec<Vec<u8>>,

    /// Hostname to present for SNI and certificate validation, when it
    /// differs from the connect host (e.g. connecting by IP address)
    #[cfg_attr(feature = "serde", serde(default))]
    pub sni_hostname: Option<String>,

    /// Accept any certificate without validation
    ///
    /// **Security Warning:** Setting this to `true` disables certificate
    /// validation, making the connection vulnerable to man-in-the-middle
    /// attacks. Only use this for testing or with servers you trust on a
    /// secure network.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_insecure: bool,
}

/// NNTP session configuration
///
/// # Example
///
/// ```
/// use nntp_client::{SessionConfig, TlsMode};
///
/// // Recommended: use the constructor methods
/// let config = SessionConfig::tls("news.example.com");
///
/// // Or construct manually
/// let config = SessionConfig::new("news.example.com", 119, TlsMode::StartTlsIfAvailable)
///     .reader_mode(true);
/// ```
#[must_use]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Server hostname (e.g., "news.example.com")
    pub host: String,

    /// Server port (typically 119 for plain/STARTTLS, 563 for implicit TLS)
    pub port: u16,

    /// Transport security policy
    #[cfg_attr(feature = "serde", serde(default))]
    pub tls_mode: TlsMode,

    /// Certificate trust settings (ignored for `TlsMode::None`)
    #[cfg_attr(feature = "serde", serde(default))]
    pub trust: TrustConfig,

    /// Request reader mode at connect (MODE READER when the server does not
    /// already advertise the READER capability)
    #[cfg_attr(feature = "serde", serde(default))]
    pub reader_mode_on_connect: bool,

    /// Deadline for the connect sequence and for each subsequent I/O operation
    #[cfg_attr(feature = "serde", serde(default = "default_timeout"))]
    pub timeout: Duration,
}

#[cfg(feature = "serde")]
fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new(host: impl Into<String>, port: u16, tls_mode: TlsMode) -> Self {
        Self {
            host: host.into(),
            port,
            tls_mode,
            trust: TrustConfig::default(),
            reader_mode_on_connect: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Plaintext connection on the standard port (119)
    ///
    /// **Warning:** Plain connections transmit credentials in clear text.
    /// Use TLS connections whenever possible.
    pub fn plain(host: impl Into<String>) -> Self {
        Self::new(host, DEFAULT_PORT, TlsMode::None)
    }

    /// Implicit TLS connection on the standard secure port (563)
    pub fn tls(host: impl Into<String>) -> Self {
        Self::new(host, DEFAULT_TLS_PORT, TlsMode::Implicit)
    }

    /// STARTTLS upgrade on the standard port (119), failing if unavailable
    pub fn starttls(host: impl Into<String>) -> Self {
        Self::new(host, DEFAULT_PORT, TlsMode::StartTlsRequired)
    }

    /// Implicit TLS configuration that accepts self-signed certificates
    ///
    /// **Security Warning:** This configuration disables certificate
    /// validation, making the connection vulnerable to man-in-the-middle
    /// attacks. Only use this for testing or with servers you trust on a
    /// secure network.
    pub fn tls_insecure(host: impl Into<String>) -> Self {
        let mut config = Self::tls(host);
        config.trust.allow_insecure = true;
        config
    }

    /// Set the I/O timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Request reader mode at connect
    pub fn reader_mode(mut self, on: bool) -> Self {
        self.reader_mode_on_connect = on;
        self
    }
}
