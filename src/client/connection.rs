//! Connection management for the NNTP session
//!
//! This module handles TCP establishment and socket tuning, the welcome
//! banner, implicit TLS, the in-band STARTTLS upgrade, MODE READER, and the
//! capability cache reload that follows every capability-affecting command.

use crate::capabilities::Capabilities;
use crate::commands;
use crate::config::{SessionConfig, TlsMode, TrustConfig};
use crate::error::{NntpError, Result};
use crate::response::codes;
use crate::transport::{NntpStream, Transport};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::TlsConnector;
use tokio_rustls::rustls::client::danger::{
    HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier,
};
use tokio_rustls::rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use tokio_rustls::rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use tracing::{debug, warn};

use super::NntpSession;

/// TCP receive buffer request; the OS may adjust
const RECV_BUFFER_SIZE: usize = 256 * 1024;

/// Dangerous certificate verifier that accepts all certificates
///
/// **Security Warning:** This verifier disables all certificate validation,
/// making connections vulnerable to man-in-the-middle attacks. Only used
/// when `TrustConfig::allow_insecure` is set.
#[derive(Debug)]
struct DangerousAcceptAnyCertificate;

impl ServerCertVerifier for DangerousAcceptAnyCertificate {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, tokio_rustls::rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Build a rustls connector from the trust settings.
fn build_tls_connector(trust: &TrustConfig) -> Result<TlsConnector> {
    use tokio_rustls::rustls::crypto::{CryptoProvider, ring};
    let _ = CryptoProvider::install_default(ring::default_provider());

    let tls_config = if trust.allow_insecure {
        warn!("TLS certificate validation disabled - connection vulnerable to MITM attacks");
        ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(DangerousAcceptAnyCertificate))
            .with_no_client_auth()
    } else {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        for der in &trust.extra_roots {
            root_store
                .add(CertificateDer::from(der.clone()))
                .map_err(|e| NntpError::Tls(format!("invalid extra root certificate: {e}")))?;
        }

        ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth()
    };

    Ok(TlsConnector::from(Arc::new(tls_config)))
}

/// The name presented for SNI and certificate validation.
fn server_name(config: &SessionConfig) -> Result<ServerName<'static>> {
    let host = config.trust.sni_hostname.as_deref().unwrap_or(&config.host);
    Ok(ServerName::try_from(host)
        .map_err(|e| NntpError::Tls(format!("invalid domain: {e}")))?
        .to_owned())
}

/// Open and tune the TCP socket.
async fn open_tcp(host: &str, port: u16, deadline: Duration) -> Result<TcpStream> {
    use std::net::ToSocketAddrs;
    let addr = format!("{}:{}", host, port);
    let socket_addr = addr
        .to_socket_addrs()
        .map_err(|e| {
            NntpError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Failed to resolve address: {}", e),
            ))
        })?
        .next()
        .ok_or_else(|| {
            NntpError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "No address resolved",
            ))
        })?;

    use socket2::{Domain, Protocol, Socket, Type};
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP)).map_err(NntpError::Io)?;

    // NNTP is a request/response protocol; send command lines immediately
    socket.set_nodelay(true).map_err(NntpError::Io)?;

    if let Err(e) = socket.set_recv_buffer_size(RECV_BUFFER_SIZE) {
        warn!("Failed to set receive buffer size to {RECV_BUFFER_SIZE} bytes: {e}");
    }

    // socket2::Socket::connect() is blocking, so run it on a blocking task.
    // Connect BEFORE setting non-blocking mode.
    let tcp_stream = timeout(
        deadline,
        tokio::task::spawn_blocking(move || -> std::io::Result<std::net::TcpStream> {
            socket.connect(&socket_addr.into())?;
            socket.set_nonblocking(true)?;
            Ok(socket.into())
        }),
    )
    .await
    .map_err(|_| NntpError::Timeout)?
    .map_err(|e| NntpError::Io(std::io::Error::other(format!("Task join error: {}", e))))?
    .map_err(NntpError::Io)?;

    TcpStream::from_std(tcp_stream).map_err(NntpError::Io)
}

impl NntpSession {
    /// Connect to an NNTP server
    ///
    /// Opens the transport (with an immediate TLS handshake for
    /// `TlsMode::Implicit`), validates the welcome banner (200 or 201),
    /// loads the capability cache, performs the STARTTLS upgrade when the
    /// TLS mode asks for it, and requests reader mode when configured.
    /// The session counts as connected only once the banner has been read
    /// and validated.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Io`] - TCP connection fails (DNS resolution, network unreachable, etc.)
    /// - [`NntpError::Tls`] - TLS handshake fails (invalid certificate, protocol error)
    /// - [`NntpError::Timeout`] - Connect or any I/O step times out
    /// - [`NntpError::Temporary`] / [`NntpError::Permanent`] - the server
    ///   refused the connection or a mandatory negotiation step
    pub async fn connect(config: SessionConfig) -> Result<Self> {
        debug!("Connecting to NNTP server {}:{}", config.host, config.port);

        let tcp = open_tcp(&config.host, config.port, config.timeout).await?;

        let implicit_tls = config.tls_mode == TlsMode::Implicit;
        let stream = if implicit_tls {
            let connector = build_tls_connector(&config.trust)?;
            let name = server_name(&config)?;
            let tls = timeout(config.timeout, connector.connect(name, tcp))
                .await
                .map_err(|_| NntpError::Timeout)?
                .map_err(|e| NntpError::Tls(format!("TLS handshake failed: {e}")))?;
            NntpStream::Tls(Box::new(tls))
        } else {
            NntpStream::Plain(tcp)
        };

        let mut session = Self {
            config,
            transport: Some(Transport::new(stream)),
            banner: None,
            posting_allowed: false,
            capabilities: None,
            overview_fmt: None,
            header_decoder: None,
            current_group: None,
            nntp_version: 1,
            nntp_implementation: None,
            tls_on: implicit_tls,
            authenticated: false,
            readermode_after_auth: false,
            connected: false,
            in_flight: false,
        };

        let banner = session.read_status().await?;
        debug!("Server greeting: {}", banner.raw());
        let banner = Self::expect_one_of(
            banner,
            &[codes::READY_POSTING_ALLOWED, codes::READY_NO_POSTING],
        )?;
        session.posting_allowed = banner.code == codes::READY_POSTING_ALLOWED;
        session.banner = Some(banner.raw());
        session.connected = true;

        session.reload_capabilities().await?;

        match session.config.tls_mode {
            TlsMode::StartTlsRequired => session.starttls().await?,
            TlsMode::StartTlsIfAvailable => {
                let advertised = session
                    .capabilities
                    .as_ref()
                    .is_some_and(|caps| caps.has("STARTTLS"));
                if advertised {
                    session.starttls().await?;
                }
            }
            _ => {}
        }

        if session.config.reader_mode_on_connect {
            let has_reader = session
                .capabilities
                .as_ref()
                .is_some_and(|caps| caps.has("READER"));
            if !has_reader {
                session.mode_reader().await?;
            }
        }

        Ok(session)
    }

    /// Upgrade the connection to TLS via STARTTLS (RFC 4642)
    ///
    /// Preconditions: TLS not already active and not yet authenticated
    /// (servers refuse TLS after AUTHINFO). On `382` the transport is
    /// swapped for a TLS stream and the capability cache is invalidated and
    /// reloaded. Any other reply fails without touching the transport. A
    /// failed upgrade (including plaintext bytes smuggled in after the 382
    /// line) leaves the session disconnected.
    pub async fn starttls(&mut self) -> Result<()> {
        if self.tls_on {
            return Err(NntpError::TlsAlreadyEnabled);
        }
        if self.authenticated {
            return Err(NntpError::TlsForbiddenAfterAuth);
        }

        // One guard spans the exchange and the handshake: after 382 the
        // stream is committed to TLS and a cancellation cannot be unwound.
        self.begin()?;
        let result = self.starttls_exchange().await;
        self.finish(result)?;

        self.reload_capabilities().await
    }

    async fn starttls_exchange(&mut self) -> Result<()> {
        self.send_line(commands::starttls()).await?;
        let response = self.read_status().await?;
        // A refusal leaves the transport untouched and the session usable
        Self::expect(response, codes::CONTINUE_TLS)?;

        let connector = build_tls_connector(&self.config.trust)?;
        let name = server_name(&self.config)?;

        // From here on a failure is unrecoverable: the old transport is
        // consumed and a partial handshake cannot be unwound.
        let transport = self.transport.take().ok_or(NntpError::NotConnected)?;
        let upgraded = timeout(self.config.timeout, transport.upgrade_to_tls(connector, name))
            .await
            .map_err(|_| NntpError::Timeout)
            .and_then(|r| r);

        match upgraded {
            Ok(transport) => {
                debug!("STARTTLS upgrade complete");
                self.transport = Some(transport);
                self.tls_on = true;
                self.capabilities = None;
                Ok(())
            }
            Err(e) => {
                self.close();
                Err(e)
            }
        }
    }

    /// Switch the server to reader mode (RFC 3977 §5.3)
    ///
    /// On 200/201 the capability cache is invalidated and reloaded. A 480
    /// reply defers the switch until after authentication; any other reply
    /// is an error.
    pub async fn mode_reader(&mut self) -> Result<()> {
        let response = self.exchange(commands::mode_reader()).await?;
        match response.code {
            codes::READY_POSTING_ALLOWED | codes::READY_NO_POSTING => {
                self.posting_allowed = response.code == codes::READY_POSTING_ALLOWED;
                self.capabilities = None;
                self.reload_capabilities().await
            }
            codes::AUTH_REQUIRED => {
                debug!("MODE READER deferred until after authentication");
                self.readermode_after_auth = true;
                Ok(())
            }
            _ => Err(Self::status_error(response)),
        }
    }

    /// The server's capabilities, fetched on first use and cached until a
    /// capability-affecting command (AUTHINFO, STARTTLS, MODE READER)
    /// invalidates the cache.
    pub async fn capabilities(&mut self) -> Result<Capabilities> {
        if self.capabilities.is_none() {
            self.reload_capabilities().await?;
        }
        Ok(self.capabilities.clone().unwrap_or_default())
    }

    /// Issue CAPABILITIES and replace the cache and the derived
    /// version/implementation attributes.
    pub(super) async fn reload_capabilities(&mut self) -> Result<()> {
        let response = self.exchange_long(commands::capabilities(), &[]).await?;
        let caps = if response.code == codes::CAPABILITY_LIST {
            Capabilities::parse(&response.lines)
        } else if response.is_error() {
            // Pre-RFC 3977 servers reject CAPABILITIES outright; treat the
            // capability set as empty rather than failing the session
            debug!("CAPABILITIES rejected ({}), assuming none", response.code);
            Capabilities::new()
        } else {
            return Err(Self::status_error(response));
        };

        self.nntp_version = caps.version();
        self.nntp_implementation = caps.implementation();
        self.capabilities = Some(caps);
        Ok(())
    }
}
