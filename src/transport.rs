//! Low-level byte transport for the NNTP session
//!
//! This module owns the connection's byte stream and the two framing
//! primitives everything else is built on:
//! - `read_line` yields exactly one line (CRLF canonical; LF-only and
//!   CR-only boundaries accepted on input), bounded at `MAX_LINE_LENGTH`
//! - `read_multiline` collects a dot-terminated block and removes the
//!   RFC 3977 byte-stuffing
//!
//! The inner stream is replaceable: `upgrade_to_tls` swaps the plaintext
//! TCP stream for a TLS-wrapped one in place, which is only sound when no
//! read-ahead bytes are buffered.

use crate::error::{NntpError, ProtocolViolation, Result};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadBuf};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::pki_types::ServerName;

/// Maximum accepted line length in bytes, terminator included.
///
/// RFC 3977 bounds response lines at 512 octets; real servers exceed that in
/// overview records and headers, so the framer allows 2048.
pub const MAX_LINE_LENGTH: usize = 2048;

/// BufReader capacity for multi-line payload reads
const BUFREADER_CAPACITY: usize = 256 * 1024;

/// Strip NNTP byte-stuffing from a line (leading ".." becomes ".").
pub(crate) fn strip_byte_stuffing(line: &str) -> &str {
    if line.starts_with("..") {
        &line[1..]
    } else {
        line
    }
}

/// The connection's byte stream: plaintext TCP, or TLS over the same TCP
/// stream after implicit-TLS connect or a STARTTLS upgrade.
pub(crate) enum NntpStream {
    Plain(TcpStream),
    Tls(Box<TlsStream<TcpStream>>),
}

impl AsyncRead for NntpStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        match self.get_mut() {
            NntpStream::Plain(s) => Pin::new(s).poll_read(cx, buf),
            NntpStream::Tls(s) => Pin::new(s.as_mut()).poll_read(cx, buf),
        }
    }
}

impl AsyncWrite for NntpStream {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<std::io::Result<usize>> {
        match self.get_mut() {
            NntpStream::Plain(s) => Pin::new(s).poll_write(cx, buf),
            NntpStream::Tls(s) => Pin::new(s.as_mut()).poll_write(cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        match self.get_mut() {
            NntpStream::Plain(s) => Pin::new(s).poll_flush(cx),
            NntpStream::Tls(s) => Pin::new(s.as_mut()).poll_flush(cx),
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        match self.get_mut() {
            NntpStream::Plain(s) => Pin::new(s).poll_shutdown(cx),
            NntpStream::Tls(s) => Pin::new(s.as_mut()).poll_shutdown(cx),
        }
    }
}

/// Buffered transport with line framing.
///
/// Generic over the stream so the framer can be exercised against in-memory
/// streams; the session always uses `Transport<NntpStream>`.
pub(crate) struct Transport<S = NntpStream> {
    reader: BufReader<S>,
    /// A line ended at a bare CR whose LF may not have arrived yet; skip
    /// that LF at the start of the next read.
    skip_lf: bool,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Transport<S> {
    pub fn new(stream: S) -> Self {
        Self {
            reader: BufReader::with_capacity(BUFREADER_CAPACITY, stream),
            skip_lf: false,
        }
    }

    /// Write raw bytes and flush.
    pub async fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.reader.get_mut().write_all(bytes).await?;
        self.reader.get_mut().flush().await?;
        Ok(())
    }

    /// Whether the framer holds no read-ahead bytes.
    ///
    /// A pending CR-terminator LF counts as read-ahead: the stream position
    /// is not knowable, which is what this check exists to guarantee.
    pub fn read_ahead_empty(&self) -> bool {
        self.reader.buffer().is_empty() && !self.skip_lf
    }

    /// Read one line, excluding its terminator.
    ///
    /// Accepts CRLF, LF-only, and CR-only boundaries. Fails with
    /// `ProtocolViolation::LineTooLong` once the line (terminator included)
    /// exceeds [`MAX_LINE_LENGTH`], however the bytes are chunked, and with
    /// `ProtocolViolation::UnexpectedEof` if the stream ends mid-line.
    pub async fn read_line(&mut self) -> Result<String> {
        if self.skip_lf {
            let buf = self.reader.fill_buf().await?;
            if buf.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
            self.skip_lf = false;
        }

        let mut line: Vec<u8> = Vec::with_capacity(256);
        let mut consumed_total = 0usize;

        loop {
            let buf = self.reader.fill_buf().await?;
            if buf.is_empty() {
                return Err(NntpError::Protocol(ProtocolViolation::UnexpectedEof));
            }

            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let terminator = buf[pos];
                    let mut consume = pos + 1;
                    if terminator == b'\r' {
                        if buf.len() > pos + 1 {
                            if buf[pos + 1] == b'\n' {
                                consume += 1;
                            }
                        } else {
                            self.skip_lf = true;
                        }
                    }
                    if consumed_total + consume > MAX_LINE_LENGTH {
                        self.reader.consume(consume);
                        return Err(NntpError::Protocol(ProtocolViolation::LineTooLong(
                            MAX_LINE_LENGTH,
                        )));
                    }
                    line.extend_from_slice(&buf[..pos]);
                    self.reader.consume(consume);
                    return Ok(String::from_utf8_lossy(&line).into_owned());
                }
                None => {
                    let chunk = buf.len();
                    line.extend_from_slice(buf);
                    self.reader.consume(chunk);
                    consumed_total += chunk;
                    if consumed_total >= MAX_LINE_LENGTH {
                        return Err(NntpError::Protocol(ProtocolViolation::LineTooLong(
                            MAX_LINE_LENGTH,
                        )));
                    }
                }
            }
        }
    }

    /// Read a dot-terminated multi-line block.
    ///
    /// The terminator line is never delivered; byte-stuffing is removed.
    pub async fn read_multiline(&mut self) -> Result<Vec<String>> {
        // Most multiline responses have 10-100 lines
        let mut lines = Vec::with_capacity(64);
        loop {
            let line = self.read_line().await?;
            if line == "." {
                return Ok(lines);
            }
            lines.push(strip_byte_stuffing(&line).to_string());
        }
    }

    /// Stream a dot-terminated multi-line block into a byte sink.
    ///
    /// Each delivered line is written unstuffed, followed by CRLF. Returns
    /// the number of lines delivered.
    pub async fn read_multiline_into<W: AsyncWrite + Unpin>(
        &mut self,
        sink: &mut W,
    ) -> Result<u64> {
        let mut delivered = 0u64;
        loop {
            let line = self.read_line().await?;
            if line == "." {
                sink.flush().await?;
                return Ok(delivered);
            }
            sink.write_all(strip_byte_stuffing(&line).as_bytes()).await?;
            sink.write_all(b"\r\n").await?;
            delivered += 1;
        }
    }
}

impl Transport<NntpStream> {
    /// Wrap the current TCP stream in TLS, consuming the transport.
    ///
    /// Only sound at a synchronized point: the server has answered `382` and
    /// nothing has been read since. Any buffered read-ahead means plaintext
    /// followed the `382` line and the stream cannot be trusted; the upgrade
    /// is refused and the caller must tear the session down.
    pub async fn upgrade_to_tls(
        self,
        connector: TlsConnector,
        server_name: ServerName<'static>,
    ) -> Result<Transport<NntpStream>> {
        if !self.read_ahead_empty() {
            return Err(NntpError::Tls(
                "plaintext bytes buffered across the STARTTLS boundary".to_string(),
            ));
        }

        let tcp = match self.reader.into_inner() {
            NntpStream::Plain(tcp) => tcp,
            NntpStream::Tls(_) => return Err(NntpError::TlsAlreadyEnabled),
        };

        let tls = connector
            .connect(server_name, tcp)
            .await
            .map_err(|e| NntpError::Tls(format!("TLS handshake failed: {e}")))?;

        Ok(Transport::new(NntpStream::Tls(Box::new(tls))))
    }
}
