//! Low-level I/O operations for NNTP protocol communication
//!
//! This module provides the guarded command exchange everything else is
//! built on: one request line out, one status line back, optionally a
//! dot-terminated payload. The in-flight guard enforces the one-command-at-
//! a-time invariant across cancelled futures, and fatal errors (timeout,
//! framing violations, I/O) tear the transport down because the wire cannot
//! be resynchronized.

use super::NntpSession;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, is_long_response};
use crate::transport::Transport;
use tokio::io::AsyncWrite;
use tokio::time::timeout;
use tracing::trace;

impl NntpSession {
    pub(super) fn transport_mut(&mut self) -> Result<&mut Transport> {
        self.transport.as_mut().ok_or(NntpError::NotConnected)
    }

    /// Claim the wire for one command.
    pub(super) fn begin(&mut self) -> Result<()> {
        if !self.connected || self.transport.is_none() {
            return Err(NntpError::NotConnected);
        }
        if self.in_flight {
            // A previous command future was dropped mid-exchange; the
            // stream position is unknown and only close() helps.
            return Err(NntpError::CommandInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Release the wire, tearing the session down after fatal errors.
    pub(super) fn finish<T>(&mut self, result: Result<T>) -> Result<T> {
        self.in_flight = false;
        if let Err(e) = &result
            && e.is_fatal()
        {
            self.close();
        }
        result
    }

    /// Write one command line (CRLF included by the builders).
    pub(super) async fn send_line(&mut self, command: &str) -> Result<()> {
        trace!("Sending command: {}", command.trim_end());
        let deadline = self.config.timeout;
        let transport = self.transport_mut()?;
        timeout(deadline, transport.write_all(command.as_bytes()))
            .await
            .map_err(|_| NntpError::Timeout)?
    }

    /// Read and parse one status line.
    pub(super) async fn read_status(&mut self) -> Result<NntpResponse> {
        let deadline = self.config.timeout;
        let transport = self.transport_mut()?;
        let line = timeout(deadline, transport.read_line())
            .await
            .map_err(|_| NntpError::Timeout)??;
        trace!("Received: {}", line);
        commands::parse_single_response(&line)
    }

    /// Read a dot-terminated payload.
    pub(super) async fn read_payload(&mut self) -> Result<Vec<String>> {
        let deadline = self.config.timeout;
        let transport = self.transport_mut()?;
        timeout(deadline, transport.read_multiline())
            .await
            .map_err(|_| NntpError::Timeout)?
    }

    /// Short command: request line out, status line back.
    pub(super) async fn exchange(&mut self, command: &str) -> Result<NntpResponse> {
        self.begin()?;
        let result = async {
            self.send_line(command).await?;
            self.read_status().await
        }
        .await;
        self.finish(result)
    }

    /// Long command: like [`exchange`](Self::exchange), but when the status
    /// code admits a payload (the long-response set, plus any codes in
    /// `extra_long`, e.g. 211 for LISTGROUP) the dot-terminated block is
    /// read into `lines`. For every other code nothing past the status line
    /// is read; the caller's expectation check turns a short success reply
    /// into the appropriate error.
    pub(super) async fn exchange_long(
        &mut self,
        command: &str,
        extra_long: &[u16],
    ) -> Result<NntpResponse> {
        self.begin()?;
        let result = async {
            self.send_line(command).await?;
            let mut response = self.read_status().await?;
            if is_long_response(response.code) || extra_long.contains(&response.code) {
                response.lines = self.read_payload().await?;
            }
            Ok(response)
        }
        .await;
        self.finish(result)
    }

    /// Long command with the payload streamed into a byte sink instead of
    /// collected. Returns the response and the number of delivered lines.
    pub(super) async fn exchange_long_into<W: AsyncWrite + Unpin>(
        &mut self,
        command: &str,
        expected: u16,
        sink: &mut W,
    ) -> Result<(NntpResponse, u64)> {
        self.begin()?;
        let deadline = self.config.timeout;
        let result = async {
            self.send_line(command).await?;
            let response = self.read_status().await?;
            if response.code != expected {
                return Err(Self::status_error(response));
            }
            let transport = self.transport_mut()?;
            let delivered = timeout(deadline, transport.read_multiline_into(sink))
                .await
                .map_err(|_| NntpError::Timeout)??;
            Ok((response, delivered))
        }
        .await;
        self.finish(result)
    }

    /// Stream a prepared (dot-stuffed, CRLF-terminated) article followed by
    /// the block terminator. Unguarded: POST/IHAVE hold the in-flight guard
    /// across both of their phases, since a cancellation after the
    /// continuation reply leaves the server reading article lines.
    pub(super) async fn write_payload(&mut self, payload: &str) -> Result<()> {
        let deadline = self.config.timeout;
        let transport = self.transport_mut()?;
        timeout(deadline, transport.write_all(payload.as_bytes()))
            .await
            .map_err(|_| NntpError::Timeout)??;
        let transport = self.transport_mut()?;
        timeout(deadline, transport.write_all(b".\r\n"))
            .await
            .map_err(|_| NntpError::Timeout)?
    }

    /// Map an out-of-contract reply onto the error taxonomy: 4xx temporary,
    /// 5xx permanent, anything else a reply-contract violation with the raw
    /// line preserved.
    pub(super) fn status_error(response: NntpResponse) -> NntpError {
        match response.code {
            400..=499 => NntpError::Temporary {
                code: response.code,
                message: response.message,
            },
            500..=599 => NntpError::Permanent {
                code: response.code,
                message: response.message,
            },
            _ => NntpError::Reply {
                line: response.raw(),
            },
        }
    }

    /// Require exactly `code`, converting anything else via
    /// [`status_error`](Self::status_error).
    pub(super) fn expect(response: NntpResponse, code: u16) -> Result<NntpResponse> {
        if response.code == code {
            Ok(response)
        } else {
            Err(Self::status_error(response))
        }
    }

    /// Require one of `codes`.
    pub(super) fn expect_one_of(response: NntpResponse, codes: &[u16]) -> Result<NntpResponse> {
        if codes.contains(&response.code) {
            Ok(response)
        } else {
            Err(Self::status_error(response))
        }
    }
}
