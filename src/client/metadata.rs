//! Article metadata retrieval commands (OVER, XOVER, XHDR, HDR)
//!
//! This module contains commands for retrieving article metadata without
//! downloading full article content, plus the `LIST OVERVIEW.FMT`
//! negotiation that determines how OVER/XOVER records are parsed.

use super::NntpSession;
use crate::commands::{self, ArticleRange, HdrEntry};
use crate::error::Result;
use crate::overview::{DEFAULT_OVERVIEW_FORMAT, OverviewEntry, OverviewFormat, parse_overview_line};
use crate::response::codes;
use tracing::{debug, trace};

impl NntpSession {
    /// The session's overview descriptor, negotiated on first use
    ///
    /// Issues `LIST OVERVIEW.FMT` once per session. A 215 reply is
    /// normalized and validated (failing with
    /// [`crate::DataError::OverviewFmtInvalid`] when its prefix is not the
    /// seven canonical fields); any other reply, and any failure talking to
    /// the server, falls back to the canonical default descriptor. The
    /// cached result is reused for every subsequent OVER/XOVER and survives
    /// STARTTLS and login, since the wire shape of overview records changes
    /// with neither.
    pub async fn overview_format(&mut self) -> Result<OverviewFormat> {
        if let Some(format) = &self.overview_fmt {
            return Ok(format.clone());
        }

        let format = match self.exchange_long(commands::list_overview_fmt(), &[]).await {
            Ok(response) if response.code == codes::LIST_INFORMATION_FOLLOWS => {
                OverviewFormat::parse(&response.lines)?
            }
            Ok(response) => {
                debug!(
                    "LIST OVERVIEW.FMT answered {}, using default format",
                    response.code
                );
                OverviewFormat::default_format()
            }
            Err(e) => {
                debug!("LIST OVERVIEW.FMT failed ({e}), using default format");
                OverviewFormat::default_format()
            }
        };

        self.overview_fmt = Some(format.clone());
        Ok(format)
    }

    /// Fetch overview records (RFC 3977 §8.3, RFC 2980 §2.8)
    ///
    /// Emits `OVER` when the capability map lists it and `XOVER` otherwise.
    /// Records are parsed against the session's overview descriptor; the
    /// configured header decoder is applied to extension field values.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_client::{ArticleRange, NntpSession, SessionConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut session = NntpSession::connect(SessionConfig::plain("news.example.com")).await?;
    /// session.group("misc.test").await?;
    /// for entry in session.over(&ArticleRange::span(1, 100)).await? {
    ///     println!("{}: {}", entry.article_number, entry.fields["subject"]);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn over(&mut self, range: &ArticleRange) -> Result<Vec<OverviewEntry>> {
        let use_over = self.capabilities().await?.has("OVER");
        let format = self.overview_format().await?;

        let command = if use_over {
            commands::over(range)
        } else {
            commands::xover(range)
        };
        trace!("Fetching overview: {}", command.trim_end());

        let response = self.exchange_long(&command, &[]).await?;
        let response = Self::expect(response, codes::OVERVIEW_INFO_FOLLOWS)?;

        let mut entries = Vec::with_capacity(response.lines.len());
        for line in &response.lines {
            // CRLF boundary noise produces trailing empty records
            if line.is_empty() {
                continue;
            }
            let mut entry = parse_overview_line(&format, line)?;
            self.decode_extension_fields(&format, &mut entry);
            entries.push(entry);
        }
        Ok(entries)
    }

    fn decode_extension_fields(&self, format: &OverviewFormat, entry: &mut OverviewEntry) {
        let Some(decoder) = &self.header_decoder else {
            return;
        };
        for name in format.fields().iter().skip(DEFAULT_OVERVIEW_FORMAT.len()) {
            if let Some(value) = entry.fields.get_mut(name) {
                *value = decoder(value);
            }
        }
    }

    /// Fetch one header across articles via the pre-standard XHDR
    /// (RFC 2980 §2.6)
    ///
    /// Each well-formed reply line is `<article-number> <value>`; malformed
    /// lines are preserved raw in the returned entries.
    pub async fn xhdr(&mut self, header: &str, range: &ArticleRange) -> Result<Vec<HdrEntry>> {
        trace!("Fetching XHDR {} {:?}", header, range.arg());

        let response = self
            .exchange_long(&commands::xhdr(header, range), &[])
            .await?;
        let response = Self::expect(response, codes::HEAD_FOLLOWS)?;
        Ok(response
            .lines
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| commands::parse_hdr_line(l))
            .collect())
    }

    /// Fetch one header across articles via HDR (RFC 3977 §8.5)
    ///
    /// The standardized successor to XHDR; replies with 225.
    pub async fn hdr(&mut self, header: &str, range: &ArticleRange) -> Result<Vec<HdrEntry>> {
        trace!("Fetching HDR {} {:?}", header, range.arg());

        let response = self.exchange_long(&commands::hdr(header, range), &[]).await?;
        let response = Self::expect(response, codes::HEADERS_FOLLOW)?;
        Ok(response
            .lines
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| commands::parse_hdr_line(l))
            .collect())
    }
}
