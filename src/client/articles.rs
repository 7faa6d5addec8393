//! Article retrieval commands (RFC 3977 §6.2)

use super::NntpSession;
use crate::commands::{self, ArticleRef};
use crate::error::Result;
use crate::response::codes;
use tokio::io::AsyncWrite;
use tracing::debug;

/// HEAD result: the article's ordered header fields
#[derive(Debug, Clone)]
pub struct HeadResp {
    /// Article number from the status line (0 when addressed by message-id)
    pub article_number: u64,
    /// Message identifier from the status line
    pub message_id: String,
    /// Header fields in transmission order, values unfolded
    pub headers: Vec<(String, String)>,
}

/// BODY result: the article's body lines
#[derive(Debug, Clone)]
pub struct BodyResp {
    /// Article number from the status line (0 when addressed by message-id)
    pub article_number: u64,
    /// Message identifier from the status line
    pub message_id: String,
    /// Body lines, unstuffed, without line terminators
    pub lines: Vec<String>,
}

/// ARTICLE result: headers plus body, split at the first blank line
#[derive(Debug, Clone)]
pub struct ArticleResp {
    /// Article number from the status line (0 when addressed by message-id)
    pub article_number: u64,
    /// Message identifier from the status line
    pub message_id: String,
    /// Header fields in transmission order, values unfolded
    pub headers: Vec<(String, String)>,
    /// Body lines, unstuffed, without line terminators
    pub lines: Vec<String>,
}

impl NntpSession {
    /// Retrieve an article's headers (RFC 3977 §6.2.2)
    pub async fn head(&mut self, article: &ArticleRef) -> Result<HeadResp> {
        let response = self.exchange_long(&commands::head(article), &[]).await?;
        let response = Self::expect(response, codes::HEAD_FOLLOWS)?;
        let stat = commands::parse_stat_response(&response)?;

        Ok(HeadResp {
            article_number: stat.article_number,
            message_id: stat.message_id,
            headers: commands::parse_header_block(&response.lines),
        })
    }

    /// Retrieve an article's body (RFC 3977 §6.2.3)
    pub async fn body(&mut self, article: &ArticleRef) -> Result<BodyResp> {
        let response = self.exchange_long(&commands::body(article), &[]).await?;
        let response = Self::expect(response, codes::BODY_FOLLOWS)?;
        let stat = commands::parse_stat_response(&response)?;

        Ok(BodyResp {
            article_number: stat.article_number,
            message_id: stat.message_id,
            lines: response.lines,
        })
    }

    /// Stream an article's body into a byte sink
    ///
    /// Each body line is written unstuffed and CRLF-terminated as it
    /// arrives, instead of being collected in memory. Returns the parsed
    /// status line.
    pub async fn body_into<W: AsyncWrite + Unpin>(
        &mut self,
        article: &ArticleRef,
        sink: &mut W,
    ) -> Result<commands::StatResp> {
        let (response, delivered) = self
            .exchange_long_into(&commands::body(article), codes::BODY_FOLLOWS, sink)
            .await?;
        debug!("Streamed {} body lines", delivered);
        commands::parse_stat_response(&response)
    }

    /// Retrieve a complete article (RFC 3977 §6.2.1)
    ///
    /// The payload is split at the first blank line; everything before it
    /// is parsed as headers, everything after is the body.
    pub async fn article(&mut self, article: &ArticleRef) -> Result<ArticleResp> {
        let response = self.exchange_long(&commands::article(article), &[]).await?;
        let response = Self::expect(response, codes::ARTICLE_FOLLOWS)?;
        let stat = commands::parse_stat_response(&response)?;

        let (header_lines, body_lines) = commands::split_article_payload(response.lines);

        Ok(ArticleResp {
            article_number: stat.article_number,
            message_id: stat.message_id,
            headers: commands::parse_header_block(&header_lines),
            lines: body_lines,
        })
    }
}
