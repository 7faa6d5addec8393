//! Article posting and transfer (POST, IHAVE) and session shutdown

use super::NntpSession;
use crate::commands;
use crate::error::Result;
use crate::response::codes;
use tracing::debug;

impl NntpSession {
    /// Post a new article (RFC 3977 §6.3.1)
    ///
    /// Two-phase exchange: `POST` must be answered with 340, then the
    /// article text is streamed with CRLF line endings and dot-stuffing
    /// applied, terminated by a lone `.` line, and the final reply must be
    /// 240.
    ///
    /// `article` is the complete article text: headers, a blank line, and
    /// the body. Lines not ending in CRLF get it appended; lines opening
    /// with `.` are escaped on the wire.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`crate::NntpError::Temporary`] - posting not permitted (440) or failed (441)
    /// - [`crate::NntpError::Reply`] - the server broke the two-phase contract
    /// - [`crate::NntpError::Timeout`] - the server did not respond in time
    pub async fn post(&mut self, article: &str) -> Result<()> {
        debug!("Posting article");

        // One guard spans both phases: once 340 arrives the server is
        // collecting article lines, and a cancellation in between cannot be
        // resynchronized.
        self.begin()?;
        let result = self.post_phases(article).await;
        self.finish(result)?;

        debug!("Article posted successfully");
        Ok(())
    }

    async fn post_phases(&mut self, article: &str) -> Result<()> {
        self.send_line(commands::post()).await?;
        let response = self.read_status().await?;
        Self::expect(response, codes::SEND_ARTICLE)?;

        self.write_payload(&commands::dot_stuff(article)).await?;
        let response = self.read_status().await?;
        Self::expect(response, codes::ARTICLE_POSTED)?;
        Ok(())
    }

    /// Offer an article to the server by message-id (RFC 3977 §6.3.2)
    ///
    /// IHAVE is the server-to-server transfer form of posting: 335 invites
    /// the article, 435/436 decline it, and after transmission 235 confirms
    /// acceptance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`crate::NntpError::Temporary`] - not wanted (435), or transfer not
    ///   possible right now (436)
    /// - [`crate::NntpError::Temporary`] - rejected after transfer (437)
    /// - [`crate::NntpError::Timeout`] - the server did not respond in time
    pub async fn ihave(&mut self, message_id: &str, article: &str) -> Result<()> {
        debug!("IHAVE: offering article {}", message_id);

        self.begin()?;
        let result = self.ihave_phases(message_id, article).await;
        self.finish(result)?;

        debug!("Article transferred successfully");
        Ok(())
    }

    async fn ihave_phases(&mut self, message_id: &str, article: &str) -> Result<()> {
        self.send_line(&commands::ihave(message_id)).await?;
        let response = self.read_status().await?;
        Self::expect(response, codes::SEND_ARTICLE_TRANSFER)?;

        self.write_payload(&commands::dot_stuff(article)).await?;
        let response = self.read_status().await?;
        Self::expect(response, codes::ARTICLE_TRANSFERRED)?;
        Ok(())
    }

    /// Close the session gracefully (RFC 3977 §5.4)
    ///
    /// Sends QUIT and reads the reply best-effort; the transport is closed
    /// on every path, including reply errors, and repeated calls are no-ops.
    pub async fn quit(&mut self) -> Result<()> {
        if self.transport.is_some() {
            debug!("Closing NNTP session");
            if let Err(e) = self.exchange(commands::quit()).await {
                debug!("QUIT reply suppressed on close path: {e}");
            }
        }
        self.close();
        Ok(())
    }
}
