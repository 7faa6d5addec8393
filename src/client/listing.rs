//! Newsgroup listing and server-information commands
//!
//! LIST variants, XGTITLE, NEWGROUPS, NEWNEWS, DATE, HELP, and SLAVE.

use super::NntpSession;
use crate::commands::{self, ActiveGroup, NewsgroupTitle};
use crate::datetime;
use crate::error::Result;
use crate::response::codes;
use chrono::NaiveDateTime;
use tracing::debug;

impl NntpSession {
    /// List active newsgroups (RFC 3977 §7.6.3)
    ///
    /// Without a pattern this is the bare `LIST` command; with one, the
    /// explicit `LIST ACTIVE <wildmat>` form.
    pub async fn list_active(&mut self, pattern: Option<&str>) -> Result<Vec<ActiveGroup>> {
        let response = self
            .exchange_long(&commands::list_active(pattern), &[])
            .await?;
        let response = Self::expect(response, codes::LIST_INFORMATION_FOLLOWS)?;
        Ok(commands::parse_active_groups(&response.lines))
    }

    /// List newsgroup descriptions (RFC 3977 §7.6.6)
    pub async fn list_newsgroups(&mut self, pattern: Option<&str>) -> Result<Vec<NewsgroupTitle>> {
        let response = self
            .exchange_long(&commands::list_newsgroups(pattern), &[])
            .await?;
        let response = Self::expect(response, codes::LIST_INFORMATION_FOLLOWS)?;
        Ok(commands::parse_newsgroup_titles(&response.lines))
    }

    /// List newsgroup descriptions via the pre-standard XGTITLE (RFC 2980 §2.17)
    ///
    /// Same record format as LIST NEWSGROUPS, but the reply code is 282.
    pub async fn xgtitle(&mut self, pattern: Option<&str>) -> Result<Vec<NewsgroupTitle>> {
        let response = self.exchange_long(&commands::xgtitle(pattern), &[]).await?;
        let response = Self::expect(response, codes::XGTITLE_LIST_FOLLOWS)?;
        Ok(commands::parse_newsgroup_titles(&response.lines))
    }

    /// List newsgroups created since `since` (RFC 3977 §7.3)
    ///
    /// The date/time argument is always emitted with a four-digit year.
    pub async fn newgroups(&mut self, since: &NaiveDateTime) -> Result<Vec<ActiveGroup>> {
        let (date, time) = datetime::format_date_args(since);
        let response = self
            .exchange_long(&commands::newgroups(&date, &time), &[])
            .await?;
        let response = Self::expect(response, codes::NEW_NEWSGROUPS_FOLLOW)?;
        Ok(commands::parse_active_groups(&response.lines))
    }

    /// List message-ids of articles posted to `newsgroup` since `since`
    /// (RFC 3977 §7.4)
    pub async fn newnews(&mut self, newsgroup: &str, since: &NaiveDateTime) -> Result<Vec<String>> {
        let (date, time) = datetime::format_date_args(since);
        let response = self
            .exchange_long(&commands::newnews(newsgroup, &date, &time), &[])
            .await?;
        let response = Self::expect(response, codes::NEW_ARTICLE_LIST_FOLLOWS)?;
        Ok(response
            .lines
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.trim_end().to_string())
            .collect())
    }

    /// The server's current date and time (RFC 3977 §7.1)
    ///
    /// The reply must be `111` followed by exactly 14 digits; anything else
    /// fails with [`crate::DataError::BadDate`] while leaving the session
    /// usable.
    pub async fn date(&mut self) -> Result<NaiveDateTime> {
        let response = self.exchange(commands::date()).await?;
        let response = Self::expect(response, codes::SERVER_DATE)?;
        let stamp = response.message.trim();
        datetime::parse_date_stamp(stamp)
    }

    /// Retrieve the server's help text (RFC 3977 §7.2)
    pub async fn help(&mut self) -> Result<Vec<String>> {
        let response = self.exchange_long(commands::help(), &[]).await?;
        let response = Self::expect(response, codes::HELP_TEXT_FOLLOWS)?;
        Ok(response.lines)
    }

    /// Mark this connection as coming from a slave server (RFC 977 §3.12)
    pub async fn slave(&mut self) -> Result<()> {
        let response = self.exchange(commands::slave()).await?;
        Self::expect(response, codes::SLAVE_STATUS_NOTED)?;
        debug!("Slave status noted");
        Ok(())
    }
}
