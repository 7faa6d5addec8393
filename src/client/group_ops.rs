//! Group selection and article navigation commands

use super::NntpSession;
use crate::commands::{self, ArticleRef, GroupResp, StatResp};
use crate::error::Result;
use crate::response::codes;
use tracing::debug;

impl NntpSession {
    /// Select a newsgroup (RFC 3977 §6.1.1)
    ///
    /// Returns [`GroupResp`] with the article count and range; the group
    /// name is lowercased for consistency.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`crate::NntpError::Temporary`] - no such newsgroup (411)
    /// - [`crate::NntpError::Reply`] - the server answered something other than 211
    pub async fn group(&mut self, newsgroup: &str) -> Result<GroupResp> {
        debug!("Selecting newsgroup: {}", newsgroup);

        let response = self.exchange(&commands::group(newsgroup)).await?;
        let response = Self::expect(response, codes::GROUP_SELECTED)?;
        let resp = commands::parse_group_response(&response)?;
        self.current_group = Some(resp.name.clone());

        debug!(
            "Group {} selected: {} articles ({}-{})",
            resp.name, resp.count, resp.first, resp.last
        );
        Ok(resp)
    }

    /// List article numbers in a newsgroup (RFC 3977 §6.1.2)
    ///
    /// LISTGROUP also selects the group, and is the one command whose 211
    /// reply carries a multi-line payload. Optionally accepts a range
    /// specification such as `"100-200"`.
    pub async fn listgroup(&mut self, newsgroup: &str, range: Option<&str>) -> Result<Vec<u64>> {
        debug!("Listing articles in group: {}", newsgroup);

        let response = self
            .exchange_long(&commands::listgroup(newsgroup, range), &[codes::GROUP_SELECTED])
            .await?;
        let response = Self::expect(response, codes::GROUP_SELECTED)?;
        self.current_group = Some(newsgroup.to_lowercase());

        let mut articles = Vec::with_capacity(response.lines.len());
        for line in &response.lines {
            if let Ok(number) = line.trim().parse::<u64>() {
                articles.push(number);
            }
        }
        Ok(articles)
    }

    /// Article status without content (RFC 3977 §6.2.4)
    pub async fn stat(&mut self, article: &ArticleRef) -> Result<StatResp> {
        let response = self.exchange(&commands::stat(article)).await?;
        let response = Self::expect(response, codes::ARTICLE_STAT)?;
        commands::parse_stat_response(&response)
    }

    /// Move to the next article in the current group (RFC 3977 §6.1.4)
    pub async fn next(&mut self) -> Result<StatResp> {
        let response = self.exchange(commands::next()).await?;
        let response = Self::expect(response, codes::ARTICLE_STAT)?;
        commands::parse_stat_response(&response)
    }

    /// Move to the previous article in the current group (RFC 3977 §6.1.3)
    pub async fn last(&mut self) -> Result<StatResp> {
        let response = self.exchange(commands::last()).await?;
        let response = Self::expect(response, codes::ARTICLE_STAT)?;
        commands::parse_stat_response(&response)
    }
}
