//! NNTP authentication support (AUTHINFO USER/PASS, RFC 4643)

use super::NntpSession;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::codes;
use tracing::debug;

impl NntpSession {
    /// Authenticate with AUTHINFO USER/PASS
    ///
    /// Sends `AUTHINFO USER`; a 281 reply completes authentication without
    /// a password, a 381 reply requests one. After success the capability
    /// cache is invalidated and reloaded, and a MODE READER switch deferred
    /// with 480 at connect is retried.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_client::{NntpSession, SessionConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SessionConfig::tls("news.example.com");
    /// let mut session = NntpSession::connect(config).await?;
    /// session.login("alice", Some("s3cret")).await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::AlreadyLoggedIn`] - the session is already authenticated
    /// - [`NntpError::Reply`] - the server asked for a password but none was supplied
    /// - [`NntpError::Permanent`] - the credentials were rejected
    /// - [`NntpError::Timeout`] - the server did not respond in time
    pub async fn login(&mut self, username: &str, password: Option<&str>) -> Result<()> {
        if self.authenticated {
            return Err(NntpError::AlreadyLoggedIn);
        }

        debug!("Authenticating as {}", username);

        let response = self.exchange(&commands::authinfo_user(username)).await?;
        match response.code {
            codes::AUTH_ACCEPTED => {}
            codes::AUTH_CONTINUE => {
                let Some(password) = password else {
                    // The server wants a password we do not have
                    return Err(NntpError::Reply {
                        line: response.raw(),
                    });
                };

                let response = self.exchange(&commands::authinfo_pass(password)).await?;
                if response.code != codes::AUTH_ACCEPTED {
                    return Err(NntpError::Permanent {
                        code: response.code,
                        message: response.message,
                    });
                }
            }
            _ => return Err(Self::status_error(response)),
        }

        self.authenticated = true;
        self.capabilities = None;
        self.reload_capabilities().await?;

        if self.readermode_after_auth {
            self.readermode_after_auth = false;
            let has_reader = self
                .capabilities
                .as_ref()
                .is_some_and(|caps| caps.has("READER"));
            if !has_reader {
                self.mode_reader().await?;
            }
        }

        debug!("Authentication successful");
        Ok(())
    }
}
