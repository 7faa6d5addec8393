#![doc = include_str!("../README.md")]

mod capabilities;
mod client;
/// NNTP command builders and response parsers
pub mod commands;
mod config;
/// NNTP date stamp parsing and formatting
pub mod datetime;
mod error;
/// Overview format negotiation and record parsing
pub mod overview;
mod response;
mod transport;

pub use capabilities::Capabilities;
pub use client::{ArticleResp, BodyResp, HeadResp, HeaderDecoder, NntpSession};
pub use commands::{
    ActiveGroup, ArticleRange, ArticleRef, GroupResp, HdrEntry, NewsgroupTitle, StatResp,
};
pub use config::{DEFAULT_PORT, DEFAULT_TLS_PORT, SessionConfig, TlsMode, TrustConfig};
pub use error::{DataError, NntpError, ProtocolViolation, Result};
pub use overview::{DEFAULT_OVERVIEW_FORMAT, OverviewEntry, OverviewFormat};
pub use response::{LONG_RESPONSE_CODES, NntpResponse, codes, is_long_response};
