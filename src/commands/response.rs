//! Core NNTP response parsing utilities

use crate::error::{NntpError, ProtocolViolation, Result};
use crate::response::NntpResponse;

fn bad_status(line: &str) -> NntpError {
    NntpError::Protocol(ProtocolViolation::BadStatus(
        line.chars().take(100).collect(),
    ))
}

/// Parse NNTP response line into code and message
///
/// The first three bytes must be ASCII digits and the fourth, if present,
/// must not be a digit ("99999" is a malformed code, not a longer number).
pub fn parse_response_line(line: &str) -> Result<(u16, String)> {
    // Strip UTF-8 BOM if present (some broken servers/proxies add it)
    let line = line.trim_start_matches('\u{FEFF}');

    let bytes = line.as_bytes();
    if bytes.len() < 3
        || !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[2].is_ascii_digit()
    {
        return Err(bad_status(line));
    }

    if bytes.len() > 3 && bytes[3].is_ascii_digit() {
        return Err(bad_status(line));
    }

    // Safe to slice since we verified ASCII
    let code = line[0..3].parse::<u16>().map_err(|_| bad_status(line))?;

    // Status codes live in 1xx-5xx; anything else is not a reply
    if !(100..=599).contains(&code) {
        return Err(bad_status(line));
    }

    // Extract message: if char 3 is space, start at 4; otherwise start at 3
    let message = if line.len() > 3 {
        if bytes[3] == b' ' {
            // Normal case: "200 message"
            line[4..].to_string()
        } else {
            // Missing space case: "200message" - start at position 3
            line[3..].to_string()
        }
    } else {
        String::new()
    };

    Ok((code, message))
}

/// Parse single-line NNTP response
pub fn parse_single_response(line: &str) -> Result<NntpResponse> {
    let (code, message) = parse_response_line(line)?;

    Ok(NntpResponse {
        code,
        message,
        lines: vec![],
    })
}
