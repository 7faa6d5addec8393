//! Overview format negotiation and record parsing (RFC 3977 Section 8.3/8.4)
//!
//! `LIST OVERVIEW.FMT` describes the tab-separated fields of OVER/XOVER
//! records. The first seven fields are fixed by the RFC; servers may append
//! extension headers whose record values echo the header name. The parsed
//! descriptor is cached per session and survives STARTTLS and login, since
//! the wire shape of overview records does not change with either.

use crate::error::{DataError, NntpError, Result};
use std::collections::HashMap;

/// The seven mandatory overview fields, normalized (lowercase, metadata
/// fields colon-prefixed), in record order.
pub const DEFAULT_OVERVIEW_FORMAT: [&str; 7] = [
    "subject",
    "from",
    "date",
    "message-id",
    "references",
    ":bytes",
    ":lines",
];

fn invalid(reason: impl Into<String>) -> NntpError {
    NntpError::Data(DataError::OverviewFmtInvalid(reason.into()))
}

/// An ordered overview field descriptor, negotiated via `LIST OVERVIEW.FMT`
/// or synthesized from the RFC defaults.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewFormat {
    /// Normalized field names; a leading `:` marks a server-synthesized
    /// metadatum, its absence a header
    fields: Vec<String>,
}

impl OverviewFormat {
    /// The canonical seven-field descriptor.
    pub fn default_format() -> Self {
        Self {
            fields: DEFAULT_OVERVIEW_FORMAT
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Parse and validate a `LIST OVERVIEW.FMT` reply body.
    ///
    /// Each line is normalized: trailing whitespace stripped, the name cut
    /// at the first `:` (metadata names keep their leading `:` and cut at
    /// the *next* one, so `:bytes` survives while `Xref:full` becomes
    /// `xref`), lowercased, and the colon-less aliases `bytes`/`lines`
    /// mapped to their metadata spellings. The result must open with the
    /// seven canonical fields, and anything after them must be a header.
    pub fn parse(lines: &[String]) -> Result<Self> {
        let mut fields = Vec::with_capacity(lines.len());

        for line in lines {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let name = if let Some(meta) = line.strip_prefix(':') {
                let end = meta.find(':').unwrap_or(meta.len());
                format!(":{}", &meta[..end])
            } else {
                let end = line.find(':').unwrap_or(line.len());
                line[..end].to_string()
            };

            let name = name.to_lowercase();
            let name = match name.as_str() {
                "bytes" => ":bytes".to_string(),
                "lines" => ":lines".to_string(),
                _ => name,
            };

            fields.push(name);
        }

        if fields.len() < DEFAULT_OVERVIEW_FORMAT.len() {
            return Err(invalid(format!(
                "{} fields, expected at least {}",
                fields.len(),
                DEFAULT_OVERVIEW_FORMAT.len()
            )));
        }

        for (i, expected) in DEFAULT_OVERVIEW_FORMAT.iter().enumerate() {
            if fields[i] != *expected {
                return Err(invalid(format!(
                    "field {} is {:?}, expected {:?}",
                    i, fields[i], expected
                )));
            }
        }

        for field in &fields[DEFAULT_OVERVIEW_FORMAT.len()..] {
            if field.starts_with(':') {
                return Err(invalid(format!(
                    "extension field {field:?} must be a header"
                )));
            }
        }

        Ok(Self { fields })
    }

    /// The normalized field names, in record order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether the field at `index` is a server-synthesized metadatum.
    pub fn is_metadata(&self, index: usize) -> bool {
        self.fields
            .get(index)
            .is_some_and(|f| f.starts_with(':'))
    }
}

impl Default for OverviewFormat {
    fn default() -> Self {
        Self::default_format()
    }
}

/// A parsed OVER/XOVER record
#[derive(Debug, Clone)]
pub struct OverviewEntry {
    /// Article number within the selected newsgroup
    pub article_number: u64,
    /// Field name (normalized, per the descriptor) to raw value
    pub fields: HashMap<String, String>,
}

/// Parse one overview record against a descriptor.
///
/// Fields map positionally onto the descriptor; extras past its length are
/// discarded and short records simply omit the trailing fields. Extension
/// header fields (index 7 and up) must carry their `Name: ` prefix, which is
/// stripped; an empty value means the article lacks that header.
pub fn parse_overview_line(format: &OverviewFormat, line: &str) -> Result<OverviewEntry> {
    let mut parts = line.split('\t');

    // split always yields at least one element
    let number_field = parts.next().unwrap_or("");
    let article_number: u64 = number_field
        .trim()
        .parse()
        .map_err(|_| NntpError::Data(DataError::BadArticleNumber(line.to_string())))?;

    let names = format.fields();
    let mut fields = HashMap::with_capacity(names.len());

    for (index, value) in parts.enumerate() {
        let Some(name) = names.get(index) else {
            // Extra fields beyond the descriptor are discarded
            break;
        };

        let value = if index >= DEFAULT_OVERVIEW_FORMAT.len()
            && !format.is_metadata(index)
            && !value.is_empty()
        {
            strip_header_prefix(name, value).ok_or_else(|| {
                NntpError::Data(DataError::OverMissingHeaderName(format!(
                    "{name}: {value:?}"
                )))
            })?
        } else {
            value
        };

        fields.insert(name.clone(), value.to_string());
    }

    Ok(OverviewEntry {
        article_number,
        fields,
    })
}

/// Strip a case-insensitive `name: ` prefix from an extension field value.
fn strip_header_prefix<'a>(name: &str, value: &'a str) -> Option<&'a str> {
    let (header, rest) = value.split_at_checked(name.len())?;
    if !header.eq_ignore_ascii_case(name) {
        return None;
    }
    rest.strip_prefix(": ")
}
