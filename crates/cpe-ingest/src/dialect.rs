//! Catalog serialization dialects.
//!
//! A catalog blob arrives in one of three shapes: a federated dictionary
//! export (nested result object wrapping CPE 2.3 URI records), a flat JSON
//! array of canonical entries, or newline-delimited JSON with one entry per
//! line. Detection is an ordered list of pure parse attempts: the first
//! structural success wins, and a success stands even when it yields zero
//! usable rows.

use std::fmt;

use cpe_model::{CpeEntry, uri};
use serde::Deserialize;

/// Which serialization dialect a payload matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogDialect {
    /// Nested result object carrying URI records with localized titles.
    Federated,
    /// Flat JSON array of canonical entries.
    FlatArray,
    /// One canonical entry per line; bad lines are skipped, never fatal.
    NewlineDelimited,
}

impl CatalogDialect {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogDialect::Federated => "federated",
            CatalogDialect::FlatArray => "flat-array",
            CatalogDialect::NewlineDelimited => "newline-delimited",
        }
    }
}

impl fmt::Display for CatalogDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top level of a federated dictionary export.
#[derive(Debug, Deserialize)]
struct FederatedDocument {
    result: Option<FederatedResult>,
}

#[derive(Debug, Deserialize)]
struct FederatedResult {
    cpes: Option<Vec<FederatedRecord>>,
}

/// One record of a federated export, pre-conversion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FederatedRecord {
    #[serde(default)]
    cpe23_uri: Option<String>,
    #[serde(default)]
    deprecated: bool,
    #[serde(default)]
    titles: Vec<LocalizedTitle>,
}

#[derive(Debug, Deserialize)]
struct LocalizedTitle {
    #[serde(default)]
    title: Option<String>,
}

/// Structural check for the federated dialect.
///
/// Success requires the nested result object *and* its record list; a flat
/// array or a bare object fails here and falls through to the next dialect.
pub(crate) fn try_parse_federated(payload: &[u8]) -> Option<Vec<FederatedRecord>> {
    let document: FederatedDocument = serde_json::from_slice(payload).ok()?;
    document.result?.cpes
}

/// Structural check for the flat-array dialect.
pub(crate) fn try_parse_flat_array(payload: &[u8]) -> Option<Vec<CpeEntry>> {
    serde_json::from_slice(payload).ok()
}

/// Parse newline-delimited entries. Never fails wholesale: lines that do not
/// parse are counted and skipped. Undecodable bytes degrade to replacement
/// characters rather than aborting the load.
pub(crate) fn parse_newline_delimited(payload: &[u8]) -> (Vec<CpeEntry>, usize) {
    let text = String::from_utf8_lossy(payload);
    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<CpeEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(_) => skipped += 1,
        }
    }
    (entries, skipped)
}

/// Outcome of converting federated records into canonical entries.
pub(crate) struct FederatedConversion {
    pub entries: Vec<CpeEntry>,
    /// Records flagged deprecated, skipped by policy.
    pub deprecated: usize,
    /// Records without a usable CPE 2.3 URI, dropped.
    pub malformed: usize,
}

/// Convert federated records, skipping deprecated ones and dropping records
/// whose URI cannot carry vendor/product/version fields.
pub(crate) fn convert_federated(records: Vec<FederatedRecord>) -> FederatedConversion {
    let mut conversion = FederatedConversion {
        entries: Vec::with_capacity(records.len()),
        deprecated: 0,
        malformed: 0,
    };

    for record in records {
        if record.deprecated {
            conversion.deprecated += 1;
            continue;
        }
        let Some(cpe_name) = record.cpe23_uri else {
            conversion.malformed += 1;
            continue;
        };
        let Some(fields) = uri::decode_uri_fields(&cpe_name) else {
            conversion.malformed += 1;
            continue;
        };

        let title = record
            .titles
            .into_iter()
            .next()
            .and_then(|localized| localized.title)
            .unwrap_or_else(|| {
                format!("{} {}", fields.vendor, fields.product).trim().to_string()
            });

        conversion.entries.push(CpeEntry {
            cpe_name,
            title,
            vendor: fields.vendor,
            product: fields.product,
            version: fields.version,
            ..CpeEntry::default()
        });
    }

    conversion
}
