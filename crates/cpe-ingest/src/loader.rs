//! Catalog loading: dialect resolution, invariant filtering, diagnostics.

use std::fs;
use std::path::Path;

use cpe_model::CpeEntry;
use tracing::{info, warn};

use crate::dialect::{self, CatalogDialect};
use crate::error::CatalogError;

/// UTF-8 byte-order mark; some dictionary exports carry one.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// An ingested catalog: canonical entries plus human-readable warnings about
/// anything skipped or dropped along the way.
///
/// The entry set is built once and read-only thereafter; matching never
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub entries: Vec<CpeEntry>,
    pub warnings: Vec<String>,
}

impl LoadedCatalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a catalog payload, trying each dialect in order.
///
/// Never fails: a payload no dialect recognizes yields an empty catalog plus
/// a warning, and every skipped or dropped record is accounted for in
/// [`LoadedCatalog::warnings`].
pub fn load_catalog(bytes: &[u8]) -> LoadedCatalog {
    let payload = strip_utf8_bom(bytes);
    let mut catalog = LoadedCatalog::default();

    let (dialect, entries) = if let Some(records) = dialect::try_parse_federated(payload) {
        let conversion = dialect::convert_federated(records);
        if conversion.deprecated > 0 {
            warn!(count = conversion.deprecated, "Skipped deprecated records");
            catalog
                .warnings
                .push(format!("skipped {} deprecated records", conversion.deprecated));
        }
        if conversion.malformed > 0 {
            warn!(count = conversion.malformed, "Dropped records with malformed identifiers");
            catalog.warnings.push(format!(
                "dropped {} records with malformed identifiers",
                conversion.malformed
            ));
        }
        (CatalogDialect::Federated, conversion.entries)
    } else if let Some(entries) = dialect::try_parse_flat_array(payload) {
        (CatalogDialect::FlatArray, entries)
    } else {
        let (entries, skipped) = dialect::parse_newline_delimited(payload);
        if skipped > 0 {
            warn!(count = skipped, "Skipped unparsable lines");
            catalog.warnings.push(format!("skipped {skipped} unparsable lines"));
        }
        if entries.is_empty() && skipped == 0 {
            catalog
                .warnings
                .push("no entries recognized in catalog payload".to_string());
        }
        (CatalogDialect::NewlineDelimited, entries)
    };

    let before = entries.len();
    catalog.entries = entries.into_iter().filter(CpeEntry::is_usable).collect();
    let dropped = before - catalog.entries.len();
    if dropped > 0 {
        warn!(count = dropped, "Dropped entries with blank identifier or product");
        catalog.warnings.push(format!(
            "dropped {dropped} entries with blank identifier or product"
        ));
    }

    info!(
        dialect = %dialect,
        entries = catalog.entries.len(),
        "Loaded CPE catalog"
    );
    catalog
}

/// Read a catalog file and parse it.
///
/// A missing or unreadable file degrades to an empty catalog plus a warning;
/// matching then reports "no match" for every query instead of failing the
/// host.
pub fn load_catalog_file(path: impl AsRef<Path>) -> LoadedCatalog {
    let path = path.as_ref();
    match read_catalog_bytes(path) {
        Ok(bytes) => load_catalog(&bytes),
        Err(error) => {
            warn!(path = %path.display(), %error, "Catalog source unreadable");
            LoadedCatalog {
                entries: Vec::new(),
                warnings: vec![format!("catalog source unreadable: {error}")],
            }
        }
    }
}

/// Read raw catalog bytes, distinguishing a missing file from other I/O
/// failures. [`load_catalog_file`] wraps this and absorbs the error.
pub fn read_catalog_bytes(path: &Path) -> Result<Vec<u8>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read(path).map_err(|source| CatalogError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}
