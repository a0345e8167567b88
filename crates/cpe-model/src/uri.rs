//! CPE 2.3 URI field handling.
//!
//! A CPE 2.3 URI is colon-delimited:
//! `cpe:2.3:part:vendor:product:version:update:edition:...`. Only the
//! vendor, product, and version fields matter here; the rest ride along
//! inside the identifier string.

use cpe_normalize::decode_component;

/// Minimum colon-separated field count for a usable CPE 2.3 URI. Anything
/// shorter cannot carry vendor, product, and version.
pub const MIN_URI_FIELDS: usize = 6;

/// The scoring-relevant fields decoded out of a CPE 2.3 URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriFields {
    pub vendor: String,
    pub product: String,
    pub version: Option<String>,
}

/// Split a CPE 2.3 URI and decode its vendor, product, and version fields.
///
/// Returns `None` when the URI has fewer than [`MIN_URI_FIELDS`]
/// colon-separated fields; such records are malformed and get dropped by
/// ingestion rather than guessed at.
pub fn decode_uri_fields(uri: &str) -> Option<UriFields> {
    let parts: Vec<&str> = uri.split(':').collect();
    if parts.len() < MIN_URI_FIELDS {
        return None;
    }

    let version = Some(decode_component(parts[5])).filter(|v| !v.is_empty());
    Some(UriFields {
        vendor: decode_component(parts[3]),
        product: decode_component(parts[4]),
        version,
    })
}

/// Derive the vulnerability-feed search term for a matched identifier.
///
/// Prefers `"{vendor} {product}"`, falls back to the product alone when the
/// vendor decodes to the wildcard, and yields `None` when no product can be
/// extracted; callers then fall back to the cleaned query name.
pub fn vendor_product_keyword(cpe_name: &str) -> Option<String> {
    let fields = decode_uri_fields(cpe_name)?;
    if fields.product.is_empty() {
        return None;
    }
    if fields.vendor.is_empty() {
        return Some(fields.product);
    }
    Some(format!("{} {}", fields.vendor, fields.product))
}
