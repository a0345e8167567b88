//! Canonical catalog entry shape.
//!
//! Every ingestion dialect converges on [`CpeEntry`]; scoring and selection
//! never see anything else. The serde shape doubles as the wire format for
//! the flat and newline-delimited catalog dialects, so every field defaults:
//! a sparse record deserializes with empty fields rather than failing the
//! payload, and required-field enforcement happens in the load-time filter.

use serde::{Deserialize, Deserializer, Serialize};

/// A single entry in the loaded CPE catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpeEntry {
    /// Canonical identifier; a full CPE 2.3 URI for federated sources.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cpe_name: String,
    /// Human-readable display name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Vendor component, already escape-decoded.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vendor: String,
    /// Product component, already escape-decoded.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product: String,
    /// Version, where the source carries one. Never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sw_edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_hw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

impl CpeEntry {
    /// Whether the entry carries the fields matching requires: a non-blank
    /// identifier and a non-blank product. Entries failing this are dropped
    /// during load, never at query time.
    pub fn is_usable(&self) -> bool {
        !self.cpe_name.trim().is_empty() && !self.product.trim().is_empty()
    }
}

/// Sloppy exports write `"title": null` where they mean "absent"; read both
/// as the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_json_fills_defaults() {
        let entry: CpeEntry =
            serde_json::from_str(r#"{"cpeName":"cpe:2.3:a:v:p","product":"p"}"#)
                .expect("sparse entry should deserialize");
        assert_eq!(entry.cpe_name, "cpe:2.3:a:v:p");
        assert_eq!(entry.title, "");
        assert_eq!(entry.version, None);
    }

    #[test]
    fn explicit_null_reads_as_empty() {
        let entry: CpeEntry =
            serde_json::from_str(r#"{"cpeName":"cpe:2.3:a:v:p","title":null,"product":"p"}"#)
                .expect("null title should deserialize");
        assert_eq!(entry.title, "");
    }

    #[test]
    fn camel_case_wire_names() {
        let entry = CpeEntry {
            cpe_name: "cpe:2.3:a:v:p".to_string(),
            product: "p".to_string(),
            sw_edition: Some("pro".to_string()),
            target_sw: Some("windows".to_string()),
            ..CpeEntry::default()
        };
        let json = serde_json::to_string(&entry).expect("serialize entry");
        assert!(json.contains("\"cpeName\""));
        assert!(json.contains("\"swEdition\""));
        assert!(json.contains("\"targetSw\""));
        assert!(!json.contains("\"targetHw\""), "None fields should be omitted");
    }

    #[test]
    fn usability_requires_identifier_and_product() {
        let usable = CpeEntry {
            cpe_name: "cpe:2.3:a:v:p".to_string(),
            product: "p".to_string(),
            ..CpeEntry::default()
        };
        assert!(usable.is_usable());

        let blank_product = CpeEntry {
            cpe_name: "cpe:2.3:a:v:p".to_string(),
            product: "   ".to_string(),
            ..CpeEntry::default()
        };
        assert!(!blank_product.is_usable());

        let blank_name = CpeEntry {
            product: "p".to_string(),
            ..CpeEntry::default()
        };
        assert!(!blank_name.is_usable());
    }
}
