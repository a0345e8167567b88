//! End-to-end loader tests across the three catalog dialects.

use cpe_ingest::{load_catalog, load_catalog_file};
use tempfile::TempDir;

#[test]
fn federated_export_skips_deprecated_records() {
    let payload = br#"{
        "resultsPerPage": 2,
        "result": {
            "cpes": [
                {
                    "cpe23Uri": "cpe:2.3:a:mozilla:firefox:102.0:*:*:*:*:*:*:*",
                    "deprecated": false,
                    "titles": [{"title": "Mozilla Firefox 102", "lang": "en_US"}]
                },
                {
                    "cpe23Uri": "cpe:2.3:a:mozilla:firefox:3.0:*:*:*:*:*:*:*",
                    "deprecated": true,
                    "titles": [{"title": "Mozilla Firefox 3", "lang": "en_US"}]
                }
            ]
        }
    }"#;

    let catalog = load_catalog(payload);
    assert_eq!(catalog.len(), 1, "deprecated record must be skipped");
    assert_eq!(catalog.entries[0].title, "Mozilla Firefox 102");
    assert_eq!(catalog.entries[0].vendor, "mozilla");
    assert_eq!(catalog.entries[0].product, "firefox");
    assert_eq!(catalog.entries[0].version.as_deref(), Some("102.0"));
    assert_eq!(
        catalog.entries[0].cpe_name,
        "cpe:2.3:a:mozilla:firefox:102.0:*:*:*:*:*:*:*"
    );
    assert_eq!(catalog.warnings, vec!["skipped 1 deprecated records".to_string()]);
}

#[test]
fn federated_export_drops_unsplittable_uris() {
    let payload = br#"{"result": {"cpes": [
        {"cpe23Uri": "cpe:2.3:a:vendor:product:1.0:*:*:*:*:*:*:*"},
        {"cpe23Uri": "not-a-cpe"},
        {"deprecated": false}
    ]}}"#;

    let catalog = load_catalog(payload);
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.warnings,
        vec!["dropped 2 records with malformed identifiers".to_string()]
    );
}

#[test]
fn flat_array_falls_through_the_federated_check() {
    let payload = br#"[
        {"cpeName": "cpe:2.3:a:mozilla:firefox:102.0:*", "title": "Mozilla Firefox",
         "vendor": "mozilla", "product": "firefox"},
        {"cpeName": "cpe:2.3:a:adobe:acrobat_reader:dc:*", "title": "Adobe Acrobat Reader DC",
         "vendor": "adobe", "product": "acrobat_reader"}
    ]"#;

    let catalog = load_catalog(payload);
    assert_eq!(catalog.len(), 2, "a flat array is not the federated shape");
    assert_eq!(catalog.entries[0].product, "firefox");
    assert_eq!(catalog.entries[1].vendor, "adobe");
    assert!(catalog.warnings.is_empty());
}

#[test]
fn flat_array_rows_missing_required_fields_are_dropped() {
    let payload = br#"[
        {"cpeName": "cpe:2.3:a:mozilla:firefox:102.0:*", "product": "firefox"},
        {"cpeName": "   ", "product": "ghost"},
        {"cpeName": "cpe:2.3:a:v:p:1:*", "product": ""},
        {"title": "no identifier at all"}
    ]"#;

    let catalog = load_catalog(payload);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.entries.iter().all(|e| e.is_usable()));
    assert_eq!(
        catalog.warnings,
        vec!["dropped 3 entries with blank identifier or product".to_string()]
    );
}

#[test]
fn newline_delimited_skips_broken_lines() {
    let payload = concat!(
        r#"{"cpeName": "cpe:2.3:a:mozilla:firefox:102.0:*", "product": "firefox"}"#,
        "\n",
        r#"{"cpeName": "cpe:2.3:a:broken"#,
        "\n",
    )
    .as_bytes();

    let catalog = load_catalog(payload);
    assert_eq!(catalog.len(), 1, "broken line must not poison the load");
    assert_eq!(catalog.entries[0].product, "firefox");
    assert_eq!(catalog.warnings, vec!["skipped 1 unparsable lines".to_string()]);
}

#[test]
fn newline_delimited_tolerates_crlf_and_blank_lines() {
    let payload = concat!(
        r#"{"cpeName": "cpe:2.3:a:v:alpha:1:*", "product": "alpha"}"#,
        "\r\n",
        "\r\n",
        r#"{"cpeName": "cpe:2.3:a:v:beta:2:*", "product": "beta"}"#,
        "\r\n",
    )
    .as_bytes();

    let catalog = load_catalog(payload);
    assert_eq!(catalog.len(), 2);
    assert!(catalog.warnings.is_empty());
}

#[test]
fn unrecognizable_text_yields_empty_catalog_with_warnings() {
    let catalog = load_catalog(b"this is not a catalog\nnor is this");
    assert!(catalog.is_empty());
    assert_eq!(catalog.warnings, vec!["skipped 2 unparsable lines".to_string()]);
}

#[test]
fn arbitrary_json_object_loads_nothing() {
    // Not federated (no record list), not an array, and as a single line it
    // parses into an entry with no identifier, which the filter drops.
    let catalog = load_catalog(br#"{"foo": 1}"#);
    assert!(catalog.is_empty());
    assert_eq!(
        catalog.warnings,
        vec!["dropped 1 entries with blank identifier or product".to_string()]
    );
}

#[test]
fn loads_catalog_from_file() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"cpeName": "cpe:2.3:a:v:p:1:*", "title": "P", "vendor": "v", "product": "p"}]"#,
    )
    .expect("write catalog");

    let catalog = load_catalog_file(&path);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.warnings.is_empty());
}

#[test]
fn missing_file_degrades_to_empty_catalog() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nope.json");

    let catalog = load_catalog_file(&path);
    assert!(catalog.is_empty());
    assert_eq!(catalog.warnings.len(), 1);
    assert!(
        catalog.warnings[0].starts_with("catalog source unreadable:"),
        "unexpected warning: {}",
        catalog.warnings[0]
    );
}
