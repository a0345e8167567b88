//! Error types for catalog ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while obtaining catalog bytes.
///
/// These stay beneath the loader boundary: [`crate::load_catalog_file`]
/// absorbs them into warnings, so a missing catalog degrades to "no match
/// for every query" instead of failing the host process.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file not found.
    #[error("catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the catalog file.
    #[error("failed to read catalog file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
