pub mod dialect;
pub mod error;
pub mod loader;

pub use dialect::CatalogDialect;
pub use error::CatalogError;
pub use loader::{LoadedCatalog, load_catalog, load_catalog_file, read_catalog_bytes};
