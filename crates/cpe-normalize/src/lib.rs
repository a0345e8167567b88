pub mod component;
pub mod query;

pub use component::{clean_catalog_field, decode_component};
pub use query::clean_query_name;
