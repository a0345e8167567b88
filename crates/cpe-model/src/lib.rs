pub mod entry;
pub mod feed;
pub mod inventory;
pub mod matching;
pub mod uri;

pub use entry::CpeEntry;
pub use feed::{EXPLOIT_LIKELY_SEVERITY, VulnerabilityFeed, VulnerabilityRecord};
pub use inventory::{InstalledProgram, SoftwareInventory};
pub use matching::MatchCandidate;
pub use uri::{MIN_URI_FIELDS, UriFields, decode_uri_fields, vendor_product_keyword};
