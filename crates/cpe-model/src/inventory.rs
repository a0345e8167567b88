//! Interface to the host-side installed-software enumerator.

use serde::{Deserialize, Serialize};

/// One installed program as reported by a host enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledProgram {
    /// Display name as reported by the host; used verbatim as the match query.
    pub name: String,
    /// Version string as reported; informational only.
    pub version: String,
}

/// Source of installed programs on a host.
///
/// Implementations live outside this workspace (registry readers, package
/// managers, agent inventories). Enumeration can touch the OS, so the seam is
/// fallible.
pub trait SoftwareInventory {
    /// Enumerate the installed programs visible to this source.
    fn installed_programs(&self) -> anyhow::Result<Vec<InstalledProgram>>;
}
