//! Diagnostic types shared between the matcher and its callers.

use serde::{Deserialize, Serialize};

use crate::entry::CpeEntry;

/// A near-miss recorded while scanning the catalog in debug mode.
///
/// Candidates exist purely for diagnostics: they explain why a query did or
/// did not land on an entry. They are never persisted and never feed back
/// into selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The catalog entry that produced the score.
    pub entry: CpeEntry,
    /// Best measure value for this entry, 0-100.
    pub score: u8,
    /// Name of the measure that produced `score`.
    pub strategy: String,
}

impl MatchCandidate {
    /// One-line rendering for diagnostic output.
    pub fn describe(&self) -> String {
        format!(
            "{} ({}) [{}%, {}]",
            self.entry.product, self.entry.vendor, self.score, self.strategy
        )
    }
}
