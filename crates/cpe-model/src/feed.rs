//! Interfaces to the vulnerability-feed side of the pipeline.
//!
//! The matcher itself never talks to a feed. A caller takes the matched
//! identifier (or the cleaned query name as a fallback), asks a
//! [`VulnerabilityFeed`] for raw JSON, and hands the payload to an external
//! parser that produces [`VulnerabilityRecord`]s.

use serde::{Deserialize, Serialize};

/// Severity at or above which a vulnerability is flagged as likely having a
/// public exploit.
pub const EXPLOIT_LIKELY_SEVERITY: f64 = 7.0;

/// A vulnerability extracted from a feed payload by an external parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    /// Feed-assigned identifier, e.g. a CVE id.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Numeric base severity score.
    pub severity: f64,
    /// Derived flag: `severity >= EXPLOIT_LIKELY_SEVERITY`.
    pub likely_exploited: bool,
}

impl VulnerabilityRecord {
    /// Build a record, deriving the exploit-likelihood flag from severity.
    pub fn new(id: &str, description: &str, severity: f64) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            severity,
            likely_exploited: severity >= EXPLOIT_LIKELY_SEVERITY,
        }
    }
}

/// Client for a vulnerability feed keyed by free-text search term.
///
/// Transport, authentication, rate limiting, and caching are all the
/// implementation's concern. Any failure is reported as `None`; the pipeline
/// treats a missing payload the same as an empty one.
pub trait VulnerabilityFeed {
    /// Fetch the raw JSON payload for a search term, or `None` on failure.
    fn search(&self, term: &str) -> Option<String>;
}
