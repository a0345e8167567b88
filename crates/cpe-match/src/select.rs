//! Catalog scanning and winner selection.

use cpe_model::{CpeEntry, MatchCandidate};
use cpe_normalize::clean_query_name;
use tracing::debug;

use crate::score::score_entry;

/// Minimum accepted confidence; a winner must score strictly above this.
pub const MIN_ACCEPT_SCORE: u8 = 70;
/// Near-miss bar; debug candidates must score strictly above this.
pub const NEAR_MISS_SCORE: u8 = 60;
/// How many near-miss candidates a debug report keeps.
pub const MAX_CANDIDATES: usize = 5;

/// Score bars for accepting a winner and recording near-misses.
///
/// 70 is the minimum confidence worth acting on; 60 is only a "worth
/// showing as a near-miss" bar for diagnostics and never accepts a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchThresholds {
    /// A winner must score strictly above this.
    pub accept: u8,
    /// Debug candidates must score strictly above this.
    pub near_miss: u8,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            accept: MIN_ACCEPT_SCORE,
            near_miss: NEAR_MISS_SCORE,
        }
    }
}

/// Outcome of scanning a catalog for one query.
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    /// Winning identifier, when some entry cleared the acceptance bar.
    pub cpe_name: Option<String>,
    /// Top near-miss candidates, descending score. Populated in debug mode
    /// only; ties keep catalog order.
    pub candidates: Vec<MatchCandidate>,
}

/// Catalog matcher.
///
/// Holds selection configuration only; the catalog is passed into every
/// call, so one matcher serves any number of catalogs and queries, and a
/// fully-built catalog can be shared read-only across threads.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    thresholds: MatchThresholds,
    debug: bool,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record near-miss candidates for diagnostics.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: MatchThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Scan the catalog in order and pick the best-matching identifier.
    ///
    /// A single stateless pass: each entry is scored, near-misses are
    /// recorded when debugging, and the running winner only changes on a
    /// strict improvement that also clears the acceptance bar, so the
    /// first entry to reach the top score keeps priority over later ties.
    pub fn find_best_match(&self, catalog: &[CpeEntry], query: &str) -> MatchResult {
        if catalog.is_empty() || query.trim().is_empty() {
            return MatchResult::default();
        }

        let cleaned = clean_query_name(query);
        let mut result = MatchResult::default();
        let mut best_score = 0u8;
        let mut best_strategy = "";

        for entry in catalog {
            let score = score_entry(query, &cleaned, entry);
            if self.debug && score.value > self.thresholds.near_miss {
                result.candidates.push(MatchCandidate {
                    entry: entry.clone(),
                    score: score.value,
                    strategy: score.strategy.to_string(),
                });
            }
            if score.value > best_score && score.value > self.thresholds.accept {
                best_score = score.value;
                best_strategy = score.strategy;
                result.cpe_name = Some(entry.cpe_name.clone());
            }
        }

        result.candidates.sort_by(|a, b| b.score.cmp(&a.score));
        result.candidates.truncate(MAX_CANDIDATES);
        if !result.candidates.is_empty() {
            debug!(
                query = %query,
                candidates = %describe_candidates(&result.candidates),
                "Top scoring candidates"
            );
        }

        match &result.cpe_name {
            Some(cpe_name) => debug!(
                query = %query,
                cleaned = %cleaned,
                cpe_name = %cpe_name,
                score = best_score,
                strategy = best_strategy,
                "Matched query to catalog entry"
            ),
            None => debug!(query = %query, cleaned = %cleaned, "No confident catalog match"),
        }

        result
    }
}

/// Scan with a default, non-debug matcher and return just the identifier.
pub fn find_best_match(catalog: &[CpeEntry], query: &str) -> Option<String> {
    Matcher::new().find_best_match(catalog, query).cpe_name
}

/// One log line for the retained candidates, best first.
fn describe_candidates(candidates: &[MatchCandidate]) -> String {
    candidates
        .iter()
        .map(MatchCandidate::describe)
        .collect::<Vec<_>>()
        .join("; ")
}
