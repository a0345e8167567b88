pub mod score;
pub mod select;
pub mod similarity;

pub use score::{EntryScore, score_entry};
pub use select::{
    MAX_CANDIDATES, MIN_ACCEPT_SCORE, MatchResult, MatchThresholds, Matcher, NEAR_MISS_SCORE,
    find_best_match,
};
pub use similarity::{partial_ratio, ratio, token_set_ratio, token_sort_ratio};
