//! Multi-measure scoring of a query against one catalog entry.

use cpe_model::CpeEntry;
use cpe_normalize::clean_catalog_field;

use crate::similarity::{partial_ratio, ratio, token_set_ratio, token_sort_ratio};

/// The best measure for one entry: its value and the measure's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryScore {
    /// Best measure value, 0-100.
    pub value: u8,
    /// Name of the winning measure.
    pub strategy: &'static str,
}

/// Score one catalog entry against a query.
///
/// Twelve measures run in a fixed order: whole-string ratios of the cleaned
/// query against title/product/vendor, the same for the unmodified query,
/// then partial, token-sort, and token-set ratios of the cleaned query
/// against title and product. The result is the maximum-valued measure;
/// ties resolve to the measure evaluated first, so the outcome is
/// deterministic for equal values.
///
/// Comparison is case-insensitive, and catalog fields get the underscore
/// cleanup before comparison. A measure with a blank input on either side
/// scores 0, so a query cleaned down to nothing never pairs with a blank
/// catalog field as a perfect match.
pub fn score_entry(query: &str, cleaned_query: &str, entry: &CpeEntry) -> EntryScore {
    let raw = query.to_lowercase();
    let cleaned = cleaned_query.to_lowercase();
    let title = clean_catalog_field(&entry.title).to_lowercase();
    let vendor = clean_catalog_field(&entry.vendor).to_lowercase();
    let product = clean_catalog_field(&entry.product).to_lowercase();

    let measures: [(&'static str, u8); 12] = [
        ("title_exact", apply(ratio, &cleaned, &title)),
        ("product_exact", apply(ratio, &cleaned, &product)),
        ("vendor_exact", apply(ratio, &cleaned, &vendor)),
        ("title_orig", apply(ratio, &raw, &title)),
        ("product_orig", apply(ratio, &raw, &product)),
        ("vendor_orig", apply(ratio, &raw, &vendor)),
        ("title_partial", apply(partial_ratio, &cleaned, &title)),
        ("product_partial", apply(partial_ratio, &cleaned, &product)),
        ("title_token_sort", apply(token_sort_ratio, &cleaned, &title)),
        ("product_token_sort", apply(token_sort_ratio, &cleaned, &product)),
        ("title_token_set", apply(token_set_ratio, &cleaned, &title)),
        ("product_token_set", apply(token_set_ratio, &cleaned, &product)),
    ];

    let mut best = EntryScore {
        value: measures[0].1,
        strategy: measures[0].0,
    };
    for (strategy, value) in measures {
        if value > best.value {
            best = EntryScore { value, strategy };
        }
    }
    best
}

/// Apply one measure, scoring 0 when either side is blank. The similarity
/// conventions rate two empty strings as identical; a blank catalog field
/// or a fully-cleaned-away query must not score as a match that way.
fn apply(measure: fn(&str, &str) -> u8, query_side: &str, field: &str) -> u8 {
    if query_side.is_empty() || field.is_empty() {
        return 0;
    }
    measure(query_side, field)
}
