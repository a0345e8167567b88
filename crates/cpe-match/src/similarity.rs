//! Fuzzy string similarity measures.
//!
//! Four measures with the classic fuzzy-matching semantics, all integer
//! 0-100. The whole-string primitive is rapidfuzz's normalized InDel
//! similarity (length-normalized insert/delete edit ratio); the partial,
//! token-sort, and token-set measures are built on top of it, so windowing,
//! token handling, and rounding are all defined here rather than inherited
//! from a library.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

/// Whole-string similarity ratio, 0-100.
///
/// Two empty strings are identical (100); exactly one empty scores 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    scale(indel::normalized_similarity(a.chars(), b.chars()))
}

/// Best [`ratio`] of the shorter string against every contiguous
/// same-length character window of the longer string.
///
/// Equal-length inputs degrade to a single window, i.e. a plain ratio.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    let mut best = 0u8;
    for window in longer.windows(shorter.len()) {
        let similarity =
            indel::normalized_similarity(shorter.iter().copied(), window.iter().copied());
        best = best.max(scale(similarity));
        if best == 100 {
            break;
        }
    }
    best
}

/// Tokenize on whitespace, sort tokens, rejoin with single spaces, then
/// whole-string ratio. Makes word order irrelevant.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Duplicate-insensitive, order-independent token comparison.
///
/// Builds the sorted token intersection and the two intersection-plus-
/// difference strings, then takes the best pairwise ratio among them. A
/// query whose tokens are a subset of the candidate's scores 100. Empty
/// inputs follow the [`ratio`] conventions: no tokens on both sides counts
/// as identical, tokens on exactly one side score 0.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 100;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let sect = tokens_a
        .intersection(&tokens_b)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let diff_a = tokens_a
        .difference(&tokens_b)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let diff_b = tokens_b
        .difference(&tokens_a)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let combined_a = join_nonempty(&sect, &diff_a);
    let combined_b = join_nonempty(&sect, &diff_b);

    ratio(&sect, &combined_a)
        .max(ratio(&sect, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_nonempty(left: &str, right: &str) -> String {
    if left.is_empty() {
        right.to_string()
    } else if right.is_empty() {
        left.to_string()
    } else {
        format!("{left} {right}")
    }
}

fn scale(similarity: f64) -> u8 {
    (similarity * 100.0).round() as u8
}
