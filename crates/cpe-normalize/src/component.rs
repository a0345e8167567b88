//! CPE 2.3 component decoding and catalog-field cleanup.
//!
//! Well-formed CPE names backslash-escape punctuation and use `_` where a
//! display name would have a space. Both conventions have to be reversed
//! before a component is comparable to anything a human typed.

/// Punctuation the CPE 2.3 naming specification escapes with a backslash.
const ESCAPED_PUNCTUATION: &str = "!@#$%^&*()-+={}[]|\\:;\"'<>,.?/~`";

/// Decode a single CPE 2.3 URI component into plain text.
///
/// Reverses the backslash-escape scheme for [`ESCAPED_PUNCTUATION`], then
/// replaces underscores with spaces and trims. A bare `*` or blank component
/// is the CPE "any" wildcard and decodes to the empty string.
///
/// Decoding never fails: a backslash that does not introduce a known escape
/// is kept as-is, so degenerate input degrades to the raw text with
/// underscores converted to spaces.
pub fn decode_component(raw: &str) -> String {
    if raw.is_empty() || raw == "*" {
        return String::new();
    }

    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && ESCAPED_PUNCTUATION.contains(next)
        {
            decoded.push(next);
            chars.next();
        } else {
            decoded.push(c);
        }
    }

    clean_catalog_field(&decoded)
}

/// Replace underscores with spaces and trim.
///
/// Catalog fields keep the underscore word-separator convention even after
/// escape decoding; this is the only cleanup scoring applies to them.
pub fn clean_catalog_field(raw: &str) -> String {
    raw.replace('_', " ").trim().to_string()
}
