//! Query-name cleaning for free-text software titles.
//!
//! Installed-program names carry versions, architectures, and installer
//! boilerplate that the CPE dictionary never mentions. Stripping them before
//! scoring is what lets "Firefox 102.0.1 (x64)" land on the `firefox` entry.

use std::sync::LazyLock;

use regex::Regex;

/// Tokens that carry no identity: four-digit years, dotted version numbers,
/// architecture tags, installer noise words, and parenthesized or bracketed
/// asides.
static NOISE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d{4}|\d+\.\d+(\.\d+)?|x64|x86|amd64|i386|win32|win64|minimum|runtime|redistributable|microsoft|update|hotfix|kb\d+|sp\d+|service pack|\(.*?\)|\[.*?\])",
    )
    .expect("Invalid noise-token regex")
});

/// Strip versioning and installer noise from a free-text program name.
///
/// Removes, case-insensitively: four-digit years, `N.N`/`N.N.N` version
/// tokens, architecture tokens (`x64`, `x86`, `amd64`, `i386`, `win32`,
/// `win64`), common installer words (`minimum`, `runtime`, `redistributable`,
/// `microsoft`, `update`, `hotfix`, `kb<digits>`, `sp<digits>`,
/// `service pack`), and parenthesized/bracketed asides. Collapses repeated
/// whitespace and trims.
pub fn clean_query_name(raw: &str) -> String {
    let stripped = NOISE_TOKEN_REGEX.replace_all(raw, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
