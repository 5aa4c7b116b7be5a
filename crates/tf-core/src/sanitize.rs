//! Free-text sanitization for DDL fragments
//!
//! Source descriptions arrive markup-laden and classification display names
//! are arbitrary text; everything embedded in a statement goes through one
//! of the helpers here first.

use std::sync::OnceLock;

/// Remove HTML-shaped markup from a description.
///
/// Matches the simplest flat tag shape `<...>` (non-greedy, no nesting).
/// An absent description normalizes to the empty string.
pub fn strip_markup(text: Option<&str>) -> String {
    static TAG_PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    let tag_pattern =
        TAG_PATTERN.get_or_init(|| regex::Regex::new(r"<[^>]+>").expect("valid regex literal"));

    match text {
        Some(t) => tag_pattern.replace_all(t, "").into_owned(),
        None => String::new(),
    }
}

/// Escape single quotes so text can sit inside a single-quoted SQL literal
/// without breaking the literal boundary.
pub fn escape_quotes(text: &str) -> String {
    text.replace('\'', "\\'")
}

/// Reduce text to a bare tag token: drop characters that are neither word
/// characters nor whitespace, then collapse whitespace runs into a single
/// underscore.
///
/// Legacy variant kept for the column-level classification tag path, which
/// predates the quoted-literal treatment used at container level.
pub fn tag_token(text: &str) -> String {
    static NON_WORD: OnceLock<regex::Regex> = OnceLock::new();
    static WHITESPACE: OnceLock<regex::Regex> = OnceLock::new();
    let non_word =
        NON_WORD.get_or_init(|| regex::Regex::new(r"[^\w\s]").expect("valid regex literal"));
    let whitespace =
        WHITESPACE.get_or_init(|| regex::Regex::new(r"\s+").expect("valid regex literal"));

    let stripped = non_word.replace_all(text, "");
    whitespace.replace_all(&stripped, "_").into_owned()
}

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod tests;
