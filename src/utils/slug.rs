// src/utils/slug.rs

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is a valid regex"));

/// Derives a URL-safe identifier from a display name.
///
/// Non-ASCII text is transliterated first (`é` -> `e`), then the result is
/// lowercased and every run of characters outside `[a-z0-9]` collapses into a
/// single hyphen. Leading and trailing hyphens are dropped, so a name made only
/// of punctuation yields an empty string.
pub fn slugify(name: &str) -> String {
    let lowered = deunicode(name).to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
