//! Query normalization
//!
//! Turns free text into a comparison-safe form used for cache keys and local
//! matching. The normalized form is never shown to the user.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a query for comparison.
///
/// Lowercases, strips diacritics, collapses every run of non-alphanumeric
/// characters into a single space and trims both ends.
///
/// ```
/// use buscaya::normalize::normalize;
///
/// assert_eq!(normalize("  Café--Olé! "), "cafe ole");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    // Lowercase before decomposing: some lowercase mappings emit combining marks.
    let lowered = text.chars().flat_map(char::to_lowercase);

    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}
