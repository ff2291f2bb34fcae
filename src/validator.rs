use once_cell::sync::Lazy;
use regex::Regex;

use crate::logging;

/// Shape check for target URLs, anchored at both ends so truncated or
/// embedded URLs are rejected: scheme, optional `www.`, a host from the
/// permitted character class, a dot-separated top-level label of 1-6
/// alphanumerics, and an optional path/query/fragment tail.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}(?:[-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .unwrap()
});

/// Check whether a candidate string is a syntactically acceptable target URL.
pub fn is_valid(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}

/// Filter a candidate list down to acceptable URLs, preserving order.
///
/// Invalid entries are skipped with a warning; they never fail the run on
/// their own.
pub fn filter_targets(candidates: Vec<String>) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|candidate| {
            if is_valid(candidate) {
                true
            } else {
                logging::log_warning(&format!("Skipping invalid URL: {candidate}"));
                eprintln!("Warning: skipping invalid URL - {candidate}");
                false
            }
        })
        .collect()
}
