//! Substring and character-set search.
//!
//! Offsets are byte offsets into the UTF-8 string, so they can be used
//! directly for slicing.

use std::ops::Range;

/// Counts non-overlapping occurrences of `needle`. An empty needle counts zero.
pub fn count_occurrences(s: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    s.matches(needle).count()
}

/// Counts characters of `s` that are contained in `set`.
pub fn count_chars(s: &str, set: &[char]) -> usize {
    s.chars().filter(|c| set.contains(c)).count()
}

/// Returns `true` if `s` contains any character of `chars`.
pub fn contains_any(s: &str, chars: &[char]) -> bool {
    s.contains(chars)
}

/// Start offsets of every non-overlapping occurrence of `needle`, scanning
/// left to right. An empty needle matches nowhere.
///
/// # Example
///
/// ```
/// use geomext::text::indices_of;
///
/// assert_eq!(indices_of("abcabc", "bc"), vec![1, 4]);
/// assert_eq!(indices_of("aaaa", "aa"), vec![0, 2]);
/// ```
pub fn indices_of(s: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    s.match_indices(needle).map(|(i, _)| i).collect()
}

/// Byte ranges of every non-overlapping occurrence of `needle`.
pub fn ranges_of(s: &str, needle: &str) -> Vec<Range<usize>> {
    indices_of(s, needle)
        .into_iter()
        .map(|start| start..start + needle.len())
        .collect()
}
