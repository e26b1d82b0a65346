//! Trimming by character set and affix removal.

/// Strips every leading and trailing character contained in `set`.
///
/// # Example
///
/// ```
/// use geomext::text::trim_chars;
///
/// assert_eq!(trim_chars("--name__", &['-', '_']), "name");
/// ```
pub fn trim_chars<'a>(s: &'a str, set: &[char]) -> &'a str {
    s.trim_matches(|c| set.contains(&c))
}

/// Strips trailing characters contained in `set`.
pub fn trim_suffix_chars<'a>(s: &'a str, set: &[char]) -> &'a str {
    s.trim_end_matches(|c| set.contains(&c))
}

/// Removes `prefix` once if present, otherwise returns `s` unchanged.
pub fn remove_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

/// Removes `suffix` once if present, otherwise returns `s` unchanged.
pub fn remove_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

/// Prefixes every occurrence of a character in `to_escape` with a backslash.
///
/// A backslash is only escaped when it is itself listed in `to_escape`.
pub fn slash_escape(s: &str, to_escape: &[char]) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if to_escape.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
