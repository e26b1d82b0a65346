//! Filename sanitizing.

/// Options for [`filename_safe_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilenameOptions {
    /// Maximum length of the result in characters.
    pub max_len: usize,
    /// Replacement for each run of whitespace.
    pub separator: char,
}

impl Default for FilenameOptions {
    fn default() -> Self {
        Self {
            max_len: 255,
            separator: '-',
        }
    }
}

/// Sanitizes `s` for use as a filename with the default options.
///
/// # Example
///
/// ```
/// use geomext::text::filename_safe;
///
/// assert_eq!(filename_safe("  Q3 report: draft/final!  "), "Q3-report-draftfinal");
/// ```
pub fn filename_safe(s: &str) -> String {
    filename_safe_with(s, &FilenameOptions::default())
}

/// Keeps only alphanumeric and whitespace characters, replaces each
/// whitespace run with `opts.separator` (dropping leading and trailing runs),
/// and truncates to `opts.max_len` characters.
pub fn filename_safe_with(s: &str, opts: &FilenameOptions) -> String {
    let kept: String = s
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(kept.len());
    for (i, word) in kept.split_whitespace().enumerate() {
        if i > 0 {
            out.push(opts.separator);
        }
        out.push_str(word);
    }

    match out.char_indices().nth(opts.max_len) {
        Some((cut, _)) => out[..cut].to_string(),
        None => out,
    }
}
