//! String helpers: trimming by character set, affix removal, substring
//! search, escaping, and filename sanitizing.
//!
//! Everything here is a pure function over `&str`.

mod filename;
mod search;
mod trim;

pub use filename::{filename_safe, filename_safe_with, FilenameOptions};
pub use search::{contains_any, count_chars, count_occurrences, indices_of, ranges_of};
pub use trim::{remove_prefix, remove_suffix, slash_escape, trim_chars, trim_suffix_chars};
