//! File name utilities
//!
//! Utilities for turning user-supplied file names into names that are
//! safe to store on disk.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.\-]").expect("valid file name pattern");
}

/// Make a user-supplied file name safe for storage
///
/// Non-ASCII characters are dropped, path separators and runs of
/// whitespace become a single `_`, anything outside `[A-Za-z0-9_.-]` is
/// removed and leading/trailing `.` and `_` are trimmed.
///
/// # Returns
/// The sanitized name, or `None` if nothing usable is left
pub fn secure_filename(filename: &str) -> Option<String> {
    let ascii: String = filename
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_CHARS.replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
