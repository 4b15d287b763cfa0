//! Shell-style filename pattern matching.
//!
//! Rules (fixed on every platform):
//! - `*` matches any run of characters, `?` exactly one, `[...]` / `[!...]` a character class
//! - matching is case-sensitive
//! - `*` and `?` may match a leading dot, as with `fnmatch`
//! - the pattern is matched against the bare filename, never against a path
//! - runs of `*` act as a single `*` (`**.txt` is `*.txt`)

use glob::{MatchOptions, Pattern};
use std::ffi::OsStr;

use crate::errors::RcopyError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled filename pattern.
#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    pattern: Pattern,
}

impl FilePattern {
    /// Compile `raw`; malformed classes such as `[a-` are rejected.
    pub fn new(raw: &str) -> Result<Self, RcopyError> {
        let pattern = Pattern::new(&collapse_stars(raw)).map_err(|e| RcopyError::InvalidPattern {
            pattern: raw.to_string(),
            reason: e.msg.to_string(),
        })?;
        Ok(Self {
            raw: raw.to_string(),
            pattern,
        })
    }

    /// The pattern as given by the user.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a filename. Non-UTF8 names are matched on their lossy form.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        match file_name.to_str() {
            Some(s) => self.pattern.matches_with(s, MATCH_OPTIONS),
            None => self
                .pattern
                .matches_with(&file_name.to_string_lossy(), MATCH_OPTIONS),
        }
    }
}

/// `glob` reads `**` as a recursive path wildcard and rejects it unless it is a whole
/// path component. Names never contain a separator, so any run of `*` is one `*`.
fn collapse_stars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_star = false;
    for c in raw.chars() {
        if c == '*' && prev_star {
            continue;
        }
        prev_star = c == '*';
        out.push(c);
    }
    out
}
