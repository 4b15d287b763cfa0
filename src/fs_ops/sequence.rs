//! Collision-avoiding filename sequence.
//!
//! Given a base filename, yields the candidates a collector tries in order:
//! - index 0: the name unchanged ("report.txt")
//! - index k: "(k)" inserted right before the extension ("report(1).txt", "report(2).txt", ...)
//!
//! Notes:
//! - Stem/extension are split with `Path::file_stem`/`Path::extension`, so "archive.tar.gz"
//!   becomes "archive.tar(1).gz", ".env" becomes ".env(1)" and "abc" becomes "abc(1)".
//! - A trailing dot is an empty extension, so "abc." becomes "abc(1)." and not "abc.(1)".
//!   The suffix always goes before the last `.`.
//! - Names are built from `OsStr` pieces; non-UTF8 names keep their exact bytes.
//! - The sequence is pure: it never touches the filesystem.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// One proposed destination filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the sequence; 0 means "no suffix".
    pub index: u64,
    /// The filename to try (no directory component).
    pub name: OsString,
}

/// Lazy sequence of candidate names for one base filename.
///
/// A clone continues from the current position; call [`sequence`] again to
/// start over from index 0.
#[derive(Debug, Clone)]
pub struct FilenameSequence {
    stem: OsString,
    ext: Option<OsString>,
    next: Option<u64>,
    max_index: Option<u64>,
}

/// Unbounded sequence: index 0, 1, 2, ... The caller decides when to stop.
pub fn sequence(name: impl AsRef<OsStr>) -> FilenameSequence {
    let (stem, ext) = split_name(name.as_ref());
    FilenameSequence {
        stem,
        ext,
        next: Some(0),
        max_index: None,
    }
}

/// Bounded sequence: yields indices `0..=max_index` (exactly `max_index + 1` names).
pub fn sequence_bounded(name: impl AsRef<OsStr>, max_index: u64) -> FilenameSequence {
    let mut seq = sequence(name);
    seq.max_index = Some(max_index);
    seq
}

/// The candidate name at `index` for `name`, without building a sequence.
pub fn candidate_name(name: impl AsRef<OsStr>, index: u64) -> OsString {
    let (stem, ext) = split_name(name.as_ref());
    build_name(&stem, ext.as_deref(), index)
}

impl Iterator for FilenameSequence {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let index = self.next?;
        if let Some(max) = self.max_index
            && index > max
        {
            self.next = None;
            return None;
        }
        // Saturate instead of wrapping so the sequence stays strictly increasing.
        self.next = index.checked_add(1);
        Some(Candidate {
            index,
            name: build_name(&self.stem, self.ext.as_deref(), index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.next, self.max_index) {
            (None, _) => (0, Some(0)),
            (Some(next), Some(max)) => {
                let left = max.checked_sub(next).map_or(0, |d| d.saturating_add(1));
                let left = usize::try_from(left).unwrap_or(usize::MAX);
                (left, Some(left))
            }
            (Some(_), None) => (usize::MAX, None),
        }
    }
}

/// Split a filename into (stem, extension). A name without a stem falls back to the whole name.
fn split_name(name: &OsStr) -> (OsString, Option<OsString>) {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| name.to_os_string());
    let ext = path.extension().map(|e| e.to_os_string());
    (stem, ext)
}

fn build_name(stem: &OsStr, ext: Option<&OsStr>, index: u64) -> OsString {
    let mut name = OsString::with_capacity(stem.len() + ext.map_or(0, |e| e.len() + 1) + 8);
    name.push(stem);
    if index > 0 {
        name.push(format!("({index})"));
    }
    if let Some(e) = ext {
        name.push(".");
        name.push(e);
    }
    name
}
