//! Tree collector: walk a source tree bottom-up and gather matching files into one folder.
//!
//! Walk order (stable across runs):
//! - depth-first, post-order: a directory's subdirectories are processed completely
//!   (ascending by name) before the directory's own files (ascending by name)
//! - symlinks are not followed; non-directory entries are candidates
//!
//! Per matched file the candidate names from [`sequence`] are tried from index 0:
//! an existing destination (or one that appears between the check and the write)
//! just moves on to the next name. Any other failure aborts the run.

use anyhow::{Context, Result, anyhow};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Options;
use crate::errors::RcopyError;
use crate::fs_ops::{TransferResult, sequence, transfer};
use crate::output as out;
use crate::pattern::FilePattern;
use crate::shutdown;

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files copied or moved (or that would be, under dry-run).
    pub transferred: usize,
    /// Files whose name matched the pattern.
    pub matched: usize,
    /// Candidate names skipped because they were already taken.
    pub collisions: usize,
}

/// Collect every file under `source_root` whose name matches `pattern` into
/// `destination_root`, printing one progress line per transfer unless `opts.quiet`.
pub fn collect(
    pattern: &str,
    source_root: &Path,
    destination_root: &Path,
    opts: &Options,
) -> Result<RunSummary> {
    let pattern = FilePattern::new(pattern)?;
    collect_matching(&pattern, source_root, destination_root, opts)
}

/// [`collect`] with an already compiled pattern.
///
/// Once stdout is closed (a reader such as `head` went away) progress lines are
/// dropped and the run carries on, so no file is left half-handled.
pub fn collect_matching(
    pattern: &FilePattern,
    source_root: &Path,
    destination_root: &Path,
    opts: &Options,
) -> Result<RunSummary> {
    let mut printing = !opts.quiet;
    collect_with(pattern, source_root, destination_root, opts, |r| {
        if printing && let Err(e) = out::print_user(&r.progress_line()) {
            printing = false;
            if e.kind() == io::ErrorKind::BrokenPipe {
                debug!("stdout closed; no further progress lines");
            } else {
                warn!(error = %e, "cannot write progress lines; continuing without them");
            }
        }
    })
}

/// Like [`collect`], but hands every transfer to `on_transfer` instead of printing it.
/// `opts.quiet` is not consulted here.
pub fn collect_with<F>(
    pattern: &FilePattern,
    source_root: &Path,
    destination_root: &Path,
    opts: &Options,
    mut on_transfer: F,
) -> Result<RunSummary>
where
    F: FnMut(&TransferResult),
{
    let mut summary = RunSummary::default();
    let nested_destination = nested_destination(source_root, destination_root);
    // Dry-run writes nothing, so names handed out earlier in the run are tracked here.
    let mut planned: HashSet<PathBuf> = HashSet::new();

    debug!(
        pattern = pattern.as_str(),
        source = %source_root.display(),
        destination = %destination_root.display(),
        ?opts,
        "starting collection"
    );

    let walker = WalkDir::new(source_root)
        .follow_links(false)
        .contents_first(true)
        .sort_by(subdirs_first);

    for entry in walker {
        let entry = entry.with_context(|| format!("walk source tree '{}'", source_root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if let Some(skip) = nested_destination.as_deref()
            && entry.path().starts_with(skip)
        {
            continue;
        }
        if !pattern.matches(entry.file_name()) {
            continue;
        }
        if shutdown::is_requested() {
            return Err(RcopyError::Interrupted.into());
        }

        summary.matched += 1;
        let result = place(
            entry.path(),
            entry.file_name(),
            destination_root,
            opts,
            &mut planned,
            &mut summary,
        )?;
        on_transfer(&result);
        summary.transferred += 1;
    }

    info!(
        matched = summary.matched,
        transferred = summary.transferred,
        collisions = summary.collisions,
        dry_run = opts.dry_run,
        "collection finished"
    );
    Ok(summary)
}

/// Try candidate names for one source file until a transfer succeeds.
fn place(
    src: &Path,
    file_name: &OsStr,
    destination_root: &Path,
    opts: &Options,
    planned: &mut HashSet<PathBuf>,
    summary: &mut RunSummary,
) -> Result<TransferResult> {
    for candidate in sequence(file_name) {
        let dest = destination_root.join(&candidate.name);
        if planned.contains(&dest) || destination_exists(&dest) {
            debug!(dest = %dest.display(), index = candidate.index, "name taken");
            summary.collisions += 1;
            continue;
        }

        let result = transfer(src, &dest, opts)?;
        if !result.transferred {
            summary.collisions += 1;
            continue;
        }
        if opts.dry_run {
            planned.insert(dest);
        }
        info!(
            kind = %result.kind,
            src = %result.source.display(),
            dest = %result.destination.display(),
            index = candidate.index,
            dry_run = result.dry_run,
            "transferred"
        );
        return Ok(result);
    }

    Err(anyhow!(
        "no free destination name for '{}' in '{}'",
        src.display(),
        destination_root.display()
    ))
}

/// Existence probe; a failed probe (other than "not found") counts as free so the
/// exclusive transfer decides.
fn destination_exists(dest: &Path) -> bool {
    match fs::symlink_metadata(dest) {
        Ok(_) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            debug!(
                dest = %dest.display(),
                error = %e,
                "existence check failed; treating as free"
            );
            false
        }
    }
}

/// Subdirectories before files, then by name.
fn subdirs_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// If the destination lies inside the source tree, its path as the walk will spell it.
fn nested_destination(source_root: &Path, destination_root: &Path) -> Option<PathBuf> {
    let src_real = dunce::canonicalize(source_root).ok()?;
    let dst_real = dunce::canonicalize(destination_root).ok()?;
    let rel = dst_real.strip_prefix(&src_real).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }
    Some(source_root.join(rel))
}
