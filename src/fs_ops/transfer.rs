//! Single-file transfer primitive.
//!
//! Copies or moves one file to one exact destination path and never overwrites:
//! - copy: the destination is created exclusively (see `io_copy`)
//! - move: refused if the destination exists, then an atomic rename; across filesystems
//!   an exclusive copy followed by removal of the source
//! - dry-run: nothing is touched, the transfer is reported as done
//!
//! A destination that already exists is not an error: the result comes back with
//! `transferred == false` so the caller can try the next candidate name.

use anyhow::Result;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::atomic::try_atomic_move;
use super::helpers::{io_error_with_help, is_cross_device};
use super::io_copy::{DurabilityMode, copy_exclusive};
use super::metadata::preserve_metadata;
use crate::config::Options;

/// Whether a transfer moves or copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Move,
    Copy,
}

impl TransferKind {
    pub fn from_options(opts: &Options) -> Self {
        if opts.move_files {
            TransferKind::Move
        } else {
            TransferKind::Copy
        }
    }

    /// Verb used in progress lines.
    pub fn verb(self) -> &'static str {
        match self {
            TransferKind::Move => "Move",
            TransferKind::Copy => "Copy",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Outcome of one attempted transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// False if the destination already existed at the mutating call.
    pub transferred: bool,
    pub kind: TransferKind,
    /// True if nothing was actually written.
    pub dry_run: bool,
}

impl TransferResult {
    /// Progress line: "<Verb> <source> -> <destination>".
    pub fn progress_line(&self) -> String {
        format!(
            "{} {} -> {}",
            self.kind.verb(),
            self.source.display(),
            self.destination.display()
        )
    }
}

/// Transfer `src` to exactly `dest` according to `opts`.
pub fn transfer(src: &Path, dest: &Path, opts: &Options) -> Result<TransferResult> {
    let kind = TransferKind::from_options(opts);
    let done = |transferred: bool| TransferResult {
        source: src.to_path_buf(),
        destination: dest.to_path_buf(),
        transferred,
        kind,
        dry_run: opts.dry_run,
    };

    if opts.dry_run {
        debug!(
            src = %src.display(),
            dest = %dest.display(),
            kind = %kind,
            "dry-run: would transfer"
        );
        return Ok(done(true));
    }

    let outcome = match kind {
        TransferKind::Copy => copy_file(src, dest, opts.preserve_metadata),
        TransferKind::Move => move_file(src, dest),
    };

    match outcome {
        Ok(()) => Ok(done(true)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!(dest = %dest.display(), "destination taken at transfer; trying next name");
            Ok(done(false))
        }
        Err(e) => Err(io_error_with_help(failed_op(kind), dest)(e)),
    }
}

fn failed_op(kind: TransferKind) -> &'static str {
    match kind {
        TransferKind::Copy => "copy file to",
        TransferKind::Move => "move file to",
    }
}

fn copy_file(src: &Path, dest: &Path, preserve: bool) -> io::Result<()> {
    // Stat first: once the bytes are in place the copy must not turn into a failure.
    let meta = if preserve { Some(fs::metadata(src)?) } else { None };
    let bytes = copy_exclusive(src, dest, DurabilityMode::Data)?;
    if let Some(meta) = &meta {
        preserve_metadata(dest, meta);
    }
    debug!(src = %src.display(), dest = %dest.display(), bytes, "copied");
    Ok(())
}

fn move_file(src: &Path, dest: &Path) -> io::Result<()> {
    // rename() replaces an existing file, so refuse up front.
    if fs::symlink_metadata(dest).is_ok() {
        return Err(io::Error::from(io::ErrorKind::AlreadyExists));
    }

    match try_atomic_move(src, dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "renamed");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(
                src = %src.display(),
                dest = %dest.display(),
                "cross-filesystem move; copying then removing source"
            );
            let meta = fs::metadata(src)?;
            copy_exclusive(src, dest, DurabilityMode::Full)?;
            // Timestamps and mode travel with a move.
            preserve_metadata(dest, &meta);
            if let Err(e) = fs::remove_file(src) {
                // Both copies exist now; the new one stays.
                return Err(io::Error::new(
                    e.kind(),
                    format!("copied but could not remove source '{}': {e}", src.display()),
                ));
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}
