//! Exclusive streaming copy.
//!
//! - The destination is created with `create_new(true)`: an existing path (file, dir or
//!   dangling symlink) fails with `ErrorKind::AlreadyExists` and is never clobbered.
//! - Only file contents are copied; metadata is handled separately (see `metadata`).
//! - A partially written destination is removed when the copy fails midway.
//!
//! `io::copy` between two `File`s uses in-kernel copying on Linux
//! (copy_file_range/sendfile) and a buffered loop elsewhere.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Durability applied after the bytes are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurabilityMode {
    /// Flush to the OS only. Used for plain copies where the source stays in place.
    Data,
    /// `sync_all` the destination. Used when the source is deleted afterwards.
    Full,
}

/// Copy `src` -> `dst`, creating `dst` exclusively. Returns the number of bytes copied.
pub(crate) fn copy_exclusive(src: &Path, dst: &Path, mode: DurabilityMode) -> io::Result<u64> {
    // Open the source first so a vanished source never leaves an empty destination behind.
    let mut src_f = File::open(src)?;
    let mut dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    match write_all_from(&mut src_f, &mut dst_f, mode) {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            drop(dst_f);
            let _ = fs::remove_file(dst);
            Err(e)
        }
    }
}

fn write_all_from(src_f: &mut File, dst_f: &mut File, mode: DurabilityMode) -> io::Result<u64> {
    let bytes = io::copy(src_f, dst_f)?;
    dst_f.flush()?;
    if mode == DurabilityMode::Full {
        dst_f.sync_all()?;
    }
    Ok(bytes)
}
