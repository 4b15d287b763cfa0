//! Atomic rename helper.
//! - Plain `fs::rename`; callers make sure the destination name is free beforehand.
//! - On Unix, best-effort fsync of the destination directory after the rename.

use std::fs;
use std::io;
use std::path::Path;

pub(crate) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // A failed directory fsync must not turn a completed rename into an error.
        let _ = fsync_dir(parent);
    }

    Ok(())
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}
