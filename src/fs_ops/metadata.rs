//! Metadata preservation for copied files.
//! - Copies timestamps (atime, mtime) and, on Unix, the permission bits from source to dest.
//! - Best-effort: failures are logged and ignored; the bytes are already in place.

use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

/// Apply `src_meta` timestamps and permissions onto `dest`.
pub(crate) fn preserve_metadata(dest: &Path, src_meta: &fs::Metadata) {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    match set_file_times(dest, atime, mtime) {
        Ok(()) => trace!(path = %dest.display(), "set atime/mtime on destination"),
        Err(e) => warn!(
            path = %dest.display(),
            error = %e,
            "failed to set atime/mtime on destination"
        ),
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = src_meta.permissions().mode() & 0o777;
        let mode_str = format!("{mode:o}");
        match fs::set_permissions(dest, fs::Permissions::from_mode(mode)) {
            Ok(()) => trace!(path = %dest.display(), mode = %mode_str, "set permissions"),
            Err(e) => warn!(
                path = %dest.display(),
                mode = %mode_str,
                error = %e,
                "failed to set permissions on destination"
            ),
        }
    }

    #[cfg(not(unix))]
    if src_meta.permissions().readonly() {
        let mut perms = match fs::metadata(dest) {
            Ok(m) => m.permissions(),
            Err(e) => {
                warn!(
                    path = %dest.display(),
                    error = %e,
                    "failed to stat destination for readonly flag"
                );
                return;
            }
        };
        perms.set_readonly(true);
        if let Err(e) = fs::set_permissions(dest, perms) {
            warn!(path = %dest.display(), error = %e, "failed to set readonly on destination");
        }
    }
}
