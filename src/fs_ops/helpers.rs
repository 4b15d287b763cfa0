//! I/O error helpers.
//!
//! Enriches `io::Error` with the failed operation, the path involved and a
//! platform-aware hint, for use with `map_err`:
//!
//!   fs::remove_file(src).map_err(io_error_with_help("remove source file", src))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

const PERMISSION_HINT: &str = "permission denied; check ownership and write permissions";

/// Short, actionable hint for common OS error codes.
#[cfg(unix)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some(PERMISSION_HINT),
        libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
        libc::ENOENT => Some("path not found; verify it exists"),
        libc::EEXIST => Some("already exists"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem; cannot write here"),
        libc::ENAMETOOLONG => Some("filename or path too long"),
        libc::EISDIR => Some("is a directory"),
        libc::EMFILE | libc::ENFILE => Some("too many open files"),
        _ => None,
    }
}

#[cfg(windows)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),
        17 => Some("not same device; cross-filesystem move"),
        32 => Some("sharing violation; file is in use"),
        2 | 3 => Some("path not found; verify it exists"),
        80 | 183 => Some("already exists"),
        112 => Some("insufficient disk space"),
        206 => Some("filename or path too long"),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn hint_for_code(_code: i32) -> Option<&'static str> {
    None
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some(PERMISSION_HINT),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        _ => None,
    }
}

/// Format "<op> '<path>': <error> (<hint>) [os code: N]".
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => hint_for_code(code),
        None => hint_for_kind(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(&format!(" ({h})"));
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for anyhow::Result code.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// True if the error is EXDEV / ERROR_NOT_SAME_DEVICE (rename across filesystems).
pub(crate) fn is_cross_device(e: &io::Error) -> bool {
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        #[cfg(windows)]
        Some(code) => code == 17,
        #[cfg(not(any(unix, windows)))]
        Some(_) => false,
        None => false,
    }
}
