//! Front-end validation of the source and destination directories.
//! The collector assumes both were checked here: it never creates the destination.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::RcopyError;

/// Check that `source` is an existing, readable directory, that `destination` is an
/// existing directory, and that the two do not resolve to the same directory.
///
/// A destination nested inside the source tree is allowed; the collector skips it.
/// The paths are only checked: progress lines keep the spelling the user gave.
pub fn validate_paths(source: &Path, destination: &Path) -> Result<()> {
    ensure_dir(source, "source", RcopyError::SourceNotFound)?;
    ensure_readable(source)?;
    ensure_dir(destination, "destination", RcopyError::DestinationNotFound)?;

    let src_real = dunce::canonicalize(source).unwrap_or_else(|_| source.to_path_buf());
    let dst_real =
        dunce::canonicalize(destination).unwrap_or_else(|_| destination.to_path_buf());
    if src_real == dst_real {
        return Err(RcopyError::SameDirectory(src_real).into());
    }

    info!(
        source = %src_real.display(),
        destination = %dst_real.display(),
        "paths validated"
    );
    Ok(())
}

fn ensure_dir(path: &Path, role: &'static str, missing: fn(PathBuf) -> RcopyError) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(RcopyError::NotADirectory {
            role,
            path: path.to_path_buf(),
        }
        .into()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(missing(path.to_path_buf()).into()),
        Err(e) => Err(anyhow::Error::new(e).context(format!("stat {role} '{}'", path.display()))),
    }
}

fn ensure_readable(path: &Path) -> Result<()> {
    fs::read_dir(path).map_err(|e| RcopyError::SourceUnreadable {
        path: path.to_path_buf(),
        context: e.to_string(),
    })?;
    debug!(path = %path.display(), "source readable");
    Ok(())
}
