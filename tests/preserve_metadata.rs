use std::fs;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use filetime::{FileTime, set_file_mtime};
use rcopy::{Options, collect};

const TS: i64 = 1_700_000_000;

fn setup() -> (TempDir, assert_fs::fixture::ChildPath, assert_fs::fixture::ChildPath) {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    src.child("sub/meta.txt").write_str("metadata").unwrap();
    set_file_mtime(src.child("sub/meta.txt").path(), FileTime::from_unix_time(TS, 0)).unwrap();
    let dst = td.child("dest");
    dst.create_dir_all().unwrap();
    (td, src, dst)
}

fn mtime_secs(path: &std::path::Path) -> i64 {
    FileTime::from_last_modification_time(&fs::metadata(path).unwrap()).unix_seconds()
}

#[test]
fn copy_preserves_mtime_when_requested() {
    let (_td, src, dst) = setup();
    let opts = Options::new().with_quiet(true).with_preserve_metadata(true);

    collect("*.txt", src.path(), dst.path(), &opts).unwrap();

    dst.child("meta.txt").assert("metadata");
    assert_eq!(mtime_secs(dst.child("meta.txt").path()), TS);
}

#[test]
fn plain_copy_gets_a_fresh_mtime() {
    let (_td, src, dst) = setup();

    collect("*.txt", src.path(), dst.path(), &Options::new().with_quiet(true)).unwrap();

    assert_ne!(mtime_secs(dst.child("meta.txt").path()), TS);
}

#[test]
fn move_keeps_mtime() {
    let (_td, src, dst) = setup();

    let opts = Options::new().with_quiet(true).with_move(true);
    collect("*.txt", src.path(), dst.path(), &opts).unwrap();

    assert_eq!(mtime_secs(dst.child("meta.txt").path()), TS);
}

#[cfg(unix)]
#[test]
fn copy_preserves_mode_when_requested() {
    use std::os::unix::fs::PermissionsExt;
    let (_td, src, dst) = setup();
    let perms = fs::Permissions::from_mode(0o640);
    fs::set_permissions(src.child("sub/meta.txt").path(), perms).unwrap();

    let opts = Options::new().with_quiet(true).with_preserve_metadata(true);
    collect("*.txt", src.path(), dst.path(), &opts).unwrap();

    let mode = fs::metadata(dst.child("meta.txt").path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}
