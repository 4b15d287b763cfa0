// Runs in its own test binary: the shutdown flag is process-wide and never cleared.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use rcopy::{Options, RcopyError, collect, shutdown};

#[test]
fn interrupt_stops_before_the_next_file() {
    let td = TempDir::new().unwrap();
    let src = td.child("src");
    src.child("a.txt").write_str("a").unwrap();
    src.child("b.txt").write_str("b").unwrap();
    let dst = td.child("dest");
    dst.create_dir_all().unwrap();

    shutdown::request();
    let opts = Options::new().with_quiet(true);
    let err = collect("*.txt", src.path(), dst.path(), &opts).unwrap_err();

    let re = err.downcast_ref::<RcopyError>().expect("typed error");
    assert!(matches!(re, RcopyError::Interrupted));
    assert_eq!(re.code(), 130);
    assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 0);
}
