use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn setup() -> (tempfile::TempDir, std::path::PathBuf, std::path::PathBuf) {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let src = base.join("src");
    let dst = base.join("dest");
    fs::create_dir_all(src.join("1")).unwrap();
    fs::create_dir_all(src.join("2")).unwrap();
    fs::create_dir_all(&dst).unwrap();
    fs::write(src.join("1").join("a.txt"), "one").unwrap();
    fs::write(src.join("2").join("a.txt"), "two").unwrap();
    fs::write(src.join("2").join("skip.md"), "no").unwrap();
    (td, src, dst)
}

#[test]
fn prints_one_line_per_copy() {
    let (_td, src, dst) = setup();

    let me = cargo::cargo_bin!("rcopy");
    let out = Command::new(me)
        .arg("*.txt")
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            format!(
                "Copy {} -> {}",
                src.join("1").join("a.txt").display(),
                dst.join("a.txt").display()
            ),
            format!(
                "Copy {} -> {}",
                src.join("2").join("a.txt").display(),
                dst.join("a(1).txt").display()
            ),
        ]
    );
    assert_eq!(fs::read_to_string(dst.join("a(1).txt")).unwrap(), "two");
}

#[test]
fn quiet_prints_nothing() {
    let (_td, src, dst) = setup();

    let me = cargo::cargo_bin!("rcopy");
    let out = Command::new(me)
        .args(["-q", "-m", "*.txt"])
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    assert!(out.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&out.stdout));
    assert!(dst.join("a.txt").exists());
    assert!(!src.join("1").join("a.txt").exists());
}

#[test]
fn dry_run_prints_but_does_not_write() {
    let (_td, src, dst) = setup();

    let me = cargo::cargo_bin!("rcopy");
    let out = Command::new(me)
        .args(["--dryrun", "--move", "*.txt"])
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.lines().all(|l| l.starts_with("Move ")));
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 0);
    assert!(src.join("1").join("a.txt").exists());
}

#[test]
fn missing_destination_fails_with_nonzero_exit() {
    let (_td, src, dst) = setup();
    let missing = dst.join("nope");

    let me = cargo::cargo_bin!("rcopy");
    let out = Command::new(me)
        .arg("*.txt")
        .arg(&src)
        .arg(&missing)
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Destination directory not found"), "stderr: {stderr}");
    assert!(!missing.exists());
    assert!(out.stdout.is_empty());
}

#[test]
fn malformed_pattern_fails_before_any_transfer() {
    let (_td, src, dst) = setup();

    let me = cargo::cargo_bin!("rcopy");
    let out = Command::new(me)
        .arg("[a-")
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Invalid glob pattern"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 0);
}

#[test]
fn same_source_and_destination_is_refused() {
    let (_td, src, _dst) = setup();

    let me = cargo::cargo_bin!("rcopy");
    let out = Command::new(me)
        .arg("*.txt")
        .arg(&src)
        .arg(&src)
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("same directory"), "stderr: {stderr}");
}

#[test]
fn log_file_receives_diagnostics() {
    let (td, src, dst) = setup();
    let log = fs::canonicalize(td.path()).unwrap().join("logs").join("rcopy.log");

    let me = cargo::cargo_bin!("rcopy");
    let out = Command::new(me)
        .args(["-q", "--log-level", "info", "--log-file"])
        .arg(&log)
        .arg("*.txt")
        .arg(&src)
        .arg(&dst)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("collection finished"), "log: {text}");
}
