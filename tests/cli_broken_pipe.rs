use assert_cmd::cargo;
use std::fs;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use tempfile::tempdir;

// Enough progress output to overflow a pipe buffer.
const FILES: usize = 3000;

fn tree() -> (tempfile::TempDir, std::path::PathBuf, std::path::PathBuf) {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    let dst = td.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dst).unwrap();
    for i in 0..FILES {
        fs::write(src.join(format!("file_with_a_longish_name_{i:05}.txt")), "x").unwrap();
    }
    (td, src, dst)
}

/// Read the first progress line, close the pipe, and collect the exit status and stderr.
fn run_and_close_stdout(
    args: &[&str],
    src: &std::path::Path,
    dst: &std::path::Path,
) -> (bool, String) {
    let me = cargo::cargo_bin!("rcopy");
    let mut child = Command::new(me)
        .args(args)
        .arg("*.txt")
        .arg(src)
        .arg(dst)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");

    let mut first = String::new();
    {
        let mut reader = BufReader::new(child.stdout.take().unwrap());
        reader.read_line(&mut first).unwrap();
    }
    assert!(first.starts_with("Copy "), "first line: {first}");

    let out = child.wait_with_output().unwrap();
    (out.status.success(), String::from_utf8_lossy(&out.stderr).into_owned())
}

#[test]
fn dry_run_survives_closed_stdout() {
    let (_td, src, dst) = tree();

    let (ok, stderr) = run_and_close_stdout(&["-n"], &src, &dst);

    assert!(ok, "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(&dst).unwrap().count(), 0);
}

#[test]
fn real_run_finishes_every_file_after_stdout_closes() {
    let (_td, src, dst) = tree();

    let (ok, stderr) = run_and_close_stdout(&[], &src, &dst);

    assert!(ok, "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(&dst).unwrap().count(), FILES);
}
