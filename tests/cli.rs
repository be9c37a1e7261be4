//! End-to-end tests for the sizewalk binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Directory with `a.bin` (100 bytes) and `sub/b.bin` (1000 bytes)
fn sample_tree() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join("sub")).expect("Failed to create subdir");

    let small = dir.path().join("a.bin");
    let large = dir.path().join("sub/b.bin");
    fs::write(&small, vec![b'x'; 100]).expect("Failed to write file");
    fs::write(&large, vec![b'y'; 1000]).expect("Failed to write file");

    (dir, small, large)
}

fn sizewalk() -> Command {
    let mut cmd = Command::cargo_bin("sizewalk").expect("binary should build");
    cmd.env("SIZEWALK_DELAY_MS", "0");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run sizewalk");
    assert!(output.status.success(), "sizewalk should succeed");
    String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

fn line(fields: &[&str]) -> String {
    format!("{}\n", fields.join("\t"))
}

fn show(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_sizes_in_blocks_with_total() {
    let (dir, small, large) = sample_tree();

    let stdout = stdout_of(sizewalk().arg("-b").arg("-c").arg(dir.path()));

    let expected = line(&["1", &show(&small)])
        + &line(&["2", &show(&large)])
        + "Total size: 1100 blocks\n";
    assert_eq!(stdout, expected);
}

#[test]
fn test_only_total() {
    let (dir, _, _) = sample_tree();

    sizewalk()
        .args(["-s", "-c"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("Total size: 1100 blocks\n");
}

#[test]
fn test_summarize_alone_prints_total() {
    let (dir, _, _) = sample_tree();

    sizewalk()
        .arg("-s")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("Total size: 1100 blocks\n");
}

#[test]
fn test_bytes_mode() {
    let (dir, small, large) = sample_tree();

    let stdout = stdout_of(sizewalk().args(["-bc", "--bytes"]).arg(dir.path()));

    let expected = line(&["100", &show(&small)])
        + &line(&["1000", &show(&large)])
        + "Total size: 1100 bytes\n";
    assert_eq!(stdout, expected);
}

#[test]
fn test_annotation_shows_raw_bytes() {
    let (dir, small, large) = sample_tree();

    let stdout = stdout_of(sizewalk().arg("-a").arg(dir.path()));

    let expected =
        line(&[&show(&small), "100 blocks"]) + &line(&[&show(&large), "1000 blocks"]);
    assert_eq!(stdout, expected);
}

#[test]
fn test_plain_run_lists_paths() {
    let (dir, small, large) = sample_tree();

    let stdout = stdout_of(sizewalk().arg(dir.path()));

    assert_eq!(stdout, format!("{}\n{}\n", show(&small), show(&large)));
}

#[test]
fn test_missing_root_is_reported_and_skipped() {
    let (dir, _, _) = sample_tree();
    let missing = dir.path().join("missing");

    sizewalk()
        .args(["-s", "-c"])
        .arg(&missing)
        .arg(dir.path())
        .assert()
        .success()
        .stdout("Total size: 1100 blocks\n")
        .stderr(predicate::str::contains(format!(
            "Path does not exist: {}",
            missing.display()
        )));
}

#[test]
fn test_files_from_list() {
    let (dir, _, _) = sample_tree();
    let (other, _, _) = sample_tree();
    let list = dir.path().join("roots.txt");
    fs::write(
        &list,
        format!("{}\n", other.path().display()),
    )
    .expect("Failed to write list");

    sizewalk()
        .args(["-s", "-c"])
        .arg(format!("--files-from={}", list.display()))
        .assert()
        .success()
        .stdout("Total size: 1100 blocks\n");
}

#[test]
fn test_files_from_does_not_precheck_paths() {
    let (dir, _, _) = sample_tree();
    let list_dir = TempDir::new().expect("Failed to create temp dir");
    let list = list_dir.path().join("roots.txt");
    let missing = dir.path().join("missing");
    fs::write(
        &list,
        format!("{} {}\n", missing.display(), dir.path().display()),
    )
    .expect("Failed to write list");

    sizewalk()
        .args(["-s", "-c", "--files-from"])
        .arg(&list)
        .assert()
        .success()
        .stdout("Total size: 1100 blocks\n")
        .stderr(
            predicate::str::contains(format!("Error processing: {}", missing.display()))
                .and(predicate::str::contains("Path does not exist").not()),
        );
}

#[test]
fn test_files_from_ignores_positional_paths() {
    let (dir, _, _) = sample_tree();
    let (other, _, _) = sample_tree();
    let list_dir = TempDir::new().expect("Failed to create temp dir");
    let list = list_dir.path().join("roots.txt");
    fs::write(&list, format!("{}\n", dir.path().display())).expect("Failed to write list");

    sizewalk()
        .args(["-s", "-c", "--files-from"])
        .arg(&list)
        .arg(other.path())
        .assert()
        .success()
        .stdout("Total size: 1100 blocks\n");
}

#[test]
fn test_unopenable_list_exits_with_one() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("roots.txt");

    sizewalk()
        .args(["-c", "--files-from"])
        .arg(&missing)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unable to open file"));
}

#[test]
fn test_log_file_receives_records() {
    let (dir, _, _) = sample_tree();
    let log_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = log_dir.path().join("sizewalk.log");

    sizewalk()
        .env("RUST_LOG", "debug")
        .arg("-s")
        .arg("--log-file")
        .arg(&log_path)
        .arg(dir.path())
        .assert()
        .success()
        .stdout("Total size: 1100 blocks\n");

    let log = fs::read_to_string(&log_path).expect("log file should exist");
    assert!(log.contains("DEBUG - Walking"), "unexpected log: {}", log);
}
