use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn values_gen(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_values_gen"));
    cmd.current_dir(dir.path()).env("RUST_LOG", "off");
    cmd
}

fn read_lines(dir: &TempDir, name: &str) -> Vec<Vec<i64>> {
    fs::read_to_string(dir.path().join(name))
        .unwrap()
        .lines()
        .map(|line| line.split_whitespace().map(|v| v.parse().unwrap()).collect())
        .collect()
}

#[test]
fn writes_to_default_file_name() {
    let dir = TempDir::new().unwrap();
    let status = values_gen(&dir)
        .args(["-e", "5", "--max-value", "10"])
        .status()
        .unwrap();
    assert!(status.success());

    let lines = read_lines(&dir, "1000000.csv");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 5);
    assert!(lines[0].iter().all(|v| (0..=10).contains(v)));
}

#[test]
fn repeated_runs_append() {
    let dir = TempDir::new().unwrap();
    for _ in 0..2 {
        let status = values_gen(&dir)
            .args(["-n", "3", "-e", "4", "-o", "out.csv"])
            .status()
            .unwrap();
        assert!(status.success());
    }

    let lines = read_lines(&dir, "out.csv");
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|l| l.len() == 4));
}

#[test]
fn negative_bounds_are_accepted() {
    let dir = TempDir::new().unwrap();
    let status = values_gen(&dir)
        .args(["--min-value", "-20", "--max-value", "-10", "-e", "8", "-o", "neg.csv"])
        .status()
        .unwrap();
    assert!(status.success());

    let lines = read_lines(&dir, "neg.csv");
    assert!(lines[0].iter().all(|v| (-20..=-10).contains(v)));
}

#[test]
fn zero_sets_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let status = values_gen(&dir)
        .args(["-n", "0", "-o", "none.csv"])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(!dir.path().join("none.csv").exists());
}

#[test]
fn inverted_range_fails_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    let output = values_gen(&dir)
        .args(["--min-value", "5", "--max-value", "1", "-o", "bad.csv"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value range"), "stderr: {stderr}");
    assert!(!dir.path().join("bad.csv").exists());
}
