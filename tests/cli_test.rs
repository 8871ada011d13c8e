// tests/cli_test.rs
use std::process::Command;

#[test]
fn test_relcut_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "relcut", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("relcut"));
    assert!(stdout.contains("tag a release"));
}

#[test]
fn test_missing_version_argument_exits_one() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "relcut", "--"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please specify version"));
}

#[test]
fn test_version_flag() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "relcut", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("relcut"));
}
