// tests/cli_test.rs
use std::process::Command;

#[test]
fn test_release_prune_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-prune", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-prune"));
    assert!(stdout.contains("Retention strategy"));
}

#[test]
fn test_release_prune_lists_strategies() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-prune", "--", "--list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("latest-in-minor"));
    assert!(stdout.contains("not-matching-semver"));
}

#[test]
fn test_release_prune_rejects_unknown_strategy() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "release-prune",
            "--",
            "--repo",
            "acme/widgets",
            "--strategy",
            "bogus",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown strategy"));
}
