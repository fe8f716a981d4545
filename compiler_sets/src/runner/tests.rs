//!
//! The subprocess runner tests.
//!

use std::path::Path;
use std::time::Duration;
use std::time::Instant;

use super::process::ProcessRunner;
use super::Runner;

/// The shell every test script is run with.
const SHELL: &str = "/bin/sh";

///
/// Runs the shell script with the runner.
///
fn run(runner: &ProcessRunner, script: &str) -> anyhow::Result<String> {
    let directory = tempfile::tempdir().expect("Always valid");
    runner
        .run_and_get_output(Path::new(SHELL), directory.path(), &["-c", script])
        .map(|output| String::from_utf8_lossy(output.as_slice()).into_owned())
}

#[test]
fn stdout_then_stderr() {
    let runner = ProcessRunner::default();
    let output = run(&runner, "echo err 1>&2; echo out").expect("Always valid");
    assert_eq!(output, "out\nerr\n");
}

#[test]
fn missing_program() {
    let runner = ProcessRunner::default();
    let directory = tempfile::tempdir().expect("Always valid");
    let result = runner.run_and_get_output(
        directory.path().join("missing").as_path(),
        directory.path(),
        &[],
    );
    assert!(result.is_err());
}

#[test]
fn timeout() {
    let runner = ProcessRunner::new(Duration::from_secs(1));
    let start = Instant::now();
    let error = run(&runner, "sleep 10").expect_err("Always valid");
    assert!(error.to_string().contains("timed out after 1s"));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn timeout_with_grandchild_holding_pipes() {
    let runner = ProcessRunner::new(Duration::from_secs(1));
    let start = Instant::now();
    let error = run(&runner, "sleep 10 & sleep 10").expect_err("Always valid");
    assert!(error.to_string().contains("timed out"));
    assert!(start.elapsed() < Duration::from_secs(5));
}
