// Shared test helpers for integration tests.
// Used by cli_flows.rs, cli_contract.rs and setup_properties.rs.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_quickhooks"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary inside `cwd` with the given args.
/// Returns (stdout, stderr, exit_code).
pub fn run_in(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .current_dir(cwd)
        .env_remove("QUICKHOOKS_LOG")
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// A temp directory containing an empty `.git` directory.
pub fn git_repo() -> TempDir {
    let tmp = TempDir::new().expect("failed to create temp dir");
    std::fs::create_dir(tmp.path().join(".git")).expect("failed to create .git");
    tmp
}

pub fn hook_path(root: &Path) -> PathBuf {
    root.join(".git").join("hooks").join("pre-commit")
}

pub fn git_log_path(root: &Path) -> PathBuf {
    root.join(".git").join("hooks").join("logs").join("setup.log")
}

pub fn fallback_log_path(root: &Path) -> PathBuf {
    root.join("results").join("setup.log")
}

/// The value after `Session ID: ` if it is eight lowercase-alphanumeric characters.
pub fn session_token(log: &str) -> Option<String> {
    let token = log
        .lines()
        .find_map(|line| line.strip_prefix("Session ID: "))?;
    let valid = token.len() == 8
        && token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    valid.then(|| token.to_string())
}

pub fn parse_status(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}
