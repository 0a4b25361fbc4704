#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the coupon-server binary
//!
//! These tests verify help and version output, configuration validation and
//! that the server starts and shuts down on its own when its uptime is capped.

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

/// Helper to run the coupon-server binary with given arguments
fn run_coupon_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_coupon-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute coupon-server")
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_coupon_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("coupon-server"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--port"), "Should mention port option");
}

#[test]
fn test_cli_version_command() {
    let output = run_coupon_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("coupon-server"), "Should contain binary name");
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Should contain package version: {stdout}"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_coupon_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should contain error message about invalid command: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_coupon_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "invalid.yaml", "invalid: yaml: content: [unclosed");

    let output = run_coupon_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("configuration"),
        "Should mention configuration loading: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_unknown_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "unknown.yaml", "server:\n  listen: 127.0.0.1:1\n");

    let output = run_coupon_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should reject unknown keys");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("listen"), "Should name the unknown key: {stderr}");
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "valid.yaml",
        r"
server:
  bind_addr: 127.0.0.1:18080
  shutdown_timeout: 3s
logging:
  level: warn
  format: json
coupons:
  storage: memory
",
    );

    let output = run_coupon_server(&["--config", &config_path, "--port", "18081", "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"), "{stdout}");
    assert!(stdout.contains("127.0.0.1:18081"), "Port override applied: {stdout}");
    assert!(stdout.contains("\"shutdown_timeout\": \"3s\""), "{stdout}");
}

#[test]
fn test_cli_print_config_defaults() {
    let output = run_coupon_server(&["--print-config"]);

    assert!(output.status.success(), "Print config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration"), "{stdout}");
    assert!(stdout.contains("0.0.0.0:8080"), "{stdout}");
    assert!(stdout.contains("\"storage\": \"memory\""), "{stdout}");
}

#[tokio::test]
async fn test_cli_run_stops_after_max_uptime() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "short.yaml",
        r"
server:
  bind_addr: 127.0.0.1:0
  max_uptime: 300ms
",
    );

    let child = tokio::process::Command::new(env!("CARGO_BIN_EXE_coupon-server"))
        .args(["--config", &config_path, "run"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn coupon-server");

    let output = timeout(Duration::from_secs(30), child.wait_with_output())
        .await
        .expect("Server should stop on its own once max_uptime elapses")
        .expect("Failed to wait for coupon-server");

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success(), "Server should exit cleanly");
}
