//! CLI smoke tests for the profiles-server binary

use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Helper to run the profiles-server binary with given arguments
fn run_profiles_server(args: &[&str], cwd: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_profiles-server"))
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute profiles-server")
}

fn write_config(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, body).expect("write config");
    path.to_string_lossy().into_owned()
}

const VALID_CONFIG: &str = r#"
server:
  home_dir: "home"
  host: "127.0.0.1"
  port: 18087

database:
  url: "sqlite://profiles.db"

logging:
  default:
    console_level: "off"
    file: ""

modules:
  user_profiles:
    conflate_fetch_failures: true
    request_timeout_secs: 5
"#;

#[test]
fn test_cli_help_command() {
    let tmp = TempDir::new().unwrap();
    let output = run_profiles_server(&["--help"], tmp.path());

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let tmp = TempDir::new().unwrap();
    let output = run_profiles_server(&["--version"], tmp.path());

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("profiles-server"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let tmp = TempDir::new().unwrap();
    let output = run_profiles_server(&["invalid-command"], tmp.path());
    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_check_accepts_valid_config() {
    let tmp = TempDir::new().unwrap();
    let cfg = write_config(&tmp, VALID_CONFIG);

    let output = run_profiles_server(&["--config", &cfg, "check"], tmp.path());
    assert!(
        output.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration check passed"));
    assert!(tmp.path().join("home").is_dir(), "home_dir should be created");
}

#[test]
fn test_check_rejects_bad_module_section() {
    let tmp = TempDir::new().unwrap();
    let cfg = write_config(
        &tmp,
        &VALID_CONFIG.replace("request_timeout_secs: 5", "page_size: 5"),
    );

    let output = run_profiles_server(&["--config", &cfg, "check"], tmp.path());
    assert!(!output.status.success(), "unknown module key should fail");
}

#[test]
fn test_check_rejects_zero_request_timeout() {
    let tmp = TempDir::new().unwrap();
    let cfg = write_config(
        &tmp,
        &VALID_CONFIG.replace("request_timeout_secs: 5", "request_timeout_secs: 0"),
    );

    let output = run_profiles_server(&["--config", &cfg, "check"], tmp.path());
    assert!(!output.status.success(), "zero timeout should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("request_timeout_secs"));
}

#[test]
fn test_print_config_applies_port_override() {
    let tmp = TempDir::new().unwrap();
    let cfg = write_config(&tmp, VALID_CONFIG);

    let output = run_profiles_server(
        &["--config", &cfg, "--port", "19000", "--print-config"],
        tmp.path(),
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 19000"));
}
