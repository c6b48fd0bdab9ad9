//! Tests for the command line binary.

mod common;

use common::mock_backend::{MockResponse, MockStudyService};
use common::{temp_file, temp_pdf};
use std::process::{Command, Output};
use studyspark::config::API_BASE_ENV;
use tempfile::TempDir;

/// Runs the binary with an empty config file and no environment override.
fn studyspark_cmd(config_dir: &TempDir) -> Command {
    let config = config_dir.path().join("config.toml");
    std::fs::write(&config, "").expect("Failed to write config");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_studyspark"));
    cmd.arg("--config").arg(config).env_remove(API_BASE_ENV);
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_studyspark"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("summarize"));
    assert!(stdout.contains("study"));
    assert!(stdout.contains("health"));
    assert!(stdout.contains("--api-base"));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_studyspark"))
        .args(["--config", "/nonexistent/studyspark.toml", "health"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config file not found"));
}

#[test]
fn test_invalid_api_base_fails_validation() {
    let dir = TempDir::new().unwrap();
    let output = studyspark_cmd(&dir)
        .args(["--api-base", "localhost:8000", "health"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must start with http:// or https://"));
}

#[test]
fn test_summarize_rejects_non_pdf() {
    let dir = TempDir::new().unwrap();
    let (_files, txt) = temp_file("notes.txt", b"hello");
    let output = studyspark_cmd(&dir)
        .arg("summarize")
        .arg(&txt)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please choose a PDF file"));
}

#[test]
fn test_summarize_without_file_argument_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_studyspark"))
        .arg("summarize")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_summarize_prints_cleaned_summary() {
    let service = MockStudyService::start().await;
    service
        .enqueue(MockResponse::json(r###"{"summary": "# Water\n\n**H2O** -> steam"}"###))
        .await;

    let dir = TempDir::new().unwrap();
    let (_files, pdf) = temp_pdf();
    let mut cmd = studyspark_cmd(&dir);
    cmd.args(["--api-base", &service.base_url(), "summarize"]).arg(&pdf);

    let output = run(cmd).await;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "## Water\n\nH₂O → steam\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_summarize_raw_prints_service_text() {
    let service = MockStudyService::start().await;
    service
        .enqueue(MockResponse::json(r###"{"summary": "# Water\n\n**H2O** -> steam"}"###))
        .await;

    let dir = TempDir::new().unwrap();
    let (_files, pdf) = temp_pdf();
    let mut cmd = studyspark_cmd(&dir);
    cmd.args(["--api-base", &service.base_url(), "summarize", "--raw"])
        .arg(&pdf);

    let output = run(cmd).await;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "# Water\n\n**H2O** -> steam\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_error_is_reported() {
    let service = MockStudyService::start().await;
    service
        .enqueue(MockResponse::detail(413, "File too large"))
        .await;

    let dir = TempDir::new().unwrap();
    let (_files, pdf) = temp_pdf();
    let mut cmd = studyspark_cmd(&dir);
    cmd.args(["--api-base", &service.base_url(), "study"]).arg(&pdf);

    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: File too large"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_health_reports_status_and_base() {
    let service = MockStudyService::start().await;
    service.enqueue(MockResponse::json(r#"{"status": "ok"}"#)).await;

    let dir = TempDir::new().unwrap();
    let mut cmd = studyspark_cmd(&dir);
    cmd.args(["--api-base", &service.base_url(), "health"]);

    let output = run(cmd).await;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("ok ({})\n", service.base_url())
    );
}
