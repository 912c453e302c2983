#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test points `XDG_CONFIG_HOME` at a temp directory so a developer's
//! own config file never leaks in.

use assert_cmd::Command;
use axum::routing::post;
use axum::{Json, Router};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

#[allow(deprecated)]
fn askbot(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("askbot").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn unused_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    askbot(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal chat client for question/answer services",
        ))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    askbot(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_ask_help() {
    let home = TempDir::new().unwrap();
    askbot(&home)
        .args(["ask", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_ask_blank_question_fails() {
    let home = TempDir::new().unwrap();
    askbot(&home)
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Question is empty"));
}

#[test]
fn test_ask_unreachable_server_prints_error_reply() {
    let home = TempDir::new().unwrap();
    askbot(&home)
        .args(["ask", "hello", "--endpoint", &unused_endpoint()])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stdout(predicate::str::contains("Error contacting server"));
}

#[test]
fn test_ask_invalid_endpoint_fails() {
    let home = TempDir::new().unwrap();
    askbot(&home)
        .args(["ask", "hello", "--endpoint", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid endpoint URL"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ask_prints_answer() {
    let app = Router::new().route(
        "/ask",
        post(|| async { Json(json!({ "answer": "9–5 Mon–Fri" })) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let home = TempDir::new().unwrap();
    askbot(&home)
        .args(["--quiet", "ask", "What", "are", "your", "hours?"])
        .args(["--endpoint", &endpoint])
        .assert()
        .success()
        .stdout(predicate::str::diff("9–5 Mon–Fri\n"));
}

#[test]
fn test_history_unreachable_server_fails() {
    let home = TempDir::new().unwrap();
    askbot(&home)
        .args(["history", "--endpoint", &unused_endpoint()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch history"));
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    askbot(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(default: http://127.0.0.1:8000)"))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_configure_show_reads_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("askbot");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[askbot]\nendpoint = \"https://bot.example.com\"\ntimeout_secs = 15\n",
    )
    .unwrap();

    askbot(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://bot.example.com"))
        .stdout(predicate::str::contains("15s"));
}

#[test]
fn test_broken_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("askbot");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[askbot\n").unwrap();

    askbot(&home)
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
