//! Integration tests for the `postsync` CLI binary.
//!
//! Argument parsing, help output, completions, and config handling run
//! without a server; post commands run against a wiremock collection.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `postsync` binary with env isolation.
///
/// Clears all `POSTSYNC_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn postsync_cmd(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("postsync");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("POSTSYNC_BASE_URL")
        .env_remove("POSTSYNC_OUTPUT")
        .env_remove("POSTSYNC_TIMEOUT")
        .env_remove("POSTSYNC_USER_AGENT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn collection() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "First", "body": "x", "userId": 7},
            {"id": 2, "title": "Second", "body": "y", "userId": 8},
            {"id": 3, "title": "Third", "body": "z", "userId": 7}
        ])))
        .mount(&server)
        .await;
    server
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = postsync_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("collection")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("react"))
            .and(predicate::str::contains("delete")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("postsync"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_zsh() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let home = tempfile::tempdir().unwrap();
    let output = postsync_cmd(home.path()).arg("foobar").output().unwrap();
    assert!(!output.status.success(), "Expected failure for invalid subcommand");
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let home = tempfile::tempdir().unwrap();
    let output = postsync_cmd(home.path())
        .args(["--output", "xml", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_invalid_base_url_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path())
        .args(["--base-url", "::nope", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("base_url"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_without_file_uses_defaults() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jsonplaceholder.typicode.com"));
}

#[test]
fn test_config_set_persists() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path())
        .args(["config", "set", "timeout", "9"])
        .assert()
        .success();

    postsync_cmd(home.path())
        .args(["-o", "json-compact", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timeout\":9"));
}

#[test]
fn test_config_set_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path())
        .args(["config", "set", "site", "default"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown config key"));
}

// ── Post commands ───────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_plain_prints_ids_newest_first() {
    let server = collection().await;
    let home = tempfile::tempdir().unwrap();

    postsync_cmd(home.path())
        .args(["--base-url", &server.uri(), "-o", "plain", "list"])
        .assert()
        .success()
        .stdout("1\n2\n3\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_by_author() {
    let server = collection().await;
    let home = tempfile::tempdir().unwrap();

    postsync_cmd(home.path())
        .args(["--base-url", &server.uri(), "-o", "plain", "list", "--author", "7"])
        .assert()
        .success()
        .stdout("1\n3\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_fetch_failure_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();

    postsync_cmd(home.path())
        .args(["--base-url", &server.uri(), "list"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not load posts"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_unknown_post_exit_code() {
    let server = collection().await;
    let home = tempfile::tempdir().unwrap();

    postsync_cmd(home.path())
        .args(["--base-url", &server.uri(), "show", "42"])
        .assert()
        .code(4);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_react_counts_in_json() {
    let server = collection().await;
    let home = tempfile::tempdir().unwrap();

    let output = postsync_cmd(home.path())
        .args(["--base-url", &server.uri(), "-o", "json", "react", "2", "heart", "--times", "2"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let post: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(post["id"], 2);
    assert_eq!(post["reactions"]["heart"], 2);
    assert_eq!(post["reactions"]["wow"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_keeps_edit_when_server_rejects() {
    let server = collection().await;
    Mock::given(method("PUT"))
        .and(path("/posts/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();

    let output = postsync_cmd(home.path())
        .args(["--base-url", &server.uri(), "-o", "json", "update", "3", "--title", "Edited"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let post: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(post["title"], "Edited");
    assert_eq!(post["body"], "z");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_requires_yes_when_not_interactive() {
    let server = collection().await;
    let home = tempfile::tempdir().unwrap();

    postsync_cmd(home.path())
        .args(["--base-url", &server.uri(), "delete", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_yes() {
    let server = collection().await;
    Mock::given(method("DELETE"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();

    postsync_cmd(home.path())
        .args(["--base-url", &server.uri(), "--color", "never", "-y", "delete", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleted post 1 (2 remaining)"));
}

#[test]
fn test_create_local_needs_no_server() {
    let home = tempfile::tempdir().unwrap();
    postsync_cmd(home.path())
        .args([
            "--base-url",
            "http://127.0.0.1:9",
            "-o",
            "json",
            "create",
            "--local",
            "--title",
            "Draft",
            "--author",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Draft\"").and(predicate::str::contains("\"authorId\": 5")));
}
