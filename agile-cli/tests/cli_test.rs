use std::path::PathBuf;
use std::process::{Command, Output};

use agile_test_utils::NetrcGuard;
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NETRC: &str = "machine atlassian.net\n  login net@example.com\n  password net-token\n";

/// Run the agile binary off the async runtime so the mock server keeps serving
async fn run_agile(home: PathBuf, args: Vec<String>) -> Output {
  tokio::task::spawn_blocking(move || {
    Command::new(env!("CARGO_BIN_EXE_agile"))
      .env("HOME", home)
      .env_remove("JIRA_HOST")
      .env_remove("RUST_LOG")
      .args(args)
      .output()
      .expect("Failed to execute agile")
  })
  .await
  .expect("agile task panicked")
}

fn args(values: &[&str]) -> Vec<String> {
  values.iter().map(|value| value.to_string()).collect()
}

/// Test that --help lists the request subcommands
#[test]
fn test_help_lists_subcommands() {
  Command::new(env!("CARGO_BIN_EXE_agile"))
    .arg("--help")
    .output()
    .expect("Failed to execute agile")
    .assert()
    .success()
    .stdout(predicate::str::contains("get").and(predicate::str::contains("delete")));
}

/// Test that running without a host explains how to set one
#[tokio::test(flavor = "multi_thread")]
async fn test_missing_host_is_reported() {
  let guard = NetrcGuard::new("");

  let output = run_agile(guard.home_dir().to_path_buf(), args(&["get", "board/1"])).await;

  output
    .assert()
    .failure()
    .stderr(predicate::str::contains("JIRA_HOST"));
}

/// Test a GET with `.netrc` credentials printing pretty JSON
#[tokio::test(flavor = "multi_thread")]
async fn test_get_prints_pretty_json() {
  let mock_server = MockServer::start().await;
  let guard = NetrcGuard::new(NETRC);

  Mock::given(method("GET"))
    .and(path("/rest/agile/1.0/board/1"))
    .and(basic_auth("net@example.com", "net-token"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "id": 1,
        "name": "Scrum board",
        "type": "scrum"
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let output = run_agile(
    guard.home_dir().to_path_buf(),
    args(&["--host", &mock_server.uri(), "get", "board/1"]),
  )
  .await;

  output
    .assert()
    .success()
    .stdout(predicate::str::contains("\"name\": \"Scrum board\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_post_sends_json_body_and_user_agent() {
  let mock_server = MockServer::start().await;
  let guard = NetrcGuard::new("");

  Mock::given(method("POST"))
    .and(path("/rest/agile/1.0/sprint/5/issue"))
    .and(header("User-Agent", "sprint-bot/1.0"))
    .and(body_json(json!({"issues": ["PROJ-1"]})))
    .respond_with(ResponseTemplate::new(204))
    .expect(1)
    .mount(&mock_server)
    .await;

  let output = run_agile(
    guard.home_dir().to_path_buf(),
    args(&[
      "--host",
      &mock_server.uri(),
      "--user-agent",
      "sprint-bot/1.0",
      "post",
      "sprint/5/issue",
      "--data",
      r#"{"issues":["PROJ-1"]}"#,
    ]),
  )
  .await;

  output.assert().success().stderr(predicate::str::contains("204"));
}

/// Test that Jira error messages and the status reach stderr
#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_prints_jira_errors() {
  let mock_server = MockServer::start().await;
  let guard = NetrcGuard::new(NETRC);

  Mock::given(method("GET"))
    .and(path("/rest/agile/1.0/board/999"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({
        "errorMessages": ["Board does not exist"],
        "errors": {}
    })))
    .mount(&mock_server)
    .await;

  let output = run_agile(
    guard.home_dir().to_path_buf(),
    args(&["--host", &mock_server.uri(), "get", "board/999"]),
  )
  .await;

  output.assert().failure().stderr(
    predicate::str::contains("Board does not exist").and(predicate::str::contains("Status Code: 404")),
  );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_data_is_rejected_before_sending() {
  let guard = NetrcGuard::new("");

  let output = run_agile(
    guard.home_dir().to_path_buf(),
    args(&["--host", "example.atlassian.net", "put", "board/1", "--data", "{oops"]),
  )
  .await;

  output
    .assert()
    .failure()
    .stderr(predicate::str::contains("--data is not valid JSON"));
}

/// Test that --include writes the status line and headers to stderr
#[tokio::test(flavor = "multi_thread")]
async fn test_include_prints_status_and_headers() {
  let mock_server = MockServer::start().await;
  let guard = NetrcGuard::new("");

  Mock::given(method("GET"))
    .and(path("/rest/agile/1.0/sprint/5"))
    .respond_with(
      ResponseTemplate::new(200)
        .insert_header("X-AREQUESTID", "req-42")
        .set_body_json(json!({"id": 5, "state": "active"})),
    )
    .mount(&mock_server)
    .await;

  let output = run_agile(
    guard.home_dir().to_path_buf(),
    args(&["--host", &mock_server.uri(), "-i", "get", "sprint/5"]),
  )
  .await;

  output
    .assert()
    .success()
    .stdout(predicate::str::contains("\"state\": \"active\"").and(predicate::str::contains("req-42").not()))
    .stderr(
      predicate::str::contains("200")
        .and(predicate::str::contains("GET"))
        .and(predicate::str::contains("/rest/agile/1.0/sprint/5"))
        .and(predicate::str::contains("x-arequestid"))
        .and(predicate::str::contains("req-42")),
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_include_prints_head_of_failed_call() {
  let mock_server = MockServer::start().await;
  let guard = NetrcGuard::new("");

  Mock::given(method("DELETE"))
    .and(path("/rest/agile/1.0/sprint/9"))
    .respond_with(
      ResponseTemplate::new(403)
        .insert_header("X-AREQUESTID", "req-403")
        .set_body_json(json!({"errorMessages": ["You cannot delete this sprint"]})),
    )
    .mount(&mock_server)
    .await;

  let output = run_agile(
    guard.home_dir().to_path_buf(),
    args(&["--host", &mock_server.uri(), "--include", "delete", "sprint/9"]),
  )
  .await;

  output.assert().failure().stderr(
    predicate::str::contains("403")
      .and(predicate::str::contains("DELETE"))
      .and(predicate::str::contains("req-403"))
      .and(predicate::str::contains("You cannot delete this sprint")),
  );
}
