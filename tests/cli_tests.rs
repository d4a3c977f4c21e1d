//! Integration tests for CLI functionality

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn tfe_inventory_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("tfe-inventory")
}

/// Run the binary off the async runtime so the mock server keeps serving
async fn run_against(url: String, output: std::path::PathBuf) -> std::process::Output {
    tokio::task::spawn_blocking(move || {
        Command::new(tfe_inventory_bin())
            .env("TFE_TOKEN", "test-token")
            .args(["--quiet", "--url", url.as_str(), "--output"])
            .arg(&output)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

async fn mount_json(mock_server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    Command::new(tfe_inventory_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--url"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    Command::new(tfe_inventory_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tfe-inventory"));
}

/// Test that --output is required
#[test]
fn test_missing_output() {
    Command::new(tfe_inventory_bin())
        .env("TFE_TOKEN", "test-token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

/// Missing token fails before any request and creates no file
#[test]
fn test_missing_token() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("inventory.csv");

    // Port 9 (discard) is never contacted: the token check comes first
    Command::new(tfe_inventory_bin())
        .env_remove("TFE_TOKEN")
        .args(["--url", "http://127.0.0.1:9", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Environment variable TFE_TOKEN not set"));

    assert!(!output.exists());
}

/// Invalid URL is reported as a configuration error
#[test]
fn test_invalid_url() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("inventory.csv");

    Command::new(tfe_inventory_bin())
        .env("TFE_TOKEN", "test-token")
        .args(["--url", "not a url", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration error"));

    assert!(!output.exists());
}

/// A 404 on the organization listing aborts without creating the file
#[tokio::test]
async fn test_listing_404_creates_no_file() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("inventory.csv");

    let result = run_against(mock_server.uri(), output.clone()).await;

    result
        .assert()
        .failure()
        .stdout(predicate::str::contains("404"))
        .stdout(predicate::str::contains("organizations"));
    assert!(!output.exists());
}

/// Full run against a mock server writes the expected rows
#[tokio::test]
async fn test_end_to_end_inventory() {
    let mock_server = MockServer::start().await;

    mount_json(
        &mock_server,
        "/api/v2/organizations",
        serde_json::json!({
            "data": [{ "id": "org1", "attributes": { "created-at": "2024-01-01T00:00:00Z" } }],
            "links": { "next": null }
        }),
    )
    .await;
    mount_json(
        &mock_server,
        "/api/v2/organizations/org1/workspaces",
        serde_json::json!({
            "data": [{
                "id": "ws1",
                "attributes": {
                    "name": "prod",
                    "created-at": "2024-01-01T00:00:00Z",
                    "updated-at": "2024-01-02T00:00:00Z"
                }
            }],
            "links": { "next": null }
        }),
    )
    .await;
    mount_json(
        &mock_server,
        "/api/v2/workspaces/ws1/current-state-version",
        serde_json::json!({
            "data": {
                "id": "sv-1",
                "attributes": {
                    "hosted-state-download-url": format!("{}/state/sv-1", mock_server.uri())
                }
            }
        }),
    )
    .await;
    mount_json(
        &mock_server,
        "/state/sv-1",
        serde_json::json!({
            "version": 4,
            "resources": [{
                "name": "aws_instance.web",
                "type": "aws_instance",
                "instances": [
                    { "attributes": { "arn": "arn:aws:...:1" } },
                    { "attributes": { "id": "i-2" } }
                ]
            }]
        }),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("inventory.csv");

    let result = run_against(mock_server.uri(), output.clone()).await;

    result.assert().success();
    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "name,type,identifier,org,workspace_id,workspace_name",
            "aws_instance.web,aws_instance,arn:aws:...:1,org1,ws1,prod",
            "aws_instance.web,aws_instance,,org1,ws1,prod",
        ]
    );
}
