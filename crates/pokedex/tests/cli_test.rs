//! Integration tests for the `pokedex` CLI binary.
//!
//! Parsing, help, completions, and config handling run offline. The
//! `list` tests stand up a wiremock catalog.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `pokedex` binary with env isolation.
///
/// Clears all `POKEDEX_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn pokedex_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pokedex");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("POKEDEX_API_URL")
        .env_remove("POKEDEX_TIMEOUT")
        .env_remove("POKEDEX_OUTPUT")
        .env_remove("POKEDEX_API__BASE_URL")
        .env_remove("POKEDEX_API__PAGE_SIZE")
        .env_remove("POKEDEX_DEFAULTS__OUTPUT");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn resource(kind: &str, name: &str, id: u32) -> serde_json::Value {
    json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/{kind}/{id}/") })
}

fn page(results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({ "count": results.len(), "next": null, "previous": null, "results": results })
}

fn type_detail(id: u32, name: &str, members: &[(&str, u32)]) -> serde_json::Value {
    let pokemon: Vec<_> = members
        .iter()
        .enumerate()
        .map(|(i, (n, pid))| json!({ "slot": i + 1, "pokemon": resource("pokemon", n, *pid) }))
        .collect();
    json!({ "id": id, "name": name, "pokemon": pokemon })
}

/// Catalog with four starters across grass, poison, and fire.
async fn starter_catalog() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            resource("type", "poison", 4),
            resource("type", "fire", 10),
            resource("type", "grass", 12),
            resource("type", "unknown", 10001),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "150"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            resource("pokemon", "bulbasaur", 1),
            resource("pokemon", "ivysaur", 2),
            resource("pokemon", "charmander", 4),
            resource("pokemon", "charmeleon", 5),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/type/grass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_detail(
            12,
            "grass",
            &[("bulbasaur", 1), ("ivysaur", 2)],
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/type/poison"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_detail(
            4,
            "poison",
            &[("ivysaur", 2), ("ekans", 23)],
        )))
        .mount(&server)
        .await;

    server
}

/// Run the binary off the runtime so the mock server keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = pokedex_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("Pokémon")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("types")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pokedex"));
}

#[test]
fn test_invalid_subcommand() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path())
        .arg("evolve")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Validation before any request ───────────────────────────────────

#[test]
fn test_three_types_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    // Unroutable URL: validation must fail before the catalog is contacted
    let output = pokedex_cmd(home.path())
        .args(["--api-url", "http://127.0.0.1:1/api/v2/"])
        .args(["list", "-t", "fire", "-t", "water", "-t", "grass"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("type"));
}

#[test]
fn test_unknown_type_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path())
        .args(["--api-url", "http://127.0.0.1:1/api/v2/"])
        .args(["list", "--type", "shadow"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("shadow"));
}

#[test]
fn test_invalid_api_url_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path())
        .args(["--api-url", "ftp://example.com/", "types"])
        .assert()
        .code(2);
}

#[test]
fn test_only_and_exclude_favourites_conflict() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path())
        .args(["list", "--only-favourites", "--exclude-favourites"])
        .assert()
        .code(2);
}

#[test]
fn test_unreachable_catalog_exits_seven() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path())
        .args(["--api-url", "http://127.0.0.1:1/api/v2/", "--timeout", "2"])
        .arg("list")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("unavailable"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_under_xdg_home() {
    let home = tempfile::tempdir().unwrap();
    pokedex_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_then_refuse_then_force() {
    let home = tempfile::tempdir().unwrap();

    pokedex_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    pokedex_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    pokedex_cmd(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_json() {
    let home = tempfile::tempdir().unwrap();
    let output = pokedex_cmd(home.path())
        .args(["-o", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["api"]["page_size"], 150);
}

// ── Catalog-backed commands ─────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_plain_sorted_by_id() {
    let server = starter_catalog().await;
    let home = tempfile::tempdir().unwrap();

    let mut cmd = pokedex_cmd(home.path());
    cmd.args(["--api-url", &format!("{}/api/v2/", server.uri())])
        .args(["-o", "plain", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["bulbasaur", "ivysaur", "charmander", "charmeleon"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_query_is_case_sensitive() {
    let server = starter_catalog().await;
    let home = tempfile::tempdir().unwrap();

    let mut cmd = pokedex_cmd(home.path());
    cmd.args(["--api-url", &format!("{}/api/v2/", server.uri())])
        .args(["-o", "plain", "list", "char"]);
    let output = run(cmd).await;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["charmander", "charmeleon"]);

    let mut cmd = pokedex_cmd(home.path());
    cmd.args(["--api-url", &format!("{}/api/v2/", server.uri())])
        .args(["-o", "plain", "list", "Char"]);
    let output = run(cmd).await;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).trim().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_type_narrowing_is_exact() {
    let server = starter_catalog().await;
    let home = tempfile::tempdir().unwrap();

    let mut cmd = pokedex_cmd(home.path());
    cmd.args(["--api-url", &format!("{}/api/v2/", server.uri())])
        .args(["-o", "plain", "list", "-t", "grass"]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).lines().collect::<Vec<_>>(),
        ["bulbasaur", "ivysaur"]
    );

    // Only ivysaur is listed under both; bulbasaur and ekans drop out
    let mut cmd = pokedex_cmd(home.path());
    cmd.args(["--api-url", &format!("{}/api/v2/", server.uri())])
        .args(["-o", "json-compact", "list", "-t", "poison", "-t", "grass"]);
    let output = run(cmd).await;
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["name"], "ivysaur");
    assert_eq!(rows[0]["id"], 2);
    assert_eq!(rows[0]["types"], json!(["poison", "grass"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_only_favourites() {
    let server = starter_catalog().await;
    let home = tempfile::tempdir().unwrap();

    let mut cmd = pokedex_cmd(home.path());
    cmd.args(["--api-url", &format!("{}/api/v2/", server.uri())])
        .args(["-o", "json-compact", "list", "--only-favourites"])
        .args(["-f", "charmeleon", "-f", "bulbasaur"]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["bulbasaur", "charmeleon"]);
    assert_eq!(rows[0]["favourite"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_types_lists_roster_with_selectability() {
    let server = starter_catalog().await;
    let home = tempfile::tempdir().unwrap();

    let mut cmd = pokedex_cmd(home.path());
    cmd.args(["--api-url", &format!("{}/api/v2/", server.uri())])
        .args(["-o", "json-compact", "types"]);
    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 4);
    assert_eq!(rows[3]["name"], "unknown");
    assert_eq!(rows[3]["selectable"], false);
    assert_eq!(rows[0]["selectable"], true);
}
