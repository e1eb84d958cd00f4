//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mage_config() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mage-config"));
    cmd.env_remove("MAGE_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_base(dir: &Path) -> String {
    let path = dir.join("defaults.toml");
    fs::write(
        &path,
        "typeExcludeRegex = ['random_data']\ntags = ['a']\n\n[baseTypes]\nrandom_type = 'D'\n\n[opts]\nx = 1\ny = 2\n",
    )
    .expect("write base");
    path.to_str().expect("utf8 path").to_string()
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout is json")
}

#[test]
fn test_cli_version() {
    let mut cmd = mage_config();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("mage-config"));
}

#[test]
fn test_cli_help() {
    let mut cmd = mage_config();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Merge user configuration"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_merge_requires_base() {
    let mut cmd = mage_config();
    cmd.arg("merge");
    cmd.assert().failure().stderr(predicate::str::contains("--base"));
}

#[test]
fn test_merge_explicit_override() {
    let tmp = TempDir::new().expect("tmp");
    let base = write_base(tmp.path());
    let user = tmp.path().join("user.yaml");
    fs::write(&user, "SecretVariable: true\ntags: [b]\nopts:\n  y: 9\n  z: 3\n")
        .expect("write user");

    let output = mage_config()
        .args(["merge", "--base", &base, "--override", user.to_str().expect("utf8 path")])
        .output()
        .expect("run");
    assert!(output.status.success());

    let merged = stdout_json(&output.stdout);
    similar_asserts::assert_eq!(
        merged,
        serde_json::json!({
            "typeExcludeRegex": ["random_data"],
            "tags": ["b", "a"],
            "baseTypes": {"random_type": "D"},
            "opts": {"x": 1, "y": 9, "z": 3},
            "SecretVariable": true
        })
    );
}

#[test]
fn test_merge_discovers_default_override() {
    let tmp = TempDir::new().expect("tmp");
    let base = write_base(tmp.path());
    fs::write(tmp.path().join("config.json"), r#"{"SecretVariable": true}"#).expect("write user");

    let output = mage_config()
        .args(["merge", "--base", &base, "--root", tmp.path().to_str().expect("utf8 path")])
        .output()
        .expect("run");
    assert!(output.status.success());

    let merged = stdout_json(&output.stdout);
    assert_eq!(merged["SecretVariable"], serde_json::json!(true));
    assert_eq!(merged["tags"], serde_json::json!(["a"]));
}

#[test]
fn test_merge_without_override_prints_base() {
    let tmp = TempDir::new().expect("tmp");
    let base = write_base(tmp.path());

    let output = mage_config()
        .args(["merge", "--base", &base, "--root", tmp.path().to_str().expect("utf8 path")])
        .output()
        .expect("run");
    assert!(output.status.success());

    let merged = stdout_json(&output.stdout);
    assert_eq!(merged["baseTypes"], serde_json::json!({"random_type": "D"}));
    assert!(merged.get("SecretVariable").is_none());
    assert!(merged.get("__file__").is_none());
}

#[test]
fn test_merge_override_from_env() {
    let tmp = TempDir::new().expect("tmp");
    let base = write_base(tmp.path());
    let user = tmp.path().join("user.toml");
    fs::write(&user, "tags = ['b']\n").expect("write user");

    let output = mage_config()
        .env("MAGE_CONFIG", &user)
        .args(["merge", "--base", &base])
        .output()
        .expect("run");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout)["tags"], serde_json::json!(["b", "a"]));
}

#[test]
fn test_merge_missing_override_fails() {
    let tmp = TempDir::new().expect("tmp");
    let base = write_base(tmp.path());
    let missing = tmp.path().join("missing.toml");

    let mut cmd = mage_config();
    cmd.args(["merge", "--base", &base, "--override", missing.to_str().expect("utf8 path")]);
    cmd.assert().failure().stderr(predicate::str::contains("No valid config file in path"));
}

#[test]
fn test_merge_type_conflict() {
    let tmp = TempDir::new().expect("tmp");
    let base = write_base(tmp.path());
    let user = tmp.path().join("user.json");
    fs::write(&user, r#"{"opts": ["x"]}"#).expect("write user");
    let user = user.to_str().expect("utf8 path").to_string();

    let mut cmd = mage_config();
    cmd.args(["merge", "--base", &base, "--override", &user]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot merge sequence into mapping for 'opts'"));

    let output = mage_config()
        .args(["merge", "--base", &base, "--override", &user, "--on-conflict", "overwrite"])
        .output()
        .expect("run");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout)["opts"], serde_json::json!(["x"]));
}

#[test]
fn test_merge_combine_empty_flag() {
    let tmp = TempDir::new().expect("tmp");
    let base = tmp.path().join("defaults.toml");
    fs::write(&base, "count = 0\n").expect("write base");
    let user = tmp.path().join("user.toml");
    fs::write(&user, "count = ['a']\n").expect("write user");
    let base = base.to_str().expect("utf8 path").to_string();
    let user = user.to_str().expect("utf8 path").to_string();

    let mut cmd = mage_config();
    cmd.args(["merge", "--base", &base, "--override", &user, "--combine-empty"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot merge sequence into scalar for 'count'"));

    let output = mage_config()
        .args(["merge", "--base", &base, "--override", &user])
        .output()
        .expect("run");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout)["count"], serde_json::json!(["a"]));
}

#[test]
fn test_merge_yaml_output() {
    let tmp = TempDir::new().expect("tmp");
    let base = write_base(tmp.path());
    let user = tmp.path().join("user.toml");
    fs::write(&user, "SecretVariable = true\n").expect("write user");

    let mut cmd = mage_config();
    cmd.args([
        "merge",
        "--base",
        &base,
        "--override",
        user.to_str().expect("utf8 path"),
        "--format",
        "yaml",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SecretVariable: true"))
        .stdout(predicate::str::contains("random_type: D"));
}

#[test]
fn test_show_explicit_file() {
    let tmp = TempDir::new().expect("tmp");
    let base = write_base(tmp.path());

    let output = mage_config().args(["show", &base]).output().expect("run");
    assert!(output.status.success());

    let shown = stdout_json(&output.stdout);
    let names: Vec<&str> =
        shown.as_object().expect("object").keys().map(String::as_str).collect();
    assert_eq!(names, vec!["typeExcludeRegex", "tags", "baseTypes", "opts"]);
}

#[test]
fn test_show_without_default_config() {
    let tmp = TempDir::new().expect("tmp");

    let mut cmd = mage_config();
    cmd.args(["show", "--root", tmp.path().to_str().expect("utf8 path")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No config file found"));
}

#[test]
fn test_show_rejects_unsupported_extension() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("config.py");
    fs::write(&path, "SecretVariable = True\n").expect("write");

    let mut cmd = mage_config();
    cmd.args(["show", path.to_str().expect("utf8 path")]);
    cmd.assert().failure().stderr(predicate::str::contains("Unsupported config extension"));
}
