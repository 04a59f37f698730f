//! End-to-end tests driving the `confbase` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG_BASE: &str = r#"{
    "sections": {
        "jellyfin": {
            "meta": {
                "name": "Jellyfin",
                "description": "Connection to the Jellyfin server."
            },
            "settings": {
                "server": {
                    "name": "Server address",
                    "required": true,
                    "requires_restart": true,
                    "description": "The address of the Jellyfin server.",
                    "type": "string",
                    "value": "http://localhost:8096"
                },
                "version": {
                    "name": "Version",
                    "required": false,
                    "requires_restart": false,
                    "description": "Reported server version.",
                    "type": "string",
                    "value": "0.1.0"
                }
            }
        },
        "email": {
            "meta": {
                "name": "Email",
                "description": "Outgoing email."
            },
            "settings": {
                "email_method": {
                    "name": "Method",
                    "required": false,
                    "requires_restart": false,
                    "description": "Delivery method.",
                    "type": "select",
                    "options": ["smtp", "mailgun"],
                    "value": "smtp"
                },
                "help": {
                    "name": "Help",
                    "required": false,
                    "requires_restart": false,
                    "description": "See the docs for provider setup.",
                    "type": "note",
                    "value": null
                }
            }
        }
    }
}"#;

fn confbase() -> Command {
    Command::cargo_bin("confbase").unwrap()
}

fn write_base(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config-base.json");
    fs::write(&path, CONFIG_BASE).unwrap();
    path
}

fn run(cmd: &str, input: &Path, output: &Path) {
    confbase()
        .args([
            cmd,
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));
}

#[test]
fn enumerate_injects_order_lists() {
    let dir = TempDir::new().unwrap();
    let input = write_base(&dir);
    let output = dir.path().join("config-ordered.json");
    run("enumerate", &input, &output);

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc["order"], serde_json::json!(["jellyfin", "email"]));
    assert_eq!(
        doc["sections"]["jellyfin"]["order"],
        serde_json::json!(["server", "version"])
    );
}

#[test]
fn enumerate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = write_base(&dir);
    let once = dir.path().join("once.json");
    let twice = dir.path().join("twice.json");
    run("enumerate", &input, &once);
    run("enumerate", &once, &twice);
    assert_eq!(
        fs::read_to_string(&once).unwrap(),
        fs::read_to_string(&twice).unwrap()
    );
}

#[test]
fn enumerate_then_flatten_to_yaml() {
    let dir = TempDir::new().unwrap();
    let input = write_base(&dir);
    let ordered = dir.path().join("config-ordered.json");
    let flattened = dir.path().join("config-base.yaml");
    run("enumerate", &input, &ordered);
    run("flatten", &ordered, &flattened);

    let yaml = fs::read_to_string(&flattened).unwrap();
    assert!(yaml.contains("section: jellyfin"));
    assert!(yaml.contains("setting: email_method"));
    // Order lists are dropped once sequence position encodes them.
    assert!(!yaml.contains("order:"));
}

#[test]
fn ini_renders_defaults_and_comments() {
    let dir = TempDir::new().unwrap();
    let input = write_base(&dir);
    let output = dir.path().join("config-base.ini");
    run("ini", &input, &output);

    let ini = fs::read_to_string(&output).unwrap();
    assert!(ini.contains("[jellyfin]\n; Connection to the Jellyfin server.\n"));
    assert!(ini.contains("version = 0.1.0\n"));
    assert!(ini.contains("email_method = smtp\n"));
    // Note settings are comment-only.
    assert!(ini.contains("; See the docs for provider setup.\n"));
    assert!(!ini.contains("help ="));
}

#[test]
fn struct_declaration_is_generated() {
    let dir = TempDir::new().unwrap();
    let input = write_base(&dir);
    let output = dir.path().join("config_struct.go");
    run("struct", &input, &output);

    let src = fs::read_to_string(&output).unwrap();
    assert!(src.starts_with("package main\n"));
    assert!(src.contains("EmailMethod struct{"));
    assert!(src.contains("Options []string `json:\"options\"` // [\"smtp\",\"mailgun\"]"));
}

#[test]
fn struct_package_override() {
    let dir = TempDir::new().unwrap();
    let input = write_base(&dir);
    let output = dir.path().join("config_struct.go");
    confbase()
        .args([
            "struct",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--package",
            "config",
        ])
        .assert()
        .success();
    assert!(
        fs::read_to_string(&output)
            .unwrap()
            .starts_with("package config\n")
    );
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    confbase()
        .args([
            "ini",
            "-i",
            dir.path().join("nope.json").to_str().unwrap(),
            "-o",
            dir.path().join("out.ini").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("config-base.txt");
    fs::write(&input, CONFIG_BASE).unwrap();
    confbase()
        .args([
            "enumerate",
            "-i",
            input.to_str().unwrap(),
            "-o",
            dir.path().join("out.json").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported config file extension"));
}

#[test]
fn schema_error_names_the_offender() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("config-base.json");
    fs::write(&input, r#"{ "sections": { "broken": { "settings": {} } } }"#).unwrap();
    confbase()
        .args([
            "ini",
            "-i",
            input.to_str().unwrap(),
            "-o",
            dir.path().join("out.ini").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sections.broken"));
}
