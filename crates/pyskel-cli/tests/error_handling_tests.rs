//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn pyskel(temp: &TempDir) -> Command {
    let config = temp.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = cargo::cargo_bin_cmd!("pyskel");
    cmd.current_dir(temp.path())
        .env_remove("PYSKEL_TEMPLATES_DIR")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config);
    cmd
}

#[test]
fn test_existing_directory_without_force() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("p")).unwrap();
    fs::write(temp.path().join("p/keep.txt"), "mine").unwrap();

    pyskel(&temp)
        .args(["create", "--offline", "--name", "demo", "--dir", "p", "a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("directory already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(
        fs::read_to_string(temp.path().join("p/keep.txt")).unwrap(),
        "mine"
    );
    assert!(!temp.path().join("p/setup.py").exists());
}

#[test]
fn test_malformed_override_creates_nothing() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args([
            "create", "--offline", "--name", "demo", "--dir", "p", "a", "--data", "author",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed override 'author'"));

    assert!(!temp.path().join("p").exists());
}

#[test]
fn test_invalid_file_name_creates_nothing() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["create", "--offline", "--name", "demo", "--dir", "p", "ok", ".py"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid file name '.py'"));

    assert!(!temp.path().join("p").exists());
}

#[test]
fn test_missing_variable_leaves_partial_project() {
    let temp = TempDir::new().unwrap();
    let tmpl = temp.path().join("tmpl");
    fs::create_dir(&tmpl).unwrap();
    fs::write(tmpl.join("setup.py.tmpl"), "# $name\n").unwrap();
    fs::write(tmpl.join("README.md.tmpl"), "# $name\n$license\n").unwrap();

    pyskel(&temp)
        .args([
            "create", "--offline", "--templates", "tmpl", "--name", "demo", "--dir", "p", "a",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("undefined variable 'license'"));

    assert!(temp.path().join("p/setup.py").is_file());
    assert!(!temp.path().join("p/README.md").exists());
}

#[test]
fn test_missing_template_is_not_found() {
    let temp = TempDir::new().unwrap();
    let tmpl = temp.path().join("tmpl");
    fs::create_dir(&tmpl).unwrap();

    pyskel(&temp)
        .args([
            "create", "--offline", "--templates", "tmpl", "--name", "demo", "--dir", "p", "a",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("setup.py.tmpl"));
}

#[test]
fn test_missing_templates_directory() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args([
            "create", "--offline", "--templates", "nope", "--name", "demo", "--dir", "p", "a",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("templates directory not found"));
}

#[test]
fn test_unreadable_config_exits_with_config_code() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[identity\nauthor =").unwrap();

    pyskel(&temp)
        .arg("templates")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_create_without_files_is_usage_error() {
    let temp = TempDir::new().unwrap();

    pyskel(&temp)
        .args(["create", "--name", "demo", "--dir", "p"])
        .assert()
        .code(2);

    assert!(!temp.path().join("p").exists());
}
