use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("seo-guard"))
}

#[test]
fn init_creates_a_config_file() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(".seo-guard.toml"));

    let content = fs::read_to_string(dir.path().join(".seo-guard.toml")).unwrap();
    assert!(content.contains("[scan]"));
    assert!(content.contains("strict"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".seo-guard.toml"), "strict = true\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // Existing file untouched
    let content = fs::read_to_string(dir.path().join(".seo-guard.toml")).unwrap();
    assert_eq!(content, "strict = true\n");
}

#[test]
fn init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".seo-guard.toml"), "strict = true\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("init")
        .arg("--force")
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join(".seo-guard.toml")).unwrap();
    assert!(content.contains("[scan]"));
}

#[test]
fn init_honors_a_custom_output_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("configs").join("seo.toml");
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    assert!(path.exists());
}
