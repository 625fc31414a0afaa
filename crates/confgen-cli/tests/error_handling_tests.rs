//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn confgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("confgen").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path());
    cmd
}

#[test]
fn test_missing_template_exits_3_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("config.h");

    confgen(&dir)
        .arg("materialize")
        .arg(dir.path().join("missing.h.in"))
        .arg("-o")
        .arg(&out)
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read template"))
        .stderr(predicate::str::contains("missing.h.in"));

    assert!(!out.exists());
}

#[test]
fn test_missing_template_to_stdout_writes_nothing() {
    let dir = TempDir::new().unwrap();

    confgen(&dir)
        .arg("materialize")
        .arg(dir.path().join("missing.h.in"))
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unwritable_output_exits_2() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("config.h.in");
    std::fs::write(&template, "#cmakedefine A\n").unwrap();

    confgen(&dir)
        .arg("materialize")
        .arg(&template)
        .arg("-o")
        .arg(dir.path().join("no/such/dir/config.h"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot create output file"));
}

#[test]
fn test_output_same_as_template_is_rejected() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("config.h.in");
    std::fs::write(&template, "#cmakedefine A\n").unwrap();

    confgen(&dir)
        .arg("materialize")
        .arg(&template)
        .arg("-o")
        .arg(&template)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));

    // Template untouched.
    assert_eq!(
        std::fs::read_to_string(&template).unwrap(),
        "#cmakedefine A\n"
    );
}

#[test]
fn test_invalid_substitution_exits_2() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("config.h.in");
    std::fs::write(&template, "").unwrap();

    confgen(&dir)
        .arg("scan")
        .arg(&template)
        .args(["--marker", "#def", "--replacement", "#define"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("contains the marker"));
}

#[test]
fn test_rule_that_reforms_its_marker_exits_2() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("t.in");
    std::fs::write(&template, "aabb\n").unwrap();
    let out = dir.path().join("t.h");

    confgen(&dir)
        .arg("materialize")
        .arg(&template)
        .args(["--marker", "ab", "--replacement", "a", "-o"])
        .arg(&out)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("into the marker 'ab'"));

    assert!(!out.exists());
}

#[test]
fn test_missing_config_file_exits_4() {
    let dir = TempDir::new().unwrap();

    confgen(&dir)
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key_exits_4() {
    let dir = TempDir::new().unwrap();

    confgen(&dir)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_argument_exits_2() {
    let dir = TempDir::new().unwrap();
    confgen(&dir).arg("materialize").assert().code(2);
}
