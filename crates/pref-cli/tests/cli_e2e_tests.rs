//! CLI end-to-end tests that invoke the compiled `prefs` binary.

use std::fs;

use assert_cmd::Command;
use pref_test_utils::{SAMPLE_TOML, TestProject};
use predicates::prelude::*;
use tempfile::TempDir;

/// `prefs` running in `dir` with an empty global config directory.
fn prefs(dir: &std::path::Path, global: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prefs").unwrap();
    cmd.current_dir(dir)
        .env("PREFS_CONFIG_DIR", global.path())
        .env("NO_COLOR", "1")
        .env_remove("PREFS_ROOT");
    cmd
}

fn sample_project() -> TestProject {
    TestProject::new().with_tree(SAMPLE_TOML)
}

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("prefs")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("enable"))
        .stdout(predicate::str::contains("symbols"));
}

#[test]
fn test_init_creates_roles_tree() {
    let project = TestProject::new();
    let global = TempDir::new().unwrap();

    prefs(project.root(), &global)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Preferences initialized"));

    project.assert_prefs_file_contains("tree.toml", "segment = \"JIBBER\"");

    prefs(project.root(), &global)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_commands_outside_project_fail() {
    let dir = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();

    prefs(dir.path(), &global)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("prefs init"));
}

#[test]
fn test_show_hides_children_of_disabled_toggles() {
    let project = sample_project();
    let global = TempDir::new().unwrap();

    prefs(project.root(), &global)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("B - Shadowed when A is off"))
        .stdout(predicate::str::contains("D").not());

    prefs(project.root(), &global)
        .args(["show", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[-] D"));
}

#[test]
fn test_show_json() {
    let project = sample_project();
    let global = TempDir::new().unwrap();

    let output = prefs(project.root(), &global)
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let panel: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(panel["dirty"], false);
    assert_eq!(panel["nodes"][0]["symbol"], "A");
    assert_eq!(panel["nodes"][0]["children"][0]["children"][0]["symbol"], "A_B_D");
}

#[test]
fn test_enable_saves_values_and_symbols() {
    let project = sample_project();
    let global = TempDir::new().unwrap();

    prefs(project.root(), &global)
        .args(["enable", "A_B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ A_B_D"));

    project.assert_prefs_file_contains("values.toml", "A_B = true");
    project.assert_prefs_file_contains("symbols.toml", "standalone = \"A;A_B;A_B_D\"");

    prefs(project.root(), &global)
        .args(["get", "A_B_D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on"));
}

#[test]
fn test_disable_parent_shadows_children() {
    let project = sample_project();
    let global = TempDir::new().unwrap();

    prefs(project.root(), &global)
        .args(["enable", "A_B"])
        .assert()
        .success();
    prefs(project.root(), &global)
        .args(["disable", "A"])
        .assert()
        .success();

    prefs(project.root(), &global)
        .args(["get", "A_B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shadowed"));
    project.assert_prefs_file_contains("symbols.toml", "standalone = \"\"");
}

#[test]
fn test_unknown_symbol_changes_nothing() {
    let project = sample_project();
    let global = TempDir::new().unwrap();

    prefs(project.root(), &global)
        .args(["enable", "A_C", "A_NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A_NOPE"));

    assert!(!project.prefs_dir().join("values.toml").exists());
}

#[test]
fn test_symbols_lists_foreign_entries() {
    let project = sample_project();
    let global = TempDir::new().unwrap();
    project.write_prefs_file("symbols.toml", "standalone = \"LEGACY\"\n");

    prefs(project.root(), &global).arg("save").assert().success();

    let output = prefs(project.root(), &global)
        .args(["symbols", "--json"])
        .output()
        .unwrap();
    let symbols: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(symbols, vec!["LEGACY", "A"]);
}

#[test]
fn test_reset_restores_defaults() {
    let project = sample_project();
    let global = TempDir::new().unwrap();
    project.write_prefs_file("values.toml", "A = false\nA_C = true\n");

    prefs(project.root(), &global).arg("reset").assert().success();

    let values = project.read_prefs_file("values.toml");
    assert!(values.contains("A = true"), "got:\n{values}");
    assert!(values.contains("A_C = false"), "got:\n{values}");
}

#[test]
fn test_runs_from_subdirectory() {
    let project = sample_project();
    let global = TempDir::new().unwrap();
    let nested = project.root().join("src/module");
    fs::create_dir_all(&nested).unwrap();

    prefs(&nested, &global)
        .args(["get", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A"));
}

#[test]
fn test_target_group_from_project_settings() {
    let project = sample_project();
    let global = TempDir::new().unwrap();
    project.write_prefs_file("config.toml", "target_group = \"android\"\n");

    prefs(project.root(), &global).arg("save").assert().success();

    project.assert_prefs_file_contains("symbols.toml", "android = \"A\"");
}
