//! Scenario tests for the load/save protocol against real files
//!
//! Each test plays out one situation a project meets in practice: symbols
//! owned by someone else, hand-edited values, switching target groups.

use std::fs;

use pref_core::{Error, SettingsResolver};
use pref_store::{DefineSymbolsFile, SymbolTarget};
use pref_test_utils::{SAMPLE_TOML, TestProject};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn resolver(project: &TestProject, global: &TempDir) -> SettingsResolver {
    SettingsResolver::with_global_config_dir(project.root(), global.path())
}

#[test]
fn test_foreign_symbols_are_preserved() {
    let project = TestProject::new().with_tree(SAMPLE_TOML);
    let global = TempDir::new().unwrap();
    project.write_prefs_file(
        "symbols.toml",
        "standalone = \"UNITY_POST_PROCESSING;A_C;;ODIN_INSPECTOR\"\n",
    );

    let mut session = resolver(&project, &global)
        .resolve()
        .unwrap()
        .open_session()
        .unwrap();
    let report = session.save().unwrap();

    assert_eq!(report.symbols, "UNITY_POST_PROCESSING;ODIN_INSPECTOR;A");
    assert_eq!(report.added, vec!["A".to_string()]);
    assert_eq!(report.removed, vec!["A_C".to_string()]);
}

#[test]
fn test_other_target_groups_are_untouched() {
    let project = TestProject::new().with_tree(SAMPLE_TOML);
    let global = TempDir::new().unwrap();
    project.write_prefs_file("symbols.toml", "android = \"MOBILE\"\n");

    let settings = resolver(&project, &global).resolve().unwrap();
    settings.open_session().unwrap().save().unwrap();

    let android = DefineSymbolsFile::new(&settings.symbols, "android");
    assert_eq!(android.read().unwrap(), "MOBILE");
    let standalone = DefineSymbolsFile::new(&settings.symbols, "standalone");
    assert_eq!(standalone.read().unwrap(), "A");
}

#[test]
fn test_hand_edited_values_are_picked_up() {
    let project = TestProject::new().with_tree(SAMPLE_TOML);
    let global = TempDir::new().unwrap();
    project.write_prefs_file("values.toml", "A_B = true\nA_B_D = false\n");

    let mut session = resolver(&project, &global)
        .resolve()
        .unwrap()
        .open_session()
        .unwrap();
    assert!(session.value("A_B").unwrap());
    assert!(!session.value("A_B_D").unwrap());
    // No stored value for A, so its default applies
    assert!(session.value("A").unwrap());

    let report = session.save().unwrap();
    assert_eq!(report.symbols, "A;A_B");
}

#[test]
fn test_stale_stored_values_are_ignored() {
    let project = TestProject::new().with_tree(SAMPLE_TOML);
    let global = TempDir::new().unwrap();
    project.write_prefs_file("values.toml", "REMOVED_FEATURE = true\nA_C = true\n");

    let mut session = resolver(&project, &global)
        .resolve()
        .unwrap()
        .open_session()
        .unwrap();
    let report = session.save().unwrap();

    assert_eq!(report.symbols, "A;A_C");
    assert!(!report.symbols.contains("REMOVED_FEATURE"));
}

#[test]
fn test_unknown_symbol_does_not_save() {
    let project = TestProject::new().with_tree(SAMPLE_TOML);
    let global = TempDir::new().unwrap();

    let mut session = resolver(&project, &global)
        .resolve()
        .unwrap()
        .open_session()
        .unwrap();
    let err = session.set("A_Z", true).unwrap_err();

    assert!(matches!(err, Error::UnknownSymbol { ref symbol } if symbol == "A_Z"));
    assert!(!session.is_dirty());
    assert!(!project.prefs_dir().join("values.toml").exists());
}

#[test]
fn test_switching_target_group_moves_symbols() {
    let project = TestProject::new().with_tree(SAMPLE_TOML);
    let global = TempDir::new().unwrap();

    let settings = resolver(&project, &global).resolve().unwrap();
    settings.open_session().unwrap().save().unwrap();

    project.write_prefs_file("config.toml", "target_group = \"ios\"\n");
    let settings = resolver(&project, &global).resolve().unwrap();
    let mut session = settings.open_session().unwrap();
    session.set("A_C", true).unwrap();
    session.save().unwrap();

    let symbols = fs::read_to_string(&settings.symbols).unwrap();
    assert!(symbols.contains("standalone = \"A\""), "got:\n{symbols}");
    assert!(symbols.contains("ios = \"A;A_C\""), "got:\n{symbols}");
}
