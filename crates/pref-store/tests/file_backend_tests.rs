//! File-backed store and symbol target tests

use assert_fs::prelude::*;
use predicates::prelude::*;
use pref_store::{
    DefineSymbolsFile, Error, PreferenceStore, SymbolTarget, TomlPreferenceStore,
};

#[test]
fn test_toml_store_reads_existing_values() {
    let temp = assert_fs::TempDir::new().unwrap();
    let values = temp.child("values.toml");
    values
        .write_str("ROLE = true\nROLE_ARTIST = false\n")
        .unwrap();

    let store = TomlPreferenceStore::open(values.path()).unwrap();

    assert!(store.get_bool("ROLE", false).unwrap());
    assert!(!store.get_bool("ROLE_ARTIST", true).unwrap());
    assert!(store.get_bool("ROLE_TESTER", true).unwrap());
}

#[test]
fn test_toml_store_persists_flat_table() {
    let temp = assert_fs::TempDir::new().unwrap();
    let values = temp.child(".prefs/values.toml");

    let mut store = TomlPreferenceStore::open(values.path()).unwrap();
    store.set_bool("ROLE", true).unwrap();
    store.set_bool("ROLE_ARTIST", false).unwrap();
    store.flush().unwrap();

    values.assert(predicate::str::contains("ROLE = true"));
    values.assert(predicate::str::contains("ROLE_ARTIST = false"));
}

#[test]
fn test_toml_store_rejects_non_boolean_values() {
    let temp = assert_fs::TempDir::new().unwrap();
    let values = temp.child("values.toml");
    values.write_str("ROLE = \"yes\"\n").unwrap();

    let err = TomlPreferenceStore::open(values.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("values.toml"));
}

#[test]
fn test_define_symbols_missing_file_reads_empty() {
    let temp = assert_fs::TempDir::new().unwrap();
    let target = DefineSymbolsFile::new(temp.child("symbols.toml").path(), "standalone");
    assert_eq!(target.read().unwrap(), "");
}

#[test]
fn test_define_symbols_groups_are_independent() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("symbols.toml");
    file.write_str("android = \"MOBILE\"\n").unwrap();

    let mut standalone = DefineSymbolsFile::new(file.path(), "standalone");
    standalone.write("ROLE;ROLE_ARTIST").unwrap();

    let android = DefineSymbolsFile::new(file.path(), "android");
    assert_eq!(android.read().unwrap(), "MOBILE");
    assert_eq!(standalone.read().unwrap(), "ROLE;ROLE_ARTIST");
    file.assert(predicate::str::contains("standalone = \"ROLE;ROLE_ARTIST\""));
}
