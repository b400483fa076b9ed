//! End-to-end integration test for the full flow
//!
//! init -> resolve settings -> load tree and values -> edit -> save -> reopen.

use pref_core::SettingsResolver;
use pref_store::{DefineSymbolsFile, SymbolTarget};
use pref_test_utils::TestProject;
use pref_tree::TreeDefinition;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn init_roles_project() -> (TestProject, TempDir, SettingsResolver) {
    let project = TestProject::new();
    let global = TempDir::new().unwrap();
    let resolver = SettingsResolver::with_global_config_dir(project.root(), global.path());
    resolver.init(&TreeDefinition::roles(), false).unwrap();
    (project, global, resolver)
}

#[test]
fn test_init_then_enable_role_tools() {
    let (project, _global, resolver) = init_roles_project();
    let settings = resolver.resolve().unwrap();

    let mut session = settings.open_session().unwrap();
    session.set("ROLE", true).unwrap();
    session.set("ROLE_ARTIST", true).unwrap();
    session.set("ROLE_ARTIST_TOOL2", true).unwrap();
    session.set("ROLE_TESTER_TOOL1", true).unwrap();
    let report = session.save().unwrap();

    // TESTER itself is off, so its tool stays out of the list
    assert_eq!(report.symbols, "ROLE;ROLE_ARTIST;ROLE_ARTIST_TOOL2");
    assert_eq!(report.written, 28);

    let target = DefineSymbolsFile::new(&settings.symbols, &settings.target_group);
    assert_eq!(target.read().unwrap(), "ROLE;ROLE_ARTIST;ROLE_ARTIST_TOOL2");
    project.assert_prefs_file_contains("values.toml", "ROLE_TESTER_TOOL1 = true");
}

#[test]
fn test_values_survive_reopen() {
    let (_project, _global, resolver) = init_roles_project();
    let settings = resolver.resolve().unwrap();

    {
        let mut session = settings.open_session().unwrap();
        session.set("ROLE_JIBBER_TOOL6", true).unwrap();
        session.save().unwrap();
    }

    let mut session = settings.open_session().unwrap();
    assert!(session.raw_value("ROLE_JIBBER_TOOL6").unwrap());
    assert!(!session.value("ROLE_JIBBER_TOOL6").unwrap());

    session.set("ROLE", true).unwrap();
    session.set("ROLE_JIBBER", true).unwrap();
    assert!(session.value("ROLE_JIBBER_TOOL6").unwrap());
}

#[test]
fn test_panel_of_initialized_project() {
    let (_project, _global, resolver) = init_roles_project();
    let mut session = resolver.resolve().unwrap().open_session().unwrap();

    let panel = session.panel().unwrap();
    assert_eq!(panel.nodes.len(), 1);
    let roles = &panel.nodes[0];
    assert_eq!(roles.symbol, "ROLE");
    let names: Vec<&str> = roles.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Manager", "Designer", "Artist", "Programmer", "Tester", "Jibber"]
    );
    assert_eq!(roles.children[5].children.len(), 6);

    let json = serde_json::to_value(&panel).unwrap();
    assert_eq!(json["nodes"][0]["children"][2]["children"][0]["symbol"], "ROLE_ARTIST_TOOL1");
}
