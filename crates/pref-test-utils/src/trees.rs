//! Preference tree fixtures.
//!
//! The TOML sources live in `test-fixtures/trees/` at the workspace root so
//! CLI tests can copy the very same files into temporary projects.

use pref_tree::{PreferenceTree, TreeDefinition};

/// `A -> [B, C]`, `B -> [D]`; defaults A = on, B = off, C = off, D = on.
pub const SAMPLE_TOML: &str = include_str!("../../../test-fixtures/trees/sample.toml");

/// The built-in role/tool tree as written by `prefs init`.
pub const ROLES_TOML: &str = include_str!("../../../test-fixtures/trees/roles.toml");

/// Build the sample tree.
///
/// # Panics
/// Panics if the fixture no longer parses.
pub fn sample_tree() -> PreferenceTree {
    build(SAMPLE_TOML)
}

/// Build the role/tool tree.
///
/// # Panics
/// Panics if the fixture no longer parses.
pub fn roles_tree() -> PreferenceTree {
    build(ROLES_TOML)
}

fn build(source: &str) -> PreferenceTree {
    TreeDefinition::parse(source)
        .and_then(|definition| definition.build())
        .unwrap_or_else(|e| panic!("fixture tree failed to build: {e}"))
}
