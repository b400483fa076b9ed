//! Shared test utilities for the symbol-prefs workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`trees`]: preference trees built from `test-fixtures/trees/`
//! - [`project`]: [`TestProject`] builder for a `.prefs/` directory

pub mod project;
pub mod trees;

pub use project::TestProject;
pub use trees::{ROLES_TOML, SAMPLE_TOML, roles_tree, sample_tree};
