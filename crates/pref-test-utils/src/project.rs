//! [`TestProject`] builder for symbol-prefs test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with a `.prefs/` folder.
///
/// # Example
///
/// ```rust,no_run
/// use pref_test_utils::{SAMPLE_TOML, TestProject};
///
/// let project = TestProject::new().with_tree(SAMPLE_TOML);
/// project.write_prefs_file("values.toml", "A = false\n");
/// project.assert_prefs_file_contains("values.toml", "A = false");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `<root>/.prefs`
    pub fn prefs_dir(&self) -> PathBuf {
        self.root().join(".prefs")
    }

    /// Write `.prefs/tree.toml` with the given definition.
    pub fn with_tree(self, definition: &str) -> Self {
        self.write_prefs_file("tree.toml", definition);
        self
    }

    /// Write a file under `.prefs/`, creating the directory if needed.
    pub fn write_prefs_file(&self, name: &str, content: &str) {
        let dir = self.prefs_dir();
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("TestProject: failed to create {}: {e}", dir.display()));
        fs::write(dir.join(name), content)
            .unwrap_or_else(|e| panic!("TestProject: failed to write {name}: {e}"));
    }

    /// Read a file under `.prefs/`.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_prefs_file(&self, name: &str) -> String {
        let path = self.prefs_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that the file under `.prefs/` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_prefs_file_contains(&self, name: &str, content: &str) {
        let file_content = self.read_prefs_file(name);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual:\n{}",
            name,
            content,
            file_content
        );
    }
}
