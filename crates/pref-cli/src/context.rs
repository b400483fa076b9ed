//! Project root detection
//!
//! Commands work from any subdirectory of a project, the way git does:
//! the nearest ancestor containing `.prefs/` is the project root.

use std::path::{Path, PathBuf};

use pref_core::settings::PREFS_DIR;

use crate::error::{CliError, Result};

/// Walk up from `start` to the first directory that contains `.prefs/`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PREFS_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Root for commands that need an existing project.
///
/// An explicit `--root` wins; otherwise the root is detected from `cwd`.
pub fn require_project_root(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    find_project_root(cwd).ok_or_else(|| {
        CliError::user(format!(
            "No {PREFS_DIR}/ directory found in {} or any parent. Run 'prefs init' first.",
            cwd.display()
        ))
    })
}
