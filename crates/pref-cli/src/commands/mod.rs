//! Command implementations for pref-cli

pub mod edit;
pub mod init;
pub mod show;

use std::path::Path;

use pref_core::{FileSession, SettingsResolver};

use crate::error::Result;

/// Overrides the global settings directory; used to keep tests hermetic
pub const CONFIG_DIR_ENV: &str = "PREFS_CONFIG_DIR";

/// Settings resolver for `root`, honouring [`CONFIG_DIR_ENV`].
pub fn resolver(root: &Path) -> SettingsResolver {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => SettingsResolver::with_global_config_dir(root, dir),
        None => SettingsResolver::new(root),
    }
}

/// Resolve settings and open a loaded session for `root`.
pub fn open_session(root: &Path) -> Result<FileSession> {
    let settings = resolver(root).resolve()?;
    tracing::debug!(?settings, "Resolved settings");
    let mut session = settings.open_session()?;
    session.ensure_loaded()?;
    Ok(session)
}

pub use edit::{run_reset, run_save, run_set};
pub use init::run_init;
pub use show::{run_get, run_show, run_symbols};
