//! Init command implementation

use std::path::Path;

use colored::Colorize;
use pref_tree::TreeDefinition;

use crate::error::Result;

/// Run the init command
///
/// Writes `.prefs/config.toml` and a `tree.toml` holding the built-in role
/// tree. Existing files are left alone unless `force` is set.
pub fn run_init(root: &Path, force: bool) -> Result<()> {
    println!(
        "{} Initializing preferences in {}",
        "=>".blue().bold(),
        root.display().to_string().cyan()
    );

    let written = super::resolver(root).init(&TreeDefinition::roles(), force)?;

    if written.is_empty() {
        println!(
            "{} Already initialized. Use {} to overwrite.",
            "WARN".yellow().bold(),
            "--force".cyan()
        );
        return Ok(());
    }

    for path in &written {
        println!("   {} {}", "+".green(), path.display());
    }
    println!("{} Preferences initialized.", "OK".green().bold());
    Ok(())
}
