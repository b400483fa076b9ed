//! Read-only command implementations: show, get, symbols

use std::path::Path;

use colored::Colorize;
use pref_store::{ActiveSymbols, SymbolTarget};

use crate::error::Result;

/// Run the show command
///
/// Prints the panel view as an indented checklist, or as JSON.
pub fn run_show(root: &Path, json: bool, all: bool) -> Result<()> {
    let mut session = super::open_session(root)?;
    let panel = session.panel()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&panel)?);
        return Ok(());
    }

    if panel.nodes.is_empty() {
        println!("No preferences defined.");
        return Ok(());
    }
    print!("{}", panel.render_text(all));
    Ok(())
}

/// Run the get command
pub fn run_get(root: &Path, symbol: &str) -> Result<()> {
    let mut session = super::open_session(root)?;
    let value = session.value(symbol)?;
    let raw = session.raw_value(symbol)?;

    let state = if value { "on".green().bold() } else { "off".red().bold() };
    if raw && !value {
        println!(
            "{}: {} ({})",
            symbol.cyan(),
            state,
            "raw on, shadowed by a disabled parent".dimmed()
        );
    } else {
        println!("{}: {}", symbol.cyan(), state);
    }
    Ok(())
}

/// Run the symbols command
///
/// Lists the active symbol list of the configured target group, including
/// symbols that no preference manages.
pub fn run_symbols(root: &Path, json: bool) -> Result<()> {
    let settings = super::resolver(root).resolve()?;
    let target = pref_store::DefineSymbolsFile::new(&settings.symbols, &settings.target_group);
    let active = ActiveSymbols::parse(&target.read()?);

    if json {
        let symbols: Vec<&str> = active.iter().collect();
        println!("{}", serde_json::to_string_pretty(&symbols)?);
        return Ok(());
    }

    println!(
        "{} Active symbols ({}):",
        "=>".blue().bold(),
        settings.target_group.cyan()
    );
    if active.is_empty() {
        println!("   (none)");
    }
    for symbol in active.iter() {
        println!("   {} {}", "-".cyan(), symbol);
    }
    Ok(())
}
