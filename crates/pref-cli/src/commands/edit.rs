//! Mutating command implementations: enable/disable, reset, save
//!
//! The CLI has no long-lived panel, so every edit is saved immediately.

use std::path::Path;

use colored::Colorize;
use pref_core::SaveReport;

use crate::error::Result;

/// Run the enable/disable commands
///
/// Every symbol is applied before anything is saved, so an unknown symbol
/// aborts the whole command without touching the files.
pub fn run_set(root: &Path, symbols: &[String], value: bool) -> Result<()> {
    let mut session = super::open_session(root)?;
    let verb = if value { "Enabling" } else { "Disabling" };

    for symbol in symbols {
        println!("{} {} {}", "=>".blue().bold(), verb, symbol.cyan());
        if !session.set(symbol, value)? {
            println!("   {} already {}", "-".dimmed(), if value { "on" } else { "off" });
        }
        if value && !session.value(symbol)? {
            println!(
                "   {} {} stays inactive until its parents are enabled",
                "WARN".yellow().bold(),
                symbol
            );
        }
    }

    let report = session.save()?;
    print_report(&report);
    Ok(())
}

/// Run the reset command
pub fn run_reset(root: &Path) -> Result<()> {
    println!("{} Restoring defaults", "=>".blue().bold());
    let mut session = super::open_session(root)?;
    session.reset_to_defaults()?;
    let report = session.save()?;
    print_report(&report);
    Ok(())
}

/// Run the save command
///
/// Useful after editing `values.toml` by hand or switching target groups.
pub fn run_save(root: &Path) -> Result<()> {
    println!("{} Saving preferences", "=>".blue().bold());
    let mut session = super::open_session(root)?;
    let report = session.save()?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &SaveReport) {
    for symbol in &report.added {
        println!("   {} {}", "+".green(), symbol);
    }
    for symbol in &report.removed {
        println!("   {} {}", "-".red(), symbol);
    }
    println!(
        "{} Saved {} preferences.",
        "OK".green().bold(),
        report.written
    );
}
