//! Symbol Preferences CLI
//!
//! The command-line host for preference trees: shows the tree, edits
//! toggles and keeps the active build-symbol list in sync.

mod cli;
mod commands;
mod context;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.root),
        None => {
            // No command provided - show help hint
            println!("{} Symbol Preferences CLI", "prefs".green().bold());
            println!();
            println!("Run {} for available commands.", "prefs --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, root: Option<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let explicit = root.as_deref();

    match cmd {
        Commands::Init { force } => {
            let root = explicit.unwrap_or(cwd.as_path());
            commands::run_init(root, force)
        }
        Commands::Show { json, all } => commands::run_show(&project(explicit, &cwd)?, json, all),
        Commands::Get { symbol } => commands::run_get(&project(explicit, &cwd)?, &symbol),
        Commands::Enable { symbols } => commands::run_set(&project(explicit, &cwd)?, &symbols, true),
        Commands::Disable { symbols } => {
            commands::run_set(&project(explicit, &cwd)?, &symbols, false)
        }
        Commands::Reset => commands::run_reset(&project(explicit, &cwd)?),
        Commands::Save => commands::run_save(&project(explicit, &cwd)?),
        Commands::Symbols { json } => commands::run_symbols(&project(explicit, &cwd)?, json),
    }
}

fn project(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    context::require_project_root(explicit, cwd)
}
